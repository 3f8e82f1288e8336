//! Debugging feature flags.

#[allow(dead_code)]
pub struct LogFlags {
    /// Emit a line every time the user regenerates the snapshot.
    pub log_refresh_events: bool,

    /// Log snapshot generation timings (micros).
    pub log_performance: bool,

    /// Log catalog summary and seed on startup.
    pub log_startup: bool,

    /// Log market table sort changes
    pub log_table_sorting: bool,
}

pub const DF: LogFlags = LogFlags {
    log_refresh_events: true,
    log_startup: true,

    log_performance: false,
    log_table_sorting: false,
};
