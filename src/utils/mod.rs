//! Small cross-target helpers.

/// Monotonic instant that also works under wasm (std::time::Instant panics
/// there). web-time re-exports std on native, so this costs nothing.
pub(crate) use web_time::Instant as AppInstant;
