//! Configuration module for the dashboard application.

// Can all be private now because we have a public re-export.
mod debug;

// Public
pub mod assets;
pub mod constants;

// Can't be private because we don't re-export it
pub mod plot;

// Re-export commonly used items
pub use assets::{ASSET_COUNT, CATALOG};
pub use debug::DF;
