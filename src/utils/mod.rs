// Thu Aug 27 2026 - Alex

pub mod logging;
pub mod testing;

pub use logging::LoggingUtils;
