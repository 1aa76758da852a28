// Thu Aug 27 2026 - Alex

pub mod format;

pub use format::ResultFormatter;
