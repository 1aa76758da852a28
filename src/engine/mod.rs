// Thu Aug 27 2026 - Alex

pub mod coordinator;
pub mod core;

pub use coordinator::MergeCoordinator;
pub use core::Census;
