// Shared types
pub mod types;

// Pure page-snapshot tools
pub mod clean;
pub mod export;
pub mod performance;
pub mod summary;
