pub mod types;
pub mod styling;
pub mod interactions;
pub mod rendering;

// Re-export the appearance types and renderers for easy access
pub use types::*;
pub use styling::*;
pub use rendering::*;
