//! Unified configuration loading for VastuRooms.
//!
//! Loads all configuration from a single YAML file.

mod defaults;
mod error;
mod pathfinding;
mod rooms;

// Re-export main types
pub use error::ConfigLoadError;
pub use rooms::RoomsConfig;

// Re-export section types
pub use pathfinding::PathfindingSection;
