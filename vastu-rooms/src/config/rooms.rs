//! Main RoomsConfig and conversion methods.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::pathfinding::{AStarPathfinder, PathfindingConfig};

use super::error::ConfigLoadError;
use super::pathfinding::PathfindingSection;

/// Full VastuRooms configuration loaded from YAML
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct RoomsConfig {
    /// Pathfinding settings
    #[serde(default)]
    pub pathfinding: PathfindingSection,
}

impl RoomsConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigLoadError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigLoadError::Io(e.to_string()))?;
        Self::from_yaml(&contents)
    }

    /// Load from default config path (configs/rooms.yaml)
    pub fn load_default() -> Result<Self, ConfigLoadError> {
        let path = Path::new("configs/rooms.yaml");
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        serde_yaml::from_str(yaml).map_err(|e| ConfigLoadError::Parse(e.to_string()))
    }

    /// Convert to a validated PathfindingConfig
    pub fn to_pathfinding_config(&self) -> Result<PathfindingConfig, ConfigLoadError> {
        let config = self.pathfinding.to_pathfinding_config();
        config
            .validate()
            .map_err(|e| ConfigLoadError::Invalid(e.to_string()))?;
        Ok(config)
    }

    /// Create a pathfinder using these settings as its defaults
    pub fn pathfinder(&self) -> Result<AStarPathfinder, ConfigLoadError> {
        Ok(AStarPathfinder::new(self.to_pathfinding_config()?))
    }
}
