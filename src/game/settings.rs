use std::io::ErrorKind;

use serde::{Deserialize, Serialize};

pub const MIN_FACE_SIZE: usize = 1;
pub const MAX_FACE_SIZE: usize = 64;

/// Boot-time settings for a game. The engine itself trusts its inputs; range
/// checking happens here, at the config boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CubeSettings {
    pub face_size: usize,
}

impl Default for CubeSettings {
    fn default() -> Self {
        Self { face_size: 4 }
    }
}

impl CubeSettings {
    pub fn validate(&self) -> Result<(), String> {
        if self.face_size < MIN_FACE_SIZE || self.face_size > MAX_FACE_SIZE {
            return Err(format!(
                "Face size must be between {} and {}",
                MIN_FACE_SIZE, MAX_FACE_SIZE
            ));
        }
        Ok(())
    }

    pub fn to_yaml(&self) -> Result<String, String> {
        serde_yaml_ng::to_string(self).map_err(|e| format!("Failed to serialize settings: {}", e))
    }

    pub fn from_yaml(content: &str) -> Result<Self, String> {
        let settings: Self = serde_yaml_ng::from_str(content)
            .map_err(|e| format!("Failed to deserialize settings: {}", e))?;
        settings
            .validate()
            .map_err(|e| format!("Settings validation error: {}", e))?;
        Ok(settings)
    }

    /// Loads settings from a YAML file; a missing file yields the defaults.
    pub fn from_yaml_file(path: &str) -> Result<Self, String> {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::from_yaml(&content),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(format!("Failed to read settings file {}: {}", path, e)),
        }
    }
}
