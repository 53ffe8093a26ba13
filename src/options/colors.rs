use serde::{Deserialize, Serialize};

/// Color palette options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ColorOptions {
    /// RGBA color of every bond cylinder.
    pub bond_color: [f32; 4],
    /// RGBA clear color behind the scene.
    pub background: [f32; 4],
}

impl Default for ColorOptions {
    fn default() -> Self {
        Self {
            bond_color: [0.8, 0.8, 0.8, 1.0],
            background: [0.0, 0.0, 0.0, 1.0],
        }
    }
}
