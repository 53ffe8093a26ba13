//! Centralized viewer options with TOML preset support.
//!
//! All tweakable settings (display toggles, colors, camera, lighting) are
//! consolidated here. Options serialize to/from TOML so view presets can
//! be stored on disk and applied at startup.

mod camera;
mod colors;
mod display;
mod lighting;

use std::path::Path;

pub use camera::CameraOptions;
pub use colors::ColorOptions;
pub use display::DisplayOptions;
pub use lighting::LightingOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::MolvizError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[display]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Display toggles and structure scaling.
    pub display: DisplayOptions,
    /// Color palette options.
    #[schemars(skip)]
    pub colors: ColorOptions,
    /// Camera projection and framing parameters.
    pub camera: CameraOptions,
    /// Lighting parameters.
    pub lighting: LightingOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Fails when the file cannot be read or is not valid TOML.
    pub fn load(path: &Path) -> Result<Self, MolvizError> {
        let content =
            std::fs::read_to_string(path).map_err(MolvizError::Io)?;
        toml::from_str(&content)
            .map_err(|e| MolvizError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Fails when serialization or the write fails.
    pub fn save(&self, path: &Path) -> Result<(), MolvizError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| MolvizError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(MolvizError::Io)?;
        }
        std::fs::write(path, content).map_err(MolvizError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[display]
atom_scale = 0.8
";
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.display.atom_scale, 0.8);
        // Everything else should be default
        assert!(opts.display.show_bonds);
        assert_eq!(opts.display.bond_radius, 0.1);
        assert_eq!(opts.display.animation_speed, 0.002);
        assert_eq!(opts.camera.fovy, 50.0);
        assert_eq!(opts.colors.bond_color, [0.8, 0.8, 0.8, 1.0]);
    }

    #[test]
    fn three_point_light_rig_geometry() {
        let lighting = LightingOptions::default();
        let [key, fill, back] = lighting.light_positions();
        // Key light at 45 degrees, distance 8.
        assert!((key[0] - 8.0 * 0.5_f32.sqrt()).abs() < 1e-4);
        assert_eq!(key[1], 0.0);
        // Fill light opposite the key, twice as far.
        assert!((fill[0] + 2.0 * key[0]).abs() < 1e-4);
        assert!((fill[2] + 2.0 * key[2]).abs() < 1e-4);
        // Back light above and behind.
        assert_eq!(back, [0.0, 12.0, -8.0, 1.0]);
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        // UI-exposed sections should be present
        assert!(props.contains_key("display"));
        assert!(props.contains_key("camera"));
        assert!(props.contains_key("lighting"));

        // Skipped sections should be absent
        assert!(!props.contains_key("colors"));

        // Display should have exposed fields
        let display = &props["display"]["properties"];
        assert!(display.get("show_bonds").is_some());
        assert!(display.get("atom_scale").is_some());

        // Lighting exposes the sliders but not the raw rig parameters
        let lighting = &props["lighting"]["properties"];
        assert!(lighting.get("shininess").is_some());
        assert!(lighting.get("distance_factor").is_none());
    }

    #[test]
    fn save_load_round_trip_and_preset_listing() {
        let dir = std::env::temp_dir()
            .join("molviz-options-tests")
            .join(std::process::id().to_string());
        let _ = std::fs::remove_dir_all(&dir);

        let mut opts = Options::default();
        opts.display.bond_radius = 0.33;
        opts.save(&dir.join("thin_bonds.toml")).unwrap();
        opts.save(&dir.join("other.toml")).unwrap();

        let loaded = Options::load(&dir.join("thin_bonds.toml")).unwrap();
        assert_eq!(loaded, opts);

        assert_eq!(
            Options::list_presets(&dir),
            vec!["other".to_owned(), "thin_bonds".to_owned()]
        );

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
