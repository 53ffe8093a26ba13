use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Display", inline)]
#[serde(default)]
/// Display toggles and structure scaling.
pub struct DisplayOptions {
    /// Whether to render bond cylinders.
    #[schemars(title = "Show Bonds")]
    pub show_bonds: bool,
    /// Multiplier applied to every atom's element display radius.
    #[schemars(title = "Atom Scale", range(min = 0.05, max = 2.0), extend("step" = 0.05))]
    pub atom_scale: f32,
    /// Bond cylinder cross-section radius in angstroms.
    #[schemars(title = "Bond Radius", range(min = 0.01, max = 0.5), extend("step" = 0.01))]
    pub bond_radius: f32,
    /// Whether the molecule chain plays automatically.
    #[schemars(title = "Animate")]
    pub animate: bool,
    /// Animation-time increment per frame.
    #[schemars(title = "Animation Speed", range(min = 0.0001, max = 0.05), extend("step" = 0.0001))]
    pub animation_speed: f32,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            show_bonds: true,
            atom_scale: 0.5,
            bond_radius: 0.1,
            animate: false,
            animation_speed: 0.002,
        }
    }
}
