use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Lighting", inline)]
#[serde(default)]
/// Phong lighting parameters consumed by the external render layer.
pub struct LightingOptions {
    /// RGBA ambient color.
    #[schemars(skip)]
    pub ambient: [f32; 4],
    /// RGBA diffuse color.
    #[schemars(skip)]
    pub diffuse: [f32; 4],
    /// RGBA specular color.
    #[schemars(skip)]
    pub specular: [f32; 4],
    /// Specular exponent.
    #[schemars(title = "Shininess", range(min = 0.0, max = 150.0), extend("step" = 1.0))]
    pub shininess: f32,
    /// Per-face instead of per-vertex normals.
    #[schemars(title = "Flat Shading")]
    pub flat_shading: bool,
    /// Distance of the light rig from the subject.
    #[schemars(skip)]
    pub distance_factor: f32,
    /// Azimuth of the key light, multiplied by pi.
    #[schemars(skip)]
    pub key_light_angle: f32,
}

impl Default for LightingOptions {
    fn default() -> Self {
        Self {
            ambient: [0.4, 0.4, 0.4, 1.0],
            diffuse: [0.5, 0.5, 0.5, 1.0],
            specular: [0.0, 0.0, 0.0, 1.0],
            shininess: 10.0,
            flat_shading: false,
            distance_factor: 8.0,
            key_light_angle: 0.25,
        }
    }
}

impl LightingOptions {
    /// Homogeneous positions of the three-point light rig: a key light at
    /// the configured angle, a fill light opposite and twice as far (to
    /// soften shadows), and a back light above-behind for rim separation.
    #[must_use]
    pub fn light_positions(&self) -> [[f32; 4]; 3] {
        let d = self.distance_factor;
        let angle = std::f32::consts::PI * self.key_light_angle;
        let (sin, cos) = angle.sin_cos();
        [
            [d * cos, 0.0, d * sin, 1.0],
            [-d * cos * 2.0, 0.0, -d * sin * 2.0, 1.0],
            [0.0, d * 1.5, -d, 1.0],
        ]
    }
}
