use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Parallax", inline)]
#[serde(default)]
/// Pointer parallax layered on top of the scroll position.
pub struct ParallaxOptions {
    /// World units of offset per unit of normalized pointer travel.
    #[schemars(title = "Multiplier", range(min = 0.0, max = 5.0), extend("step" = 0.1))]
    pub multiplier: f32,
}

impl Default for ParallaxOptions {
    fn default() -> Self {
        Self { multiplier: 1.5 }
    }
}
