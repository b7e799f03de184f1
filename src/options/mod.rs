//! Centralized camera-rig and scene options with TOML preset support.
//!
//! All tweakable settings (camera projection, swoop, scroll dolly, pointer
//! parallax, smoothing, sky, water, lights) are consolidated here. Options
//! serialize to/from TOML for presets, and [`Options::json_schema`] describes
//! the slider ranges a debug panel should expose.

mod camera;
mod environment;
mod parallax;
mod scroll;
mod smoothing;
mod swoop;

use std::path::Path;

pub use camera::CameraOptions;
pub use environment::{LightOptions, SkyOptions, WaterOptions};
pub use parallax::ParallaxOptions;
use schemars::JsonSchema;
pub use scroll::{ScrollAnchorOptions, ScrollOptions, ScrollRange};
use serde::{Deserialize, Serialize};
pub use smoothing::{SmoothingMode, SmoothingOptions};
pub use swoop::SwoopOptions;

use crate::error::VantageError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[scroll]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Camera projection and opening pose.
    pub camera: CameraOptions,
    /// Intro swoop parameters.
    pub swoop: SwoopOptions,
    /// Scroll dolly anchors and range.
    pub scroll: ScrollOptions,
    /// Pointer parallax strength.
    pub parallax: ParallaxOptions,
    /// Compositor smoothing.
    pub smoothing: SmoothingOptions,
    /// Sky dome parameters.
    pub sky: SkyOptions,
    /// Water plane parameters.
    pub water: WaterOptions,
    /// Scene lights.
    pub light: LightOptions,
}

impl Options {
    /// Generate JSON Schema describing the panel-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse options from TOML text. Missing fields use defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, VantageError> {
        toml::from_str(content)
            .map_err(|e| VantageError::OptionsParse(e.to_string()))
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, VantageError> {
        let content = std::fs::read_to_string(path).map_err(VantageError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), VantageError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| VantageError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(VantageError::Io)?;
        }
        std::fs::write(path, content).map_err(VantageError::Io)
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
    use crate::util::easing::EasingFunction;

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
[swoop]
duration_secs = 2.0

[scroll.range]
kind = 'pixels'
px = 1000.0
";
        let opts = Options::from_toml_str(toml_str).unwrap();
        assert_eq!(opts.swoop.duration_secs, 2.0);
        assert_eq!(opts.scroll.range, ScrollRange::Pixels { px: 1000.0 });
        // Everything else should be default
        assert_eq!(opts.swoop.target, [-5.0, 2.0, 8.0]);
        assert_eq!(opts.swoop.easing, EasingFunction::SwoopBlend);
        assert_eq!(opts.parallax.multiplier, 1.5);
        assert_eq!(opts.smoothing.mode, SmoothingMode::TimeBased);
    }

    #[test]
    fn malformed_toml_is_an_options_error() {
        let err = Options::from_toml_str("[swoop]\nduration_secs = 'slow'")
            .unwrap_err();
        assert!(matches!(err, VantageError::OptionsParse(_)));
    }

    #[test]
    fn scroll_range_resolves_against_viewport() {
        assert_eq!(ScrollRange::default().resolve(900.0), 1800.0);
        assert_eq!(ScrollRange::Pixels { px: 1000.0 }.resolve(900.0), 1000.0);
    }

    #[test]
    fn save_load_and_list_presets() {
        let dir = std::env::temp_dir()
            .join(format!("vantage-presets-{}", std::process::id()));
        let mut opts = Options::default();
        opts.sky.elevation = 12.5;
        opts.save(&dir.join("dusk.toml")).unwrap();
        opts.save(&dir.join("dawn.toml")).unwrap();

        let loaded = Options::load(&dir.join("dusk.toml")).unwrap();
        assert_eq!(loaded, opts);
        assert_eq!(Options::list_presets(&dir), vec!["dawn", "dusk"]);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        for section in ["camera", "swoop", "parallax", "sky", "water", "light"]
        {
            assert!(props.contains_key(section), "missing {section}");
        }

        let sky = &props["sky"]["properties"];
        assert_eq!(sky["elevation"]["minimum"], 0.0);
        assert_eq!(sky["elevation"]["maximum"], 90.0);
        assert_eq!(sky["azimuth"]["minimum"], -180.0);
        assert!(sky.get("turbidity").is_none());

        let water = &props["water"]["properties"];
        assert_eq!(water["distortion_scale"]["maximum"], 8.0);
        assert!(water.get("level").is_none());

        let light = &props["light"]["properties"];
        assert_eq!(light["key_y"]["minimum"], 0.0);
        assert!(light.get("fill_position").is_none());
    }
}
