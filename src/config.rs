//! Demo configuration with layered loading
//!
//! Configuration is loaded from multiple sources (lowest to highest priority):
//! 1. Compiled defaults
//! 2. `tweening.ron` file (if exists)
//! 3. Environment variables prefixed with `TWEENING_`
//!
//! Example environment variable: `TWEENING_SCENE__FRAME_RATE=60`

use serde::{Deserialize, Serialize};
use tweening_core::{Easing, TweenOptions};

/// Main demo configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DemoConfig {
    #[serde(default)]
    pub tween: TweenConfig,

    #[serde(default)]
    pub scene: SceneConfig,
}

/// Behaviour shared by every tween in the scene
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TweenConfig {
    /// Halve constructor durations like the original tweening scripts
    pub legacy_halved_duration: bool,
    /// Wrap around at the end instead of stopping
    pub looping: bool,
    /// Reverse direction every time a tween finishes
    pub yoyo: bool,
}

impl Default for TweenConfig {
    fn default() -> Self {
        Self {
            legacy_halved_duration: true,
            looping: false,
            yoyo: false,
        }
    }
}

impl TweenConfig {
    pub fn options(&self) -> TweenOptions {
        TweenOptions {
            legacy_halved_duration: self.legacy_halved_duration,
            looping: self.looping,
            ..TweenOptions::default()
        }
    }
}

/// The moving-object scene
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneConfig {
    /// Simulated frames per second
    pub frame_rate: f64,
    /// Number of frames to simulate
    pub frames: u32,
    /// Restart all tweens every N frames (0 = never)
    pub restart_every: u32,
    /// Duration passed to every tween
    pub duration: f64,
    pub start_x: f64,
    pub start_y: f64,
    pub target_x: f64,
    pub target_y: f64,
    pub x_easing: Easing,
    pub y_easing: Easing,
    pub color_easing: Easing,
    pub radius_easing: Easing,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            frame_rate: 50.0,
            frames: 120,
            restart_every: 0,
            duration: 2.0,
            start_x: 50.0,
            start_y: 30.0,
            target_x: 360.0,
            target_y: 130.0,
            x_easing: Easing::StrongEaseInOut,
            y_easing: Easing::BounceEaseInOut,
            color_easing: Easing::StrongEaseInOut,
            radius_easing: Easing::StrongEaseInOut,
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod loading {
    use anyhow::{Context, Result};
    use config::builder::DefaultState;
    use config::{Config, ConfigBuilder, Environment, File, FileFormat};

    use super::DemoConfig;

    impl DemoConfig {
        /// Load configuration with layered priority:
        /// 1. Compiled defaults (lowest priority)
        /// 2. `tweening.ron` file (if exists)
        /// 3. Environment variables prefixed with `TWEENING_` (highest priority)
        pub fn load() -> Result<Self> {
            let builder = defaults()?
                // Layer 2: Config file (optional, won't error if missing)
                .add_source(
                    File::with_name("tweening")
                        .format(FileFormat::Ron)
                        .required(false),
                )
                // Layer 3: Environment variables (TWEENING_TWEEN__LOOPING, etc.)
                .add_source(
                    Environment::with_prefix("TWEENING")
                        .prefix_separator("_")
                        .separator("__"),
                );

            finish(builder)
        }

        /// Load configuration from RON text layered over the defaults.
        pub fn from_ron(text: &str) -> Result<Self> {
            let builder = defaults()?.add_source(File::from_str(text, FileFormat::Ron));
            finish(builder)
        }
    }

    /// Layer 1: Compiled defaults
    fn defaults() -> Result<ConfigBuilder<DefaultState>> {
        let builder = Config::builder()
            .set_default("tween.legacy_halved_duration", true)?
            .set_default("tween.looping", false)?
            .set_default("tween.yoyo", false)?
            .set_default("scene.frame_rate", 50.0)?
            .set_default("scene.frames", 120_i64)?
            .set_default("scene.restart_every", 0_i64)?
            .set_default("scene.duration", 2.0)?
            .set_default("scene.start_x", 50.0)?
            .set_default("scene.start_y", 30.0)?
            .set_default("scene.target_x", 360.0)?
            .set_default("scene.target_y", 130.0)?
            .set_default("scene.x_easing", "strongEaseInOut")?
            .set_default("scene.y_easing", "bounceEaseInOut")?
            .set_default("scene.color_easing", "strongEaseInOut")?
            .set_default("scene.radius_easing", "strongEaseInOut")?;
        Ok(builder)
    }

    fn finish(builder: ConfigBuilder<DefaultState>) -> Result<DemoConfig> {
        let config = builder.build().context("Failed to build configuration")?;

        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }
}
