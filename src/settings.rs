//! World settings
//!
//! Defaults reproduce the reference sandbox. Settings can be loaded from JSON
//! so a host can tune gravity, substeps and material without recompiling.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{Result, SimError};
use crate::sim::Friction;

/// Physical material shared by every spawned body
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Material {
    pub density: f64,
    pub thickness: f64,
    pub friction: Friction,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            density: DENSITY,
            thickness: THICKNESS,
            friction: Friction {
                r#static: STATIC_FRICTION,
                dynamic: DYNAMIC_FRICTION,
            },
        }
    }
}

/// Simulation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldSettings {
    /// Force added to every body each substep
    pub gravity: DVec2,
    /// Substeps per `World::step`
    pub sub_steps: u32,
    /// Host tick cadence, used by `FrameClock`
    pub frames_per_second: f64,
    pub material: Material,
    pub circle_restitution: f64,
    pub rectangle_restitution: f64,
    /// Seed for palette color selection
    pub seed: u64,
}

impl Default for WorldSettings {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            sub_steps: SUB_STEPS,
            frames_per_second: FRAMES_PER_SECOND,
            material: Material::default(),
            circle_restitution: CIRCLE_RESTITUTION,
            rectangle_restitution: RECTANGLE_RESTITUTION,
            seed: 0,
        }
    }
}

impl WorldSettings {
    /// Settings with gravity switched off (free-flight tests, tooling)
    pub fn weightless() -> Self {
        Self {
            gravity: DVec2::ZERO,
            ..Self::default()
        }
    }

    /// Reject settings that would divide by zero or produce non-positive mass
    pub fn validate(&self) -> Result<()> {
        if self.sub_steps == 0 {
            return Err(SimError::InvalidSettings("sub_steps must be at least 1"));
        }
        if !(self.frames_per_second.is_finite() && self.frames_per_second > 0.0) {
            return Err(SimError::InvalidSettings("frames_per_second must be positive"));
        }
        if !(self.material.density.is_finite() && self.material.density > 0.0) {
            return Err(SimError::InvalidSettings("density must be positive"));
        }
        if !(self.material.thickness.is_finite() && self.material.thickness > 0.0) {
            return Err(SimError::InvalidSettings("thickness must be positive"));
        }
        for restitution in [self.circle_restitution, self.rectangle_restitution] {
            if !(0.0..=1.0).contains(&restitution) {
                return Err(SimError::InvalidRestitution(restitution));
            }
        }
        Ok(())
    }

    /// Parse and validate settings from JSON. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load settings from a JSON file, falling back to defaults
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(path: &std::path::Path) -> Self {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(err) => {
                log::warn!("Could not read settings {}: {}", path.display(), err);
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(err) => {
                log::warn!("Ignoring settings {}: {}", path.display(), err);
                Self::default()
            }
        }
    }
}
