//! Scene configuration, read from YAML

use serde::{Deserialize, Serialize};
use crate::animation::{BehaviorParams, BehaviorSet};
use crate::error::TreeError;
use crate::growth::MAX_SUPPORTED_DEPTH;
use crate::mesh::MeshParams;
use crate::render::CameraParams;

/// Everything the page can tune. Omitted fields keep their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Tree height; node count is `2^(max_depth + 1) - 1`
    pub max_depth: i32,
    pub behaviors: BehaviorSet,
    pub mesh: MeshParams,
    pub camera: CameraParams,
    /// Frame-rate averaging window
    pub stats_window_seconds: f64,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            max_depth: 11,
            behaviors: BehaviorSet::default(),
            mesh: MeshParams::default(),
            camera: CameraParams::default(),
            stats_window_seconds: 1.0,
        }
    }
}

impl SceneConfig {
    /// Parse and validate
    pub fn from_yaml(yaml: &str) -> Result<Self, TreeError> {
        let config: SceneConfig = serde_yaml::from_str(yaml)
            .map_err(|e| TreeError::Config(format!("YAML parse error: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), TreeError> {
        if self.max_depth < 0 || self.max_depth > MAX_SUPPORTED_DEPTH as i32 {
            return Err(TreeError::Config(format!(
                "max_depth must be within 0..={}, got {}",
                MAX_SUPPORTED_DEPTH, self.max_depth
            )));
        }

        check_behavior("a", &self.behaviors.a)?;
        check_behavior("b", &self.behaviors.b)?;
        if self.behaviors.b.scale >= self.behaviors.a.scale {
            return Err(TreeError::Config(format!(
                "behaviors.b.scale ({}) must be below behaviors.a.scale ({})",
                self.behaviors.b.scale, self.behaviors.a.scale
            )));
        }

        if self.mesh.radial_segments < 3 || self.mesh.rings < 2 {
            return Err(TreeError::Config(format!(
                "mesh needs at least 3 radial segments and 2 rings, got {} and {}",
                self.mesh.radial_segments, self.mesh.rings
            )));
        }
        if !is_positive(self.mesh.base_radius) || !is_positive(self.mesh.tip_radius) {
            return Err(TreeError::Config(format!(
                "mesh radii must be positive, got {} and {}",
                self.mesh.base_radius, self.mesh.tip_radius
            )));
        }

        let camera = &self.camera;
        let positions = [camera.position, camera.target];
        if positions.iter().any(|p| !(p.x.is_finite() && p.y.is_finite() && p.z.is_finite())) {
            return Err(TreeError::Config("camera position and target must be finite".into()));
        }
        if !is_positive(camera.near) || !camera.far.is_finite() || camera.far <= camera.near {
            return Err(TreeError::Config(format!(
                "camera needs 0 < near < far, got near {} far {}",
                camera.near, camera.far
            )));
        }
        if !(camera.fov_degrees > 0.0 && camera.fov_degrees < 180.0) {
            return Err(TreeError::Config(format!(
                "camera.fov_degrees must be within (0, 180), got {}",
                camera.fov_degrees
            )));
        }

        if !(self.stats_window_seconds.is_finite() && self.stats_window_seconds > 0.0) {
            return Err(TreeError::Config(format!(
                "stats_window_seconds must be positive, got {}",
                self.stats_window_seconds
            )));
        }

        Ok(())
    }
}

/// Finite and above zero; false for NaN
fn is_positive(value: f32) -> bool {
    value.is_finite() && value > 0.0
}

fn check_behavior(slot: &str, params: &BehaviorParams) -> Result<(), TreeError> {
    if !(params.scale > 0.0 && params.scale <= 1.0) {
        return Err(TreeError::Config(format!(
            "behaviors.{}.scale must be within (0, 1], got {}",
            slot, params.scale
        )));
    }
    let values = [
        params.offset,
        params.base_angle,
        params.amplitude,
        params.frequency,
        params.twist,
    ];
    if values.iter().any(|v| !v.is_finite()) {
        return Err(TreeError::Config(format!("behaviors.{} has a non-finite value", slot)));
    }
    Ok(())
}
