//! Arcball - pointer-driven camera and model rotation
//!
//! Maps 2D pointer drags onto a virtual sphere to accumulate a 3D
//! orientation, and wheel input onto a camera distance. The controller
//! produces value-semantics matrices for a render loop:
//! - **Camera mode**: the eye orbits the origin
//! - **Model mode**: the object rotates, the eye stays on +Z
//!
//! # Features
//! - Quaternion orientation composed in world space
//! - Clamped zoom that never crosses the orbit target
//! - Explicit `tick` for time-driven auto-rotation
//! - winit event translation and `bytemuck` uniform blocks

pub mod error;
pub mod input;
pub mod scene;
pub mod viewport;

pub use error::{ArcballError, ArcballResult};
pub use input::{key_action, ArcballInput, WinitInputAdapter};
pub use scene::{
    ArcballController, ArcballMode, ArcballPhase, ArcballState, FrameMatrices, Projection,
    TransformUniforms,
};
pub use viewport::Viewport;

/// Configuration for an arcball controller
#[derive(Debug, Clone, PartialEq)]
pub struct ArcballConfig {
    /// Multiplier applied to every drag rotation angle
    pub rotation_sensitivity: f32,
    /// Distance change per wheel unit
    pub zoom_sensitivity: f32,
    /// Closest the camera may get to the origin
    pub min_distance: f32,
    /// Farthest the camera may get from the origin (unbounded if `None`)
    pub max_distance: Option<f32>,
    /// Idle rotation about world Y in degrees per second (0 disables)
    pub auto_rotate_speed: f32,
}

impl Default for ArcballConfig {
    fn default() -> Self {
        Self {
            rotation_sensitivity: 2.0,
            zoom_sensitivity: 0.0005,
            min_distance: 1.0e-3,
            max_distance: None,
            auto_rotate_speed: 0.0,
        }
    }
}

impl ArcballConfig {
    pub fn new(rotation_sensitivity: f32, zoom_sensitivity: f32) -> Self {
        Self {
            rotation_sensitivity,
            zoom_sensitivity,
            ..Default::default()
        }
    }

    pub fn with_rotation_sensitivity(mut self, sensitivity: f32) -> Self {
        self.rotation_sensitivity = sensitivity;
        self
    }

    pub fn with_zoom_sensitivity(mut self, sensitivity: f32) -> Self {
        self.zoom_sensitivity = sensitivity;
        self
    }

    pub fn with_min_distance(mut self, min: f32) -> Self {
        self.min_distance = min;
        self
    }

    /// Set both distance bounds
    pub fn with_distance_range(mut self, min: f32, max: f32) -> Self {
        self.min_distance = min;
        self.max_distance = Some(max);
        self
    }

    /// Set the idle auto-rotation speed (degrees per second)
    pub fn with_auto_rotate_speed(mut self, degrees_per_second: f32) -> Self {
        self.auto_rotate_speed = degrees_per_second;
        self
    }

    /// Check every field is usable
    pub fn validate(&self) -> ArcballResult<()> {
        if !self.rotation_sensitivity.is_finite() || self.rotation_sensitivity < 0.0 {
            return Err(ArcballError::InvalidConfig(format!(
                "rotation sensitivity must be non-negative, got {}",
                self.rotation_sensitivity
            )));
        }
        if !self.zoom_sensitivity.is_finite() || self.zoom_sensitivity < 0.0 {
            return Err(ArcballError::InvalidConfig(format!(
                "zoom sensitivity must be non-negative, got {}",
                self.zoom_sensitivity
            )));
        }
        if !self.min_distance.is_finite() || self.min_distance <= 0.0 {
            return Err(ArcballError::InvalidConfig(format!(
                "minimum distance must be positive, got {}",
                self.min_distance
            )));
        }
        if let Some(max) = self.max_distance {
            if !max.is_finite() || max < self.min_distance {
                return Err(ArcballError::InvalidConfig(format!(
                    "maximum distance {} is below the minimum distance {}",
                    max, self.min_distance
                )));
            }
        }
        if !self.auto_rotate_speed.is_finite() {
            return Err(ArcballError::InvalidConfig(
                "auto-rotate speed must be finite".to_string(),
            ));
        }
        Ok(())
    }
}

/// Initialize logging for native binaries (`RUST_LOG` overrides the `info` default)
#[cfg(not(target_arch = "wasm32"))]
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();
}

