//! Arcball controller
//!
//! Turns pointer drags into an accumulated orientation and wheel input into a
//! camera distance. The orientation is applied either to the eye
//! ([`ArcballMode::Camera`]) or to the model ([`ArcballMode::Model`]).
//!
//! - Drag: rotate on a virtual sphere centered on the viewport
//! - Wheel: move the camera toward / away from the origin
//! - `tick`: idle auto-rotation about world Y, if configured

use glam::{Mat4, Quat, Vec3};
use log::{debug, trace, warn};

use super::sphere::{look_at_origin, project_to_sphere, rotation_between};
use crate::error::{ArcballError, ArcballResult};
use crate::input::ArcballInput;
use crate::viewport::Viewport;
use crate::ArcballConfig;

/// What the accumulated orientation rotates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArcballMode {
    /// Camera orbits a fixed target
    #[default]
    Camera,
    /// Object rotates in place, camera stays on +Z
    Model,
}

impl ArcballMode {
    pub fn name(&self) -> &'static str {
        match self {
            ArcballMode::Camera => "CAMERA",
            ArcballMode::Model => "MODEL",
        }
    }

    /// The other mode
    pub fn toggled(self) -> Self {
        match self {
            ArcballMode::Camera => ArcballMode::Model,
            ArcballMode::Model => ArcballMode::Camera,
        }
    }
}

/// Drag gesture phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArcballPhase {
    Idle,
    Dragging,
}

/// Mutable arcball state
#[derive(Debug, Clone, PartialEq)]
pub struct ArcballState {
    /// Accumulated rotation, always unit length
    pub orientation: Quat,
    /// Distance from the orbit target, always positive
    pub distance: f32,
    pub mode: ArcballMode,
    /// Sphere vector of the last pointer position, present only while dragging
    pub drag_anchor: Option<Vec3>,
}

/// Model and view matrices for one frame, chosen by the current mode
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameMatrices {
    pub model: Mat4,
    pub view: Mat4,
}

/// Arcball camera / model controller
#[derive(Debug, Clone)]
pub struct ArcballController {
    state: ArcballState,
    config: ArcballConfig,
    viewport: Viewport,
    initial_distance: f32,
}

impl ArcballController {
    /// Create a controller for `viewport`, starting `initial_distance` away
    /// from the origin.
    pub fn new(
        viewport: Viewport,
        initial_distance: f32,
        config: ArcballConfig,
    ) -> ArcballResult<Self> {
        if let Err(err) = config.validate() {
            warn!("Rejected arcball config: {}", err);
            return Err(err);
        }
        if !initial_distance.is_finite() || initial_distance <= 0.0 {
            return Err(ArcballError::InvalidConfig(format!(
                "initial distance must be positive, got {initial_distance}"
            )));
        }
        if initial_distance < config.min_distance {
            return Err(ArcballError::InvalidConfig(format!(
                "initial distance {initial_distance} is below the minimum distance {}",
                config.min_distance
            )));
        }
        if let Some(max) = config.max_distance {
            if initial_distance > max {
                return Err(ArcballError::InvalidConfig(format!(
                    "initial distance {initial_distance} exceeds the maximum distance {max}"
                )));
            }
        }

        debug!(
            "Arcball created: {}x{} viewport, distance {}",
            viewport.width(),
            viewport.height(),
            initial_distance
        );

        Ok(Self {
            state: ArcballState {
                orientation: Quat::IDENTITY,
                distance: initial_distance,
                mode: ArcballMode::Camera,
                drag_anchor: None,
            },
            config,
            viewport,
            initial_distance,
        })
    }

    pub fn state(&self) -> &ArcballState {
        &self.state
    }

    pub fn config(&self) -> &ArcballConfig {
        &self.config
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn orientation(&self) -> Quat {
        self.state.orientation
    }

    pub fn distance(&self) -> f32 {
        self.state.distance
    }

    pub fn initial_distance(&self) -> f32 {
        self.initial_distance
    }

    pub fn mode(&self) -> ArcballMode {
        self.state.mode
    }

    pub fn phase(&self) -> ArcballPhase {
        if self.state.drag_anchor.is_some() {
            ArcballPhase::Dragging
        } else {
            ArcballPhase::Idle
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.state.drag_anchor.is_some()
    }

    /// Project a pixel position onto the virtual sphere
    fn sphere_point(&self, x: f32, y: f32) -> Option<Vec3> {
        project_to_sphere(self.viewport.to_ndc(x, y))
    }

    /// Begin a drag at pixel position `(x, y)`. Ignored while already dragging.
    pub fn on_pointer_down(&mut self, x: f32, y: f32) {
        if self.is_dragging() {
            return;
        }
        if let Some(anchor) = self.sphere_point(x, y) {
            debug!("Arcball drag started at ({}, {})", x, y);
            self.state.drag_anchor = Some(anchor);
        }
    }

    /// Rotate by the arc between the previous and current pointer positions.
    /// Ignored when no drag is active.
    pub fn on_pointer_move(&mut self, x: f32, y: f32) {
        let Some(anchor) = self.state.drag_anchor else {
            return;
        };
        let Some(current) = self.sphere_point(x, y) else {
            return;
        };

        // Sub-epsilon moves keep the old anchor so they add up over later events
        let Some(delta) = rotation_between(anchor, current, self.config.rotation_sensitivity)
        else {
            return;
        };
        // World-space composition: the increment is applied after everything accumulated so far
        self.state.orientation = (delta * self.state.orientation).normalize();
        self.state.drag_anchor = Some(current);

        trace!("Arcball increment {:?}", delta);
    }

    /// End the active drag. Ignored when idle.
    pub fn on_pointer_up(&mut self) {
        if self.state.drag_anchor.take().is_some() {
            debug!("Arcball drag ended");
        }
    }

    /// Zoom by a wheel delta (positive moves the camera away)
    pub fn on_wheel(&mut self, delta_y: f32) {
        if !delta_y.is_finite() {
            return;
        }
        let mut distance = self.state.distance + delta_y * self.config.zoom_sensitivity;
        if let Some(max) = self.config.max_distance {
            distance = distance.min(max);
        }
        self.state.distance = distance.max(self.config.min_distance);
    }

    /// Restore the construction-time state
    pub fn reset(&mut self) {
        self.state = ArcballState {
            orientation: Quat::IDENTITY,
            distance: self.initial_distance,
            mode: ArcballMode::Camera,
            drag_anchor: None,
        };
        debug!("Arcball reset");
    }

    /// Change how the orientation is interpreted. Orientation and distance
    /// are left untouched.
    pub fn set_mode(&mut self, mode: ArcballMode) {
        if self.state.mode != mode {
            debug!("Arcball mode: {}", mode.name());
        }
        self.state.mode = mode;
    }

    pub fn toggle_mode(&mut self) {
        self.set_mode(self.state.mode.toggled());
    }

    /// Update the viewport used for sphere projection
    pub fn resize(&mut self, width: u32, height: u32) -> ArcballResult<()> {
        self.viewport = Viewport::new(width, height)?;
        Ok(())
    }

    /// Advance time-driven behaviour by `dt` seconds
    ///
    /// Applies the configured auto-rotation about world Y while no drag is active.
    pub fn tick(&mut self, dt: f32) {
        if !dt.is_finite() || dt <= 0.0 || self.is_dragging() {
            return;
        }
        let speed = self.config.auto_rotate_speed;
        if speed == 0.0 {
            return;
        }
        let delta = Quat::from_rotation_y((speed * dt).to_radians());
        self.state.orientation = (delta * self.state.orientation).normalize();
    }

    /// Apply one decoded input event
    pub fn handle(&mut self, input: ArcballInput) {
        match input {
            ArcballInput::PointerDown { x, y } => self.on_pointer_down(x, y),
            ArcballInput::PointerMove { x, y } => self.on_pointer_move(x, y),
            ArcballInput::PointerUp => self.on_pointer_up(),
            ArcballInput::Wheel { delta_y } => self.on_wheel(delta_y),
            ArcballInput::ToggleMode => self.toggle_mode(),
            ArcballInput::Reset => self.reset(),
            ArcballInput::Resize { width, height } => {
                // Minimized windows report 0x0; keep the last usable viewport
                if let Err(err) = self.resize(width, height) {
                    debug!("Ignoring resize: {}", err);
                }
            }
        }
    }

    /// Eye position of the orbiting camera
    pub fn eye_position(&self) -> Vec3 {
        self.state.orientation * Vec3::new(0.0, 0.0, self.state.distance)
    }

    /// Eye position of whichever view matrix the current mode uses
    pub fn view_position(&self) -> Vec3 {
        match self.state.mode {
            ArcballMode::Camera => self.eye_position(),
            ArcballMode::Model => Vec3::new(0.0, 0.0, self.state.distance),
        }
    }

    /// View matrix of the camera orbiting the origin
    pub fn view_matrix(&self) -> Mat4 {
        look_at_origin(self.eye_position())
    }

    /// View matrix from `(0, 0, distance)`, ignoring the orientation
    pub fn view_cam_distance_matrix(&self) -> Mat4 {
        look_at_origin(Vec3::new(0.0, 0.0, self.state.distance))
    }

    /// Orientation as a homogeneous rotation matrix
    pub fn model_rotation_matrix(&self) -> Mat4 {
        Mat4::from_quat(self.state.orientation)
    }

    /// Model and view matrices for the current mode
    pub fn frame_matrices(&self) -> FrameMatrices {
        match self.state.mode {
            ArcballMode::Camera => FrameMatrices {
                model: Mat4::IDENTITY,
                view: self.view_matrix(),
            },
            ArcballMode::Model => FrameMatrices {
                model: self.model_rotation_matrix(),
                view: self.view_cam_distance_matrix(),
            },
        }
    }
}
