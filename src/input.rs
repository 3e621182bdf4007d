//! Input translation
//!
//! Hosts can call the controller's pointer methods directly, or decode their
//! events into [`ArcballInput`] values. [`WinitInputAdapter`] does the latter
//! for winit window events.

use glam::Vec2;
use winit::{
    event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent},
    keyboard::KeyCode,
};

/// A decoded input event for the arcball
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ArcballInput {
    /// Drag button pressed at pixel position
    PointerDown { x: f32, y: f32 },
    /// Pointer moved to pixel position
    PointerMove { x: f32, y: f32 },
    /// Drag button released
    PointerUp,
    /// Scroll amount in browser-style pixels (positive = scroll down / zoom out)
    Wheel { delta_y: f32 },
    /// Switch between camera and model rotation
    ToggleMode,
    /// Restore the initial orientation, distance and mode
    Reset,
    /// Input surface changed size
    Resize { width: u32, height: u32 },
}

/// Keyboard bindings: `A` toggles the mode, `R` resets
pub fn key_action(key: KeyCode) -> Option<ArcballInput> {
    match key {
        KeyCode::KeyA => Some(ArcballInput::ToggleMode),
        KeyCode::KeyR => Some(ArcballInput::Reset),
        _ => None,
    }
}

/// Translates winit window events into [`ArcballInput`]s
///
/// Button events in winit carry no position, so the adapter remembers the
/// last cursor position it saw. A press before any cursor position is known
/// is ignored.
#[derive(Debug, Clone)]
pub struct WinitInputAdapter {
    cursor: Option<Vec2>,
    button_held: bool,
    /// Button that starts a drag
    pub drag_button: MouseButton,
    /// Pixels reported per scroll line
    pub pixels_per_line: f32,
}

impl Default for WinitInputAdapter {
    fn default() -> Self {
        Self {
            cursor: None,
            button_held: false,
            drag_button: MouseButton::Left,
            pixels_per_line: 100.0,
        }
    }
}

impl WinitInputAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different mouse button for dragging
    pub fn with_drag_button(mut self, button: MouseButton) -> Self {
        self.drag_button = button;
        self
    }

    /// Set the line-to-pixel factor for line-based wheel deltas
    pub fn with_pixels_per_line(mut self, pixels: f32) -> Self {
        self.pixels_per_line = pixels;
        self
    }

    /// Last known cursor position in pixels
    pub fn cursor(&self) -> Option<Vec2> {
        self.cursor
    }

    /// Translate a window event. Events the arcball does not care about
    /// return `None`.
    pub fn translate(&mut self, event: &WindowEvent) -> Option<ArcballInput> {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                let cursor = Vec2::new(position.x as f32, position.y as f32);
                self.cursor = Some(cursor);
                Some(ArcballInput::PointerMove {
                    x: cursor.x,
                    y: cursor.y,
                })
            }
            WindowEvent::MouseInput { state, button, .. } if *button == self.drag_button => {
                match state {
                    ElementState::Pressed => {
                        let cursor = self.cursor?;
                        self.button_held = true;
                        Some(ArcballInput::PointerDown {
                            x: cursor.x,
                            y: cursor.y,
                        })
                    }
                    ElementState::Released => {
                        self.button_held = false;
                        Some(ArcballInput::PointerUp)
                    }
                }
            }
            WindowEvent::CursorLeft { .. } | WindowEvent::Focused(false) => {
                // The release may never arrive once the pointer is gone, and
                // the position is stale until the next CursorMoved
                self.cursor = None;
                if std::mem::take(&mut self.button_held) {
                    Some(ArcballInput::PointerUp)
                } else {
                    None
                }
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let delta_y = match delta {
                    MouseScrollDelta::LineDelta(_, y) => -*y * self.pixels_per_line,
                    MouseScrollDelta::PixelDelta(pos) => -pos.y as f32,
                };
                Some(ArcballInput::Wheel { delta_y })
            }
            WindowEvent::Resized(size) => Some(ArcballInput::Resize {
                width: size.width,
                height: size.height,
            }),
            WindowEvent::KeyboardInput { event, .. }
                if event.state == ElementState::Pressed && !event.repeat =>
            {
                match event.physical_key {
                    winit::keyboard::PhysicalKey::Code(code) => key_action(code),
                    _ => None,
                }
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::{
        dpi::{PhysicalPosition, PhysicalSize},
        event::{DeviceId, TouchPhase},
    };

    fn device() -> DeviceId {
        // SAFETY: only used as an opaque tag in synthetic test events
        unsafe { DeviceId::dummy() }
    }

    fn cursor_moved(x: f64, y: f64) -> WindowEvent {
        WindowEvent::CursorMoved {
            device_id: device(),
            position: PhysicalPosition::new(x, y),
        }
    }

    fn button(state: ElementState, button: MouseButton) -> WindowEvent {
        WindowEvent::MouseInput {
            device_id: device(),
            state,
            button,
        }
    }

    #[test]
    fn press_uses_last_cursor_position() {
        let mut adapter = WinitInputAdapter::new();
        assert_eq!(
            adapter.translate(&cursor_moved(120.0, 80.0)),
            Some(ArcballInput::PointerMove { x: 120.0, y: 80.0 })
        );
        assert_eq!(
            adapter.translate(&button(ElementState::Pressed, MouseButton::Left)),
            Some(ArcballInput::PointerDown { x: 120.0, y: 80.0 })
        );
        assert_eq!(
            adapter.translate(&button(ElementState::Released, MouseButton::Left)),
            Some(ArcballInput::PointerUp)
        );
    }

    #[test]
    fn press_before_any_cursor_position_is_ignored() {
        let mut adapter = WinitInputAdapter::new();
        assert_eq!(
            adapter.translate(&button(ElementState::Pressed, MouseButton::Left)),
            None
        );
        assert_eq!(adapter.cursor(), None);

        adapter.translate(&cursor_moved(10.0, 20.0));
        assert_eq!(
            adapter.translate(&button(ElementState::Pressed, MouseButton::Left)),
            Some(ArcballInput::PointerDown { x: 10.0, y: 20.0 })
        );
    }

    #[test]
    fn other_buttons_are_ignored() {
        let mut adapter = WinitInputAdapter::new();
        adapter.translate(&cursor_moved(10.0, 20.0));
        assert_eq!(
            adapter.translate(&button(ElementState::Pressed, MouseButton::Right)),
            None
        );

        let mut adapter = WinitInputAdapter::new().with_drag_button(MouseButton::Right);
        adapter.translate(&cursor_moved(10.0, 20.0));
        assert!(matches!(
            adapter.translate(&button(ElementState::Pressed, MouseButton::Right)),
            Some(ArcballInput::PointerDown { .. })
        ));
    }

    #[test]
    fn cursor_left_releases_only_active_drag() {
        let mut adapter = WinitInputAdapter::new();
        let left = WindowEvent::CursorLeft { device_id: device() };
        assert_eq!(adapter.translate(&left), None);

        adapter.translate(&cursor_moved(10.0, 20.0));
        adapter.translate(&button(ElementState::Pressed, MouseButton::Left));
        assert_eq!(adapter.translate(&left), Some(ArcballInput::PointerUp));
        assert_eq!(adapter.translate(&left), None);
        assert_eq!(adapter.cursor(), None);
    }

    #[test]
    fn wheel_line_delta_matches_browser_sign() {
        let mut adapter = WinitInputAdapter::new();
        // Scrolling down (toward the user) zooms out
        let event = WindowEvent::MouseWheel {
            device_id: device(),
            delta: MouseScrollDelta::LineDelta(0.0, -1.0),
            phase: TouchPhase::Moved,
        };
        assert_eq!(
            adapter.translate(&event),
            Some(ArcballInput::Wheel { delta_y: 100.0 })
        );

        let event = WindowEvent::MouseWheel {
            device_id: device(),
            delta: MouseScrollDelta::PixelDelta(PhysicalPosition::new(0.0, 30.0)),
            phase: TouchPhase::Moved,
        };
        assert_eq!(
            adapter.translate(&event),
            Some(ArcballInput::Wheel { delta_y: -30.0 })
        );
    }

    #[test]
    fn resize_is_forwarded() {
        let mut adapter = WinitInputAdapter::new();
        assert_eq!(
            adapter.translate(&WindowEvent::Resized(PhysicalSize::new(800, 600))),
            Some(ArcballInput::Resize {
                width: 800,
                height: 600
            })
        );
    }

    #[test]
    fn key_bindings() {
        assert_eq!(key_action(KeyCode::KeyA), Some(ArcballInput::ToggleMode));
        assert_eq!(key_action(KeyCode::KeyR), Some(ArcballInput::Reset));
        assert_eq!(key_action(KeyCode::KeyW), None);
    }
}
