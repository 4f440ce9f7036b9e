//! Camera input state machine.

use cubeworld_render::CameraState;
use glam::Vec2;
use tracing::trace;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::config::CameraConfig;
use crate::keyboard::{CameraAction, KeyBindings};
use crate::modifiers::Modifiers;
use crate::mouse::{wheel_delta_pixels, DragState};

/// Turns pointer, wheel and key input into [`CameraState`] updates.
///
/// Every update is applied immediately and depends only on the input
/// delta, never on elapsed time.
///
/// # Usage
///
/// ```ignore
/// // In on_event
/// fn on_event(&mut self, event: &WindowEvent) -> bool {
///     self.controller.process_window_event(event)
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct CameraController {
    state: CameraState,
    drag: DragState,
    bindings: KeyBindings,
    config: CameraConfig,
    /// Last modifier state reported by the window.
    modifiers: Modifiers,
}

impl CameraController {
    /// Create a controller with default camera, bindings and config.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use custom tuning.
    #[must_use]
    pub fn with_config(mut self, config: CameraConfig) -> Self {
        self.config = config;
        self
    }

    /// Use custom key bindings.
    #[must_use]
    pub fn with_bindings(mut self, bindings: KeyBindings) -> Self {
        self.bindings = bindings;
        self
    }

    /// Start from a given camera state.
    #[must_use]
    pub fn with_state(mut self, state: CameraState) -> Self {
        self.state = state;
        self
    }

    /// Current camera state.
    #[must_use]
    pub const fn state(&self) -> &CameraState {
        &self.state
    }

    /// Current tuning.
    #[must_use]
    pub const fn config(&self) -> &CameraConfig {
        &self.config
    }

    /// Key bindings, for runtime rebinding.
    pub fn bindings_mut(&mut self) -> &mut KeyBindings {
        &mut self.bindings
    }

    /// Returns `true` while a pointer drag is active.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Primary pointer pressed at `position`.
    pub fn pointer_down(&mut self, position: Vec2) {
        trace!(x = position.x, y = position.y, "Drag start");
        self.drag.begin(position);
    }

    /// Pointer moved to `position`. Rotates only while dragging.
    ///
    /// Returns `true` if the camera changed.
    pub fn pointer_move(&mut self, position: Vec2) -> bool {
        let Some(delta) = self.drag.advance(position) else {
            return false;
        };
        self.state
            .rotate_spin(-delta.x * self.config.drag_sensitivity_x);
        self.state
            .rotate_tilt(delta.y * self.config.drag_sensitivity_y);
        trace!(
            dx = delta.x,
            dy = delta.y,
            tilt = self.state.tilt(),
            spin = self.state.spin(),
            "Drag"
        );
        true
    }

    /// Primary pointer released.
    pub fn pointer_up(&mut self) {
        trace!("Drag end");
        self.drag.end();
    }

    /// Pointer left the interactive surface; ends any drag.
    pub fn pointer_leave(&mut self) {
        trace!("Pointer left");
        self.drag.end();
    }

    /// Wheel scrolled by `delta_y` pixels (positive scrolls down and
    /// zooms out).
    ///
    /// Always returns `true`: the event is consumed and any default
    /// scrolling must be suppressed by the caller.
    pub fn wheel(&mut self, delta_y: f32) -> bool {
        self.state.zoom_by(-delta_y * self.config.zoom_sensitivity);
        trace!(delta_y, zoom = self.state.zoom(), "Wheel");
        true
    }

    /// Key pressed with the given modifiers.
    ///
    /// Returns `false` for keys without a binding.
    pub fn key_down(&mut self, key: KeyCode, modifiers: Modifiers) -> bool {
        let Some(action) = self.bindings.action(key) else {
            return false;
        };
        self.apply(action, modifiers.shift());
        trace!(?key, %action, "Key");
        true
    }

    /// Physical key event using the last reported modifiers. Presses and
    /// repeats step the camera; releases are ignored.
    fn key_event(&mut self, key: PhysicalKey, state: ElementState) -> bool {
        let PhysicalKey::Code(key) = key else {
            return false;
        };
        state == ElementState::Pressed && self.key_down(key, self.modifiers)
    }

    /// Apply `action` once, using the large step if `large` is set.
    pub fn apply(&mut self, action: CameraAction, large: bool) {
        let rotation = self.config.rotation_step_for(large);
        let zoom = self.config.zoom_step_for(large);
        match action {
            CameraAction::SpinLeft => self.state.rotate_spin(-rotation),
            CameraAction::SpinRight => self.state.rotate_spin(rotation),
            CameraAction::TiltUp => self.state.rotate_tilt(rotation),
            CameraAction::TiltDown => self.state.rotate_tilt(-rotation),
            CameraAction::RollLeft => self.state.rotate_roll(-rotation),
            CameraAction::RollRight => self.state.rotate_roll(rotation),
            CameraAction::ZoomIn => self.state.zoom_by(zoom),
            CameraAction::ZoomOut => self.state.zoom_by(-zoom),
            CameraAction::Reset => self.state.reset(),
        }
    }

    /// Process a window event.
    ///
    /// Returns `true` if the event was consumed.
    #[allow(clippy::cast_possible_truncation)]
    pub fn process_window_event(&mut self, event: &WindowEvent) -> bool {
        match event {
            WindowEvent::ModifiersChanged(modifiers) => {
                self.modifiers = Modifiers::from(modifiers.state());
                false
            }
            WindowEvent::KeyboardInput { event, .. } => {
                self.key_event(event.physical_key, event.state)
            }
            WindowEvent::MouseInput {
                button: MouseButton::Left,
                state,
                ..
            } => {
                match state {
                    ElementState::Pressed => {
                        let position = self.drag.last_position();
                        self.pointer_down(position);
                    }
                    ElementState::Released => self.pointer_up(),
                }
                true
            }
            WindowEvent::CursorMoved { position, .. } => {
                let position = Vec2::new(position.x as f32, position.y as f32);
                if self.drag.is_dragging() {
                    self.pointer_move(position)
                } else {
                    self.drag.track(position);
                    false
                }
            }
            WindowEvent::CursorLeft { .. } => {
                let was_dragging = self.drag.is_dragging();
                self.pointer_leave();
                was_dragging
            }
            WindowEvent::MouseWheel { delta, .. } => {
                self.wheel(wheel_delta_pixels(*delta, self.config.wheel_line_height))
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use cubeworld_render::{MAX_ZOOM, MIN_ZOOM};
    use winit::dpi::PhysicalPosition;
    use winit::event::{DeviceId, MouseScrollDelta, TouchPhase};
    use winit::keyboard::{ModifiersState, NativeKeyCode};

    fn device() -> DeviceId {
        // SAFETY: only compared, never passed back to the platform.
        unsafe { DeviceId::dummy() }
    }

    fn cursor_moved(x: f64, y: f64) -> WindowEvent {
        WindowEvent::CursorMoved {
            device_id: device(),
            position: PhysicalPosition::new(x, y),
        }
    }

    fn mouse(button: MouseButton, state: ElementState) -> WindowEvent {
        WindowEvent::MouseInput {
            device_id: device(),
            state,
            button,
        }
    }

    #[test]
    fn press_starts_drag_at_tracked_cursor() {
        let mut controller = CameraController::new();
        assert!(!controller.process_window_event(&cursor_moved(100.0, 50.0)));
        assert_eq!(*controller.state(), CameraState::DEFAULT);

        assert!(controller.process_window_event(&mouse(MouseButton::Left, ElementState::Pressed)));
        assert!(controller.is_dragging());

        assert!(controller.process_window_event(&cursor_moved(120.0, 50.0)));
        assert_relative_eq!(controller.state().spin(), -55.0);
        assert_relative_eq!(controller.state().tilt(), 60.0);

        assert!(controller.process_window_event(&mouse(MouseButton::Left, ElementState::Released)));
        assert!(!controller.is_dragging());
        assert!(!controller.process_window_event(&cursor_moved(200.0, 50.0)));
        assert_relative_eq!(controller.state().spin(), -55.0);
    }

    #[test]
    fn other_buttons_are_not_consumed() {
        let mut controller = CameraController::new();
        assert!(!controller.process_window_event(&mouse(MouseButton::Right, ElementState::Pressed)));
        assert!(!controller.is_dragging());
    }

    #[test]
    fn cursor_left_reports_whether_a_drag_ended() {
        let mut controller = CameraController::new();
        let left = WindowEvent::CursorLeft { device_id: device() };

        controller.process_window_event(&mouse(MouseButton::Left, ElementState::Pressed));
        assert!(controller.process_window_event(&left));
        assert!(!controller.is_dragging());
        assert!(!controller.process_window_event(&left));
    }

    #[test]
    fn wheel_line_delta_zooms() {
        let mut controller = CameraController::new();
        let scroll_up = WindowEvent::MouseWheel {
            device_id: device(),
            delta: MouseScrollDelta::LineDelta(0.0, 1.0),
            phase: TouchPhase::Moved,
        };
        assert!(controller.process_window_event(&scroll_up));
        assert_relative_eq!(controller.state().zoom(), 1.1, epsilon = 1e-6);
    }

    #[test]
    fn shift_from_modifiers_event_selects_large_step() {
        let mut controller = CameraController::new();
        let shift = WindowEvent::ModifiersChanged(ModifiersState::SHIFT.into());
        assert!(!controller.process_window_event(&shift));

        assert!(controller.key_event(PhysicalKey::Code(KeyCode::ArrowRight), ElementState::Pressed));
        assert_relative_eq!(controller.state().spin(), -30.0);

        let released = WindowEvent::ModifiersChanged(ModifiersState::empty().into());
        controller.process_window_event(&released);
        assert!(controller.key_event(PhysicalKey::Code(KeyCode::ArrowRight), ElementState::Pressed));
        assert_relative_eq!(controller.state().spin(), -25.0);
    }

    #[test]
    fn key_release_and_unidentified_keys_are_ignored() {
        let mut controller = CameraController::new();
        assert!(!controller.key_event(PhysicalKey::Code(KeyCode::KeyR), ElementState::Released));
        assert!(!controller.key_event(
            PhysicalKey::Unidentified(NativeKeyCode::Unidentified),
            ElementState::Pressed
        ));
        assert_eq!(*controller.state(), CameraState::DEFAULT);
    }

    #[test]
    fn drag_rotates_spin_and_tilt() {
        let mut controller = CameraController::new();
        controller.pointer_down(Vec2::new(100.0, 100.0));
        assert!(controller.pointer_move(Vec2::new(120.0, 90.0)));

        // spin -= 20 * 0.5, tilt += -10 * 0.5
        assert_relative_eq!(controller.state().spin(), -55.0);
        assert_relative_eq!(controller.state().tilt(), 55.0);
    }

    #[test]
    fn move_without_drag_is_ignored() {
        let mut controller = CameraController::new();
        assert!(!controller.pointer_move(Vec2::new(50.0, 50.0)));
        assert_eq!(*controller.state(), CameraState::DEFAULT);
    }

    #[test]
    fn drag_is_incremental() {
        let mut split = CameraController::new();
        split.pointer_down(Vec2::ZERO);
        split.pointer_move(Vec2::new(10.0, 4.0));
        split.pointer_move(Vec2::new(30.0, 8.0));

        let mut single = CameraController::new();
        single.pointer_down(Vec2::ZERO);
        single.pointer_move(Vec2::new(30.0, 8.0));

        assert_relative_eq!(split.state().spin(), single.state().spin());
        assert_relative_eq!(split.state().tilt(), single.state().tilt());
    }

    #[test]
    fn release_and_leave_end_drag_without_snapping() {
        let mut controller = CameraController::new();
        controller.pointer_down(Vec2::ZERO);
        controller.pointer_move(Vec2::new(40.0, 0.0));
        controller.pointer_up();
        assert!(!controller.is_dragging());
        assert_relative_eq!(controller.state().spin(), -65.0);

        assert!(!controller.pointer_move(Vec2::new(100.0, 0.0)));
        assert_relative_eq!(controller.state().spin(), -65.0);

        controller.pointer_down(Vec2::ZERO);
        controller.pointer_leave();
        assert!(!controller.is_dragging());
    }

    #[test]
    fn drag_tilt_saturates() {
        let mut controller = CameraController::new();
        controller.pointer_down(Vec2::ZERO);
        controller.pointer_move(Vec2::new(0.0, 10_000.0));
        assert_relative_eq!(controller.state().tilt(), 90.0);
    }

    #[test]
    fn wheel_zooms_and_is_consumed() {
        let mut controller = CameraController::new();
        assert!(controller.wheel(-100.0));
        assert_relative_eq!(controller.state().zoom(), 1.1, epsilon = 1e-6);

        for _ in 0..100 {
            controller.wheel(-1000.0);
        }
        assert_relative_eq!(controller.state().zoom(), MAX_ZOOM);
        for _ in 0..100 {
            controller.wheel(1000.0);
        }
        assert_relative_eq!(controller.state().zoom(), MIN_ZOOM);
    }

    #[test]
    fn keys_step_camera() {
        let mut controller = CameraController::new();
        assert!(controller.key_down(KeyCode::ArrowRight, Modifiers::empty()));
        assert_relative_eq!(controller.state().spin(), -40.0);

        assert!(controller.key_down(KeyCode::KeyA, Modifiers::SHIFT));
        assert_relative_eq!(controller.state().spin(), -55.0);

        assert!(controller.key_down(KeyCode::KeyS, Modifiers::empty()));
        assert_relative_eq!(controller.state().tilt(), 55.0);

        assert!(controller.key_down(KeyCode::KeyE, Modifiers::empty()));
        assert_relative_eq!(controller.state().roll(), 5.0);

        assert!(controller.key_down(KeyCode::Equal, Modifiers::SHIFT));
        assert_relative_eq!(controller.state().zoom(), 1.5);
        assert!(controller.key_down(KeyCode::Minus, Modifiers::empty()));
        assert_relative_eq!(controller.state().zoom(), 1.4, epsilon = 1e-6);
    }

    #[test]
    fn reset_key_restores_defaults() {
        let mut controller = CameraController::new();
        controller.key_down(KeyCode::KeyQ, Modifiers::SHIFT);
        controller.wheel(-500.0);
        controller.pointer_down(Vec2::ZERO);
        controller.pointer_move(Vec2::new(33.0, -20.0));

        assert!(controller.key_down(KeyCode::KeyR, Modifiers::empty()));
        assert_eq!(*controller.state(), CameraState::DEFAULT);
    }

    #[test]
    fn unbound_key_is_noop() {
        let mut controller = CameraController::new();
        assert!(!controller.key_down(KeyCode::KeyZ, Modifiers::SHIFT));
        assert_eq!(*controller.state(), CameraState::DEFAULT);
    }

    #[test]
    fn custom_config_and_bindings() {
        let bindings = KeyBindings::builder()
            .bind(KeyCode::KeyZ, CameraAction::ZoomIn)
            .build();
        let mut controller = CameraController::new()
            .with_bindings(bindings)
            .with_config(CameraConfig::default().with_zoom_steps(0.25, 1.0));

        assert!(!controller.key_down(KeyCode::Equal, Modifiers::empty()));
        assert!(controller.key_down(KeyCode::KeyZ, Modifiers::empty()));
        assert_relative_eq!(controller.state().zoom(), 1.25);

        controller
            .bindings_mut()
            .bind(KeyCode::KeyX, CameraAction::Reset);
        assert!(controller.key_down(KeyCode::KeyX, Modifiers::empty()));
        assert_eq!(*controller.state(), CameraState::DEFAULT);
    }
}
