//! Camera controls for Cubeworld.
//!
//! Pointer drags rotate the scene, the wheel zooms, and bound keys step
//! rotation or zoom by fixed amounts. Everything funnels into a single
//! [`CameraState`](cubeworld_render::CameraState) owned by a
//! [`CameraController`].
//!
//! # Core Types
//!
//! - [`CameraController`]: the input state machine
//! - [`KeyBindings`]: maps key codes to [`CameraAction`]s
//! - [`CameraConfig`]: sensitivities and step sizes
//! - [`Modifiers`]: modifier key flags
//!
//! # Usage
//!
//! ```ignore
//! use cubeworld_input::CameraController;
//!
//! let mut controller = CameraController::default();
//!
//! // In the window event handler
//! fn on_event(controller: &mut CameraController, event: &WindowEvent) -> bool {
//!     controller.process_window_event(event)
//! }
//!
//! // When drawing
//! let transform = controller.state().transform();
//! ```

mod config;
mod controller;
mod keyboard;
mod modifiers;
mod mouse;

pub use config::CameraConfig;
pub use controller::CameraController;
pub use keyboard::{CameraAction, KeyBindings, KeyBindingsBuilder};
pub use modifiers::Modifiers;
pub use mouse::{wheel_delta_pixels, DragState};

// Re-export winit types used by the controller API
pub use winit::event::WindowEvent;
pub use winit::keyboard::KeyCode;
