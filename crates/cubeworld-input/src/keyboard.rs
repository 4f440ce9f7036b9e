//! Key bindings for discrete camera steps.

use std::fmt;

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};
use winit::keyboard::KeyCode;

/// A discrete camera adjustment triggered by a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CameraAction {
    /// Decrease spin.
    SpinLeft,
    /// Increase spin.
    SpinRight,
    /// Increase tilt.
    TiltUp,
    /// Decrease tilt.
    TiltDown,
    /// Decrease roll.
    RollLeft,
    /// Increase roll.
    RollRight,
    ZoomIn,
    ZoomOut,
    /// Restore the default camera.
    Reset,
}

impl CameraAction {
    /// Every action, in declaration order.
    pub const ALL: [Self; 9] = [
        Self::SpinLeft,
        Self::SpinRight,
        Self::TiltUp,
        Self::TiltDown,
        Self::RollLeft,
        Self::RollRight,
        Self::ZoomIn,
        Self::ZoomOut,
        Self::Reset,
    ];

    /// Parse the kebab-case name used in input scripts.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.name() == name)
    }

    /// Kebab-case name, e.g. `spin-left`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::SpinLeft => "spin-left",
            Self::SpinRight => "spin-right",
            Self::TiltUp => "tilt-up",
            Self::TiltDown => "tilt-down",
            Self::RollLeft => "roll-left",
            Self::RollRight => "roll-right",
            Self::ZoomIn => "zoom-in",
            Self::ZoomOut => "zoom-out",
            Self::Reset => "reset",
        }
    }
}

impl fmt::Display for CameraAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Maps physical keys to camera actions.
///
/// A key maps to at most one action; an action may have several keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBindings {
    keys: HashMap<KeyCode, CameraAction>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self::builder()
            .bind(KeyCode::ArrowLeft, CameraAction::SpinLeft)
            .bind(KeyCode::KeyA, CameraAction::SpinLeft)
            .bind(KeyCode::ArrowRight, CameraAction::SpinRight)
            .bind(KeyCode::KeyD, CameraAction::SpinRight)
            .bind(KeyCode::ArrowUp, CameraAction::TiltUp)
            .bind(KeyCode::KeyW, CameraAction::TiltUp)
            .bind(KeyCode::ArrowDown, CameraAction::TiltDown)
            .bind(KeyCode::KeyS, CameraAction::TiltDown)
            .bind(KeyCode::KeyQ, CameraAction::RollLeft)
            .bind(KeyCode::KeyE, CameraAction::RollRight)
            .bind(KeyCode::Equal, CameraAction::ZoomIn)
            .bind(KeyCode::NumpadAdd, CameraAction::ZoomIn)
            .bind(KeyCode::Minus, CameraAction::ZoomOut)
            .bind(KeyCode::NumpadSubtract, CameraAction::ZoomOut)
            .bind(KeyCode::KeyR, CameraAction::Reset)
            .bind(KeyCode::Home, CameraAction::Reset)
            .build()
    }
}

impl KeyBindings {
    /// Bindings with no keys bound.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            keys: HashMap::new(),
        }
    }

    /// Start from an empty binding set.
    #[must_use]
    pub fn builder() -> KeyBindingsBuilder {
        KeyBindingsBuilder::new()
    }

    /// Bind `key` to `action`, returning the action it replaced.
    pub fn bind(&mut self, key: KeyCode, action: CameraAction) -> Option<CameraAction> {
        self.keys.insert(key, action)
    }

    /// Remove the binding for `key`.
    pub fn unbind(&mut self, key: KeyCode) -> Option<CameraAction> {
        self.keys.remove(&key)
    }

    /// Action bound to `key`, if any.
    #[must_use]
    pub fn action(&self, key: KeyCode) -> Option<CameraAction> {
        self.keys.get(&key).copied()
    }

    /// Keys bound to `action`.
    #[must_use]
    pub fn keys_for(&self, action: CameraAction) -> Vec<KeyCode> {
        self.keys
            .iter()
            .filter(|(_, a)| **a == action)
            .map(|(k, _)| *k)
            .collect()
    }

    /// Number of bound keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns `true` if no key is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

/// Builder for [`KeyBindings`].
#[derive(Debug, Default)]
pub struct KeyBindingsBuilder {
    keys: HashMap<KeyCode, CameraAction>,
}

impl KeyBindingsBuilder {
    /// Create a new builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a key to an action. Later bindings of the same key win.
    #[must_use]
    pub fn bind(mut self, key: KeyCode, action: CameraAction) -> Self {
        self.keys.insert(key, action);
        self
    }

    /// Build the bindings.
    #[must_use]
    pub fn build(self) -> KeyBindings {
        KeyBindings { keys: self.keys }
    }
}
