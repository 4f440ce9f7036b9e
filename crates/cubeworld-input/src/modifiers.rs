//! Modifier key flags.

use bitflags::bitflags;
use winit::keyboard::ModifiersState;

bitflags! {
    /// Modifier keys that change how a camera key behaves.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u8 {
        /// Shift held: keys use the large step.
        const SHIFT = 0b0000_0001;
    }
}

impl Modifiers {
    /// Returns `true` if the Shift key is pressed.
    #[inline]
    #[must_use]
    pub const fn shift(self) -> bool {
        self.contains(Self::SHIFT)
    }
}

/// Keeps the modifiers the controller reacts to; the rest are dropped.
impl From<ModifiersState> for Modifiers {
    fn from(state: ModifiersState) -> Self {
        if state.shift_key() {
            Self::SHIFT
        } else {
            Self::empty()
        }
    }
}
