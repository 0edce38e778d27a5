//! Pointer event carriers shared by all tools.

/// Buttons held during a pointer move.
///
/// Backends map their native button masks onto this value; the tools only
/// care whether any button is still held (drag in progress) or none is
/// (pointer traveling free).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ButtonState {
    /// Left/primary button held
    pub left: bool,
    /// Right/secondary button held
    pub right: bool,
    /// Middle button held
    pub middle: bool,
}

impl ButtonState {
    /// No buttons held.
    pub fn released() -> Self {
        Self::default()
    }

    /// Only the primary button held.
    pub fn left_held() -> Self {
        Self {
            left: true,
            ..Self::default()
        }
    }

    /// Whether any button is currently held.
    pub fn any_held(&self) -> bool {
        self.left || self.right || self.middle
    }
}
