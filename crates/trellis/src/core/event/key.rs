//! Keystrokes, modifiers and the key events routed through the widget tree.
use std::ops::Add;

use crate::NodeId;

/// Modifier key state.
#[derive(Default, Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct Mods {
    /// Shift is active.
    pub shift: bool,
    /// Control is active.
    pub ctrl: bool,
    /// Alt is active.
    pub alt: bool,
}

impl Add<KeyCode> for Mods {
    type Output = Key;

    fn add(self, key: KeyCode) -> Self::Output {
        Key { mods: self, key }
    }
}

impl Add<char> for Mods {
    type Output = Key;

    fn add(self, other: char) -> Self::Output {
        Key {
            mods: self,
            key: other.into(),
        }
    }
}

impl Add<Self> for Mods {
    type Output = Self;

    fn add(self, other: Self) -> Self::Output {
        Self {
            shift: self.shift || other.shift,
            ctrl: self.ctrl || other.ctrl,
            alt: self.alt || other.alt,
        }
    }
}

/// No modifiers pressed.
#[allow(non_upper_case_globals)]
pub const Empty: Mods = Mods {
    shift: false,
    ctrl: false,
    alt: false,
};

/// Shift-only modifier state.
#[allow(non_upper_case_globals)]
pub const Shift: Mods = Mods {
    shift: true,
    ctrl: false,
    alt: false,
};

/// Control-only modifier state.
#[allow(non_upper_case_globals)]
pub const Ctrl: Mods = Mods {
    shift: false,
    ctrl: true,
    alt: false,
};

/// Alt-only modifier state.
#[allow(non_upper_case_globals)]
pub const Alt: Mods = Mods {
    shift: false,
    ctrl: false,
    alt: true,
};

/// Host-independent key codes.
#[derive(Debug, PartialOrd, PartialEq, Hash, Eq, Clone, Copy)]
pub enum KeyCode {
    /// Backspace key.
    Backspace,
    /// Enter/return key.
    Enter,
    /// Left arrow key.
    Left,
    /// Right arrow key.
    Right,
    /// Up arrow key.
    Up,
    /// Down arrow key.
    Down,
    /// Home key.
    Home,
    /// End key.
    End,
    /// Page up key.
    PageUp,
    /// Page down key.
    PageDown,
    /// Tab key.
    Tab,
    /// Shift + Tab key.
    BackTab,
    /// Delete key.
    Delete,
    /// Insert key.
    Insert,
    /// Escape key.
    Esc,
    /// Function key, numbered from 1.
    F(u8),
    /// A printable character.
    Char(char),
}

impl From<char> for KeyCode {
    fn from(c: char) -> Self {
        Self::Char(c)
    }
}

/// A key code plus the modifiers held with it.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct Key {
    /// Modifier state.
    pub mods: Mods,
    /// Key code.
    pub key: KeyCode,
}

impl Key {
    /// Is this a forward tab keystroke?
    pub fn is_tab(&self) -> bool {
        self.key == KeyCode::Tab && !self.mods.shift
    }

    /// Is this a backward tab keystroke? Hosts report shift-tab either as
    /// `BackTab` or as `Tab` with shift held.
    pub fn is_back_tab(&self) -> bool {
        self.key == KeyCode::BackTab || (self.key == KeyCode::Tab && self.mods.shift)
    }
}

impl PartialEq<KeyCode> for Key {
    fn eq(&self, c: &KeyCode) -> bool {
        // A bare key code never matches a modified key.
        if self.mods != Empty {
            return false;
        }
        *c == self.key
    }
}

impl PartialEq<char> for Key {
    fn eq(&self, c: &char) -> bool {
        *self == KeyCode::Char(*c)
    }
}

impl From<char> for Key {
    fn from(c: char) -> Self {
        Self {
            mods: Empty,
            key: KeyCode::Char(c),
        }
    }
}

impl From<KeyCode> for Key {
    fn from(c: KeyCode) -> Self {
        Self {
            mods: Empty,
            key: c,
        }
    }
}

/// Whether a key went down or up.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum KeyAction {
    /// The key was pressed.
    Pressed,
    /// The key was released.
    Released,
}

/// Raw key input pushed by the host.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct KeyInput {
    /// Press or release.
    pub action: KeyAction,
    /// The keystroke.
    pub key: Key,
}

impl KeyInput {
    /// A key press.
    pub fn pressed(key: impl Into<Key>) -> Self {
        Self {
            action: KeyAction::Pressed,
            key: key.into(),
        }
    }

    /// A key release.
    pub fn released(key: impl Into<Key>) -> Self {
        Self {
            action: KeyAction::Released,
            key: key.into(),
        }
    }
}

/// A key event delivered to widgets and key listeners.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct KeyEvent {
    /// Press or release.
    pub action: KeyAction,
    /// The keystroke.
    pub key: Key,
    /// The widget the event was sent to first.
    pub source: NodeId,
    /// The widget currently receiving the event.
    pub distributor: NodeId,
}

#[cfg(test)]
mod tests {
    use crate::{error::Result, event::key::*};

    #[test]
    fn tabs() -> Result<()> {
        assert!(Key::from(KeyCode::Tab).is_tab());
        assert!(!(Shift + KeyCode::Tab).is_tab());
        assert!((Shift + KeyCode::Tab).is_back_tab());
        assert!(Key::from(KeyCode::BackTab).is_back_tab());
        assert!(!Key::from('a').is_back_tab());
        Ok(())
    }

    #[test]
    fn compare() -> Result<()> {
        assert_eq!(Key::from('a'), 'a');
        assert_ne!(Ctrl + 'a', Key::from('a'));
        assert!(Ctrl + 'a' != KeyCode::Char('a'));
        assert_eq!(Ctrl + Alt + 'x', (Ctrl + Alt) + 'x');
        Ok(())
    }
}
