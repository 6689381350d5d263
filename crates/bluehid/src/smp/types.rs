//! Type definitions for pairing and link security
use super::constants::*;
use std::fmt;

/// IO Capability types for pairing
///
/// Ordering follows the protocol code, which the read gate relies on: any
/// capability above [`IoCapability::NoInputOutput`] can authenticate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum IoCapability {
    /// Display only capability
    DisplayOnly,
    /// Display with yes/no capability
    DisplayYesNo,
    /// Keyboard only
    KeyboardOnly,
    /// No input, no output
    NoInputOutput,
    /// Both keyboard and display
    KeyboardDisplay,
}

impl IoCapability {
    /// Convert to u8 value for the stack
    pub fn to_u8(&self) -> u8 {
        match self {
            IoCapability::DisplayOnly => IO_CAPABILITY_DISPLAY_ONLY,
            IoCapability::DisplayYesNo => IO_CAPABILITY_DISPLAY_YES_NO,
            IoCapability::KeyboardOnly => IO_CAPABILITY_KEYBOARD_ONLY,
            IoCapability::NoInputOutput => IO_CAPABILITY_NO_INPUT_OUTPUT,
            IoCapability::KeyboardDisplay => IO_CAPABILITY_KEYBOARD_DISPLAY,
        }
    }

    /// Convert from u8 value
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            IO_CAPABILITY_DISPLAY_ONLY => Some(IoCapability::DisplayOnly),
            IO_CAPABILITY_DISPLAY_YES_NO => Some(IoCapability::DisplayYesNo),
            IO_CAPABILITY_KEYBOARD_ONLY => Some(IoCapability::KeyboardOnly),
            IO_CAPABILITY_NO_INPUT_OUTPUT => Some(IoCapability::NoInputOutput),
            IO_CAPABILITY_KEYBOARD_DISPLAY => Some(IoCapability::KeyboardDisplay),
            _ => None,
        }
    }
}

impl Default for IoCapability {
    fn default() -> Self {
        IoCapability::NoInputOutput
    }
}

impl fmt::Display for IoCapability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IoCapability::DisplayOnly => write!(f, "Display Only"),
            IoCapability::DisplayYesNo => write!(f, "Display Yes/No"),
            IoCapability::KeyboardOnly => write!(f, "Keyboard Only"),
            IoCapability::NoInputOutput => write!(f, "No Input No Output"),
            IoCapability::KeyboardDisplay => write!(f, "Keyboard Display"),
        }
    }
}

/// Passkey interaction requested by the stack during pairing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasskeyAction {
    /// The peer displays a passkey that must be entered here
    Input,
    /// A passkey must be shown here for the peer to enter
    Display,
    /// Both sides show a number and the user confirms they match
    NumericComparison,
    /// Action code this crate does not know
    Unknown(u8),
}

impl PasskeyAction {
    pub fn to_u8(&self) -> u8 {
        match self {
            PasskeyAction::Input => PASSKEY_ACTION_INPUT,
            PasskeyAction::Display => PASSKEY_ACTION_DISPLAY,
            PasskeyAction::NumericComparison => PASSKEY_ACTION_NUMERIC_COMPARISON,
            PasskeyAction::Unknown(code) => *code,
        }
    }
}

impl From<u8> for PasskeyAction {
    fn from(value: u8) -> Self {
        match value {
            PASSKEY_ACTION_INPUT => PasskeyAction::Input,
            PASSKEY_ACTION_DISPLAY => PasskeyAction::Display,
            PASSKEY_ACTION_NUMERIC_COMPARISON => PasskeyAction::NumericComparison,
            other => PasskeyAction::Unknown(other),
        }
    }
}

/// Answer given to the stack for a passkey action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasskeyResponse {
    /// Accept or reject a numeric comparison
    Confirm(bool),
    /// Passkey to use, or none if the user supplied nothing
    Passkey(Option<u32>),
}

/// Security state of the current connection.
///
/// Replaced wholesale on every encryption update and reset on disconnect.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConnectionSecurityStatus {
    /// Link is encrypted
    pub encrypted: bool,
    /// Pairing was authenticated (MITM protected)
    pub authenticated: bool,
    /// Peer is bonded
    pub bonded: bool,
    /// Encryption key size in bytes
    pub key_size: u8,
}

impl ConnectionSecurityStatus {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
