//! Constants for pairing interactions

// IO Capability values
pub const IO_CAPABILITY_DISPLAY_ONLY: u8 = 0x00;
pub const IO_CAPABILITY_DISPLAY_YES_NO: u8 = 0x01;
pub const IO_CAPABILITY_KEYBOARD_ONLY: u8 = 0x02;
pub const IO_CAPABILITY_NO_INPUT_OUTPUT: u8 = 0x03;
pub const IO_CAPABILITY_KEYBOARD_DISPLAY: u8 = 0x04;

// Passkey actions requested by the stack
pub const PASSKEY_ACTION_INPUT: u8 = 0x02;
pub const PASSKEY_ACTION_DISPLAY: u8 = 0x03;
pub const PASSKEY_ACTION_NUMERIC_COMPARISON: u8 = 0x04;

// Passkey used when none is configured
pub const DEFAULT_PASSKEY: u32 = 1234;
