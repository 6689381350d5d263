//! HID service values shared by all profiles

/// HID information: bcdHID 1.1, country code 0, flags 0
pub const HID_INFORMATION: [u8; 4] = [0x01, 0x01, 0x00, 0x00];

/// Initial control point value
pub const CONTROL_POINT_INITIAL: u8 = 0x00;

/// Protocol mode: report protocol
pub const PROTOCOL_MODE_REPORT: u8 = 0x01;

// Report reference types
pub const REPORT_TYPE_INPUT: u8 = 1;
pub const REPORT_TYPE_OUTPUT: u8 = 2;

// Report ids
pub const KEYBOARD_REPORT_ID: u8 = 1;
pub const MOUSE_REPORT_ID: u8 = 1;
pub const JOYSTICK_REPORT_ID: u8 = 1;
pub const GENERIC_KEYBOARD_REPORT_ID: u8 = 1;
pub const GENERIC_MOUSE_REPORT_ID: u8 = 2;

// Axis bounds
pub const AXIS_MIN: i32 = -127;
pub const AXIS_MAX: i32 = 127;

/// Number of simultaneous keys in a keyboard report
pub const KEYBOARD_KEY_SLOTS: usize = 6;

// Report lengths
pub const KEYBOARD_REPORT_LEN: usize = 8;
pub const MOUSE_REPORT_LEN: usize = 4;
pub const JOYSTICK_REPORT_LEN: usize = 3;
