//! Assigned numbers used by the HID peripheral

// Services
pub const DEVICE_INFORMATION_SERVICE_UUID: u16 = 0x180A;
pub const BATTERY_SERVICE_UUID: u16 = 0x180F;
pub const DEVICE_IDENTIFICATION_SERVICE_UUID: u16 = 0x1200;
pub const HID_SERVICE_UUID: u16 = 0x1812;

// Device Information characteristics
pub const MODEL_NUMBER_UUID: u16 = 0x2A24;
pub const SERIAL_NUMBER_UUID: u16 = 0x2A25;
pub const FIRMWARE_REVISION_UUID: u16 = 0x2A26;
pub const HARDWARE_REVISION_UUID: u16 = 0x2A27;
pub const SOFTWARE_REVISION_UUID: u16 = 0x2A28;
pub const MANUFACTURER_NAME_UUID: u16 = 0x2A29;
pub const PNP_ID_UUID: u16 = 0x2A50;

// Battery characteristics
pub const BATTERY_LEVEL_UUID: u16 = 0x2A19;
pub const PRESENTATION_FORMAT_UUID: u16 = 0x2904;

// Device Identification characteristics
pub const SPECIFICATION_ID_UUID: u16 = 0x0200;
pub const VENDOR_ID_UUID: u16 = 0x0201;
pub const PRODUCT_ID_UUID: u16 = 0x0202;
pub const VERSION_UUID: u16 = 0x0203;
pub const PRIMARY_RECORD_UUID: u16 = 0x0204;
pub const VENDOR_ID_SOURCE_UUID: u16 = 0x0205;

// HID characteristics and descriptors
pub const HID_INFORMATION_UUID: u16 = 0x2A4A;
pub const HID_REPORT_MAP_UUID: u16 = 0x2A4B;
pub const HID_CONTROL_POINT_UUID: u16 = 0x2A4C;
pub const HID_REPORT_UUID: u16 = 0x2A4D;
pub const HID_PROTOCOL_MODE_UUID: u16 = 0x2A4E;
pub const HID_REPORT_REFERENCE_UUID: u16 = 0x2908;

// Appearance values
pub const APPEARANCE_GENERIC_HID: u16 = 960;
pub const APPEARANCE_KEYBOARD: u16 = 961;
pub const APPEARANCE_MOUSE: u16 = 962;
pub const APPEARANCE_JOYSTICK: u16 = 963;

// Default ATT MTU
pub const DEFAULT_MTU: u16 = 23;

// Battery presentation format: uint8, exponent 0, unit percentage, namespace SIG
pub const BATTERY_PRESENTATION_FORMAT: [u8; 7] = [0x04, 0x00, 0xAD, 0x27, 0x01, 0x00, 0x00];

// Device Identification specification id (1.3)
pub const DID_SPECIFICATION_ID: u16 = 0x0103;
