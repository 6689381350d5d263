//! ATT status codes as reported to the stack

pub const GATTS_NO_ERROR: u8 = 0x00;
pub const GATTS_ERROR_INVALID_HANDLE: u8 = 0x01;
pub const GATTS_ERROR_READ_NOT_PERMITTED: u8 = 0x02;
pub const GATTS_ERROR_WRITE_NOT_PERMITTED: u8 = 0x03;
pub const GATTS_ERROR_INSUFFICIENT_AUTHENTICATION: u8 = 0x05;
pub const GATTS_ERROR_REQUEST_NOT_SUPPORTED: u8 = 0x06;
pub const GATTS_ERROR_INSUFFICIENT_AUTHORIZATION: u8 = 0x08;
pub const GATTS_ERROR_ATTRIBUTE_NOT_FOUND: u8 = 0x0A;
pub const GATTS_ERROR_INSUFFICIENT_ENCRYPTION: u8 = 0x0F;
// Vendor range, used by stacks to refuse a write outright
pub const GATTS_ERROR_WRITE_REQUEST_REJECTED: u8 = 0xFC;

// Minimum key size accepted when secure pairing is required
pub const SECURE_MIN_KEY_SIZE: u8 = 16;
