//! Outcome of a peer read or write evaluation
use super::constants::*;
use std::fmt;

/// Status returned to the stack for a peer read or write.
///
/// None of these halt the device; they are surfaced to the peer only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttStatus {
    /// Operation permitted
    NoError,
    /// Invalid handle
    InvalidHandle,
    /// Read not permitted
    ReadNotPermitted,
    /// Write not permitted
    WriteNotPermitted,
    /// Insufficient authentication
    InsufficientAuthentication,
    /// Request not supported
    RequestNotSupported,
    /// Insufficient authorization
    InsufficientAuthorization,
    /// Attribute not found
    AttributeNotFound,
    /// Insufficient encryption
    InsufficientEncryption,
    /// Write request rejected
    WriteRequestRejected,
    /// Code outside the set this crate produces
    Unknown(u8),
}

impl AttStatus {
    /// Returns true for [`AttStatus::NoError`]
    pub fn is_ok(&self) -> bool {
        matches!(self, AttStatus::NoError)
    }
}

impl From<u8> for AttStatus {
    fn from(code: u8) -> Self {
        match code {
            GATTS_NO_ERROR => AttStatus::NoError,
            GATTS_ERROR_INVALID_HANDLE => AttStatus::InvalidHandle,
            GATTS_ERROR_READ_NOT_PERMITTED => AttStatus::ReadNotPermitted,
            GATTS_ERROR_WRITE_NOT_PERMITTED => AttStatus::WriteNotPermitted,
            GATTS_ERROR_INSUFFICIENT_AUTHENTICATION => AttStatus::InsufficientAuthentication,
            GATTS_ERROR_REQUEST_NOT_SUPPORTED => AttStatus::RequestNotSupported,
            GATTS_ERROR_INSUFFICIENT_AUTHORIZATION => AttStatus::InsufficientAuthorization,
            GATTS_ERROR_ATTRIBUTE_NOT_FOUND => AttStatus::AttributeNotFound,
            GATTS_ERROR_INSUFFICIENT_ENCRYPTION => AttStatus::InsufficientEncryption,
            GATTS_ERROR_WRITE_REQUEST_REJECTED => AttStatus::WriteRequestRejected,
            other => AttStatus::Unknown(other),
        }
    }
}

impl From<AttStatus> for u8 {
    fn from(status: AttStatus) -> u8 {
        match status {
            AttStatus::NoError => GATTS_NO_ERROR,
            AttStatus::InvalidHandle => GATTS_ERROR_INVALID_HANDLE,
            AttStatus::ReadNotPermitted => GATTS_ERROR_READ_NOT_PERMITTED,
            AttStatus::WriteNotPermitted => GATTS_ERROR_WRITE_NOT_PERMITTED,
            AttStatus::InsufficientAuthentication => GATTS_ERROR_INSUFFICIENT_AUTHENTICATION,
            AttStatus::RequestNotSupported => GATTS_ERROR_REQUEST_NOT_SUPPORTED,
            AttStatus::InsufficientAuthorization => GATTS_ERROR_INSUFFICIENT_AUTHORIZATION,
            AttStatus::AttributeNotFound => GATTS_ERROR_ATTRIBUTE_NOT_FOUND,
            AttStatus::InsufficientEncryption => GATTS_ERROR_INSUFFICIENT_ENCRYPTION,
            AttStatus::WriteRequestRejected => GATTS_ERROR_WRITE_REQUEST_REJECTED,
            AttStatus::Unknown(code) => code,
        }
    }
}

impl fmt::Display for AttStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttStatus::NoError => write!(f, "no error"),
            AttStatus::InvalidHandle => write!(f, "invalid handle"),
            AttStatus::ReadNotPermitted => write!(f, "read not permitted"),
            AttStatus::WriteNotPermitted => write!(f, "write not permitted"),
            AttStatus::InsufficientAuthentication => write!(f, "insufficient authentication"),
            AttStatus::RequestNotSupported => write!(f, "request not supported"),
            AttStatus::InsufficientAuthorization => write!(f, "insufficient authorization"),
            AttStatus::AttributeNotFound => write!(f, "attribute not found"),
            AttStatus::InsufficientEncryption => write!(f, "insufficient encryption"),
            AttStatus::WriteRequestRejected => write!(f, "write request rejected"),
            AttStatus::Unknown(code) => write!(f, "unknown status 0x{:02x}", code),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_codes() {
        assert_eq!(u8::from(AttStatus::InvalidHandle), 0x01);
        assert_eq!(u8::from(AttStatus::InsufficientAuthorization), 0x08);
        assert_eq!(u8::from(AttStatus::AttributeNotFound), 0x0A);
        assert_eq!(u8::from(AttStatus::InsufficientEncryption), 0x0F);
        assert_eq!(u8::from(AttStatus::WriteRequestRejected), 0xFC);
    }

    #[test]
    fn test_unknown_code_is_preserved() {
        let status = AttStatus::from(0x42);
        assert_eq!(status, AttStatus::Unknown(0x42));
        assert_eq!(u8::from(status), 0x42);
        assert!(!status.is_ok());
        assert!(AttStatus::from(0x00).is_ok());
    }
}
