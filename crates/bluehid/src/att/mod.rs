//! Attribute status codes
//!
//! Every read or write a peer performs on the GATT table is answered with one
//! of these codes. They travel back to the peer through the stack's standard
//! attribute-error channel.

pub mod constants;
pub mod status;

pub use self::constants::*;
pub use self::status::AttStatus;
