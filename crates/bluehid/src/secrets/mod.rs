//! Bonding secret storage
//!
//! The stack asks the device to remember and recall pairing keys. Secrets are
//! kept in memory by the device core and written to a [`SecretStore`] after
//! every change.

mod store;


pub use self::store::*;
