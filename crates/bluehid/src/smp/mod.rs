//! Pairing and link security
//!
//! The security manager itself runs inside the stack. This module holds the
//! values the device core tracks about it (I/O capability, passkey actions,
//! per-connection security status) and the gate that decides whether a peer
//! read may proceed given that status.

mod constants;
mod gate;
mod types;


pub use self::constants::*;
pub use self::gate::{ReadRequest, SecurityGate, SecurityPolicy};
pub use self::types::*;
