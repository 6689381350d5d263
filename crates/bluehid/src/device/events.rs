//! Stack events and their responses

use crate::att::AttStatus;
use crate::smp::{ConnectionSecurityStatus, PasskeyAction};

// Event codes as numbered by the stack's interrupt interface
pub const EVENT_CENTRAL_CONNECT: u8 = 1;
pub const EVENT_CENTRAL_DISCONNECT: u8 = 2;
pub const EVENT_GATTS_WRITE: u8 = 3;
pub const EVENT_GATTS_READ_REQUEST: u8 = 4;
pub const EVENT_GATTS_INDICATE_DONE: u8 = 20;
pub const EVENT_MTU_EXCHANGED: u8 = 21;
pub const EVENT_CONNECTION_UPDATE: u8 = 27;
pub const EVENT_ENCRYPTION_UPDATE: u8 = 28;
pub const EVENT_GET_SECRET: u8 = 29;
pub const EVENT_SET_SECRET: u8 = 30;
pub const EVENT_PASSKEY_ACTION: u8 = 31;

/// An event delivered by the stack
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StackEvent {
    CentralConnect {
        conn_handle: u16,
        addr_type: u8,
        addr: [u8; 6],
    },
    CentralDisconnect {
        conn_handle: u16,
        addr_type: u8,
        addr: [u8; 6],
    },
    /// A peer wrote an attribute; the new value is read back from the stack
    GattsWrite { conn_handle: u16, attr_handle: u16 },
    GattsReadRequest { conn_handle: u16, attr_handle: u16 },
    IndicateDone {
        conn_handle: u16,
        value_handle: u16,
        status: u8,
    },
    MtuExchanged { conn_handle: u16, mtu: u16 },
    ConnectionUpdate {
        conn_handle: u16,
        interval: u16,
        latency: u16,
        supervision_timeout: u16,
        status: u8,
    },
    EncryptionUpdate {
        conn_handle: u16,
        status: ConnectionSecurityStatus,
    },
    PasskeyAction {
        conn_handle: u16,
        action: PasskeyAction,
        passkey: u32,
    },
    /// Look up a secret by key, or the `index`-th secret of `sec_type` when
    /// no key is given
    GetSecret {
        sec_type: u8,
        index: usize,
        key: Option<Vec<u8>>,
    },
    /// Store a secret; a missing or empty value deletes it
    SetSecret {
        sec_type: u8,
        key: Vec<u8>,
        value: Option<Vec<u8>>,
    },
    /// An event this device does not handle
    Unknown(u8),
}

impl StackEvent {
    /// The stack's numeric code for this event
    pub fn code(&self) -> u8 {
        match self {
            Self::CentralConnect { .. } => EVENT_CENTRAL_CONNECT,
            Self::CentralDisconnect { .. } => EVENT_CENTRAL_DISCONNECT,
            Self::GattsWrite { .. } => EVENT_GATTS_WRITE,
            Self::GattsReadRequest { .. } => EVENT_GATTS_READ_REQUEST,
            Self::IndicateDone { .. } => EVENT_GATTS_INDICATE_DONE,
            Self::MtuExchanged { .. } => EVENT_MTU_EXCHANGED,
            Self::ConnectionUpdate { .. } => EVENT_CONNECTION_UPDATE,
            Self::EncryptionUpdate { .. } => EVENT_ENCRYPTION_UPDATE,
            Self::PasskeyAction { .. } => EVENT_PASSKEY_ACTION,
            Self::GetSecret { .. } => EVENT_GET_SECRET,
            Self::SetSecret { .. } => EVENT_SET_SECRET,
            Self::Unknown(code) => *code,
        }
    }
}

/// What the device hands back to the stack for an event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventResponse {
    /// Nothing to return
    None,
    /// ATT status for a read request or write
    Status(AttStatus),
    /// Result of a secret lookup
    Secret(Option<Vec<u8>>),
    /// Result of a secret update: true if stored, or if a deleted key existed
    SecretStored(bool),
}
