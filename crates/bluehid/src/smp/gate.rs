//! Read permission gate
//!
//! Evaluated on every peer read request. Rules are checked in a fixed order
//! and the first one that fails decides the status reported to the peer, so
//! the order below is part of the device's observable behaviour.

use super::types::{ConnectionSecurityStatus, IoCapability};
use crate::att::{AttStatus, SECURE_MIN_KEY_SIZE};
use crate::gatt::CharacteristicTable;

/// Security requirements configured on the device
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SecurityPolicy {
    /// Peers must be bonded before reading
    pub bond: bool,
    /// Local I/O capability
    pub io_capability: IoCapability,
    /// Peers must use a full-strength encrypted link
    pub le_secure: bool,
}

impl Default for SecurityPolicy {
    fn default() -> Self {
        Self {
            bond: true,
            io_capability: IoCapability::NoInputOutput,
            le_secure: true,
        }
    }
}

/// A read request as delivered by the stack
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadRequest {
    /// Connection the request arrived on
    pub conn_handle: u16,
    /// Attribute being read
    pub attr_handle: u16,
}

/// Decides whether a peer read is permitted
#[derive(Debug, Clone, Copy, Default)]
pub struct SecurityGate {
    policy: SecurityPolicy,
}

impl SecurityGate {
    pub fn new(policy: SecurityPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &SecurityPolicy {
        &self.policy
    }

    /// Evaluate a read request.
    ///
    /// `current_conn` is the single connection the device accepted, if any.
    pub fn decide_read(
        &self,
        request: ReadRequest,
        table: &CharacteristicTable,
        current_conn: Option<u16>,
        status: &ConnectionSecurityStatus,
    ) -> AttStatus {
        if !table.contains(request.attr_handle) {
            return AttStatus::InvalidHandle;
        }
        if current_conn != Some(request.conn_handle) {
            return AttStatus::ReadNotPermitted;
        }
        if self.policy.bond && !status.bonded {
            return AttStatus::InsufficientAuthorization;
        }
        if self.policy.io_capability > IoCapability::NoInputOutput && !status.authenticated {
            return AttStatus::InsufficientAuthentication;
        }
        if self.policy.le_secure && (!status.encrypted || status.key_size < SECURE_MIN_KEY_SIZE) {
            return AttStatus::InsufficientEncryption;
        }
        AttStatus::NoError
    }

    /// Evaluate a write request.
    ///
    /// Writes are not subject to the security checks; only the handle matters.
    pub fn decide_write(&self, attr_handle: u16, table: &CharacteristicTable) -> AttStatus {
        if table.contains(attr_handle) {
            AttStatus::NoError
        } else {
            AttStatus::AttributeNotFound
        }
    }
}
