//! Bluetooth LE stack contract
//!
//! The device core does not talk to a radio. It drives an implementation of
//! [`BleStack`], which owns the link layer, ATT/SMP execution and advertising
//! PDUs, and feeds the stack's events back through
//! [`HidDevice::handle_event`](crate::device::HidDevice::handle_event).
//!
//! [`SimulatedStack`] is a complete in-memory implementation that records
//! every primitive call. It backs the tests and the demo.

use crate::gatt::{ServiceDescriptor, Uuid};
use crate::smp::{IoCapability, PasskeyAction, PasskeyResponse};
use std::collections::BTreeMap;
use thiserror::Error;

/// Errors reported by a stack primitive
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StackError {
    #[error("Radio is not active")]
    NotActive,

    #[error("Unknown attribute handle: {0}")]
    UnknownHandle(u16),

    #[error("No connection with handle {0}")]
    NotConnected(u16),

    #[error("Driver error: {0}")]
    Driver(String),
}

/// Result type for stack primitives
pub type StackResult<T> = Result<T, StackError>;

/// GAP and security configuration applied when the device starts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackConfig {
    /// GAP device name
    pub gap_name: String,
    /// ATT MTU
    pub mtu: u16,
    /// Allow bonding
    pub bond: bool,
    /// Require LE secure connections pairing
    pub le_secure: bool,
    /// Require man-in-the-middle protection
    pub mitm: bool,
    /// Local I/O capability
    pub io_capability: IoCapability,
}

/// What the stack should advertise.
///
/// Building the advertising payload from these fields is the stack's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdvertisingParams {
    /// Complete local name
    pub name: String,
    /// GAP appearance value
    pub appearance: u16,
    /// Service UUIDs to list
    pub services: Vec<Uuid>,
    /// Advertising interval in microseconds
    pub interval_us: u32,
}

/// Primitive operations the device core consumes
pub trait BleStack {
    /// Turn the radio on or off
    fn set_active(&mut self, active: bool) -> StackResult<()>;

    /// Apply GAP and security configuration
    fn configure(&mut self, config: &StackConfig) -> StackResult<()>;

    /// Apply a negotiated MTU
    fn set_mtu(&mut self, mtu: u16) -> StackResult<()>;

    /// Register services; returns one flat handle list per service,
    /// each characteristic value handle followed by its descriptor handles
    fn register_services(&mut self, services: &[ServiceDescriptor]) -> StackResult<Vec<Vec<u16>>>;

    /// Read the stack's copy of an attribute value
    fn gatts_read(&mut self, handle: u16) -> StackResult<Vec<u8>>;

    /// Write the stack's copy of an attribute value
    fn gatts_write(&mut self, handle: u16, value: &[u8]) -> StackResult<()>;

    /// Send a notification to a connected peer
    fn gatts_notify(&mut self, conn_handle: u16, handle: u16, value: &[u8]) -> StackResult<()>;

    /// Terminate a connection
    fn disconnect(&mut self, conn_handle: u16) -> StackResult<()>;

    /// Answer a passkey action
    fn passkey_reply(
        &mut self,
        conn_handle: u16,
        action: PasskeyAction,
        response: PasskeyResponse,
    ) -> StackResult<()>;

    /// Start advertising
    fn start_advertising(&mut self, params: &AdvertisingParams) -> StackResult<()>;

    /// Stop advertising
    fn stop_advertising(&mut self) -> StackResult<()>;
}

/// A notification sent through [`SimulatedStack`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub conn_handle: u16,
    pub attr_handle: u16,
    pub value: Vec<u8>,
}

/// A passkey answer sent through [`SimulatedStack`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasskeyReply {
    pub conn_handle: u16,
    pub action: PasskeyAction,
    pub response: PasskeyResponse,
}

/// In-memory stack that records every primitive call.
///
/// Handles are assigned sequentially from 1 the way a real attribute
/// database lays them out: a service declaration, then for every
/// characteristic a declaration and a value handle, then its descriptors.
#[derive(Debug, Default)]
pub struct SimulatedStack {
    active: bool,
    config: Option<StackConfig>,
    mtu: Option<u16>,
    attributes: BTreeMap<u16, Vec<u8>>,
    registration_override: Option<Vec<Vec<u16>>>,
    notifications: Vec<Notification>,
    disconnects: Vec<u16>,
    passkey_replies: Vec<PasskeyReply>,
    advertising: Option<AdvertisingParams>,
    failing: bool,
}

impl SimulatedStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return `handles` from the next registration instead of the real layout
    pub fn override_registration(&mut self, handles: Vec<Vec<u16>>) {
        self.registration_override = Some(handles);
    }

    /// Make every primitive fail until reset
    pub fn set_failing(&mut self, failing: bool) {
        self.failing = failing;
    }

    /// Overwrite an attribute as a peer write would before raising the event
    pub fn peer_write(&mut self, handle: u16, value: &[u8]) {
        self.attributes.insert(handle, value.to_vec());
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn config(&self) -> Option<&StackConfig> {
        self.config.as_ref()
    }

    pub fn mtu(&self) -> Option<u16> {
        self.mtu
    }

    pub fn attribute(&self, handle: u16) -> Option<&[u8]> {
        self.attributes.get(&handle).map(|v| v.as_slice())
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn last_notification(&self) -> Option<&Notification> {
        self.notifications.last()
    }

    pub fn disconnects(&self) -> &[u16] {
        &self.disconnects
    }

    pub fn passkey_replies(&self) -> &[PasskeyReply] {
        &self.passkey_replies
    }

    pub fn advertising(&self) -> Option<&AdvertisingParams> {
        self.advertising.as_ref()
    }

    fn check(&self) -> StackResult<()> {
        if self.failing {
            return Err(StackError::Driver("simulated failure".into()));
        }
        Ok(())
    }

    fn check_active(&self) -> StackResult<()> {
        self.check()?;
        if !self.active {
            return Err(StackError::NotActive);
        }
        Ok(())
    }
}

impl BleStack for SimulatedStack {
    fn set_active(&mut self, active: bool) -> StackResult<()> {
        self.check()?;
        self.active = active;
        if !active {
            self.advertising = None;
        }
        Ok(())
    }

    fn configure(&mut self, config: &StackConfig) -> StackResult<()> {
        self.check_active()?;
        self.mtu = Some(config.mtu);
        self.config = Some(config.clone());
        Ok(())
    }

    fn set_mtu(&mut self, mtu: u16) -> StackResult<()> {
        self.check_active()?;
        self.mtu = Some(mtu);
        Ok(())
    }

    fn register_services(&mut self, services: &[ServiceDescriptor]) -> StackResult<Vec<Vec<u16>>> {
        self.check_active()?;
        self.attributes.clear();

        let mut next: u16 = 1;
        let mut registered = Vec::with_capacity(services.len());
        for service in services {
            // Service declaration
            next += 1;
            let mut handles = Vec::with_capacity(service.handle_count());
            for characteristic in &service.characteristics {
                // Characteristic declaration, then its value
                next += 1;
                handles.push(next);
                self.attributes.insert(next, Vec::new());
                next += 1;
                for _ in &characteristic.descriptors {
                    handles.push(next);
                    self.attributes.insert(next, Vec::new());
                    next += 1;
                }
            }
            registered.push(handles);
        }

        Ok(self.registration_override.take().unwrap_or(registered))
    }

    fn gatts_read(&mut self, handle: u16) -> StackResult<Vec<u8>> {
        self.check_active()?;
        self.attributes
            .get(&handle)
            .cloned()
            .ok_or(StackError::UnknownHandle(handle))
    }

    fn gatts_write(&mut self, handle: u16, value: &[u8]) -> StackResult<()> {
        self.check_active()?;
        match self.attributes.get_mut(&handle) {
            Some(slot) => {
                *slot = value.to_vec();
                Ok(())
            }
            None => Err(StackError::UnknownHandle(handle)),
        }
    }

    fn gatts_notify(&mut self, conn_handle: u16, handle: u16, value: &[u8]) -> StackResult<()> {
        self.check_active()?;
        self.notifications.push(Notification {
            conn_handle,
            attr_handle: handle,
            value: value.to_vec(),
        });
        Ok(())
    }

    fn disconnect(&mut self, conn_handle: u16) -> StackResult<()> {
        self.check_active()?;
        self.disconnects.push(conn_handle);
        Ok(())
    }

    fn passkey_reply(
        &mut self,
        conn_handle: u16,
        action: PasskeyAction,
        response: PasskeyResponse,
    ) -> StackResult<()> {
        self.check_active()?;
        self.passkey_replies.push(PasskeyReply {
            conn_handle,
            action,
            response,
        });
        Ok(())
    }

    fn start_advertising(&mut self, params: &AdvertisingParams) -> StackResult<()> {
        self.check_active()?;
        self.advertising = Some(params.clone());
        Ok(())
    }

    fn stop_advertising(&mut self) -> StackResult<()> {
        self.check_active()?;
        self.advertising = None;
        Ok(())
    }
}
