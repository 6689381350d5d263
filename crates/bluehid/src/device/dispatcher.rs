//! Event dispatch
//!
//! Routes stack events into state transitions, security bookkeeping,
//! characteristic updates and secret store mutations.

use super::peripheral::HidDevice;
use super::events::{EventResponse, StackEvent};
use super::state::DeviceState;
use crate::att::AttStatus;
use crate::hid::{HidProfile, WriteDisposition};
use crate::smp::{ConnectionSecurityStatus, PasskeyAction, PasskeyResponse, ReadRequest};
use crate::stack::BleStack;

impl<S: BleStack, P: HidProfile> HidDevice<S, P> {
    /// Handle one stack event. Never fails; problems are logged.
    pub fn handle_event(&mut self, event: StackEvent) -> EventResponse {
        log::trace!("Stack event {}", event.code());

        match event {
            StackEvent::CentralConnect {
                conn_handle,
                addr_type,
                addr,
            } => {
                self.on_connect(conn_handle, addr_type, addr);
                EventResponse::None
            }
            StackEvent::CentralDisconnect {
                conn_handle,
                addr_type,
                addr,
            } => {
                self.on_disconnect(conn_handle, addr_type, addr);
                EventResponse::None
            }
            StackEvent::GattsWrite {
                conn_handle,
                attr_handle,
            } => EventResponse::Status(self.on_write(conn_handle, attr_handle)),
            StackEvent::GattsReadRequest {
                conn_handle,
                attr_handle,
            } => EventResponse::Status(self.on_read_request(conn_handle, attr_handle)),
            StackEvent::IndicateDone {
                conn_handle,
                value_handle,
                status,
            } => {
                log::debug!(
                    "Indication on {} for {} done, status {}",
                    conn_handle,
                    value_handle,
                    status
                );
                EventResponse::None
            }
            StackEvent::MtuExchanged { conn_handle, mtu } => {
                self.on_mtu_exchanged(conn_handle, mtu);
                EventResponse::None
            }
            StackEvent::ConnectionUpdate {
                conn_handle,
                interval,
                latency,
                supervision_timeout,
                status,
            } => {
                log::debug!(
                    "Connection {} updated: interval {}, latency {}, timeout {}, status {}",
                    conn_handle,
                    interval,
                    latency,
                    supervision_timeout,
                    status
                );
                self.conn_handle = Some(conn_handle);
                EventResponse::None
            }
            StackEvent::EncryptionUpdate {
                conn_handle,
                status,
            } => {
                self.on_encryption_update(conn_handle, status);
                EventResponse::None
            }
            StackEvent::PasskeyAction {
                conn_handle,
                action,
                passkey,
            } => {
                self.on_passkey_action(conn_handle, action, passkey);
                EventResponse::None
            }
            StackEvent::GetSecret {
                sec_type,
                index,
                key,
            } => EventResponse::Secret(self.on_get_secret(sec_type, index, key.as_deref())),
            StackEvent::SetSecret {
                sec_type,
                key,
                value,
            } => EventResponse::SecretStored(self.on_set_secret(sec_type, &key, value.as_deref())),
            StackEvent::Unknown(code) => {
                log::debug!("Ignoring unhandled event {}", code);
                EventResponse::None
            }
        }
    }

    fn on_connect(&mut self, conn_handle: u16, addr_type: u8, addr: [u8; 6]) {
        if self.state() == DeviceState::Stopped {
            log::warn!("Ignoring connection {} while stopped", conn_handle);
            return;
        }

        log::info!(
            "Central connected: handle {}, address {} (type {})",
            conn_handle,
            hex::encode(addr),
            addr_type
        );
        self.conn_handle = Some(conn_handle);
        if let Some(advertiser) = self.advertiser.as_mut() {
            advertiser.mark_stopped();
        }
        self.state.transition(DeviceState::Connected);
    }

    fn on_disconnect(&mut self, conn_handle: u16, addr_type: u8, addr: [u8; 6]) {
        log::info!(
            "Central disconnected: handle {}, address {} (type {})",
            conn_handle,
            hex::encode(addr),
            addr_type
        );
        self.conn_handle = None;
        self.security.reset();

        if self.state() != DeviceState::Stopped {
            self.state.transition(DeviceState::Idle);
        }
    }

    fn on_write(&mut self, conn_handle: u16, attr_handle: u16) -> AttStatus {
        let status = self.security_gate().decide_write(attr_handle, &self.table);
        if !status.is_ok() {
            log::warn!("Write from {} to unknown handle {}", conn_handle, attr_handle);
            return status;
        }

        let value = match self.stack.gatts_read(attr_handle) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("Failed to read written value of {}: {}", attr_handle, e);
                return AttStatus::WriteRequestRejected;
            }
        };

        if let WriteDisposition::Handled(status) = self.profile.intercept_write(attr_handle, &value) {
            return status;
        }

        self.table.update(attr_handle, &value);
        log::debug!(
            "{} ({}) written by {}: {}",
            self.table.description(attr_handle).unwrap_or("Attribute"),
            attr_handle,
            conn_handle,
            hex::encode(&value)
        );
        AttStatus::NoError
    }

    fn on_read_request(&mut self, conn_handle: u16, attr_handle: u16) -> AttStatus {
        let request = ReadRequest {
            conn_handle,
            attr_handle,
        };
        let status = self.security_gate().decide_read(
            request,
            &self.table,
            self.conn_handle,
            &self.security,
        );
        if !status.is_ok() {
            log::debug!("Read of {} by {} refused: {}", attr_handle, conn_handle, status);
        }
        status
    }

    fn on_mtu_exchanged(&mut self, conn_handle: u16, mtu: u16) {
        log::debug!("MTU for connection {} is {}", conn_handle, mtu);
        self.mtu = mtu;
        if let Err(e) = self.stack.set_mtu(mtu) {
            log::warn!("Failed to apply MTU {}: {}", mtu, e);
        }
    }

    fn on_encryption_update(&mut self, conn_handle: u16, status: ConnectionSecurityStatus) {
        log::info!(
            "Connection {} security: encrypted {}, authenticated {}, bonded {}, key size {}",
            conn_handle,
            status.encrypted,
            status.authenticated,
            status.bonded,
            status.key_size
        );
        self.security = status;
    }

    fn on_passkey_action(&mut self, conn_handle: u16, action: PasskeyAction, passkey: u32) {
        let response = match action {
            PasskeyAction::NumericComparison => {
                let accept = match self.comparison_callback.as_mut() {
                    Some(callback) => callback(passkey),
                    None => false,
                };
                PasskeyResponse::Confirm(accept)
            }
            PasskeyAction::Display => PasskeyResponse::Passkey(Some(self.config.passkey)),
            PasskeyAction::Input => {
                PasskeyResponse::Passkey(self.passkey_callback.as_mut().and_then(|callback| callback()))
            }
            PasskeyAction::Unknown(code) => {
                log::warn!("Unknown passkey action {} on connection {}", code, conn_handle);
                return;
            }
        };

        log::debug!("Answering passkey action {:?} with {:?}", action, response);
        if let Err(e) = self.stack.passkey_reply(conn_handle, action, response) {
            log::warn!("Failed to answer passkey action: {}", e);
        }
    }

    fn on_get_secret(&self, sec_type: u8, index: usize, key: Option<&[u8]>) -> Option<Vec<u8>> {
        let value = match key {
            Some(key) => self.secrets.get(sec_type, key),
            None => self.secrets.nth_of_type(sec_type, index),
        };
        log::debug!(
            "Secret lookup type {} {}: {}",
            sec_type,
            match key {
                Some(key) => format!("key {}", hex::encode(key)),
                None => format!("index {}", index),
            },
            if value.is_some() { "found" } else { "not found" }
        );
        value.map(<[u8]>::to_vec)
    }

    fn on_set_secret(&mut self, sec_type: u8, key: &[u8], value: Option<&[u8]>) -> bool {
        let stored = match value {
            Some(value) if !value.is_empty() => {
                self.secrets.insert(sec_type, key, value);
                true
            }
            _ => self.secrets.remove(sec_type, key).is_some(),
        };
        self.persist_secrets();
        stored
    }

    fn persist_secrets(&mut self) {
        if let Err(e) = self.store.save(&self.secrets) {
            log::warn!("Failed to persist secrets: {}", e);
        }
    }
}
