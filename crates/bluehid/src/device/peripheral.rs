//! HID device core
//!
//! Owns the lifecycle, the characteristic table and the connection, and
//! drives a [`BleStack`] on behalf of one [`HidProfile`].

use super::advertiser::{Advertiser, DEFAULT_ADVERTISING_INTERVAL_US};
use super::config::DeviceConfig;
use super::state::{DeviceState, StateMachine};
use crate::error::{HidError, HidResult};
use crate::gatt::constants::*;
use crate::gatt::services::{seed_standard_services, standard_services};
use crate::gatt::{bind_services, CharacteristicTable, ServiceDescriptor, Uuid};
use crate::hid::{HidProfile, InputReport};
use crate::secrets::{JsonFileSecretStore, SecretStore, Secrets};
use crate::smp::{ConnectionSecurityStatus, SecurityGate};
use crate::stack::{AdvertisingParams, BleStack};

/// Called for a passkey the user must type; `None` rejects pairing
pub type PasskeyCallback = Box<dyn FnMut() -> Option<u32> + Send + 'static>;

/// Called with the number to compare; returns whether the user confirmed it
pub type ComparisonCallback = Box<dyn FnMut(u32) -> bool + Send + 'static>;

/// A BLE HID peripheral
pub struct HidDevice<S: BleStack, P: HidProfile> {
    pub(crate) stack: S,
    pub(crate) profile: P,
    pub(crate) config: DeviceConfig,
    pub(crate) state: StateMachine,
    pub(crate) conn_handle: Option<u16>,
    pub(crate) security: ConnectionSecurityStatus,
    pub(crate) table: CharacteristicTable,
    pub(crate) secrets: Secrets,
    pub(crate) store: Box<dyn SecretStore + Send>,
    pub(crate) advertiser: Option<Advertiser>,
    pub(crate) battery_handle: Option<u16>,
    pub(crate) mtu: u16,
    pub(crate) passkey_callback: Option<PasskeyCallback>,
    pub(crate) comparison_callback: Option<ComparisonCallback>,
}

impl<S: BleStack, P: HidProfile> HidDevice<S, P> {
    /// Device with the profile's default configuration, keeping secrets in
    /// the default JSON file
    pub fn new(stack: S, profile: P) -> Self {
        let config = DeviceConfig::for_profile(&profile);
        Self::with_config(stack, profile, config, JsonFileSecretStore::default())
    }

    /// Device with an explicit configuration and secret store.
    ///
    /// Secrets are loaded here; a store that cannot be read yields an empty
    /// secret map.
    pub fn with_config<T>(stack: S, profile: P, config: DeviceConfig, store: T) -> Self
    where
        T: SecretStore + Send + 'static,
    {
        let mut store: Box<dyn SecretStore + Send> = Box::new(store);
        let secrets = match store.load() {
            Ok(secrets) => {
                log::debug!("Loaded {} bonding secrets", secrets.len());
                secrets
            }
            Err(e) => {
                log::warn!("Failed to load secrets, starting empty: {}", e);
                Secrets::new()
            }
        };

        let mtu = config.mtu;
        Self {
            stack,
            profile,
            config,
            state: StateMachine::new(),
            conn_handle: None,
            security: ConnectionSecurityStatus::default(),
            table: CharacteristicTable::new(),
            secrets,
            store,
            advertiser: None,
            battery_handle: None,
            mtu,
            passkey_callback: None,
            comparison_callback: None,
        }
    }

    /// Register services, seed the table and go Idle.
    ///
    /// No-op unless Stopped. A registration whose shape does not match the
    /// service descriptions is fatal: the radio is switched off again and
    /// the device stays Stopped.
    pub fn start(&mut self) -> HidResult<()> {
        if self.state() != DeviceState::Stopped {
            return Ok(());
        }

        self.stack.set_active(true)?;
        if let Err(e) = self.register() {
            log::error!("Failed to start {}: {}", self.config.device_name, e);
            self.table.clear();
            self.profile.release_handles();
            self.battery_handle = None;
            if let Err(e) = self.stack.set_active(false) {
                log::warn!("Failed to deactivate radio: {}", e);
            }
            return Err(e);
        }

        self.advertiser = Some(Advertiser::new(AdvertisingParams {
            name: self.config.device_name.clone(),
            appearance: self.config.appearance,
            services: vec![Uuid::from(HID_SERVICE_UUID)],
            interval_us: DEFAULT_ADVERTISING_INTERVAL_US,
        }));
        self.mtu = self.config.mtu;

        log::info!("Server started: {}", self.config.device_name);
        self.state.transition(DeviceState::Idle);
        Ok(())
    }

    fn register(&mut self) -> HidResult<()> {
        self.stack.configure(&self.config.stack_config())?;

        let services = self.services();
        for service in &services {
            log::debug!("Registering service {} ({} handles)", service.uuid, service.handle_count());
        }
        let registered = self.stack.register_services(&services)?;
        let handles = bind_services(&services, &registered)?;

        let [dis, bas, did, hid] = handles.as_slice() else {
            return Err(HidError::ServiceCountMismatch {
                expected: 4,
                actual: handles.len(),
            });
        };

        let standard = seed_standard_services(dis, bas, did, &self.config, &mut self.table)?;
        self.battery_handle = Some(standard.battery_level);
        self.profile.assign_handles(hid, &mut self.table)?;

        for (handle, entry) in self.table.iter() {
            log::trace!("Writing {} ({}): {}", entry.description, handle, hex::encode(&entry.value));
            self.stack.gatts_write(handle, &entry.value)?;
        }
        Ok(())
    }

    /// Full service list: the standard services, then the profile's HID service
    pub fn services(&self) -> Vec<ServiceDescriptor> {
        let mut services = standard_services();
        services.push(self.profile.hid_service());
        services
    }

    /// Tear everything down. Safe to call from any state.
    ///
    /// Stack failures on the way down are logged and do not stop the
    /// teardown.
    pub fn stop(&mut self) {
        if self.state() == DeviceState::Stopped {
            return;
        }

        if let Some(advertiser) = self.advertiser.as_mut() {
            if let Err(e) = advertiser.stop(&mut self.stack) {
                log::warn!("Failed to stop advertising: {}", e);
            }
        }
        if let Some(conn_handle) = self.conn_handle.take() {
            if let Err(e) = self.stack.disconnect(conn_handle) {
                log::warn!("Failed to disconnect {}: {}", conn_handle, e);
            }
        }
        if let Err(e) = self.stack.set_active(false) {
            log::warn!("Failed to deactivate radio: {}", e);
        }

        self.security.reset();
        self.table.clear();
        self.profile.release_handles();
        self.battery_handle = None;
        self.advertiser = None;

        log::info!("Server stopped");
        self.state.transition(DeviceState::Stopped);
    }

    /// Start advertising.
    ///
    /// No-op when Stopped or already advertising. The device serves a single
    /// central, so advertising while Connected is refused.
    pub fn start_advertising(&mut self) -> HidResult<()> {
        match self.state() {
            DeviceState::Stopped | DeviceState::Advertising => return Ok(()),
            DeviceState::Connected => return Err(HidError::InvalidState(DeviceState::Connected)),
            DeviceState::Idle => {}
        }

        if let Some(advertiser) = self.advertiser.as_mut() {
            advertiser.start(&mut self.stack)?;
        }
        self.state.transition(DeviceState::Advertising);
        Ok(())
    }

    /// Stop advertising. Returns to Idle unless Connected.
    pub fn stop_advertising(&mut self) -> HidResult<()> {
        if self.state() == DeviceState::Stopped {
            return Ok(());
        }

        if let Some(advertiser) = self.advertiser.as_mut() {
            advertiser.stop(&mut self.stack)?;
        }
        if self.state() != DeviceState::Connected {
            self.state.transition(DeviceState::Idle);
        }
        Ok(())
    }

    /// Pack the profile's input state and notify it. No-op unless connected.
    pub fn notify_hid_report(&mut self) -> HidResult<()> {
        match self.profile.encode_report() {
            Some(report) => self.send_report(report),
            None => Ok(()),
        }
    }

    pub(crate) fn send_report(&mut self, report: InputReport) -> HidResult<()> {
        let Some(conn_handle) = self.connected_handle() else {
            return Ok(());
        };

        self.table.insert(report.handle, report.description, report.data.clone());
        self.stack.gatts_write(report.handle, &report.data)?;
        self.stack.gatts_notify(conn_handle, report.handle, &report.data)?;
        log::debug!("Notify {} ({}): {}", report.description, report.handle, hex::encode(&report.data));
        Ok(())
    }

    /// Set the battery level, clamped to [0, 100].
    ///
    /// Takes effect in the table and the stack's attribute immediately when
    /// running; call [`notify_battery_level`](Self::notify_battery_level) to
    /// push it.
    pub fn set_battery_level(&mut self, level: i32) {
        let level = level.clamp(0, 100) as u8;
        self.config.battery_level = level;
        if let Some(handle) = self.battery_handle {
            self.table.update(handle, &[level]);
            if let Err(e) = self.stack.gatts_write(handle, &[level]) {
                log::warn!("Failed to write battery level: {}", e);
            }
        }
    }

    /// Notify the battery level. No-op unless connected.
    pub fn notify_battery_level(&mut self) -> HidResult<()> {
        let Some(handle) = self.battery_handle else {
            return Ok(());
        };
        self.send_report(InputReport {
            handle,
            description: "Battery level",
            data: vec![self.config.battery_level],
        })
    }

    fn connected_handle(&self) -> Option<u16> {
        if self.state() == DeviceState::Connected {
            self.conn_handle
        } else {
            None
        }
    }

    /// Register the state observer, replacing any previous one
    pub fn set_state_change_callback<F>(&mut self, callback: F)
    where
        F: FnMut() + Send + 'static,
    {
        self.state.set_callback(Some(Box::new(callback)));
    }

    /// Register the passkey entry handler; without one, entry is rejected
    pub fn set_passkey_callback<F>(&mut self, callback: F)
    where
        F: FnMut() -> Option<u32> + Send + 'static,
    {
        self.passkey_callback = Some(Box::new(callback));
    }

    /// Register the numeric comparison handler; without one, comparison is
    /// rejected
    pub fn set_comparison_callback<F>(&mut self, callback: F)
    where
        F: FnMut(u32) -> bool + Send + 'static,
    {
        self.comparison_callback = Some(Box::new(callback));
    }

    pub fn state(&self) -> DeviceState {
        self.state.state()
    }

    pub fn is_running(&self) -> bool {
        self.state().is_running()
    }

    pub fn is_connected(&self) -> bool {
        self.state() == DeviceState::Connected
    }

    pub fn is_advertising(&self) -> bool {
        self.state() == DeviceState::Advertising
    }

    pub fn device_name(&self) -> &str {
        &self.config.device_name
    }

    /// UUIDs of all registered services, in registration order
    pub fn service_uuids(&self) -> Vec<Uuid> {
        vec![
            Uuid::from(DEVICE_INFORMATION_SERVICE_UUID),
            Uuid::from(BATTERY_SERVICE_UUID),
            Uuid::from(DEVICE_IDENTIFICATION_SERVICE_UUID),
            Uuid::from(HID_SERVICE_UUID),
        ]
    }

    pub fn appearance(&self) -> u16 {
        self.config.appearance
    }

    pub fn battery_level(&self) -> u8 {
        self.config.battery_level
    }

    /// MTU in effect: configured at start, then as negotiated
    pub fn mtu(&self) -> u16 {
        self.mtu
    }

    pub fn security_status(&self) -> ConnectionSecurityStatus {
        self.security
    }

    pub fn connection_handle(&self) -> Option<u16> {
        self.conn_handle
    }

    pub fn config(&self) -> &DeviceConfig {
        &self.config
    }

    /// Configuration changes take effect on the next start
    pub fn config_mut(&mut self) -> &mut DeviceConfig {
        &mut self.config
    }

    pub fn table(&self) -> &CharacteristicTable {
        &self.table
    }

    pub fn secrets(&self) -> &Secrets {
        &self.secrets
    }

    pub fn battery_handle(&self) -> Option<u16> {
        self.battery_handle
    }

    pub fn profile(&self) -> &P {
        &self.profile
    }

    pub fn profile_mut(&mut self) -> &mut P {
        &mut self.profile
    }

    pub fn stack(&self) -> &S {
        &self.stack
    }

    pub fn stack_mut(&mut self) -> &mut S {
        &mut self.stack
    }

    pub(crate) fn security_gate(&self) -> SecurityGate {
        SecurityGate::new(self.config.security_policy())
    }
}
