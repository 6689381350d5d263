//! Advertising control

use crate::stack::{AdvertisingParams, BleStack, StackResult};

/// Default advertising interval, 100 ms
pub const DEFAULT_ADVERTISING_INTERVAL_US: u32 = 100_000;

/// Tracks whether the stack is advertising on the device's behalf
#[derive(Debug, Clone)]
pub struct Advertiser {
    params: AdvertisingParams,
    advertising: bool,
}

impl Advertiser {
    pub fn new(params: AdvertisingParams) -> Self {
        Self {
            params,
            advertising: false,
        }
    }

    pub fn params(&self) -> &AdvertisingParams {
        &self.params
    }

    pub fn is_advertising(&self) -> bool {
        self.advertising
    }

    /// Start advertising. No-op if already advertising.
    pub fn start<S: BleStack + ?Sized>(&mut self, stack: &mut S) -> StackResult<()> {
        if self.advertising {
            return Ok(());
        }
        stack.start_advertising(&self.params)?;
        self.advertising = true;
        log::debug!(
            "Advertising \"{}\" (appearance {}) every {} us",
            self.params.name,
            self.params.appearance,
            self.params.interval_us
        );
        Ok(())
    }

    /// Stop advertising. No-op if not advertising.
    pub fn stop<S: BleStack + ?Sized>(&mut self, stack: &mut S) -> StackResult<()> {
        if !self.advertising {
            return Ok(());
        }
        stack.stop_advertising()?;
        self.advertising = false;
        Ok(())
    }

    /// Record that the stack stopped advertising on its own, as it does when
    /// a central connects
    pub fn mark_stopped(&mut self) {
        self.advertising = false;
    }
}
