//! Configuration record in the last sector of the boot flash.

use embassy_rp::flash::{Blocking, Error as FlashError, Flash, ERASE_SIZE};
use embassy_rp::peripherals::FLASH;
use switch_core::{Config, ConfigStore, StoreError, RECORD_LEN};

/// Size of the Pico's QSPI flash.
pub const FLASH_SIZE: usize = 2 * 1024 * 1024;

/// Offset of the configuration sector, kept out of the program image by `memory.x`.
pub const CONFIG_OFFSET: u32 = (FLASH_SIZE - ERASE_SIZE) as u32;

#[inline]
fn flash_error_to_store_error(e: FlashError) -> StoreError {
    defmt::warn!("Flash error: {:?}", e);
    StoreError::Io
}

/// [`ConfigStore`] backed by on-board flash.
///
/// Every save erases the sector, so it should only follow a user action.
pub struct FlashStore<'d> {
    flash: Flash<'d, FLASH, Blocking, FLASH_SIZE>,
}

impl<'d> FlashStore<'d> {
    #[must_use]
    pub fn new(flash: Flash<'d, FLASH, Blocking, FLASH_SIZE>) -> Self {
        Self { flash }
    }
}

impl ConfigStore for FlashStore<'_> {
    fn load(&mut self) -> Result<Config, StoreError> {
        let mut record = [0u8; RECORD_LEN];
        self.flash
            .blocking_read(CONFIG_OFFSET, &mut record)
            .map_err(flash_error_to_store_error)?;
        Ok(Config::from_record(&record)?)
    }

    fn save(&mut self, config: &Config) -> Result<(), StoreError> {
        self.flash
            .blocking_erase(CONFIG_OFFSET, CONFIG_OFFSET + ERASE_SIZE as u32)
            .map_err(flash_error_to_store_error)?;
        self.flash
            .blocking_write(CONFIG_OFFSET, &config.to_record())
            .map_err(flash_error_to_store_error)
    }
}
