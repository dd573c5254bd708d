//! X10 video switch for RP2040.
//!
//! This crate provides the embedded implementation of a four-camera video
//! switch controlled by X10 home automation commands received from a
//! transceiver over UART.
//!
//! # Overview
//!
//! The firmware runs on a Raspberry Pi Pico (RP2040) and:
//! 1. Talks to a CM11A power-line interface or an MR26A RF receiver over UART (8N1)
//! 2. Decodes the transceiver's framing and filters commands for its house code
//! 3. Drives the analog video switch select lines
//! 4. Scans the cameras and applies the idle policy on a periodic timer
//! 5. Offers a configuration menu on the same serial link, persisted in flash
//!
//! # Hardware Configuration
//!
//! | Function     | GPIO | Description |
//! |--------------|------|-------------|
//! | UART1 TX     | 8    | Serial transmit (transceiver, menu) |
//! | UART1 RX     | 9    | Serial receive |
//! | Camera 1-4   | 2-5  | Video switch select lines, active high |
//! | Control      | 6    | MR26A power, asserted after each update (`proto-mr26a`) |
//!
//! # Architecture
//!
//! The firmware uses the Embassy async runtime with two concurrent tasks:
//!
//! - **Receive Task**: Reads UART bytes, runs the menu or the transceiver decoder
//! - **Timer Task**: Ticks the scan, idle and resync timing
//!
//! Both share one [`SharedSwitch`] behind a critical-section mutex. The timer
//! wakes the receive task when a resync is due.
//!
//! # Modules
//!
//! - [`link`]: UART serial link ([`UartLink`])
//! - [`flash_store`]: flash-backed configuration ([`FlashStore`])
//!
//! # Features
//!
//! - **`dev-panic`** (default): Use `panic-probe` for development (prints panic info via RTT)
//! - **`prod-panic`**: Use `panic-reset` for production (silent watchdog reset)
//! - **`proto-cm11a`** (default): CM11A power-line interface, 4800 baud
//! - **`proto-mr26a`**: MR26A RF receiver, 9600 baud
//!
//! # Re-exports
//!
//! This crate re-exports the public items of [`switch_core`] that the
//! firmware needs, so consumers only need to depend on this crate.

#![no_std]

// Ensure exactly one transceiver is selected
#[cfg(all(feature = "proto-cm11a", feature = "proto-mr26a"))]
compile_error!("Cannot enable both `proto-cm11a` and `proto-mr26a` features - they share the UART");

#[cfg(not(any(feature = "proto-cm11a", feature = "proto-mr26a")))]
compile_error!("Enable one of the `proto-cm11a` or `proto-mr26a` features");

// Re-export core types for convenience
pub use switch_core::{
    BridgeError, Camera, Config, ConfigStore, LinkError, OutputDriver, OutputError, PinSwitch,
    SerialLink, SharedSwitch, StoreError, SwitchBridge, TimerProcess, Transceiver, VideoSwitch,
};

pub mod flash_store;
pub mod link;

pub use flash_store::FlashStore;
pub use link::UartLink;

/// Transceiver front end selected at build time.
#[cfg(feature = "proto-cm11a")]
pub type Frontend = switch_core::Cm11a;

/// UART rate of the selected transceiver.
#[cfg(feature = "proto-cm11a")]
pub const BAUDRATE: u32 = x10_proto::CM11A_BAUDRATE;

/// Transceiver front end selected at build time.
#[cfg(feature = "proto-mr26a")]
pub type Frontend = switch_core::Mr26a;

/// UART rate of the selected transceiver.
#[cfg(feature = "proto-mr26a")]
pub const BAUDRATE: u32 = x10_proto::MR26A_BAUDRATE;
