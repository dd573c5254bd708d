#![no_std]
#![no_main]

use defmt::{error, info, warn};
use defmt_rtt as _;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::flash::Flash;
use embassy_rp::gpio::{Level, Output};
use embassy_rp::peripherals::UART1;
use embassy_rp::uart::{BufferedUart, Config as UartConfig};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_time::{Duration, Ticker};
use static_cell::StaticCell;
use x10_video_switch_rp2040::{
    ConfigStore, FlashStore, Frontend, PinSwitch, SharedSwitch, SwitchBridge, TimerProcess,
    Transceiver, UartLink, VideoSwitch, BAUDRATE,
};
use x10_video_switch_rp2040::link::{RX_BUFFER_LEN, TX_BUFFER_LEN};

#[cfg(feature = "dev-panic")]
use panic_probe as _;
#[cfg(feature = "prod-panic")]
use panic_reset as _;

bind_interrupts!(struct Irqs {
    UART1_IRQ => embassy_rp::uart::BufferedInterruptHandler<UART1>;
});

type Switch = SharedSwitch<CriticalSectionRawMutex, PinSwitch<Output<'static>>>;

/// Camera state shared by the receive and timer tasks.
static SWITCH: StaticCell<Switch> = StaticCell::new();

static RX_BUFFER: StaticCell<[u8; RX_BUFFER_LEN]> = StaticCell::new();
static TX_BUFFER: StaticCell<[u8; TX_BUFFER_LEN]> = StaticCell::new();

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("X10 video switch starting...");

    let p = embassy_rp::init(embassy_rp::config::Config::default());

    // --- Configuration ---
    let mut store = FlashStore::new(Flash::new_blocking(p.FLASH));
    let config = store.load_or_default();
    info!("Configuration: {:?}", config);

    // --- Video switch ---
    let lines = [
        Output::new(p.PIN_2, Level::Low),
        Output::new(p.PIN_3, Level::Low),
        Output::new(p.PIN_4, Level::Low),
        Output::new(p.PIN_5, Level::Low),
    ];
    #[cfg(feature = "proto-mr26a")]
    let driver = PinSwitch::with_control(lines, Output::new(p.PIN_6, Level::Low));
    #[cfg(feature = "proto-cm11a")]
    let driver = PinSwitch::new(lines);

    let switch = SWITCH.init(SharedSwitch::new(VideoSwitch::new(config, driver)));
    if let Err(e) = switch.lock(|sw| sw.start()) {
        error!("Output error at startup: {:?}", e);
    }

    // --- UART Setup ---
    let mut uart_config = UartConfig::default();
    uart_config.baudrate = BAUDRATE;

    let uart = BufferedUart::new(
        p.UART1,
        p.PIN_8, // TX
        p.PIN_9, // RX
        Irqs,
        TX_BUFFER.init([0; TX_BUFFER_LEN]),
        RX_BUFFER.init([0; RX_BUFFER_LEN]),
        uart_config,
    );
    let link = UartLink::new(uart);

    let frontend = Frontend::new();
    let timer = frontend.timer();

    // Spawn tasks (unwrap the spawn result)
    spawner.spawn(timer_task(switch, timer)).unwrap();
    spawner.spawn(receive_task(switch, link, frontend, store)).unwrap();

    info!("X10 video switch running at {} baud", BAUDRATE);
}

/// Receive task - feeds UART bytes to the menu or the transceiver decoder.
#[embassy_executor::task]
async fn receive_task(
    switch: &'static Switch,
    link: UartLink,
    frontend: Frontend,
    store: FlashStore<'static>,
) {
    let mut bridge = SwitchBridge::new(switch, link, frontend, store);
    if let Err(e) = bridge.start().await {
        warn!("Banner not sent: {:?}", e);
    }
    bridge.run().await
}

/// Timer task - scan advance, idle policy and transceiver resync.
#[embassy_executor::task]
async fn timer_task(switch: &'static Switch, mut timer: TimerProcess) {
    let mut ticker = Ticker::every(Duration::from_millis(timer.tick_millis()));
    loop {
        ticker.next().await;
        if let Err(e) = switch.tick(&mut timer) {
            error!("Timer tick failed: {:?}", e);
        }
    }
}
