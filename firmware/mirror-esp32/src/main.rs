//! GPIO mirror demo firmware for ESP32.
//!
//! Mirrors one input pin onto one output pin from the main task, with status
//! logging every five seconds and the task watchdog supervising the loop.
//! Retry policy lives here: a failed update is logged and retried on the
//! next cycle.

use core::time::Duration;

use dio::digital::{DigitalInput, DigitalOutput, InputMode};
use dio_esp::{EspDigitalIn, EspDigitalOut};
use log::{error, info, LevelFilter};
use mirror::Mirror;
use parking_lot::Mutex;
use platform::clock::{SystemClock, Uptime};
use platform::serial::StdoutSerial;
use platform::sleep::{sleep_for, StdDelay};
use platform::watchdog::Watchdog;
use platform::SerialLogger;

// Pin configuration
const INPUT_PIN: i32 = 4;
const OUTPUT_PIN: i32 = 5;

const WATCHDOG_TIMEOUT: Duration = Duration::from_secs(10);
const STATUS_PERIOD_MS: u64 = 5_000;
const LOOP_SLEEP: Duration = Duration::from_millis(10);

fn main() {
    // esp-idf-sys runtime patches must be linked in before any other call.
    esp_idf_sys::link_patches();

    if SerialLogger::new(StdoutSerial, LevelFilter::Info)
        .init()
        .is_err()
    {
        // Nowhere to report this; keep running unlogged.
    }

    info!("GPIO mirror starting up");

    let clock = SystemClock::new(Uptime::new());
    info!("System clock at startup: {} ms", clock.now_ms());

    let mut input = EspDigitalIn::new(INPUT_PIN, InputMode::PullDown);
    let mut output = EspDigitalOut::new(OUTPUT_PIN);
    match (input.enable(true), output.enable(true)) {
        (Ok(()), Ok(())) => {
            info!("GPIO initialized: input={}, output={}", INPUT_PIN, OUTPUT_PIN)
        }
        (input_res, output_res) => {
            error!("GPIO initialization failed: {:?} {:?}", input_res, output_res)
        }
    }

    let mut watchdog = Watchdog::new(dio_esp::TaskWdt::new());
    if let Err(e) = watchdog.enable(WATCHDOG_TIMEOUT) {
        error!("Watchdog enable failed: {}", e);
    }

    let mut mirror = Mirror::new(&input, &output);

    // Shared state protected by mutex
    let loop_count = Mutex::new(0u32);
    let mut last_status_ms = 0u64;

    loop {
        if let Err(e) = mirror.update() {
            error!("Mirror update failed: {}", e);
        }

        *loop_count.lock() += 1;

        let now_ms = clock.now_ms();
        if now_ms - last_status_ms >= STATUS_PERIOD_MS {
            info!("Status: time={} ms, loops={}", now_ms, *loop_count.lock());
            last_status_ms = now_ms;
        }

        if let Err(e) = watchdog.feed() {
            error!("Watchdog feed failed: {}", e);
        }

        sleep_for(&StdDelay, LOOP_SLEEP);
    }
}
