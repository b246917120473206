use core::time::Duration;
use std::cell::RefCell;
use std::sync::Arc;

use log::{Level, LevelFilter, Log, Record};

use crate::clock::{SystemClock, TickSource};
use crate::logger::{level_from_raw, SerialLogger};
use crate::serial::{BufferSerial, SerialError, SerialIo};
use crate::sleep::{sleep_for, DelayBackend};
use crate::watchdog::{Watchdog, WatchdogBackend, WatchdogError};

// --- clock ---

struct FixedTicks(u64);

impl TickSource for FixedTicks {
    fn millis(&self) -> u64 {
        self.0
    }
}

#[test]
fn system_clock_reports_source_millis() {
    let clock = SystemClock::new(FixedTicks(5_250));
    assert_eq!(clock.now_ms(), 5_250);
    assert_eq!(clock.now(), Duration::from_millis(5_250));
}

// --- sleep ---

#[derive(Default)]
struct RecordingDelay {
    delays: RefCell<Vec<u32>>,
    yields: RefCell<u32>,
}

impl DelayBackend for RecordingDelay {
    fn delay_ms(&self, ms: u32) {
        self.delays.borrow_mut().push(ms);
    }

    fn yield_now(&self) {
        *self.yields.borrow_mut() += 1;
    }
}

#[test]
fn zero_sleep_yields_instead() {
    let delay = RecordingDelay::default();
    sleep_for(&delay, Duration::ZERO);
    assert!(delay.delays.borrow().is_empty());
    assert_eq!(*delay.yields.borrow(), 1);
}

#[test]
fn short_sleep_is_one_delay_call() {
    let delay = RecordingDelay::default();
    sleep_for(&delay, Duration::from_millis(10));
    assert_eq!(*delay.delays.borrow(), vec![10]);
    assert_eq!(*delay.yields.borrow(), 0);
}

#[test]
fn long_sleep_is_chunked_at_u32_max() {
    let delay = RecordingDelay::default();
    let total = u32::MAX as u64 + 7;
    sleep_for(&delay, Duration::from_millis(total));
    assert_eq!(*delay.delays.borrow(), vec![u32::MAX, 7]);
}

// --- watchdog ---

#[derive(Default)]
struct CountingWdt {
    started_with: Option<u32>,
    stops: u32,
    refreshes: u32,
    stoppable: bool,
}

impl WatchdogBackend for CountingWdt {
    fn start(&mut self, timeout_ms: u32) -> Result<(), WatchdogError> {
        self.started_with = Some(timeout_ms);
        Ok(())
    }

    fn stop(&mut self) -> Result<(), WatchdogError> {
        if !self.stoppable {
            return Err(WatchdogError::Unsupported);
        }
        self.stops += 1;
        Ok(())
    }

    fn refresh(&mut self) -> Result<(), WatchdogError> {
        self.refreshes += 1;
        Ok(())
    }
}

#[test]
fn feed_before_enable_is_a_precondition_failure() {
    let mut wdt = Watchdog::new(CountingWdt::default());
    assert_eq!(wdt.feed(), Err(WatchdogError::NotEnabled));
    assert!(!wdt.is_enabled());
}

#[test]
fn enable_then_feed_refreshes_backend() {
    let mut wdt = Watchdog::new(CountingWdt {
        stoppable: true,
        ..Default::default()
    });

    wdt.enable(Duration::from_secs(10)).unwrap();
    assert!(wdt.is_enabled());
    assert_eq!(wdt.timeout_ms(), 10_000);
    assert_eq!(wdt.backend().started_with, Some(10_000));

    wdt.feed().unwrap();
    wdt.feed().unwrap();
    assert_eq!(wdt.backend().refreshes, 2);

    wdt.disable().unwrap();
    assert!(!wdt.is_enabled());
    assert_eq!(wdt.backend().stops, 1);
    assert_eq!(wdt.feed(), Err(WatchdogError::NotEnabled));
}

#[test]
fn unstoppable_watchdog_stays_enabled() {
    let mut wdt = Watchdog::new(CountingWdt::default());
    wdt.enable_ms(1_000).unwrap();

    assert_eq!(wdt.disable(), Err(WatchdogError::Unsupported));
    assert!(wdt.is_enabled());
    // Feeding still works after the failed disable.
    wdt.feed().unwrap();
}

// --- serial ---

#[test]
fn write_line_appends_crlf_and_counts_bytes() {
    let serial = BufferSerial::new();
    let written = serial.write_line("status ok").unwrap();
    assert_eq!(written, "status ok".len() + 2);
    assert_eq!(serial.take_string(), "status ok\r\n");
}

#[test]
fn reads_drain_in_fifo_order() {
    let serial = BufferSerial::new();
    serial.write_byte(b'a').unwrap();
    serial.write_byte(b'b').unwrap();

    assert_eq!(serial.try_read_byte(), Ok(b'a'));
    assert_eq!(serial.read_byte(), Ok(b'b'));
    assert_eq!(serial.try_read_byte(), Err(SerialError::Unavailable));
    assert_eq!(serial.read_byte(), Err(SerialError::Exhausted));
}

// --- logger ---

fn record(level: Level, target: &str, msg: &str) -> String {
    let sink = Arc::new(BufferSerial::new());
    let logger = SerialLogger::new(sink.clone(), LevelFilter::Debug);
    logger.log(
        &Record::builder()
            .level(level)
            .target(target)
            .args(format_args!("{}", msg))
            .build(),
    );
    sink.take_string()
}

#[test]
fn logger_writes_one_line_per_record() {
    assert_eq!(
        record(Level::Info, "app", "mirror running"),
        "INFO [app] mirror running\r\n"
    );
}

#[test]
fn logger_filters_below_max_level() {
    assert_eq!(record(Level::Trace, "app", "noise"), "");
}

#[test]
fn vendor_levels_map_onto_facade_levels() {
    assert_eq!(level_from_raw(1), Level::Debug); // vendor trace
    assert_eq!(level_from_raw(30), Level::Info);
    assert_eq!(level_from_raw(40), Level::Warn);
    assert_eq!(level_from_raw(50), Level::Error);
    assert_eq!(level_from_raw(60), Level::Error); // vendor panic
}
