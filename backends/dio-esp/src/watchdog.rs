//! Task watchdog backend over `esp_task_wdt`.

use esp_idf_sys as sys;
use platform::watchdog::{WatchdogBackend, WatchdogError};

fn check(ret: sys::esp_err_t) -> Result<(), WatchdogError> {
    if ret == sys::ESP_OK as i32 {
        Ok(())
    } else {
        Err(WatchdogError::Driver(ret))
    }
}

/// ESP-IDF task watchdog subscribed to the calling task.
#[derive(Debug, Default)]
pub struct TaskWdt {
    subscribed: bool,
}

impl TaskWdt {
    pub fn new() -> Self {
        Self::default()
    }
}

impl WatchdogBackend for TaskWdt {
    fn start(&mut self, timeout_ms: u32) -> Result<(), WatchdogError> {
        let config = sys::esp_task_wdt_config_t {
            timeout_ms,
            idle_core_mask: 0,
            trigger_panic: true,
        };
        unsafe {
            let ret = sys::esp_task_wdt_init(&config);
            // Already running: reconfigure instead.
            if ret == sys::ESP_ERR_INVALID_STATE as i32 {
                check(sys::esp_task_wdt_reconfigure(&config))?;
            } else {
                check(ret)?;
            }

            if !self.subscribed {
                check(sys::esp_task_wdt_add(core::ptr::null_mut()))?;
                self.subscribed = true;
            }
        }
        Ok(())
    }

    fn stop(&mut self) -> Result<(), WatchdogError> {
        unsafe {
            if self.subscribed {
                check(sys::esp_task_wdt_delete(core::ptr::null_mut()))?;
                self.subscribed = false;
            }
            let ret = sys::esp_task_wdt_deinit();
            // Other tasks still subscribed: the timer cannot stop yet.
            if ret == sys::ESP_ERR_INVALID_STATE as i32 {
                return Err(WatchdogError::Unsupported);
            }
            check(ret)
        }
    }

    fn refresh(&mut self) -> Result<(), WatchdogError> {
        unsafe { check(sys::esp_task_wdt_reset()) }
    }
}
