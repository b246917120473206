//! Digital line backends over ESP-IDF GPIO.

use dio::digital::{DigitalInput, DigitalOutput, DigitalState, InputMode};
use dio::error::{DioError, DioResult};
use esp_idf_sys as sys;

fn check(ret: sys::esp_err_t) -> DioResult<()> {
    if ret == sys::ESP_OK as i32 {
        Ok(())
    } else {
        Err(DioError::Driver(ret))
    }
}

/// Readable GPIO line.
///
/// `enable(true)` configures the pin direction and pull mode; reads before
/// that fail with the precondition error.
pub struct EspDigitalIn {
    pin: i32,
    mode: InputMode,
    enabled: bool,
}

impl EspDigitalIn {
    pub fn new(pin: i32, mode: InputMode) -> Self {
        Self {
            pin,
            mode,
            enabled: false,
        }
    }

    pub fn pin(&self) -> i32 {
        self.pin
    }
}

impl DigitalInput for EspDigitalIn {
    fn enable(&mut self, enable: bool) -> DioResult<()> {
        if !enable {
            self.enabled = false;
            return Ok(());
        }

        let pull = match self.mode {
            InputMode::Floating => sys::gpio_pull_mode_t_GPIO_FLOATING,
            InputMode::PullUp => sys::gpio_pull_mode_t_GPIO_PULLUP_ONLY,
            InputMode::PullDown => sys::gpio_pull_mode_t_GPIO_PULLDOWN_ONLY,
        };

        unsafe {
            check(sys::gpio_set_direction(
                self.pin,
                sys::gpio_mode_t_GPIO_MODE_INPUT,
            ))?;
            check(sys::gpio_set_pull_mode(self.pin, pull))?;
        }

        self.enabled = true;
        Ok(())
    }

    fn get_state(&self) -> DioResult<DigitalState> {
        if !self.enabled {
            return Err(DioError::NotEnabled);
        }
        let level = unsafe { sys::gpio_get_level(self.pin) };
        Ok(if level != 0 {
            DigitalState::Active
        } else {
            DigitalState::Inactive
        })
    }
}

/// Writable GPIO line (push-pull output).
pub struct EspDigitalOut {
    pin: i32,
    enabled: bool,
}

impl EspDigitalOut {
    pub fn new(pin: i32) -> Self {
        Self {
            pin,
            enabled: false,
        }
    }

    pub fn pin(&self) -> i32 {
        self.pin
    }
}

impl DigitalOutput for EspDigitalOut {
    fn enable(&mut self, enable: bool) -> DioResult<()> {
        if !enable {
            self.enabled = false;
            return Ok(());
        }

        unsafe {
            check(sys::gpio_set_direction(
                self.pin,
                sys::gpio_mode_t_GPIO_MODE_OUTPUT,
            ))?;
        }

        self.enabled = true;
        Ok(())
    }

    fn set_state(&self, state: DigitalState) -> DioResult<()> {
        if !self.enabled {
            return Err(DioError::NotEnabled);
        }
        let level = match state {
            DigitalState::Active => 1,
            DigitalState::Inactive => 0,
        };
        unsafe { check(sys::gpio_set_level(self.pin, level)) }
    }
}
