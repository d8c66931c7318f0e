//! A platform-agnostic driver for the NXP PCF8563 real-time clock.
//!
//! The PCF8563 keeps seconds through years in BCD registers, provides a
//! single date/time alarm, a countdown timer, and a programmable CLKOUT
//! pin. This crate models every register as a typed bitfield, validates
//! values before anything touches the bus, and surfaces the chip's
//! clock-integrity (VL) bit on reads.
//!
//! All register conversion is pure; the [`PCF8563`] driver only sequences
//! I2C transactions over `embedded-hal`. Callers must serialize access to a
//! given chip instance, since operations such as setting the date/time are
//! multi-byte bursts and flag clearing is a read-then-write pair.
//!
//! # Example
//!
//! ```rust,ignore
//! use pcf8563::{Config, DateTime, PCF8563, DEFAULT_ADDRESS};
//!
//! let mut rtc = PCF8563::new(i2c, DEFAULT_ADDRESS);
//! rtc.configure(&Config { outputs_enabled: false })?;
//!
//! rtc.set_datetime(&DateTime {
//!     second: 0,
//!     minute: 30,
//!     hour: 7,
//!     day: 6,
//!     weekday: 4,
//!     month: 8,
//!     year: 2026,
//! })?;
//!
//! let now = rtc.datetime()?;
//! ```

#![cfg_attr(not(test), no_std)]

// Logging shims: forward to `log` when the feature is enabled, compile to
// nothing otherwise.
#[cfg(feature = "log")]
macro_rules! debug {
    ($($arg:tt)+) => { log::debug!($($arg)+) };
}
#[cfg(not(feature = "log"))]
macro_rules! debug {
    ($($arg:tt)+) => {};
}
#[cfg(feature = "log")]
macro_rules! error {
    ($($arg:tt)+) => { log::error!($($arg)+) };
}
#[cfg(not(feature = "log"))]
macro_rules! error {
    ($($arg:tt)+) => {};
}

mod alarm;
#[cfg(feature = "async")]
pub mod asynch;
mod datetime;
mod registers;

pub use alarm::{Alarm, AlarmError, AlarmMatch};
pub use datetime::{DateTime, DateTimeError};
pub use registers::*;

use alarm::PCF8563Alarm;
use datetime::PCF8563DateTime;
use embedded_hal::i2c::I2c;

/// The PCF8563's fixed 7-bit I2C address (0xA2 write / 0xA3 read on the wire).
pub const DEFAULT_ADDRESS: u8 = 0x51;

/// Device configuration applied by [`PCF8563::configure`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    /// Enable the alarm/timer interrupt outputs and the CLKOUT pin.
    pub outputs_enabled: bool,
}

/// Errors returned by the driver.
#[derive(Debug)]
pub enum PCF8563Error<I2CE> {
    /// I2C transport error, propagated verbatim
    I2c(I2CE),
    /// Date/time validation or conversion error
    DateTime(DateTimeError),
    /// Alarm validation error
    Alarm(AlarmError),
    /// The chip flagged its clock integrity (e.g. after power loss). The
    /// decoded date/time is carried so the caller can still inspect it.
    ClockIntegrity(DateTime),
}

impl<I2CE> From<DateTimeError> for PCF8563Error<I2CE> {
    fn from(e: DateTimeError) -> Self {
        PCF8563Error::DateTime(e)
    }
}

impl<I2CE> From<AlarmError> for PCF8563Error<I2CE> {
    fn from(e: AlarmError) -> Self {
        PCF8563Error::Alarm(e)
    }
}

// This macro generates a typed setter/getter pair for a single register.
macro_rules! set_and_get_register {
    ($(($name:ident, $regaddr:expr, $typ:ty)),+) => {
        $(
            paste::paste!{
                pub fn [< set_ $name >](&mut self, value: $typ) -> Result<(), PCF8563Error<I2C::Error>> {
                    self.i2c
                        .write(self.address, &[$regaddr as u8, value.into()])
                        .map_err(PCF8563Error::I2c)?;
                    Ok(())
                }
            }

            pub fn $name(&mut self) -> Result<$typ, PCF8563Error<I2C::Error>> {
                let mut data = [0];
                self.i2c
                    .write_read(self.address, &[$regaddr as u8], &mut data)
                    .map_err(PCF8563Error::I2c)?;
                Ok(<$typ>::from(data[0]))
            }
        )+
    }
}

/// PCF8563 Real-Time Clock driver.
///
/// Blocking interface over `embedded-hal` I2C. An async variant with the
/// same surface lives in [`asynch`] behind the `async` feature.
pub struct PCF8563<I2C: I2c> {
    i2c: I2C,
    address: u8,
}

impl<I2C: I2c> PCF8563<I2C> {
    /// Creates a new PCF8563 driver instance.
    ///
    /// # Arguments
    /// * `i2c` - The I2C bus implementation
    /// * `address` - The 7-bit device address (normally [`DEFAULT_ADDRESS`])
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// Releases the underlying I2C bus.
    pub fn release(self) -> I2C {
        self.i2c
    }

    /// Brings the device into a known state; call once before anything else.
    ///
    /// Clears control/status 1, programs the interrupt output enables, and
    /// enables or parks the CLKOUT pin, all according to `config`.
    pub fn configure(&mut self, config: &Config) -> Result<(), PCF8563Error<I2C::Error>> {
        self.set_control1(Control1::default())?;

        let mut control2 = Control2::default();
        control2.set_alarm_interrupt_enable(config.outputs_enabled);
        control2.set_timer_interrupt_enable(config.outputs_enabled);
        debug!("control2: {:?}", control2);
        self.set_control2(control2)?;

        let mut clkout = ClkoutControl::default();
        clkout.set_enable(config.outputs_enabled);
        self.set_clkout_control(clkout)?;
        Ok(())
    }

    /// Reads the interrupt flags and clears them on the device.
    ///
    /// The returned value is the unmasked register content; the write-back
    /// zeroes the AF/TF flags while preserving the interrupt enables. The
    /// read and write are issued back to back and must not be interleaved
    /// with other operations on the same chip.
    pub fn get_and_clear_flags(&mut self) -> Result<Control2, PCF8563Error<I2C::Error>> {
        let flags = self.control2()?;
        self.set_control2(flags.cleared())?;
        Ok(flags)
    }

    /// Enables the CLKOUT pin at the given frequency.
    pub fn set_clock_out(
        &mut self,
        frequency: ClockOutFrequency,
    ) -> Result<(), PCF8563Error<I2C::Error>> {
        let mut clkout = ClkoutControl::default();
        clkout.set_enable(true);
        clkout.set_frequency(frequency);
        self.set_clkout_control(clkout)
    }

    /// Starts the countdown timer from `count` ticks of `frequency`.
    pub fn set_timer(
        &mut self,
        frequency: TimerFrequency,
        count: u8,
    ) -> Result<(), PCF8563Error<I2C::Error>> {
        let mut control = TimerControl::default();
        control.set_enable(true);
        control.set_frequency(frequency);
        self.set_timer_control(control)?;
        self.i2c
            .write(self.address, &[RegAddr::Timer as u8, count])
            .map_err(PCF8563Error::I2c)?;
        Ok(())
    }

    /// Returns the current countdown timer value.
    pub fn timer(&mut self) -> Result<u8, PCF8563Error<I2C::Error>> {
        let mut data = [0];
        self.i2c
            .write_read(self.address, &[RegAddr::Timer as u8], &mut data)
            .map_err(PCF8563Error::I2c)?;
        Ok(data[0])
    }

    /// Programs the alarm registers in a single burst write.
    ///
    /// # Errors
    ///
    /// Fails with [`PCF8563Error::Alarm`] before any bus traffic if a field
    /// is out of range and not [`Alarm::DISABLED`].
    pub fn set_alarm(
        &mut self,
        alarm: &Alarm,
        matches: AlarmMatch,
    ) -> Result<(), PCF8563Error<I2C::Error>> {
        let raw = PCF8563Alarm::from_alarm(alarm, matches)?;
        let data: [u8; 4] = (&raw).into();
        self.i2c
            .write(
                self.address,
                &[
                    RegAddr::MinuteAlarm as u8,
                    data[0],
                    data[1],
                    data[2],
                    data[3],
                ],
            )
            .map_err(PCF8563Error::I2c)?;
        Ok(())
    }

    /// Reads back the currently programmed alarm.
    pub fn alarm(&mut self) -> Result<Alarm, PCF8563Error<I2C::Error>> {
        let mut data = [0; 4];
        self.i2c
            .write_read(self.address, &[RegAddr::MinuteAlarm as u8], &mut data)
            .map_err(PCF8563Error::I2c)?;
        Ok(PCF8563Alarm::from(data).into_alarm())
    }

    /// Sets the date and time in a single burst write.
    ///
    /// Writing the seconds register also clears the chip's VL bit.
    ///
    /// # Errors
    ///
    /// Fails with [`PCF8563Error::DateTime`] before any bus traffic if a
    /// field is out of range.
    pub fn set_datetime(&mut self, datetime: &DateTime) -> Result<(), PCF8563Error<I2C::Error>> {
        let raw = PCF8563DateTime::from_datetime(datetime)?;
        let data: [u8; 7] = (&raw).into();
        self.i2c
            .write(
                self.address,
                &[
                    RegAddr::Seconds as u8,
                    data[0],
                    data[1],
                    data[2],
                    data[3],
                    data[4],
                    data[5],
                    data[6],
                ],
            )
            .map_err(PCF8563Error::I2c)?;
        Ok(())
    }

    /// Reads the current date and time.
    ///
    /// # Errors
    ///
    /// When the chip reports the VL condition the registers still decode;
    /// the result is [`PCF8563Error::ClockIntegrity`] carrying the decoded
    /// value so the caller can decide whether to trust it.
    pub fn datetime(&mut self) -> Result<DateTime, PCF8563Error<I2C::Error>> {
        let mut data = [0; 7];
        self.i2c
            .write_read(self.address, &[RegAddr::Seconds as u8], &mut data)
            .map_err(PCF8563Error::I2c)?;
        let raw = PCF8563DateTime::from(data);
        let datetime = raw.into_datetime();
        if raw.voltage_low() {
            return Err(PCF8563Error::ClockIntegrity(datetime));
        }
        Ok(datetime)
    }

    set_and_get_register!(
        (control1, RegAddr::Control1, Control1),
        (control2, RegAddr::Control2, Control2),
        (clkout_control, RegAddr::ClkoutControl, ClkoutControl),
        (timer_control, RegAddr::TimerControl, TimerControl)
    );
}
