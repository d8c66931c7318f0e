//! Async implementation of the PCF8563 driver.
//!
//! This module provides an async interface to the PCF8563 RTC device using
//! `embedded-hal-async` traits. It is only available when the `async`
//! feature is enabled.
//!
//! # Example
//!
//! ```rust,ignore
//! use pcf8563::asynch::PCF8563;
//!
//! // Initialize device
//! let mut rtc = PCF8563::new(i2c, pcf8563::DEFAULT_ADDRESS);
//!
//! // Configure asynchronously
//! rtc.configure(&config).await?;
//!
//! // Get current date/time asynchronously
//! let datetime = rtc.datetime().await?;
//! ```

use embedded_hal_async::i2c::I2c;

use crate::{
    alarm::PCF8563Alarm, datetime::PCF8563DateTime, Alarm, AlarmMatch, ClkoutControl,
    ClockOutFrequency, Config, Control1, Control2, DateTime, PCF8563Error, RegAddr, TimerControl,
    TimerFrequency,
};

// Async counterpart of the blocking single-register accessor macro.
macro_rules! set_and_get_register {
    ($(($name:ident, $regaddr:expr, $typ:ty)),+) => {
        $(
            paste::paste!{
                pub async fn [< set_ $name >](&mut self, value: $typ) -> Result<(), PCF8563Error<I2C::Error>> {
                    self.i2c
                        .write(self.address, &[$regaddr as u8, value.into()])
                        .await
                        .map_err(PCF8563Error::I2c)?;
                    Ok(())
                }
            }

            pub async fn $name(&mut self) -> Result<$typ, PCF8563Error<I2C::Error>> {
                let mut data = [0];
                self.i2c
                    .write_read(self.address, &[$regaddr as u8], &mut data)
                    .await
                    .map_err(PCF8563Error::I2c)?;
                Ok(<$typ>::from(data[0]))
            }
        )+
    }
}

/// PCF8563 Real-Time Clock async driver.
///
/// Same surface as the blocking [`crate::PCF8563`], with every transport
/// call awaited.
pub struct PCF8563<I2C: I2c> {
    i2c: I2C,
    address: u8,
}

impl<I2C: I2c> PCF8563<I2C> {
    /// Creates a new PCF8563 async driver instance.
    ///
    /// # Arguments
    /// * `i2c` - The async I2C bus implementation
    /// * `address` - The 7-bit device address (normally [`crate::DEFAULT_ADDRESS`])
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// Releases the underlying I2C bus.
    pub fn release(self) -> I2C {
        self.i2c
    }

    /// Brings the device into a known state; call once before anything else.
    pub async fn configure(&mut self, config: &Config) -> Result<(), PCF8563Error<I2C::Error>> {
        self.set_control1(Control1::default()).await?;

        let mut control2 = Control2::default();
        control2.set_alarm_interrupt_enable(config.outputs_enabled);
        control2.set_timer_interrupt_enable(config.outputs_enabled);
        debug!("control2: {:?}", control2);
        self.set_control2(control2).await?;

        let mut clkout = ClkoutControl::default();
        clkout.set_enable(config.outputs_enabled);
        self.set_clkout_control(clkout).await?;
        Ok(())
    }

    /// Reads the interrupt flags and clears them on the device.
    ///
    /// The returned value is the unmasked register content; the write-back
    /// zeroes the AF/TF flags while preserving the interrupt enables.
    pub async fn get_and_clear_flags(&mut self) -> Result<Control2, PCF8563Error<I2C::Error>> {
        let flags = self.control2().await?;
        self.set_control2(flags.cleared()).await?;
        Ok(flags)
    }

    /// Enables the CLKOUT pin at the given frequency.
    pub async fn set_clock_out(
        &mut self,
        frequency: ClockOutFrequency,
    ) -> Result<(), PCF8563Error<I2C::Error>> {
        let mut clkout = ClkoutControl::default();
        clkout.set_enable(true);
        clkout.set_frequency(frequency);
        self.set_clkout_control(clkout).await
    }

    /// Starts the countdown timer from `count` ticks of `frequency`.
    pub async fn set_timer(
        &mut self,
        frequency: TimerFrequency,
        count: u8,
    ) -> Result<(), PCF8563Error<I2C::Error>> {
        let mut control = TimerControl::default();
        control.set_enable(true);
        control.set_frequency(frequency);
        self.set_timer_control(control).await?;
        self.i2c
            .write(self.address, &[RegAddr::Timer as u8, count])
            .await
            .map_err(PCF8563Error::I2c)?;
        Ok(())
    }

    /// Returns the current countdown timer value.
    pub async fn timer(&mut self) -> Result<u8, PCF8563Error<I2C::Error>> {
        let mut data = [0];
        self.i2c
            .write_read(self.address, &[RegAddr::Timer as u8], &mut data)
            .await
            .map_err(PCF8563Error::I2c)?;
        Ok(data[0])
    }

    /// Programs the alarm registers in a single burst write.
    ///
    /// # Errors
    ///
    /// Fails with [`PCF8563Error::Alarm`] before any bus traffic if a field
    /// is out of range and not [`Alarm::DISABLED`].
    pub async fn set_alarm(
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
            .await
            .map_err(PCF8563Error::I2c)?;
        Ok(())
    }

    /// Reads back the currently programmed alarm.
    pub async fn alarm(&mut self) -> Result<Alarm, PCF8563Error<I2C::Error>> {
        let mut data = [0; 4];
        self.i2c
            .write_read(self.address, &[RegAddr::MinuteAlarm as u8], &mut data)
            .await
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
    pub async fn set_datetime(
        &mut self,
        datetime: &DateTime,
    ) -> Result<(), PCF8563Error<I2C::Error>> {
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
            .await
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
    pub async fn datetime(&mut self) -> Result<DateTime, PCF8563Error<I2C::Error>> {
        let mut data = [0; 7];
        self.i2c
            .write_read(self.address, &[RegAddr::Seconds as u8], &mut data)
            .await
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DEFAULT_ADDRESS;
    use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTransaction};

    #[tokio::test]
    async fn test_configure_with_outputs() {
        let expectations = [
            I2cTransaction::write(DEFAULT_ADDRESS, vec![0x00, 0x00]),
            I2cTransaction::write(DEFAULT_ADDRESS, vec![0x01, 0b11]),
            I2cTransaction::write(DEFAULT_ADDRESS, vec![0x0D, 0x80]),
        ];
        let i2c = I2cMock::new(&expectations);

        let mut rtc = PCF8563::new(i2c, DEFAULT_ADDRESS);
        rtc.configure(&Config {
            outputs_enabled: true,
        })
        .await
        .unwrap();

        rtc.release().done();
    }

    #[tokio::test]
    async fn test_get_and_clear_flags() {
        let expectations = [
            I2cTransaction::write_read(DEFAULT_ADDRESS, vec![0x01], vec![0b0000_1110]),
            I2cTransaction::write(DEFAULT_ADDRESS, vec![0x01, 0b0000_0010]),
        ];
        let i2c = I2cMock::new(&expectations);

        let mut rtc = PCF8563::new(i2c, DEFAULT_ADDRESS);
        let flags = rtc.get_and_clear_flags().await.unwrap();
        assert_eq!(u8::from(flags), 0b0000_1110);
        assert!(flags.alarm_flag());
        assert!(flags.timer_flag());
        assert!(flags.alarm_interrupt_enable());

        rtc.release().done();
    }

    #[tokio::test]
    async fn test_set_timer() {
        let expectations = [
            I2cTransaction::write(DEFAULT_ADDRESS, vec![0x0E, 0x82]),
            I2cTransaction::write(DEFAULT_ADDRESS, vec![0x0F, 60]),
        ];
        let i2c = I2cMock::new(&expectations);

        let mut rtc = PCF8563::new(i2c, DEFAULT_ADDRESS);
        rtc.set_timer(TimerFrequency::Hz1, 60).await.unwrap();

        rtc.release().done();
    }

    #[tokio::test]
    async fn test_set_datetime_invalid_makes_no_transaction() {
        let i2c = I2cMock::new(&[]);

        let mut rtc = PCF8563::new(i2c, DEFAULT_ADDRESS);
        let result = rtc
            .set_datetime(&DateTime {
                second: 60,
                minute: 0,
                hour: 0,
                day: 1,
                weekday: 0,
                month: 1,
                year: 2024,
            })
            .await;
        assert!(matches!(result, Err(PCF8563Error::DateTime(_))));

        rtc.release().done();
    }

    #[tokio::test]
    async fn test_datetime_roundtrip_through_device() {
        let datetime = DateTime {
            second: 7,
            minute: 8,
            hour: 9,
            day: 10,
            weekday: 5,
            month: 11,
            year: 1999,
        };
        let expectations = [
            I2cTransaction::write(
                DEFAULT_ADDRESS,
                vec![0x02, 0x07, 0x08, 0x09, 0x10, 0x05, 0x11, 0x99],
            ),
            I2cTransaction::write_read(
                DEFAULT_ADDRESS,
                vec![0x02],
                vec![0x07, 0x08, 0x09, 0x10, 0x05, 0x11, 0x99],
            ),
        ];
        let i2c = I2cMock::new(&expectations);

        let mut rtc = PCF8563::new(i2c, DEFAULT_ADDRESS);
        rtc.set_datetime(&datetime).await.unwrap();
        assert_eq!(rtc.datetime().await.unwrap(), datetime);

        rtc.release().done();
    }
}
