//! Register definitions and bitfield structures for the PCF8563 RTC.
//!
//! This module contains all register addresses, bitfield definitions, and
//! related types for interacting with the PCF8563 Real-Time Clock registers.

use bitfield::bitfield;

/// Register addresses for the PCF8563 RTC.
#[allow(unused)]
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RegAddr {
    /// Control/status register 1
    Control1 = 0x00,
    /// Control/status register 2 (interrupt enables and flags)
    Control2 = 0x01,
    /// Seconds register (0-59) with the VL clock-integrity bit
    Seconds = 0x02,
    /// Minutes register (0-59)
    Minutes = 0x03,
    /// Hours register (0-23)
    Hours = 0x04,
    /// Days register (1-31)
    Days = 0x05,
    /// Weekdays register (0-6)
    Weekdays = 0x06,
    /// Months register (1-12) with century flag
    Months = 0x07,
    /// Years register (0-99)
    Years = 0x08,
    /// Minute alarm register
    MinuteAlarm = 0x09,
    /// Hour alarm register
    HourAlarm = 0x0A,
    /// Day alarm register
    DayAlarm = 0x0B,
    /// Weekday alarm register
    WeekdayAlarm = 0x0C,
    /// CLKOUT control register
    ClkoutControl = 0x0D,
    /// Timer control register
    TimerControl = 0x0E,
    /// Timer countdown value register (raw binary, 0-255)
    Timer = 0x0F,
}

/// CLKOUT pin output frequency options.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClockOutFrequency {
    /// 32.768 kHz output
    Hz32768 = 0b00,
    /// 1.024 kHz output
    Hz1024 = 0b01,
    /// 32 Hz output
    Hz32 = 0b10,
    /// 1 Hz output
    Hz1 = 0b11,
}
impl From<u8> for ClockOutFrequency {
    /// Creates a `ClockOutFrequency` from a raw register value.
    ///
    /// # Panics
    /// Panics if the value is not 0b00, 0b01, 0b10, or 0b11.
    fn from(v: u8) -> Self {
        match v {
            0b00 => ClockOutFrequency::Hz32768,
            0b01 => ClockOutFrequency::Hz1024,
            0b10 => ClockOutFrequency::Hz32,
            0b11 => ClockOutFrequency::Hz1,
            _ => panic!("Invalid value for ClockOutFrequency: {}", v),
        }
    }
}
impl From<ClockOutFrequency> for u8 {
    /// Converts a `ClockOutFrequency` to its raw register value.
    fn from(v: ClockOutFrequency) -> Self {
        v as u8
    }
}

/// Countdown timer source clock options.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimerFrequency {
    /// 4.096 kHz countdown clock
    Hz4096 = 0b00,
    /// 64 Hz countdown clock
    Hz64 = 0b01,
    /// 1 Hz countdown clock
    Hz1 = 0b10,
    /// 1/60 Hz countdown clock (one tick per minute)
    Hz1_60 = 0b11,
}
impl From<u8> for TimerFrequency {
    /// Creates a `TimerFrequency` from a raw register value.
    ///
    /// # Panics
    /// Panics if the value is not 0b00, 0b01, 0b10, or 0b11.
    fn from(v: u8) -> Self {
        match v {
            0b00 => TimerFrequency::Hz4096,
            0b01 => TimerFrequency::Hz64,
            0b10 => TimerFrequency::Hz1,
            0b11 => TimerFrequency::Hz1_60,
            _ => panic!("Invalid value for TimerFrequency: {}", v),
        }
    }
}
impl From<TimerFrequency> for u8 {
    /// Converts a `TimerFrequency` to its raw register value.
    fn from(v: TimerFrequency) -> Self {
        v as u8
    }
}

// This macro generates the From<u8> and Into<u8> implementations for the
// register type
macro_rules! from_register_u8 {
    ($typ:ty) => {
        impl From<u8> for $typ {
            fn from(v: u8) -> Self {
                paste::paste!([< $typ >](v))
            }
        }
        impl From<$typ> for u8 {
            fn from(v: $typ) -> Self {
                v.0
            }
        }
    };
}

bitfield! {
    /// Control/status register 1.
    #[derive(Clone, Copy, Default, PartialEq)]
    pub struct Control1(u8);
    impl Debug;
    /// TEST1 mode bit (normal operation when clear)
    pub test1, set_test1: 7;
    /// STOP bit (halts the clock divider chain)
    pub stop, set_stop: 5;
    /// TESTC bit (power-on-reset override)
    pub testc, set_testc: 3;
}
from_register_u8!(Control1);

bitfield! {
    /// Control/status register 2 with interrupt enables and flags.
    #[derive(Clone, Copy, Default, PartialEq)]
    pub struct Control2(u8);
    impl Debug;
    /// Timer interrupt pulse mode (TI_TP)
    pub pulse_interrupt, set_pulse_interrupt: 4;
    /// Alarm flag (AF), set by the chip when the alarm matches
    pub alarm_flag, set_alarm_flag: 3;
    /// Timer flag (TF), set by the chip when the countdown expires
    pub timer_flag, set_timer_flag: 2;
    /// Alarm interrupt output enable (AIE)
    pub alarm_interrupt_enable, set_alarm_interrupt_enable: 1;
    /// Timer interrupt output enable (TIE)
    pub timer_interrupt_enable, set_timer_interrupt_enable: 0;
}
from_register_u8!(Control2);

impl Control2 {
    /// Bits preserved by a flag-clearing write-back. Everything outside this
    /// mask, the AF and TF flags included, is written back as zero.
    pub const CLEAR_MASK: u8 = 0b0001_0011;

    /// Returns the byte to write back after reading the flags.
    #[must_use]
    pub fn cleared(self) -> Self {
        Control2(self.0 & Self::CLEAR_MASK)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Control2 {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Control2(");
        let mut first = true;
        if self.alarm_flag() {
            defmt::write!(f, "AF");
            first = false;
        }
        if self.timer_flag() {
            if !first {
                defmt::write!(f, ", ");
            }
            defmt::write!(f, "TF");
            first = false;
        }
        if self.alarm_interrupt_enable() {
            if !first {
                defmt::write!(f, ", ");
            }
            defmt::write!(f, "AIE");
            first = false;
        }
        if self.timer_interrupt_enable() {
            if !first {
                defmt::write!(f, ", ");
            }
            defmt::write!(f, "TIE");
            first = false;
        }
        if self.pulse_interrupt() {
            if !first {
                defmt::write!(f, ", ");
            }
            defmt::write!(f, "TI_TP");
            first = false;
        }
        if first {
            defmt::write!(f, "clear");
        }
        defmt::write!(f, ")");
    }
}

bitfield! {
    /// Seconds register (0-59) with BCD encoding and the VL integrity bit.
    #[derive(Clone, Copy, Default, PartialEq)]
    pub struct Seconds(u8);
    impl Debug;
    /// Voltage-low flag (VL); clock integrity is not guaranteed when set
    pub voltage_low, set_voltage_low: 7;
    /// Tens place of seconds (0-5)
    pub ten_seconds, set_ten_seconds: 6, 4;
    /// Ones place of seconds (0-9)
    pub seconds, set_seconds: 3, 0;
}
from_register_u8!(Seconds);

#[cfg(feature = "defmt")]
impl defmt::Format for Seconds {
    fn format(&self, f: defmt::Formatter) {
        let seconds = 10 * self.ten_seconds() + self.seconds();
        defmt::write!(f, "Seconds({}s", seconds);
        if self.voltage_low() {
            defmt::write!(f, ", VL");
        }
        defmt::write!(f, ")");
    }
}

bitfield! {
    /// Minutes register (0-59) with BCD encoding.
    #[derive(Clone, Copy, Default, PartialEq)]
    pub struct Minutes(u8);
    impl Debug;
    /// Tens place of minutes (0-5)
    pub ten_minutes, set_ten_minutes: 6, 4;
    /// Ones place of minutes (0-9)
    pub minutes, set_minutes: 3, 0;
}
from_register_u8!(Minutes);

#[cfg(feature = "defmt")]
impl defmt::Format for Minutes {
    fn format(&self, f: defmt::Formatter) {
        let minutes = 10 * self.ten_minutes() + self.minutes();
        defmt::write!(f, "Minutes({}m)", minutes);
    }
}

bitfield! {
    /// Hours register (0-23) with BCD encoding.
    #[derive(Clone, Copy, Default, PartialEq)]
    pub struct Hours(u8);
    impl Debug;
    /// Tens place of hours (0-2)
    pub ten_hours, set_ten_hours: 5, 4;
    /// Ones place of hours (0-9)
    pub hours, set_hours: 3, 0;
}
from_register_u8!(Hours);

#[cfg(feature = "defmt")]
impl defmt::Format for Hours {
    fn format(&self, f: defmt::Formatter) {
        let hours = 10 * self.ten_hours() + self.hours();
        defmt::write!(f, "Hours({}h)", hours);
    }
}

bitfield! {
    /// Days register (1-31) with BCD encoding.
    #[derive(Clone, Copy, Default, PartialEq)]
    pub struct Days(u8);
    impl Debug;
    /// Tens place of the day of month (0-3)
    pub ten_days, set_ten_days: 5, 4;
    /// Ones place of the day of month (0-9)
    pub days, set_days: 3, 0;
}
from_register_u8!(Days);

#[cfg(feature = "defmt")]
impl defmt::Format for Days {
    fn format(&self, f: defmt::Formatter) {
        let days = 10 * self.ten_days() + self.days();
        defmt::write!(f, "Days({})", days);
    }
}

bitfield! {
    /// Weekdays register (0-6).
    #[derive(Clone, Copy, Default, PartialEq)]
    pub struct Weekdays(u8);
    impl Debug;
    /// Day of week (0-6)
    pub weekdays, set_weekdays: 2, 0;
}
from_register_u8!(Weekdays);

#[cfg(feature = "defmt")]
impl defmt::Format for Weekdays {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Weekdays({})", self.weekdays());
    }
}

bitfield! {
    /// Months register (1-12) with century flag and BCD encoding.
    #[derive(Clone, Copy, Default, PartialEq)]
    pub struct Months(u8);
    impl Debug;
    /// Century flag (1 = year 2000+)
    pub century, set_century: 7;
    /// Tens place of month (0-1)
    pub ten_months, set_ten_months: 4, 4;
    /// Ones place of month (0-9)
    pub months, set_months: 3, 0;
}
from_register_u8!(Months);

#[cfg(feature = "defmt")]
impl defmt::Format for Months {
    fn format(&self, f: defmt::Formatter) {
        let months = 10 * self.ten_months() + self.months();
        defmt::write!(f, "Months({}", months);
        if self.century() {
            defmt::write!(f, ", century");
        }
        defmt::write!(f, ")");
    }
}

bitfield! {
    /// Years register (0-99) with BCD encoding.
    #[derive(Clone, Copy, Default, PartialEq)]
    pub struct Years(u8);
    impl Debug;
    /// Tens place of year (0-9)
    pub ten_years, set_ten_years: 7, 4;
    /// Ones place of year (0-9)
    pub years, set_years: 3, 0;
}
from_register_u8!(Years);

#[cfg(feature = "defmt")]
impl defmt::Format for Years {
    fn format(&self, f: defmt::Formatter) {
        let years = 10 * self.ten_years() + self.years();
        defmt::write!(f, "Years({})", years);
    }
}

bitfield! {
    /// CLKOUT control register.
    #[derive(Clone, Copy, Default, PartialEq)]
    pub struct ClkoutControl(u8);
    impl Debug;
    /// CLKOUT output enable (FE)
    pub enable, set_enable: 7;
    /// CLKOUT frequency selection
    pub from into ClockOutFrequency, frequency, set_frequency: 1, 0;
}
from_register_u8!(ClkoutControl);

#[cfg(feature = "defmt")]
impl defmt::Format for ClkoutControl {
    fn format(&self, f: defmt::Formatter) {
        match self.frequency() {
            ClockOutFrequency::Hz32768 => defmt::write!(f, "ClkoutControl(32768 Hz"),
            ClockOutFrequency::Hz1024 => defmt::write!(f, "ClkoutControl(1024 Hz"),
            ClockOutFrequency::Hz32 => defmt::write!(f, "ClkoutControl(32 Hz"),
            ClockOutFrequency::Hz1 => defmt::write!(f, "ClkoutControl(1 Hz"),
        }
        if self.enable() {
            defmt::write!(f, ", enabled");
        }
        defmt::write!(f, ")");
    }
}

bitfield! {
    /// Timer control register.
    #[derive(Clone, Copy, Default, PartialEq)]
    pub struct TimerControl(u8);
    impl Debug;
    /// Countdown timer enable (TE)
    pub enable, set_enable: 7;
    /// Countdown clock selection
    pub from into TimerFrequency, frequency, set_frequency: 1, 0;
}
from_register_u8!(TimerControl);

#[cfg(feature = "defmt")]
impl defmt::Format for TimerControl {
    fn format(&self, f: defmt::Formatter) {
        match self.frequency() {
            TimerFrequency::Hz4096 => defmt::write!(f, "TimerControl(4096 Hz"),
            TimerFrequency::Hz64 => defmt::write!(f, "TimerControl(64 Hz"),
            TimerFrequency::Hz1 => defmt::write!(f, "TimerControl(1 Hz"),
            TimerFrequency::Hz1_60 => defmt::write!(f, "TimerControl(1/60 Hz"),
        }
        if self.enable() {
            defmt::write!(f, ", enabled");
        }
        defmt::write!(f, ")");
    }
}

// Alarm register types. Bit 7 of each is the per-field match enable; the
// remaining bits hold the BCD value.

bitfield! {
    /// Minute alarm register with match enable bit.
    #[derive(Clone, Copy, Default, PartialEq)]
    pub struct MinuteAlarm(u8);
    impl Debug;
    /// Match enable bit (AE_M)
    pub enable, set_enable: 7;
    /// Tens place of minutes (0-5)
    pub ten_minutes, set_ten_minutes: 6, 4;
    /// Ones place of minutes (0-9)
    pub minutes, set_minutes: 3, 0;
}
from_register_u8!(MinuteAlarm);

bitfield! {
    /// Hour alarm register with match enable bit.
    #[derive(Clone, Copy, Default, PartialEq)]
    pub struct HourAlarm(u8);
    impl Debug;
    /// Match enable bit (AE_H)
    pub enable, set_enable: 7;
    /// Tens place of hours (0-2)
    pub ten_hours, set_ten_hours: 5, 4;
    /// Ones place of hours (0-9)
    pub hours, set_hours: 3, 0;
}
from_register_u8!(HourAlarm);

bitfield! {
    /// Day alarm register with match enable bit.
    #[derive(Clone, Copy, Default, PartialEq)]
    pub struct DayAlarm(u8);
    impl Debug;
    /// Match enable bit (AE_D)
    pub enable, set_enable: 7;
    /// Tens place of the day of month (0-3)
    pub ten_days, set_ten_days: 5, 4;
    /// Ones place of the day of month (0-9)
    pub days, set_days: 3, 0;
}
from_register_u8!(DayAlarm);

bitfield! {
    /// Weekday alarm register with match enable bit.
    #[derive(Clone, Copy, Default, PartialEq)]
    pub struct WeekdayAlarm(u8);
    impl Debug;
    /// Match enable bit (AE_W)
    pub enable, set_enable: 7;
    /// Day of week (0-6)
    pub weekdays, set_weekdays: 2, 0;
}
from_register_u8!(WeekdayAlarm);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_out_frequency_conversions() {
        assert_eq!(ClockOutFrequency::from(0b00), ClockOutFrequency::Hz32768);
        assert_eq!(ClockOutFrequency::from(0b01), ClockOutFrequency::Hz1024);
        assert_eq!(ClockOutFrequency::from(0b10), ClockOutFrequency::Hz32);
        assert_eq!(ClockOutFrequency::from(0b11), ClockOutFrequency::Hz1);
        assert_eq!(u8::from(ClockOutFrequency::Hz32768), 0b00);
        assert_eq!(u8::from(ClockOutFrequency::Hz1), 0b11);
    }

    #[test]
    #[should_panic(expected = "Invalid value for ClockOutFrequency: 4")]
    fn test_invalid_clock_out_frequency_conversion() {
        let _ = ClockOutFrequency::from(4);
    }

    #[test]
    fn test_timer_frequency_conversions() {
        assert_eq!(TimerFrequency::from(0b00), TimerFrequency::Hz4096);
        assert_eq!(TimerFrequency::from(0b01), TimerFrequency::Hz64);
        assert_eq!(TimerFrequency::from(0b10), TimerFrequency::Hz1);
        assert_eq!(TimerFrequency::from(0b11), TimerFrequency::Hz1_60);
        assert_eq!(u8::from(TimerFrequency::Hz64), 0b01);
    }

    #[test]
    #[should_panic(expected = "Invalid value for TimerFrequency: 4")]
    fn test_invalid_timer_frequency_conversion() {
        let _ = TimerFrequency::from(4);
    }

    #[test]
    fn test_seconds_register_conversions() {
        let seconds = Seconds::from(0x59); // 59 seconds, VL clear
        assert_eq!(seconds.voltage_low(), false);
        assert_eq!(seconds.ten_seconds(), 5);
        assert_eq!(seconds.seconds(), 9);
        assert_eq!(u8::from(seconds), 0x59);

        let seconds = Seconds::from(0xB0); // 30 seconds, VL set
        assert_eq!(seconds.voltage_low(), true);
        assert_eq!(seconds.ten_seconds(), 3);
        assert_eq!(seconds.seconds(), 0);
        assert_eq!(u8::from(seconds), 0xB0);
    }

    #[test]
    fn test_minutes_register_conversions() {
        let minutes = Minutes::from(0x45);
        assert_eq!(minutes.ten_minutes(), 4);
        assert_eq!(minutes.minutes(), 5);
        assert_eq!(u8::from(minutes), 0x45);
    }

    #[test]
    fn test_hours_register_conversions() {
        let hours = Hours::from(0x23);
        assert_eq!(hours.ten_hours(), 2);
        assert_eq!(hours.hours(), 3);
        assert_eq!(u8::from(hours), 0x23);

        let hours = Hours::from(0x09);
        assert_eq!(hours.ten_hours(), 0);
        assert_eq!(hours.hours(), 9);
    }

    #[test]
    fn test_days_register_conversions() {
        let days = Days::from(0x31);
        assert_eq!(days.ten_days(), 3);
        assert_eq!(days.days(), 1);
        assert_eq!(u8::from(days), 0x31);
    }

    #[test]
    fn test_weekdays_register_conversions() {
        let weekdays = Weekdays::from(0x06);
        assert_eq!(weekdays.weekdays(), 6);
        assert_eq!(u8::from(weekdays), 0x06);
    }

    #[test]
    fn test_months_register_conversions() {
        let months = Months::from(0x12); // December, 1900s
        assert_eq!(months.century(), false);
        assert_eq!(months.ten_months(), 1);
        assert_eq!(months.months(), 2);
        assert_eq!(u8::from(months), 0x12);

        let months = Months::from(0x88); // August, 2000s
        assert_eq!(months.century(), true);
        assert_eq!(months.ten_months(), 0);
        assert_eq!(months.months(), 8);
        assert_eq!(u8::from(months), 0x88);
    }

    #[test]
    fn test_years_register_conversions() {
        let years = Years::from(0x99);
        assert_eq!(years.ten_years(), 9);
        assert_eq!(years.years(), 9);
        assert_eq!(u8::from(years), 0x99);

        let years = Years::from(0x25);
        assert_eq!(years.ten_years(), 2);
        assert_eq!(years.years(), 5);
    }

    #[test]
    fn test_control2_clear_mask() {
        // Flags AF/TF are dropped by the write-back; enables and TI_TP survive.
        let control2 = Control2::from(0xFF);
        assert_eq!(u8::from(control2.cleared()), 0b0001_0011);

        let control2 = Control2::from(0b0001_0011);
        assert_eq!(u8::from(control2.cleared()), 0b0001_0011);

        let control2 = Control2::from(0b0000_1100); // AF + TF only
        assert_eq!(u8::from(control2.cleared()), 0x00);
    }

    #[test]
    fn test_control2_flags() {
        let control2 = Control2::from(0b0000_1100);
        assert!(control2.alarm_flag());
        assert!(control2.timer_flag());
        assert!(!control2.alarm_interrupt_enable());
        assert!(!control2.timer_interrupt_enable());

        let mut control2 = Control2::default();
        control2.set_alarm_interrupt_enable(true);
        control2.set_timer_interrupt_enable(true);
        assert_eq!(u8::from(control2), 0b11);
    }

    #[test]
    fn test_clkout_control_register() {
        let mut clkout = ClkoutControl::default();
        clkout.set_enable(true);
        clkout.set_frequency(ClockOutFrequency::Hz32);
        assert_eq!(u8::from(clkout), 0x82);
        assert_eq!(clkout.frequency(), ClockOutFrequency::Hz32);
        assert!(clkout.enable());
    }

    #[test]
    fn test_timer_control_register() {
        let mut control = TimerControl::default();
        control.set_enable(true);
        control.set_frequency(TimerFrequency::Hz64);
        assert_eq!(u8::from(control), 0x81);
        assert_eq!(control.frequency(), TimerFrequency::Hz64);
        assert!(control.enable());
    }

    #[test]
    fn test_alarm_register_conversions() {
        let minute_alarm = MinuteAlarm::from(0xB0); // enabled, 30 minutes
        assert!(minute_alarm.enable());
        assert_eq!(minute_alarm.ten_minutes(), 3);
        assert_eq!(minute_alarm.minutes(), 0);
        assert_eq!(u8::from(minute_alarm), 0xB0);

        let hour_alarm = HourAlarm::from(0x15); // disabled, 15 hours
        assert!(!hour_alarm.enable());
        assert_eq!(hour_alarm.ten_hours(), 1);
        assert_eq!(hour_alarm.hours(), 5);

        let day_alarm = DayAlarm::from(0xA9); // enabled, 29th
        assert!(day_alarm.enable());
        assert_eq!(day_alarm.ten_days(), 2);
        assert_eq!(day_alarm.days(), 9);

        let weekday_alarm = WeekdayAlarm::from(0x83); // enabled, Wednesday
        assert!(weekday_alarm.enable());
        assert_eq!(weekday_alarm.weekdays(), 3);
    }

    #[test]
    fn test_register_roundtrip_conversions() {
        let test_values = [
            0x00, 0x55, 0xAA, 0xFF, 0x12, 0x34, 0x56, 0x78, 0x9A, 0xBC, 0xDE,
        ];

        for &value in &test_values {
            assert_eq!(u8::from(Control1::from(value)), value);
            assert_eq!(u8::from(Control2::from(value)), value);
            assert_eq!(u8::from(Seconds::from(value)), value);
            assert_eq!(u8::from(Minutes::from(value)), value);
            assert_eq!(u8::from(Hours::from(value)), value);
            assert_eq!(u8::from(Days::from(value)), value);
            assert_eq!(u8::from(Weekdays::from(value)), value);
            assert_eq!(u8::from(Months::from(value)), value);
            assert_eq!(u8::from(Years::from(value)), value);
            assert_eq!(u8::from(ClkoutControl::from(value)), value);
            assert_eq!(u8::from(TimerControl::from(value)), value);
            assert_eq!(u8::from(MinuteAlarm::from(value)), value);
            assert_eq!(u8::from(HourAlarm::from(value)), value);
            assert_eq!(u8::from(DayAlarm::from(value)), value);
            assert_eq!(u8::from(WeekdayAlarm::from(value)), value);
        }
    }

    #[test]
    fn test_register_bitfield_operations() {
        let mut seconds = Seconds::default();
        seconds.set_seconds(5);
        seconds.set_ten_seconds(3);
        seconds.set_voltage_low(true);
        assert_eq!(seconds.seconds(), 5);
        assert_eq!(seconds.ten_seconds(), 3);
        assert!(seconds.voltage_low());
        assert_eq!(u8::from(seconds), 0xB5);

        let mut months = Months::default();
        months.set_months(2);
        months.set_ten_months(1);
        months.set_century(true);
        assert_eq!(u8::from(months), 0x92);

        let mut control1 = Control1::default();
        assert_eq!(u8::from(control1), 0x00);
        control1.set_stop(true);
        assert_eq!(u8::from(control1), 0x20);
    }
}
