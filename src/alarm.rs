//! Alarm configuration utilities for the PCF8563 RTC.
//!
//! The PCF8563 has four alarm registers (minute, hour, day, weekday), each
//! carrying a BCD value and a match-enable bit. A field can also be parked
//! at [`Alarm::DISABLED`] (decimal 80), whose BCD encoding lands exactly on
//! the enable bit and reads back unchanged.
//!
//! # Error Handling
//!
//! Validation errors are reported via [`AlarmError`].

use crate::{DayAlarm, HourAlarm, MinuteAlarm, WeekdayAlarm};

/// Alarm time as kept by the PCF8563.
///
/// Each field is either a real value within the clock's range or
/// [`Alarm::DISABLED`]. Which fields actually participate in the match is
/// controlled separately with [`AlarmMatch`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Alarm {
    /// Minutes (0-59) or [`Alarm::DISABLED`]
    pub minute: u8,
    /// Hours (0-23) or [`Alarm::DISABLED`]
    pub hour: u8,
    /// Day of month (1-31, 32 tolerated) or [`Alarm::DISABLED`]
    pub day: u8,
    /// Day of week (0-6) or [`Alarm::DISABLED`]
    pub weekday: u8,
}

impl Alarm {
    /// Sentinel marking an alarm field as disabled / don't care.
    ///
    /// Its BCD encoding is 0x80, the match-enable bit position, so a
    /// disabled field round-trips through the chip as-is.
    pub const DISABLED: u8 = 80;
}

/// Per-field match enables for [`Alarm`].
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AlarmMatch {
    /// Match on the minute field
    pub minute: bool,
    /// Match on the hour field
    pub hour: bool,
    /// Match on the day field
    pub day: bool,
    /// Match on the weekday field
    pub weekday: bool,
}

#[derive(Debug, PartialEq, Eq)]
/// Errors that can occur during alarm validation.
pub enum AlarmError {
    /// Alarm minute is not 0-59 or the disabled sentinel
    InvalidMinute,
    /// Alarm hour is not 0-23 or the disabled sentinel
    InvalidHour,
    /// Alarm day is not 0-32 or the disabled sentinel
    InvalidDay,
    /// Alarm weekday is not 0-6 or the disabled sentinel
    InvalidWeekday,
}

fn to_bcd(value: u8) -> u8 {
    ((value / 10) << 4) | (value % 10)
}

/// Internal representation of the PCF8563 alarm registers.
#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) struct PCF8563Alarm {
    minutes: MinuteAlarm,
    hours: HourAlarm,
    days: DayAlarm,
    weekdays: WeekdayAlarm,
}

impl PCF8563Alarm {
    /// Builds the alarm register values from an [`Alarm`] and its match
    /// enables.
    ///
    /// # Errors
    ///
    /// Returns an error if a field is out of range and not the disabled
    /// sentinel. The sentinel is never range-checked.
    pub(crate) fn from_alarm(alarm: &Alarm, matches: AlarmMatch) -> Result<Self, AlarmError> {
        if alarm.minute >= 60 && alarm.minute != Alarm::DISABLED {
            return Err(AlarmError::InvalidMinute);
        }
        if alarm.hour >= 24 && alarm.hour != Alarm::DISABLED {
            return Err(AlarmError::InvalidHour);
        }
        if alarm.day > 32 && alarm.day != Alarm::DISABLED {
            return Err(AlarmError::InvalidDay);
        }
        if alarm.weekday > 6 && alarm.weekday != Alarm::DISABLED {
            return Err(AlarmError::InvalidWeekday);
        }

        let enable = |on: bool| if on { 0x80 } else { 0x00 };

        Ok(PCF8563Alarm {
            minutes: MinuteAlarm(to_bcd(alarm.minute) | enable(matches.minute)),
            hours: HourAlarm(to_bcd(alarm.hour) | enable(matches.hour)),
            days: DayAlarm(to_bcd(alarm.day) | enable(matches.day)),
            weekdays: WeekdayAlarm(to_bcd(alarm.weekday) | enable(matches.weekday)),
        })
    }

    /// Decodes the alarm register values.
    ///
    /// The tens masks are the bits the chip actually drives for each
    /// register (hour and day tens stop at 3, the weekday has none), so an
    /// enabled field reads back with the enable bit folded in as +80. A
    /// disabled field written as the sentinel comes back as the sentinel.
    /// No validation happens on decode.
    pub(crate) fn into_alarm(self) -> Alarm {
        let minutes = self.minutes.0;
        let hours = self.hours.0;
        let days = self.days.0;
        let weekdays = self.weekdays.0;

        Alarm {
            minute: ((minutes >> 4) & 0x0F) * 10 + (minutes & 0x0F),
            hour: ((hours >> 4) & 0x0B) * 10 + (hours & 0x0F),
            day: ((days >> 4) & 0x0B) * 10 + (days & 0x0F),
            weekday: ((weekdays >> 4) & 0x08) * 10 + (weekdays & 0x07),
        }
    }
}

impl From<[u8; 4]> for PCF8563Alarm {
    fn from(data: [u8; 4]) -> Self {
        PCF8563Alarm {
            minutes: MinuteAlarm(data[0]),
            hours: HourAlarm(data[1]),
            days: DayAlarm(data[2]),
            weekdays: WeekdayAlarm(data[3]),
        }
    }
}

impl From<&PCF8563Alarm> for [u8; 4] {
    fn from(alarm: &PCF8563Alarm) -> [u8; 4] {
        [
            alarm.minutes.0,
            alarm.hours.0,
            alarm.days.0,
            alarm.weekdays.0,
        ]
    }
}
