//! `DateTime` conversion and register utilities for the PCF8563 RTC.
//!
//! This module provides the public date/time value object and the internal
//! representation of the PCF8563's seven clock registers. It enables safe,
//! validated conversion between the chip's BCD-encoded registers and the
//! [`DateTime`] value, plus interop with chrono's `NaiveDateTime`.
//!
//! # Register Model
//!
//! The PCF8563 stores date and time in 7 consecutive registers:
//! - Seconds (with the VL integrity bit), Minutes, Hours, Days, Weekdays,
//!   Months (with the century flag), Years
//!
//! # Error Handling
//!
//! Conversion errors are reported via [`DateTimeError`].

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};

use crate::{Days, Hours, Minutes, Months, Seconds, Weekdays, Years};

/// Date and time as kept by the PCF8563.
///
/// The weekday is a free-running 0-6 counter the chip increments at
/// midnight; it is stored independently of the date, so whatever value is
/// written is what comes back. `day` 32 is tolerated as the chip's
/// don't-care placeholder.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DateTime {
    /// Seconds (0-59)
    pub second: u8,
    /// Minutes (0-59)
    pub minute: u8,
    /// Hours (0-23)
    pub hour: u8,
    /// Day of month (1-31, 32 tolerated as placeholder)
    pub day: u8,
    /// Day of week (0-6)
    pub weekday: u8,
    /// Month (1-12)
    pub month: u8,
    /// Full year (1900-2099)
    pub year: u16,
}

/// Internal representation of the PCF8563 clock registers.
///
/// This struct models the 7 date/time registers of the PCF8563, using
/// strongly-typed bitfield wrappers for each field. It is used for
/// register-level I/O and conversion to/from [`DateTime`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) struct PCF8563DateTime {
    seconds: Seconds,
    minutes: Minutes,
    hours: Hours,
    days: Days,
    weekdays: Weekdays,
    months: Months,
    years: Years,
}

impl PCF8563DateTime {
    /// Helper function to convert a number to BCD digits with validation
    pub(crate) fn make_bcd(value: u8, max_value: u8) -> Result<(u8, u8), DateTimeError> {
        if value > max_value {
            return Err(DateTimeError::InvalidDateTime);
        }
        Ok((value % 10, value / 10))
    }

    fn convert_seconds(second: u8) -> Result<Seconds, DateTimeError> {
        let (ones, tens) = Self::make_bcd(second, 59)?;
        let mut value = Seconds::default();
        value.set_seconds(ones);
        value.set_ten_seconds(tens);
        Ok(value)
    }

    fn convert_minutes(minute: u8) -> Result<Minutes, DateTimeError> {
        let (ones, tens) = Self::make_bcd(minute, 59)?;
        let mut value = Minutes::default();
        value.set_minutes(ones);
        value.set_ten_minutes(tens);
        Ok(value)
    }

    fn convert_hours(hour: u8) -> Result<Hours, DateTimeError> {
        let (ones, tens) = Self::make_bcd(hour, 23)?;
        let mut value = Hours::default();
        value.set_hours(ones);
        value.set_ten_hours(tens);
        Ok(value)
    }

    fn convert_days(day: u8) -> Result<Days, DateTimeError> {
        // 32 passes through as the chip's don't-care placeholder.
        let (ones, tens) = Self::make_bcd(day, 32)?;
        let mut value = Days::default();
        value.set_days(ones);
        value.set_ten_days(tens);
        Ok(value)
    }

    fn convert_weekdays(weekday: u8) -> Result<Weekdays, DateTimeError> {
        if weekday > 6 {
            return Err(DateTimeError::InvalidDateTime);
        }
        let mut value = Weekdays::default();
        value.set_weekdays(weekday);
        Ok(value)
    }

    fn convert_months(month: u8) -> Result<Months, DateTimeError> {
        let (ones, tens) = Self::make_bcd(month, 12)?;
        let mut value = Months::default();
        value.set_months(ones);
        value.set_ten_months(tens);
        Ok(value)
    }

    fn convert_years(year: u16) -> Result<(Years, bool), DateTimeError> {
        if year >= 2100 {
            error!("Year {} is too late! must be before 2100", year);
            return Err(DateTimeError::YearNotBefore2100);
        }
        if year < 1900 {
            error!("Year {} is too early! must be after 1899", year);
            return Err(DateTimeError::YearNotAfter1899);
        }

        let century = year >= 2000;
        let year_offset = (year - if century { 2000 } else { 1900 }) as u8;

        let mut value = Years::default();
        value.set_years(year_offset % 10);
        value.set_ten_years(year_offset / 10);
        Ok((value, century))
    }

    pub(crate) fn from_datetime(datetime: &DateTime) -> Result<Self, DateTimeError> {
        let seconds = Self::convert_seconds(datetime.second)?;
        let minutes = Self::convert_minutes(datetime.minute)?;
        let hours = Self::convert_hours(datetime.hour)?;
        let days = Self::convert_days(datetime.day)?;
        let weekdays = Self::convert_weekdays(datetime.weekday)?;
        let mut months = Self::convert_months(datetime.month)?;
        let (years, century) = Self::convert_years(datetime.year)?;

        if century {
            months.set_century(true);
        }

        let raw = PCF8563DateTime {
            seconds,
            minutes,
            hours,
            days,
            weekdays,
            months,
            years,
        };

        debug!("raw={:?}", raw);

        Ok(raw)
    }

    /// Decodes the register values into a [`DateTime`].
    ///
    /// The field masks mirror the bits the chip implements for each
    /// register; the VL bit never contributes to the seconds value. No
    /// range validation happens here, the hardware is assumed well-formed.
    pub(crate) fn into_datetime(self) -> DateTime {
        let second = 10 * self.seconds.ten_seconds() + self.seconds.seconds();
        let minute = 10 * self.minutes.ten_minutes() + self.minutes.minutes();
        let hour = 10 * self.hours.ten_hours() + self.hours.hours();
        let day = 10 * self.days.ten_days() + self.days.days();
        let weekday = self.weekdays.weekdays();
        let month = 10 * self.months.ten_months() + self.months.months();

        let mut year = 1900 + 10 * u16::from(self.years.ten_years()) + u16::from(self.years.years());
        if self.months.century() {
            year += 100;
        }

        DateTime {
            second,
            minute,
            hour,
            day,
            weekday,
            month,
            year,
        }
    }

    /// Returns whether the chip reported the clock-integrity (VL) condition.
    pub(crate) fn voltage_low(&self) -> bool {
        self.seconds.voltage_low()
    }
}

impl From<[u8; 7]> for PCF8563DateTime {
    fn from(data: [u8; 7]) -> Self {
        PCF8563DateTime {
            seconds: Seconds(data[0]),
            minutes: Minutes(data[1]),
            hours: Hours(data[2]),
            days: Days(data[3]),
            weekdays: Weekdays(data[4]),
            months: Months(data[5]),
            years: Years(data[6]),
        }
    }
}

impl From<&PCF8563DateTime> for [u8; 7] {
    fn from(dt: &PCF8563DateTime) -> [u8; 7] {
        [
            dt.seconds.0,
            dt.minutes.0,
            dt.hours.0,
            dt.days.0,
            dt.weekdays.0,
            dt.months.0,
            dt.years.0,
        ]
    }
}

#[derive(Debug, PartialEq, Eq)]
/// Errors that can occur during date/time conversion or validation.
pub enum DateTimeError {
    /// A field is out of range or the date is not representable
    InvalidDateTime,
    /// The year is not before 2100 (PCF8563 only supports years < 2100)
    YearNotBefore2100,
    /// The year is not after 1899 (PCF8563 only supports years >= 1900)
    YearNotAfter1899,
}

impl TryFrom<NaiveDateTime> for DateTime {
    type Error = DateTimeError;

    /// Converts a chrono `NaiveDateTime`, deriving the weekday as days
    /// since Sunday.
    fn try_from(datetime: NaiveDateTime) -> Result<Self, Self::Error> {
        let year = datetime.year();
        if year >= 2100 {
            return Err(DateTimeError::YearNotBefore2100);
        }
        if year < 1900 {
            return Err(DateTimeError::YearNotAfter1899);
        }
        Ok(DateTime {
            second: datetime.second() as u8,
            minute: datetime.minute() as u8,
            hour: datetime.hour() as u8,
            day: datetime.day() as u8,
            weekday: datetime.weekday().num_days_from_sunday() as u8,
            month: datetime.month() as u8,
            year: year as u16,
        })
    }
}

impl TryFrom<DateTime> for NaiveDateTime {
    type Error = DateTimeError;

    /// Converts to a chrono `NaiveDateTime`, dropping the chip's free
    /// weekday counter (chrono derives the weekday from the date).
    fn try_from(datetime: DateTime) -> Result<Self, Self::Error> {
        NaiveDate::from_ymd_opt(
            i32::from(datetime.year),
            u32::from(datetime.month),
            u32::from(datetime.day),
        )
        .and_then(|d| {
            d.and_hms_opt(
                u32::from(datetime.hour),
                u32::from(datetime.minute),
                u32::from(datetime.second),
            )
        })
        .ok_or(DateTimeError::InvalidDateTime)
    }
}
