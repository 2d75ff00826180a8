// Copyright (c) 2021-2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use chrono::{DateTime, Datelike, Duration, Months, NaiveDate, TimeZone, Timelike, Utc};

// https://github.com/Majored/rs-async-zip/blob/main/SPECIFICATION.md#446
// https://learn.microsoft.com/en-us/windows/win32/api/oleauto/nf-oleauto-dosdatetimetovarianttime

/// The first year representable by an MS-DOS date.
const DOS_EPOCH_YEAR: i32 = 1980;

/// A date and time stored as per the MS-DOS representation used by ZIP files.
///
/// All conversions to and from UNIX time are performed in UTC.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Hash)]
pub struct ZipDateTime {
    pub(crate) date: u16,
    pub(crate) time: u16,
}

impl ZipDateTime {
    /// Constructs a date & time from its raw `date` and `time` words.
    pub fn from_raw(date: u16, time: u16) -> Self {
        Self { date, time }
    }

    /// Returns the raw `date` word.
    pub fn date(&self) -> u16 {
        self.date
    }

    /// Returns the raw `time` word.
    pub fn time(&self) -> u16 {
        self.time
    }

    /// Returns the year of this date & time.
    pub fn year(&self) -> i32 {
        i32::from((self.date >> 9) & 0x7F) + DOS_EPOCH_YEAR
    }

    /// Returns the month of this date & time.
    pub fn month(&self) -> u32 {
        ((self.date >> 5) & 0xF).into()
    }

    /// Returns the day of this date & time.
    pub fn day(&self) -> u32 {
        (self.date & 0x1F).into()
    }

    /// Returns the hour of this date & time.
    pub fn hour(&self) -> u32 {
        ((self.time >> 11) & 0x1F).into()
    }

    /// Returns the minute of this date & time.
    pub fn minute(&self) -> u32 {
        ((self.time >> 5) & 0x3F).into()
    }

    /// Returns the second of this date & time.
    ///
    /// Note that MS-DOS has a maximum granularity of two seconds.
    pub fn second(&self) -> u32 {
        ((self.time & 0x1F) << 1).into()
    }

    /// Encodes a UNIX timestamp.
    ///
    /// Odd seconds are rounded down, and any instant before 1980 encodes as an all-zero date & time.
    pub fn from_unix(seconds: u32) -> Self {
        match Utc.timestamp_opt(i64::from(seconds), 0).single() {
            Some(datetime) => Self::from_chrono(&datetime),
            None => Self::default(),
        }
    }

    /// Decodes this date & time into a UNIX timestamp.
    ///
    /// Fields outside their usual ranges are normalised arithmetically rather than rejected, so a day of zero is
    /// the last day of the previous month.
    pub fn to_unix(&self) -> u32 {
        self.as_chrono().map(|datetime| u32::try_from(datetime.timestamp()).unwrap_or(0)).unwrap_or(0)
    }

    /// Constructs chrono's [`DateTime`] representation of this date & time.
    pub fn as_chrono(&self) -> Option<DateTime<Utc>> {
        let start_of_year = NaiveDate::from_ymd_opt(self.year(), 1, 1)?;
        let month = match self.month() {
            0 => start_of_year.checked_sub_months(Months::new(1))?,
            month => start_of_year.checked_add_months(Months::new(month - 1))?,
        };
        let day = month.checked_add_signed(Duration::days(i64::from(self.day()) - 1))?;

        let seconds = i64::from(self.hour()) * 3600 + i64::from(self.minute()) * 60 + i64::from(self.second());
        let naive = day.and_hms_opt(0, 0, 0)?.checked_add_signed(Duration::seconds(seconds))?;

        Some(Utc.from_utc_datetime(&naive))
    }

    /// Constructs this date & time from chrono's [`DateTime`] representation.
    pub fn from_chrono(datetime: &DateTime<Utc>) -> Self {
        if datetime.year() < DOS_EPOCH_YEAR {
            return Self::default();
        }

        let date = datetime.day() + (datetime.month() << 5) + (((datetime.year() - DOS_EPOCH_YEAR) as u32) << 9);
        let time = datetime.second() / 2 + (datetime.minute() << 5) + (datetime.hour() << 11);

        Self { date: date as u16, time: time as u16 }
    }
}

impl From<&DateTime<Utc>> for ZipDateTime {
    fn from(value: &DateTime<Utc>) -> Self {
        Self::from_chrono(value)
    }
}

impl From<DateTime<Utc>> for ZipDateTime {
    fn from(value: DateTime<Utc>) -> Self {
        Self::from_chrono(&value)
    }
}

/// Returns the current UNIX time in seconds, saturating at the bounds of a `u32`.
pub(crate) fn unix_now() -> u32 {
    u32::try_from(Utc::now().timestamp().max(0)).unwrap_or(u32::MAX)
}
