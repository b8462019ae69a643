use chrono::{DateTime, TimeZone};
use std::fmt::Display;

pub trait Timestamps {
    /// Compact form used in file names, e.g. `20250314_092653`.
    fn file_stamp(&self) -> String;

    /// ISO-8601 local time with microseconds and without offset, e.g. `2025-03-14T09:26:53.589793`.
    fn iso_timestamp(&self) -> String;
}

impl<Tz: TimeZone> Timestamps for DateTime<Tz>
where
    Tz::Offset: Display,
{
    fn file_stamp(&self) -> String {
        self.format("%Y%m%d_%H%M%S").to_string()
    }

    fn iso_timestamp(&self) -> String {
        self.format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
    }
}
