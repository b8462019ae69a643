use crate::domain::{LocationCounts, LocationSet};
use crate::extensions::date_time_ext::Timestamps;
use chrono::{DateTime, TimeZone};
use serde::Serialize;
use std::fmt::Display;

/// The on-disk form of a [`LocationSet`]: the locations together with when they were written and how many there are.
#[derive(Debug, Serialize)]
pub struct Envelope<'a> {
    metadata: Metadata,
    locations: &'a LocationSet,
}

impl<'a> Envelope<'a> {
    pub fn new<Tz: TimeZone>(created_at: &DateTime<Tz>, locations: &'a LocationSet) -> Self
    where
        Tz::Offset: Display,
    {
        Envelope {
            metadata: Metadata {
                timestamp: created_at.iso_timestamp(),
                counts: locations.counts(),
            },
            locations,
        }
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    pub fn locations(&self) -> &LocationSet {
        self.locations
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metadata {
    timestamp: String,
    #[serde(flatten)]
    counts: LocationCounts,
}

impl Metadata {
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn counts(&self) -> LocationCounts {
        self.counts
    }
}
