//! Timezone resolution for a coordinate.
//!
//! The engine needs the civil UTC offset of the observer to place the standard
//! meridian. Where that offset comes from is up to the caller: a fixed offset, a
//! known IANA zone, a geographic zone lookup (feature `tzf`), or nothing at all.

use async_trait::async_trait;
use chrono::{DateTime, Offset, TimeZone, Utc};
use chrono_tz::Tz;

use crate::types::TimeZoneInfo;
use crate::{Error, Result};

/// Looks up the civil timezone of a coordinate.
///
/// Failures are not fatal for the engine: it logs them and falls back to the
/// 15°-zone nearest to the longitude.
#[async_trait]
pub trait TimezoneResolver: Send + Sync {
    /// Resolves the timezone at `latitude`/`longitude` (degrees).
    ///
    /// # Errors
    /// Returns `TimezoneLookup` (or a coordinate error) when no offset can be determined.
    async fn resolve(&self, latitude: f64, longitude: f64) -> Result<TimeZoneInfo>;
}

/// Always reports the same UTC offset, wherever the observer is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedOffsetResolver {
    utc_offset_seconds: f64,
}

impl FixedOffsetResolver {
    /// Creates a resolver for an offset in seconds east of UTC.
    #[must_use]
    pub const fn new(utc_offset_seconds: f64) -> Self {
        Self { utc_offset_seconds }
    }

    /// Creates a resolver for an offset in whole hours east of UTC.
    #[must_use]
    pub fn hours(hours: f64) -> Self {
        Self::new(hours * 3_600.0)
    }
}

#[async_trait]
impl TimezoneResolver for FixedOffsetResolver {
    async fn resolve(&self, _latitude: f64, _longitude: f64) -> Result<TimeZoneInfo> {
        Ok(TimeZoneInfo::from_offset(self.utc_offset_seconds))
    }
}

/// Never resolves; the engine always uses the 15° fallback meridian.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UnavailableResolver;

#[async_trait]
impl TimezoneResolver for UnavailableResolver {
    async fn resolve(&self, _latitude: f64, _longitude: f64) -> Result<TimeZoneInfo> {
        Err(Error::timezone_lookup("no timezone source configured"))
    }
}

/// Reports the offset of one IANA zone, wherever the observer is.
///
/// The offset is taken at `reference` (or the current instant), so daylight saving
/// time is included when it is in effect at that moment. Without [`at`](Self::at)
/// the standard meridian depends on when the query runs; pass the observation
/// moment to get reproducible results.
///
/// # Example
/// ```
/// # use chrono::NaiveDate;
/// # use sun_position::timezone::ZoneNameResolver;
/// let moment = NaiveDate::from_ymd_opt(2024, 6, 21).unwrap().and_hms_opt(12, 0, 0).unwrap();
/// let resolver = ZoneNameResolver::from_name("Europe/Vienna")
///     .unwrap()
///     .at(moment.and_utc());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoneNameResolver {
    zone: Tz,
    reference: Option<DateTime<Utc>>,
}

impl ZoneNameResolver {
    /// Creates a resolver for a zone, evaluated at the current instant.
    ///
    /// Daylight saving time in effect when the lookup runs applies to every
    /// observation moment; use [`at`](Self::at) to pin the instant.
    #[must_use]
    pub const fn new(zone: Tz) -> Self {
        Self {
            zone,
            reference: None,
        }
    }

    /// Evaluates the zone offset at a fixed instant instead of now.
    #[must_use]
    pub const fn at(mut self, reference: DateTime<Utc>) -> Self {
        self.reference = Some(reference);
        self
    }

    /// Parses an IANA zone name such as `"America/Recife"`.
    ///
    /// # Errors
    /// Returns `TimezoneLookup` if the name is not a known zone.
    pub fn from_name(name: &str) -> Result<Self> {
        parse_zone(name).map(Self::new)
    }
}

#[async_trait]
impl TimezoneResolver for ZoneNameResolver {
    async fn resolve(&self, _latitude: f64, _longitude: f64) -> Result<TimeZoneInfo> {
        Ok(zone_info(self.zone, self.reference.unwrap_or_else(Utc::now)))
    }
}

/// Finds the IANA zone containing a coordinate from timezone boundary data.
///
/// Uses the tzf-rs finder; the offset is evaluated like [`ZoneNameResolver`].
#[cfg(feature = "tzf")]
pub struct TzfResolver {
    finder: tzf_rs::DefaultFinder,
    reference: Option<DateTime<Utc>>,
}

#[cfg(feature = "tzf")]
impl TzfResolver {
    /// Loads the boundary data. This takes a noticeable moment; share the resolver.
    #[must_use]
    pub fn new() -> Self {
        Self {
            finder: tzf_rs::DefaultFinder::new(),
            reference: None,
        }
    }

    /// Evaluates zone offsets at a fixed instant instead of now.
    #[must_use]
    pub fn at(mut self, reference: DateTime<Utc>) -> Self {
        self.reference = Some(reference);
        self
    }
}

#[cfg(feature = "tzf")]
impl Default for TzfResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "tzf")]
#[async_trait]
impl TimezoneResolver for TzfResolver {
    async fn resolve(&self, latitude: f64, longitude: f64) -> Result<TimeZoneInfo> {
        crate::error::check_coordinates(latitude, longitude)?;
        // tzf-rs takes (longitude, latitude)
        let name = self.finder.get_tz_name(longitude, latitude);
        if name.is_empty() {
            return Err(Error::timezone_lookup(format!(
                "no zone found at ({latitude}, {longitude})"
            )));
        }
        let zone = parse_zone(name)?;
        Ok(zone_info(zone, self.reference.unwrap_or_else(Utc::now)))
    }
}

fn parse_zone(name: &str) -> Result<Tz> {
    name.parse::<Tz>()
        .map_err(|_| Error::timezone_lookup(format!("unknown zone name {name:?}")))
}

fn zone_info(zone: Tz, reference: DateTime<Utc>) -> TimeZoneInfo {
    let offset = zone
        .offset_from_utc_datetime(&reference.naive_utc())
        .fix()
        .local_minus_utc();
    TimeZoneInfo::named(zone.name(), f64::from(offset))
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    fn instant(text: &str) -> DateTime<Utc> {
        text.parse::<DateTime<Utc>>().unwrap()
    }

    #[test]
    fn test_fixed_offset() {
        let info = block_on(FixedOffsetResolver::hours(-3.0).resolve(-8.05, -34.88)).unwrap();
        assert_eq!(info, TimeZoneInfo::from_offset(-10_800.0));
    }

    #[test]
    fn test_unavailable() {
        let result = block_on(UnavailableResolver.resolve(0.0, 0.0));
        assert!(matches!(result, Err(Error::TimezoneLookup { .. })));
    }

    #[test]
    fn test_zone_name_without_dst() {
        let resolver = ZoneNameResolver::from_name("Asia/Kolkata").unwrap();
        let info = block_on(resolver.resolve(28.6, 77.2)).unwrap();
        assert_eq!(info.utc_offset_seconds, Some(19_800.0));
        assert_eq!(info.zone_name.as_deref(), Some("Asia/Kolkata"));
    }

    #[test]
    fn test_zone_name_follows_daylight_saving() {
        let resolver = ZoneNameResolver::from_name("Europe/Vienna").unwrap();

        let winter = block_on(resolver.at(instant("2024-01-15T12:00:00Z")).resolve(48.2, 16.4));
        assert_eq!(winter.unwrap().utc_offset_seconds, Some(3_600.0));

        let summer = block_on(resolver.at(instant("2024-07-15T12:00:00Z")).resolve(48.2, 16.4));
        assert_eq!(summer.unwrap().utc_offset_seconds, Some(7_200.0));
    }

    #[test]
    fn test_unknown_zone_name() {
        assert!(matches!(
            ZoneNameResolver::from_name("Mars/Olympus_Mons"),
            Err(Error::TimezoneLookup { .. })
        ));
    }

    #[cfg(feature = "tzf")]
    #[test]
    fn test_tzf_finds_zone() {
        let resolver = TzfResolver::new().at(instant("2024-01-15T12:00:00Z"));
        let info = block_on(resolver.resolve(35.68, 139.69)).unwrap();
        assert_eq!(info.zone_name.as_deref(), Some("Asia/Tokyo"));
        assert_eq!(info.utc_offset_seconds, Some(32_400.0));

        assert!(block_on(resolver.resolve(35.68, 200.0)).is_err());
    }
}
