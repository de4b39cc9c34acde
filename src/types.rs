//! Core data types for sun position calculations.

use core::fmt;

use chrono::NaiveDateTime;

use crate::error::check_latitude;
use crate::time::Hms;
use crate::Result;

/// Observer position on Earth.
///
/// Latitude is validated on construction; longitude is taken as given.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    latitude: f64,
    longitude: f64,
}

impl Location {
    /// Creates a location from geographic coordinates in degrees.
    ///
    /// # Errors
    /// Returns `InvalidLatitude` if latitude is outside -90 to +90 degrees.
    ///
    /// # Example
    /// ```
    /// # use sun_position::Location;
    /// let recife = Location::new(-8.05, -34.88).unwrap();
    /// assert_eq!(recife.latitude(), -8.05);
    /// assert!(Location::new(91.0, 0.0).is_err());
    /// ```
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        check_latitude(latitude)?;
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Latitude in degrees, positive north.
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees, positive east.
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    pub(crate) const fn with_latitude(self, latitude: f64) -> Self {
        Self { latitude, ..self }
    }

    pub(crate) const fn with_longitude(self, longitude: f64) -> Self {
        Self { longitude, ..self }
    }
}

/// Civil timezone of a location as reported by a resolver.
///
/// Both fields are `None` when the lookup failed; the standard meridian then falls
/// back to the 15° zone nearest to the longitude.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TimeZoneInfo {
    /// Offset of civil time from UTC, in seconds (east positive)
    pub utc_offset_seconds: Option<f64>,
    /// IANA zone name, when the resolver knows it
    pub zone_name: Option<String>,
}

impl TimeZoneInfo {
    /// Zone information with an offset only.
    #[must_use]
    pub const fn from_offset(utc_offset_seconds: f64) -> Self {
        Self {
            utc_offset_seconds: Some(utc_offset_seconds),
            zone_name: None,
        }
    }

    /// Zone information with an offset and its IANA name.
    #[must_use]
    pub fn named(zone_name: impl Into<String>, utc_offset_seconds: f64) -> Self {
        Self {
            utc_offset_seconds: Some(utc_offset_seconds),
            zone_name: Some(zone_name.into()),
        }
    }

    /// Zone information for a failed lookup.
    #[must_use]
    pub const fn unresolved() -> Self {
        Self {
            utc_offset_seconds: None,
            zone_name: None,
        }
    }

    /// Whether the lookup produced an offset.
    #[must_use]
    pub const fn is_resolved(&self) -> bool {
        self.utc_offset_seconds.is_some()
    }
}

/// Declination of the sun for a calendar date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeclinationState {
    /// Day-of-year angle `x` in degrees, zero at the spring equinox
    pub day_angle: f64,
    /// Declination in degrees, within ±23.45°
    pub declination: f64,
}

/// Which way the sun fails to cross the horizon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Polar {
    /// The sun stays above the horizon for the whole day
    Day,
    /// The sun stays below the horizon for the whole day
    Night,
}

impl fmt::Display for Polar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Day => f.write_str("sun stays above the horizon all day"),
            Self::Night => f.write_str("sun stays below the horizon all day"),
        }
    }
}

/// The part of the day the sun spends above the horizon, in solar time.
///
/// Sunrise and sunset are uncorrected triples on a 24 h axis where solar noon is 12:00.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DayArc {
    /// The sun rises and sets
    RegularDay {
        /// Length of the day in decimal hours (`(2/15)·acos(-tan φ·tan δ)`)
        hour_day_angle: f64,
        /// Length of the day
        day_length: Hms,
        /// Sunrise in solar time
        sunrise: Hms,
        /// Sunset in solar time
        sunset: Hms,
    },
    /// Polar day - sun remains above the horizon all day
    AllDay,
    /// Polar night - sun remains below the horizon all day
    AllNight,
}

impl DayArc {
    /// Checks if this represents a regular day with sunrise and sunset.
    #[must_use]
    pub const fn is_regular_day(&self) -> bool {
        matches!(self, Self::RegularDay { .. })
    }

    /// The polar condition, if the sun does not rise and set.
    #[must_use]
    pub const fn polar(&self) -> Option<Polar> {
        match self {
            Self::RegularDay { .. } => None,
            Self::AllDay => Some(Polar::Day),
            Self::AllNight => Some(Polar::Night),
        }
    }

    /// Length of the day, if the sun rises and sets.
    #[must_use]
    pub const fn day_length(&self) -> Option<Hms> {
        if let Self::RegularDay { day_length, .. } = self {
            Some(*day_length)
        } else {
            None
        }
    }

    /// Sunrise in solar time, if the sun rises.
    #[must_use]
    pub const fn sunrise(&self) -> Option<Hms> {
        if let Self::RegularDay { sunrise, .. } = self {
            Some(*sunrise)
        } else {
            None
        }
    }

    /// Sunset in solar time, if the sun sets.
    #[must_use]
    pub const fn sunset(&self) -> Option<Hms> {
        if let Self::RegularDay { sunset, .. } = self {
            Some(*sunset)
        } else {
            None
        }
    }
}

/// Sunrise and sunset for a day, or the polar condition that prevents them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SunriseResult<T> {
    /// Regular day with distinct sunrise and sunset times
    RegularDay {
        /// Time of sunrise
        sunrise: T,
        /// Time of sunset
        sunset: T,
    },
    /// Polar day - sun remains above the horizon all day
    AllDay,
    /// Polar night - sun remains below the horizon all day
    AllNight,
}

impl<T> SunriseResult<T> {
    /// Checks if this represents a regular day with sunrise and sunset.
    pub const fn is_regular_day(&self) -> bool {
        matches!(self, Self::RegularDay { .. })
    }

    /// Checks if this represents a polar day (sun never sets).
    pub const fn is_polar_day(&self) -> bool {
        matches!(self, Self::AllDay)
    }

    /// Checks if this represents a polar night (sun never rises).
    pub const fn is_polar_night(&self) -> bool {
        matches!(self, Self::AllNight)
    }

    /// Gets sunrise time if this is a regular day.
    pub const fn sunrise(&self) -> Option<&T> {
        if let Self::RegularDay { sunrise, .. } = self {
            Some(sunrise)
        } else {
            None
        }
    }

    /// Gets sunset time if this is a regular day.
    pub const fn sunset(&self) -> Option<&T> {
        if let Self::RegularDay { sunset, .. } = self {
            Some(sunset)
        } else {
            None
        }
    }
}

/// The observation moment with that day's sunrise and sunset, all in one time frame.
///
/// Returned by both [`SunPosition::solar_time`](crate::SunPosition::solar_time)
/// (solar-time frame) and [`SunPosition::local_time`](crate::SunPosition::local_time)
/// (civil-time frame).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayTimes {
    /// The observation moment in this frame
    pub moment: NaiveDateTime,
    /// Sunrise and sunset on the moment's calendar date
    pub events: SunriseResult<NaiveDateTime>,
}

impl DayTimes {
    /// Gets sunrise time if the sun rises.
    #[must_use]
    pub const fn sunrise(&self) -> Option<&NaiveDateTime> {
        self.events.sunrise()
    }

    /// Gets sunset time if the sun sets.
    #[must_use]
    pub const fn sunset(&self) -> Option<&NaiveDateTime> {
        self.events.sunset()
    }
}

/// Apparent position of the sun at the observation moment.
///
/// - Azimuth: 0° = North, measured clockwise to 360°
/// - Elevation angle: 90° = directly overhead, 0° = horizon, -90° = nadir
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarPosition {
    /// Hour angle in degrees, negative before solar noon
    hour_angle: f64,
    /// Elevation angle in degrees
    elevation: f64,
    /// Azimuth angle in degrees
    azimuth: f64,
}

impl SolarPosition {
    /// Creates a solar position from its angles in degrees.
    #[must_use]
    pub const fn new(hour_angle: f64, elevation: f64, azimuth: f64) -> Self {
        Self {
            hour_angle,
            elevation,
            azimuth,
        }
    }

    /// Gets the hour angle in degrees (15° per hour from solar noon).
    #[must_use]
    pub const fn hour_angle(&self) -> f64 {
        self.hour_angle
    }

    /// Gets the elevation angle in degrees.
    #[must_use]
    pub const fn elevation_angle(&self) -> f64 {
        self.elevation
    }

    /// Gets the azimuth angle in degrees.
    #[must_use]
    pub const fn azimuth(&self) -> f64 {
        self.azimuth
    }

    /// Gets the zenith angle in degrees.
    ///
    /// This is the complement of the elevation angle: zenith = 90° - elevation.
    #[must_use]
    pub fn zenith_angle(&self) -> f64 {
        90.0 - self.elevation
    }

    /// Checks if the sun is above the horizon (elevation angle > 0°).
    #[must_use]
    pub fn is_sun_up(&self) -> bool {
        self.elevation > 0.0
    }

    /// Checks if the sun is at or below the horizon (elevation angle ≤ 0°).
    #[must_use]
    pub fn is_sun_down(&self) -> bool {
        self.elevation <= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_location_validation() {
        let location = Location::new(-8.05, -34.88).unwrap();
        assert_eq!(location.latitude(), -8.05);
        assert_eq!(location.longitude(), -34.88);

        assert!(Location::new(90.0, 0.0).is_ok());
        assert!(Location::new(-90.01, 0.0).is_err());
        assert!(Location::new(f64::NAN, 0.0).is_err());

        // Longitude is the caller's responsibility
        assert!(Location::new(0.0, 200.0).is_ok());
    }

    #[test]
    fn test_time_zone_info() {
        let info = TimeZoneInfo::named("America/Recife", -10_800.0);
        assert!(info.is_resolved());
        assert_eq!(info.zone_name.as_deref(), Some("America/Recife"));

        assert!(!TimeZoneInfo::unresolved().is_resolved());
        assert_eq!(TimeZoneInfo::default(), TimeZoneInfo::unresolved());
    }

    #[test]
    fn test_day_arc_accessors() {
        let arc = DayArc::RegularDay {
            hour_day_angle: 12.0,
            day_length: Hms::new(12, 0, 0),
            sunrise: Hms::new(6, 0, 0),
            sunset: Hms::new(18, 0, 0),
        };
        assert!(arc.is_regular_day());
        assert_eq!(arc.polar(), None);
        assert_eq!(arc.sunrise(), Some(Hms::new(6, 0, 0)));
        assert_eq!(arc.sunset(), Some(Hms::new(18, 0, 0)));
        assert_eq!(arc.day_length(), Some(Hms::new(12, 0, 0)));

        assert_eq!(DayArc::AllDay.polar(), Some(Polar::Day));
        assert_eq!(DayArc::AllNight.polar(), Some(Polar::Night));
        assert_eq!(DayArc::AllNight.sunrise(), None);
        assert_eq!(DayArc::AllDay.day_length(), None);
    }

    #[test]
    fn test_sunrise_result_regular_day() {
        let date = NaiveDate::from_ymd_opt(2023, 6, 21).unwrap();
        let sunrise = date.and_hms_opt(5, 30, 0).unwrap();
        let sunset = date.and_hms_opt(18, 30, 0).unwrap();

        let times = DayTimes {
            moment: date.and_hms_opt(12, 0, 0).unwrap(),
            events: SunriseResult::RegularDay { sunrise, sunset },
        };

        assert!(times.events.is_regular_day());
        assert!(!times.events.is_polar_day());
        assert!(!times.events.is_polar_night());
        assert_eq!(times.sunrise(), Some(&sunrise));
        assert_eq!(times.sunset(), Some(&sunset));
    }

    #[test]
    fn test_sunrise_result_polar() {
        let day: SunriseResult<NaiveDateTime> = SunriseResult::AllDay;
        assert!(day.is_polar_day());
        assert_eq!(day.sunrise(), None);

        let night: SunriseResult<NaiveDateTime> = SunriseResult::AllNight;
        assert!(night.is_polar_night());
        assert_eq!(night.sunset(), None);
    }

    #[test]
    fn test_solar_position_sun_state() {
        let above_horizon = SolarPosition::new(-30.0, 40.0, 120.0);
        assert!(above_horizon.is_sun_up());
        assert!(!above_horizon.is_sun_down());
        assert_eq!(above_horizon.zenith_angle(), 50.0);

        let on_horizon = SolarPosition::new(-90.0, 0.0, 90.0);
        assert!(!on_horizon.is_sun_up());
        assert!(on_horizon.is_sun_down());
    }
}
