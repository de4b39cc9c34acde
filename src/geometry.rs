//! Solar geometry formulas.
//!
//! Simplified sun-angle model: a sinusoidal declination centred on the spring equinox,
//! a three-term equation of time, and the spherical-triangle relations for elevation,
//! azimuth and the length of the day. Accuracy is in the order of a degree and a few
//! minutes, which is what panel orientation and day/night displays need.
//!
//! All functions are pure. Angles are taken and returned in degrees.

#![allow(clippy::suboptimal_flops)]

use chrono::{Datelike, NaiveDate};

use crate::math::{degrees_to_radians, radians_to_degrees, round_half_up};
use crate::time::{Correction, Hms};
use crate::types::{DayArc, DeclinationState, TimeZoneInfo};

/// Maximum declination of the sun (obliquity of the ecliptic), in degrees
pub const MAX_DECLINATION: f64 = 23.45;

/// Day of year (0-based) at which the declination sinusoid crosses zero
const EQUINOX_DAY_OFFSET: f64 = 81.0;

/// Degrees of longitude per hour of time
const DEGREES_PER_HOUR: f64 = 15.0;

/// Minutes of time per degree of longitude
const MINUTES_PER_DEGREE: f64 = 4.0;

/// Declination of the sun for a calendar date.
///
/// Only the year and day of year matter: `x = 360/365·(d − 81)` with `d` counted from
/// January 1 (day 0), and `δ = 23.45°·sin(x)`.
///
/// # Example
/// ```
/// # use chrono::NaiveDate;
/// # use sun_position::geometry::declination;
/// let june = declination(NaiveDate::from_ymd_opt(2023, 6, 21).unwrap());
/// assert!(june.declination > 23.0);
/// ```
#[must_use]
pub fn declination(date: NaiveDate) -> DeclinationState {
    let day_of_year = f64::from(date.ordinal0());
    let day_angle = (360.0 / 365.0) * (day_of_year - EQUINOX_DAY_OFFSET);
    DeclinationState {
        day_angle,
        declination: MAX_DECLINATION * degrees_to_radians(day_angle).sin(),
    }
}

/// Equation of time in minutes for a day-of-year angle.
///
/// Positive values mean the true sun is ahead of the mean sun.
#[must_use]
pub fn equation_of_time(day_angle: f64) -> f64 {
    9.87 * degrees_to_radians(2.0 * day_angle).sin()
        - 7.53 * degrees_to_radians(day_angle).cos()
        - 1.5 * degrees_to_radians(day_angle).sin()
}

/// Longitude of the meridian that defines the location's civil time.
///
/// Derived from the zone's UTC offset; without one, the nearest 15°-wide zone
/// around the longitude is used.
#[must_use]
pub fn standard_meridian(time_zone: &TimeZoneInfo, longitude: f64) -> f64 {
    time_zone.utc_offset_seconds.map_or_else(
        || round_half_up(longitude / DEGREES_PER_HOUR) * DEGREES_PER_HOUR,
        |offset| offset / 3_600.0 * DEGREES_PER_HOUR,
    )
}

/// Offset between civil time and true solar time.
///
/// `(meridian − longitude)·4 − EoT` minutes, split into rounded minutes and seconds.
/// Adding it to a solar time gives civil time; subtracting it from civil time gives
/// solar time.
#[must_use]
pub fn meridian_correction(standard_meridian: f64, longitude: f64, equation_of_time: f64) -> Correction {
    Correction::from_minutes(
        (standard_meridian - longitude) * MINUTES_PER_DEGREE - equation_of_time,
    )
}

/// Hour angle in degrees for a solar time of day in decimal hours.
///
/// Negative in the morning, zero at solar noon, positive in the afternoon.
#[must_use]
pub fn hour_angle(solar_hours: f64) -> f64 {
    (solar_hours - 12.0) * DEGREES_PER_HOUR
}

/// Elevation angle of the sun above the horizon, in degrees.
#[must_use]
pub fn elevation(declination: f64, latitude: f64, hour_angle: f64) -> f64 {
    let (sin_dec, cos_dec) = degrees_to_radians(declination).sin_cos();
    let (sin_lat, cos_lat) = degrees_to_radians(latitude).sin_cos();
    let sin_elevation = sin_dec * sin_lat + cos_dec * cos_lat * degrees_to_radians(hour_angle).cos();
    radians_to_degrees(sin_elevation.clamp(-1.0, 1.0).asin())
}

/// Azimuth of the sun in degrees, clockwise from north.
///
/// The afternoon branch (`360° − A`) is taken for hour angles of zero and above, so
/// at solar noon the azimuth is reported through that branch as well.
#[must_use]
pub fn azimuth(declination: f64, latitude: f64, hour_angle: f64, elevation: f64) -> f64 {
    let (sin_dec, cos_dec) = degrees_to_radians(declination).sin_cos();
    let (sin_lat, cos_lat) = degrees_to_radians(latitude).sin_cos();
    let ratio = (sin_dec * cos_lat - cos_dec * sin_lat * degrees_to_radians(hour_angle).cos())
        / degrees_to_radians(elevation).cos();

    // sun at the zenith: no defined direction
    let ratio = if ratio.is_nan() { 1.0 } else { ratio.clamp(-1.0, 1.0) };
    let angle = radians_to_degrees(ratio.acos());

    if hour_angle >= 0.0 { 360.0 - angle } else { angle }
}

/// Length of the day with sunrise and sunset in solar time.
///
/// `H = (2/15)·acos(−tan φ·tan δ)` hours, centred on solar noon at 12:00. When the
/// cosine argument leaves `[−1, 1]` the sun does not cross the horizon: below −1 it
/// stays up all day, above 1 it stays down.
///
/// # Example
/// ```
/// # use sun_position::{geometry::day_arc, time::Hms, DayArc};
/// let arc = day_arc(0.0, 10.0);
/// assert_eq!(arc.sunrise(), Some(Hms::new(6, 0, 0)));
/// assert_eq!(day_arc(80.0, 23.0), DayArc::AllDay);
/// ```
#[must_use]
pub fn day_arc(latitude: f64, declination: f64) -> DayArc {
    let cos_half_arc =
        -degrees_to_radians(latitude).tan() * degrees_to_radians(declination).tan();

    if cos_half_arc < -1.0 {
        return DayArc::AllDay;
    }
    if cos_half_arc > 1.0 {
        return DayArc::AllNight;
    }

    let hour_day_angle = (2.0 / DEGREES_PER_HOUR) * radians_to_degrees(cos_half_arc.acos());
    DayArc::RegularDay {
        hour_day_angle,
        day_length: Hms::from_decimal_hours(hour_day_angle),
        sunrise: Hms::from_decimal_hours(12.0 - hour_day_angle / 2.0),
        sunset: Hms::from_decimal_hours(12.0 + hour_day_angle / 2.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_declination_bounded_all_year() {
        for year in [2023, 2024] {
            let mut day = date(year, 1, 1);
            while day.year() == year {
                let state = declination(day);
                assert!(
                    state.declination.abs() <= MAX_DECLINATION,
                    "{day}: {}",
                    state.declination
                );
                day = day.succ_opt().unwrap();
            }
        }
    }

    #[test]
    fn test_declination_near_zero_at_march_equinox() {
        assert!(declination(date(2023, 3, 22)).declination.abs() < 0.5);
        assert!(declination(date(2023, 3, 23)).declination.abs() < 1e-12);
        assert!(declination(date(2023, 9, 22)).declination.abs() < 1.5);
    }

    #[test]
    fn test_declination_extremes_at_solstices() {
        assert!(declination(date(2023, 6, 21)).declination > 23.4);
        assert!(declination(date(2023, 12, 21)).declination < -23.4);
    }

    #[test]
    fn test_day_angle_counts_from_january_first() {
        // May 1 is day 120 of a common year
        let state = declination(date(2023, 5, 1));
        assert_eq!(state.day_angle, (360.0 / 365.0) * (120.0 - 81.0));
    }

    #[test]
    fn test_equation_of_time_range() {
        for day in 0..365 {
            let day_angle = (360.0 / 365.0) * (f64::from(day) - 81.0);
            let eot = equation_of_time(day_angle);
            assert!((-15.0..=17.0).contains(&eot), "day {day}: {eot}");
        }
        // Early November: sundial runs about 16 minutes fast
        let november = declination(date(2023, 11, 3));
        assert!(equation_of_time(november.day_angle) > 15.0);
    }

    #[test]
    fn test_standard_meridian_from_offset() {
        let brt = TimeZoneInfo::from_offset(-10_800.0);
        assert_eq!(standard_meridian(&brt, -34.88), -45.0);

        let india = TimeZoneInfo::from_offset(19_800.0);
        assert_eq!(standard_meridian(&india, 77.2), 82.5);
    }

    #[test]
    fn test_standard_meridian_fallback() {
        let unresolved = TimeZoneInfo::unresolved();
        assert_eq!(standard_meridian(&unresolved, -34.88), -30.0);
        assert_eq!(standard_meridian(&unresolved, 7.4), 0.0);
        assert_eq!(standard_meridian(&unresolved, 7.5), 15.0);
        assert_eq!(standard_meridian(&unresolved, -112.5), -105.0);
        assert_eq!(standard_meridian(&unresolved, 179.0), 180.0);
    }

    #[test]
    fn test_meridian_correction() {
        // 10° west of the meridian is 40 minutes behind, EoT of +4 min pulls back
        let correction = meridian_correction(-45.0, -35.0, 4.0);
        assert_eq!(correction, Correction::new(-44, 0));

        let correction = meridian_correction(0.0, -2.5, -3.7);
        assert_eq!(correction, Correction::new(14, -18));
    }

    #[test]
    fn test_hour_angle() {
        assert_eq!(hour_angle(12.0), 0.0);
        assert_eq!(hour_angle(6.0), -90.0);
        assert_eq!(hour_angle(15.5), 52.5);
    }

    #[test]
    fn test_elevation_overhead_sun() {
        // asin is ill-conditioned next to 1
        assert!((elevation(10.0, 10.0, 0.0) - 90.0).abs() < 1e-5);
        assert!((elevation(-23.45, -23.45, 0.0) - 90.0).abs() < 1e-5);
    }

    #[test]
    fn test_elevation_at_noon_is_colatitude_plus_declination() {
        let noon = elevation(20.0, 50.0, 0.0);
        assert!((noon - 60.0).abs() < 1e-9);

        let horizon = elevation(0.0, 0.0, -90.0);
        assert!(horizon.abs() < 1e-9);
    }

    #[test]
    fn test_azimuth_noon_uses_afternoon_branch() {
        // Northern observer, sun due south at noon: acos(-1) = 180°, reported as 360 - 180
        let south = azimuth(0.0, 45.0, 0.0, elevation(0.0, 45.0, 0.0));
        assert!((south - 180.0).abs() < 1e-6);

        // Southern tropics in June, sun due north: acos(1) = 0°, reported as 360°
        let north = azimuth(23.0, -20.0, 0.0, elevation(23.0, -20.0, 0.0));
        assert!((north - 360.0).abs() < 1e-6);
    }

    #[test]
    fn test_azimuth_morning_east_afternoon_west() {
        let morning = azimuth(0.0, 0.0, -90.0, elevation(0.0, 0.0, -90.0));
        assert!((morning - 90.0).abs() < 1e-6);

        let afternoon = azimuth(0.0, 0.0, 90.0, elevation(0.0, 0.0, 90.0));
        assert!((afternoon - 270.0).abs() < 1e-6);
    }

    #[test]
    fn test_azimuth_at_zenith_is_finite() {
        let overhead = azimuth(10.0, 10.0, 0.0, 90.0);
        assert!(overhead.is_finite());
    }

    #[test]
    fn test_day_arc_equator() {
        let arc = day_arc(0.0, declination(date(2023, 3, 23)).declination);
        match arc {
            DayArc::RegularDay {
                hour_day_angle,
                day_length,
                sunrise,
                sunset,
            } => {
                assert!((hour_day_angle - 12.0).abs() < 1e-12);
                assert_eq!(day_length, Hms::new(12, 0, 0));
                assert_eq!(sunrise, Hms::new(6, 0, 0));
                assert_eq!(sunset, Hms::new(18, 0, 0));
            }
            other => panic!("expected regular day, got {other:?}"),
        }
    }

    #[test]
    fn test_day_arc_sunrise_before_noon_before_sunset() {
        for latitude in [-60.0, -33.9, 0.0, 12.5, 48.2, 65.0] {
            let arc = day_arc(latitude, 15.0);
            let sunrise = arc.sunrise().unwrap().to_decimal_hours();
            let sunset = arc.sunset().unwrap().to_decimal_hours();
            assert!(sunrise < 12.0 && 12.0 < sunset, "latitude {latitude}");
        }
    }

    #[test]
    fn test_day_arc_summer_longer_than_winter() {
        let june = day_arc(52.0, declination(date(2023, 6, 21)).declination);
        let december = day_arc(52.0, declination(date(2023, 12, 21)).declination);
        assert!(june.day_length().unwrap().hour >= 16);
        assert!(december.day_length().unwrap().hour <= 7);
    }

    #[test]
    fn test_day_arc_polar() {
        let june = declination(date(2023, 6, 21)).declination;
        assert_eq!(day_arc(80.0, june), DayArc::AllDay);
        assert_eq!(day_arc(-80.0, june), DayArc::AllNight);

        let december = declination(date(2023, 12, 21)).declination;
        assert_eq!(day_arc(78.2, december), DayArc::AllNight);
        assert_eq!(day_arc(-78.2, december), DayArc::AllDay);
    }
}
