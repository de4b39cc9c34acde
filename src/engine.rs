//! Stateful sun position calculator for one observer.
//!
//! [`SunPosition`] owns a location, an observation moment in civil (wall-clock) time
//! and a timezone resolver. Quantities that depend only on the date and latitude are
//! recomputed eagerly by the setters and read synchronously. Everything that needs the
//! standard meridian awaits the timezone lookup for the current location, which is
//! started lazily and shared by all queries until the location changes.

use core::fmt;
use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime};
use futures::future::{BoxFuture, FutureExt, Shared};
use log::{debug, warn};

use crate::error::check_latitude;
use crate::geometry;
use crate::time::{Correction, Hms};
use crate::timezone::TimezoneResolver;
use crate::types::{
    DayArc, DayTimes, DeclinationState, Location, Polar, SolarPosition, SunriseResult,
    TimeZoneInfo,
};
use crate::{Error, Result};

type PendingTimeZone = Shared<BoxFuture<'static, TimeZoneInfo>>;

/// Sun position, solar time and day length for an observer at a civil date-time.
///
/// # Example
/// ```
/// # futures::executor::block_on(async {
/// use chrono::NaiveDate;
/// use sun_position::{Location, SunPosition, timezone::FixedOffsetResolver};
///
/// let moment = NaiveDate::from_ymd_opt(2024, 3, 20).unwrap().and_hms_opt(12, 0, 0).unwrap();
/// let recife = Location::new(-8.05, -34.88).unwrap();
/// let sun = SunPosition::new(recife, moment, FixedOffsetResolver::hours(-3.0));
///
/// let local = sun.local_time().await.unwrap();
/// println!("sunrise {:?}, sunset {:?}", local.sunrise(), local.sunset());
/// println!("elevation {:.2}°", sun.elevation().await);
/// # });
/// ```
pub struct SunPosition {
    location: Location,
    moment: NaiveDateTime,
    declination: DeclinationState,
    day_arc: DayArc,
    resolver: Arc<dyn TimezoneResolver>,
    time_zone: PendingTimeZone,
}

impl SunPosition {
    /// Creates a calculator for `location` at the civil date-time `moment`.
    ///
    /// The timezone lookup is not started until a query needs it.
    pub fn new(
        location: Location,
        moment: NaiveDateTime,
        resolver: impl TimezoneResolver + 'static,
    ) -> Self {
        Self::with_shared_resolver(location, moment, Arc::new(resolver))
    }

    /// Like [`SunPosition::new`], sharing a resolver between calculators.
    pub fn with_shared_resolver(
        location: Location,
        moment: NaiveDateTime,
        resolver: Arc<dyn TimezoneResolver>,
    ) -> Self {
        let declination = geometry::declination(moment.date());
        let day_arc = geometry::day_arc(location.latitude(), declination.declination);
        let time_zone = lookup(&resolver, location);
        Self {
            location,
            moment,
            declination,
            day_arc,
            resolver,
            time_zone,
        }
    }

    /// Moves the observer to another latitude.
    ///
    /// Recomputes the day arc and restarts the timezone lookup, unless the latitude
    /// is unchanged.
    ///
    /// # Errors
    /// Returns `InvalidLatitude` if latitude is outside -90 to +90 degrees.
    pub fn set_latitude(&mut self, latitude: f64) -> Result<()> {
        check_latitude(latitude)?;
        if latitude == self.location.latitude() {
            return Ok(());
        }
        self.location = self.location.with_latitude(latitude);
        self.day_arc = geometry::day_arc(latitude, self.declination.declination);
        self.time_zone = lookup(&self.resolver, self.location);
        Ok(())
    }

    /// Moves the observer to another longitude.
    ///
    /// The value is not range-checked. Restarts the timezone lookup, unless the
    /// longitude is unchanged.
    pub fn set_longitude(&mut self, longitude: f64) {
        if longitude == self.location.longitude() {
            return;
        }
        self.location = self.location.with_longitude(longitude);
        self.time_zone = lookup(&self.resolver, self.location);
    }

    /// Sets the observation moment (civil time at the location).
    ///
    /// Recomputes declination and day arc; never waits for the timezone.
    pub fn set_date_time(&mut self, moment: NaiveDateTime) {
        self.moment = moment;
        self.declination = geometry::declination(moment.date());
        self.day_arc = geometry::day_arc(self.location.latitude(), self.declination.declination);
        debug!(
            "{}: declination {:.4}°, day arc {:?}",
            moment.date(),
            self.declination.declination,
            self.day_arc
        );
    }

    /// Current observer location.
    #[must_use]
    pub const fn location(&self) -> Location {
        self.location
    }

    /// Current observation moment.
    #[must_use]
    pub const fn moment(&self) -> NaiveDateTime {
        self.moment
    }

    /// Declination of the sun on the moment's date, in degrees.
    #[must_use]
    pub const fn declination(&self) -> f64 {
        self.declination.declination
    }

    /// Declination together with the day-of-year angle it was derived from.
    #[must_use]
    pub const fn declination_state(&self) -> DeclinationState {
        self.declination
    }

    /// Equation of time on the moment's date, in minutes.
    #[must_use]
    pub fn equation_of_time(&self) -> f64 {
        geometry::equation_of_time(self.declination.day_angle)
    }

    /// Day arc (length of day, sunrise and sunset in solar time) on the moment's date.
    #[must_use]
    pub const fn day_arc(&self) -> DayArc {
        self.day_arc
    }

    /// Length of the day.
    ///
    /// # Errors
    /// Returns `UndefinedDayArc` during polar day or polar night.
    pub fn day_length(&self) -> Result<Hms> {
        match self.day_arc {
            DayArc::RegularDay { day_length, .. } => Ok(day_length),
            DayArc::AllDay => Err(Error::undefined_day_arc(Polar::Day)),
            DayArc::AllNight => Err(Error::undefined_day_arc(Polar::Night)),
        }
    }

    /// Uncorrected sunrise in solar time (solar noon at 12:00), if the sun rises.
    #[must_use]
    pub const fn sunrise(&self) -> Option<Hms> {
        self.day_arc.sunrise()
    }

    /// Uncorrected sunset in solar time (solar noon at 12:00), if the sun sets.
    #[must_use]
    pub const fn sunset(&self) -> Option<Hms> {
        self.day_arc.sunset()
    }

    /// Timezone of the current location, waiting for the lookup if needed.
    ///
    /// A failed lookup yields [`TimeZoneInfo::unresolved`].
    pub async fn time_zone(&self) -> TimeZoneInfo {
        self.time_zone.clone().await
    }

    /// Longitude of the standard meridian of the location's civil time, in degrees.
    pub async fn standard_meridian(&self) -> f64 {
        geometry::standard_meridian(&self.time_zone().await, self.location.longitude())
    }

    /// Offset to add to true solar time to get civil time.
    ///
    /// Combines the distance from the standard meridian with the equation of time.
    pub async fn meridian_correction(&self) -> Correction {
        let meridian = self.standard_meridian().await;
        geometry::meridian_correction(
            meridian,
            self.location.longitude(),
            self.equation_of_time(),
        )
    }

    /// Hour angle of the sun at the observation moment, in degrees.
    pub async fn hour_angle(&self) -> f64 {
        let correction = self.meridian_correction().await;
        geometry::hour_angle(self.solar_hours(correction))
    }

    /// Elevation of the sun at the observation moment, in degrees.
    pub async fn elevation(&self) -> f64 {
        self.position().await.elevation_angle()
    }

    /// Azimuth of the sun at the observation moment, in degrees clockwise from north.
    pub async fn azimuth(&self) -> f64 {
        self.position().await.azimuth()
    }

    /// Hour angle, elevation and azimuth from a single timezone resolution.
    pub async fn position(&self) -> SolarPosition {
        let hour_angle = self.hour_angle().await;
        let declination = self.declination();
        let latitude = self.location.latitude();
        let elevation = geometry::elevation(declination, latitude, hour_angle);
        let azimuth = geometry::azimuth(declination, latitude, hour_angle, elevation);
        SolarPosition::new(hour_angle, elevation, azimuth)
    }

    /// The observation moment with that day's sunrise and sunset in solar time.
    ///
    /// The moment is shifted from civil to true solar time by the full meridian
    /// correction; sunrise and sunset are shifted by the equation of time only.
    ///
    /// # Errors
    /// Returns `InvalidDateTime` if a shifted time falls outside chrono's date range.
    pub async fn solar_time(&self) -> Result<DayTimes> {
        let correction = self.meridian_correction().await;
        let date = self.moment.date();

        let moment = Hms::from_time(self.moment.time())
            .corrected(correction.negated())
            .at_date(date)?;

        let equation_of_time = Correction::from_minutes(self.equation_of_time());
        let events = events_on(date, self.day_arc, equation_of_time.negated())?;

        Ok(DayTimes { moment, events })
    }

    /// The observation moment with that day's sunrise and sunset in civil time.
    ///
    /// The moment is already civil time; sunrise and sunset are shifted by the full
    /// meridian correction.
    ///
    /// # Errors
    /// Returns `InvalidDateTime` if a shifted time falls outside chrono's date range.
    pub async fn local_time(&self) -> Result<DayTimes> {
        let correction = self.meridian_correction().await;
        let events = events_on(self.moment.date(), self.day_arc, correction)?;

        Ok(DayTimes {
            moment: self.moment,
            events,
        })
    }

    /// Solar time of day at the observation moment, in decimal hours within 0..24.
    fn solar_hours(&self, correction: Correction) -> f64 {
        let solar = Hms::from_time(self.moment.time()).corrected(correction.negated());
        Hms::new(solar.hour.rem_euclid(24), solar.minute, solar.second).to_decimal_hours()
    }
}

impl fmt::Debug for SunPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SunPosition")
            .field("location", &self.location)
            .field("moment", &self.moment)
            .field("declination", &self.declination)
            .field("day_arc", &self.day_arc)
            .finish_non_exhaustive()
    }
}

fn events_on(
    date: NaiveDate,
    day_arc: DayArc,
    correction: Correction,
) -> Result<SunriseResult<NaiveDateTime>> {
    Ok(match day_arc {
        DayArc::RegularDay {
            sunrise, sunset, ..
        } => SunriseResult::RegularDay {
            sunrise: sunrise.corrected(correction).at_date(date)?,
            sunset: sunset.corrected(correction).at_date(date)?,
        },
        DayArc::AllDay => SunriseResult::AllDay,
        DayArc::AllNight => SunriseResult::AllNight,
    })
}

fn lookup(resolver: &Arc<dyn TimezoneResolver>, location: Location) -> PendingTimeZone {
    let resolver = Arc::clone(resolver);
    async move {
        let (latitude, longitude) = (location.latitude(), location.longitude());
        debug!("resolving timezone at ({latitude}, {longitude})");
        match resolver.resolve(latitude, longitude).await {
            Ok(info) => info,
            Err(err) => {
                warn!(
                    "timezone lookup at ({latitude}, {longitude}) failed, using nearest 15° meridian: {err}"
                );
                TimeZoneInfo::unresolved()
            }
        }
    }
    .boxed()
    .shared()
}
