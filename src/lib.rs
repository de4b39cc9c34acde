//! # Sun Position Library
//!
//! Apparent position of the sun, solar time, sunrise/sunset and day length for an
//! observer at a civil (wall-clock) date-time.
//!
//! The model is the classic simplified one used for sun-angle calculators: a sinusoidal
//! declination, a three-term equation of time, and spherical trigonometry for elevation,
//! azimuth and the length of the day. It is accurate to roughly a degree and a few
//! minutes, which is plenty for solar-panel orientation or day/night displays. Use an
//! ephemeris-grade algorithm such as NREL SPA when you need arc-second accuracy.
//!
//! ## Time frames
//!
//! Two clocks are involved:
//! - **Solar time** follows the sun: solar noon is always 12:00.
//! - **Civil time** is the official clock of the location's timezone.
//!
//! They differ by the distance between the observer and the zone's standard meridian
//! (4 minutes per degree) and by the equation of time. The civil UTC offset comes from
//! a [`TimezoneResolver`](timezone::TimezoneResolver) injected into the engine; if the
//! lookup fails, the nearest 15°-wide zone around the longitude is assumed.
//!
//! ## Feature Flags
//!
//! - `tzf`: Enable `timezone::TzfResolver`, which finds the IANA zone of a coordinate
//!   from boundary data
//!
//! ## Quick Start
//!
//! ```rust
//! # futures::executor::block_on(async {
//! use chrono::NaiveDate;
//! use sun_position::{Location, SunPosition, timezone::ZoneNameResolver};
//!
//! let moment = NaiveDate::from_ymd_opt(2024, 6, 21)
//!     .unwrap()
//!     .and_hms_opt(15, 30, 0)
//!     .unwrap();
//! let vienna = Location::new(48.21, 16.37).unwrap();
//! // Take the zone offset at the observation moment, not at the current instant
//! let resolver = ZoneNameResolver::from_name("Europe/Vienna")
//!     .unwrap()
//!     .at(moment.and_utc());
//! let sun = SunPosition::new(vienna, moment, resolver);
//!
//! // Date-only quantities never wait
//! println!("Declination: {:.2}°", sun.declination());
//! println!("Day length: {}", sun.day_length().unwrap());
//!
//! // Anything needing the civil offset awaits the timezone lookup
//! let position = sun.position().await;
//! println!("Elevation: {:.2}°", position.elevation_angle());
//! println!("Azimuth: {:.2}°", position.azimuth());
//!
//! let local = sun.local_time().await.unwrap();
//! println!("Sunrise: {:?}", local.sunrise());
//! println!("Sunset: {:?}", local.sunset());
//! # });
//! ```
//!
//! ## Coordinate System
//!
//! - **Azimuth**: 0° = North, measured clockwise (0° to 360°)
//! - **Elevation angle**: 0° = horizon, 90° = directly overhead (-90° to +90°)
//! - **Hour angle**: 0° at solar noon, 15° per hour, negative in the morning

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery, clippy::cargo, clippy::all)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_precision_loss,
    clippy::cargo_common_metadata,
    clippy::multiple_crate_versions, // Acceptable for dev-dependencies
    clippy::float_cmp, // Setters skip exact repeats; tests compare exact constants
)]

// Public API exports
pub use crate::engine::SunPosition;
pub use crate::error::{Error, Result};
pub use crate::time::{Correction, Hms};
pub use crate::types::{
    DayArc, DayTimes, DeclinationState, Location, Polar, SolarPosition, SunriseResult,
    TimeZoneInfo,
};

// Calculation modules
pub mod engine;
pub mod geometry;

// Core modules
pub mod error;
pub mod types;

// Public modules
pub mod math;
pub mod time;
pub mod timezone;
