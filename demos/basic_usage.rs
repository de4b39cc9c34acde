//! Sun position, solar time and civil sunrise/sunset for cities around the world.

use chrono::NaiveDate;
use sun_position::{
    Location, SunPosition, SunriseResult,
    timezone::{FixedOffsetResolver, ZoneNameResolver},
};

#[derive(Debug)]
struct City {
    name: &'static str,
    latitude: f64,
    longitude: f64,
    zone: &'static str,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cities = [
        City {
            name: "Recife, Brazil",
            latitude: -8.05,
            longitude: -34.88,
            zone: "America/Recife",
        },
        City {
            name: "Vienna, Austria",
            latitude: 48.21,
            longitude: 16.37,
            zone: "Europe/Vienna",
        },
        City {
            name: "Madrid, Spain",
            latitude: 40.4168,
            longitude: -3.7038,
            zone: "Europe/Madrid",
        },
        City {
            name: "Tromsø, Norway (Arctic)",
            latitude: 69.65,
            longitude: 18.96,
            zone: "Europe/Oslo",
        },
    ];

    let moment = NaiveDate::from_ymd_opt(2024, 6, 21)
        .unwrap()
        .and_hms_opt(15, 30, 0)
        .unwrap();

    for city in &cities {
        println!("=== {} ===", city.name);
        let sun = SunPosition::new(
            Location::new(city.latitude, city.longitude)?,
            moment,
            ZoneNameResolver::from_name(city.zone)?.at(moment.and_utc()),
        );
        print_report(&sun).await?;
        println!();
    }

    // Without a resolver answer the nearest 15° zone is assumed; a fixed offset
    // skips the lookup entirely
    println!("=== Greenwich, fixed UTC ===");
    let greenwich = SunPosition::new(Location::new(51.48, 0.0)?, moment, FixedOffsetResolver::new(0.0));
    print_report(&greenwich).await?;

    Ok(())
}

async fn print_report(sun: &SunPosition) -> Result<(), Box<dyn std::error::Error>> {
    println!("Civil time: {}", sun.moment());
    println!("Declination: {:.3}°", sun.declination());
    println!("Equation of time: {:.2} min", sun.equation_of_time());
    match sun.day_length() {
        Ok(length) => println!("Day length: {length}"),
        Err(err) => println!("Day length: {err}"),
    }

    let zone = sun.time_zone().await;
    println!(
        "Timezone: {} (standard meridian {:.1}°)",
        zone.zone_name.as_deref().unwrap_or("unknown"),
        sun.standard_meridian().await
    );

    let position = sun.position().await;
    println!("Hour angle: {:.3}°", position.hour_angle());
    println!("Elevation: {:.3}°", position.elevation_angle());
    println!("Azimuth: {:.3}°", position.azimuth());
    println!("Zenith angle: {:.3}°", position.zenith_angle());
    println!(
        "Sun is {}",
        if position.is_sun_up() { "up" } else { "down" }
    );

    let solar = sun.solar_time().await?;
    println!("Solar time: {}", solar.moment);

    match sun.local_time().await?.events {
        SunriseResult::RegularDay { sunrise, sunset } => {
            println!("Sunrise: {}", sunrise.time());
            println!("Sunset: {}", sunset.time());
        }
        SunriseResult::AllDay => println!("Midnight sun: no sunset"),
        SunriseResult::AllNight => println!("Polar night: no sunrise"),
    }
    Ok(())
}
