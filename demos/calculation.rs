use chrono::TimeZone;
use chrono_tz::Asia::Kolkata;

use crop_water::{compute_water_demand, crop_coefficient, solar_geometry, CalculationInput, Crop};

fn main() {
    let latitude = 25.61;

    let dt = Kolkata.with_ymd_and_hms(2024, 6, 15, 6, 0, 0).unwrap();

    let input = CalculationInput {
        latitude,
        date: dt.date_naive(),
        t_min: 28.0,
        t_max: 38.0,
        humidity: 62.0,
        crop: Crop::Rice,
    };

    let geometry = solar_geometry(input.latitude, input.date).unwrap();
    let result = compute_water_demand(&input).unwrap();

    println!("=== Crop Water Demand Example ===");
    println!("Location: Patna, Bihar ({:.2}°N)", latitude);
    println!("Date: {}", input.date);
    println!("Crop: {} (Kc {})", input.crop, crop_coefficient(input.crop));
    println!(
        "Temperatures: {:.1}–{:.1} °C, humidity {:.0}%",
        input.t_min, input.t_max, input.humidity
    );
    println!();
    println!("--- Solar Geometry ---");
    println!("Day of year: {}", geometry.day_of_year);
    println!("Declination: {:.4} rad", geometry.declination);
    println!("Sunset hour angle: {:.4} rad", geometry.sunset_hour_angle);
    println!("Inverse Earth-Sun distance: {:.4}", geometry.inverse_distance);
    println!("Extraterrestrial radiation: {:.2} MJ/m2/day", geometry.radiation);
    println!();
    println!("--- Water Demand ---");
    println!("ET0: {:.2} mm/day", result.et0);
    println!("ETc: {:.2} mm/day", result.etc);
    println!("Water need: {:.2} L/m2", result.liters_per_sq_meter);
    println!("{}", result.advice);
}
