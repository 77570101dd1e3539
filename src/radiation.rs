use std::f64::consts::PI;

use chrono::{Datelike, NaiveDate};

use crate::error::CalcError;
use crate::types::SolarGeometry;

// Solar constant Gsc in MJ m-2 min-1 (FAO-56).
pub const SOLAR_CONSTANT: f64 = 0.0820;

pub fn deg_to_rad(deg: f64) -> f64 {
    deg * (PI / 180.0)
}

pub fn rad_to_deg(rad: f64) -> f64 {
    rad * (180.0 / PI)
}

pub fn day_of_year(date: NaiveDate) -> u32 {
    date.ordinal()
}

pub fn solar_declination(day_of_year: u32) -> f64 {
    0.409 * ((2.0 * PI / 365.0) * day_of_year as f64 - 1.39).sin()
}

pub fn inverse_earth_sun_distance(day_of_year: u32) -> f64 {
    1.0 + 0.033 * ((2.0 * PI / 365.0) * day_of_year as f64).cos()
}

// None when |tan(lat) * tan(decl)| > 1: the sun never rises or never sets,
// so acos has no value. Happens only poleward of ~66° in the right season.
pub fn sunset_hour_angle(lat_rad: f64, declination: f64) -> Option<f64> {
    let cos_ws = -lat_rad.tan() * declination.tan();
    if cos_ws.abs() > 1.0 {
        None
    } else {
        Some(cos_ws.acos())
    }
}

pub fn solar_geometry(latitude: f64, date: NaiveDate) -> Result<SolarGeometry, CalcError> {
    if !latitude.is_finite() || latitude.abs() >= 90.0 {
        return Err(CalcError::LatitudeOutOfRange(latitude));
    }

    let lat_rad = deg_to_rad(latitude);
    let j = day_of_year(date);
    let declination = solar_declination(j);
    let ws = sunset_hour_angle(lat_rad, declination).ok_or(CalcError::NoSunsetHourAngle {
        latitude,
        day_of_year: j,
    })?;
    let dr = inverse_earth_sun_distance(j);

    let radiation = (24.0 * 60.0 / PI)
        * SOLAR_CONSTANT
        * dr
        * (ws * lat_rad.sin() * declination.sin()
            + lat_rad.cos() * declination.cos() * ws.sin());

    Ok(SolarGeometry {
        day_of_year: j,
        declination,
        sunset_hour_angle: ws,
        inverse_distance: dr,
        radiation,
    })
}

pub fn extraterrestrial_radiation(latitude: f64, date: NaiveDate) -> Result<f64, CalcError> {
    solar_geometry(latitude, date).map(|g| g.radiation)
}
