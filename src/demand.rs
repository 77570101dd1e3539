use crate::error::CalcError;
use crate::radiation::solar_geometry;
use crate::types::{CalculationInput, Crop, WaterResult};

// Hargreaves-Samani empirical coefficient and Celsius offset.
pub const HARGREAVES_COEFFICIENT: f64 = 0.0023;
pub const HARGREAVES_TEMPERATURE_OFFSET: f64 = 17.8;

// Mid-season Kc values, FAO-56 adapted for regional crops. The match is
// exhaustive on purpose: a new Crop variant without a coefficient is a
// compile error, not a runtime lookup failure.
pub fn crop_coefficient(crop: Crop) -> f64 {
    match crop {
        Crop::Tomato => 1.15,
        Crop::Corn => 1.2,
        Crop::Wheat => 1.15,
        Crop::Lawn => 0.95,
        Crop::Rice => 1.20,
        Crop::Pulses => 1.0,
        Crop::Sugarcane => 1.25,
        Crop::Potato => 1.15,
        Crop::Mustard => 1.05,
        Crop::Onion => 1.05,
        Crop::Mango => 0.95,
        Crop::Litchi => 0.95,
        Crop::Banana => 1.10,
        Crop::Jute => 1.10,
        Crop::Chilli => 1.05,
        Crop::Brinjal => 1.05,
        Crop::Cauliflower => 1.05,
    }
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// Assumes t_max >= t_min; compute_water_demand validates that before calling.
// Negative raw values (tiny diurnal range, small Ra) are floored to zero.
pub fn reference_et(radiation: f64, t_min: f64, t_max: f64) -> f64 {
    let t_mean = (t_max + t_min) / 2.0;
    let et0 = HARGREAVES_COEFFICIENT
        * radiation
        * (t_mean + HARGREAVES_TEMPERATURE_OFFSET)
        * (t_max - t_min).sqrt();
    et0.max(0.0)
}

pub fn compute_water_demand(input: &CalculationInput) -> Result<WaterResult, CalcError> {
    if input.t_max < input.t_min {
        return Err(CalcError::TemperatureOrder {
            t_min: input.t_min,
            t_max: input.t_max,
        });
    }

    let geometry = solar_geometry(input.latitude, input.date)?;
    let et0 = reference_et(geometry.radiation, input.t_min, input.t_max);
    let kc = crop_coefficient(input.crop);
    let etc = et0 * kc;

    // 1 mm of depth over 1 m2 is 1 liter, so the liters figure is the
    // rounded ETc under a different unit name.
    let liters_per_sq_meter = round2(etc);

    Ok(WaterResult {
        et0: round2(et0),
        etc: round2(etc),
        liters_per_sq_meter,
        advice: format!(
            "Based on a Kc of {kc}, your {crop} calculates a water loss of {liters_per_sq_meter} liters today.",
            crop = input.crop,
        ),
    })
}
