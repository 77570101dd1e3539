pub mod demand;
pub mod error;
pub mod radiation;
pub mod types;

pub use demand::{
    compute_water_demand, crop_coefficient, reference_et, round2, HARGREAVES_COEFFICIENT,
    HARGREAVES_TEMPERATURE_OFFSET,
};

pub use error::CalcError;

pub use radiation::{
    day_of_year, deg_to_rad, extraterrestrial_radiation, inverse_earth_sun_distance, rad_to_deg,
    solar_declination, solar_geometry, sunset_hour_angle, SOLAR_CONSTANT,
};

pub use types::{CalculationInput, Crop, SolarGeometry, WaterResult};
