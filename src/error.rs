use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum CalcError {
    #[error("tMax {t_max} °C is below tMin {t_min} °C")]
    TemperatureOrder { t_min: f64, t_max: f64 },

    #[error("latitude {0}° is outside the open interval (-90°, 90°)")]
    LatitudeOutOfRange(f64),

    #[error("no sunset hour angle at latitude {latitude}° on day {day_of_year} (polar day or night)")]
    NoSunsetHourAngle { latitude: f64, day_of_year: u32 },
}
