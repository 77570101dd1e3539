use std::fmt;

use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Crop {
    Tomato,
    Corn,
    Wheat,
    Lawn,
    Rice,
    Pulses,
    Sugarcane,
    Potato,
    Mustard,
    Onion,
    Mango,
    Litchi,
    Banana,
    Jute,
    Chilli,
    Brinjal,
    Cauliflower,
}

impl Crop {
    pub const ALL: [Crop; 17] = [
        Crop::Tomato,
        Crop::Corn,
        Crop::Wheat,
        Crop::Lawn,
        Crop::Rice,
        Crop::Pulses,
        Crop::Sugarcane,
        Crop::Potato,
        Crop::Mustard,
        Crop::Onion,
        Crop::Mango,
        Crop::Litchi,
        Crop::Banana,
        Crop::Jute,
        Crop::Chilli,
        Crop::Brinjal,
        Crop::Cauliflower,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Crop::Tomato => "Tomato",
            Crop::Corn => "Corn (Maize)",
            Crop::Wheat => "Wheat",
            Crop::Lawn => "Lawn (Turfgrass)",
            Crop::Rice => "Rice (Paddy)",
            Crop::Pulses => "Pulses (Dal)",
            Crop::Sugarcane => "Sugarcane",
            Crop::Potato => "Potato",
            Crop::Mustard => "Mustard (Oilseeds)",
            Crop::Onion => "Onion",
            Crop::Mango => "Mango",
            Crop::Litchi => "Litchi",
            Crop::Banana => "Banana",
            Crop::Jute => "Jute",
            Crop::Chilli => "Chilli",
            Crop::Brinjal => "Brinjal",
            Crop::Cauliflower => "Cauliflower",
        }
    }
}

impl fmt::Display for Crop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalculationInput {
    pub latitude: f64,
    pub date: NaiveDate,
    pub t_min: f64,
    pub t_max: f64,
    // Relative humidity (%) is not used by Hargreaves; carried for callers
    // that display it alongside the result.
    pub humidity: f64,
    pub crop: Crop,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarGeometry {
    pub day_of_year: u32,
    pub declination: f64,
    pub sunset_hour_angle: f64,
    pub inverse_distance: f64,
    pub radiation: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WaterResult {
    pub et0: f64,
    pub etc: f64,
    pub liters_per_sq_meter: f64,
    pub advice: String,
}
