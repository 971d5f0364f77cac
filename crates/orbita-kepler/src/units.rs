//! Physical constants and unit conversions used to feed the core SI values.

/// Newtonian gravitational constant, m^3 kg^-1 s^-2 (CODATA 2018).
pub const GRAVITATIONAL_CONSTANT: f64 = 6.674_30e-11;

/// 1 solar mass in kilograms.
pub const SOLAR_MASS_KG: f64 = 1.989e30;

/// 1 astronomical unit in meters.
pub const AU_METERS: f64 = 1.496e11;

/// Seconds in one Julian year (365.25 days).
pub const SECONDS_PER_YEAR: f64 = 365.25 * 24.0 * 3600.0;

/// Convert solar masses to kilograms.
pub fn solar_masses_to_kg(solar_masses: f64) -> f64 {
    solar_masses * SOLAR_MASS_KG
}

/// Convert astronomical units to meters.
pub fn au_to_meters(au: f64) -> f64 {
    au * AU_METERS
}

/// Convert meters to astronomical units.
pub fn meters_to_au(meters: f64) -> f64 {
    meters / AU_METERS
}
