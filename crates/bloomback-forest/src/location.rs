use serde::Serialize;
use thiserror::Error;

use crate::sites::{SITES, Site};

/// Multipliers that spread one seed into two independent-looking offsets.
/// Arbitrary constants; changing them changes every historical location.
const LAT_SPREAD: f64 = 12345.6789;
const LNG_SPREAD: f64 = 98765.4321;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ForestError {
    #[error("tree seed must be in [0,1)")]
    SeedOutOfRange,
}

/// Where a bloom's tree stands: the selected site plus the exact derived
/// coordinates inside it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlantedLocation {
    pub site_name: &'static str,
    pub area: &'static str,
    pub latitude: f64,
    pub longitude: f64,
}

/// Derive the planted location for a tree seed.
///
/// Pure: equal seeds yield the identical site and coordinates. Seeds outside
/// [0,1) are rejected rather than clamped so a bad caller fails loudly
/// instead of silently piling every tree into the last site.
pub fn assign(seed: f64) -> Result<PlantedLocation, ForestError> {
    if !(0.0..1.0).contains(&seed) {
        return Err(ForestError::SeedOutOfRange);
    }

    let index = ((seed * SITES.len() as f64) as usize).min(SITES.len() - 1);
    let site: &Site = &SITES[index];

    // Two offsets in [-0.5, 0.5) from the same seed, scaled to the site's
    // allowed drift.
    let lat_offset = (seed * LAT_SPREAD).fract() - 0.5;
    let lng_offset = (seed * LNG_SPREAD).fract() - 0.5;

    Ok(PlantedLocation {
        site_name: site.name,
        area: site.area,
        latitude: site.lat + lat_offset * site.lat_range,
        longitude: site.lng + lng_offset * site.lng_range,
    })
}

impl PlantedLocation {
    /// "18°55'S, 48°29'E" — whole degrees and minutes with hemisphere.
    pub fn formatted_coordinates(&self) -> String {
        format!(
            "{}, {}",
            format_coord(self.latitude, true),
            format_coord(self.longitude, false)
        )
    }

    pub fn map_url(&self) -> String {
        format!(
            "https://www.google.com/maps/search/?api=1&query={},{}",
            self.latitude, self.longitude
        )
    }
}

fn format_coord(value: f64, is_lat: bool) -> String {
    let abs = value.abs();
    let degrees = abs.floor();
    let minutes = ((abs - degrees) * 60.0).floor();
    let direction = match (is_lat, value >= 0.0) {
        (true, true) => 'N',
        (true, false) => 'S',
        (false, true) => 'E',
        (false, false) => 'W',
    };
    format!("{}\u{b0}{}'{}", degrees as i64, minutes as i64, direction)
}
