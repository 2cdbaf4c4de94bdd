use crate::core::error::CoreError;

/// Earth's radius in kilometers
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Calculate the Haversine distance between two points in kilometers
///
/// # Arguments
/// * `lat1` - Latitude of first point in degrees
/// * `lon1` - Longitude of first point in degrees
/// * `lat2` - Latitude of second point in degrees
/// * `lon2` - Longitude of second point in degrees
///
/// # Returns
/// Distance in kilometers, symmetric and zero for identical points
#[inline]
pub fn haversine_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lon = (lon2 - lon1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);

    // Rounding can push sqrt(a) slightly past 1 for antipodal points
    let c = 2.0 * a.sqrt().clamp(-1.0, 1.0).asin();

    EARTH_RADIUS_KM * c
}

/// Reject NaN, infinite or out-of-range coordinates
pub fn validate_coordinates(lat: f64, lon: f64) -> Result<(), CoreError> {
    validate_latitude(lat)?;
    validate_longitude(lon)
}

pub fn validate_latitude(lat: f64) -> Result<(), CoreError> {
    if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
        return Err(CoreError::InvalidLatitude(lat));
    }
    Ok(())
}

pub fn validate_longitude(lon: f64) -> Result<(), CoreError> {
    if !lon.is_finite() || !(-180.0..=180.0).contains(&lon) {
        return Err(CoreError::InvalidLongitude(lon));
    }
    Ok(())
}
