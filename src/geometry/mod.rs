use num_traits::{Num, Signed, Float};
use serde::{Deserialize, Serialize};


/// Mean earth radius in kilometers
pub const EARTH_RADIUS_KM: f64 = 6371.0;


/// Manhattan distance
pub fn manhattan_distance<T>(x1: T, y1: T, x2: T, y2: T) -> T
where
    T: Num + Copy + Signed,
    {
    (x1 - x2).abs() + (y1 - y2).abs()
}

/// Euclidean distance
pub fn euclidean<T>(x1: T, y1: T, x2: T, y2: T) -> T
where
    T: Float,
    {
    ((x1 - x2).powi(2) + (y1 - y2).powi(2)).sqrt()
}


/// Position on the globe in degrees
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}


/// Great-circle distance in kilometers
/// https://en.wikipedia.org/wiki/Haversine_formula
pub fn haversine_km(a: &Coordinate, b: &Coordinate) -> f64 {
    let dlat = (b.lat - a.lat).to_radians();
    let dlon = (b.lon - a.lon).to_radians();

    let h = (dlat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (dlon / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_KM * h.sqrt().atan2((1.0 - h).sqrt())
}

/// Length of a polyline, summing the great-circle legs
pub fn route_distance_km(route: &[Coordinate]) -> f64 {
    route.windows(2)
        .map(|leg| haversine_km(&leg[0], &leg[1]))
        .sum()
}


/// Time needed to cover a distance at constant speed
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct TravelTime {
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
    pub total_hours: f64, // rounded to 2 decimals
}

/// Split the travel time for `distance_km` at `speed_kmh` into h/m/s
/// A non-positive speed gives a zero travel time
pub fn travel_time(distance_km: f64, speed_kmh: f64) -> TravelTime {
    if speed_kmh <= 0.0 || !distance_km.is_finite() {
        return TravelTime { hours: 0, minutes: 0, seconds: 0, total_hours: 0.0 };
    }

    let total_hours = distance_km.max(0.0) / speed_kmh;
    let total_seconds = (total_hours * 3600.0) as u64;

    TravelTime {
        hours: total_seconds / 3600,
        minutes: (total_seconds % 3600) / 60,
        seconds: total_seconds % 60,
        total_hours: (total_hours * 100.0).round() / 100.0,
    }
}
