use crate::errors::{PlannerError, PlannerResult};
use crate::network::Road;

use rand::Rng;
use log::debug;


/// Default spread of the traffic factor around 1.0
pub const DEFAULT_VARIATION: f64 = 0.30;

/// Smallest delay a road can get, keeps every edge weight positive
pub const MIN_TRAFFIC_DELAY: f64 = 1.0;


/// Resample the traffic delay of every road
///
/// The delay seen the first time a road is simulated is kept as its base delay,
/// every later call scales that base again, so repeated calls never compound.
/// New delay = max(1, round2(base * factor)), factor ~ U[1 - variation, 1 + variation]
///
/// Must run before the graph for a planning request is built from the roads.
pub fn simulate_traffic<R>(roads: &mut [Road], variation: f64, rng: &mut R) -> PlannerResult<()>
where
    R: Rng + ?Sized,
{
    if !(0.0..1.0).contains(&variation) {
        return Err(PlannerError::InvalidVariation(variation));
    }

    for road in roads.iter_mut() {
        let base = *road.base_traffic_delay.get_or_insert(road.traffic_delay);
        let factor = rng.random_range((1.0 - variation)..=(1.0 + variation));
        road.traffic_delay = round_cents(base * factor).max(MIN_TRAFFIC_DELAY);
    }

    debug!("resampled traffic on {} roads (variation {variation})", roads.len());
    Ok(())
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
