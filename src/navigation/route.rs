use super::geo::{bearing_deg, compass_point, haversine_m};
use crate::catalog::Place;
use crate::error::NavigationError;
use async_trait::async_trait;
use serde::Serialize;

/// Walking route summary used for the overlay and narration
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    pub distance_m: f64,
    pub instruction: String,
}

#[async_trait]
pub trait RouteProvider: Send + Sync {
    fn name(&self) -> &'static str;

    async fn fetch_route(&self, from: (f64, f64), to: &Place) -> Result<Route, NavigationError>;
}

/// Offline provider: a single straight walking leg to the destination
#[derive(Debug, Default)]
pub struct DirectRouteProvider;

#[async_trait]
impl RouteProvider for DirectRouteProvider {
    fn name(&self) -> &'static str {
        "direct"
    }

    async fn fetch_route(&self, from: (f64, f64), to: &Place) -> Result<Route, NavigationError> {
        let target = to
            .coordinates()
            .ok_or_else(|| NavigationError::UnlocatedDestination(to.id.clone()))?;

        let distance_m = haversine_m(from, target);
        let heading = compass_point(bearing_deg(from, target));
        // Rounded so small GPS jitter does not change the spoken text
        let rounded = ((distance_m / 10.0).round() * 10.0) as u64;

        let mut instruction = format!(
            "Walk {} m {} to {}",
            rounded,
            heading,
            to.display_name()
        );
        if let Some(floor) = to.floor {
            instruction.push_str(&format!(", floor {}", floor));
        }
        if let Some(building) = &to.building {
            instruction.push_str(&format!(" ({})", building));
        }

        Ok(Route {
            distance_m,
            instruction,
        })
    }
}
