use super::geo::haversine_m;
use super::Fix;
use crate::config::NavigationConfig;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NavDecision {
    /// Ask for a fresh route from this position
    Refetch { remaining_m: f64 },
    /// Keep the current route
    Hold { remaining_m: f64 },
    Arrived { remaining_m: f64 },
    /// Arrival was already reported
    Finished,
    /// Fix had unusable coordinates
    Ignored,
}

/// Decides, fix by fix, when the walking route needs refreshing and when
/// the user has reached the destination.
#[derive(Debug, Clone)]
pub struct NavigationTracker {
    destination: (f64, f64),
    reroute_threshold_m: f64,
    arrival_radius_m: f64,
    last_fetch: Option<(f64, f64)>,
    arrived: bool,
}

impl NavigationTracker {
    pub fn new(destination: (f64, f64), config: &NavigationConfig) -> Self {
        Self {
            destination,
            reroute_threshold_m: config.reroute_threshold_m,
            arrival_radius_m: config.arrival_radius_m,
            last_fetch: None,
            arrived: false,
        }
    }

    pub fn observe(&mut self, fix: &Fix) -> NavDecision {
        if self.arrived {
            return NavDecision::Finished;
        }

        let Some(position) = fix.position() else {
            return NavDecision::Ignored;
        };

        let remaining_m = haversine_m(position, self.destination);
        if remaining_m <= self.arrival_radius_m {
            self.arrived = true;
            return NavDecision::Arrived { remaining_m };
        }

        let moved_enough = match self.last_fetch {
            None => true,
            Some(last) => haversine_m(last, position) >= self.reroute_threshold_m,
        };

        if moved_enough {
            NavDecision::Refetch { remaining_m }
        } else {
            NavDecision::Hold { remaining_m }
        }
    }

    /// Mark a successful route fetch; movement is measured from here
    pub fn record_fetch(&mut self, position: (f64, f64)) {
        self.last_fetch = Some(position);
    }
}
