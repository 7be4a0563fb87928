use super::tracker::{NavDecision, NavigationTracker};
use super::{Narrator, PositionSource, Route, RouteProvider};
use crate::catalog::Place;
use crate::config::NavigationConfig;
use crate::error::NavigationError;
use serde::Serialize;
use std::time::Duration;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, info, warn};

#[derive(Debug, Default, Clone, Serialize)]
pub struct NavigationSummary {
    pub fixes: usize,
    pub refetches: usize,
    pub failed_fetches: usize,
    pub narrations: usize,
    pub arrived: bool,
    pub remaining_m: Option<f64>,
    pub route: Option<Route>,
}

/// Poll positions on a fixed interval until arrival or until the source
/// runs dry, refreshing the route whenever the tracker asks for it.
///
/// A failed route request is logged and retried on the next fix; a failed
/// position read ends navigation with an error.
pub async fn poll_navigation(
    destination: &Place,
    config: &NavigationConfig,
    positions: &mut dyn PositionSource,
    routes: &dyn RouteProvider,
    narrator: &mut dyn Narrator,
) -> Result<NavigationSummary, NavigationError> {
    let target = destination
        .coordinates()
        .ok_or_else(|| NavigationError::UnlocatedDestination(destination.id.clone()))?;

    let mut tracker = NavigationTracker::new(target, config);
    let mut summary = NavigationSummary::default();
    let mut last_spoken: Option<String> = None;

    let mut ticker = interval(Duration::from_millis(config.poll_interval_ms));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    info!(
        "Navigating to {} ({}) via {} routes",
        destination.display_name(),
        destination.id,
        routes.name()
    );

    loop {
        ticker.tick().await;

        let Some(fix) = positions.next_fix().await? else {
            debug!("Position source exhausted");
            break;
        };
        summary.fixes += 1;

        match tracker.observe(&fix) {
            NavDecision::Refetch { remaining_m } => {
                summary.remaining_m = Some(remaining_m);
                let Some(position) = fix.position() else {
                    continue;
                };

                match routes.fetch_route(position, destination).await {
                    Ok(route) => {
                        tracker.record_fetch(position);
                        summary.refetches += 1;

                        if last_spoken.as_deref() != Some(route.instruction.as_str()) {
                            narrator.announce(&route.instruction);
                            summary.narrations += 1;
                            last_spoken = Some(route.instruction.clone());
                        }
                        summary.route = Some(route);
                    }
                    Err(e) => {
                        summary.failed_fetches += 1;
                        warn!("Route request failed, retrying on next fix: {}", e);
                    }
                }
            }
            NavDecision::Hold { remaining_m } => {
                summary.remaining_m = Some(remaining_m);
            }
            NavDecision::Arrived { remaining_m } => {
                summary.remaining_m = Some(remaining_m);
                summary.arrived = true;
                narrator.announce(&format!(
                    "You have arrived at {}",
                    destination.display_name()
                ));
                summary.narrations += 1;
                break;
            }
            NavDecision::Finished => break,
            NavDecision::Ignored => {
                warn!("Skipping fix with unusable coordinates: {:?}", fix);
            }
        }
    }

    info!(
        "Navigation ended after {} fixes: {} route fetches, arrived: {}",
        summary.fixes, summary.refetches, summary.arrived
    );
    Ok(summary)
}
