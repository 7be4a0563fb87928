//! Walking navigation toward a catalog place.
//!
//! Positions come from a [`PositionSource`], routes from a [`RouteProvider`]
//! and spoken guidance goes to a [`Narrator`]. The tracker holds the pure
//! re-fetch and arrival rules; the poller drives them on a timer.

mod geo;
mod poller;
mod position;
mod route;
mod tracker;

pub use poller::{poll_navigation, NavigationSummary};
pub use position::{Fix, PositionSource, TracePositionSource};
pub use route::{DirectRouteProvider, Route, RouteProvider};

/// Receives guidance text to be spoken
pub trait Narrator: Send {
    fn announce(&mut self, text: &str);
}
