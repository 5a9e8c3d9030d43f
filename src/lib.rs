//! Evenly spaced waypoints between two coordinates, written as a
//! `QGC WPL 110` mission file.

pub mod geo;
pub mod mission;
pub mod plan;

pub use geo::{haversine_meters, Coordinate};
pub use mission::{export_mission, read_waypoints_csv, write_mission, MissionError};
pub use plan::{generate_waypoints, PlanError, Waypoint};

/// Installs the fmt subscriber used by both binaries. `RUST_LOG` overrides the `info` default.
pub fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
