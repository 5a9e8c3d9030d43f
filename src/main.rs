use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use wpl::plan::DEFAULT_ALTITUDE_M;
use wpl::{export_mission, generate_waypoints, Coordinate};

#[derive(Parser, Debug)]
#[command(name = "plan")]
#[command(about = "Generate evenly spaced waypoints between two coordinates and save them as a QGC WPL 110 mission.", long_about = None)]
struct Cli {
    #[arg(long, default_value_t = 37.7749, allow_negative_numbers = true)]
    start_lat: f64,

    #[arg(long, default_value_t = -122.4194, allow_negative_numbers = true)]
    start_lon: f64,

    #[arg(long, default_value_t = 34.0522, allow_negative_numbers = true)]
    end_lat: f64,

    #[arg(long, default_value_t = -118.2437, allow_negative_numbers = true)]
    end_lon: f64,

    /// Distance between consecutive waypoints, in meters
    #[arg(short, long, default_value_t = 50_000.0)]
    spacing: f64,

    /// Altitude assigned to every waypoint, in meters
    #[arg(short, long, default_value_t = DEFAULT_ALTITUDE_M)]
    altitude: f64,

    /// Output mission file
    #[arg(short, long, default_value_t = String::from("mission_day3.waypoints"))]
    out: String,
}

fn main() -> Result<()> {
    wpl::init_logging();
    let cli = Cli::parse();

    let start = Coordinate::new(cli.start_lat, cli.start_lon);
    let end = Coordinate::new(cli.end_lat, cli.end_lon);
    info!(
        "Planning ({}, {}) -> ({}, {}), {:.0} m apart",
        start.lat,
        start.lon,
        end.lat,
        end.lon,
        start.distance_to(&end)
    );

    let waypoints = generate_waypoints(start, end, cli.spacing, cli.altitude)
        .with_context(|| format!("generating waypoints every {} m", cli.spacing))?;

    export_mission(&cli.out, &waypoints).with_context(|| format!("exporting {}", &cli.out))?;

    Ok(())
}
