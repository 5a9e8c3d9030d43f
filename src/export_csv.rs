use anyhow::{Context, Result};
use clap::Parser;
use tracing::warn;
use wpl::{export_mission, read_waypoints_csv};

#[derive(Parser, Debug)]
#[command(name = "export")]
#[command(about = "Convert a CSV of lat,lon,alt rows into a QGC WPL 110 mission file.", long_about = None)]
struct Cli {
    /// Path to the .csv file (header row: lat,lon,alt)
    #[arg(short, long)]
    csv: String,

    /// Output mission file
    #[arg(short, long, default_value_t = String::from("mission.waypoints"))]
    out: String,
}

fn main() -> Result<()> {
    wpl::init_logging();
    let cli = Cli::parse();

    let waypoints = read_waypoints_csv(&cli.csv).with_context(|| format!("loading {}", &cli.csv))?;
    if waypoints.is_empty() {
        warn!("{} has no waypoints; writing a header-only mission", &cli.csv);
    }

    export_mission(&cli.out, &waypoints).with_context(|| format!("exporting {}", &cli.out))?;

    Ok(())
}
