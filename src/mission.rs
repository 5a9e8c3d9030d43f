use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, WriterBuilder};
use thiserror::Error;
use tracing::{debug, info};

use crate::plan::Waypoint;

/// First line of every plain-text waypoint list.
pub const HEADER: &str = "QGC WPL 110";

/// Global frame, altitude relative to home.
pub const FRAME_GLOBAL_RELATIVE_ALT: u8 = 3;
/// Navigate to waypoint.
pub const CMD_NAV_WAYPOINT: u16 = 16;

#[derive(Debug, Error)]
pub enum MissionError {
    #[error("writing mission file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("writing mission records")]
    Write(#[from] io::Error),
    #[error("reading waypoints from {path}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

/// One record of the mission file.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MissionItem {
    pub index: usize,
    pub current: u8,
    pub frame: u8,
    pub command: u16,
    pub params: [f64; 4],
    pub lat: f64,
    pub lon: f64,
    pub alt: f64,
    pub autocontinue: u8,
}

impl MissionItem {
    pub fn nav_waypoint(index: usize, waypoint: &Waypoint) -> Self {
        Self {
            index,
            current: 0,
            frame: FRAME_GLOBAL_RELATIVE_ALT,
            command: CMD_NAV_WAYPOINT,
            params: [0.0; 4],
            lat: waypoint.lat,
            lon: waypoint.lon,
            alt: waypoint.alt,
            autocontinue: 1,
        }
    }

    fn fields(&self) -> [String; 12] {
        let [p1, p2, p3, p4] = self.params;
        [
            self.index.to_string(),
            self.current.to_string(),
            self.frame.to_string(),
            self.command.to_string(),
            p1.to_string(),
            p2.to_string(),
            p3.to_string(),
            p4.to_string(),
            self.lat.to_string(),
            self.lon.to_string(),
            self.alt.to_string(),
            self.autocontinue.to_string(),
        ]
    }
}

/// Writes the header and one tab-separated record per waypoint.
pub fn write_mission<W: Write>(mut out: W, waypoints: &[Waypoint]) -> Result<(), MissionError> {
    writeln!(out, "{}", HEADER)?;

    let mut wtr = WriterBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(out);
    for (i, waypoint) in waypoints.iter().enumerate() {
        let item = MissionItem::nav_waypoint(i, waypoint);
        wtr.write_record(&item.fields()).map_err(io::Error::from)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Creates (or truncates) `path` and writes the mission to it.
pub fn export_mission(path: impl AsRef<Path>, waypoints: &[Waypoint]) -> Result<(), MissionError> {
    let path = path.as_ref();
    let io_err = |source| MissionError::Io { path: path.to_path_buf(), source };

    let file = File::create(path).map_err(io_err)?;
    let mut out = BufWriter::new(file);
    match write_mission(&mut out, waypoints) {
        Ok(()) => {}
        Err(MissionError::Write(source)) => return Err(io_err(source)),
        Err(e) => return Err(e),
    }
    out.flush().map_err(io_err)?;

    info!("Saved {} waypoints to {}", waypoints.len(), path.display());
    Ok(())
}

/// Reads a comma-separated `lat,lon,alt` list with a header row.
pub fn read_waypoints_csv(path: impl AsRef<Path>) -> Result<Vec<Waypoint>, MissionError> {
    let path = path.as_ref();
    let csv_err = |source| MissionError::Csv { path: path.to_path_buf(), source };

    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(csv_err)?;

    let mut waypoints = Vec::new();
    for result in rdr.deserialize() {
        let waypoint: Waypoint = result.map_err(csv_err)?;
        waypoints.push(waypoint);
    }
    debug!(count = waypoints.len(), "loaded waypoints from {}", path.display());
    Ok(waypoints)
}
