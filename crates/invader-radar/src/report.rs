//! End-to-end helpers and the JSON scan report.

use std::fs;
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use invader_radar_core::{render_bit_matrix, BitMatrix, FrameCoords};

use crate::identified::IdentifiedInvader;
use crate::invader::{FrameMatchError, Invader, InvaderError};
use crate::map::{Map, MapError, Topology};
use crate::radar::{Radar, RadarError};
use crate::scanner::{Scanner, ScannerParams};

/// Errors produced by the high-level [`scan_ascii`] helper.
#[derive(thiserror::Error, Debug)]
pub enum ScanError {
    #[error(transparent)]
    Invader(#[from] InvaderError),
    #[error(transparent)]
    Map(#[from] MapError),
    #[error(transparent)]
    Radar(#[from] RadarError),
    #[error(transparent)]
    Match(#[from] FrameMatchError),
}

#[derive(thiserror::Error, Debug)]
pub enum ReportIoError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// One hit in serializable form, with the matched frame as ASCII lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HitRecord {
    pub similarity: f64,
    pub coords: FrameCoords,
    pub frame: Vec<String>,
}

impl From<&IdentifiedInvader<'_>> for HitRecord {
    fn from(hit: &IdentifiedInvader<'_>) -> Self {
        Self {
            similarity: hit.similarity(),
            coords: hit.coords(),
            frame: ascii_lines(hit.frame()),
        }
    }
}

/// Self-contained outcome of a scan, ready for JSON serialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanReport {
    pub map_width: usize,
    pub map_height: usize,
    pub topology: Topology,
    pub signal_threshold: f64,
    pub similarity_threshold: f64,
    /// Target pattern as ASCII lines.
    pub invader: Vec<String>,
    pub hits: Vec<HitRecord>,
}

impl ScanReport {
    /// Snapshot a finished radar into an owned report.
    pub fn from_radar(radar: &Radar<'_>) -> Self {
        let scanner = radar.scanner();
        Self {
            map_width: radar.map().width(),
            map_height: radar.map().height(),
            topology: radar.map().topology(),
            signal_threshold: scanner.signal_threshold(),
            similarity_threshold: scanner.similarity_threshold(),
            invader: ascii_lines(scanner.invader().pattern()),
            hits: radar.identified_invaders().iter().map(HitRecord::from).collect(),
        }
    }

    /// Parse a report from its JSON form.
    pub fn from_json_str(raw: &str) -> Result<Self, ReportIoError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// This report as pretty JSON.
    pub fn to_json_string(&self) -> Result<String, ReportIoError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load a report from JSON on disk.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, ReportIoError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Write this report to disk as pretty JSON.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), ReportIoError> {
        fs::write(path, self.to_json_string()?)?;
        Ok(())
    }
}

/// Parse both inputs, run a full scan, and return the owned report.
///
/// This is the one-call surface for callers holding ASCII renderings; for
/// anything more involved (reusing a map across invaders, streaming hits)
/// use the [`Radar`] directly.
pub fn scan_ascii(
    map_ascii: &str,
    invader_ascii: &str,
    topology: Topology,
    params: ScannerParams,
) -> Result<ScanReport, ScanError> {
    let invader = Invader::from_ascii(invader_ascii)?;
    let map = Map::from_ascii(map_ascii, topology)?;
    let scanner = Scanner::new(&invader, params);

    let mut radar = Radar::new(&map, scanner)?;
    radar.scan()?;
    info!(
        "{:?} scan of {}x{} map: {} hit(s)",
        topology,
        map.width(),
        map.height(),
        radar.identified_invaders().len()
    );

    Ok(ScanReport::from_radar(&radar))
}

fn ascii_lines(matrix: &BitMatrix) -> Vec<String> {
    render_bit_matrix(matrix)
        .lines()
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const INVADER: &str = "oo\no-\noo";
    const MAP: &str = "oo-\no--\noo-\n---";

    #[test]
    fn scan_ascii_runs_the_whole_pipeline() {
        let report = scan_ascii(MAP, INVADER, Topology::Planar, ScannerParams::default())
            .expect("valid inputs");

        assert_eq!(report.map_width, 3);
        assert_eq!(report.map_height, 4);
        assert_eq!(report.topology, Topology::Planar);
        assert_eq!(report.invader, vec!["oo", "o-", "oo"]);
        assert_eq!(report.hits.len(), 1);
        assert_eq!(report.hits[0].coords, FrameCoords::new(0, 0, 1, 2));
        assert_eq!(report.hits[0].similarity, 1.0);
        assert_eq!(report.hits[0].frame, vec!["oo", "o-", "oo"]);
    }

    #[test]
    fn scan_ascii_surfaces_construction_errors() {
        assert!(matches!(
            scan_ascii(MAP, "---", Topology::Planar, ScannerParams::default()),
            Err(ScanError::Invader(InvaderError::NoSignal))
        ));
        assert!(matches!(
            scan_ascii("~~~", INVADER, Topology::Planar, ScannerParams::default()),
            Err(ScanError::Map(MapError::Empty))
        ));
        assert!(matches!(
            scan_ascii("oo\noo", INVADER, Topology::Planar, ScannerParams::default()),
            Err(ScanError::Radar(RadarError::MapTooSmall { .. }))
        ));
    }

    #[test]
    fn report_round_trips_through_json() {
        let report = scan_ascii(MAP, INVADER, Topology::Toroidal, ScannerParams::default())
            .expect("valid inputs");
        let json = report.to_json_string().expect("serializable");
        let parsed = ScanReport::from_json_str(&json).expect("parsable");

        assert_eq!(parsed.topology, report.topology);
        assert_eq!(parsed.hits, report.hits);
        assert_eq!(parsed.invader, report.invader);
    }
}
