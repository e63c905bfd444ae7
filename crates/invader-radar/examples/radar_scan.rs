//! Scan a noisy map for a known invader on both topologies.
//!
//! Usage: `radar_scan [report.json]` — pass a path to also write the
//! toroidal scan's report as JSON.

use std::env;
use std::path::PathBuf;

use invader_radar::{Invader, Map, Radar, ScanReport, Scanner, ScannerParams, Topology};

#[cfg(not(feature = "tracing"))]
use log::info;

#[cfg(feature = "tracing")]
use invader_radar::core::init_tracing;
#[cfg(not(feature = "tracing"))]
use invader_radar::core::init_from_env;

const INVADER: &str = "\
--o-----o--
---o---o---
--ooooooo--
-oo-ooo-oo-
ooooooooooo
o-ooooooo-o
o-o-----o-o
---oo-oo---";

// One clean stamp of the invader at (4, 2) plus scattered noise bits.
const MAP: &str = "\
-o----------------
----------------o-
------o-----o-----
-------o---o------
------ooooooo-----
-----oo-ooo-oo----
----ooooooooooo---
----o-ooooooo-o---
----o-o-----o-o---
-------oo-oo------
--o------------o--";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(not(feature = "tracing"))]
    {
        init_from_env()?;
        info!("logger initialized");
    }
    #[cfg(feature = "tracing")]
    init_tracing(false);

    let invader = Invader::from_ascii(INVADER)?;
    let params = ScannerParams {
        signal_threshold: None,
        similarity_threshold: 0.8,
    };

    for topology in [Topology::Planar, Topology::Toroidal] {
        let map = Map::from_ascii(MAP, topology)?;
        let scanner = Scanner::new(&invader, params);
        let mut radar = Radar::new(&map, scanner)?;
        radar.scan()?;

        println!(
            "== {topology:?} scan: {} hit(s)",
            radar.identified_invaders().len()
        );
        for hit in radar.identified_invaders() {
            println!("{}", hit.pretty());
        }

        if topology == Topology::Toroidal {
            if let Some(path) = report_path() {
                let report = ScanReport::from_radar(&radar);
                report.write_json(&path)?;
                println!("wrote report JSON to {}", path.display());
            }
        }
    }

    Ok(())
}

fn report_path() -> Option<PathBuf> {
    env::args().nth(1).map(PathBuf::from)
}
