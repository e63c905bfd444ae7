//! End-to-end scans over composed fixture maps.

use invader_radar::{
    BitMatrix, FrameCoords, Invader, Map, Radar, Scanner, ScannerParams, Topology, WindowCursor,
};

const CRAB: &str = "\
--o-----o--
---o---o---
--ooooooo--
-oo-ooo-oo-
ooooooooooo
o-ooooooo-o
o-o-----o-o
---oo-oo---";

const SQUID: &str = "\
---oo---
--oooo--
-oooooo-
oo-oo-oo
oooooooo
--o--o--
-o-oo-o-
o-o--o-o";

fn blank_rows(width: usize, height: usize) -> Vec<Vec<u8>> {
    vec![vec![0u8; width]; height]
}

/// Copy a pattern's signal bits into the rows, wrapping past the edges.
fn stamp(rows: &mut [Vec<u8>], pattern: &BitMatrix, x: usize, y: usize) {
    let height = rows.len();
    let width = rows[0].len();
    for dy in 0..pattern.height() {
        for dx in 0..pattern.width() {
            if pattern.get(dx, dy) == 1 {
                rows[(y + dy) % height][(x + dx) % width] = 1;
            }
        }
    }
}

fn exact_match_params() -> ScannerParams {
    ScannerParams {
        signal_threshold: None,
        similarity_threshold: 1.0,
    }
}

#[test]
fn planar_scan_locates_a_stamped_crab() {
    let crab = Invader::from_ascii(CRAB).expect("valid invader");
    let mut rows = blank_rows(20, 14);
    stamp(&mut rows, crab.pattern(), 5, 3);
    let map = Map::planar(BitMatrix::from_rows(&rows).expect("valid rows")).expect("non-empty");

    let mut radar = Radar::new(&map, Scanner::new(&crab, exact_match_params())).expect("fits");
    radar.scan().expect("frames always sized correctly");

    let hits = radar.identified_invaders();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].coords(), FrameCoords::new(5, 3, 15, 10));
    assert_eq!(hits[0].similarity(), 1.0);
    assert_eq!(hits[0].frame(), crab.pattern());
}

#[test]
fn planar_cursor_covers_every_fitting_window() {
    let cursor = WindowCursor::new(Topology::Planar, 20, 14, 11, 8);
    assert_eq!(cursor.count(), (20 - 11 + 1) * (14 - 8 + 1));
}

#[test]
fn toroidal_scan_sees_across_both_seams() {
    let squid = Invader::from_ascii(SQUID).expect("valid invader");
    let mut rows = blank_rows(16, 12);
    // Top-left corner at (12, 8): the squid straddles both seams, leaving
    // one quarter of it in each corner of the map.
    stamp(&mut rows, squid.pattern(), 12, 8);
    let grid = BitMatrix::from_rows(&rows).expect("valid rows");

    let map = Map::toroidal(grid.clone()).expect("non-empty");
    let mut radar = Radar::new(&map, Scanner::new(&squid, exact_match_params())).expect("fits");
    radar.scan().expect("frames always sized correctly");

    let hits = radar.identified_invaders();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].coords(), FrameCoords::new(12, 8, 3, 3));
    assert_eq!(hits[0].similarity(), 1.0);
    assert_eq!(hits[0].frame(), squid.pattern());

    // The planar radar sees only the four severed corners, none of which
    // is the whole squid.
    let planar = Map::planar(grid).expect("non-empty");
    let mut radar = Radar::new(&planar, Scanner::new(&squid, exact_match_params())).expect("fits");
    radar.scan().expect("frames always sized correctly");
    assert!(radar.identified_invaders().is_empty());
}

#[test]
fn toroidal_cursor_starts_everywhere() {
    let cursor = WindowCursor::new(Topology::Toroidal, 16, 12, 8, 8);
    assert_eq!(cursor.count(), 16 * 12);
}

#[test]
fn a_noisy_stamp_is_still_identified() {
    let crab = Invader::from_ascii(CRAB).expect("valid invader");
    let mut rows = blank_rows(20, 14);
    stamp(&mut rows, crab.pattern(), 5, 3);
    // Two flipped cells inside the stamped window: 86 of 88 cells agree.
    rows[3][6] = 1;
    rows[4][7] = 1;
    let map = Map::planar(BitMatrix::from_rows(&rows).expect("valid rows")).expect("non-empty");

    let params = ScannerParams {
        signal_threshold: None,
        similarity_threshold: 0.9,
    };
    let mut radar = Radar::new(&map, Scanner::new(&crab, params)).expect("fits");
    radar.scan().expect("frames always sized correctly");

    let expected = FrameCoords::new(5, 3, 15, 10);
    assert!(radar
        .identified_invaders()
        .iter()
        .any(|hit| hit.coords() == expected && hit.similarity() == 86.0 / 88.0));
    for hit in radar.identified_invaders() {
        assert!(hit.similarity() >= 0.9, "hit {hit} under threshold");
    }
}
