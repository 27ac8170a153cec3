extern crate pathfinding;
extern crate percolation;
extern crate rand;

use std::collections::HashSet;

use pathfinding::prelude::bfs_reach;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use percolation::{Percolation, PercolationError, PercolationStats, Site};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Node {
    Top,
    Open(Site),
}

/// Open sites reachable from the top row, found by plain breadth-first search.
fn reachable_from_top(grid: &Percolation) -> HashSet<Site> {
    let n = grid.size();
    let successors = |node: &Node| -> Vec<Node> {
        let candidates: Vec<Site> = match *node {
            Node::Top => (1..=n).map(|c| Site::new(1, c)).collect(),
            Node::Open(site) => site.neighbors(n),
        };
        candidates
            .into_iter()
            .filter(|s| grid.is_open(s.row, s.col).unwrap())
            .map(Node::Open)
            .collect()
    };
    bfs_reach(Node::Top, successors)
        .filter_map(|node| match node {
            Node::Open(site) => Some(site),
            Node::Top => None,
        })
        .collect()
}

fn assert_matches_oracle(grid: &Percolation) {
    let n = grid.size();
    let full = reachable_from_top(grid);
    let bfs_percolates = full.iter().any(|s| s.row == n);
    assert_eq!(grid.percolates(), bfs_percolates);
    for r in 1..=n {
        for c in 1..=n {
            let is_full = grid.is_full(r, c).unwrap();
            assert_eq!(is_full, full.contains(&Site::new(r, c)), "site ({}, {})", r, c);
            if is_full {
                assert!(grid.is_open(r, c).unwrap());
            }
        }
    }
}

#[test]
fn random_grids_agree_with_breadth_first_search() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for &n in &[1, 2, 3, 5, 8] {
        for _ in 0..10 {
            let mut grid = Percolation::new(n).unwrap();
            for _ in 0..(n * n) {
                let r = rng.gen_range(1..=n);
                let c = rng.gen_range(1..=n);
                grid.open(r, c).unwrap();
                assert_matches_oracle(&grid);
            }
        }
    }
}

#[test]
fn percolation_is_permanent() {
    let mut rng = StdRng::seed_from_u64(17);
    let n = 6;
    let mut grid = Percolation::new(n).unwrap();
    let mut seen = false;
    for _ in 0..200 {
        grid.open(rng.gen_range(1..=n), rng.gen_range(1..=n)).unwrap();
        seen |= grid.percolates();
        if seen {
            assert!(grid.percolates());
        }
    }
    assert!(seen);
}

#[test]
fn top_row_sites_are_full_as_soon_as_opened() {
    let n = 4;
    let mut grid = Percolation::new(n).unwrap();
    for c in 1..=n {
        grid.open(1, c).unwrap();
        assert!(grid.is_full(1, c).unwrap());
    }
    assert!(!grid.percolates());
    assert_eq!(grid.number_of_open_sites(), n);
}

#[test]
fn open_count_tracks_distinct_sites() {
    let mut grid = Percolation::new(3).unwrap();
    grid.open(2, 2).unwrap();
    grid.open(2, 2).unwrap();
    grid.open(3, 1).unwrap();
    grid.open(2, 2).unwrap();
    assert_eq!(grid.number_of_open_sites(), 2);
}

#[test]
fn out_of_range_for_every_size() {
    for n in 1..5 {
        let mut grid = Percolation::new(n).unwrap();
        for &(r, c) in &[(0, 1), (1, 0), (n + 1, 1), (1, n + 1)] {
            match grid.open(r, c) {
                Err(PercolationError::OutOfRange { .. }) => {}
                other => panic!("unexpected: {:?}", other),
            }
            assert!(grid.is_open(r, c).is_err());
            assert!(grid.is_full(r, c).is_err());
        }
        assert_eq!(grid.number_of_open_sites(), 0);
    }
}

#[test]
fn threshold_estimate_is_reproducible_and_plausible() {
    let a = PercolationStats::with_seed(25, 40, 1).unwrap();
    let b = PercolationStats::with_seed(25, 40, 1).unwrap();
    assert_eq!(a.mean(), b.mean());
    assert_eq!(a.stddev(), b.stddev());
    assert_eq!(a.confidence_lo(), b.confidence_lo());
    assert_eq!(a.confidence_hi(), b.confidence_hi());

    // The square-lattice site threshold is about 0.5927.
    assert!(a.mean() > 0.45 && a.mean() < 0.75, "mean {}", a.mean());
    assert!(a.confidence_lo() <= a.mean() && a.mean() <= a.confidence_hi());
}

#[test]
fn estimator_accepts_any_rng() {
    let mut rng = StdRng::seed_from_u64(3);
    let stats = PercolationStats::with_rng(4, 30, &mut rng).unwrap();
    assert_eq!(stats.trials(), 30);
    assert_eq!(stats.size(), 4);
    for &t in stats.results() {
        assert!(t > 0.0 && t <= 1.0);
    }
}
