use std::convert::TryFrom;

use data::Site;
use disjoint_set::DisjointSet;
use error::{PercolationError, Result};

/// An n×n grid of sites, all blocked at construction.
///
/// Connectivity lives in two union-find forests. `uf` holds every site plus a
/// virtual top (`n*n`) and a virtual bottom (`n*n + 1`); top and bottom being
/// connected is exactly "the grid percolates". `top_uf` has the virtual top
/// only, so fullness cannot leak up through the bottom sentinel (backwash).
#[derive(Debug, Clone)]
pub struct Percolation {
    n: usize,
    open: Vec<bool>,
    open_sites: usize,
    uf: DisjointSet,
    top_uf: DisjointSet,
}

impl Percolation {
    pub fn new(n: usize) -> Result<Percolation> {
        // Room for n² sites plus the two virtual sites.
        let cells = match n.checked_mul(n) {
            Some(cells) if n > 0 && cells.checked_add(2).is_some() => cells,
            _ => {
                return Err(PercolationError::InvalidSize {
                    what: "grid size",
                    value: i64::try_from(n).unwrap_or(i64::max_value()),
                })
            }
        };
        debug!("new {}x{} grid ({} sites)", n, n, cells);
        Ok(Percolation {
            n,
            open: vec![false; cells],
            open_sites: 0,
            uf: DisjointSet::make_singletons(cells + 2),
            top_uf: DisjointSet::make_singletons(cells + 1),
        })
    }

    pub fn size(&self) -> usize {
        self.n
    }

    fn virtual_top(&self) -> usize {
        self.n * self.n
    }

    fn virtual_bottom(&self) -> usize {
        self.n * self.n + 1
    }

    /// Flattened element id of a 1-indexed site; the only place coordinates are checked.
    fn index(&self, row: usize, col: usize) -> Result<usize> {
        if row == 0 || col == 0 || row > self.n || col > self.n {
            return Err(PercolationError::OutOfRange { row, col, n: self.n });
        }
        Ok((row - 1) * self.n + (col - 1))
    }

    /// Opens site (row, col) and joins it to any open neighbours.
    ///
    /// Opening an already open site only re-asserts its unions; the open-site
    /// count moves once per site.
    pub fn open(&mut self, row: usize, col: usize) -> Result<()> {
        let idx = self.index(row, col)?;
        if !self.open[idx] {
            self.open[idx] = true;
            self.open_sites += 1;
        }

        if row == 1 {
            let top = self.virtual_top();
            self.uf.unite(idx, top)?;
            self.top_uf.unite(idx, top)?;
        }
        if row == self.n {
            let bottom = self.virtual_bottom();
            self.uf.unite(idx, bottom)?;
        }

        let was_percolating = self.percolates();
        for neighbor in Site::new(row, col).neighbors(self.n) {
            let other = self.index(neighbor.row, neighbor.col)?;
            if self.open[other] {
                self.uf.unite(idx, other)?;
                self.top_uf.unite(idx, other)?;
            }
        }
        if !was_percolating && self.percolates() {
            debug!("percolates after opening ({}, {}) with {} open sites",
                row, col, self.open_sites);
        }
        Ok(())
    }

    pub fn is_open(&self, row: usize, col: usize) -> Result<bool> {
        let idx = self.index(row, col)?;
        Ok(self.open[idx])
    }

    /// Open and connected to the top row through open sites.
    pub fn is_full(&self, row: usize, col: usize) -> Result<bool> {
        let idx = self.index(row, col)?;
        if !self.open[idx] {
            return Ok(false);
        }
        self.top_uf.connected(idx, self.virtual_top())
    }

    pub fn number_of_open_sites(&self) -> usize {
        self.open_sites
    }

    /// Fraction of the n² sites that are open.
    pub fn open_fraction(&self) -> f64 {
        self.open_sites as f64 / (self.n * self.n) as f64
    }

    pub fn percolates(&self) -> bool {
        self.uf
            .connected(self.virtual_top(), self.virtual_bottom())
            .unwrap_or(false)
    }
}
