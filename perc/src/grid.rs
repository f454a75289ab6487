use std::fmt::Display;

use log::trace;

use crate::{
    error::{ensure_positive, Result},
    site::{Layout, Site},
    union_find::{DisjointSet, WeightedQuickUnion},
};

////////////////////////////////////////////////////////////////////////////////

/// An `n`x`n` percolation system.
///
/// Sites start blocked and are opened one at a time. Connectivity is tracked
/// by two disjoint sets over the same domain (see [`Layout`]):
///
/// * `percolation` joins the top row to the virtual source and the bottom row
///   to the virtual sink, and answers [`percolates`](Self::percolates);
/// * `fullness` is never joined to the sink, and answers
///   [`is_full`](Self::is_full).
///
/// With a single structure an open bottom site that touches the sink would be
/// reported full as soon as the system percolates (backwash).
#[derive(Debug, Clone)]
pub struct Percolation<U: DisjointSet = WeightedQuickUnion> {
    layout: Layout,
    open: Vec<bool>,
    percolation: U,
    fullness: U,
    open_sites: usize,
}

impl Percolation {
    /// Creates an `n`x`n` grid with every site blocked.
    pub fn new(n: usize) -> Result<Self> {
        Self::with_disjoint_set(n)
    }
}

impl<U: DisjointSet> Percolation<U> {
    /// Same as [`Percolation::new`] with an explicit disjoint-set backend.
    pub fn with_disjoint_set(n: usize) -> Result<Self> {
        let layout = Layout::new(ensure_positive("grid size", n)?);
        Ok(Self {
            layout,
            open: vec![false; layout.sites()],
            percolation: U::with_len(layout.domain_len()),
            fullness: U::with_len(layout.domain_len()),
            open_sites: 0,
        })
    }

    pub fn size(&self) -> usize {
        self.layout.size()
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Opens the site at `(row, col)`. Opening an already open site does
    /// nothing.
    pub fn open(&mut self, row: usize, col: usize) -> Result<()> {
        let site = Site::new(row, col);
        let id = self.layout.encode(site)?;
        if self.open[id] {
            return Ok(());
        }

        self.open[id] = true;
        self.open_sites += 1;
        trace!("opened site ({row}, {col}), {} open", self.open_sites);

        let layout = self.layout;
        if layout.is_top(site) {
            self.join(id, layout.source())?;
        }
        // The sink goes into the percolation structure only.
        if layout.is_bottom(site) {
            self.percolation.union(id, layout.sink())?;
        }
        for nb in layout.neighbours(site) {
            let nb = layout.encode(nb)?;
            if self.open[nb] {
                self.join(id, nb)?;
            }
        }

        Ok(())
    }

    pub fn is_open(&self, row: usize, col: usize) -> Result<bool> {
        let id = self.layout.encode(Site::new(row, col))?;
        Ok(self.open[id])
    }

    /// Whether the site is connected to the top row through open sites.
    pub fn is_full(&self, row: usize, col: usize) -> Result<bool> {
        let id = self.layout.encode(Site::new(row, col))?;
        self.fullness.connected(self.layout.source(), id)
    }

    pub fn number_of_open_sites(&self) -> usize {
        self.open_sites
    }

    pub fn percolates(&self) -> bool {
        self.percolation
            .connected(self.layout.source(), self.layout.sink())
            .expect("terminals should always be inside the domain")
    }

    fn join(&mut self, p: usize, q: usize) -> Result<()> {
        self.percolation.union(p, q)?;
        self.fullness.union(p, q)
    }
}

/// One row per line: `#` blocked, `~` full, `.` open but not full.
impl<U: DisjointSet> Display for Percolation<U> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let source = self.layout.source();
        for (id, open) in self.open.iter().enumerate() {
            let full = self
                .fullness
                .connected(source, id)
                .map_err(|_| std::fmt::Error)?;
            match (open, full) {
                (false, _) => write!(f, "#")?,
                (true, true) => write!(f, "~")?,
                (true, false) => write!(f, ".")?,
            }
            if (id + 1) % self.size() == 0 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
