use crate::error::{Error, Result};

////////////////////////////////////////////////////////////////////////////////

/// A partition of the fixed universe `[0, len)` into disjoint sets.
///
/// Sets can only be merged, never split. Every element id passed to
/// [`union`](DisjointSet::union) or [`connected`](DisjointSet::connected)
/// must be in range, otherwise [`Error::IndexOutOfRange`] is returned and
/// the structure is left untouched.
pub trait DisjointSet {
    /// Creates `len` singleton sets.
    fn with_len(len: usize) -> Self
    where
        Self: Sized;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of disjoint sets currently in the partition.
    fn count(&self) -> usize;

    fn union(&mut self, p: usize, q: usize) -> Result<()>;

    fn connected(&self, p: usize, q: usize) -> Result<bool>;

    fn check(&self, index: usize) -> Result<usize> {
        if index >= self.len() {
            return Err(Error::IndexOutOfRange {
                index,
                bound: self.len(),
            });
        }
        Ok(index)
    }
}

////////////////////////////////////////////////////////////////////////////////

/// Union by size. Paths are halved while merging; lookups do not mutate, so
/// trees stay logarithmic in height either way.
#[derive(Debug, Clone)]
pub struct WeightedQuickUnion {
    parent: Vec<usize>,
    size: Vec<usize>,
    count: usize,
}

impl WeightedQuickUnion {
    fn root(&self, mut x: usize) -> usize {
        while self.parent[x] != x {
            x = self.parent[x];
        }
        x
    }

    fn root_halving(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            let grandparent = self.parent[self.parent[x]];
            self.parent[x] = grandparent;
            x = grandparent;
        }
        x
    }
}

impl DisjointSet for WeightedQuickUnion {
    fn with_len(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            size: vec![1; len],
            count: len,
        }
    }

    fn len(&self) -> usize {
        self.parent.len()
    }

    fn count(&self) -> usize {
        self.count
    }

    fn union(&mut self, p: usize, q: usize) -> Result<()> {
        let (p, q) = (self.check(p)?, self.check(q)?);
        let (rp, rq) = (self.root_halving(p), self.root_halving(q));
        if rp == rq {
            return Ok(());
        }

        let (small, large) = if self.size[rp] < self.size[rq] {
            (rp, rq)
        } else {
            (rq, rp)
        };
        self.parent[small] = large;
        self.size[large] += self.size[small];
        self.count -= 1;
        Ok(())
    }

    fn connected(&self, p: usize, q: usize) -> Result<bool> {
        let (p, q) = (self.check(p)?, self.check(q)?);
        Ok(self.root(p) == self.root(q))
    }
}

////////////////////////////////////////////////////////////////////////////////

/// Every element stores its component id directly: `connected` is O(1),
/// `union` relabels the whole universe.
#[derive(Debug, Clone)]
pub struct QuickFind {
    id: Vec<usize>,
    count: usize,
}

impl DisjointSet for QuickFind {
    fn with_len(len: usize) -> Self {
        Self {
            id: (0..len).collect(),
            count: len,
        }
    }

    fn len(&self) -> usize {
        self.id.len()
    }

    fn count(&self) -> usize {
        self.count
    }

    fn union(&mut self, p: usize, q: usize) -> Result<()> {
        let (p, q) = (self.check(p)?, self.check(q)?);
        let (from, to) = (self.id[p], self.id[q]);
        if from == to {
            return Ok(());
        }
        self.id
            .iter_mut()
            .filter(|id| **id == from)
            .for_each(|id| *id = to);
        self.count -= 1;
        Ok(())
    }

    fn connected(&self, p: usize, q: usize) -> Result<bool> {
        let (p, q) = (self.check(p)?, self.check(q)?);
        Ok(self.id[p] == self.id[q])
    }
}

////////////////////////////////////////////////////////////////////////////////
