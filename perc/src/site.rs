use crate::error::{Error, Result};

////////////////////////////////////////////////////////////////////////////////

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Site {
    pub row: usize,
    pub col: usize,
}

impl Site {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Site {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

////////////////////////////////////////////////////////////////////////////////

const NEIGHBOUR_OFFSETS: [(isize, isize); 4] = [(-1, 0), (0, -1), (0, 1), (1, 0)];

/// Maps the sites of a `size`x`size` grid onto the flat disjoint-set domain
/// `[0, size * size + 2)`.
///
/// Site `(row, col)` is `row * size + col`; the two ids past the last site are
/// the virtual top (`source`) and bottom (`sink`) terminals.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Layout {
    size: usize,
}

impl Layout {
    pub fn new(size: usize) -> Self {
        Self { size }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn sites(&self) -> usize {
        self.size * self.size
    }

    pub fn domain_len(&self) -> usize {
        self.sites() + 2
    }

    pub fn source(&self) -> usize {
        self.sites()
    }

    pub fn sink(&self) -> usize {
        self.sites() + 1
    }

    pub fn contains(&self, site: Site) -> bool {
        site.row < self.size && site.col < self.size
    }

    pub fn check(&self, site: Site) -> Result<Site> {
        if !self.contains(site) {
            return Err(Error::SiteOutOfRange {
                row: site.row,
                col: site.col,
                size: self.size,
            });
        }
        Ok(site)
    }

    pub fn encode(&self, site: Site) -> Result<usize> {
        let site = self.check(site)?;
        Ok(site.row * self.size + site.col)
    }

    /// Inverse of [`encode`](Self::encode); `None` for the terminals and
    /// anything past them.
    pub fn decode(&self, id: usize) -> Option<Site> {
        if id >= self.sites() {
            return None;
        }
        Some(Site::new(id / self.size, id % self.size))
    }

    pub fn is_top(&self, site: Site) -> bool {
        site.row == 0
    }

    pub fn is_bottom(&self, site: Site) -> bool {
        site.row + 1 == self.size
    }

    /// Grid-adjacent sites of `site` that lie inside the grid.
    pub fn neighbours(&self, site: Site) -> impl Iterator<Item = Site> + '_ {
        NEIGHBOUR_OFFSETS
            .into_iter()
            .filter_map(move |(dr, dc)| {
                let row = site.row.checked_add_signed(dr)?;
                let col = site.col.checked_add_signed(dc)?;
                let nb = Site::new(row, col);
                self.contains(nb).then_some(nb)
            })
    }
}

////////////////////////////////////////////////////////////////////////////////

/// Coordinate convention of externally supplied sites.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Indexing {
    #[default]
    ZeroBased,
    OneBased,
}

impl Indexing {
    /// Converts raw coordinates into a zero-based [`Site`]. The result is not
    /// bounds-checked against any grid, except that `0` is rejected under
    /// [`Indexing::OneBased`].
    pub fn site(self, row: usize, col: usize, size: usize) -> Result<Site> {
        match self {
            Self::ZeroBased => Ok(Site::new(row, col)),
            Self::OneBased => match (row.checked_sub(1), col.checked_sub(1)) {
                (Some(row), Some(col)) => Ok(Site::new(row, col)),
                _ => Err(Error::SiteOutOfRange { row, col, size }),
            },
        }
    }
}

////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn encode_decode() {
        let layout = Layout::new(3);
        assert_eq!(layout.encode(Site::new(0, 0)), Ok(0));
        assert_eq!(layout.encode(Site::new(1, 2)), Ok(5));
        assert_eq!(layout.encode(Site::new(2, 2)), Ok(8));
        for id in 0..9 {
            let site = layout.decode(id).unwrap();
            assert_eq!(layout.encode(site), Ok(id));
        }
        assert_eq!(layout.decode(layout.source()), None);
        assert_eq!(layout.decode(layout.sink()), None);
    }

    #[test]
    fn terminals() {
        let layout = Layout::new(4);
        assert_eq!(layout.source(), 16);
        assert_eq!(layout.sink(), 17);
        assert_eq!(layout.domain_len(), 18);
    }

    #[test]
    fn out_of_range() {
        let layout = Layout::new(3);
        assert_eq!(
            layout.encode(Site::new(3, 0)),
            Err(Error::SiteOutOfRange {
                row: 3,
                col: 0,
                size: 3
            })
        );
        assert!(layout.encode(Site::new(0, 3)).is_err());
    }

    #[test]
    fn neighbours() {
        let layout = Layout::new(3);
        let mut corner = layout.neighbours(Site::new(0, 0)).collect::<Vec<_>>();
        corner.sort_by_key(|s| (s.row, s.col));
        assert_eq!(corner, vec![Site::new(0, 1), Site::new(1, 0)]);

        assert_eq!(layout.neighbours(Site::new(1, 1)).count(), 4);
        assert_eq!(layout.neighbours(Site::new(2, 1)).count(), 3);
        assert_eq!(Layout::new(1).neighbours(Site::new(0, 0)).count(), 0);
    }

    #[test]
    fn single_row_is_top_and_bottom() {
        let layout = Layout::new(1);
        assert!(layout.is_top(Site::new(0, 0)));
        assert!(layout.is_bottom(Site::new(0, 0)));
    }

    #[test]
    fn one_based() {
        assert_eq!(Indexing::OneBased.site(1, 3, 3), Ok(Site::new(0, 2)));
        assert!(Indexing::OneBased.site(0, 1, 3).is_err());
        assert_eq!(Indexing::ZeroBased.site(0, 1, 3), Ok(Site::new(0, 1)));
    }
}
