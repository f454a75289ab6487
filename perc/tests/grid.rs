use std::collections::VecDeque;

use perc::{DisjointSet, Error, Percolation, QuickFind, WeightedQuickUnion};
use pretty_assertions::assert_eq;
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

////////////////////////////////////////////////////////////////////////////////

/// Fullness by breadth-first search from every open top site.
fn reference_full(open: &[Vec<bool>]) -> Vec<Vec<bool>> {
    let n = open.len();
    let mut full = vec![vec![false; n]; n];
    let mut queue = (0..n)
        .filter(|&col| open[0][col])
        .map(|col| (0, col))
        .collect::<VecDeque<_>>();
    for &(row, col) in &queue {
        full[row][col] = true;
    }

    while let Some((row, col)) = queue.pop_front() {
        let candidates = [
            (row.wrapping_sub(1), col),
            (row + 1, col),
            (row, col.wrapping_sub(1)),
            (row, col + 1),
        ];
        for (r, c) in candidates {
            if r < n && c < n && open[r][c] && !full[r][c] {
                full[r][c] = true;
                queue.push_back((r, c));
            }
        }
    }
    full
}

fn open_all<U: DisjointSet>(grid: &mut Percolation<U>, sites: &[(usize, usize)]) {
    for &(row, col) in sites {
        grid.open(row, col).unwrap();
    }
}

fn full_map<U: DisjointSet>(grid: &Percolation<U>) -> Vec<Vec<bool>> {
    let n = grid.size();
    (0..n)
        .map(|row| (0..n).map(|col| grid.is_full(row, col).unwrap()).collect())
        .collect()
}

////////////////////////////////////////////////////////////////////////////////

#[test]
fn fresh_grid() {
    for n in 1..6 {
        let grid = Percolation::new(n).unwrap();
        assert_eq!(grid.size(), n);
        assert_eq!(grid.number_of_open_sites(), 0);
        assert!(!grid.percolates());
        for row in 0..n {
            for col in 0..n {
                assert!(!grid.is_open(row, col).unwrap());
                assert!(!grid.is_full(row, col).unwrap());
            }
        }
    }
}

#[test]
fn zero_size_is_rejected() {
    let err = Percolation::new(0).unwrap_err();
    assert!(err.is_invalid_argument());
    assert!(Percolation::<QuickFind>::with_disjoint_set(0).is_err());
}

#[test]
fn single_site() {
    let mut grid = Percolation::new(1).unwrap();
    grid.open(0, 0).unwrap();
    assert!(grid.percolates());
    assert!(grid.is_full(0, 0).unwrap());
    assert_eq!(grid.number_of_open_sites(), 1);
}

#[test]
fn open_is_idempotent() {
    let mut once = Percolation::new(4).unwrap();
    once.open(1, 2).unwrap();

    let mut twice = Percolation::new(4).unwrap();
    twice.open(1, 2).unwrap();
    twice.open(1, 2).unwrap();

    assert_eq!(once.number_of_open_sites(), 1);
    assert_eq!(twice.number_of_open_sites(), 1);
    assert_eq!(once.to_string(), twice.to_string());
}

#[test]
fn open_is_monotonic() {
    let mut grid = Percolation::new(3).unwrap();
    assert!(!grid.is_open(2, 1).unwrap());
    grid.open(2, 1).unwrap();
    for (row, col) in [(0, 0), (1, 1), (2, 2), (0, 1)] {
        grid.open(row, col).unwrap();
        assert!(grid.is_open(2, 1).unwrap());
    }
}

#[test]
fn out_of_range() {
    let mut grid = Percolation::new(3).unwrap();
    grid.open(0, 0).unwrap();

    assert_eq!(
        grid.open(3, 0),
        Err(Error::SiteOutOfRange {
            row: 3,
            col: 0,
            size: 3
        })
    );
    assert!(grid.open(0, 3).unwrap_err().is_index_out_of_range());
    assert!(grid.is_open(5, 5).unwrap_err().is_index_out_of_range());
    assert!(grid.is_full(0, 7).unwrap_err().is_index_out_of_range());

    assert_eq!(grid.number_of_open_sites(), 1);
    assert!(grid.is_full(0, 0).unwrap());
}

#[test]
fn vertical_path_percolates() {
    let mut grid = Percolation::new(4).unwrap();
    open_all(&mut grid, &[(0, 1), (1, 1), (2, 1)]);
    assert!(!grid.percolates());
    grid.open(3, 1).unwrap();
    assert!(grid.percolates());
    assert!(grid.is_full(3, 1).unwrap());
}

#[test]
fn winding_path() {
    let mut grid = Percolation::new(3).unwrap();
    open_all(&mut grid, &[(0, 2), (1, 2), (1, 1), (1, 0), (2, 0)]);
    assert!(grid.percolates());
    assert_eq!(grid.number_of_open_sites(), 5);
    assert!(grid.is_full(2, 0).unwrap());
}

fn check_no_backwash<U: DisjointSet>() {
    let mut grid = Percolation::<U>::with_disjoint_set(3).unwrap();
    open_all(&mut grid, &[(0, 0), (1, 0), (2, 0), (2, 2)]);

    assert!(grid.percolates());
    assert!(grid.is_open(2, 2).unwrap());
    assert!(!grid.is_full(2, 2).unwrap());
    assert!(grid.is_full(2, 0).unwrap());
}

#[test]
fn no_backwash() {
    check_no_backwash::<WeightedQuickUnion>();
    check_no_backwash::<QuickFind>();
}

#[test]
fn no_backwash_through_bottom_row_neighbour() {
    // (2, 2) is opened before the path reaches the bottom, then (1, 2) hangs
    // off it; neither touches the wet column.
    let mut grid = Percolation::new(3).unwrap();
    open_all(&mut grid, &[(2, 2), (1, 2), (0, 0), (1, 0), (2, 0)]);
    assert!(grid.percolates());
    assert!(!grid.is_full(2, 2).unwrap());
    assert!(!grid.is_full(1, 2).unwrap());
}

#[test]
fn matches_breadth_first_search() {
    let mut rng = StdRng::seed_from_u64(1234);
    for n in 1..9 {
        let mut grid = Percolation::new(n).unwrap();
        let mut open = vec![vec![false; n]; n];
        for _ in 0..n * n {
            let (row, col) = (rng.gen_range(0..n), rng.gen_range(0..n));
            grid.open(row, col).unwrap();
            open[row][col] = true;

            let expected = reference_full(&open);
            assert_eq!(full_map(&grid), expected);
            assert_eq!(
                grid.percolates(),
                expected[n - 1].iter().any(|&full| full)
            );
            assert_eq!(
                grid.number_of_open_sites(),
                open.iter().flatten().filter(|&&o| o).count()
            );
        }
    }
}

#[test]
fn full_implies_open() {
    let mut rng = StdRng::seed_from_u64(99);
    let n = 10;
    let mut grid = Percolation::new(n).unwrap();
    for _ in 0..60 {
        grid.open(rng.gen_range(0..n), rng.gen_range(0..n)).unwrap();
        for row in 0..n {
            for col in 0..n {
                if grid.is_full(row, col).unwrap() {
                    assert!(grid.is_open(row, col).unwrap());
                }
            }
        }
    }
}

#[test]
fn order_does_not_matter() {
    let mut rng = StdRng::seed_from_u64(5);
    let n = 7;
    let mut sites = (0..n)
        .flat_map(|row| (0..n).map(move |col| (row, col)))
        .filter(|_| rng.gen_bool(0.6))
        .collect::<Vec<_>>();

    let mut first = Percolation::new(n).unwrap();
    open_all(&mut first, &sites);

    for _ in 0..5 {
        sites.shuffle(&mut rng);
        let mut other = Percolation::<QuickFind>::with_disjoint_set(n).unwrap();
        open_all(&mut other, &sites);
        assert_eq!(other.percolates(), first.percolates());
        assert_eq!(full_map(&other), full_map(&first));
    }
}

#[test]
fn fully_open_grid_percolates() {
    for n in 1..6 {
        let mut grid = Percolation::new(n).unwrap();
        for row in (0..n).rev() {
            for col in 0..n {
                grid.open(row, col).unwrap();
            }
        }
        assert!(grid.percolates());
        assert_eq!(grid.number_of_open_sites(), n * n);
    }
}

#[test]
fn display() {
    let mut grid = Percolation::new(3).unwrap();
    open_all(&mut grid, &[(0, 0), (1, 0), (2, 0), (2, 2)]);
    assert_eq!(grid.to_string(), "~##\n~##\n~#.\n");
}
