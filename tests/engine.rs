use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::SeedableRng;
use term_life::{
    advance, successor, Boundary, CellState, GameRules, Grid, Pattern, SeedPolicy,
};

fn set_cells(grid: &mut Grid, cells: &[(usize, usize)]) {
    for &(row, col) in cells {
        grid.set(row, col, CellState::Alive);
    }
}

fn collect_live(grid: &Grid) -> HashSet<(usize, usize)> {
    grid.printable()
        .filter(|(_, _, state)| state.is_alive())
        .map(|(row, col, _)| (row, col))
        .collect()
}

fn live_set(cells: &[(usize, usize)]) -> HashSet<(usize, usize)> {
    cells.iter().copied().collect()
}

fn grid_with(height: usize, width: usize, boundary: Boundary, cells: &[(usize, usize)]) -> Grid {
    let mut grid = Grid::empty(height, width, boundary).unwrap();
    set_cells(&mut grid, cells);
    grid
}

fn random_grid(height: usize, width: usize, boundary: Boundary, seed: u64) -> Grid {
    let mut rng = StdRng::seed_from_u64(seed);
    Grid::create(height, width, boundary, &SeedPolicy::default(), &mut rng).unwrap()
}

/// Reference stepper for a torus working on a plain snapshot.
fn step_naive_torus(grid: &Grid) -> HashSet<(usize, usize)> {
    let (h, w) = (grid.height(), grid.width());
    let snapshot: Vec<Vec<bool>> = (0..h)
        .map(|r| (0..w).map(|c| grid.get(r as i64, c as i64).is_alive()).collect())
        .collect();

    let mut next = HashSet::new();
    for r in 0..h {
        for c in 0..w {
            let mut neighbors = 0;
            for dr in [h - 1, 0, 1] {
                for dc in [w - 1, 0, 1] {
                    if dr == 0 && dc == 0 {
                        continue;
                    }
                    if snapshot[(r + dr) % h][(c + dc) % w] {
                        neighbors += 1;
                    }
                }
            }
            let alive = snapshot[r][c];
            let next_alive = if alive {
                neighbors == 2 || neighbors == 3
            } else {
                neighbors == 3
            };
            if next_alive {
                next.insert((r, c));
            }
        }
    }
    next
}

#[test]
fn isolated_cell_dies_under_both_policies() {
    for boundary in [Boundary::Toroidal, Boundary::BoundedWithFrame] {
        let mut grid = grid_with(7, 7, boundary, &[(3, 3)]);
        advance(&mut grid, &GameRules::conway());
        assert!(collect_live(&grid).is_empty(), "{boundary}");
    }
}

#[test]
fn full_block_center_dies_and_corners_survive() {
    let cells: Vec<_> = (2..5).flat_map(|r| (2..5).map(move |c| (r, c))).collect();
    let grid = grid_with(9, 9, Boundary::Toroidal, &cells);
    assert_eq!(grid.count_live_neighbors(3, 3), 8);
    assert_eq!(grid.count_live_neighbors(2, 2), 3);

    let next = successor(&grid, &GameRules::conway());
    assert_eq!(next.get(3, 3), CellState::Dead);
    for (r, c) in [(2, 2), (2, 4), (4, 2), (4, 4)] {
        assert_eq!(next.get(r, c), CellState::Alive, "corner ({r}, {c})");
    }
}

#[test]
fn blinker_oscillates_with_period_two() {
    let rules = GameRules::conway();
    let mut grid = Grid::empty(10, 10, Boundary::Toroidal).unwrap();
    grid.place(&Pattern::Blinker, 5, 5);
    assert_eq!(collect_live(&grid), live_set(&[(5, 4), (5, 5), (5, 6)]));

    advance(&mut grid, &rules);
    assert_eq!(collect_live(&grid), live_set(&[(4, 5), (5, 5), (6, 5)]));

    advance(&mut grid, &rules);
    assert_eq!(collect_live(&grid), live_set(&[(5, 4), (5, 5), (5, 6)]));
}

#[test]
fn blinker_wraps_across_the_torus_edge() {
    let mut grid = grid_with(10, 10, Boundary::Toroidal, &[(0, 9), (0, 0), (0, 1)]);
    advance(&mut grid, &GameRules::conway());
    assert_eq!(collect_live(&grid), live_set(&[(9, 0), (0, 0), (1, 0)]));
}

#[test]
fn block_is_a_still_life() {
    for boundary in [Boundary::Toroidal, Boundary::BoundedWithFrame] {
        let mut grid = Grid::empty(8, 8, boundary).unwrap();
        grid.place(&Pattern::Block, 3, 3);
        let before = grid.clone();
        advance(&mut grid, &GameRules::conway());
        assert_eq!(grid, before, "{boundary}");
    }
}

#[test]
fn dead_cell_is_born_only_with_exactly_three_neighbors() {
    let rules = GameRules::conway();
    let around = [(4, 4), (4, 5), (4, 6), (5, 4)];

    for n in [2, 3, 4] {
        let grid = grid_with(10, 10, Boundary::Toroidal, &around[..n]);
        assert_eq!(grid.count_live_neighbors(5, 5), n as u8);
        let next = successor(&grid, &rules);
        let expected = if n == 3 { CellState::Alive } else { CellState::Dead };
        assert_eq!(next.get(5, 5), expected, "{n} neighbors");
    }
}

#[test]
fn tick_is_evaluated_against_the_previous_generation() {
    // A scan that wrote in place would let the birth at (1, 3) feed into
    // the count for (2, 2) and kill it.
    let cells: Vec<_> = (2..5).flat_map(|r| (2..5).map(move |c| (r, c))).collect();
    let mut grid = grid_with(7, 7, Boundary::BoundedWithFrame, &cells);

    advance(&mut grid, &GameRules::conway());

    let expected = live_set(&[
        (1, 3),
        (2, 2), (2, 4),
        (3, 1), (3, 5),
        (4, 2), (4, 4),
        (5, 3),
    ]);
    assert_eq!(collect_live(&grid), expected);
}

#[test]
fn advance_matches_a_snapshot_reference_on_random_tori() {
    let rules = GameRules::conway();
    for seed in 0..8 {
        let mut grid = random_grid(13, 17, Boundary::Toroidal, seed);
        for _ in 0..5 {
            let expected = step_naive_torus(&grid);
            advance(&mut grid, &rules);
            assert_eq!(collect_live(&grid), expected, "seed {seed}");
        }
    }
}

#[test]
fn advance_is_deterministic() {
    let rules = GameRules::conway();
    let start = random_grid(20, 30, Boundary::BoundedWithFrame, 42);

    let a = successor(&start, &rules);
    let b = successor(&start, &rules);
    assert_eq!(a, b);

    let mut in_place = start.clone();
    advance(&mut in_place, &rules);
    assert_eq!(in_place, a);
}

#[test]
fn interior_patterns_evolve_the_same_under_both_policies() {
    let rules = GameRules::conway();
    let mut torus = Grid::empty(24, 24, Boundary::Toroidal).unwrap();
    let mut framed = Grid::empty(24, 24, Boundary::BoundedWithFrame).unwrap();
    for grid in [&mut torus, &mut framed] {
        grid.place(&Pattern::Glider, 8, 8);
        grid.place(&Pattern::Toad, 14, 4);
        grid.place(&Pattern::Blinker, 4, 18);
    }

    for tick in 0..8 {
        advance(&mut torus, &rules);
        advance(&mut framed, &rules);
        assert_eq!(collect_live(&torus), collect_live(&framed), "tick {tick}");
    }
}

#[test]
fn frame_ring_stays_dead_across_ticks() {
    let rules = GameRules::conway();
    let (h, w) = (15, 25);
    let mut grid = random_grid(h, w, Boundary::BoundedWithFrame, 7);

    for _ in 0..50 {
        advance(&mut grid, &rules);
        for row in 0..h {
            for col in 0..w {
                if row == 0 || col == 0 || row == h - 1 || col == w - 1 {
                    assert_eq!(grid.get(row as i64, col as i64), CellState::Dead);
                }
            }
        }
    }
}

#[test]
fn glider_returns_home_after_crossing_the_torus() {
    let rules = GameRules::conway();
    let mut grid = Grid::empty(10, 10, Boundary::Toroidal).unwrap();
    grid.place(&Pattern::Glider, 2, 2);
    let start = grid.clone();

    // Period 4 with a one-cell diagonal shift per period
    for _ in 0..40 {
        advance(&mut grid, &rules);
    }
    assert_eq!(grid, start);
}

#[test]
fn create_rejects_degenerate_dimensions() {
    let mut rng = StdRng::seed_from_u64(0);
    let seed = SeedPolicy::default();
    assert!(Grid::create(0, 10, Boundary::Toroidal, &seed, &mut rng).is_err());
    assert!(Grid::create(10, 0, Boundary::BoundedWithFrame, &seed, &mut rng).is_err());
    assert!(Grid::create(2, 2, Boundary::BoundedWithFrame, &seed, &mut rng).is_err());
    assert!(Grid::create(1, 1, Boundary::Toroidal, &seed, &mut rng).is_ok());
}
