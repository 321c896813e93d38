use finite_life::universe::Universe;
use rand::RngCore;
use rand::SeedableRng;

/// Reference stepper: the same rule applied to a plain double-buffered board,
/// with off-board neighbors counting as dead.
fn step_naive(board: &[Vec<bool>]) -> Vec<Vec<bool>> {
    let height = board.len();
    let width = board[0].len();
    let mut next = vec![vec![false; width]; height];

    for y in 0..height {
        for x in 0..width {
            let mut neighbors = 0;
            for dy in -1i64..=1 {
                for dx in -1i64..=1 {
                    if dx == 0 && dy == 0 {
                        continue;
                    }
                    let nx = x as i64 + dx;
                    let ny = y as i64 + dy;
                    if nx >= 0
                        && ny >= 0
                        && (nx as usize) < width
                        && (ny as usize) < height
                        && board[ny as usize][nx as usize]
                    {
                        neighbors += 1;
                    }
                }
            }
            next[y][x] = if board[y][x] {
                neighbors == 2 || neighbors == 3
            } else {
                neighbors == 3
            };
        }
    }

    next
}

fn run_parity_case(width: usize, height: usize, density: f64, steps: u64, seed: u64) {
    let mut universe = Universe::new(width, height).unwrap();
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    let threshold = (u64::MAX as f64 * density) as u64;

    for y in 0..height {
        for x in 0..width {
            if rng.next_u64() <= threshold {
                universe.set_cell(x, y, true).unwrap();
            }
        }
    }

    let mut board = universe.snapshot();
    for step in 0..steps {
        let expected = step_naive(&board);
        let changes = universe.tick().unwrap();
        let actual = universe.snapshot();
        assert_eq!(
            actual, expected,
            "diverged from naive stepper at step {step} for density {density} seed {seed}"
        );

        // The changed-cell report must be exactly the flips, in flat order.
        let mut expected_changes = Vec::new();
        for y in 0..height {
            for x in 0..width {
                if board[y][x] != expected[y][x] {
                    expected_changes.push((x, y, expected[y][x]));
                }
            }
        }
        let actual_changes: Vec<_> = changes.iter().map(|c| (c.x, c.y, c.alive)).collect();
        assert_eq!(
            actual_changes, expected_changes,
            "changed-cell report mismatch at step {step} for density {density} seed {seed}"
        );

        board = actual;
    }
}

#[test]
fn parity_sparse_mid_dense() {
    run_parity_case(32, 24, 0.10, 6, 0xA1);
    run_parity_case(32, 24, 0.42, 6, 0xB2);
    run_parity_case(24, 32, 0.83, 4, 0xC3);
}

#[test]
fn parity_multiple_seeds() {
    for seed in [11u64, 22, 33, 44] {
        run_parity_case(20, 20, 0.35, 7, seed);
    }
}

#[test]
fn parity_narrow_boards() {
    // Degenerate shapes exercise the boundary sentinel on every cell.
    run_parity_case(1, 1, 0.9, 2, 0xD4);
    run_parity_case(16, 1, 0.5, 5, 0xE5);
    run_parity_case(1, 16, 0.5, 5, 0xF6);
    run_parity_case(2, 2, 0.6, 4, 0x17);
}
