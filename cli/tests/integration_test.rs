use labyrinth_cli::{
    audit_record, build_maze_record, load_maze_record, load_solution_record, save_maze_record,
    save_solution_record, solve_record, MazeRecord, SolutionRecord,
};
use labyrinth_core::{
    path_verify::MOVE_NOOP, solver, Grid, MazeCommitment, Statement, MAX_MOVES, PATH, WALL,
};

/// The known maze seed for testing
const MAZE_SEED: u32 = 2918957128;

/// Full 312-move BFS solution for the test maze
/// Directions: 0=NORTH, 1=EAST, 2=SOUTH, 3=WEST
const TEST_MOVES: &[u8] = &[
    1, 1, 2, 2, 3, 3, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 1, 1, 1, 1, 2, 2, 3, 3, 2, 2, 1, 1,
    1, 1, 2, 2, 1, 1, 1, 1, 2, 2, 2, 2, 1, 1, 0, 0, 1, 1, 0, 0, 3, 3, 0, 0, 0, 0, 3, 3, 3, 3,
    0, 0, 3, 3, 0, 0, 3, 3, 3, 3, 0, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 1, 1, 2, 2, 2, 2, 2, 2,
    3, 3, 2, 2, 1, 1, 1, 1, 1, 1, 1, 1, 2, 2, 1, 1, 2, 2, 1, 1, 1, 1, 1, 1, 1, 1, 0, 0, 0, 0,
    0, 0, 1, 1, 2, 2, 1, 1, 0, 0, 1, 1, 1, 1, 0, 0, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0, 1, 1, 2, 2,
    2, 2, 1, 1, 2, 2, 3, 3, 2, 2, 1, 1, 2, 2, 2, 2, 2, 2, 3, 3, 2, 2, 3, 3, 2, 2, 3, 3, 3, 3,
    2, 2, 1, 1, 2, 2, 3, 3, 2, 2, 3, 3, 2, 2, 2, 2, 2, 2, 3, 3, 0, 0, 3, 3, 0, 0, 1, 1, 0, 0,
    3, 3, 3, 3, 2, 2, 3, 3, 3, 3, 2, 2, 1, 1, 1, 1, 2, 2, 3, 3, 2, 2, 1, 1, 1, 1, 1, 1, 2, 2,
    1, 1, 2, 2, 3, 3, 2, 2, 1, 1, 1, 1, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 3, 3,
    3, 3, 0, 0, 0, 0, 1, 1, 0, 0, 1, 1, 0, 0, 0, 0, 1, 1, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2,
    2, 2, 2, 2, 2, 2, 3, 3, 2, 2, 1, 1,
];

fn test_record() -> MazeRecord {
    build_maze_record(MAZE_SEED, 20, 20).expect("maze generation failed")
}

/// Flip one interior WALL cell orthogonally adjacent to the true path
fn tamper_adjacent_to_path(record: &MazeRecord) -> MazeRecord {
    let grid = record.to_grid().unwrap();
    let path = solver::solve(&grid).expect("test maze must be solvable");

    let target = path
        .iter()
        .flat_map(|&(row, col)| {
            [(-1isize, 0isize), (0, 1), (1, 0), (0, -1)]
                .into_iter()
                .map(move |(dr, dc)| (row.wrapping_add_signed(dr), col.wrapping_add_signed(dc)))
        })
        .find(|&(nr, nc)| {
            nr >= 1
                && nr < grid.rows() - 1
                && nc >= 1
                && nc < grid.cols() - 1
                && grid.get(nr, nc) == WALL
        })
        .expect("a maze path always has an adjacent interior wall");

    let mut tampered = record.clone();
    tampered.grid[target.0][target.1] = PATH;
    tampered
}

#[test]
fn test_known_bfs_solution_validates() {
    let record = test_record();
    let solution = solve_record(&record).expect("solve failed");

    // The solver must reproduce the recorded 312-move reference solution
    assert_eq!(solution.move_count, TEST_MOVES.len());
    assert_eq!(&solution.moves[..TEST_MOVES.len()], TEST_MOVES);
    assert!(solution.moves[TEST_MOVES.len()..]
        .iter()
        .all(|&mv| mv == MOVE_NOOP));

    let verdict = audit_record(&record, &solution).expect("audit failed");
    assert!(verdict.is_valid, "known BFS solution should be valid");
    assert_eq!(verdict.seed, MAZE_SEED);
}

#[test]
fn test_truncated_solution_rejected() {
    let record = test_record();

    // The first 6 moves, padded back out to the full buffer, stop far
    // short of the goal
    let truncated = SolutionRecord {
        seed: MAZE_SEED,
        move_count: 6,
        moves: solver::pad_moves(TEST_MOVES[..6].to_vec(), MAX_MOVES),
    };

    let verdict = audit_record(&record, &truncated).expect("audit failed");
    assert!(!verdict.is_valid, "truncated solution should be invalid");
}

#[test]
fn test_noop_only_solution_rejected() {
    let record = test_record();
    let noops = SolutionRecord {
        seed: MAZE_SEED,
        move_count: 0,
        moves: vec![7u8; MAX_MOVES],
    };

    let verdict = audit_record(&record, &noops).expect("audit failed");
    assert!(!verdict.is_valid, "a buffer of no-ops never reaches the goal");
}

#[test]
fn test_tampered_grid_fails_hash_check() {
    let record = test_record();
    let solution = solve_record(&record).expect("solve failed");
    let tampered = tamper_adjacent_to_path(&record);

    // The tampered grid kept grid_hash from the original record, so the
    // commitment is the honest one while the grid is not
    let verdict = audit_record(&tampered, &solution).expect("audit failed");
    assert!(
        !verdict.is_valid,
        "hash mismatch must fail closed regardless of path validity"
    );

    // Sanity: the path itself is still valid in the more permissive
    // tampered grid, so only the hash check can have rejected it
    let forged_grid = Grid::from_rows(&tampered.grid).unwrap();
    let inline = Statement::InlineGrid {
        seed: MAZE_SEED,
        grid: &forged_grid,
    };
    assert!(inline.verify(&solution.moves, MAX_MOVES).is_valid);
}

#[test]
fn test_commitment_matches_regenerated_grid() {
    // Anyone holding the seed can rebuild the grid offline and land on
    // the same commitment bytes
    let record1 = test_record();
    let record2 = test_record();

    let c1 = MazeCommitment {
        seed: record1.seed,
        grid_hash: record1.grid_hash,
    };
    let c2 = MazeCommitment {
        seed: record2.seed,
        grid_hash: record2.grid_hash,
    };
    assert_eq!(c1.to_bytes(), c2.to_bytes());
}

#[test]
fn test_seed_mismatch_is_an_error() {
    let record = test_record();
    let mut solution = solve_record(&record).expect("solve failed");
    solution.seed = 12345;

    // Shape errors are caller mistakes, not verdicts
    assert!(audit_record(&record, &solution).is_err());
}

#[test]
fn test_records_round_trip_through_disk() {
    let dir = std::env::temp_dir();
    let maze_path = dir.join(format!("{}_maze_test.json", MAZE_SEED));
    let moves_path = dir.join(format!("{}_moves_test.json", MAZE_SEED));
    let maze_path = maze_path.to_str().unwrap();
    let moves_path = moves_path.to_str().unwrap();

    let record = test_record();
    let solution = solve_record(&record).expect("solve failed");

    save_maze_record(&record, maze_path).expect("save maze failed");
    save_solution_record(&solution, moves_path).expect("save solution failed");

    let loaded_maze = load_maze_record(maze_path).expect("load maze failed");
    let loaded_solution = load_solution_record(moves_path).expect("load solution failed");

    let verdict = audit_record(&loaded_maze, &loaded_solution).expect("audit failed");
    assert!(verdict.is_valid);

    let _ = std::fs::remove_file(maze_path);
    let _ = std::fs::remove_file(moves_path);
}
