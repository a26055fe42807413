use labyrinth_cli::{
    audit_record, build_maze_record, load_maze_record, load_solution_record, preview,
    save_maze_record, save_solution_record, solve_record,
};
use labyrinth_core::{DEFAULT_MAZE_COLS, DEFAULT_MAZE_ROWS, MAX_MOVES};
use std::env;

fn main() {
    // Initialize tracing for debug output
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::filter::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage(&args[0]);
        std::process::exit(1);
    }

    let command = &args[1];

    match command.as_str() {
        "generate" => {
            let (seed, rows, cols, output) = parse_seed_command(&args);
            generate_command(seed, rows, cols, output.as_deref());
        }

        "solve" => {
            if args.len() < 3 {
                eprintln!("Usage: {} solve <maze_file> [output_file]", args[0]);
                std::process::exit(1);
            }
            let output = args.get(3).map(|s| s.as_str());
            solve_command(&args[2], output);
        }

        "verify" => {
            if args.len() < 4 {
                eprintln!("Usage: {} verify <maze_file> <moves_file>", args[0]);
                std::process::exit(1);
            }
            verify_command(&args[2], &args[3]);
        }

        "show" => {
            let (seed, rows, cols, _) = parse_seed_command(&args);
            show_command(seed, rows, cols);
        }

        _ => {
            eprintln!("❌ Unknown command: {}", command);
            print_usage(&args[0]);
            std::process::exit(1);
        }
    }
}

/// Parse `<command> <seed> [--rows N] [--cols N] [output_file]`
fn parse_seed_command(args: &[String]) -> (u32, usize, usize, Option<String>) {
    if args.len() < 3 {
        eprintln!(
            "Usage: {} {} <seed> [--rows N] [--cols N] [output_file]",
            args[0], args[1]
        );
        std::process::exit(1);
    }

    let seed: u32 = args[2].parse().unwrap_or_else(|_| {
        eprintln!(
            "❌ Error: Invalid seed '{}'. Must fit an unsigned 32-bit integer.",
            args[2]
        );
        std::process::exit(1);
    });

    let mut rows = DEFAULT_MAZE_ROWS;
    let mut cols = DEFAULT_MAZE_COLS;
    let mut output = None;

    let mut i = 3;
    while i < args.len() {
        match args[i].as_str() {
            "--rows" => {
                rows = parse_dimension(args.get(i + 1), "--rows");
                i += 2;
            }
            "--cols" => {
                cols = parse_dimension(args.get(i + 1), "--cols");
                i += 2;
            }
            other => {
                output = Some(other.to_string());
                i += 1;
            }
        }
    }

    (seed, rows, cols, output)
}

fn parse_dimension(value: Option<&String>, flag: &str) -> usize {
    let Some(value) = value else {
        eprintln!("❌ Error: {} requires a value", flag);
        std::process::exit(1);
    };
    value.parse().unwrap_or_else(|_| {
        eprintln!("❌ Error: Invalid value '{}' for {}", value, flag);
        std::process::exit(1);
    })
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} <command> [options]", program);
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  generate <seed> [--rows N] [--cols N] [output_file]");
    eprintln!("      Generate a maze and its commitment from a seed");
    eprintln!("      - seed: unsigned 32-bit integer fixing the maze");
    eprintln!("      - output_file: defaults to <seed>_maze.json");
    eprintln!();
    eprintln!("  solve <maze_file> [output_file]");
    eprintln!("      Produce the reference solution for a recorded maze,");
    eprintln!("      padded with no-ops to {} moves", MAX_MOVES);
    eprintln!("      - output_file: defaults to <seed>_moves.json");
    eprintln!();
    eprintln!("  verify <maze_file> <moves_file>");
    eprintln!("      Audit a (commitment, grid, moves) triple: re-hash the");
    eprintln!("      recorded grid against the commitment, then check the path");
    eprintln!();
    eprintln!("  show <seed> [--rows N] [--cols N]");
    eprintln!("      Print an ASCII preview of the maze for a seed");
    eprintln!();
    eprintln!("Example workflow:");
    eprintln!("  1. {} generate 2918957128", program);
    eprintln!("     (saves to 2918957128_maze.json)");
    eprintln!("  2. {} solve 2918957128_maze.json", program);
    eprintln!("     (saves to 2918957128_moves.json)");
    eprintln!("  3. {} verify 2918957128_maze.json 2918957128_moves.json", program);
}

fn generate_command(seed: u32, rows: usize, cols: usize, output_file: Option<&str>) {
    println!("📋 Generating maze");
    println!("  Seed: {}", seed);
    println!("  Size: {}x{} cells", rows, cols);
    println!();

    match build_maze_record(seed, rows, cols) {
        Ok(record) => {
            println!("✅ Maze generated");
            println!(
                "  Grid: {}x{} (includes walls)",
                record.grid.len(),
                record.grid[0].len()
            );
            println!(
                "  Grid hash: {:02x}{:02x}{:02x}{:02x}...",
                record.grid_hash[0], record.grid_hash[1], record.grid_hash[2], record.grid_hash[3]
            );
            println!();

            let default_filename = format!("{}_maze.json", seed);
            let file_to_save = output_file.unwrap_or(&default_filename);

            match save_maze_record(&record, file_to_save) {
                Ok(_) => {
                    println!("💾 Maze record saved to: {}", file_to_save);
                    println!("   Share the (seed, hash) pair; anyone can rebuild the grid offline.");
                }
                Err(e) => {
                    eprintln!("❌ Error saving maze record: {}", e);
                    std::process::exit(1);
                }
            }
        }
        Err(e) => {
            eprintln!("❌ Error generating maze: {}", e);
            std::process::exit(1);
        }
    }
}

fn solve_command(maze_file: &str, output_file: Option<&str>) {
    println!("📋 Solving recorded maze");
    println!("  Maze file: {}", maze_file);
    println!();

    let record = match load_maze_record(maze_file) {
        Ok(record) => record,
        Err(e) => {
            eprintln!("❌ Error loading maze record: {}", e);
            std::process::exit(1);
        }
    };

    println!("📦 Loaded maze record (seed: {})", record.seed);

    match solve_record(&record) {
        Ok(solution) => {
            println!("✅ Solution found");
            println!(
                "  Moves: {} real + {} padding = {} total",
                solution.move_count,
                MAX_MOVES - solution.move_count,
                MAX_MOVES
            );
            println!();

            let default_filename = format!("{}_moves.json", record.seed);
            let file_to_save = output_file.unwrap_or(&default_filename);

            match save_solution_record(&solution, file_to_save) {
                Ok(_) => println!("💾 Solution saved to: {}", file_to_save),
                Err(e) => {
                    eprintln!("❌ Error saving solution: {}", e);
                    std::process::exit(1);
                }
            }
        }
        Err(e) => {
            eprintln!("❌ Error solving maze: {}", e);
            std::process::exit(1);
        }
    }
}

fn verify_command(maze_file: &str, moves_file: &str) {
    println!("📋 Auditing (commitment, grid, moves) triple");
    println!("  Maze file: {}", maze_file);
    println!("  Moves file: {}", moves_file);
    println!();

    let maze = match load_maze_record(maze_file) {
        Ok(record) => record,
        Err(e) => {
            eprintln!("❌ Error loading maze record: {}", e);
            std::process::exit(1);
        }
    };

    let solution = match load_solution_record(moves_file) {
        Ok(record) => record,
        Err(e) => {
            eprintln!("❌ Error loading solution: {}", e);
            std::process::exit(1);
        }
    };

    println!("📦 Loaded maze record (seed: {})", maze.seed);
    println!(
        "📦 Loaded solution ({} real moves)",
        solution.move_count
    );
    println!();

    match audit_record(&maze, &solution) {
        Ok(verdict) => {
            println!(
                "  Path valid: {}",
                if verdict.is_valid { "Yes ✓" } else { "No ✗" }
            );
            println!("  Seed: {}", verdict.seed);
            if !verdict.is_valid {
                // A hash mismatch and an invalid path are deliberately
                // indistinguishable here
                std::process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("❌ Error auditing: {}", e);
            std::process::exit(1);
        }
    }
}

fn show_command(seed: u32, rows: usize, cols: usize) {
    match preview(seed, rows, cols) {
        Ok(art) => {
            println!("Seed {} ({}x{} cells):", seed, rows, cols);
            println!();
            println!("{}", art);
        }
        Err(e) => {
            eprintln!("❌ Error rendering maze: {}", e);
            std::process::exit(1);
        }
    }
}
