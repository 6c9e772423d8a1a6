use std::io::{self, BufRead};
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use wordgrid::board::GridBoard;
use wordgrid::errors::LexiconError;
use wordgrid::lexicon::LexiconGraph;
use wordgrid::solver::{self, DEFAULT_MAX_WORD_LEN};

/// Grid word finder: every dictionary word traceable on a letter grid
#[derive(Parser, Debug)]
#[command(
    author,
    about,
    long_about = None,
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")")
)]
struct Cli {
    /// Path to the pre-compiled binary DAWG dictionary
    #[arg(default_value = "dictionary.dat")]
    dictionary: String,

    /// Number of board rows
    #[arg(short, long, default_value_t = 4)]
    rows: usize,

    /// Number of board columns
    #[arg(short, long, default_value_t = 4)]
    cols: usize,
}

/// Entry point of the wordgrid CLI.
///
/// Delegates to [`try_main`], catching any errors and printing them
/// in a user-friendly way before exiting with a nonzero code.
fn main() -> ExitCode {
    // Set up logging
    let debug_enabled = std::env::var("WORDGRID_DEBUG").is_ok();
    wordgrid::log::init_logger(debug_enabled);

    log::info!("Starting wordgrid solver");

    if let Err(e) = try_main() {
        // Print the error message to stderr, with detailed formatting for lexicon errors
        if let Some(lexicon_err) = e.downcast_ref::<LexiconError>() {
            eprintln!("Error: {}", lexicon_err.display_detailed());
        } else {
            eprintln!("Error: {e}");
        }
        // Exit explicitly with a nonzero code so scripts can detect failure
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Core application logic for the wordgrid CLI.
///
/// Steps:
/// 1. Parse CLI arguments with Clap.
/// 2. Load the binary DAWG dictionary — fatal if unreadable or malformed.
/// 3. Read one board per stdin line, solve it, print every word found.
/// 4. Print performance metrics (timings, counts) on stderr.
///
/// A board that fails validation is rejected with a message and the loop
/// continues with the next one; only lexicon and solver errors bubble up
/// to [`main`].
fn try_main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let cli = Cli::parse();

    // 1. Load the lexicon once; every board in the session shares it
    let t_load = Instant::now();
    let graph = LexiconGraph::load_from_path(&cli.dictionary)?;
    let load_secs = t_load.elapsed().as_secs_f64();
    eprintln!("Loaded {} lexicon nodes in {load_secs:.3}s.", graph.node_count());

    let mut board = GridBoard::new(cli.rows, cli.cols);

    // 2. Ask for the board and solve it. Repeat until EOF.
    println!("Enter board:");
    for line in io::stdin().lock().lines() {
        let input = line?.trim().to_ascii_uppercase();
        if input.is_empty() {
            println!("Enter board:");
            continue;
        }

        // A bad board rejects only this input; the session keeps going
        if let Err(e) = board.set_letters(&input) {
            eprintln!("Error: {}", e.display_detailed());
            println!("Enter board:");
            continue;
        }

        // 3. Solve and print each word on stdout, in collection order
        let t_solve = Instant::now();
        let words = solver::solve_board(&graph, &mut board, DEFAULT_MAX_WORD_LEN)?;
        let solve_secs = t_solve.elapsed().as_secs_f64();

        for word in &words {
            println!("{word}");
        }

        // 4. Diagnostics on stderr, away from the word list
        eprintln!("Found {} words in {solve_secs:.3}s.", words.len());
        println!();
        println!("Enter board:");
    }

    Ok(())
}
