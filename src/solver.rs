//! The search engine: one backtracking depth-first traversal per starting
//! cell, pruned through the lexicon graph.
//!
//! # Error Handling
//!
//! The solver uses [`SolverError`] with two variants:
//!
//! - S001: `PathTooLong` (Path length exceeded the configured maximum)
//! - S002: `LetterMismatch` (Decoded node letter disagrees with the board)
//!
//! Both are internal invariant violations, not bad user input: they
//! indicate a misconfiguration (a `max_word_len` smaller than the board)
//! or a logic bug, and the solve fails fast instead of continuing with
//! corrupted state. Each error has a `code()`, optional `help()`, and
//! `display_detailed()` method.
//!
//! # Example
//!
//! ```no_run
//! use wordgrid::board::GridBoard;
//! use wordgrid::lexicon::LexiconGraph;
//! use wordgrid::solver::{self, DEFAULT_MAX_WORD_LEN};
//!
//! let graph = LexiconGraph::load_from_path("dictionary.dat")?;
//! let mut board = GridBoard::new(4, 4);
//! board.set_letters("HAGOLLBRISEMMETW")?;
//!
//! let words = solver::solve_board(&graph, &mut board, DEFAULT_MAX_WORD_LEN)?;
//! for word in words.iter() {
//!     println!("{word}");
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use log::debug;

use crate::board::GridBoard;
use crate::errors::format_error_with_code_and_help;
use crate::lexicon::LexiconGraph;
use crate::word_collection::WordCollection;

/// Shortest word the search accepts; shorter complete-word matches in the
/// lexicon are computed but discarded.
pub const MIN_WORD_LEN: usize = 3;

/// Default cap on path length. A configuration constant, not an
/// architectural limit — callers must keep it above `rows*cols` for the
/// boards they solve.
pub const DEFAULT_MAX_WORD_LEN: usize = 50;

/// The 8 neighbor offsets, in fixed enumeration order.
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Internal invariant violations detected mid-search.
///
/// These never arise from user input; a well-formed lexicon plus a
/// `max_word_len` larger than the board cannot trigger them.
#[derive(Debug, thiserror::Error)]
pub enum SolverError {
    /// The in-progress path would outgrow the configured maximum word
    /// length, which means `max_word_len` was sized below `rows*cols`.
    #[error("path length {len} exceeds configured maximum {max}")]
    PathTooLong { len: usize, max: usize },

    /// A node accepted by the prefix lookup carries a different letter
    /// than the board cell that selected it.
    #[error("lexicon node letter '{found}' disagrees with board cell '{expected}'")]
    LetterMismatch { expected: char, found: char },
}

impl SolverError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            SolverError::PathTooLong { .. } => "S001",
            SolverError::LetterMismatch { .. } => "S002",
        }
    }

    /// Returns a helpful suggestion for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            SolverError::PathTooLong { .. } => {
                Some("Configure max_word_len to at least rows*cols + 1")
            }
            SolverError::LetterMismatch { .. } => None,
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// Read-only context threaded through the recursion.
struct SearchCtx<'a> {
    graph: &'a LexiconGraph,
    max_word_len: usize,
}

/// Enumerate every word of length ≥ [`MIN_WORD_LEN`] that can be traced as
/// a path of 8-adjacent, non-repeating cells on `board` and is a complete
/// word in `graph`.
///
/// The board's visited flags are reset before the search starts, mutated
/// while it runs, and all released again by the time it returns — a board
/// can be re-solved immediately and yields the same result.
///
/// # Errors
///
/// Returns a [`SolverError`] on an internal invariant violation: a path
/// outgrowing `max_word_len`, or a decoded node letter disagreeing with
/// the board cell that selected it. The solve aborts; nothing is silently
/// swallowed.
pub fn solve_board(
    graph: &LexiconGraph,
    board: &mut GridBoard,
    max_word_len: usize,
) -> Result<WordCollection, SolverError> {
    // a fresh solve never inherits visited flags from a previous one
    board.reset_all();

    debug!(
        "solving {}x{} board against {} lexicon nodes",
        board.rows(),
        board.cols(),
        graph.node_count()
    );

    let ctx = SearchCtx { graph, max_word_len };
    let mut words = WordCollection::new();
    let mut path = String::with_capacity(max_word_len);

    for row in 0..board.rows() {
        for col in 0..board.cols() {
            extend_path(&ctx, board, row as isize, col as isize, 0, &mut path, &mut words)?;
        }
    }

    debug_assert!(path.is_empty(), "path must be fully unwound after the search");
    debug_assert!(board.all_free(), "all cells must be released after the search");

    Ok(words)
}

/// One step of the backtracking traversal: try to extend the current path
/// onto `(row, col)`.
///
/// `node` is the graph position matching the path so far; it is
/// meaningless while the path is empty. Every `mark_visited` below is
/// paired with a `mark_free` that runs no matter how the neighbor
/// recursion exits.
fn extend_path(
    ctx: &SearchCtx<'_>,
    board: &mut GridBoard,
    row: isize,
    col: isize,
    node: usize,
    path: &mut String,
    words: &mut WordCollection,
) -> Result<(), SolverError> {
    // out of bounds, or already part of the in-progress path
    if !board.is_free(row, col) {
        return Ok(());
    }
    let (row, col) = (row as usize, col as usize);
    let letter = board.letter_at(row, col);

    let node = if path.is_empty() {
        // starting a new word: root lookup is a fixed offset
        let root = LexiconGraph::root_index_for(letter);
        if root >= ctx.graph.node_count() {
            // the lexicon omitted this letter's subtree; no words start here
            return Ok(());
        }
        root
    } else {
        match ctx.graph.find_child_with_letter(node, letter) {
            Some(child) => child,
            // the path plus this cell is not a prefix of any word
            None => return Ok(()),
        }
    };

    let decoded = ctx.graph.letter_at(node);
    if decoded != letter {
        return Err(SolverError::LetterMismatch { expected: letter, found: decoded });
    }
    if path.len() >= ctx.max_word_len {
        return Err(SolverError::PathTooLong { len: path.len() + 1, max: ctx.max_word_len });
    }

    path.push(letter);
    board.mark_visited(row, col);

    if path.len() >= MIN_WORD_LEN && ctx.graph.is_end_of_word(node) {
        words.insert(path.as_str());
    }

    let result = visit_neighbors(ctx, board, row, col, node, path, words);

    // backtrack unconditionally, even when a neighbor recursion erred
    path.pop();
    board.mark_free(row, col);

    result
}

fn visit_neighbors(
    ctx: &SearchCtx<'_>,
    board: &mut GridBoard,
    row: usize,
    col: usize,
    node: usize,
    path: &mut String,
    words: &mut WordCollection,
) -> Result<(), SolverError> {
    for (row_step, col_step) in NEIGHBOR_OFFSETS {
        extend_path(
            ctx,
            board,
            row as isize + row_step,
            col as isize + col_step,
            node,
            path,
            words,
        )?;
    }
    Ok(())
}
