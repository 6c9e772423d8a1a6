//! Integration tests for the wordgrid solver.
//!
//! These tests verify the complete pipeline from lexicon decoding through
//! board population to solving, using on-disk dictionary files and the
//! same binary format the offline compiler emits.

use std::collections::HashSet;
use std::fs;

use wordgrid::board::GridBoard;
use wordgrid::errors::{BoardError, LexiconError};
use wordgrid::lexicon::LexiconGraph;
use wordgrid::solver::{self, DEFAULT_MAX_WORD_LEN};

mod common;

/// Write an encoded lexicon next to the temp dir and load it back.
fn load_lexicon(dir: &tempfile::TempDir, words: &[&str]) -> LexiconGraph {
    let path = dir.path().join("lexicon.dat");
    fs::write(&path, common::encode_lexicon(words)).expect("failed to write lexicon fixture");
    LexiconGraph::load_from_path(&path).expect("fixture lexicon must load")
}

/// Helper to run one solve over a populated board.
fn solve(graph: &LexiconGraph, rows: usize, cols: usize, letters: &str) -> Vec<String> {
    let mut board = GridBoard::new(rows, cols);
    board.set_letters(letters).unwrap();
    solver::solve_board(graph, &mut board, DEFAULT_MAX_WORD_LEN)
        .unwrap()
        .into_iter()
        .collect()
}

mod loading {
    use super::*;

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = LexiconGraph::load_from_path(dir.path().join("missing.dat")).unwrap_err();

        assert!(matches!(err, LexiconError::Io(_)));
        assert_eq!(err.code(), "D001");
        // the loader names the path it could not read
        assert!(err.to_string().contains("missing.dat"));
    }

    #[test]
    fn test_truncated_file_is_format_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cut.dat");
        let mut bytes = common::encode_lexicon(&["CAT", "DOG"]);
        bytes.truncate(bytes.len() / 2);
        fs::write(&path, bytes).unwrap();

        let err = LexiconGraph::load_from_path(&path).unwrap_err();
        assert!(matches!(err, LexiconError::TruncatedNodeTable { .. }));
    }

    #[test]
    fn test_encoded_lexicon_round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let graph = load_lexicon(&dir, &["DOG"]);

        // sentinel + 26 roots + O + G
        assert_eq!(graph.node_count(), 29);
        let d = LexiconGraph::root_index_for('D');
        let o = graph.find_child_with_letter(d, 'O').unwrap();
        let g = graph.find_child_with_letter(o, 'G').unwrap();
        assert!(graph.is_end_of_word(g));
    }
}

mod solving {
    use super::*;

    #[test]
    fn test_full_pipeline_finds_expected_words() {
        let dir = tempfile::tempdir().unwrap();
        let graph = load_lexicon(&dir, &["CAT", "CAR", "CARS", "ARC"]);

        // C A R S
        // T X X X   — every expected word is traceable, ARC is not
        let words = solve(&graph, 2, 4, "CARSTXXX");
        assert_eq!(words, ["CAR", "CAT", "CARS"]);
    }

    #[test]
    fn test_results_are_contained_in_the_lexicon() {
        let lexicon: Vec<&str> = vec!["ART", "RAT", "TAR", "ARTS", "RATS", "STAR", "TARS"];
        let dir = tempfile::tempdir().unwrap();
        let graph = load_lexicon(&dir, &lexicon);

        // A R
        // T S   — a 2x2 board where every cell neighbors every other
        let words = solve(&graph, 2, 2, "ARTS");

        let members: HashSet<&str> = lexicon.iter().copied().collect();
        assert!(words.iter().all(|word| members.contains(word.as_str())));
        assert!(words.iter().all(|word| word.len() >= 3));

        // on a fully connected board, every lexicon word over A,R,T,S shows up
        assert_eq!(words, ["ART", "RAT", "TAR", "ARTS", "RATS", "STAR", "TARS"]);
    }

    #[test]
    fn test_ordering_is_length_then_lexicographic() {
        let dir = tempfile::tempdir().unwrap();
        let graph = load_lexicon(&dir, &["TAR", "ART", "RAT", "TARS", "ARTS"]);
        let words = solve(&graph, 2, 2, "ARTS");

        let mut expected = words.clone();
        expected.sort_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));
        assert_eq!(words, expected);
    }

    #[test]
    fn test_resolving_reuses_the_board() {
        let dir = tempfile::tempdir().unwrap();
        let graph = load_lexicon(&dir, &["CAT", "CAR", "CARS"]);

        let mut board = GridBoard::new(2, 3);
        board.set_letters("CATARS").unwrap();

        let first: Vec<String> = solver::solve_board(&graph, &mut board, DEFAULT_MAX_WORD_LEN)
            .unwrap()
            .into_iter()
            .collect();
        assert!(!first.is_empty());
        assert!(board.all_free(), "solve must release every cell");

        // a stuck visited flag would shrink or empty this second pass
        let second: Vec<String> = solver::solve_board(&graph, &mut board, DEFAULT_MAX_WORD_LEN)
            .unwrap()
            .into_iter()
            .collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_oversized_board_input_is_recoverable() {
        let dir = tempfile::tempdir().unwrap();
        let graph = load_lexicon(&dir, &["CAT"]);

        let mut board = GridBoard::new(4, 4);
        let err = board.set_letters(&"A".repeat(17)).unwrap_err();
        assert!(matches!(err, BoardError::InputTooLong { len: 17, capacity: 16 }));

        // the session recovers: the same board and graph accept the next input
        board.set_letters("CATXXXXXXXXXXXXX").unwrap();
        let words = solver::solve_board(&graph, &mut board, DEFAULT_MAX_WORD_LEN).unwrap();
        assert!(words.contains("CAT"));
    }

    #[test]
    fn test_invalid_character_is_recoverable() {
        let dir = tempfile::tempdir().unwrap();
        let graph = load_lexicon(&dir, &["CAT"]);

        let mut board = GridBoard::new(1, 3);
        let err = board.set_letters("C4T").unwrap_err();
        assert!(matches!(err, BoardError::InvalidCharacter { ch: '4', position: 1 }));

        board.set_letters("CAT").unwrap();
        let words = solver::solve_board(&graph, &mut board, DEFAULT_MAX_WORD_LEN).unwrap();
        assert!(words.contains("CAT"));
    }

    #[test]
    fn test_one_graph_serves_many_boards() {
        let dir = tempfile::tempdir().unwrap();
        let graph = load_lexicon(&dir, &["CAT", "DOG"]);

        assert_eq!(solve(&graph, 1, 3, "CAT"), ["CAT"]);
        assert_eq!(solve(&graph, 1, 3, "DOG"), ["DOG"]);
        assert!(solve(&graph, 1, 3, "XYZ").is_empty());
    }
}
