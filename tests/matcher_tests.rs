//! Matcher tests - delta flood fill, seed unions and the composite matcher.

use std::collections::BTreeSet;

use match_three::core::{Alphabet, Board, Error, Matcher, MaximumDeltaMatcher, MultiMatcher};
use match_three::types::{Delta, Position};

fn board(tokens: &str, text: &str) -> Board {
    Board::from_token_string(Alphabet::parse(tokens).unwrap(), text).unwrap()
}

fn vertical() -> MaximumDeltaMatcher {
    MaximumDeltaMatcher::new([Delta::new(0, 1)]).unwrap()
}

fn horizontal() -> MaximumDeltaMatcher {
    MaximumDeltaMatcher::new([Delta::new(1, 0)]).unwrap()
}

#[test]
fn test_vertical_matcher_on_uniform_board_covers_column() {
    // With only a vertical delta, the closure from any seed is its whole
    // column on a single-token board.
    let b = board("AB", "AA;AA;AA");
    let matches = vertical().match_at(&b, Position::new(1, 1)).unwrap();
    assert_eq!(matches.len(), 1);
    let region = matches.iter().next().unwrap();
    let expected: BTreeSet<Position> = (0..3).map(|y| Position::new(1, y)).collect();
    assert_eq!(region, &expected);
}

#[test]
fn test_both_axes_cover_whole_uniform_board() {
    let b = board("AB", "AA;AA;AA");
    let matcher = MaximumDeltaMatcher::new([Delta::new(0, 1), Delta::new(1, 0)]).unwrap();
    let matches = matcher.match_at(&b, Position::new(0, 0)).unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches.iter().next().unwrap().len(), 6);
}

#[test]
fn test_match_at_rejects_off_board_seed() {
    let b = board("AB", "AB;BA");
    assert_eq!(
        vertical().match_at(&b, Position::new(0, -1)).unwrap_err(),
        Error::OutOfBounds(Position::new(0, -1))
    );
}

#[test]
fn test_empty_seed_yields_single_empty_match() {
    let b = board("AB", "A ;BA");
    let matches = vertical().match_at(&b, Position::new(1, 0)).unwrap();
    assert_eq!(matches.len(), 1);
    assert!(matches.iter().next().unwrap().is_empty());
}

#[test]
fn test_region_does_not_cross_empty_cells() {
    // The empty cell at (0,1) splits column 0 into two separate runs.
    let b = board("AB", "A ;  ;A ;A ");
    let matches = vertical().match_at(&b, Position::new(0, 3)).unwrap();
    let region = matches.iter().next().unwrap();
    let expected: BTreeSet<Position> =
        [Position::new(0, 2), Position::new(0, 3)].into_iter().collect();
    assert_eq!(region, &expected);
}

#[test]
fn test_diagonal_delta() {
    let b = board("AB", "ABB;BAB;BBA");
    let matcher = MaximumDeltaMatcher::new([Delta::new(1, 1)]).unwrap();
    let matches = matcher.match_at(&b, Position::new(1, 1)).unwrap();
    let region = matches.iter().next().unwrap();
    assert_eq!(region.len(), 3);
    assert!(region.contains(&Position::new(0, 0)));
    assert!(region.contains(&Position::new(2, 2)));
}

#[test]
fn test_match_all_collapses_duplicate_regions() {
    let b = board("AB", "AA;AA;BB");
    let matcher = MaximumDeltaMatcher::new([Delta::new(0, 1), Delta::new(1, 0)]).unwrap();
    // Two seeds inside the same region discover the same member set once.
    let seeds: BTreeSet<Position> =
        [Position::new(0, 0), Position::new(1, 1)].into_iter().collect();
    let matches = matcher.match_all(&b, &seeds).unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches.iter().next().unwrap().len(), 4);
}

#[test]
fn test_match_all_keeps_distinct_regions() {
    let b = board("AB", "AB;AB;AB");
    let seeds: BTreeSet<Position> =
        [Position::new(0, 0), Position::new(1, 0)].into_iter().collect();
    let matches = vertical().match_all(&b, &seeds).unwrap();
    assert_eq!(matches.len(), 2);
    for region in &matches {
        assert_eq!(region.len(), 3);
    }
}

#[test]
fn test_multi_matcher_unions_sub_matches() {
    // Seeded at the center of a plus shape: the horizontal matcher finds the
    // middle row, the vertical matcher the middle column.
    let b = board("AB", "BAB;AAA;BAB");
    let matcher = MultiMatcher::new(Box::new(horizontal()), Box::new(vertical()));
    let matches = matcher.match_at(&b, Position::new(1, 1)).unwrap();
    assert_eq!(matches.len(), 2);

    let row: BTreeSet<Position> = (0..3).map(|x| Position::new(x, 1)).collect();
    let column: BTreeSet<Position> = (0..3).map(|y| Position::new(1, y)).collect();
    assert!(matches.contains(&row));
    assert!(matches.contains(&column));
}

#[test]
fn test_multi_matcher_match_all() {
    let b = board("AB", "BAB;AAA;BAB");
    let matcher = MultiMatcher::new(Box::new(horizontal()), Box::new(vertical()));
    let seeds: BTreeSet<Position> = [Position::new(1, 1)].into_iter().collect();
    let matches = matcher.match_all(&b, &seeds).unwrap();
    assert_eq!(matches.len(), 2);
}
