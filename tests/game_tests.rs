//! Game tests - the chain-reaction loop and score accumulation.

use match_three::core::{
    Alphabet, Board, DeterministicStrategy, Error, Game, MaximumDeltaMatcher, Move,
};
use match_three::types::{Delta, Position, Token};

fn both_axes() -> Box<MaximumDeltaMatcher> {
    Box::new(MaximumDeltaMatcher::new([Delta::new(0, 1), Delta::new(1, 0)]).unwrap())
}

fn vertical() -> Box<MaximumDeltaMatcher> {
    Box::new(MaximumDeltaMatcher::new([Delta::new(0, 1)]).unwrap())
}

#[test]
fn test_documented_chain_scenario_scores_45() {
    // 3x3 all-A board; the flip changes nothing visibly but seeds the
    // resolving loop. Round 1 removes the full board (15 points), the
    // all-A refill removes it again doubled by the chain index (30), and
    // the second refill leaves a checkerboard with no matches.
    let mut board = Board::from_token_string(Alphabet::parse("AB").unwrap(), "AAA;AAA;AAA").unwrap();
    let mut strategy = DeterministicStrategy::default();
    strategy.set_column_tokens(0, Token::sequence("AAABAB"));
    strategy.set_column_tokens(1, Token::sequence("AAAABA"));
    strategy.set_column_tokens(2, Token::sequence("AAABAB"));
    board.set_filling_strategy(Box::new(strategy));

    let mut game = Game::new(board, both_axes());
    game.accept_move(Move::flip_right(Position::new(0, 0)))
        .unwrap();

    assert_eq!(game.score(), 45);
    assert_eq!(game.board().to_token_string(), "BAB;ABA;BAB");
}

#[test]
fn test_accept_move_rejects_inapplicable_move() {
    let board = Board::from_token_string(Alphabet::parse("AB").unwrap(), "AB;BA").unwrap();
    let mut game = Game::new(board, both_axes());
    let err = game.accept_move(Move::rotate_column_down(3)).unwrap_err();
    assert_eq!(err, Error::NotApplicable);
    assert_eq!(game.score(), 0);
    assert_eq!(game.board().to_token_string(), "AB;BA");
}

#[test]
fn test_initialize_compacts_fills_and_resolves() {
    // Two floating tokens drop; the fill completes the board without
    // producing a match, so the score stays zero.
    let mut board = Board::from_token_string(Alphabet::parse("AB").unwrap(), "A B;   ").unwrap();
    let mut strategy = DeterministicStrategy::default();
    strategy.set_column_tokens(0, Token::sequence("B"));
    strategy.set_column_tokens(1, Token::sequence("AB"));
    strategy.set_column_tokens(2, Token::sequence("A"));
    board.set_filling_strategy(Box::new(strategy));

    let mut game = Game::new(board, both_axes());
    game.initialize_and_start().unwrap();

    assert_eq!(game.board().to_token_string(), "BAA;ABB");
    assert_eq!(game.score(), 0);
}

#[test]
fn test_initialize_without_strategy_fails() {
    let board = Board::new(Alphabet::parse("AB").unwrap(), 2, 2).unwrap();
    let mut game = Game::new(board, both_axes());
    assert_eq!(game.initialize_and_start(), Err(Error::NoFillingStrategy));
}

#[test]
fn test_match_of_four_scores_five_points() {
    // Column 0 is a vertical run of four: 3 + 1*2 = 5 points, one match,
    // chain index 1. The refill breaks the column up.
    let mut board =
        Board::from_token_string(Alphabet::parse("AB").unwrap(), "AB;AA;AB;AA").unwrap();
    let mut strategy = DeterministicStrategy::default();
    strategy.set_column_tokens(0, Token::sequence("BABA"));
    board.set_filling_strategy(Box::new(strategy));

    let mut game = Game::new(board, vertical());
    game.initialize_and_start().unwrap();

    assert_eq!(game.score(), 5);
    assert_eq!(game.board().to_token_string(), "BB;AA;BB;AA");
}

#[test]
fn test_simultaneous_matches_multiply_round_points() {
    // Columns 0 and 2 are both runs of three A: round points (3 + 3),
    // multiplied by 2 matches and chain index 1 = 12.
    let mut board = Board::from_token_string(Alphabet::parse("AB").unwrap(), "ABA;AAA;ABA").unwrap();
    let mut strategy = DeterministicStrategy::default();
    strategy.set_column_tokens(0, Token::sequence("BAB"));
    strategy.set_column_tokens(2, Token::sequence("ABA"));
    board.set_filling_strategy(Box::new(strategy));

    let mut game = Game::new(board, vertical());
    game.initialize_and_start().unwrap();

    assert_eq!(game.score(), 12);
}

#[test]
fn test_set_matcher_changes_subsequent_resolution() {
    // flip-down at (2,0) completes "AAA" in row 0. The vertical matcher
    // cannot see it; after swapping in a horizontal matcher the same move
    // scores, including one chain round from the all-B refill row.
    let text = "AAB;BAA;ABB";
    let mut board = Board::from_token_string(Alphabet::parse("AB").unwrap(), text).unwrap();
    let mut strategy = DeterministicStrategy::default();
    strategy.set_column_tokens(0, Token::sequence("BA"));
    strategy.set_column_tokens(1, Token::sequence("BB"));
    strategy.set_column_tokens(2, Token::sequence("BA"));
    board.set_filling_strategy(Box::new(strategy));

    let flip = Move::flip_down(Position::new(2, 0));
    let mut game = Game::new(board, vertical());
    game.accept_move(flip).unwrap();
    assert_eq!(game.score(), 0);
    assert_eq!(game.board().to_token_string(), "AAA;BAB;ABB");

    // Undo the move, then replay it with a horizontal matcher.
    game.accept_move(flip.reverse()).unwrap();
    assert_eq!(game.board().to_token_string(), text);
    game.set_matcher(Box::new(
        MaximumDeltaMatcher::new([Delta::new(1, 0)]).unwrap(),
    ));

    game.accept_move(flip).unwrap();
    // Chain 1: row 0 "AAA" scores 3. The refill row is "BBB", which
    // re-matches as chain 2 for 2 * 3 more; the second refill "ABA" stops
    // the chain.
    assert_eq!(game.score(), 9);
    assert_eq!(game.board().to_token_string(), "ABA;BAB;ABB");
}

#[test]
fn test_score_is_cumulative_across_moves() {
    let mut board =
        Board::from_token_string(Alphabet::parse("AB").unwrap(), "AB;AA;AB;AA").unwrap();
    let mut strategy = DeterministicStrategy::default();
    strategy.set_column_tokens(0, Token::sequence("BABABABA"));
    strategy.set_column_tokens(1, Token::sequence("BABABABA"));
    board.set_filling_strategy(Box::new(strategy));

    let mut game = Game::new(board, vertical());
    game.initialize_and_start().unwrap();
    let after_init = game.score();
    assert_eq!(after_init, 5);

    // A flip that creates no match leaves the score untouched.
    game.accept_move(Move::flip_right(Position::new(0, 0))).unwrap();
    assert_eq!(game.score(), after_init);
}
