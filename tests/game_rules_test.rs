//! Behavior tests for move acceptance and outcome evaluation.

use loki_games::{rules, Board, Game, MoveError, Outcome, Player, Position, Square};

/// Builds a board from row-major mark values (+1 nought, -1 cross,
/// 0 empty).
fn board_from_marks(marks: [i8; 9]) -> Board {
    let mut board = Board::new();
    for (i, mark) in marks.iter().enumerate() {
        let square = match mark {
            1 => Square::Occupied(Player::Nought),
            -1 => Square::Occupied(Player::Cross),
            _ => Square::Empty,
        };
        board.set(Position::from_index(i).unwrap(), square);
    }
    board
}

#[test]
fn test_row_of_noughts_wins() {
    let board = board_from_marks([1, 1, 1, 0, 0, 0, 0, 0, 0]);
    assert_eq!(rules::evaluate(&board), Outcome::Won(Player::Nought));
}

#[test]
fn test_column_of_crosses_wins() {
    let board = board_from_marks([-1, 0, 0, -1, 0, 0, -1, 0, 0]);
    assert_eq!(rules::evaluate(&board), Outcome::Won(Player::Cross));
}

#[test]
fn test_full_board_without_line_is_a_draw() {
    let board = board_from_marks([1, -1, 1, -1, 1, -1, -1, 1, -1]);
    assert_eq!(rules::evaluate(&board), Outcome::Draw);
}

#[test]
fn test_occupied_cell_leaves_game_unchanged() {
    let mut game = Game::new();
    game.play(Position::TopLeft).unwrap();
    let before = game.clone();

    for _ in 0..3 {
        assert_eq!(
            game.play(Position::TopLeft),
            Err(MoveError::Occupied(Position::TopLeft))
        );
    }
    assert_eq!(game, before);
    assert_eq!(game.to_move(), Player::Cross);
}

#[test]
fn test_players_alternate_strictly_from_nought() {
    let mut game = Game::new();
    // Cell order chosen so the board fills with no winner.
    let moves = [
        Position::Center,
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    let mut expected = Player::Nought;
    for pos in moves {
        assert_eq!(game.to_move(), expected);
        game.play(pos).unwrap();
        expected = expected.opponent();
    }
    assert_eq!(game.outcome(), Outcome::Draw);
    assert_eq!(game.history().len(), 9);
}

#[test]
fn test_outcome_is_pure_function_of_board() {
    let board = board_from_marks([1, 1, 1, 0, 0, 0, 0, 0, 0]);
    let first = rules::evaluate(&board);
    let second = rules::evaluate(&board);
    assert_eq!(first, second);
    assert_eq!(board, board_from_marks([1, 1, 1, 0, 0, 0, 0, 0, 0]));
}

#[test]
fn test_line_sums_cover_all_eight_lines() {
    let board = board_from_marks([1, 1, 1, 0, 0, 0, 0, 0, 0]);
    let sums = rules::line_sums(&board);
    assert_eq!(sums[0], 3);
    assert_eq!(sums.iter().filter(|&&s| s == 3).count(), 1);
    assert_eq!(sums.len(), 8);
}

#[test]
fn test_reset_after_terminal_board() {
    let mut game = Game::new();
    // O takes the left column; X answers in the top row.
    for pos in [
        Position::TopLeft,
        Position::TopCenter,
        Position::MiddleLeft,
        Position::TopRight,
        Position::BottomLeft,
    ] {
        game.play(pos).unwrap();
    }
    assert_eq!(game.outcome(), Outcome::Won(Player::Nought));

    game.reset();
    assert_eq!(game, Game::new());
    assert_eq!(game.to_move(), Player::Nought);
    assert!(Position::ALL.iter().all(|&p| game.board().is_empty(p)));
}

#[test]
fn test_open_cells_shrink_as_marks_land() {
    let mut game = Game::new();
    assert_eq!(Position::open_cells(game.board()).len(), 9);
    game.play(Position::Center).unwrap();
    game.play(Position::TopLeft).unwrap();
    let open = Position::open_cells(game.board());
    assert_eq!(open.len(), 7);
    assert!(!open.contains(&Position::Center));
    assert!(!open.contains(&Position::TopLeft));
}

#[test]
fn test_game_serializes_round_trip() {
    let mut game = Game::new();
    game.play(Position::Center).unwrap();
    game.play(Position::TopLeft).unwrap();

    let json = serde_json::to_string(&game).unwrap();
    let restored: Game = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, game);
    assert_eq!(restored.outcome(), Outcome::InProgress);
}
