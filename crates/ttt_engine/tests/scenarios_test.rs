//! Full-game scenarios played through the public engine API.

use ttt_engine::{
    Game, GameStatus, MAX_TURNS, Move, MoveError, OccupiedPolicy, Player, Position, is_terminal,
    parse_position, render,
};

fn play_all(game: &mut Game, moves: &[usize]) -> GameStatus {
    let mut status = game.status();
    for &index in moves {
        let position = Position::from_index(index).expect("index in range");
        status = game.play(position).expect("legal move");
    }
    status
}

#[test]
fn test_top_row_win() {
    let mut game = Game::new();
    let status = play_all(&mut game, &[0, 3, 1, 4, 2]);
    assert_eq!(status, GameStatus::Won(Player::X));
    assert_eq!(game.turn_count(), 5);
    assert!(is_terminal(game.board()));
}

#[test]
fn test_diagonal_win() {
    let mut game = Game::new();
    let status = play_all(&mut game, &[0, 1, 4, 2, 8]);
    assert_eq!(status, GameStatus::Won(Player::X));
    assert_eq!(
        game.record().winning_line(),
        &Some([Position::TopLeft, Position::Center, Position::BottomRight])
    );
}

#[test]
fn test_win_on_last_cell_beats_draw() {
    // X ends on 0, 2, 4, 5, 8: the 0-4-8 diagonal completes on move nine.
    let mut game = Game::new();
    let status = play_all(&mut game, &[0, 1, 2, 3, 4, 6, 5, 7, 8]);
    assert_eq!(status, GameStatus::Won(Player::X));
    assert_eq!(game.turn_count(), MAX_TURNS);
}

#[test]
fn test_full_board_draw() {
    // X O X / X O O / O X X
    let mut game = Game::new();
    let status = play_all(&mut game, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);
    assert_eq!(status, GameStatus::Draw);
    assert_eq!(game.turn_count(), MAX_TURNS);
    assert!(!is_terminal(game.board()));
    assert_eq!(game.play(Position::Center), Err(MoveError::GameOver));
}

#[test]
fn test_o_can_win() {
    let mut game = Game::new();
    let status = play_all(&mut game, &[0, 2, 1, 4, 8, 6]);
    assert_eq!(status, GameStatus::Won(Player::O));
}

#[test]
fn test_overwrite_policy_counts_turns() {
    // Every move lands on the same cell, so no line ever forms.
    let mut game = Game::with_options(Player::X, OccupiedPolicy::Overwrite);
    let status = play_all(&mut game, &[4; 9]);
    assert_eq!(status, GameStatus::Draw);
    assert_eq!(game.board().occupied(), 1);
}

#[test]
fn test_parsed_input_drives_game() {
    let mut game = Game::new();
    let inputs = ["0\n", "abc\n", "3\n", "9\n", "0\n", "1\n", "4\n", "2\n"];
    let mut rejected = Vec::new();

    for input in inputs {
        match parse_position(input).and_then(|p| game.play(p)) {
            Ok(_) => {}
            Err(e) => rejected.push(e),
        }
    }

    assert_eq!(
        rejected,
        vec![
            MoveError::InvalidFormat("abc".to_string()),
            MoveError::OutOfRange(9),
            MoveError::CellOccupied(Position::TopLeft),
        ]
    );
    assert_eq!(game.status(), GameStatus::Won(Player::X));
    assert_eq!(game.turn_count(), 5);
}

#[test]
fn test_render_after_moves() {
    let mut game = Game::new();
    play_all(&mut game, &[0, 4, 8]);
    let text = render(game.board());
    assert_eq!(
        text,
        "Board state\nX _ _  0 1 2\n_ O _  3 4 5\n_ _ X  6 7 8\n"
    );
    assert_eq!(text, render(game.board()));
}

#[test]
fn test_record_serializes() {
    let mut game = Game::new();
    play_all(&mut game, &[0, 3, 1, 4, 2]);
    let record = game.record();

    assert_eq!(record.turns(), 5);
    assert_eq!(record.first_player(), &Player::X);
    assert_eq!(
        record.moves()[1],
        Move::new(Player::O, Position::MiddleLeft)
    );

    let json = serde_json::to_value(&record).expect("serializable");
    assert_eq!(json["status"], serde_json::json!({ "Won": "X" }));
    assert_eq!(json["moves"][0]["position"], "TopLeft");
}
