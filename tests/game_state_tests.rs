//! Game state tests - drops, turns, and terminal conditions

use connect_four::core::{EngineConfig, EngineError, GameState, WinLines};
use connect_four::types::{Column, Outcome, Player, BOARD_SIZE, MIN_PIECES_FOR_WIN};

fn col(i: u8) -> Column {
    Column::new(i).unwrap()
}

fn play(state: &mut GameState, columns: &[u8]) -> Vec<usize> {
    columns
        .iter()
        .map(|&c| state.drop_piece(col(c)).unwrap())
        .collect()
}

/// Fills the whole board without ever completing a line:
///
/// ```text
/// 2 2 1 1 2 2 1
/// 1 1 2 2 1 1 2
/// 2 2 1 1 2 2 1
/// 1 1 2 2 1 1 2
/// 2 2 1 1 2 2 1
/// 1 1 2 2 1 1 2
/// ```
const DRAW_SEQUENCE: [u8; 42] = [
    0, 2, 2, 0, 0, 2, 2, 0, 0, 2, 2, 0, //
    1, 3, 3, 1, 1, 3, 3, 1, 1, 3, 3, 1, //
    4, 6, 6, 4, 4, 6, 6, 4, 4, 6, 6, 4, //
    5, 5, 5, 5, 5, 5,
];

#[test]
fn test_first_drop_lands_on_bottom_row() {
    for column in Column::ALL {
        let mut state = GameState::new();
        let landing = state.drop_piece(column).unwrap();
        assert_eq!(landing, 35 + column.index() as usize);
        assert_eq!(state.board().get(landing), Some(Some(Player::One)));
    }
}

#[test]
fn test_one_drop_places_exactly_one_piece() {
    let mut state = GameState::new();
    state.drop_piece(col(0)).unwrap();

    let cells = state.board().cells();
    assert_eq!(cells.iter().filter(|c| c.is_some()).count(), 1);
    assert_eq!(
        cells.iter().filter(|&&c| c == Some(Player::One)).count(),
        1
    );
    assert_eq!(state.pieces_played(), 1);
}

#[test]
fn test_second_drop_belongs_to_player_two() {
    for column in 1..7 {
        let mut state = GameState::new();
        state.drop_piece(col(0)).unwrap();

        let landing = state.drop_piece(col(column)).unwrap();
        assert_eq!(landing, 35 + column as usize);
        assert_eq!(state.board().get(landing), Some(Some(Player::Two)));
    }
}

#[test]
fn test_turns_alternate_strictly() {
    let mut state = GameState::new();
    let landings = play(&mut state, &DRAW_SEQUENCE);

    for (n, &landing) in landings.iter().enumerate() {
        let expected = if n % 2 == 0 { Player::One } else { Player::Two };
        assert_eq!(state.board().get(landing), Some(Some(expected)), "piece {}", n + 1);
    }
}

#[test]
fn test_column_fills_bottom_to_top() {
    let mut state = GameState::new();
    let landings = play(&mut state, &[0, 0, 0, 0, 0, 0]);
    assert_eq!(landings, vec![35, 28, 21, 14, 7, 0]);

    let markers: Vec<u8> = landings
        .iter()
        .map(|&idx| state.board().get(idx).flatten().map_or(0, |p| p.marker()))
        .collect();
    assert_eq!(markers, vec![1, 2, 1, 2, 1, 2]);

    assert_eq!(
        state.drop_piece(col(0)),
        Err(EngineError::ColumnFull { column: col(0) })
    );
    assert_eq!(state.pieces_played(), 6);
    assert_eq!(state.turn(), Player::One);
}

#[test]
fn test_repeated_column_input_cannot_win_for_one_player() {
    let mut state = GameState::new();
    play(&mut state, &[0, 0, 0, 0]);
    assert_eq!(state.check_win(), Outcome::InProgress);

    play(&mut state, &[0, 0]);
    assert_eq!(state.check_win(), Outcome::InProgress);
}

#[test]
fn test_no_win_below_seven_pieces() {
    let mut state = GameState::new();
    for (n, &c) in DRAW_SEQUENCE.iter().take(MIN_PIECES_FOR_WIN - 1).enumerate() {
        state.drop_piece(col(c)).unwrap();
        assert_eq!(state.check_win(), Outcome::InProgress, "after {} pieces", n + 1);
    }
}

#[test]
fn test_horizontal_win_for_player_one() {
    let mut state = GameState::new();
    play(&mut state, &[0, 0, 1, 1, 2, 2]);
    assert_eq!(state.check_win(), Outcome::InProgress);

    assert_eq!(state.drop_piece(col(3)), Ok(38));
    assert_eq!(state.check_win(), Outcome::Win(Player::One));
    assert_eq!(
        state.winning_line().map(|line| line.cells()),
        Some([35, 36, 37, 38])
    );
}

#[test]
fn test_win_for_player_two() {
    let mut state = GameState::new();
    play(&mut state, &[6, 0, 6, 0, 6, 0, 5]);
    assert_eq!(state.check_win(), Outcome::InProgress);

    play(&mut state, &[0]);
    assert_eq!(state.check_win(), Outcome::Win(Player::Two));
}

#[test]
fn test_full_board_without_line_is_draw() {
    let mut state = GameState::new();
    play(&mut state, &DRAW_SEQUENCE[..41]);
    assert_eq!(state.check_win(), Outcome::InProgress);

    play(&mut state, &DRAW_SEQUENCE[41..]);
    assert_eq!(state.pieces_played(), BOARD_SIZE);
    assert_eq!(state.check_win(), Outcome::Draw);
    assert!(state.winning_line().is_none());
    assert!(state.legal_columns().is_empty());
}

#[test]
fn test_draw_blocks_moves_when_enforced() {
    let mut state = GameState::with_config(EngineConfig::enforcing_game_over());
    play(&mut state, &DRAW_SEQUENCE);

    assert_eq!(
        state.drop_piece(col(3)),
        Err(EngineError::GameOver {
            outcome: Outcome::Draw
        })
    );
}

#[test]
fn test_full_column_reported_after_draw_when_not_enforced() {
    let mut state = GameState::new();
    play(&mut state, &DRAW_SEQUENCE);

    assert_eq!(
        state.drop_piece(col(3)),
        Err(EngineError::ColumnFull { column: col(3) })
    );
}

#[test]
fn test_game_over_policy_is_configurable() {
    let winning = [0, 1, 0, 1, 0, 1, 0];

    let mut lenient = GameState::new();
    play(&mut lenient, &winning);
    assert!(lenient.drop_piece(col(6)).is_ok());

    let mut strict = GameState::with_config(EngineConfig::enforcing_game_over());
    play(&mut strict, &winning);
    assert_eq!(
        strict.drop_piece(col(6)),
        Err(EngineError::GameOver {
            outcome: Outcome::Win(Player::One)
        })
    );
    assert_eq!(strict.pieces_played(), winning.len());
}

#[test]
fn test_reset_restores_initial_state() {
    let mut state = GameState::new();
    play(&mut state, &[3, 3, 4]);
    assert_eq!(state.turn(), Player::Two);

    state.reset();
    assert_eq!(state.pieces_played(), 0);
    assert_eq!(state.turn(), Player::One);
    assert_eq!(state.check_win(), Outcome::InProgress);
    assert!(std::ptr::eq(state.win_lines(), WinLines::shared()));

    assert_eq!(state.drop_piece(col(3)), Ok(38));
    assert_eq!(state.board().get(38), Some(Some(Player::One)));
}

#[test]
fn test_games_share_one_table() {
    let a = GameState::new();
    let b = GameState::with_config(EngineConfig::enforcing_game_over());
    assert!(std::ptr::eq(a.win_lines(), b.win_lines()));
}

#[test]
fn test_games_on_threads_share_one_table() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let mut state = GameState::new();
                state.drop_piece(col(i)).unwrap();
                state.win_lines() as *const WinLines as usize
            })
        })
        .collect();

    let addrs: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(addrs.windows(2).all(|w| w[0] == w[1]));
    assert_eq!(addrs[0], WinLines::shared() as *const WinLines as usize);
}

#[test]
fn test_landing_index_converts_to_row_and_column() {
    use connect_four::core::Board;

    let mut state = GameState::new();
    let landings = play(&mut state, &[4, 4, 4]);
    let rows: Vec<u8> = landings.iter().map(|&idx| Board::row_of(idx)).collect();
    assert_eq!(rows, vec![5, 4, 3]);
    assert!(landings.iter().all(|&idx| Board::column_of(idx) == 4));
}
