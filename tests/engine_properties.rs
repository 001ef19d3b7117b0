use minimax_connect_four::ai::{MinimaxAgent, RandomAgent, SearchAgent};
use minimax_connect_four::error::MoveError;
use minimax_connect_four::game::{Cell, GameState, COLS, ROWS};

/// Positions reached by seeded random self-play, one per ply.
fn random_trajectory(seed: u64) -> Vec<GameState> {
    let mut agent = RandomAgent::with_seed(seed);
    let mut state = GameState::make_blank_board();
    let mut states = vec![state];
    while !state.is_terminal() {
        let col = agent.get_move(&state, 0).unwrap();
        state = state.apply_successor(col).unwrap();
        states.push(state);
    }
    states
}

#[test]
fn successors_leave_parent_unchanged() {
    for seed in 0..5 {
        for state in random_trajectory(seed) {
            if state.is_terminal() {
                continue;
            }
            let snapshot = state;
            for col in state.legal_actions() {
                let next = state.apply_successor(col).unwrap();
                assert_ne!(next, state);
                assert_eq!(state, snapshot);
            }
        }
    }
}

#[test]
fn legal_actions_are_the_open_columns_in_order() {
    for seed in 0..5 {
        for state in random_trajectory(seed) {
            let legal = state.legal_actions();
            assert!(legal.windows(2).all(|w| w[0] < w[1]));

            let open: Vec<usize> = (0..COLS)
                .filter(|&col| state.board().get(0, col) == Cell::Empty)
                .collect();
            assert_eq!(legal, open);
        }
    }
}

#[test]
fn outcomes_are_mutually_exclusive() {
    for seed in 0..10 {
        for state in random_trajectory(seed) {
            let flags = [state.is_win(), state.is_loss(), state.is_draw()];
            assert!(flags.iter().filter(|&&f| f).count() <= 1);
            assert_eq!(state.is_terminal(), flags.iter().any(|&f| f));
        }
    }
}

#[test]
fn gravity_holds_along_random_games() {
    for state in random_trajectory(11) {
        let board = state.board();
        for col in 0..COLS {
            for row in 1..ROWS {
                if board.get(row - 1, col) != Cell::Empty {
                    assert_ne!(
                        board.get(row, col),
                        Cell::Empty,
                        "floating piece in column {col}"
                    );
                }
            }
        }
    }
}

#[test]
fn overfilled_column_is_rejected() {
    let mut state = GameState::make_blank_board();
    for _ in 0..ROWS {
        state = state.apply_successor(5).unwrap();
    }
    assert_eq!(
        state.apply_successor(5),
        Err(MoveError::ColumnFull { column: 5 })
    );
    assert!(matches!(
        state.apply_successor(COLS + 3),
        Err(MoveError::InvalidColumn { .. })
    ));
}

#[test]
fn depth_one_never_misses_an_immediate_win() {
    let mut agent = MinimaxAgent::default();
    for seed in 0..10 {
        for state in random_trajectory(seed) {
            if state.is_terminal() {
                continue;
            }
            let winning: Vec<usize> = state
                .legal_actions()
                .into_iter()
                .filter(|&col| {
                    let next = state.apply_successor(col).unwrap();
                    next.winner() == Some(state.current_player())
                })
                .collect();
            if let Some(&first) = winning.first() {
                assert_eq!(agent.get_move(&state, 1).unwrap(), first, "\n{state}");
            }
        }
    }
}
