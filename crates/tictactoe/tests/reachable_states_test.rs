//! Walks every reachable game and checks the invariants at each node.

use std::collections::HashSet;
use tictactoe::{
    Board, GameState, InvariantSet, MoveError, Outcome, Position, TicTacToeInvariants, evaluate,
};

fn walk(state: &GameState, seen: &mut HashSet<Board>, terminal: &mut usize) {
    assert!(
        TicTacToeInvariants::check_all(state).is_ok(),
        "invariants broken at {}",
        state.board()
    );
    assert_eq!(*state.outcome(), evaluate(state.board()));
    seen.insert(state.board().clone());

    for pos in Position::ALL {
        let result = state.apply_move(pos.to_index());

        if state.is_over() {
            assert_eq!(result, Err(MoveError::GameOver));
            continue;
        }

        if !state.board().is_empty(pos) {
            assert_eq!(result, Err(MoveError::SquareOccupied(pos)));
            continue;
        }

        let next = result.expect("legal move");
        assert_eq!(next.history().len(), state.history().len() + 1);
        if next.outcome() == &Outcome::InProgress {
            assert_eq!(next.turn(), state.turn().opponent());
        } else {
            assert_eq!(next.turn(), state.turn());
        }
        walk(&next, seen, terminal);
    }

    if state.is_over() {
        *terminal += 1;
    }
}

#[test]
fn test_all_reachable_states() {
    let mut seen = HashSet::new();
    let mut terminal = 0;
    walk(&GameState::new(), &mut seen, &mut terminal);

    // Well-known counts: 5478 distinct positions, 255168 complete games.
    assert_eq!(seen.len(), 5478);
    assert_eq!(terminal, 255_168);
}
