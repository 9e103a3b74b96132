use ludus::{
    AlphaBetaSearcher, Cell, Column, ConnectFour, Error, GameState, Outcome, Player, TicTacToe,
    WIN_SCORE,
};

fn ttt(moves: &[usize]) -> TicTacToe {
    moves.iter().fold(TicTacToe::new(), |state, &index| {
        state.apply(Cell(index)).unwrap()
    })
}

/// Reference implementation: plain minimax without pruning, with the same
/// scoring convention as the searcher. Used to prove that pruning changes
/// search time, never the result.
fn plain_minimax<S: GameState>(state: &S, depth: usize, maximizing: bool, max_player: Player) -> f64 {
    match state.outcome() {
        Outcome::Win(winner) => {
            let magnitude = WIN_SCORE + depth as f64;
            return if winner == max_player { magnitude } else { -magnitude };
        }
        Outcome::Draw => return 0.0,
        Outcome::Ongoing => {}
    }
    if depth == 0 {
        return state.heuristic(max_player);
    }

    let scores = state.legal_moves().into_iter().map(|mv| {
        let child = state.apply(mv).unwrap();
        plain_minimax(&child, depth - 1, !maximizing, max_player)
    });
    if maximizing {
        scores.fold(f64::NEG_INFINITY, f64::max)
    } else {
        scores.fold(f64::INFINITY, f64::min)
    }
}

#[test]
fn zero_depth_is_an_invalid_configuration() {
    assert!(matches!(
        AlphaBetaSearcher::new(0),
        Err(Error::InvalidConfig(_))
    ));
}

#[test]
fn terminal_state_has_no_move_to_choose() {
    let won = ttt(&[0, 3, 1, 4, 2]);
    let searcher = AlphaBetaSearcher::new(3).unwrap();
    assert!(matches!(
        searcher.choose_move(&won),
        Err(Error::NoLegalMoves)
    ));
}

#[test]
fn takes_an_immediate_win_at_any_depth() {
    // X has 0 and 1; cell 2 wins on the spot.
    let state = ttt(&[0, 3, 1, 4]);

    for depth in 1..=5 {
        let searcher = AlphaBetaSearcher::new(depth).unwrap();
        let (mv, evals) = searcher.choose_move(&state).unwrap();
        assert_eq!(mv, Cell(2), "depth {} must take the win", depth);

        let winning = evals.iter().find(|e| e.mv == Cell(2)).unwrap();
        assert!(winning.score >= WIN_SCORE);
        assert!(winning.visits.is_none());
    }
}

#[test]
fn blocks_the_opponent_winning_move() {
    // O to move; X threatens to complete the top row at cell 2.
    let state = ttt(&[0, 3, 1]);
    assert_eq!(state.to_move(), Player::O);

    let searcher = AlphaBetaSearcher::new(3).unwrap();
    let (mv, _) = searcher.choose_move(&state).unwrap();
    assert_eq!(mv, Cell(2));
}

#[test]
fn connect_four_takes_an_immediate_win() {
    // X has columns 0-2 on the bottom row; column 3 completes the line.
    let state = [0usize, 0, 1, 1, 2, 2]
        .iter()
        .fold(ConnectFour::new(), |s, &c| s.apply(Column(c)).unwrap());

    let searcher = AlphaBetaSearcher::new(1).unwrap();
    let (mv, _) = searcher.choose_move(&state).unwrap();
    assert_eq!(mv, Column(3));
}

#[test]
fn empty_board_is_a_draw_under_perfect_play() {
    // Exhaustive search from the empty board: every opening scores 0 and
    // the tie-break picks the first-encountered move, cell 0.
    let searcher = AlphaBetaSearcher::new(9).unwrap();
    let (mv, evals) = searcher.choose_move(&TicTacToe::new()).unwrap();

    assert_eq!(mv, Cell(0));
    assert_eq!(evals.len(), 9);
    for eval in &evals {
        assert_eq!(eval.score, 0.0, "opening {:?} is a draw", eval.mv);
    }
}

#[test]
fn pruned_search_matches_plain_minimax() {
    // Midgame position with six empty cells; exhaustive depth.
    let state = ttt(&[0, 4, 8]);
    let max_player = state.to_move();
    let depth = 9;

    let searcher = AlphaBetaSearcher::new(depth).unwrap();
    let (mv, evals) = searcher.choose_move(&state).unwrap();

    let mut best_score = f64::NEG_INFINITY;
    let mut best_move = None;
    for candidate in state.legal_moves() {
        let child = state.apply(candidate).unwrap();
        let score = plain_minimax(&child, depth - 1, false, max_player);

        let pruned = evals.iter().find(|e| e.mv == candidate).unwrap();
        assert_eq!(pruned.score, score, "score mismatch for {:?}", candidate);

        if score > best_score {
            best_score = score;
            best_move = Some(candidate);
        }
    }
    assert_eq!(Some(mv), best_move);
}

#[test]
fn repeated_searches_are_identical() {
    let state = ttt(&[4, 0]);
    let searcher = AlphaBetaSearcher::new(6).unwrap();

    let (first_move, first_evals) = searcher.choose_move(&state).unwrap();
    let (second_move, second_evals) = searcher.choose_move(&state).unwrap();

    assert_eq!(first_move, second_move);
    assert_eq!(first_evals, second_evals);
}

#[test]
fn heuristic_cutoff_prefers_stronger_positions() {
    // Depth 1 on the empty board: scores are pure heuristic values, and the
    // center opens the most lines.
    let searcher = AlphaBetaSearcher::new(1).unwrap();
    let (_, evals) = searcher.choose_move(&TicTacToe::new()).unwrap();

    let center = evals.iter().find(|e| e.mv == Cell(4)).unwrap();
    for eval in &evals {
        assert!(eval.score <= center.score);
        assert!(eval.score.abs() < WIN_SCORE);
    }
}
