use ludus::{
    AgentConfig, Cell, ConnectFour, Error, GameState, MctsConfig, MoveSelector, TicTacToe,
};

fn ttt(moves: &[usize]) -> TicTacToe {
    moves.iter().fold(TicTacToe::new(), |state, &index| {
        state.apply(Cell(index)).unwrap()
    })
}

#[test]
fn dispatches_to_minimax() {
    let state = TicTacToe::new();
    let config = AgentConfig::Minimax { max_depth: 2 };

    let (mv, evals) = MoveSelector::choose_move(&state, &config).unwrap();

    assert!(state.legal_moves().contains(&mv));
    assert_eq!(evals.len(), 9);
    // Minimax reports scores only, no visit counts.
    assert!(evals.iter().all(|e| e.visits.is_none()));
}

#[test]
fn dispatches_to_mcts() {
    let state = TicTacToe::new();
    let config = AgentConfig::Mcts(MctsConfig::default().with_iterations(200).with_seed(17));

    let (mv, evals) = MoveSelector::choose_move(&state, &config).unwrap();

    assert!(state.legal_moves().contains(&mv));
    assert_eq!(evals.len(), 9);
    assert!(evals.iter().all(|e| e.visits.is_some()));
}

#[test]
fn both_agents_take_the_same_forced_win() {
    // X wins at cell 2; any other move loses to O at cell 5.
    let state = ttt(&[0, 3, 1, 4]);

    let minimax = AgentConfig::Minimax { max_depth: 4 };
    let mcts = AgentConfig::Mcts(MctsConfig::default().with_iterations(2_000).with_seed(23));

    let (minimax_move, _) = MoveSelector::choose_move(&state, &minimax).unwrap();
    let (mcts_move, _) = MoveSelector::choose_move(&state, &mcts).unwrap();

    assert_eq!(minimax_move, Cell(2));
    assert_eq!(mcts_move, Cell(2));
}

#[test]
fn works_across_games() {
    let state = ConnectFour::new();
    let config = AgentConfig::Minimax { max_depth: 3 };

    let (mv, evals) = MoveSelector::choose_move(&state, &config).unwrap();
    assert!(state.legal_moves().contains(&mv));
    assert_eq!(evals.len(), 7);
}

#[test]
fn invalid_budgets_surface_unchanged() {
    let state = TicTacToe::new();

    let bad_minimax = AgentConfig::Minimax { max_depth: 0 };
    assert!(matches!(
        MoveSelector::choose_move(&state, &bad_minimax),
        Err(Error::InvalidConfig(_))
    ));

    let bad_mcts = AgentConfig::Mcts(MctsConfig::default().with_iterations(0));
    assert!(matches!(
        MoveSelector::choose_move(&state, &bad_mcts),
        Err(Error::InvalidConfig(_))
    ));
}

#[test]
fn terminal_states_surface_no_legal_moves() {
    let won = ttt(&[0, 3, 1, 4, 2]);

    for config in [
        AgentConfig::Minimax { max_depth: 3 },
        AgentConfig::Mcts(MctsConfig::default().with_iterations(10)),
    ] {
        assert!(matches!(
            MoveSelector::choose_move(&won, &config),
            Err(Error::NoLegalMoves)
        ));
    }
}
