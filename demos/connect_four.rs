//! Connect four head-to-head: alpha-beta minimax (X) against MCTS (O).
//!
//! Prints each agent's evaluation table per move so the two search styles
//! can be compared side by side. Run with:
//!
//! ```bash
//! cargo run --release --example connect_four
//! ```

use ludus::{
    AgentConfig, ConnectFour, GameState, MctsConfig, MoveSelector, Outcome, Player,
};

fn main() {
    env_logger::init();

    println!("ludus Connect Four: minimax (X) vs MCTS (O)");
    println!("===========================================");
    println!();

    let minimax = AgentConfig::Minimax { max_depth: 6 };
    let mcts = AgentConfig::Mcts(
        MctsConfig::default()
            .with_iterations(20_000)
            .with_seed(2024),
    );

    let mut game = ConnectFour::new();

    while !game.is_terminal() {
        let (label, config) = match game.to_move() {
            Player::X => ("minimax", &minimax),
            Player::O => ("mcts", &mcts),
        };

        let (mv, evals) = match MoveSelector::choose_move(&game, config) {
            Ok(decision) => decision,
            Err(e) => {
                println!("Error: {}", e);
                return;
            }
        };

        println!("{} ({:?}) drops in column {}", label, game.to_move(), mv.0);
        for eval in &evals {
            match eval.visits {
                Some(visits) => println!(
                    "  column {}: mean value {:+.3}, visits {}",
                    eval.mv.0, eval.score, visits
                ),
                None => println!("  column {}: score {:+.1}", eval.mv.0, eval.score),
            }
        }

        game = game.apply(mv).unwrap();
        println!("{}", game);
    }

    match game.outcome() {
        Outcome::Win(p) => println!("Player {:?} wins!", p),
        _ => println!("The game is a draw!"),
    }
}
