//! Interactive tic-tac-toe against an MCTS agent.
//!
//! The human plays X, the agent plays O. Run with:
//!
//! ```bash
//! cargo run --example tic_tac_toe
//! ```

use std::io::{self, Write};

use ludus::{
    AgentConfig, GameState, MctsConfig, MoveSelector, Outcome, Player, TicTacToe,
};

fn main() {
    env_logger::init();

    println!("ludus Tic-Tac-Toe");
    println!("=================");
    println!();

    let mut game = TicTacToe::new();
    let agent = AgentConfig::Mcts(MctsConfig::default().with_iterations(5_000));

    while !game.is_terminal() {
        println!("{}", game);

        if game.to_move() == Player::X {
            print!("Your move (row col, e.g. '1 2'): ");
            io::stdout().flush().unwrap();

            let mut input = String::new();
            io::stdin().read_line(&mut input).unwrap();

            let coords: Vec<usize> = input
                .trim()
                .split_whitespace()
                .filter_map(|s| s.parse::<usize>().ok())
                .collect();

            if coords.len() != 2 || coords[0] > 2 || coords[1] > 2 {
                println!("Invalid input! Enter row and column (0-2).");
                continue;
            }

            let mv = ludus::Cell(coords[0] * 3 + coords[1]);
            match game.apply(mv) {
                Ok(next) => game = next,
                Err(e) => {
                    println!("{} Try again.", e);
                    continue;
                }
            }
        } else {
            println!("Agent is thinking...");

            match MoveSelector::choose_move(&game, &agent) {
                Ok((mv, evals)) => {
                    println!("Agent plays cell {} (row {}, col {})", mv.0, mv.0 / 3, mv.0 % 3);
                    for eval in &evals {
                        println!(
                            "  cell {}: mean value {:+.3}, visits {}",
                            eval.mv.0,
                            eval.score,
                            eval.visits.unwrap_or(0)
                        );
                    }
                    game = game.apply(mv).unwrap();
                }
                Err(e) => {
                    println!("Error: {}", e);
                    break;
                }
            }
        }
    }

    println!("{}", game);
    match game.outcome() {
        Outcome::Win(p) => println!("Player {:?} wins!", p),
        _ => println!("The game is a draw!"),
    }
}
