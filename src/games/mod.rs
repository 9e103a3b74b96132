//! Built-in games implementing the [`GameState`](crate::GameState) trait.

pub mod connect_four;
pub mod tictactoe;

pub use connect_four::{Column, ConnectFour};
pub use tictactoe::{Cell, TicTacToe};
