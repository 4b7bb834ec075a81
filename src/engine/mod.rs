//! Board model, target queue and hunt/target strategy.
//!
//! Nothing in here needs `std`: no heap, no I/O. The referee fleet lives here
//! too so the simulator and tests can play full games without a transport.

pub mod bitboard;
pub mod board;
pub mod common;
pub mod config;
pub mod coord;
pub mod fleet;
pub mod queue;
pub mod referee;
pub mod ship;
pub mod strategy;

pub use bitboard::{BitBoard, BitBoardError};
pub use board::ShotBoard;
pub use common::{BoardError, CellStatus, GameResult, MoveResult, ShotOutcome};
pub use config::*;
pub use coord::Coord;
pub use fleet::{Fleet, Impact};
pub use queue::TargetQueue;
pub use referee::Referee;
pub use ship::{Orientation, Ship, ShipType};
pub use strategy::{Decision, HuntTarget, Mode};
