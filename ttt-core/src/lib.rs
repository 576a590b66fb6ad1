//! 井字棋核心规则库
//!
//! 包含:
//! - 格子、玩家、落点等核心数据结构
//! - 棋盘状态、合法落点与走子规则
//! - 胜负、终局与效用值判定
//! - 棋盘记谱格式
//! - 棋谱格式 (JSON)

mod board;
mod constants;
mod error;
mod notation;
mod piece;
mod record;

pub use board::{Board, GameResult};
pub use constants::*;
pub use error::{CoreError, GameError, Result};
pub use notation::{Notation, INITIAL_NOTATION};
pub use piece::{Action, Cell, Player};
pub use record::{GameMetadata, GameRecord, MoveRecord};
