//! 错误类型定义

use thiserror::Error;

use crate::piece::Player;

/// 规则错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// 落子坐标超出棋盘
    #[error("Invalid move: ({row}, {col}) is outside the board")]
    OutOfBounds { row: u8, col: u8 },

    /// 目标格子已被占用
    #[error("Invalid move: cell ({row}, {col}) is already occupied")]
    OccupiedCell { row: u8, col: u8 },

    /// 无效的棋盘记谱
    #[error("Invalid notation: {reason}")]
    InvalidNotation { reason: String },

    /// 棋谱中的走子方与局面不符
    #[error("Illegal replay at ply {ply}: expected {expected} to move, record says {recorded}")]
    IllegalReplay {
        ply: usize,
        expected: Player,
        recorded: Player,
    },
}

/// 库级错误类型
#[derive(Error, Debug)]
pub enum CoreError {
    /// JSON 序列化错误
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// 规则错误
    #[error("Game error: {0}")]
    Game(#[from] GameError),
}

/// 库操作结果类型
pub type Result<T> = std::result::Result<T, CoreError>;
