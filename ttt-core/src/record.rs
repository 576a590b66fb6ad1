//! 棋谱记录格式
//!
//! 使用 JSON 存储一局完整的走子序列

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::board::{Board, GameResult};
use crate::constants::RECORD_VERSION;
use crate::error::{GameError, Result};
use crate::notation::Notation;
use crate::piece::{Action, Player};

/// 对局元数据
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameMetadata {
    /// X 方名称
    pub x_player: String,
    /// O 方名称
    pub o_player: String,
    /// 对局日期（UTC，YYYY-MM-DD）
    pub date: String,
    /// 对局结果
    pub result: Option<GameResult>,
}

/// 走子记录
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub row: u8,
    pub col: u8,
    /// 走子方
    pub player: Player,
}

impl MoveRecord {
    /// 创建新的走子记录
    pub fn new(action: Action, player: Player) -> Self {
        Self {
            row: action.row,
            col: action.col,
            player,
        }
    }

    /// 获取落点
    pub fn action(&self) -> Action {
        Action::new(self.row, self.col)
    }
}

/// 完整的棋谱记录
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameRecord {
    /// 版本号
    pub version: String,
    /// 元数据
    pub metadata: GameMetadata,
    /// 初始局面记谱
    pub initial: String,
    /// 走子列表
    pub moves: Vec<MoveRecord>,
}

impl GameRecord {
    /// 从初始局面创建棋谱
    pub fn new(x_player: String, o_player: String) -> Self {
        Self::from_board(x_player, o_player, &Board::initial())
    }

    /// 从指定局面创建棋谱
    pub fn from_board(x_player: String, o_player: String, board: &Board) -> Self {
        Self {
            version: RECORD_VERSION.to_string(),
            metadata: GameMetadata {
                x_player,
                o_player,
                date: Utc::now().format("%Y-%m-%d").to_string(),
                result: None,
            },
            initial: Notation::to_string(board),
            moves: Vec::new(),
        }
    }

    /// 添加走子
    pub fn add_move(&mut self, mv: MoveRecord) {
        self.moves.push(mv);
    }

    /// 设置对局结果
    pub fn set_result(&mut self, result: GameResult) {
        self.metadata.result = Some(result);
    }

    /// 从初始局面重放全部走子，返回最终局面
    pub fn replay(&self) -> std::result::Result<Board, GameError> {
        let mut board = Notation::parse(&self.initial)?;

        for (ply, mv) in self.moves.iter().enumerate() {
            let expected = board.current_player();
            if mv.player != expected {
                return Err(GameError::IllegalReplay {
                    ply,
                    expected,
                    recorded: mv.player,
                });
            }
            board = board.apply(mv.action())?;
        }

        Ok(board)
    }

    /// 转换为 JSON 字符串
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// 从 JSON 字符串解析
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
