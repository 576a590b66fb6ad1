//! 棋盘记谱格式
//!
//! 格式：`<第0行>/<第1行>/<第2行>`，每行三个字符
//! - `X` / `O`：棋子（不区分大小写）
//! - `.`：空格（解析时也接受 `_` 和 `-`）
//!
//! 示例：`XX./OO./...`

use crate::board::Board;
use crate::constants::BOARD_SIZE;
use crate::error::GameError;
use crate::piece::Cell;

/// 初始局面记谱
pub const INITIAL_NOTATION: &str = ".../.../...";

/// 记谱格式处理
pub struct Notation;

impl Notation {
    /// 解析记谱为棋盘（不检查局面是否可达）
    pub fn parse(notation: &str) -> Result<Board, GameError> {
        let notation = notation.trim();
        if notation.is_empty() {
            return Err(GameError::InvalidNotation {
                reason: "Empty notation string".to_string(),
            });
        }

        let rows: Vec<&str> = notation.split('/').collect();
        if rows.len() != BOARD_SIZE {
            return Err(GameError::InvalidNotation {
                reason: format!("Expected {} rows, got {}", BOARD_SIZE, rows.len()),
            });
        }

        let mut cells = [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE];
        for (row_idx, row) in rows.iter().enumerate() {
            let chars: Vec<char> = row.chars().collect();
            if chars.len() != BOARD_SIZE {
                return Err(GameError::InvalidNotation {
                    reason: format!(
                        "Row {} has {} columns, expected {}",
                        row_idx,
                        chars.len(),
                        BOARD_SIZE
                    ),
                });
            }

            for (col_idx, c) in chars.into_iter().enumerate() {
                cells[row_idx][col_idx] =
                    Cell::from_char(c).ok_or_else(|| GameError::InvalidNotation {
                        reason: format!("Invalid cell character: {}", c),
                    })?;
            }
        }

        Ok(Board::from_cells(cells))
    }

    /// 将棋盘转换为记谱
    pub fn to_string(board: &Board) -> String {
        board
            .cells()
            .iter()
            .map(|row| row.iter().map(Cell::to_char).collect::<String>())
            .collect::<Vec<_>>()
            .join("/")
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", Notation::to_string(self))
    }
}
