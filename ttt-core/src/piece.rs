//! 棋子、格子与落点定义

use serde::{Deserialize, Serialize};

use crate::constants::BOARD_SIZE;

/// 玩家
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// 先手
    X,
    /// 后手
    O,
}

impl Player {
    /// 是否为极大方（效用值以 X 视角计算）
    pub fn is_maximizer(&self) -> bool {
        matches!(self, Player::X)
    }

    /// 获取记谱字符
    pub fn to_char(&self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }

    /// 从记谱字符解析（不区分大小写）
    pub fn from_char(c: char) -> Option<Player> {
        match c {
            'x' | 'X' => Some(Player::X),
            'o' | 'O' => Some(Player::O),
            _ => None,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// 格子
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// 空
    #[default]
    Empty,
    /// X 的棋子
    X,
    /// O 的棋子
    O,
}

impl Cell {
    /// 占据该格的玩家
    pub fn player(&self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Cell::Empty
    }

    /// 获取记谱字符
    pub fn to_char(&self) -> char {
        match self.player() {
            Some(player) => player.to_char(),
            None => '.',
        }
    }

    /// 从记谱字符解析，`.`、`_`、`-` 均表示空格
    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | '_' | '-' => Some(Cell::Empty),
            _ => Player::from_char(c).map(Cell::from),
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// 落点
///
/// 构造时不检查边界，越界由 [`Board::apply`](crate::Board::apply) 报告。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Action {
    /// 行 (0-2)
    pub row: u8,
    /// 列 (0-2)
    pub col: u8,
}

impl Action {
    /// 创建新落点
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// 检查落点是否在棋盘内
    pub fn is_valid(&self) -> bool {
        (self.row as usize) < BOARD_SIZE && (self.col as usize) < BOARD_SIZE
    }
}

impl From<(u8, u8)> for Action {
    fn from((row, col): (u8, u8)) -> Self {
        Self::new(row, col)
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
