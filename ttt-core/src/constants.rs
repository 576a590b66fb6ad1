//! 棋盘常量定义

/// 棋盘边长（行数与列数）
pub const BOARD_SIZE: usize = 3;

/// 格子总数
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// 先手（X）获胜的效用值
pub const X_WIN_UTILITY: i32 = 1;

/// 后手（O）获胜的效用值
pub const O_WIN_UTILITY: i32 = -1;

/// 和棋（以及未结束局面）的效用值
pub const DRAW_UTILITY: i32 = 0;

/// 棋谱格式版本
pub const RECORD_VERSION: &str = "1.0";
