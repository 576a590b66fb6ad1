//! 井字棋 AI 引擎
//!
//! 包含:
//! - 完整深度的 Minimax + Alpha-Beta 搜索
//! - 根节点窗口策略配置
//! - 搜索统计
//! - 自对弈

mod play;
mod search;

pub use play::{play_out, ENGINE_NAME};
pub use search::{best_move, AiConfig, AiEngine, RootWindow, SearchStats};
