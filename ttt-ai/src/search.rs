//! 搜索引擎
//!
//! 实现完整深度的 Minimax + Alpha-Beta 剪枝

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};
use ttt_core::{Action, Board};

/// 负无穷（效用值只取 -1/0/1）
const NEG_INF: i32 = i32::MIN;
/// 正无穷
const POS_INF: i32 = i32::MAX;

/// 根节点窗口策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RootWindow {
    /// 每个根走法都从完整窗口 (-∞, +∞) 开始
    #[default]
    Reset,
    /// 根节点的当前最佳值会收窄后续兄弟节点的窗口
    Threaded,
}

/// AI 配置
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AiConfig {
    pub root_window: RootWindow,
}

impl AiConfig {
    /// 从 JSON 字符串解析，缺省字段取默认值
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("failed to parse AI config")
    }

    /// 从 JSON 文件加载
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read AI config from {}", path.display()))?;
        Self::from_json(&json)
    }
}

/// 单次搜索的统计
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// 访问的节点数
    pub nodes_searched: u64,
    /// 剪枝次数
    pub cutoffs: u64,
    /// 终局叶子数
    pub terminals: u64,
}

/// AI 引擎
#[derive(Debug, Default)]
pub struct AiEngine {
    config: AiConfig,
    stats: SearchStats,
}

impl AiEngine {
    /// 创建新的 AI 引擎
    pub fn new(config: AiConfig) -> Self {
        Self {
            config,
            stats: SearchStats::default(),
        }
    }

    /// 搜索最佳走法
    ///
    /// 终局返回 None。同分时保留最先（行优先）评估到的走法。
    pub fn search(&mut self, board: &Board) -> Option<Action> {
        self.stats = SearchStats::default();

        if board.is_terminal() {
            return None;
        }

        let maximizing = board.current_player().is_maximizer();
        let (mut alpha, mut beta) = (NEG_INF, POS_INF);
        let mut best_move = None;
        let mut best_value = if maximizing { NEG_INF } else { POS_INF };

        for (action, child) in board.successors() {
            if self.config.root_window == RootWindow::Reset {
                alpha = NEG_INF;
                beta = POS_INF;
            }

            let value = if maximizing {
                self.min_value(&child, alpha, beta)
            } else {
                self.max_value(&child, alpha, beta)
            };
            debug!(%action, value, "root action evaluated");

            let improved = if maximizing {
                value > best_value
            } else {
                value < best_value
            };
            if improved {
                best_value = value;
                best_move = Some(action);
            }

            if maximizing {
                alpha = alpha.max(best_value);
            } else {
                beta = beta.min(best_value);
            }
        }

        debug!(
            best = ?best_move,
            value = best_value,
            nodes = self.stats.nodes_searched,
            cutoffs = self.stats.cutoffs,
            "search finished"
        );

        best_move
    }

    /// 局面的博弈值（X 视角，完整窗口）
    pub fn evaluate(&mut self, board: &Board) -> i32 {
        self.stats = SearchStats::default();

        if board.current_player().is_maximizer() {
            self.max_value(board, NEG_INF, POS_INF)
        } else {
            self.min_value(board, NEG_INF, POS_INF)
        }
    }

    /// 极大方（X）取值
    fn max_value(&mut self, board: &Board, mut alpha: i32, beta: i32) -> i32 {
        self.stats.nodes_searched += 1;

        if board.is_terminal() {
            self.stats.terminals += 1;
            return board.utility();
        }

        let mut best = NEG_INF;
        for (_, child) in board.successors() {
            best = best.max(self.min_value(&child, alpha, beta));

            // O 不会允许走到这里，剪掉剩余兄弟节点
            if best >= beta {
                self.stats.cutoffs += 1;
                trace!(best, beta, "beta cutoff");
                return best;
            }
            alpha = alpha.max(best);
        }

        best
    }

    /// 极小方（O）取值
    fn min_value(&mut self, board: &Board, alpha: i32, mut beta: i32) -> i32 {
        self.stats.nodes_searched += 1;

        if board.is_terminal() {
            self.stats.terminals += 1;
            return board.utility();
        }

        let mut best = POS_INF;
        for (_, child) in board.successors() {
            best = best.min(self.max_value(&child, alpha, beta));

            if best <= alpha {
                self.stats.cutoffs += 1;
                trace!(best, alpha, "alpha cutoff");
                return best;
            }
            beta = beta.min(best);
        }

        best
    }

    /// 最近一次搜索的统计
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// 获取搜索的节点数
    pub fn nodes_searched(&self) -> u64 {
        self.stats.nodes_searched
    }
}

/// 使用默认配置搜索最佳走法
pub fn best_move(board: &Board) -> Option<Action> {
    AiEngine::default().search(board)
}
