//! 自对弈
//!
//! 反复向引擎请求最佳走法并落子，直到终局

use tracing::debug;
use ttt_core::{Board, GameError, GameRecord, MoveRecord};

use crate::search::AiEngine;

/// 棋谱中引擎一方的名称
pub const ENGINE_NAME: &str = "ttt-ai";

/// 从给定局面开始让引擎与自己对弈，返回完整棋谱
pub fn play_out(engine: &mut AiEngine, board: &Board) -> Result<GameRecord, GameError> {
    let mut record =
        GameRecord::from_board(ENGINE_NAME.to_string(), ENGINE_NAME.to_string(), board);
    let mut current = *board;

    while let Some(action) = engine.search(&current) {
        let player = current.current_player();
        current = current.apply(action)?;
        record.add_move(MoveRecord::new(action, player));

        debug!(
            ply = record.moves.len(),
            %player,
            %action,
            board = %current,
            nodes = engine.nodes_searched(),
            "engine move"
        );
    }

    if let Some(result) = current.outcome() {
        record.set_result(result);
    }

    Ok(record)
}
