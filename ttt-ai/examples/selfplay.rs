//! 自对弈示例
//!
//! 运行方式:
//! ```bash
//! cargo run -p ttt-ai --example selfplay
//!
//! # 指定配置文件和起始局面
//! RUST_LOG=ttt_ai=debug cargo run -p ttt-ai --example selfplay -- ai.json "X../.O./..."
//! ```

use std::env;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use ttt_ai::{play_out, AiConfig, AiEngine};
use ttt_core::{Board, Notation};

fn main() -> Result<()> {
    // 初始化日志
    let filter =
        tracing_subscriber::EnvFilter::from_default_env().add_directive("selfplay=info".parse()?);
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(filter)
        .init();

    let mut args = env::args().skip(1);

    let config = match args.next() {
        Some(path) => AiConfig::load(&path)?,
        None => AiConfig::default(),
    };
    let board = match args.next() {
        Some(notation) => Notation::parse(&notation)
            .with_context(|| format!("invalid starting position: {}", notation))?,
        None => Board::initial(),
    };

    info!(?config, %board, "starting self-play");

    let mut engine = AiEngine::new(config);
    let record = play_out(&mut engine, &board)?;

    info!(moves = record.moves.len(), result = ?record.metadata.result, "game over");
    println!("{}", record.to_json()?);

    Ok(())
}
