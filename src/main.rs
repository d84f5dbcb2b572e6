use anyhow::Result;
use clap::Parser;
use termsnake::config::{init_logging, Config};
use termsnake::core::engine::Engine;
use termsnake::core::terminal::TerminalSession;
use termsnake::{Game, SnakeGame};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();
    init_logging(&config.log_file, &config.log_level)?;
    info!(seed = ?config.seed, "termsnake v{}", env!("CARGO_PKG_VERSION"));

    let game = SnakeGame::new(config.seed);

    // The session restores the terminal when dropped, before anything is printed
    let game = {
        let mut session = TerminalSession::start()?;
        Engine::new(game).run(session.terminal_mut()).await?
    };

    let summary = game.summary();
    info!(score = summary.score, ticks = summary.ticks, "session finished");
    if config.json {
        println!("{}", serde_json::to_string(&summary)?);
    } else {
        println!("{summary}");
    }
    Ok(())
}
