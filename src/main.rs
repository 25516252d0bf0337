use std::io;

use anyhow::Result;
use tracing::info;

use tictac_console::Console;
use tictac_engine::GameConfig;

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_writer(io::stderr).init();
    info!("tictac starting");

    let mut console = Console::new(GameConfig::default());
    console.run(io::stdin().lock(), io::stdout().lock())?;
    Ok(())
}
