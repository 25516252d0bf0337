//! Synchronous read-eval-print loop driving a [`Game`].

use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use tictac_engine::{Game, GameConfig};

use crate::command::{Command, parse_command};
use crate::error::ConsoleError;

const HELP: &str = "\
commands:
  new                 start a new game
  show                print the board
  play <i>            mark cell i (0-8, row-major)
  play <col> <row>    mark the cell at column, row
  reply               let the computer move
  undo                take back your last move and the reply
  hint                suggest a move
  eval                print the static evaluation
  depth <n>           set the search depth (1-9)
  quit                leave";

/// The console front-end: the human plays `X`, the computer `O`.
#[derive(Debug, Default)]
pub struct Console {
    game: Game,
}

impl Console {
    /// Create a console with a fresh game.
    pub fn new(config: GameConfig) -> Self {
        Self {
            game: Game::new(config),
        }
    }

    /// Return the game being played.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Read commands from `input` until `quit` or end of input.
    ///
    /// Command errors are reported on `out` and the loop carries on; only
    /// I/O failures end it early.
    pub fn run<R, W>(&mut self, input: R, mut out: W) -> Result<(), ConsoleError>
    where
        R: BufRead,
        W: Write,
    {
        for line in input.lines() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            debug!(cmd = %trimmed, "received command");

            match parse_command(trimmed).and_then(|cmd| self.execute(cmd, &mut out)) {
                Ok(true) => {}
                Ok(false) => break,
                Err(e @ ConsoleError::Io { .. }) => return Err(e),
                Err(e) => {
                    warn!(error = %e, "command failed");
                    writeln!(out, "error {e}")?;
                }
            }
            out.flush()?;
        }

        info!("tictac shutting down");
        Ok(())
    }

    /// Execute one command. Returns `false` when the console should stop.
    fn execute<W: Write>(&mut self, cmd: Command, out: &mut W) -> Result<bool, ConsoleError> {
        match cmd {
            Command::New => {
                self.game.reset();
                self.print_board(out)?;
            }
            Command::Show => self.print_board(out)?,
            Command::Play(index) => {
                let turn = self.game.play(index);
                if turn.player.is_none() {
                    writeln!(out, "illegal {index}")?;
                    return Ok(true);
                }
                match turn.reply {
                    Some(mv) => writeln!(out, "reply {}", mv.index)?,
                    None => writeln!(out, "reply none")?,
                }
                self.print_board(out)?;
            }
            Command::Reply => {
                match self.game.reply() {
                    Some(mv) => writeln!(out, "reply {}", mv.index)?,
                    None => writeln!(out, "reply none")?,
                }
                self.print_board(out)?;
            }
            Command::Undo => {
                let undone = self.game.undo();
                debug!(undone, "undo");
                self.print_board(out)?;
            }
            Command::Hint => match self.game.hint() {
                Some(mv) => writeln!(out, "hint {}", mv.index)?,
                None => writeln!(out, "hint none")?,
            },
            Command::Eval => writeln!(out, "eval {}", self.game.evaluation())?,
            Command::Depth(depth) => {
                let config = GameConfig::with_depth(depth)?;
                self.game.set_config(config);
                info!(depth, "search depth set");
            }
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Quit => return Ok(false),
        }
        Ok(true)
    }

    fn print_board<W: Write>(&self, out: &mut W) -> Result<(), ConsoleError> {
        writeln!(out, "{}", self.game.board().pretty())?;
        writeln!(out, "status {}", self.game.outcome())?;
        Ok(())
    }
}
