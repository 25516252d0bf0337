//! Console command parsing.

use tictac_core::Board;

use crate::error::ConsoleError;

/// A parsed console command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `new` -- clear the board.
    New,
    /// `show` -- print the board and status.
    Show,
    /// `play <index>` or `play <column> <row>` -- human move plus reply.
    Play(usize),
    /// `reply` -- let the computer move.
    Reply,
    /// `undo` -- take back the last computer and human moves.
    Undo,
    /// `hint` -- suggest a human move.
    Hint,
    /// `eval` -- print the static evaluation.
    Eval,
    /// `depth <n>` -- set the search depth.
    Depth(u8),
    /// `help` -- list commands.
    Help,
    /// `quit` -- leave the console.
    Quit,
}

/// Parse a single line of console input into a [`Command`].
pub fn parse_command(line: &str) -> Result<Command, ConsoleError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some((&name, args)) = tokens.split_first() else {
        return Err(ConsoleError::UnknownCommand {
            name: String::new(),
        });
    };

    match name {
        "new" => Ok(Command::New),
        "show" => Ok(Command::Show),
        "play" => parse_play(args),
        "reply" => Ok(Command::Reply),
        "undo" => Ok(Command::Undo),
        "hint" => Ok(Command::Hint),
        "eval" => Ok(Command::Eval),
        "depth" => parse_depth(args),
        "help" => Ok(Command::Help),
        "quit" => Ok(Command::Quit),
        _ => Err(ConsoleError::UnknownCommand {
            name: name.to_string(),
        }),
    }
}

/// Parse `play` arguments: one cell index, or a column and a row.
fn parse_play(args: &[&str]) -> Result<Command, ConsoleError> {
    let invalid = || ConsoleError::InvalidCell {
        value: args.join(" "),
    };

    let index = match args {
        [] => return Err(ConsoleError::MissingArgument { command: "play" }),
        [index] => index
            .parse::<usize>()
            .ok()
            .filter(|&i| i < Board::CELLS)
            .ok_or_else(invalid)?,
        [column, row] => {
            let column = column.parse::<usize>().map_err(|_| invalid())?;
            let row = row.parse::<usize>().map_err(|_| invalid())?;
            Board::index_of(column, row).ok_or_else(invalid)?
        }
        _ => return Err(invalid()),
    };

    Ok(Command::Play(index))
}

fn parse_depth(args: &[&str]) -> Result<Command, ConsoleError> {
    let value = args
        .first()
        .ok_or(ConsoleError::MissingArgument { command: "depth" })?;
    value
        .parse::<u8>()
        .map(Command::Depth)
        .map_err(|_| ConsoleError::InvalidDepth {
            value: value.to_string(),
        })
}
