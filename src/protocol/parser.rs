//! Interactive command parser.
//!
//! Parses incoming text commands from raw lines into structured `Command`
//! variants that the main loop can dispatch on. Unknown or malformed lines
//! yield `None` and are ignored by the loop.

/// A parsed command from the interactive session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Start a new game: `new <players> [seed]`.
    New { players: u8, seed: Option<u64> },

    /// Attack between two territories: `attack <from> <to>`.
    Attack { from: usize, to: usize },

    /// Pass the current player's turn.
    Skip,

    /// Run the reinforcement round.
    Reinforce,

    /// Let the default strategy act for the current player.
    Bot,

    /// Revert the most recent action.
    Undo,

    /// Re-apply the most recently undone action.
    Redo,

    /// Print the current game summary.
    Show,

    /// Export the recording: `save <path>`.
    Save { path: String },

    /// Import a recording and resume it: `load <path>`.
    Load { path: String },

    /// Terminate the session.
    Quit,
}

/// Parses a single input line. Returns `None` for empty, unknown, or
/// malformed commands.
pub fn parse_command(line: &str) -> Option<Command> {
    let mut tokens = line.split_whitespace();
    match tokens.next()? {
        "new" => {
            let players = tokens.next()?.parse().ok()?;
            let seed = match tokens.next() {
                Some(t) => Some(t.parse().ok()?),
                None => None,
            };
            Some(Command::New { players, seed })
        }
        "attack" => {
            let from = tokens.next()?.parse().ok()?;
            let to = tokens.next()?.parse().ok()?;
            Some(Command::Attack { from, to })
        }
        "skip" => Some(Command::Skip),
        "reinforce" => Some(Command::Reinforce),
        "bot" => Some(Command::Bot),
        "undo" => Some(Command::Undo),
        "redo" => Some(Command::Redo),
        "show" => Some(Command::Show),
        "save" => Some(Command::Save {
            path: tokens.next()?.to_string(),
        }),
        "load" => Some(Command::Load {
            path: tokens.next()?.to_string(),
        }),
        "quit" => Some(Command::Quit),
        _ => None,
    }
}
