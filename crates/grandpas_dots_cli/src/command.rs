//! Parsing of interactive input lines.

use derive_more::Display;
use grandpas_dots::Edge;
use std::str::FromStr;
use strum::IntoEnumIterator;

/// First word of an input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumString, strum::Display, strum::EnumIter)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Verb {
    /// Claim a horizontal edge.
    #[strum(serialize = "h")]
    Horizontal,
    /// Claim a vertical edge.
    #[strum(serialize = "v")]
    Vertical,
    /// Add a player.
    Add,
    /// Remove the last player.
    Remove,
    /// Choose the board size.
    Size,
    /// Start the game.
    Start,
    /// Back to setup.
    New,
    /// Show the board.
    Board,
    /// Show scores and ranks.
    Scores,
    /// List commands.
    Help,
    /// Leave.
    Quit,
}

impl Verb {
    /// Argument hint and one-line description.
    pub fn usage(self) -> (&'static str, &'static str) {
        match self {
            Verb::Horizontal => ("ROW COL", "claim the horizontal edge at ROW, COL"),
            Verb::Vertical => ("ROW COL", "claim the vertical edge at ROW, COL"),
            Verb::Add => ("", "add a player (setup)"),
            Verb::Remove => ("", "remove the last player (setup)"),
            Verb::Size => ("N", "play on an N x N board (setup)"),
            Verb::Start => ("", "start the game (setup)"),
            Verb::New => ("", "leave the current game and return to setup"),
            Verb::Board => ("", "show the board"),
            Verb::Scores => ("", "show scores and ranks"),
            Verb::Help => ("", "show this list"),
            Verb::Quit => ("", "leave"),
        }
    }

    fn arity(self) -> usize {
        match self {
            Verb::Horizontal | Verb::Vertical => 2,
            Verb::Size => 1,
            _ => 0,
        }
    }
}

/// One parsed input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Claim an edge for the player to move.
    Claim(Edge),
    /// Add a player.
    AddPlayer,
    /// Remove the last player.
    RemovePlayer,
    /// Choose the board size.
    Size(usize),
    /// Start the game.
    Start,
    /// Back to setup.
    NewGame,
    /// Show the board.
    Board,
    /// Show scores.
    Scores,
    /// List commands.
    Help,
    /// Leave.
    Quit,
}

/// Why an input line was not understood.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum InputError {
    /// Blank line.
    #[display("Empty command")]
    Empty,

    /// First word is not a command.
    #[display("Unknown command '{}', type 'help' for a list", _0)]
    UnknownVerb(String),

    /// Wrong number of arguments.
    #[display("'{}' takes {} argument(s), got {}", verb, expected, actual)]
    WrongArity {
        /// The command.
        verb: Verb,
        /// Arguments it takes.
        expected: usize,
        /// Arguments given.
        actual: usize,
    },

    /// Argument is not a non-negative number.
    #[display("'{}' is not a number", _0)]
    NotANumber(String),
}

impl std::error::Error for InputError {}

fn number(word: &str) -> Result<usize, InputError> {
    word.parse()
        .map_err(|_| InputError::NotANumber(word.to_string()))
}

impl FromStr for Input {
    type Err = InputError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let first = words.next().ok_or(InputError::Empty)?;
        let verb = Verb::from_str(first).map_err(|_| InputError::UnknownVerb(first.to_string()))?;
        let args: Vec<&str> = words.collect();
        if args.len() != verb.arity() {
            return Err(InputError::WrongArity {
                verb,
                expected: verb.arity(),
                actual: args.len(),
            });
        }

        Ok(match verb {
            Verb::Horizontal => Input::Claim(Edge::horizontal(number(args[0])?, number(args[1])?)),
            Verb::Vertical => Input::Claim(Edge::vertical(number(args[0])?, number(args[1])?)),
            Verb::Size => Input::Size(number(args[0])?),
            Verb::Add => Input::AddPlayer,
            Verb::Remove => Input::RemovePlayer,
            Verb::Start => Input::Start,
            Verb::New => Input::NewGame,
            Verb::Board => Input::Board,
            Verb::Scores => Input::Scores,
            Verb::Help => Input::Help,
            Verb::Quit => Input::Quit,
        })
    }
}

/// Help text listing every command.
pub fn help_text() -> String {
    Verb::iter()
        .map(|verb| {
            let (args, about) = verb.usage();
            let usage = format!("{} {}", verb, args);
            format!("  {:<10} {}", usage.trim_end(), about)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
