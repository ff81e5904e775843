//! Line-driven game loop over any reader and writer.

use crate::command::{Input, help_text};
use crate::config::GameConfig;
use crate::render;
use anyhow::Result;
use grandpas_dots::{GameError, GameSession, MoveReport, Phase};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument, warn};

/// Whether the loop keeps reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Read another line.
    Continue,
    /// Stop.
    Quit,
}

/// Interactive front-end for one session.
#[derive(Debug)]
pub struct Repl {
    session: GameSession,
    config: GameConfig,
    json: bool,
}

impl Repl {
    /// Creates a front-end with a session in setup built from `config`.
    #[instrument(skip(config))]
    pub fn new(config: GameConfig, json: bool) -> Result<Self> {
        let session = GameSession::with_setup(config.to_setup()?);
        Ok(Self {
            session,
            config,
            json,
        })
    }

    /// The session being driven.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Reads commands until `quit` or end of input.
    #[instrument(skip_all)]
    pub fn run(&mut self, input: impl BufRead, mut output: impl Write) -> Result<()> {
        info!("Starting interactive game");
        writeln!(output, "Grandpa's Dots. Type 'help' for commands.")?;
        writeln!(output, "{}", render::status(&self.session))?;

        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let flow = self.execute(&line, &mut output)?;
            if self.json {
                writeln!(output, "{}", self.session.snapshot().to_json()?)?;
            }
            if flow == Flow::Quit {
                break;
            }
        }
        info!("Leaving interactive game");
        Ok(())
    }

    /// Applies one input line and writes the response.
    #[instrument(skip(self, output))]
    pub fn execute(&mut self, line: &str, output: &mut impl Write) -> Result<Flow> {
        let input: Input = match line.parse() {
            Ok(input) => input,
            Err(e) => {
                debug!(error = %e, "Unparsed input");
                writeln!(output, "{}", e)?;
                return Ok(Flow::Continue);
            }
        };

        let message = match input {
            Input::Quit => return Ok(Flow::Quit),
            Input::Help => help_text(),
            Input::Board => self.board_text(),
            Input::Scores => match self.session.standings() {
                Some(standings) => render::standings(&standings),
                None => "No game yet.".to_string(),
            },
            Input::AddPlayer => {
                let result = self.session.add_player().map(|p| format!("Added {}.", p));
                self.outcome_text(result)
            }
            Input::RemovePlayer => {
                let result = self.session.remove_player().map(|p| format!("Removed {}.", p));
                self.outcome_text(result)
            }
            Input::Size(n) if !self.config.offers_size(n) => {
                warn!(n, "Board size not offered");
                format!("Board size must be one of {:?}.", self.config.offered_sizes())
            }
            Input::Size(n) => {
                let result = self.session.set_board_size(n).map(|size| format!("Board is {}.", size));
                self.outcome_text(result)
            }
            Input::Start => match self.session.start() {
                Ok(()) => format!("{}\n{}", self.board_text(), render::status(&self.session)),
                Err(e) => e.to_string(),
            },
            Input::NewGame => {
                self.session.reset_to_setup();
                render::status(&self.session)
            }
            Input::Claim(edge) => match self.session.submit_move(edge) {
                Ok(report) => self.report_text(&report),
                Err(e) => e.to_string(),
            },
        };
        writeln!(output, "{}", message)?;
        Ok(Flow::Continue)
    }

    fn outcome_text(&self, result: std::result::Result<String, GameError>) -> String {
        match result {
            Ok(message) => format!("{} {}", message, render::status(&self.session)),
            Err(e) => e.to_string(),
        }
    }

    fn board_text(&self) -> String {
        match self.session.board() {
            Some(board) => render::board(board),
            None => "No game yet.".to_string(),
        }
    }

    fn report_text(&self, report: &MoveReport) -> String {
        let mut lines = vec![self.board_text()];
        match report.completed.len() {
            0 => {}
            1 => lines.push(format!("{} closes a box.", report.mover)),
            n => lines.push(format!("{} closes {} boxes.", report.mover, n)),
        }
        if self.session.phase() == Phase::Over
            && let Some(standings) = self.session.standings()
        {
            lines.push(render::standings(&standings));
        }
        lines.push(render::status(&self.session));
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(script: &str) -> (Repl, String) {
        let mut repl = Repl::new(GameConfig::default(), false).unwrap();
        let mut out = Vec::new();
        repl.run(script.as_bytes(), &mut out).unwrap();
        (repl, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_setup_commands() {
        let (repl, out) = run("add\nsize 5\nsize 4\n");
        assert_eq!(repl.session().roster().len(), 3);
        assert_eq!(repl.session().board_size().get(), 5);
        assert!(out.contains("Added P3."));
        assert!(out.contains("Board size must be one of [3, 5, 7, 9]."));
    }

    #[test]
    fn test_quit_stops_reading() {
        let (repl, _) = run("quit\nstart\n");
        assert_eq!(repl.session().phase(), Phase::Setup);
    }

    #[test]
    fn test_rejections_are_reported() {
        let (repl, out) = run("start\nh 0 0\nh 0 0\nh 9 9\nadd\n");
        assert_eq!(repl.session().history().len(), 1);
        assert!(out.contains("already claimed"));
        assert!(out.contains("outside the board"));
        assert!(out.contains("not in setup"));
    }
}
