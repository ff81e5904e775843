//! Terminal front-end for Grandpa's Dots.
//!
//! Loads a [`config::GameConfig`], then drives a
//! [`grandpas_dots::GameSession`] from typed commands through
//! [`repl::Repl`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod command;
pub mod config;
pub mod render;
pub mod repl;

pub use cli::{Cli, Command, SettingsArgs};
pub use command::{Input, InputError, Verb};
pub use config::{ConfigError, GameConfig, Overrides};
pub use repl::{Flow, Repl};
