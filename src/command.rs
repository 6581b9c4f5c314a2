//! Helpers for plugin commands: specs for the hello, name matching, argument
//! parsing and replies.

use std::str::FromStr;

use thiserror::Error;

use crate::error::RuntimeError;
use crate::event::EventContext;
use crate::types;

/// Builds a [`types::CommandSpec`] for [`PluginRuntime::command`](crate::PluginRuntime::command).
pub fn spec(name: &str, description: &str, aliases: &[&str]) -> types::CommandSpec {
    types::CommandSpec {
        name: name.trim_start_matches('/').to_owned(),
        description: description.to_owned(),
        aliases: aliases
            .iter()
            .map(|alias| alias.trim_start_matches('/').to_owned())
            .collect(),
    }
}

pub(crate) fn normalize_command(name: &str) -> String {
    name.trim().trim_start_matches('/').to_lowercase()
}

/// The invoked command name, lowercased and without a leading `/`.
///
/// Uses the event's `command` field, or the first token of `raw` when the
/// host left it empty.
pub fn command_name(event: &types::CommandEvent) -> String {
    if !event.command.trim().is_empty() {
        return normalize_command(&event.command);
    }
    event
        .raw
        .split_whitespace()
        .next()
        .map(normalize_command)
        .unwrap_or_default()
}

/// The command arguments: the event's `args`, or the remaining tokens of
/// `raw` when the host sent none.
pub fn command_args(event: &types::CommandEvent) -> Vec<String> {
    if !event.args.is_empty() {
        return event.args.clone();
    }
    event
        .raw
        .split_whitespace()
        .skip(1)
        .map(str::to_owned)
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandParseError {
    #[error("missing argument `{0}`")]
    Missing(&'static str),
    #[error("invalid value for `{0}`")]
    Invalid(&'static str),
}

/// Parse a required argument at the given index.
pub fn parse_required_arg<T>(
    args: &[String],
    index: usize,
    name: &'static str,
) -> Result<T, CommandParseError>
where
    T: FromStr,
{
    let s = args.get(index).ok_or(CommandParseError::Missing(name))?;
    s.parse().map_err(|_| CommandParseError::Invalid(name))
}

/// Parse an optional argument at the given index.
/// Returns Ok(None) if the argument is missing.
/// Returns Ok(Some(value)) if present and parseable.
/// Returns Err if present but invalid.
pub fn parse_optional_arg<T>(
    args: &[String],
    index: usize,
    name: &'static str,
) -> Result<Option<T>, CommandParseError>
where
    T: FromStr,
{
    match args.get(index) {
        None => Ok(None),
        Some(s) if s.is_empty() => Ok(None),
        Some(s) => s
            .parse()
            .map(Some)
            .map_err(|_| CommandParseError::Invalid(name)),
    }
}

impl EventContext<types::CommandEvent> {
    /// Sends a chat message to the player who ran the command.
    pub fn reply(&self, message: impl Into<String>) -> Result<(), RuntimeError> {
        self.server().send_chat(self.data.player_uuid.clone(), message)
    }

    pub fn args(&self) -> Vec<String> {
        command_args(&self.data)
    }
}

impl EventContext<types::ChatEvent> {
    /// Sends a chat message back to the player who spoke.
    pub fn reply(&self, message: impl Into<String>) -> Result<(), RuntimeError> {
        self.server().send_chat(self.data.player_uuid.clone(), message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(raw: &str, command: &str, args: &[&str]) -> types::CommandEvent {
        types::CommandEvent {
            raw: raw.into(),
            command: command.into(),
            args: args.iter().map(|a| a.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn name_from_field_or_raw() {
        assert_eq!(command_name(&event("/TP 1 2 3", "Tp", &[])), "tp");
        assert_eq!(command_name(&event("/Wall on", "", &[])), "wall");
        assert_eq!(command_name(&event("", "", &[])), "");
    }

    #[test]
    fn args_fall_back_to_raw() {
        assert_eq!(command_args(&event("/tp 1 2", "tp", &["9"])), vec!["9"]);
        assert_eq!(command_args(&event("/tp 1 2", "tp", &[])), vec!["1", "2"]);
    }

    #[test]
    fn parses_args() {
        let args: Vec<String> = vec!["5".into(), "x".into()];
        assert_eq!(parse_required_arg::<i32>(&args, 0, "n"), Ok(5));
        assert_eq!(
            parse_required_arg::<i32>(&args, 1, "m"),
            Err(CommandParseError::Invalid("m"))
        );
        assert_eq!(
            parse_required_arg::<i32>(&args, 2, "k"),
            Err(CommandParseError::Missing("k"))
        );
        assert_eq!(parse_optional_arg::<i32>(&args, 2, "k"), Ok(None));
    }

    #[test]
    fn spec_strips_slashes() {
        let spec = spec("/wall", "Toggle walls", &["/w"]);
        assert_eq!(spec.name, "wall");
        assert_eq!(spec.aliases, vec!["w"]);
    }
}
