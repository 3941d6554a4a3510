//! Ordered command registry and the three dispatch policies.

use std::fmt;

use flexkit_common::validation::{validate_field, StringValidator};
use tracing::{debug, trace, warn};

use super::error::{CommandError, CommandResult};
use super::types::{Command, MatchResult};

/// Outcome of a single-handler dispatch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessOutcome<T> {
    /// Whether any command matched
    pub matched: bool,
    /// The handler's result when a command matched
    pub value: Option<T>,
}

impl<T> ProcessOutcome<T> {
    pub fn unmatched() -> Self {
        Self { matched: false, value: None }
    }

    pub fn matched(value: T) -> Self {
        Self { matched: true, value: Some(value) }
    }

    pub fn into_value(self) -> Option<T> {
        self.value
    }
}

/// How many matching commands a dispatch runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DispatchPolicy {
    /// Every matching command, in registration order
    All,
    /// Only the first matching command
    #[default]
    First,
    /// Exactly one matching command; more than one is an error
    One,
}

/// Ordered collection of commands matched against free-text messages
///
/// Registration order decides which command wins under
/// [`DispatchPolicy::First`] and which pair is reported under
/// [`DispatchPolicy::One`]. Commands are never removed.
///
/// ```
/// use flexkit_core::command::{Command, CommandProcessor};
/// use regex::Regex;
///
/// let mut processor = CommandProcessor::new();
/// processor
///     .add_command(Command::new(
///         "echo",
///         "Echo the rest of the line",
///         Regex::new(r"^echo (.*)$").unwrap(),
///         |m| m[1].to_string(),
///     ))
///     .unwrap();
///
/// assert_eq!(processor.process_all("echo hi"), vec!["hi".to_string()]);
/// assert!(!processor.process_first("nothing").matched);
/// ```
pub struct CommandProcessor<T> {
    commands: Vec<Command<T>>,
}

impl<T> Default for CommandProcessor<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for CommandProcessor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandProcessor").field("commands", &self.commands).finish()
    }
}

impl<T> CommandProcessor<T> {
    pub fn new() -> Self {
        Self { commands: Vec::new() }
    }

    /// Create a processor and add `commands` in order
    ///
    /// # Errors
    ///
    /// The first error [`CommandProcessor::add_command`] reports.
    pub fn with_commands<I>(commands: I) -> CommandResult<Self>
    where
        I: IntoIterator<Item = Command<T>>,
    {
        let mut processor = Self::new();
        for command in commands {
            processor.add_command(command)?;
        }
        Ok(processor)
    }

    /// Validate `command` and append it
    ///
    /// Nothing is appended when validation fails.
    ///
    /// # Errors
    ///
    /// - [`CommandError::Validation`] if the name or description is empty
    /// - [`CommandError::DuplicateCommand`] if the name is already registered
    pub fn add_command(&mut self, command: Command<T>) -> CommandResult<()> {
        self.validate_command(&command)?;
        debug!(
            name = command.name(),
            pattern = command.pattern().as_str(),
            position = self.commands.len(),
            "command registered"
        );
        self.commands.push(command);
        Ok(())
    }

    fn validate_command(&self, command: &Command<T>) -> CommandResult<()> {
        let required = StringValidator::new().not_empty();
        validate_field("name", command.name(), &required)?;
        validate_field("description", command.description(), &required)?;

        if self.commands.iter().any(|c| c.name() == command.name()) {
            return Err(CommandError::DuplicateCommand { name: command.name().to_string() });
        }
        Ok(())
    }

    /// Number of registered commands
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Registered commands in registration order
    pub fn commands(&self) -> impl Iterator<Item = &Command<T>> {
        self.commands.iter()
    }

    /// `(name, description)` pairs in registration order, for help listings
    pub fn descriptions(&self) -> impl Iterator<Item = (&str, &str)> {
        self.commands.iter().map(|c| (c.name(), c.description()))
    }

    /// Names of the commands whose pattern matches, without running handlers
    pub fn matches(&self, message: &str) -> Vec<&str> {
        self.commands.iter().filter(|c| c.pattern().is_match(message)).map(Command::name).collect()
    }

    fn matching<'a>(
        &'a self,
        message: &'a str,
    ) -> impl Iterator<Item = (&'a Command<T>, MatchResult)> + 'a {
        self.commands.iter().filter_map(move |command| {
            let matched = command.try_match(message)?;
            trace!(name = command.name(), full = matched.full(), "pattern matched");
            Some((command, matched))
        })
    }

    /// Run every matching handler in registration order
    ///
    /// Returns the handlers' results in the same order, empty when nothing
    /// matches.
    pub fn process_all(&self, message: &str) -> Vec<T> {
        self.matching(message).map(|(command, matched)| command.invoke(&matched)).collect()
    }

    /// Run the first matching handler only
    pub fn process_first(&self, message: &str) -> ProcessOutcome<T> {
        match self.matching(message).next() {
            Some((command, matched)) => ProcessOutcome::matched(command.invoke(&matched)),
            None => ProcessOutcome::unmatched(),
        }
    }

    /// Run the single matching handler
    ///
    /// The scan continues after the first match to detect ambiguity. The first
    /// match's handler runs as soon as it is found, so its side effects have
    /// already happened when an ambiguity error is returned.
    ///
    /// # Errors
    ///
    /// [`CommandError::AmbiguousCommand`] naming the first two matching
    /// commands when more than one pattern matches.
    pub fn process_one(&self, message: &str) -> CommandResult<ProcessOutcome<T>> {
        let mut found: Option<(&str, T)> = None;

        for (command, matched) in self.matching(message) {
            if let Some((first, _)) = &found {
                warn!(input = message, first = *first, second = command.name(), "ambiguous command");
                return Err(CommandError::AmbiguousCommand {
                    message: message.to_string(),
                    first: (*first).to_string(),
                    second: command.name().to_string(),
                });
            }
            found = Some((command.name(), command.invoke(&matched)));
        }

        Ok(found.map_or_else(ProcessOutcome::unmatched, |(_, value)| ProcessOutcome::matched(value)))
    }

    /// Dispatch under `policy`
    ///
    /// `First` and `One` yield at most one result.
    ///
    /// # Errors
    ///
    /// Only [`DispatchPolicy::One`] can fail, see
    /// [`CommandProcessor::process_one`].
    pub fn process(&self, policy: DispatchPolicy, message: &str) -> CommandResult<Vec<T>> {
        match policy {
            DispatchPolicy::All => Ok(self.process_all(message)),
            DispatchPolicy::First => Ok(self.process_first(message).value.into_iter().collect()),
            DispatchPolicy::One => Ok(self.process_one(message)?.value.into_iter().collect()),
        }
    }
}
