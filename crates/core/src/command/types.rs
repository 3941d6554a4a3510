//! Command definitions and the match results handed to their handlers.

use std::fmt;
use std::ops::Index;
use std::sync::Arc;

use flexkit_common::validation::require_present;
use regex::{Captures, Regex};

use super::error::{CommandError, CommandResult};

/// Handler invoked with the match result of a command's pattern
pub type Handler<T> = Arc<dyn Fn(&MatchResult) -> T + Send + Sync>;

/// Captured groups of a successful pattern match
///
/// Index 0 holds the full matched substring; indices `1..` hold the
/// parenthesized capture groups in order. Groups that did not participate in
/// the match are `None` from [`MatchResult::get`] and `""` when indexed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    groups: Vec<Option<String>>,
}

impl MatchResult {
    pub(crate) fn from_captures(captures: &Captures<'_>) -> Self {
        Self { groups: captures.iter().map(|m| m.map(|m| m.as_str().to_string())).collect() }
    }

    /// The full matched substring
    pub fn full(&self) -> &str {
        self.get(0).unwrap_or_default()
    }

    /// Group `index`, or `None` if it is out of range or did not participate
    pub fn get(&self, index: usize) -> Option<&str> {
        self.groups.get(index).and_then(|g| g.as_deref())
    }

    /// Number of groups including the full match
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Groups in order, `None` for ones that did not participate
    pub fn iter(&self) -> impl Iterator<Item = Option<&str>> {
        self.groups.iter().map(|g| g.as_deref())
    }
}

impl Index<usize> for MatchResult {
    type Output = str;

    fn index(&self, index: usize) -> &str {
        self.get(index).unwrap_or_default()
    }
}

/// A named pattern and the handler it dispatches to
///
/// Commands are immutable once built. Registration-time checks (non-empty
/// name and description, unique name) happen in
/// [`CommandProcessor::add_command`](super::CommandProcessor::add_command).
pub struct Command<T> {
    name: String,
    description: String,
    pattern: Regex,
    handler: Handler<T>,
}

impl<T> Command<T> {
    /// Create a command from a compiled pattern and a handler
    pub fn new<F>(
        name: impl Into<String>,
        description: impl Into<String>,
        pattern: Regex,
        handler: F,
    ) -> Self
    where
        F: Fn(&MatchResult) -> T + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            description: description.into(),
            pattern,
            handler: Arc::new(handler),
        }
    }

    /// Start a builder that reports missing fields as validation errors
    pub fn builder() -> CommandBuilder<T> {
        CommandBuilder::new()
    }

    /// Unique name used for registration and ambiguity reports
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Human-readable description
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Compiled pattern messages are matched against
    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }

    /// Match `message` against the pattern
    pub fn try_match(&self, message: &str) -> Option<MatchResult> {
        self.pattern.captures(message).map(|c| MatchResult::from_captures(&c))
    }

    pub(crate) fn invoke(&self, matched: &MatchResult) -> T {
        (self.handler)(matched)
    }
}

impl<T> Clone for Command<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            description: self.description.clone(),
            pattern: self.pattern.clone(),
            handler: Arc::clone(&self.handler),
        }
    }
}

impl<T> fmt::Debug for Command<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("pattern", &self.pattern.as_str())
            .finish_non_exhaustive()
    }
}

/// Where a builder's pattern comes from
#[derive(Debug, Clone)]
pub enum PatternSource {
    Compiled(Regex),
    /// Regular-expression source compiled when the command is built
    Source(String),
}

impl From<Regex> for PatternSource {
    fn from(regex: Regex) -> Self {
        Self::Compiled(regex)
    }
}

impl From<&str> for PatternSource {
    fn from(source: &str) -> Self {
        Self::Source(source.to_string())
    }
}

impl From<String> for PatternSource {
    fn from(source: String) -> Self {
        Self::Source(source)
    }
}

/// Builder for [`Command`]
///
/// Every field is required. [`CommandBuilder::build`] reports the first
/// missing one in the order name, description, pattern, handler.
///
/// ```
/// use flexkit_core::command::Command;
///
/// let cmd = Command::builder()
///     .name("greet")
///     .description("Say hello")
///     .pattern(r"^hello (\w+)$")
///     .handler(|m| format!("hi {}", &m[1]))
///     .build()
///     .unwrap();
/// assert_eq!(cmd.name(), "greet");
/// assert_eq!(cmd.description(), "Say hello");
/// assert_eq!(cmd.pattern().as_str(), r"^hello (\w+)$");
///
/// let missing = Command::<()>::builder().name("greet").build();
/// assert!(missing.is_err());
/// ```
pub struct CommandBuilder<T> {
    name: Option<String>,
    description: Option<String>,
    pattern: Option<PatternSource>,
    handler: Option<Handler<T>>,
}

impl<T> Default for CommandBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> CommandBuilder<T> {
    /// Start with every field unset
    pub fn new() -> Self {
        Self { name: None, description: None, pattern: None, handler: None }
    }

    /// Set the command name
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the description
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the pattern, either a compiled [`Regex`] or its source text
    pub fn pattern(mut self, pattern: impl Into<PatternSource>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    /// Set the handler invoked with the match
    pub fn handler<F>(mut self, handler: F) -> Self
    where
        F: Fn(&MatchResult) -> T + Send + Sync + 'static,
    {
        self.handler = Some(Arc::new(handler));
        self
    }

    /// Build the command
    ///
    /// # Errors
    ///
    /// [`CommandError::Validation`] when a field is missing or the pattern
    /// source is not a valid regular expression.
    pub fn build(self) -> CommandResult<Command<T>> {
        let name = require_present("name", self.name)?;
        let description = require_present("description", self.description)?;
        let pattern = match require_present("pattern", self.pattern)? {
            PatternSource::Compiled(regex) => regex,
            PatternSource::Source(source) => Regex::new(&source).map_err(|e| {
                CommandError::validation("pattern", format!("must be a regular expression: {e}"))
            })?,
        };
        let handler = require_present("handler", self.handler)?;

        Ok(Command { name, description, pattern, handler })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Validates `MatchResult` layout for optional groups.
    ///
    /// Assertions:
    /// - Confirms index 0 is the full match.
    /// - Confirms a non-participating group is `None` and indexes as `""`.
    #[test]
    fn test_match_result_layout() {
        let cmd = Command::new("opt", "optional group", Regex::new(r"^(\d+)(x)?$").unwrap(), |m| {
            m.len()
        });
        let matched = cmd.try_match("42").unwrap();

        assert_eq!(matched.full(), "42");
        assert_eq!(matched.get(1), Some("42"));
        assert_eq!(matched.get(2), None);
        assert_eq!(&matched[2], "");
        assert_eq!(matched.len(), 3);
        assert_eq!(cmd.invoke(&matched), 3);
        assert!(cmd.try_match("nope").is_none());
    }

    /// Validates the order in which `build` reports missing fields.
    #[test]
    fn test_builder_reports_first_missing_field() {
        let cases: Vec<(CommandBuilder<()>, &str)> = vec![
            (Command::builder().description("d").pattern("^.*$").handler(|_| ()), "name"),
            (Command::builder().name("n").pattern("^.*$").handler(|_| ()), "description"),
            (Command::builder().name("n").description("d").handler(|_| ()), "pattern"),
            (Command::builder().name("n").description("d").pattern("^.*$"), "handler"),
        ];

        for (builder, field) in cases {
            match builder.build() {
                Err(CommandError::Validation { field: reported, .. }) => {
                    assert_eq!(reported, field);
                }
                other => panic!("expected validation error for {field}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_builder_rejects_invalid_pattern_source() {
        let err = Command::<()>::builder()
            .name("n")
            .description("d")
            .pattern("(unclosed")
            .handler(|_| ())
            .build()
            .unwrap_err();

        assert!(matches!(err, CommandError::Validation { ref field, .. } if field == "pattern"));
        assert!(err.to_string().contains("must be a regular expression"));
    }

    #[test]
    fn test_debug_omits_handler() {
        let cmd = Command::new("n", "d", Regex::new("^x$").unwrap(), |_| ());
        let rendered = format!("{cmd:?}");
        assert!(rendered.contains("\"^x$\""));
        assert!(!rendered.contains("handler"));
    }
}
