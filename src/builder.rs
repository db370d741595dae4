use crate::class_range::CharacterClassRange;
use crate::error::{Error, Result};
use crate::escape::EscapeSequence;
use crate::matchable::{Fragment, Matchable};
use std::fmt;

/// Accumulates pattern text one committed fragment at a time.
///
/// The `match_*` methods only bind a [`Matchable`] to the builder; nothing is
/// appended until a quantifier is called on it.
///
/// ```
/// use regexp_builder::PatternBuilder;
///
/// let regex = PatternBuilder::new()
///     .match_literal("a").once()
///     .match_literal("bb").zero_or_more_times()
///     .build()
///     .unwrap();
/// assert_eq!(regex, "a(bb)*");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PatternBuilder {
    pattern: String,
    // A single flag, not a depth: nested start_group() calls share it.
    group_open: bool,
}

impl PatternBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new builder from the built text of `start`.
    pub fn starting_with(start: &PatternBuilder) -> Result<Self> {
        Ok(PatternBuilder { pattern: start.build()?, group_open: false })
    }

    /// Validates `range` for use in a character class.
    pub fn range(range: &str) -> Result<CharacterClassRange> {
        CharacterClassRange::new(range)
    }

    pub(crate) fn append(&mut self, text: &str) -> &mut Self {
        self.pattern.push_str(text);
        self
    }

    pub fn match_any(&mut self) -> Matchable<'_> {
        Matchable::new(self, Fragment::AnyChar)
    }

    pub fn match_literal(&mut self, text: &str) -> Matchable<'_> {
        Matchable::new(self, Fragment::Literal(text.to_string()))
    }

    /// Embeds the built text of `sub` without re-escaping it.
    pub fn match_pattern(&mut self, sub: &PatternBuilder) -> Result<Matchable<'_>> {
        let built = sub.build()?;
        Ok(Matchable::new(self, Fragment::Pattern(built)))
    }

    /// Like [`match_pattern`](Self::match_pattern), with the sub-builder
    /// produced by `make`.
    pub fn match_pattern_with<F>(&mut self, make: F) -> Result<Matchable<'_>>
    where
        F: FnOnce() -> PatternBuilder,
    {
        let sub = make();
        self.match_pattern(&sub)
    }

    pub fn match_escape(&mut self, escape: EscapeSequence) -> Matchable<'_> {
        Matchable::new(self, Fragment::Escape(escape))
    }

    pub fn match_any_of_chars(&mut self, chars: &str) -> Matchable<'_> {
        Matchable::new(self, Fragment::character_class(chars, None))
    }

    pub fn match_any_of_chars_in(
        &mut self,
        chars: &str,
        range: CharacterClassRange,
    ) -> Matchable<'_> {
        Matchable::new(self, Fragment::character_class(chars, Some(&range)))
    }

    pub fn match_any_of_range(&mut self, range: CharacterClassRange) -> Matchable<'_> {
        Matchable::new(self, Fragment::character_class("", Some(&range)))
    }

    pub fn match_any_of_escapes(&mut self, escapes: &[EscapeSequence]) -> Matchable<'_> {
        Matchable::new(self, Fragment::escape_class(escapes))
    }

    /// Alternation of raw strings, joined verbatim: `(a|b|...)`.
    pub fn match_any_of<I, S>(&mut self, items: I) -> Matchable<'_>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Matchable::new(self, Fragment::alternation(items))
    }

    /// Alternation of the built text of each sub-builder.
    pub fn match_any_of_patterns(&mut self, subs: &[&PatternBuilder]) -> Result<Matchable<'_>> {
        let built = subs
            .iter()
            .map(|sub| sub.build())
            .collect::<Result<Vec<_>>>()?;
        Ok(Matchable::new(self, Fragment::alternation(built)))
    }

    pub fn start_group(&mut self) -> &mut Self {
        self.group_open = true;
        self.append("(")
    }

    /// Closes the group opened by [`start_group`](Self::start_group).
    ///
    /// Without an open group this only logs a warning and leaves the pattern
    /// as it was.
    pub fn end_group(&mut self) -> &mut Self {
        if !self.group_open {
            log::warn!("end_group() was called before calling start_group()");
            return self;
        }

        self.group_open = false;
        self.append(")")
    }

    pub fn build(&self) -> Result<String> {
        if self.group_open {
            return Err(Error::UnclosedGroup { pattern: self.pattern.clone() });
        }
        Ok(self.pattern.clone())
    }
}

/// Writes the committed text, whether or not a group is still open. Use
/// [`PatternBuilder::build`] for the checked form.
impl fmt::Display for PatternBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pattern)
    }
}
