use crate::builder::PatternBuilder;
use crate::class_range::CharacterClassRange;
use crate::error::{Error, Result};
use crate::escape::EscapeSequence;
use crate::escaping::{escape_for_class, escape_literal};

/// The pending text of a fragment, before it is committed to a builder.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Fragment {
    /// `.`
    AnyChar,
    /// Literal text, escaped when rendered.
    Literal(String),
    /// The built text of another builder, embedded verbatim.
    Pattern(String),
    /// A single named escape such as `\d`.
    Escape(EscapeSequence),
    /// `[...]`, already rendered with its own escaping.
    CharacterClass(String),
    /// `(a|b|...)`, already rendered.
    Alternation(String),
}

impl Fragment {
    pub(crate) fn character_class(chars: &str, range: Option<&CharacterClassRange>) -> Fragment {
        let mut class = String::from("[");
        class.push_str(&escape_for_class(chars));
        if let Some(range) = range {
            class.push_str(range.as_str());
        }
        class.push(']');
        Fragment::CharacterClass(class)
    }

    pub(crate) fn escape_class(escapes: &[EscapeSequence]) -> Fragment {
        let joined: String = escapes.iter().map(EscapeSequence::to_string).collect();
        Fragment::CharacterClass(format!("[{}]", joined))
    }

    pub(crate) fn alternation<I, S>(items: I) -> Fragment
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let joined = items
            .into_iter()
            .map(|item| item.as_ref().to_string())
            .collect::<Vec<String>>()
            .join("|");
        Fragment::Alternation(format!("({})", joined))
    }

    /// The text this fragment commits, without any grouping.
    pub fn render(&self) -> String {
        match self {
            Fragment::AnyChar => ".".to_string(),
            Fragment::Literal(text) => escape_literal(text),
            Fragment::Pattern(text)
            | Fragment::CharacterClass(text)
            | Fragment::Alternation(text) => text.clone(),
            Fragment::Escape(escape) => escape.to_string(),
        }
    }

    /// Whether a quantifier needs this fragment wrapped in a group first.
    ///
    /// Only literals and embedded patterns qualify, and only when their
    /// unescaped text is longer than a single character.
    pub fn is_auto_groupable(&self) -> bool {
        match self {
            Fragment::Literal(text) | Fragment::Pattern(text) => text.chars().count() != 1,
            Fragment::AnyChar
            | Fragment::Escape(_)
            | Fragment::CharacterClass(_)
            | Fragment::Alternation(_) => false,
        }
    }
}

/// A fragment bound to the builder it will be committed into.
///
/// Every quantifier consumes the fragment, appends its text plus the
/// quantifier suffix to the builder, and hands the builder back for chaining.
/// Dropping a fragment without a quantifier leaves the builder untouched.
#[must_use = "a fragment is only added to the pattern by calling a quantifier on it"]
#[derive(Debug)]
pub struct Matchable<'a> {
    builder: &'a mut PatternBuilder,
    fragment: Fragment,
    groups: usize,
}

impl<'a> Matchable<'a> {
    pub(crate) fn new(builder: &'a mut PatternBuilder, fragment: Fragment) -> Self {
        Matchable { builder, fragment, groups: 0 }
    }

    pub fn fragment(&self) -> &Fragment {
        &self.fragment
    }

    /// Wraps the pending text in a capturing group.
    ///
    /// May be called more than once; a multi-character literal quantified
    /// afterwards is still auto-grouped on top, e.g. `((ab))+`.
    pub fn group(mut self) -> Self {
        self.groups += 1;
        self
    }

    pub fn once(self) -> &'a mut PatternBuilder {
        let text = self.pending();
        self.commit(text, "")
    }

    pub fn times(self, times: i32) -> Result<&'a mut PatternBuilder> {
        check_positive(times)?;
        let text = self.quantified();
        Ok(self.commit(text, &format!("{{{}}}", times)))
    }

    pub fn times_between(self, from: i32, to: i32) -> Result<&'a mut PatternBuilder> {
        check_positive(from)?;
        if to < from {
            return Err(Error::InvertedBounds { from, to });
        }
        let text = self.quantified();
        Ok(self.commit(text, &format!("{{{},{}}}", from, to)))
    }

    pub fn at_least_times(self, from: i32) -> Result<&'a mut PatternBuilder> {
        check_positive(from)?;
        let text = self.quantified();
        Ok(self.commit(text, &format!("{{{},}}", from)))
    }

    pub fn zero_or_one_times(self) -> &'a mut PatternBuilder {
        let text = self.quantified();
        self.commit(text, "?")
    }

    pub fn zero_or_more_times(self) -> &'a mut PatternBuilder {
        let text = self.quantified();
        self.commit(text, "*")
    }

    pub fn one_or_more_times(self) -> &'a mut PatternBuilder {
        let text = self.quantified();
        self.commit(text, "+")
    }

    /// Rendered text with explicit groups applied.
    fn pending(&self) -> String {
        let mut text = self.fragment.render();
        for _ in 0..self.groups {
            text = format!("({})", text);
        }
        text
    }

    /// Pending text, auto-grouped if a quantifier would otherwise bind to
    /// its last character only.
    fn quantified(&self) -> String {
        let text = self.pending();
        if self.fragment.is_auto_groupable() {
            format!("({})", text)
        } else {
            text
        }
    }

    fn commit(self, text: String, suffix: &str) -> &'a mut PatternBuilder {
        log::debug!("Committing {:?} with quantifier {:?}", text, suffix);
        self.builder.append(&text);
        self.builder.append(suffix)
    }
}

fn check_positive(n: i32) -> Result<()> {
    if n < 0 {
        return Err(Error::NegativeCount(n));
    }
    Ok(())
}
