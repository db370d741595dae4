mod builder;
mod class_range;
mod error;
mod escape;
mod escaping;
mod matchable;
mod text;

pub use builder::PatternBuilder;
pub use class_range::CharacterClassRange;
pub use error::{Error, ErrorKind, Result};
pub use escape::EscapeSequence;
pub use escaping::{escape_for_class, escape_literal};
pub use matchable::{Fragment, Matchable};

use anyhow::{anyhow, bail, Context};
use map_macro::hash_map;
use std::collections::HashMap;

#[derive(Clone, Copy)]
enum Shorthand {
    Once,
    ZeroOrOne,
    ZeroOrMore,
    OneOrMore,
}

/// Runs one command line (without the program name) and returns the built
/// pattern.
///
/// ```text
/// literal <text> [quantifier]
/// class <chars> [range]
/// range <range>
/// alt <item>...
/// escape <name> [quantifier]
/// ```
pub fn run<I>(args: I) -> anyhow::Result<String>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let command = args.next().ok_or_else(|| anyhow!("No command provided"))?;
    let rest: Vec<String> = args.collect();
    log::debug!("Command: {:?}, arguments: {:?}", command, rest);

    let mut builder = PatternBuilder::new();
    match command.as_str() {
        "literal" => {
            let text = rest.first().ok_or_else(|| anyhow!("No literal text provided"))?;
            quantify(builder.match_literal(text), rest.get(1))?;
        }
        "class" => {
            let chars = rest.first().ok_or_else(|| anyhow!("No class characters provided"))?;
            match rest.get(1) {
                Some(range) => {
                    let range = PatternBuilder::range(range)
                        .with_context(|| format!("Invalid range for class {:?}", chars))?;
                    builder.match_any_of_chars_in(chars, range).once();
                }
                None => {
                    builder.match_any_of_chars(chars).once();
                }
            }
        }
        "range" => {
            let range = rest.first().ok_or_else(|| anyhow!("No range provided"))?;
            let range = PatternBuilder::range(range)?;
            builder.match_any_of_range(range).once();
        }
        "alt" => {
            if rest.is_empty() {
                bail!("No alternatives provided");
            }
            builder.match_any_of(&rest).once();
        }
        "escape" => {
            let name = rest.first().ok_or_else(|| anyhow!("No escape name provided"))?;
            let escape = EscapeSequence::from_name(name)
                .ok_or_else(|| anyhow!("Unknown escape sequence {:?}", name))?;
            quantify(builder.match_escape(escape), rest.get(1))?;
        }
        other => bail!("Unknown command {:?}", other),
    }

    let pattern = builder.build()?;
    log::debug!("Built pattern: {:?}", pattern);
    Ok(pattern)
}

/// Applies a quantifier given as a word (`once`, `optional`, `any`, `some`)
/// or in brace form (`{n}`, `{n,m}`, `{n,}`).
fn quantify(fragment: Matchable<'_>, word: Option<&String>) -> anyhow::Result<()> {
    let words: HashMap<&str, Shorthand> = hash_map! {
        "once" => Shorthand::Once,
        "optional" => Shorthand::ZeroOrOne,
        "any" => Shorthand::ZeroOrMore,
        "some" => Shorthand::OneOrMore,
    };

    let word = match word {
        Some(word) => word.as_str(),
        None => "once",
    };
    if let Some(shorthand) = words.get(word) {
        match shorthand {
            Shorthand::Once => fragment.once(),
            Shorthand::ZeroOrOne => fragment.zero_or_one_times(),
            Shorthand::ZeroOrMore => fragment.zero_or_more_times(),
            Shorthand::OneOrMore => fragment.one_or_more_times(),
        };
        return Ok(());
    }

    let counts = word
        .strip_prefix('{')
        .and_then(|w| w.strip_suffix('}'))
        .ok_or_else(|| anyhow!("Unknown quantifier {:?}", word))?;
    let parse = |n: &str| {
        n.trim()
            .parse::<i32>()
            .with_context(|| format!("Invalid repeat count in {:?}", word))
    };

    match counts.split_once(',') {
        None => fragment.times(parse(counts)?)?,
        Some((from, "")) => fragment.at_least_times(parse(from)?)?,
        Some((from, to)) => fragment.times_between(parse(from)?, parse(to)?)?,
    };
    Ok(())
}
