use crate::{escape_for_class, escape_literal, Error, ErrorKind, EscapeSequence, Fragment, PatternBuilder};

#[test]
fn test_single_char_literal_is_never_grouped() {
    for c in ["a", "Z", "7", ".", "+", "|", "é"] {
        let once = PatternBuilder::new().match_literal(c).once().build().unwrap();
        assert_eq!(once, escape_literal(c));

        let plus = PatternBuilder::new().match_literal(c).one_or_more_times().build().unwrap();
        assert_eq!(plus, format!("{}+", escape_literal(c)));
    }
}

#[test]
fn test_multi_char_literal_is_grouped_once() {
    let cases = [
        ("ab", "(ab)?"),
        ("a.b", "(a\\.b)?"),
        ("()", "(\\(\\))?"),
        ("", "()?"),
    ];
    for (literal, expected) in cases {
        let regex = PatternBuilder::new().match_literal(literal).zero_or_one_times().build().unwrap();
        assert_eq!(regex, expected);
    }
}

#[test]
fn test_once_never_auto_groups() {
    let regex = PatternBuilder::new().match_literal("a+b").once().build().unwrap();
    assert_eq!(regex, "a\\+b");
}

#[test]
fn test_quantifier_suffixes() {
    let regex = PatternBuilder::new()
        .match_literal("a").times(3).unwrap()
        .match_literal("b").times_between(0, 2).unwrap()
        .match_literal("c").at_least_times(1).unwrap()
        .match_literal("d").zero_or_one_times()
        .match_literal("e").zero_or_more_times()
        .match_literal("f").one_or_more_times()
        .build()
        .unwrap();
    assert_eq!(regex, "a{3}b{0,2}c{1,}d?e*f+");
}

#[test]
fn test_times_between_equal_bounds() {
    let regex = PatternBuilder::new().match_literal("xy").times_between(2, 2).unwrap().build().unwrap();
    assert_eq!(regex, "(xy){2,2}");
}

#[test]
fn test_negative_counts_are_rejected() {
    let mut builder = PatternBuilder::new();
    assert_eq!(builder.match_literal("a").times(-1).unwrap_err(), Error::NegativeCount(-1));
    assert_eq!(builder.match_literal("a").at_least_times(-3).unwrap_err(), Error::NegativeCount(-3));
    assert_eq!(builder.match_literal("a").times_between(-1, 4).unwrap_err(), Error::NegativeCount(-1));
    assert_eq!(builder.build().unwrap(), "");
}

#[test]
fn test_inverted_bounds_are_rejected_without_commit() {
    let mut builder = PatternBuilder::new();
    builder.match_literal("x").once();
    let err = builder.match_literal("ab").times_between(3, 1).unwrap_err();
    assert_eq!(err, Error::InvertedBounds { from: 3, to: 1 });
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert_eq!(builder.build().unwrap(), "x");
}

#[test]
fn test_explicit_group() {
    let regex = PatternBuilder::new()
        .match_literal("a").group().one_or_more_times()
        .match_escape(EscapeSequence::DIGIT).group().once()
        .build()
        .unwrap();
    assert_eq!(regex, "(a)+(\\d)");
}

#[test]
fn test_explicit_group_composes_with_auto_grouping() {
    let regex = PatternBuilder::new().match_literal("a.").group().zero_or_more_times().build().unwrap();
    assert_eq!(regex, "((a\\.))*");
}

#[test]
fn test_atomic_fragments_are_not_auto_grouped() {
    let regex = PatternBuilder::new()
        .match_any_of_chars("abc").one_or_more_times()
        .match_escape(EscapeSequence::NOT_DIGIT).zero_or_more_times()
        .match_any_of(["x", "yz"]).zero_or_one_times()
        .match_any().times(4).unwrap()
        .build()
        .unwrap();
    assert_eq!(regex, "[abc]+\\D*(x|yz)?.{4}");
}

#[test]
fn test_pattern_fragment_groups_by_built_length() {
    let mut single = PatternBuilder::new();
    single.match_literal("a").once();
    let mut escaped = PatternBuilder::new();
    escaped.match_literal(".").once();

    let regex = PatternBuilder::new()
        .match_pattern(&single).unwrap().one_or_more_times()
        .match_pattern(&escaped).unwrap().one_or_more_times()
        .build()
        .unwrap();
    assert_eq!(regex, "a+(\\.)+");
}

#[test]
fn test_dropped_fragment_is_a_no_op() {
    let mut builder = PatternBuilder::new();
    builder.match_literal("a").once();
    drop(builder.match_literal("never"));
    assert_eq!(builder.build().unwrap(), "a");
}

#[test]
fn test_fragment_render_and_groupability() {
    let mut builder = PatternBuilder::new();
    let fragment = builder.match_literal("a|b");
    assert_eq!(fragment.fragment(), &Fragment::Literal("a|b".to_string()));
    assert_eq!(fragment.fragment().render(), "a\\|b");
    assert!(fragment.fragment().is_auto_groupable());

    assert!(!Fragment::AnyChar.is_auto_groupable());
    assert!(!Fragment::Escape(EscapeSequence::TAB).is_auto_groupable());
    assert!(!Fragment::CharacterClass("[ab]".to_string()).is_auto_groupable());
    assert!(!Fragment::Alternation("(a|b)".to_string()).is_auto_groupable());
    assert!(Fragment::Pattern("ab".to_string()).is_auto_groupable());
    assert!(!Fragment::Pattern("a".to_string()).is_auto_groupable());
}

#[test]
fn test_escape_literal() {
    assert_eq!(escape_literal("abc"), "abc");
    assert_eq!(escape_literal("/()[]{}?^$.+*|"), "\\/\\(\\)\\[\\]\\{\\}\\?\\^\\$\\.\\+\\*\\|");
    assert_eq!(escape_literal("a-b"), "a-b");
}

#[test]
fn test_escape_for_class() {
    assert_eq!(escape_for_class("/()[]-"), "\\/\\(\\)\\[\\]\\-");
    assert_eq!(escape_for_class("{}?^$.+*|"), "{}?^$.+*|");
}
