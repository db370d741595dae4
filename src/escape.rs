use std::fmt;

/// A predefined backslash escape such as `\d` or `\s`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct EscapeSequence {
    symbol: char,
}

impl EscapeSequence {
    pub const WHITESPACE: EscapeSequence = EscapeSequence::new('s');
    pub const NOT_WHITESPACE: EscapeSequence = EscapeSequence::new('S');
    pub const FORMFEED: EscapeSequence = EscapeSequence::new('f');
    pub const LINEFEED: EscapeSequence = EscapeSequence::new('n');
    pub const CARRIAGE_RETURN: EscapeSequence = EscapeSequence::new('r');
    pub const TAB: EscapeSequence = EscapeSequence::new('t');
    pub const VERTICAL_TAB: EscapeSequence = EscapeSequence::new('v');
    pub const DIGIT: EscapeSequence = EscapeSequence::new('d');
    pub const NOT_DIGIT: EscapeSequence = EscapeSequence::new('D');
    pub const ALPHANUMERIC: EscapeSequence = EscapeSequence::new('w');
    pub const NOT_ALPHANUMERIC: EscapeSequence = EscapeSequence::new('W');

    /// Every escape in the catalog, paired with the name the CLI accepts.
    pub const ALL: [(&'static str, EscapeSequence); 11] = [
        ("whitespace", Self::WHITESPACE),
        ("not-whitespace", Self::NOT_WHITESPACE),
        ("formfeed", Self::FORMFEED),
        ("linefeed", Self::LINEFEED),
        ("carriage-return", Self::CARRIAGE_RETURN),
        ("tab", Self::TAB),
        ("vertical-tab", Self::VERTICAL_TAB),
        ("digit", Self::DIGIT),
        ("not-digit", Self::NOT_DIGIT),
        ("alphanumeric", Self::ALPHANUMERIC),
        ("not-alphanumeric", Self::NOT_ALPHANUMERIC),
    ];

    const fn new(symbol: char) -> Self {
        EscapeSequence { symbol }
    }

    pub fn symbol(&self) -> char {
        self.symbol
    }

    pub fn from_name(name: &str) -> Option<EscapeSequence> {
        Self::ALL
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, escape)| *escape)
    }
}

impl fmt::Display for EscapeSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\\{}", self.symbol)
    }
}
