pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const NUMBERS: &str = "0123456789";
pub const SYMBOLS: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// One of the four character classes a password can draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    Lowercase,
    Uppercase,
    Numbers,
    Symbols,
}

/// Fixed evaluation order. It decides both the layout of the combined
/// character set and the order of mandatory-character insertion, so it
/// must never change.
pub const RULES: [Rule; 4] = [
    Rule::Lowercase,
    Rule::Uppercase,
    Rule::Numbers,
    Rule::Symbols,
];

impl Rule {
    pub fn subset(self) -> &'static str {
        match self {
            Rule::Lowercase => LOWERCASE,
            Rule::Uppercase => UPPERCASE,
            Rule::Numbers => NUMBERS,
            Rule::Symbols => SYMBOLS,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Rule::Lowercase => "lowercase",
            Rule::Uppercase => "uppercase",
            Rule::Numbers => "numbers",
            Rule::Symbols => "symbols",
        }
    }
}
