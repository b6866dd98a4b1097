//! Closed set of ANSI colours.  No external deps.
//!
//! Unrecognised names degrade to [`Color::None`] on purpose: styling is
//! optional decoration and a typo should never abort a render.

use std::fmt;

/// One of the eight classic 3-bit terminal colours, or no colour at all.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Color {
    #[default]
    None,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

/// Escape sequence that restores the terminal's default attributes.
pub const RESET: &str = "\x1b[0m";

/// Cycling order for pie sectors (reset excluded).
pub const PALETTE: [Color; 8] = [
    Color::Black,
    Color::Red,
    Color::Green,
    Color::Yellow,
    Color::Blue,
    Color::Magenta,
    Color::Cyan,
    Color::White,
];

impl Color {
    /// Look a colour up by name.  Anything unrecognised maps to `None`.
    #[must_use]
    pub fn from_name(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "black" => Self::Black,
            "red" => Self::Red,
            "green" => Self::Green,
            "yellow" => Self::Yellow,
            "blue" => Self::Blue,
            "magenta" => Self::Magenta,
            "cyan" => Self::Cyan,
            "white" => Self::White,
            _ => Self::None,
        }
    }

    /// The escape sequence that starts this colour (empty for `None`).
    #[inline]
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Black => "\x1b[30m",
            Self::Red => "\x1b[31m",
            Self::Green => "\x1b[32m",
            Self::Yellow => "\x1b[33m",
            Self::Blue => "\x1b[34m",
            Self::Magenta => "\x1b[35m",
            Self::Cyan => "\x1b[36m",
            Self::White => "\x1b[37m",
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_none(self) -> bool {
        matches!(self, Self::None)
    }

    /// Names accepted by [`Color::from_name`], in palette order.
    #[must_use]
    pub const fn names() -> [&'static str; 8] {
        [
            "black", "red", "green", "yellow", "blue", "magenta", "cyan", "white",
        ]
    }
}

impl From<&str> for Color {
    #[inline]
    fn from(s: &str) -> Self {
        Self::from_name(s)
    }
}

impl From<&String> for Color {
    #[inline]
    fn from(s: &String) -> Self {
        Self::from_name(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Wrap `text` in colour + reset, or pass it through untouched for `None`.
#[inline]
#[must_use]
pub fn colorize(c: Color, text: &str) -> String {
    if c.is_none() {
        text.to_owned()
    } else {
        format!("{}{text}{RESET}", c.code())
    }
}

// --- Tests ---

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_names_resolve() {
        assert_eq!(Color::from_name("red"), Color::Red);
        assert_eq!(Color::from_name("  Cyan "), Color::Cyan);
    }

    #[test]
    fn unknown_name_is_silently_none() {
        assert_eq!(Color::from_name("chartreuse"), Color::None);
        assert_eq!(Color::from_name(""), Color::None);
    }

    #[test]
    fn none_emits_no_escapes() {
        assert_eq!(colorize(Color::None, "x"), "x");
        assert_eq!(colorize(Color::Green, "x"), "\x1b[32mx\x1b[0m");
    }

    #[test]
    fn palette_cycles_without_reset() {
        assert_eq!(PALETTE.len(), 8);
        assert!(PALETTE.iter().all(|c| !c.is_none()));
        assert_eq!(PALETTE[9 % PALETTE.len()], Color::Red);
    }
}
