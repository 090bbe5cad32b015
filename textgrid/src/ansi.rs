//! SGR escape tokens and the pattern that strips them from rendered text.

use once_cell::sync::Lazy;
use regex::Regex;

pub const RESET: &str = "\x1b[0m";
pub const DEFAULT_FG: &str = "\x1b[39m";
pub const DEFAULT_BG: &str = "\x1b[49m";

/// Builds a token from a raw numeric code, e.g. `sgr(31)` is red foreground.
pub fn sgr(code: u16) -> String {
    format!("\x1b[{code}m")
}

/// A named color as its foreground/background token pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamedColor {
    pub fg: &'static str,
    pub bg: &'static str,
}

pub const BLACK: NamedColor = NamedColor { fg: "\x1b[30m", bg: "\x1b[40m" };
pub const RED: NamedColor = NamedColor { fg: "\x1b[31m", bg: "\x1b[41m" };
pub const GREEN: NamedColor = NamedColor { fg: "\x1b[32m", bg: "\x1b[42m" };
pub const YELLOW: NamedColor = NamedColor { fg: "\x1b[33m", bg: "\x1b[43m" };
pub const BLUE: NamedColor = NamedColor { fg: "\x1b[34m", bg: "\x1b[44m" };
pub const MAGENTA: NamedColor = NamedColor { fg: "\x1b[35m", bg: "\x1b[45m" };
pub const CYAN: NamedColor = NamedColor { fg: "\x1b[36m", bg: "\x1b[46m" };
pub const WHITE: NamedColor = NamedColor { fg: "\x1b[37m", bg: "\x1b[47m" };
pub const BRIGHT_BLACK: NamedColor = NamedColor { fg: "\x1b[90m", bg: "\x1b[100m" };
pub const BRIGHT_RED: NamedColor = NamedColor { fg: "\x1b[91m", bg: "\x1b[101m" };
pub const BRIGHT_GREEN: NamedColor = NamedColor { fg: "\x1b[92m", bg: "\x1b[102m" };
pub const BRIGHT_YELLOW: NamedColor = NamedColor { fg: "\x1b[93m", bg: "\x1b[103m" };
pub const BRIGHT_BLUE: NamedColor = NamedColor { fg: "\x1b[94m", bg: "\x1b[104m" };
pub const BRIGHT_MAGENTA: NamedColor = NamedColor { fg: "\x1b[95m", bg: "\x1b[105m" };
pub const BRIGHT_CYAN: NamedColor = NamedColor { fg: "\x1b[96m", bg: "\x1b[106m" };
pub const BRIGHT_WHITE: NamedColor = NamedColor { fg: "\x1b[97m", bg: "\x1b[107m" };

static TOKEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\x1b\[((?:\d+;)*?\d+)m").expect("token pattern compiles"));

/// The compiled pattern matching any single styling token.
pub fn token_pattern() -> &'static Regex {
    &TOKEN_RE
}

/// Removes every styling token from `s`. Idempotent.
pub fn strip(s: &str) -> String {
    TOKEN_RE.replace_all(s, "").into_owned()
}

/// Width of `s` once styling tokens are removed, in chars.
pub fn visible_width(s: &str) -> usize {
    strip(s).chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sgr_builds_token() {
        assert_eq!(sgr(0), RESET);
        assert_eq!(sgr(33), YELLOW.fg);
        assert_eq!(sgr(105), BRIGHT_MAGENTA.bg);
    }

    #[test]
    fn strip_removes_tokens() {
        let styled = format!("{}ab{}cd{}", RED.fg, BLUE.bg, RESET);
        assert_eq!(strip(&styled), "abcd");
    }

    #[test]
    fn strip_is_idempotent() {
        let styled = format!("{}x{}", GREEN.fg, RESET);
        let once = strip(&styled);
        assert_eq!(strip(&once), once);
    }

    #[test]
    fn token_pattern_matches_exactly_what_strip_removes() {
        let styled = format!("{}ab{}cd{}", RED.fg, BLUE.bg, RESET);
        let matched: usize = token_pattern()
            .find_iter(&styled)
            .map(|token| token.len())
            .sum();
        assert_eq!(matched, styled.len() - strip(&styled).len());
        assert!(token_pattern().is_match(RESET));
        assert!(!token_pattern().is_match("plain text"));
    }

    #[test]
    fn strip_handles_multi_code_tokens() {
        assert_eq!(strip("\x1b[1;31mhi\x1b[0m"), "hi");
    }

    #[test]
    fn visible_width_ignores_tokens() {
        let styled = format!("{}abc{}", MAGENTA.bg, RESET);
        assert_eq!(visible_width(&styled), 3);
        assert_eq!(visible_width("abc"), 3);
        assert_eq!(visible_width(""), 0);
    }
}
