//! Terminal colors, or none of them when output is not a terminal

use std::io::IsTerminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub red: &'static str,
    pub yellow: &'static str,
    pub green: &'static str,
    pub blue: &'static str,
    pub white: &'static str,
    pub none: &'static str,
}

impl Palette {
    pub const COLORED: Palette = Palette {
        red: "\x1b[0;91;1m",
        yellow: "\x1b[0;93;1m",
        green: "\x1b[0;92;1m",
        blue: "\x1b[0;96;1m",
        white: "\x1b[0;1m",
        none: "\x1b[0m",
    };

    pub const PLAIN: Palette = Palette {
        red: "",
        yellow: "",
        green: "",
        blue: "",
        white: "",
        none: "",
    };
}

impl Palette {
    /// Colors for standard output, unless disabled or redirected
    pub fn for_stdout(no_color: bool) -> Self {
        Self::choose(no_color, std::io::stdout().is_terminal())
    }

    fn choose(no_color: bool, terminal: bool) -> Self {
        if no_color || !terminal {
            Palette::PLAIN
        } else {
            Palette::COLORED
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Palette::COLORED
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn colors_only_on_terminals() {
        assert_eq!(Palette::choose(false, true), Palette::COLORED);
        assert_eq!(Palette::choose(false, false), Palette::PLAIN);
        assert_eq!(Palette::choose(true, true), Palette::PLAIN);
        assert_eq!(Palette::choose(true, false), Palette::PLAIN);
    }
}
