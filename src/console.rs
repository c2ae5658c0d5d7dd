//! User-facing status messages
//!
//! Diagnostics go through `tracing`; these are the messages a person running the
//! generator is expected to read.

use owo_colors::{AnsiColors, OwoColorize, Stream};

/// The colors messages can be dyed with
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Color {
    Gray,
    Red,
    Green,
    Yellow,
    Blue,
    Purple,
    White,
    Black,
    #[default]
    Default,
}

impl Color {
    /// Look up a color by name, falling back to the default color for unknown names
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "gray" => Self::Gray,
            "red" => Self::Red,
            "green" => Self::Green,
            "yellow" => Self::Yellow,
            "blue" => Self::Blue,
            "purple" => Self::Purple,
            "white" => Self::White,
            "black" => Self::Black,
            _ => Self::Default,
        }
    }

    fn ansi(self) -> AnsiColors {
        match self {
            Self::Gray => AnsiColors::BrightBlack,
            Self::Red => AnsiColors::BrightRed,
            Self::Green => AnsiColors::BrightGreen,
            Self::Yellow => AnsiColors::BrightYellow,
            Self::Blue => AnsiColors::BrightBlue,
            Self::Purple => AnsiColors::BrightMagenta,
            Self::White => AnsiColors::BrightWhite,
            Self::Black => AnsiColors::Black,
            Self::Default => AnsiColors::Default,
        }
    }
}

impl From<&str> for Color {
    fn from(name: &str) -> Self {
        Self::from_name(name)
    }
}

/// Dye the message bold in the given color, regardless of the output stream
pub fn paint(color: impl Into<Color>, message: &str) -> String {
    message.color(color.into().ansi()).bold().to_string()
}

fn dye(stream: Stream, color: Color, message: &str) -> String {
    message
        .if_supports_color(stream, |s| paint(color, s))
        .to_string()
}

/// Print an informational message to stdout
pub fn info(message: &str) {
    println!("{}", dye(Stream::Stdout, Color::Default, message));
}

/// Print an informational message to stdout without any styling
pub fn plain(message: &str) {
    println!("{message}");
}

/// Print a success message to stdout
pub fn success(message: &str) {
    println!(
        "{}",
        dye(Stream::Stdout, Color::Green, &format!("[✔] {message}"))
    );
}

/// Print a warning to stdout
pub fn warn(message: &str) {
    println!(
        "{}",
        dye(Stream::Stdout, Color::Yellow, &format!("[!] {message}"))
    );
}

/// Print an error to stderr
pub fn error(message: &str) {
    eprintln!(
        "{}",
        dye(Stream::Stderr, Color::Red, &format!("[✗] {message}"))
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_codes() {
        let table = [
            ("gray", 90),
            ("red", 91),
            ("green", 92),
            ("yellow", 93),
            ("blue", 94),
            ("purple", 95),
            ("white", 97),
            ("black", 30),
            ("default", 39),
        ];

        for (name, code) in table {
            let painted = paint(name, "message");
            assert!(painted.contains(&format!("\x1b[{code}m")), "{name}: {painted:?}");
            assert!(painted.contains("message"));
        }
    }

    #[test]
    fn lookup_ignores_case() {
        assert_eq!(Color::from_name("GREEN"), Color::Green);
        assert_eq!(Color::from_name("Purple"), Color::Purple);
    }

    #[test]
    fn unknown_color_falls_back_to_default() {
        assert_eq!(Color::from_name("magenta"), Color::Default);
        assert_eq!(Color::from_name(""), Color::Default);
        assert!(paint("nope", "plain").contains("\x1b[39m"));
    }

    #[test]
    fn paint_is_bold_and_reset() {
        let painted = paint(Color::Green, "[✔] done");
        assert!(painted.starts_with("\x1b[1m"));
        assert!(painted.contains("[✔] done"));
        assert!(painted.ends_with("\x1b[0m"));
    }
}
