use crate::colors::{Rgb, RESET};
use std::fmt;

/// How the colored type prefix of a log line is written
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Markup {
    #[value(name = "rich", help = "Rich-text color tags: <color=#RRGGBB>[Type]</color>")]
    #[serde(alias = "rich")]
    RichText,
    #[value(name = "ansi", help = "24-bit ANSI escape sequences")]
    Ansi,
    #[value(name = "plain", help = "No color, just the [Type] prefix")]
    Plain,
}

impl std::str::FromStr for Markup {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "rich" | "richtext" => Ok(Markup::RichText),
            "ansi" => Ok(Markup::Ansi),
            "plain" => Ok(Markup::Plain),
            _ => Err(format!("Unknown markup: {}", s)),
        }
    }
}

impl Default for Markup {
    fn default() -> Self {
        Markup::RichText
    }
}

impl Markup {
    /// ANSI when the target is a color-capable terminal, plain otherwise
    pub fn for_terminal(use_colors: bool) -> Self {
        if use_colors {
            Markup::Ansi
        } else {
            Markup::Plain
        }
    }

    pub fn detect_stderr() -> Self {
        Self::for_terminal(crate::tty::stderr_supports_colors())
    }

    /// Lazily rendered `prefix message` line
    pub fn render<'a>(self, color: &'a str, type_name: &'a str, message: &'a str) -> RenderedLine<'a> {
        RenderedLine {
            markup: self,
            color,
            type_name,
            message,
        }
    }
}

pub struct RenderedLine<'a> {
    markup: Markup,
    color: &'a str,
    type_name: &'a str,
    message: &'a str,
}

impl fmt::Display for RenderedLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.markup {
            Markup::RichText => write!(
                f,
                "<color=#{}>[{}]</color> {}",
                self.color, self.type_name, self.message
            ),
            Markup::Ansi => match Rgb::from_hex(self.color) {
                Some(rgb) => write!(
                    f,
                    "{}[{}]{} {}",
                    rgb.ansi_foreground(),
                    self.type_name,
                    RESET,
                    self.message
                ),
                // a malformed color is the caller's problem; print uncolored
                None => write!(f, "[{}] {}", self.type_name, self.message),
            },
            Markup::Plain => write!(f, "[{}] {}", self.type_name, self.message),
        }
    }
}
