//! Styles accumulated by color nodes and carried by rendered segments.
//!
//! A [`Style`] is a color plus five format flags. The styled renderer keeps
//! one running style while walking a template; every segment it emits gets a
//! copy, so later codes never reach back into earlier segments.
//!
//! ```rust
//! use chatmark_render::style::{Format, LegacyCode, NamedColor, Style};
//!
//! let mut style = Style::new();
//! style.apply_code(LegacyCode::Color(NamedColor::Red));
//! style.apply_code(LegacyCode::Format(Format::Bold));
//! assert!(style.bold);
//!
//! style.apply_code(LegacyCode::Reset);
//! assert!(style.is_plain());
//! ```

mod color;
mod segment;

pub use color::{Color, Format, LegacyCode, NamedColor, Rgb, SECTION_SIGN};
pub use segment::{ClickAction, StyledSegment};

/// Color and format flags for a run of text.
///
/// The default style has no color and no flags; `&r` returns to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Style {
    pub color: Option<Color>,
    pub bold: bool,
    pub italic: bool,
    pub underlined: bool,
    pub strikethrough: bool,
    pub obfuscated: bool,
}

impl Style {
    /// Creates the default style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the color.
    pub fn color(mut self, color: impl Into<Color>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Turns on bold.
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Turns on italic.
    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    /// Turns on underline.
    pub fn underlined(mut self) -> Self {
        self.underlined = true;
        self
    }

    /// Turns on strikethrough.
    pub fn strikethrough(mut self) -> Self {
        self.strikethrough = true;
        self
    }

    /// Turns on obfuscation.
    pub fn obfuscated(mut self) -> Self {
        self.obfuscated = true;
        self
    }

    /// Returns true if no color and no flag is set.
    pub fn is_plain(&self) -> bool {
        *self == Self::default()
    }

    /// Reports whether a format flag is on.
    pub fn has(&self, format: Format) -> bool {
        match format {
            Format::Obfuscated => self.obfuscated,
            Format::Bold => self.bold,
            Format::Strikethrough => self.strikethrough,
            Format::Underlined => self.underlined,
            Format::Italic => self.italic,
        }
    }

    /// Sets a format flag.
    pub fn set(&mut self, format: Format, on: bool) {
        let flag = match format {
            Format::Obfuscated => &mut self.obfuscated,
            Format::Bold => &mut self.bold,
            Format::Strikethrough => &mut self.strikethrough,
            Format::Underlined => &mut self.underlined,
            Format::Italic => &mut self.italic,
        };
        *flag = on;
    }

    /// Active format flags, in code order.
    pub fn formats(&self) -> impl Iterator<Item = Format> + '_ {
        Format::ALL.into_iter().filter(move |f| self.has(*f))
    }

    /// Folds a legacy code into the style.
    ///
    /// Colors replace the color and keep the flags, formats switch their
    /// flag on, and reset clears everything.
    pub fn apply_code(&mut self, code: LegacyCode) {
        match code {
            LegacyCode::Color(named) => self.color = Some(Color::Named(named)),
            LegacyCode::Format(format) => self.set(format, true),
            LegacyCode::Reset => *self = Self::default(),
        }
    }

    /// Builds the equivalent terminal style.
    ///
    /// Obfuscated text has no terminal counterpart and is shown blinking.
    pub fn to_console(&self) -> console::Style {
        let mut style = console::Style::new();
        if let Some(color) = self.color {
            style = style.fg(color.to_console());
        }
        if self.bold {
            style = style.bold();
        }
        if self.italic {
            style = style.italic();
        }
        if self.underlined {
            style = style.underlined();
        }
        if self.strikethrough {
            style = style.strikethrough();
        }
        if self.obfuscated {
            style = style.blink();
        }
        style
    }
}
