//! Color values and the legacy code table.
//!
//! Supports two color forms:
//!
//! - Named colors: the 16 legacy colors selected by `&0` through `&f`
//! - RGB: selected by `#rgb` or `#rrggbb`
//!
//! Both can be written back in the section-sign form used by chat clients
//! (`§c`, or `§x§r§r§g§g§b§b` for RGB).

use std::fmt;

use crate::util::rgb_to_ansi256;

/// Marker character for legacy formatting in rendered flat text.
pub const SECTION_SIGN: char = '§';

/// A true-color RGB triplet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Creates a color from its components.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses a hex color code, with or without the leading `#`.
    ///
    /// Accepts 3-digit (`f80`, expanded to `ff8800`) and 6-digit forms.
    /// Returns `None` for any other length or a non-hex digit.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        match hex.len() {
            // 3-digit hex: #rgb -> #rrggbb
            3 => {
                let r = u8::from_str_radix(&hex[0..1], 16).ok()? * 17;
                let g = u8::from_str_radix(&hex[1..2], 16).ok()? * 17;
                let b = u8::from_str_radix(&hex[2..3], 16).ok()? * 17;
                Some(Self::new(r, g, b))
            }
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                Some(Self::new(r, g, b))
            }
            _ => None,
        }
    }

    /// Six lowercase hex digits, without `#`.
    pub fn hex_digits(&self) -> String {
        format!("{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Nearest entry in the 256-color terminal palette.
    pub fn to_ansi256(&self) -> u8 {
        rgb_to_ansi256((self.r, self.g, self.b))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.hex_digits())
    }
}

/// The 16 legacy colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamedColor {
    Black,
    DarkBlue,
    DarkGreen,
    DarkAqua,
    DarkRed,
    DarkPurple,
    Gold,
    Gray,
    DarkGray,
    Blue,
    Green,
    Aqua,
    Red,
    LightPurple,
    Yellow,
    White,
}

impl NamedColor {
    /// All colors in code order (`0` through `f`).
    pub const ALL: [NamedColor; 16] = [
        NamedColor::Black,
        NamedColor::DarkBlue,
        NamedColor::DarkGreen,
        NamedColor::DarkAqua,
        NamedColor::DarkRed,
        NamedColor::DarkPurple,
        NamedColor::Gold,
        NamedColor::Gray,
        NamedColor::DarkGray,
        NamedColor::Blue,
        NamedColor::Green,
        NamedColor::Aqua,
        NamedColor::Red,
        NamedColor::LightPurple,
        NamedColor::Yellow,
        NamedColor::White,
    ];

    /// Looks up a color by its legacy code (`0`-`9`, `a`-`f`, case-insensitive).
    pub fn from_code(code: char) -> Option<Self> {
        let index = code.to_digit(16)?;
        Self::ALL.get(index as usize).copied()
    }

    /// Looks up a color by its lowercase name, e.g. `dark_red`.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim().to_lowercase();
        Self::ALL.into_iter().find(|c| c.name() == name)
    }

    /// Legacy code character.
    pub fn code(self) -> char {
        let index = Self::ALL.iter().position(|c| *c == self).unwrap_or(0);
        char::from_digit(index as u32, 16).unwrap_or('0')
    }

    /// Lowercase snake-case name used in component JSON.
    pub fn name(self) -> &'static str {
        match self {
            NamedColor::Black => "black",
            NamedColor::DarkBlue => "dark_blue",
            NamedColor::DarkGreen => "dark_green",
            NamedColor::DarkAqua => "dark_aqua",
            NamedColor::DarkRed => "dark_red",
            NamedColor::DarkPurple => "dark_purple",
            NamedColor::Gold => "gold",
            NamedColor::Gray => "gray",
            NamedColor::DarkGray => "dark_gray",
            NamedColor::Blue => "blue",
            NamedColor::Green => "green",
            NamedColor::Aqua => "aqua",
            NamedColor::Red => "red",
            NamedColor::LightPurple => "light_purple",
            NamedColor::Yellow => "yellow",
            NamedColor::White => "white",
        }
    }

    /// Canonical RGB value of the color.
    pub fn rgb(self) -> Rgb {
        match self {
            NamedColor::Black => Rgb::new(0x00, 0x00, 0x00),
            NamedColor::DarkBlue => Rgb::new(0x00, 0x00, 0xaa),
            NamedColor::DarkGreen => Rgb::new(0x00, 0xaa, 0x00),
            NamedColor::DarkAqua => Rgb::new(0x00, 0xaa, 0xaa),
            NamedColor::DarkRed => Rgb::new(0xaa, 0x00, 0x00),
            NamedColor::DarkPurple => Rgb::new(0xaa, 0x00, 0xaa),
            NamedColor::Gold => Rgb::new(0xff, 0xaa, 0x00),
            NamedColor::Gray => Rgb::new(0xaa, 0xaa, 0xaa),
            NamedColor::DarkGray => Rgb::new(0x55, 0x55, 0x55),
            NamedColor::Blue => Rgb::new(0x55, 0x55, 0xff),
            NamedColor::Green => Rgb::new(0x55, 0xff, 0x55),
            NamedColor::Aqua => Rgb::new(0x55, 0xff, 0xff),
            NamedColor::Red => Rgb::new(0xff, 0x55, 0x55),
            NamedColor::LightPurple => Rgb::new(0xff, 0x55, 0xff),
            NamedColor::Yellow => Rgb::new(0xff, 0xff, 0x55),
            NamedColor::White => Rgb::new(0xff, 0xff, 0xff),
        }
    }

    /// Index in the 16-color terminal palette.
    ///
    /// Legacy codes order colors as RGB bit patterns while terminals use
    /// BGR, so the dark half swaps red and blue.
    pub fn ansi_index(self) -> u8 {
        match self {
            NamedColor::Black => 0,
            NamedColor::DarkRed => 1,
            NamedColor::DarkGreen => 2,
            NamedColor::Gold => 3,
            NamedColor::DarkBlue => 4,
            NamedColor::DarkPurple => 5,
            NamedColor::DarkAqua => 6,
            NamedColor::Gray => 7,
            NamedColor::DarkGray => 8,
            NamedColor::Red => 9,
            NamedColor::Green => 10,
            NamedColor::Yellow => 11,
            NamedColor::Blue => 12,
            NamedColor::LightPurple => 13,
            NamedColor::Aqua => 14,
            NamedColor::White => 15,
        }
    }
}

/// A text color: one of the legacy colors or an arbitrary RGB value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Named(NamedColor),
    Rgb(Rgb),
}

impl Color {
    /// RGB value, resolving named colors to their canonical triplet.
    pub fn rgb(&self) -> Rgb {
        match self {
            Color::Named(named) => named.rgb(),
            Color::Rgb(rgb) => *rgb,
        }
    }

    /// Name used in component JSON: `red` or `#ff5555`.
    pub fn json_name(&self) -> String {
        match self {
            Color::Named(named) => named.name().to_string(),
            Color::Rgb(rgb) => rgb.to_string(),
        }
    }

    /// Appends the section-sign form of the color to `out`.
    ///
    /// Named colors take two characters (`§c`). RGB colors use the extended
    /// form `§x§r§r§g§g§b§b`.
    pub fn write_legacy(&self, out: &mut String) {
        match self {
            Color::Named(named) => {
                out.push(SECTION_SIGN);
                out.push(named.code());
            }
            Color::Rgb(rgb) => {
                out.push(SECTION_SIGN);
                out.push('x');
                for digit in rgb.hex_digits().chars() {
                    out.push(SECTION_SIGN);
                    out.push(digit);
                }
            }
        }
    }

    /// Terminal color for `console` styling.
    pub fn to_console(&self) -> console::Color {
        match self {
            Color::Named(named) => console::Color::Color256(named.ansi_index()),
            Color::Rgb(rgb) => console::Color::Color256(rgb.to_ansi256()),
        }
    }
}

impl From<NamedColor> for Color {
    fn from(named: NamedColor) -> Self {
        Color::Named(named)
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::Rgb(rgb)
    }
}

/// A text decoration toggled by a legacy code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// `&k`
    Obfuscated,
    /// `&l`
    Bold,
    /// `&m`
    Strikethrough,
    /// `&n`
    Underlined,
    /// `&o`
    Italic,
}

impl Format {
    /// All formats in code order.
    pub const ALL: [Format; 5] = [
        Format::Obfuscated,
        Format::Bold,
        Format::Strikethrough,
        Format::Underlined,
        Format::Italic,
    ];

    /// Legacy code character.
    pub fn code(self) -> char {
        match self {
            Format::Obfuscated => 'k',
            Format::Bold => 'l',
            Format::Strikethrough => 'm',
            Format::Underlined => 'n',
            Format::Italic => 'o',
        }
    }
}

/// One entry of the 22-symbol legacy table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LegacyCode {
    Color(NamedColor),
    Format(Format),
    Reset,
}

impl LegacyCode {
    /// Resolves a code character, case-insensitively.
    pub fn from_char(code: char) -> Option<Self> {
        let code = code.to_ascii_lowercase();
        if code == 'r' {
            return Some(LegacyCode::Reset);
        }
        if let Some(format) = Format::ALL.into_iter().find(|f| f.code() == code) {
            return Some(LegacyCode::Format(format));
        }
        NamedColor::from_code(code).map(LegacyCode::Color)
    }

    /// Code character.
    pub fn code(self) -> char {
        match self {
            LegacyCode::Color(color) => color.code(),
            LegacyCode::Format(format) => format.code(),
            LegacyCode::Reset => 'r',
        }
    }

    /// Appends the two-character section-sign form to `out`.
    pub fn write_legacy(self, out: &mut String) {
        out.push(SECTION_SIGN);
        out.push(self.code());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chatmark_parser::LEGACY_CODES;

    #[test]
    fn every_parser_code_resolves() {
        for code in LEGACY_CODES {
            let resolved = LegacyCode::from_char(code).unwrap();
            assert_eq!(resolved.code(), code);
        }
    }

    #[test]
    fn unknown_code() {
        assert_eq!(LegacyCode::from_char('g'), None);
        assert_eq!(LegacyCode::from_char('x'), None);
    }

    #[test]
    fn code_kinds() {
        assert_eq!(
            LegacyCode::from_char('c'),
            Some(LegacyCode::Color(NamedColor::Red))
        );
        assert_eq!(
            LegacyCode::from_char('L'),
            Some(LegacyCode::Format(Format::Bold))
        );
        assert_eq!(LegacyCode::from_char('r'), Some(LegacyCode::Reset));
    }

    #[test]
    fn named_color_codes_round_trip() {
        for color in NamedColor::ALL {
            assert_eq!(NamedColor::from_code(color.code()), Some(color));
            assert_eq!(NamedColor::from_name(color.name()), Some(color));
        }
        assert_eq!(NamedColor::Gold.code(), '6');
        assert_eq!(NamedColor::White.code(), 'f');
    }

    #[test]
    fn hex_parsing() {
        assert_eq!(Rgb::from_hex("#fff"), Some(Rgb::new(255, 255, 255)));
        assert_eq!(Rgb::from_hex("abc"), Some(Rgb::new(0xaa, 0xbb, 0xcc)));
        assert_eq!(Rgb::from_hex("ff6b35"), Some(Rgb::new(255, 107, 53)));
        assert_eq!(Rgb::from_hex("ff6b3"), None);
        assert_eq!(Rgb::from_hex("gggggg"), None);
        assert_eq!(Rgb::from_hex("ééé"), None);
    }

    #[test]
    fn rgb_display() {
        assert_eq!(Rgb::new(255, 8, 0).to_string(), "#ff0800");
    }

    #[test]
    fn legacy_forms() {
        let mut out = String::new();
        Color::Named(NamedColor::Aqua).write_legacy(&mut out);
        assert_eq!(out, "§b");

        let mut out = String::new();
        Color::Rgb(Rgb::new(0xaa, 0xbb, 0xcc)).write_legacy(&mut out);
        assert_eq!(out, "§x§a§a§b§b§c§c");

        let mut out = String::new();
        LegacyCode::Reset.write_legacy(&mut out);
        assert_eq!(out, "§r");
    }

    #[test]
    fn json_names() {
        assert_eq!(Color::Named(NamedColor::DarkRed).json_name(), "dark_red");
        assert_eq!(Color::Rgb(Rgb::new(1, 2, 3)).json_name(), "#010203");
    }

    #[test]
    fn console_colors() {
        assert_eq!(
            Color::Named(NamedColor::DarkRed).to_console(),
            console::Color::Color256(1)
        );
        assert_eq!(
            Color::Rgb(Rgb::new(255, 0, 0)).to_console(),
            console::Color::Color256(196)
        );
    }
}
