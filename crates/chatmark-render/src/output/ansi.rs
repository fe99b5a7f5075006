use crate::style::StyledSegment;

/// Whether terminal output carries escape sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorChoice {
    /// Follow `console`'s detection of the terminal and `NO_COLOR`.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    fn enabled(self) -> bool {
        match self {
            ColorChoice::Auto => console::colors_enabled(),
            ColorChoice::Always => true,
            ColorChoice::Never => false,
        }
    }
}

/// Renders segments for a terminal.
///
/// Legacy colors use their 16-color palette entries and RGB colors the
/// nearest 256-color entry. With colors disabled the result equals
/// [`to_plain`](crate::to_plain).
pub fn to_ansi(segments: &[StyledSegment], choice: ColorChoice) -> String {
    let enabled = choice.enabled();
    let mut out = String::new();

    for segment in segments.iter().filter(|s| !s.text.is_empty()) {
        if enabled && !segment.style.is_plain() {
            let styled = segment
                .style
                .to_console()
                .force_styling(true)
                .apply_to(segment.text.as_str());
            out.push_str(&styled.to_string());
        } else {
            out.push_str(&segment.text);
        }
    }

    out
}
