use super::Style;

/// What happens when a segment is clicked.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ClickAction {
    OpenUrl(String),
    RunCommand(String),
    SuggestCommand(String),
    CopyToClipboard(String),
}

impl ClickAction {
    /// Action name used in component JSON.
    pub fn action_name(&self) -> &'static str {
        match self {
            ClickAction::OpenUrl(_) => "open_url",
            ClickAction::RunCommand(_) => "run_command",
            ClickAction::SuggestCommand(_) => "suggest_command",
            ClickAction::CopyToClipboard(_) => "copy_to_clipboard",
        }
    }

    /// The URL, command or text the action carries.
    pub fn value(&self) -> &str {
        match self {
            ClickAction::OpenUrl(v)
            | ClickAction::RunCommand(v)
            | ClickAction::SuggestCommand(v)
            | ClickAction::CopyToClipboard(v) => v,
        }
    }
}

/// A run of text sharing one style snapshot.
///
/// Segments are produced fresh by every styled render; changing one never
/// affects the template it came from. Bindings receive a `&mut
/// StyledSegment` pre-filled with the current style and may set the text and
/// any of the interaction fields.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StyledSegment {
    pub text: String,
    pub style: Style,
    pub click: Option<ClickAction>,
    /// Tooltip text shown on hover.
    pub hover: Option<String>,
    /// Text inserted into the chat input on shift-click.
    pub insertion: Option<String>,
}

impl StyledSegment {
    /// Creates a segment with no interaction metadata.
    pub fn new(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
            click: None,
            hover: None,
            insertion: None,
        }
    }

    /// Sets the click action.
    pub fn with_click(mut self, action: ClickAction) -> Self {
        self.click = Some(action);
        self
    }

    /// Sets the hover tooltip.
    pub fn with_hover(mut self, hover: impl Into<String>) -> Self {
        self.hover = Some(hover.into());
        self
    }

    /// Sets the shift-click insertion.
    pub fn with_insertion(mut self, insertion: impl Into<String>) -> Self {
        self.insertion = Some(insertion.into());
        self
    }

    /// Returns true if the segment carries click, hover or insertion data.
    pub fn is_interactive(&self) -> bool {
        self.click.is_some() || self.hover.is_some() || self.insertion.is_some()
    }
}
