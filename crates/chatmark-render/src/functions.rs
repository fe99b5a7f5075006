//! Built-in template functions.
//!
//! Text functions work in both renderers:
//!
//! | Call | Result |
//! |------|--------|
//! | `{upper(s)}` | `s` uppercased |
//! | `{lower(s)}` | `s` lowercased |
//! | `{repeat(s,n)}` | `s` repeated `n` times, at most [`MAX_REPEAT`] |
//! | `{join(sep,a,b,...)}` | `a`, `b`, ... joined with `sep` |
//!
//! Segment functions only exist for the styled renderer, each takes the
//! display text first:
//!
//! | Call | Effect |
//! |------|--------|
//! | `{link(text,url)}` | opens `url` on click |
//! | `{command(text,cmd)}` | runs `cmd` on click |
//! | `{suggest(text,cmd)}` | puts `cmd` in the chat input on click |
//! | `{copy(text,value)}` | copies `value` on click |
//! | `{hover(text,tooltip)}` | shows `tooltip` on hover |
//!
//! A missing second argument falls back to the display text.

use std::sync::Arc;

use once_cell::sync::Lazy;

use crate::bindings::{FunctionFn, SegmentFunctionFn, Variables};
use crate::style::{ClickAction, StyledSegment};

/// Upper bound on `repeat` counts.
pub const MAX_REPEAT: usize = 256;

static TEXT_FUNCTIONS: Lazy<Vec<(&'static str, FunctionFn)>> = Lazy::new(|| {
    vec![
        ("upper", Arc::new(|args: &[String]| args.concat().to_uppercase()) as FunctionFn),
        ("lower", Arc::new(|args: &[String]| args.concat().to_lowercase()) as FunctionFn),
        ("repeat", Arc::new(repeat) as FunctionFn),
        ("join", Arc::new(join) as FunctionFn),
    ]
});

static SEGMENT_FUNCTIONS: Lazy<Vec<(&'static str, SegmentFunctionFn)>> = Lazy::new(|| {
    vec![
        ("link", click_function(ClickAction::OpenUrl)),
        ("command", click_function(ClickAction::RunCommand)),
        ("suggest", click_function(ClickAction::SuggestCommand)),
        ("copy", click_function(ClickAction::CopyToClipboard)),
        (
            "hover",
            Arc::new(|args: &[String], seg: &mut StyledSegment| {
                let (text, tooltip) = text_and_value(args);
                seg.text.push_str(text);
                seg.hover = Some(tooltip.to_string());
            }) as SegmentFunctionFn,
        ),
    ]
});

/// Returns a [`Variables`] table holding only the built-in text functions.
pub fn standard_functions() -> Variables {
    Variables::with_standard_functions()
}

pub(crate) fn text_functions() -> &'static [(&'static str, FunctionFn)] {
    &TEXT_FUNCTIONS
}

pub(crate) fn segment_functions() -> &'static [(&'static str, SegmentFunctionFn)] {
    &SEGMENT_FUNCTIONS
}

fn repeat(args: &[String]) -> String {
    let text = args.first().map(String::as_str).unwrap_or_default();
    // An unparseable count repeats nothing.
    let count = args
        .get(1)
        .and_then(|n| n.trim().parse::<usize>().ok())
        .unwrap_or(0)
        .min(MAX_REPEAT);
    text.repeat(count)
}

fn join(args: &[String]) -> String {
    match args.split_first() {
        Some((separator, items)) => items.join(separator),
        None => String::new(),
    }
}

fn text_and_value(args: &[String]) -> (&str, &str) {
    let text = args.first().map(String::as_str).unwrap_or_default();
    let value = args.get(1).map(String::as_str).unwrap_or(text);
    (text, value)
}

fn click_function(action: fn(String) -> ClickAction) -> SegmentFunctionFn {
    Arc::new(move |args: &[String], seg: &mut StyledSegment| {
        let (text, value) = text_and_value(args);
        seg.text.push_str(text);
        seg.click = Some(action(value.to_string()));
    })
}
