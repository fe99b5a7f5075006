//! Caller-supplied variable and function lookups.
//!
//! Templates never own their data. Each render call receives lookups that
//! map names to values:
//!
//! - [`Bindings`] for flat rendering: writes text for variables and function
//!   calls. Implemented by [`Variables`], `HashMap<String, String>` and
//!   `serde_json::Value` (dotted paths such as `{user.name}`).
//! - [`SegmentBindings`] and [`SegmentFunctions`] for styled rendering:
//!   resolve into a [`StyledSegment`] that already carries the current
//!   style. Implemented by [`StyledVariables`], [`StyledFunctions`], `()`
//!   for "nothing bound", and [`Plain`], which lifts any flat [`Bindings`].
//!
//! A lookup that returns `false` must leave its output untouched; the
//! renderer then writes the placeholder for the reference.
//!
//! # Example
//!
//! ```rust
//! use chatmark_render::{compile, Variables};
//!
//! let vars = Variables::new()
//!     .set("player", "Steve")
//!     .set_lazy("online", || 12.to_string())
//!     .function("shout", |args: &[String]| args.join(" ").to_uppercase());
//!
//! let template = compile("{player} ({online} online): {shout(hi,all)}");
//! assert_eq!(template.render(&vars), "Steve (12 online): HI ALL");
//! ```

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::functions;
use crate::style::StyledSegment;
use crate::util::{flatten_json, json_text, resolve_json_path};

/// Lazily computed text.
pub type TextFn = Arc<dyn Fn() -> String + Send + Sync>;
/// Function binding for flat rendering.
pub type FunctionFn = Arc<dyn Fn(&[String]) -> String + Send + Sync>;
/// Variable binding that fills in a styled segment.
pub type SegmentFn = Arc<dyn Fn(&mut StyledSegment) + Send + Sync>;
/// Function binding that fills in a styled segment.
pub type SegmentFunctionFn = Arc<dyn Fn(&[String], &mut StyledSegment) + Send + Sync>;

// ============================================================================
// Flat lookups
// ============================================================================

/// Variable and function lookup for flat rendering.
pub trait Bindings {
    /// Appends the value of `name` to `out`, returning false if unbound.
    fn write_variable(&self, name: &str, out: &mut String) -> bool;

    /// Appends the result of calling `name` to `out`, returning false if
    /// unbound. The default binds no functions.
    fn write_function(&self, name: &str, args: &[String], out: &mut String) -> bool {
        let _ = (name, args, out);
        false
    }
}

impl<B: Bindings + ?Sized> Bindings for &B {
    fn write_variable(&self, name: &str, out: &mut String) -> bool {
        (**self).write_variable(name, out)
    }

    fn write_function(&self, name: &str, args: &[String], out: &mut String) -> bool {
        (**self).write_function(name, args, out)
    }
}

impl Bindings for HashMap<String, String> {
    fn write_variable(&self, name: &str, out: &mut String) -> bool {
        match self.get(name) {
            Some(value) => {
                out.push_str(value);
                true
            }
            None => false,
        }
    }
}

impl Bindings for serde_json::Value {
    fn write_variable(&self, name: &str, out: &mut String) -> bool {
        match resolve_json_path(self, name) {
            Some(value) => {
                out.push_str(&json_text(value));
                true
            }
            None => false,
        }
    }
}

/// A variable value: fixed text or a supplier called at render time.
#[derive(Clone)]
pub enum Value {
    Text(String),
    Lazy(TextFn),
}

impl Value {
    /// Produces the text, calling the supplier if lazy.
    pub fn resolve(&self) -> String {
        match self {
            Value::Text(text) => text.clone(),
            Value::Lazy(supplier) => supplier(),
        }
    }

    fn write(&self, out: &mut String) {
        match self {
            Value::Text(text) => out.push_str(text),
            Value::Lazy(supplier) => out.push_str(&supplier()),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Value::Lazy(_) => f.write_str("Lazy(..)"),
        }
    }
}

/// Variable and function table for flat rendering.
///
/// Built with chained setters, the way themes are assembled:
/// `Variables::new().set("a", "1").function("f", ...)`.
#[derive(Clone, Default)]
pub struct Variables {
    values: HashMap<String, Value>,
    functions: HashMap<String, FunctionFn>,
}

impl Variables {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a table preloaded with the built-in text functions
    /// (`upper`, `lower`, `repeat`, `join`).
    pub fn with_standard_functions() -> Self {
        let mut vars = Self::new();
        for (name, function) in functions::text_functions() {
            vars.functions.insert(name.to_string(), function.clone());
        }
        vars
    }

    /// Creates a table from a JSON document, one entry per dotted path.
    pub fn from_json(value: &serde_json::Value) -> Self {
        let mut vars = Self::new();
        for (name, text) in flatten_json(value) {
            vars.insert(name, text);
        }
        vars
    }

    /// Binds `name` to fixed text.
    pub fn set(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    /// Binds `name` to a supplier called on every render.
    pub fn set_lazy<F>(mut self, name: impl Into<String>, supplier: F) -> Self
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        self.values.insert(name.into(), Value::Lazy(Arc::new(supplier)));
        self
    }

    /// Binds a function callable as `{name(args...)}`.
    pub fn function<F>(mut self, name: impl Into<String>, function: F) -> Self
    where
        F: Fn(&[String]) -> String + Send + Sync + 'static,
    {
        self.functions.insert(name.into(), Arc::new(function));
        self
    }

    /// Binds `name` to fixed text in place.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), Value::Text(value.into()));
    }

    /// Copies every variable and function of `other` into this table,
    /// replacing entries with the same name.
    pub fn merge(mut self, other: Variables) -> Self {
        self.values.extend(other.values);
        self.functions.extend(other.functions);
        self
    }

    /// Looks up a variable.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Returns true if a function is bound under `name`.
    pub fn has_function(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    /// Number of bound variables.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if no variables are bound.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl fmt::Debug for Variables {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut functions: Vec<&str> = self.functions.keys().map(String::as_str).collect();
        functions.sort_unstable();
        f.debug_struct("Variables")
            .field("values", &self.values)
            .field("functions", &functions)
            .finish()
    }
}

impl Bindings for Variables {
    fn write_variable(&self, name: &str, out: &mut String) -> bool {
        match self.values.get(name) {
            Some(value) => {
                value.write(out);
                true
            }
            None => false,
        }
    }

    fn write_function(&self, name: &str, args: &[String], out: &mut String) -> bool {
        match self.functions.get(name) {
            Some(function) => {
                out.push_str(&function(args));
                true
            }
            None => false,
        }
    }
}

// ============================================================================
// Styled lookups
// ============================================================================

/// Variable lookup for styled rendering.
pub trait SegmentBindings {
    /// Fills in `segment` for `name`, returning false if unbound.
    ///
    /// `segment` arrives with empty text and the style in effect at the
    /// reference.
    fn apply_variable(&self, name: &str, segment: &mut StyledSegment) -> bool;
}

/// Function lookup for styled rendering.
pub trait SegmentFunctions {
    /// Fills in `segment` for a call, returning false if unbound.
    fn apply_function(&self, name: &str, args: &[String], segment: &mut StyledSegment) -> bool;
}

impl SegmentBindings for () {
    fn apply_variable(&self, _name: &str, _segment: &mut StyledSegment) -> bool {
        false
    }
}

impl SegmentFunctions for () {
    fn apply_function(&self, _name: &str, _args: &[String], _segment: &mut StyledSegment) -> bool {
        false
    }
}

impl<T: SegmentBindings + ?Sized> SegmentBindings for &T {
    fn apply_variable(&self, name: &str, segment: &mut StyledSegment) -> bool {
        (**self).apply_variable(name, segment)
    }
}

impl<T: SegmentFunctions + ?Sized> SegmentFunctions for &T {
    fn apply_function(&self, name: &str, args: &[String], segment: &mut StyledSegment) -> bool {
        (**self).apply_function(name, args, segment)
    }
}

/// Adapts flat [`Bindings`] for styled rendering; resolved text becomes the
/// segment text.
///
/// ```rust
/// use chatmark_render::{compile_styled, Plain};
/// use serde_json::json;
///
/// let data = json!({"user": {"name": "Alex"}});
/// let segments = compile_styled("&aHi {user.name}").render(&Plain(&data), &());
/// assert_eq!(segments[1].text, "Alex");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Plain<B>(pub B);

impl<B: Bindings> SegmentBindings for Plain<B> {
    fn apply_variable(&self, name: &str, segment: &mut StyledSegment) -> bool {
        self.0.write_variable(name, &mut segment.text)
    }
}

impl<B: Bindings> SegmentFunctions for Plain<B> {
    fn apply_function(&self, name: &str, args: &[String], segment: &mut StyledSegment) -> bool {
        self.0.write_function(name, args, &mut segment.text)
    }
}

/// A styled variable value.
#[derive(Clone)]
pub enum SegmentValue {
    Text(String),
    Lazy(TextFn),
    /// Fills in the whole segment: text, click, hover, insertion or style.
    Segment(SegmentFn),
}

impl fmt::Debug for SegmentValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SegmentValue::Text(text) => f.debug_tuple("Text").field(text).finish(),
            SegmentValue::Lazy(_) => f.write_str("Lazy(..)"),
            SegmentValue::Segment(_) => f.write_str("Segment(..)"),
        }
    }
}

/// Variable table for styled rendering.
///
/// ```rust
/// use chatmark_render::{compile_styled, ClickAction, StyledVariables};
///
/// let vars = StyledVariables::new()
///     .set("name", "Steve")
///     .set_segment("spawn", |seg| {
///         seg.text = "[spawn]".into();
///         seg.click = Some(ClickAction::RunCommand("/spawn".into()));
///     });
///
/// let segments = compile_styled("{name}: &a{spawn}").render(&vars, &());
/// assert_eq!(segments[2].text, "[spawn]");
/// assert!(segments[2].click.is_some());
/// ```
#[derive(Debug, Clone, Default)]
pub struct StyledVariables {
    values: HashMap<String, SegmentValue>,
}

impl StyledVariables {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a table from a JSON document, one text entry per dotted path.
    pub fn from_json(value: &serde_json::Value) -> Self {
        let mut vars = Self::new();
        for (name, text) in flatten_json(value) {
            vars.insert(name, text);
        }
        vars
    }

    /// Binds `name` to fixed text.
    pub fn set(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    /// Binds `name` to a supplier called on every render.
    pub fn set_lazy<F>(mut self, name: impl Into<String>, supplier: F) -> Self
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        self.values.insert(name.into(), SegmentValue::Lazy(Arc::new(supplier)));
        self
    }

    /// Binds `name` to a closure that fills in the segment.
    pub fn set_segment<F>(mut self, name: impl Into<String>, fill: F) -> Self
    where
        F: Fn(&mut StyledSegment) + Send + Sync + 'static,
    {
        self.values.insert(name.into(), SegmentValue::Segment(Arc::new(fill)));
        self
    }

    /// Binds `name` to fixed text in place.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), SegmentValue::Text(value.into()));
    }

    /// Looks up a variable.
    pub fn get(&self, name: &str) -> Option<&SegmentValue> {
        self.values.get(name)
    }

    /// Number of bound variables.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if no variables are bound.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl SegmentBindings for StyledVariables {
    fn apply_variable(&self, name: &str, segment: &mut StyledSegment) -> bool {
        match self.values.get(name) {
            Some(SegmentValue::Text(text)) => segment.text.push_str(text),
            Some(SegmentValue::Lazy(supplier)) => segment.text.push_str(&supplier()),
            Some(SegmentValue::Segment(fill)) => fill(segment),
            None => return false,
        }
        true
    }
}

/// Function table for styled rendering.
#[derive(Clone, Default)]
pub struct StyledFunctions {
    functions: HashMap<String, SegmentFunctionFn>,
}

impl StyledFunctions {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a table with the built-in functions: the text functions plus
    /// `link`, `command`, `suggest`, `copy` and `hover`.
    pub fn standard() -> Self {
        let mut table = Self::new();
        for (name, function) in functions::text_functions() {
            let function = function.clone();
            table.functions.insert(
                name.to_string(),
                Arc::new(move |args: &[String], seg: &mut StyledSegment| {
                    seg.text.push_str(&function(args))
                }),
            );
        }
        for (name, function) in functions::segment_functions() {
            table.functions.insert(name.to_string(), function.clone());
        }
        table
    }

    /// Binds a function that fills in the segment.
    pub fn function<F>(mut self, name: impl Into<String>, function: F) -> Self
    where
        F: Fn(&[String], &mut StyledSegment) + Send + Sync + 'static,
    {
        self.functions.insert(name.into(), Arc::new(function));
        self
    }

    /// Binds a function whose result becomes the segment text.
    pub fn text_function<F>(self, name: impl Into<String>, function: F) -> Self
    where
        F: Fn(&[String]) -> String + Send + Sync + 'static,
    {
        self.function(name, move |args, seg| seg.text.push_str(&function(args)))
    }

    /// Returns true if a function is bound under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }
}

impl fmt::Debug for StyledFunctions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.functions.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_tuple("StyledFunctions").field(&names).finish()
    }
}

impl SegmentFunctions for StyledFunctions {
    fn apply_function(&self, name: &str, args: &[String], segment: &mut StyledSegment) -> bool {
        match self.functions.get(name) {
            Some(function) => {
                function(args, segment);
                true
            }
            None => false,
        }
    }
}
