//! The generic component contract.
//!
//! Concrete widgets are client code: they fulfill the narrow [`Widget`]
//! capability trait (supply natural size, draw themselves, optionally
//! intercept keys) and the shared pipeline invokes them through this
//! interface only. Everything else — ownership, dirty tracking, the
//! compute/draw passes, focus — lives in [`crate::core::tree`].

use std::any::Any;

use crate::core::layout::{Layout, Position, SizeOverrides};
use crate::core::style::Style;
use crate::core::surface::Surface;
use crate::error::Result;

/// Logical key names the core consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyName {
    Up,
    Down,
    Left,
    Right,
    Return,
    Tab,
    Escape,
    Backspace,
    Delete,
    Home,
    End,
    Char,
}

/// One decoded keystroke: printable text (if any) plus a key descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyInput {
    pub text: Option<char>,
    pub name: KeyName,
    pub ctrl: bool,
}

impl KeyInput {
    pub fn named(name: KeyName) -> Self {
        Self {
            text: None,
            name,
            ctrl: false,
        }
    }

    pub fn char(c: char) -> Self {
        Self {
            text: Some(c),
            name: KeyName::Char,
            ctrl: false,
        }
    }

    pub fn ctrl(c: char) -> Self {
        Self {
            text: Some(c),
            name: KeyName::Char,
            ctrl: true,
        }
    }
}

/// What a widget produced from a keystroke; the tree stamps the node id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventKind {
    /// Button activated.
    Pressed,
    /// List cursor moved.
    Changed { index: usize, item: String },
    /// List entry selected.
    Selected { index: usize, item: String },
    /// Input committed its value.
    Submitted { value: String },
}

/// A widget event surfaced to the driver's event sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiEvent {
    pub id: String,
    pub kind: EventKind,
}

/// Outcome of offering a keystroke to a widget.
///
/// An unconsumed key bubbles to the parent component; a widget may both emit
/// events and keep bubbling (a list reacting to up/down does).
#[derive(Debug, Default)]
pub struct KeyOutcome {
    pub consumed: bool,
    pub events: Vec<EventKind>,
}

impl KeyOutcome {
    pub fn bubble() -> Self {
        Self::default()
    }

    pub fn consumed() -> Self {
        Self {
            consumed: true,
            events: Vec::new(),
        }
    }

    pub fn emit(kind: EventKind) -> Self {
        Self {
            consumed: true,
            events: vec![kind],
        }
    }

    pub fn emit_and_bubble(kind: EventKind) -> Self {
        Self {
            consumed: false,
            events: vec![kind],
        }
    }
}

/// Value snapshot of a widget's declared reactive fields.
///
/// Captured before each frame and compared by value against the previous
/// frame's capture; a difference marks exactly that node dirty. No runtime
/// field enumeration is involved — each widget states its tracked fields
/// explicitly in [`Widget::snapshot`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Snapshot(Vec<SnapshotField>);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapshotField {
    Bool(bool),
    Int(i64),
    Text(String),
    Items(Vec<String>),
}

impl Snapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bool(mut self, value: bool) -> Self {
        self.0.push(SnapshotField::Bool(value));
        self
    }

    pub fn int(mut self, value: i64) -> Self {
        self.0.push(SnapshotField::Int(value));
        self
    }

    pub fn text(mut self, value: &str) -> Self {
        self.0.push(SnapshotField::Text(value.to_string()));
        self
    }

    pub fn items(mut self, values: &[String]) -> Self {
        self.0.push(SnapshotField::Items(values.to_vec()));
        self
    }
}

/// The capability contract every concrete widget implements.
pub trait Widget: Any {
    /// Kind name, used as the theme lookup key.
    fn kind(&self) -> &'static str;

    /// Whether this kind accepts focus by default.
    fn default_focusable(&self) -> bool {
        false
    }

    /// The kind's authored default box model.
    fn default_position(&self) -> Position {
        Position::new()
    }

    /// Content-derived substitutes for auto (≤ 0) size specs, resolved before
    /// the shared layout step. The default accepts whatever the engine
    /// resolves (zero for auto specs).
    fn natural_size(&mut self, _position: &Position, _style: &Style, _parent: &Layout) -> SizeOverrides {
        SizeOverrides::default()
    }

    /// Paint the widget's content into the frame surface using the effective
    /// style and the layout computed this frame. Chrome (background fill,
    /// border, label) is painted by the pipeline before this runs.
    fn draw(&mut self, surface: &mut Surface, layout: &mut Layout, style: &Style) -> Result<()>;

    /// Intercept a keystroke. Default: bubble to the parent untouched.
    fn on_key(&mut self, _input: &KeyInput) -> KeyOutcome {
        KeyOutcome::bubble()
    }

    /// Fired exactly once on the unfocused → focused transition.
    fn on_focus(&mut self) {}

    /// Fired exactly once on the focused → unfocused transition.
    fn on_blur(&mut self) {}

    /// Terminal cursor cell while this widget holds focus, if it wants one.
    fn cursor_pos(&self, _layout: &Layout) -> Option<(u16, u16)> {
        None
    }

    /// Capture the declared reactive fields.
    fn snapshot(&self) -> Snapshot {
        Snapshot::new()
    }

    /// Deep, independently owned copy.
    fn boxed_clone(&self) -> Box<dyn Widget>;

    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// A component ready to be attached to the tree: a widget plus identity,
/// capability flags and optional style/position overrides.
///
/// Position and capability defaults come from the widget kind; styles left
/// unset are resolved from the tree's theme at attach time.
pub struct Component {
    pub(crate) id: String,
    pub(crate) label: String,
    pub(crate) widget: Box<dyn Widget>,
    pub(crate) position: Position,
    pub(crate) style: Option<Style>,
    pub(crate) focus_style: Option<Style>,
    pub(crate) focusable: bool,
    pub(crate) focus_trap: bool,
}

impl Component {
    pub fn new(id: impl Into<String>, widget: impl Widget) -> Self {
        let position = widget.default_position();
        let focusable = widget.default_focusable();
        Self {
            id: id.into(),
            label: String::new(),
            widget: Box::new(widget),
            position,
            style: None,
            focus_style: None,
            focusable,
            focus_trap: false,
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = Some(style);
        self
    }

    pub fn focus_style(mut self, style: Style) -> Self {
        self.focus_style = Some(style);
        self
    }

    pub fn focusable(mut self, focusable: bool) -> Self {
        self.focusable = focusable;
        self
    }

    pub fn focus_trap(mut self, focus_trap: bool) -> Self {
        self.focus_trap = focus_trap;
        self
    }
}

impl Clone for Component {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            label: self.label.clone(),
            widget: self.widget.boxed_clone(),
            position: self.position.clone(),
            style: self.style.clone(),
            focus_style: self.focus_style.clone(),
            focusable: self.focusable,
            focus_trap: self.focus_trap,
        }
    }
}
