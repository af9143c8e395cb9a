//! Input events.
//!
//! Crate-level event types plus conversions from crossterm's terminal
//! events, so hosts reading a terminal can feed the table directly.

use crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

/// Modifier keys held during an event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Modifiers {
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
}

impl Modifiers {
    /// No modifiers.
    pub const NONE: Self = Self {
        ctrl: false,
        shift: false,
        alt: false,
    };

    /// Whether any modifier is held.
    pub fn any(&self) -> bool {
        self.ctrl || self.shift || self.alt
    }
}

impl From<KeyModifiers> for Modifiers {
    fn from(m: KeyModifiers) -> Self {
        Self {
            ctrl: m.contains(KeyModifiers::CONTROL),
            shift: m.contains(KeyModifiers::SHIFT),
            alt: m.contains(KeyModifiers::ALT),
        }
    }
}

/// A position in cells, relative to the component's area.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Position {
    pub x: u16,
    pub y: u16,
}

impl Position {
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

/// A click inside the component's area.
#[derive(Debug, Clone, Copy)]
pub struct ClickEvent {
    pub position: Position,
    pub modifiers: Modifiers,
}

/// Scroll direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Up,
    Down,
}

/// A scroll event inside the component's area.
#[derive(Debug, Clone, Copy)]
pub struct ScrollEvent {
    pub direction: ScrollDirection,
    /// Number of rows to scroll.
    pub amount: u16,
    pub position: Position,
}

/// Whether a component acted on an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    Consumed,
    Ignored,
}

/// Interpret a crossterm mouse event as a primary click.
pub fn click_from_mouse(event: &MouseEvent) -> Option<ClickEvent> {
    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(ClickEvent {
            position: Position::new(event.column, event.row),
            modifiers: event.modifiers.into(),
        }),
        _ => None,
    }
}

/// Interpret a crossterm mouse event as a one-row scroll.
pub fn scroll_from_mouse(event: &MouseEvent) -> Option<ScrollEvent> {
    let direction = match event.kind {
        MouseEventKind::ScrollUp => ScrollDirection::Up,
        MouseEventKind::ScrollDown => ScrollDirection::Down,
        _ => return None,
    };
    Some(ScrollEvent {
        direction,
        amount: 1,
        position: Position::new(event.column, event.row),
    })
}

/// Whether the key activates the focused element (Enter or Space, the
/// keyboard counterpart of a header click).
pub fn is_activate(event: &KeyEvent) -> bool {
    matches!(event.code, KeyCode::Enter | KeyCode::Char(' '))
}
