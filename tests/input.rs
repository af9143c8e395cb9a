use crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use trestle::input::{click_from_mouse, is_activate, scroll_from_mouse, Modifiers, ScrollDirection};

fn mouse(kind: MouseEventKind) -> MouseEvent {
    MouseEvent {
        kind,
        column: 4,
        row: 0,
        modifiers: KeyModifiers::NONE,
    }
}

#[test]
fn test_left_button_down_is_a_click() {
    let event = mouse(MouseEventKind::Down(MouseButton::Left));
    let click = click_from_mouse(&event).unwrap();
    assert_eq!(click.position.x, 4);
    assert_eq!(click.position.y, 0);
    assert_eq!(click.modifiers, Modifiers::NONE);
}

#[test]
fn test_other_buttons_are_not_clicks() {
    assert!(click_from_mouse(&mouse(MouseEventKind::Down(MouseButton::Right))).is_none());
    assert!(click_from_mouse(&mouse(MouseEventKind::Up(MouseButton::Left))).is_none());
    assert!(click_from_mouse(&mouse(MouseEventKind::Moved)).is_none());
}

#[test]
fn test_modifiers_are_carried_through() {
    let mut event = mouse(MouseEventKind::Down(MouseButton::Left));
    event.modifiers = KeyModifiers::CONTROL | KeyModifiers::SHIFT;
    let click = click_from_mouse(&event).unwrap();
    assert!(click.modifiers.ctrl);
    assert!(click.modifiers.shift);
    assert!(!click.modifiers.alt);
    assert!(click.modifiers.any());
}

#[test]
fn test_wheel_events_become_scrolls() {
    let up = scroll_from_mouse(&mouse(MouseEventKind::ScrollUp)).unwrap();
    assert_eq!(up.direction, ScrollDirection::Up);
    assert_eq!(up.amount, 1);
    let down = scroll_from_mouse(&mouse(MouseEventKind::ScrollDown)).unwrap();
    assert_eq!(down.direction, ScrollDirection::Down);
    assert!(scroll_from_mouse(&mouse(MouseEventKind::Moved)).is_none());
}

#[test]
fn test_enter_and_space_activate() {
    assert!(is_activate(&KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)));
    assert!(is_activate(&KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE)));
    assert!(!is_activate(&KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE)));
    assert!(!is_activate(&KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)));
}
