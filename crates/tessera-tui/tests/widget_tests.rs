use std::cell::RefCell;
use std::rc::Rc;

use tessera_tui::widget::builtin::{Button, Entry, LinearBox, List};
use tessera_tui::{
    shared, FocusController, Key, KeyEvent, Painter, Point, SimpleFocusChain, Size, TestSurface,
    Theme, Widget, WidgetHandle,
};

#[test]
fn test_entry_offset_follows_cursor() {
    let mut entry = Entry::new();
    entry.set_focused(true);
    entry.set_text("abcdefghij");
    entry.resize(Size::new(5, 1));
    entry.on_key_event(&KeyEvent::new(Key::Home));
    assert_eq!(entry.offset(), 0);

    let width = 5;
    let mut prev_offset = entry.offset();
    for _ in 0..12 {
        entry.on_key_event(&KeyEvent::new(Key::Right));
        let (cursor, offset) = (entry.cursor(), entry.offset());
        assert!(offset <= cursor && cursor <= offset + width - 1);
        assert!(offset >= prev_offset);
        if offset > prev_offset {
            // Only scrolls when the cursor would leave the right edge
            assert_eq!(cursor, prev_offset + width);
        }
        prev_offset = offset;
    }
    assert_eq!(entry.cursor(), 10);
    assert_eq!(entry.offset(), 6);
}

#[test]
fn test_entry_renders_scrolled_text() {
    let mut entry = Entry::new();
    entry.set_focused(true);
    entry.set_text("abcdefghij");

    let mut surface = TestSurface::new(5, 1);
    let theme = Theme::new();
    Painter::new(&mut surface, &theme).repaint(&mut entry).unwrap();
    assert_eq!(surface.row(0), "ghij ");
    assert_eq!(surface.cursor(), Some(Point::new(4, 0)));
}

#[test]
fn test_list_remove_item_rules() {
    let items = ["a", "b", "c", "d", "e"];
    for removed in 0..items.len() {
        for selected in 0..items.len() {
            let mut list = List::with_items(items);
            list.set_selected(Some(selected));
            list.remove_item(removed);

            let expected: Vec<&str> = items
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != removed)
                .map(|(_, s)| *s)
                .collect();
            assert_eq!(list.items(), expected.as_slice());

            let expected_sel = if selected == removed {
                None
            } else if selected > removed {
                Some(selected - 1)
            } else {
                Some(selected)
            };
            assert_eq!(list.selected(), expected_sel);
        }
    }
}

/// Route a key the way an application loop does: focus keys first
fn send(form: &mut LinearBox, focus: &mut FocusController, event: KeyEvent) {
    if !focus.on_key_event(&event) {
        form.on_key_event(&event);
    }
}

#[test]
fn test_focus_cycle_through_box() {
    let name = shared(Entry::new());
    let email = shared(Entry::new());
    let clicks = Rc::new(RefCell::new(0));
    let ok = shared(Button::new("ok"));
    let counter = clicks.clone();
    ok.borrow_mut().on_activated(move || *counter.borrow_mut() += 1);

    let mut form = LinearBox::vertical()
        .with(name.clone())
        .with(email.clone())
        .with(ok.clone());

    let mut chain = SimpleFocusChain::new();
    chain.set(vec![
        name.clone() as WidgetHandle,
        email.clone() as WidgetHandle,
        ok.clone() as WidgetHandle,
    ]);
    let mut focus = FocusController::new();
    focus.set_chain(chain);
    focus.focus_default();
    assert!(name.borrow().is_focused());

    send(&mut form, &mut focus, KeyEvent::rune('x'));
    send(&mut form, &mut focus, KeyEvent::new(Key::Tab));
    send(&mut form, &mut focus, KeyEvent::rune('y'));
    send(&mut form, &mut focus, KeyEvent::new(Key::Tab));
    send(&mut form, &mut focus, KeyEvent::new(Key::Enter));
    assert_eq!(name.borrow().text(), "x");
    assert_eq!(email.borrow().text(), "y");
    assert_eq!(*clicks.borrow(), 1);

    // Wraps around to the first widget
    send(&mut form, &mut focus, KeyEvent::new(Key::Tab));
    assert!(name.borrow().is_focused());
    assert!(!ok.borrow().is_focused());

    send(&mut form, &mut focus, KeyEvent::new(Key::BackTab));
    assert!(ok.borrow().is_focused());
    assert_eq!(focus.focused().map(|w| Rc::ptr_eq(w, &(ok.clone() as WidgetHandle))), Some(true));
}

#[test]
fn test_focus_without_chain_is_noop() {
    let mut focus = FocusController::new();
    assert!(focus.on_key_event(&KeyEvent::new(Key::Tab)));
    assert!(focus.focused().is_none());

    focus.set_chain(SimpleFocusChain::new());
    focus.focus_next();
    focus.focus_default();
    assert!(focus.focused().is_none());
}
