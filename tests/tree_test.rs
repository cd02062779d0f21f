use velour::core::{Component, EventKind, KeyInput, KeyName, Layout, NodeId, Surface, Theme, Tree};
use velour::core::{Edges, OriginX, OriginY, Position};
use velour::{Button, Error, Input, List, Screen, Text, Window};

/// Drive one full frame headlessly and report whether anything was drawn.
fn frame(tree: &mut Tree, force: bool) -> bool {
    tree.begin_frame(force);
    tree.compute(Layout::root(80, 24));
    let mut surface = Surface::new();
    tree.draw(&mut surface).unwrap()
}

struct Fixture {
    tree: Tree,
    input: NodeId,
    list: NodeId,
    inner_button: NodeId,
    outer_button: NodeId,
    text: NodeId,
}

fn fixture(trap: bool) -> Fixture {
    let mut tree = Tree::new(Component::new("screen", Screen), Theme::new("plain"));
    let root = tree.root();

    let window = tree.attach(
        root,
        Component::new("main", Window)
            .focus_trap(trap)
            .position(Position::new().sized(60.0, 20.0)),
    );
    let text = tree.attach(
        window,
        Component::new("title", Text::new("hello"))
            .position(Position::new().sized(20.0, 1.0)),
    );
    // Absolute size specs cover the margin box, so vertical offsets are
    // folded into the height specs.
    let input = tree.attach(
        window,
        Component::new("name", Input::new())
            .position(Position::new().sized(20.0, 3.0).with_margin(Edges::new(2, 0, 0, 0))),
    );
    let list = tree.attach(
        window,
        Component::new("choices", List::new(vec!["a".into(), "bb".into(), "ccc".into()]))
            .position(Position::new().sized(10.0, 6.0).with_margin(Edges::new(4, 0, 0, 0))),
    );
    let inner_button = tree.attach(window, Component::new("ok", Button::new("OK")));
    let outer_button = tree.attach(
        root,
        Component::new("quit", Button::new("Quit")).position(
            Position::new()
                .anchored(OriginX::Left, OriginY::Bottom)
                .sized(6.0, 1.0),
        ),
    );

    Fixture {
        tree,
        input,
        list,
        inner_button,
        outer_button,
        text,
    }
}

#[test]
fn test_authored_margins_leave_usable_boxes() {
    let mut f = fixture(false);
    frame(&mut f.tree, false);

    // Margins subtract from absolute size specs, so the authored specs must
    // cover offset plus extent or the box collapses.
    let input = *f.tree.layout(f.input);
    assert!(!input.is_degenerate());
    assert_eq!(input.y, 2);
    assert_eq!(input.height, 1);

    let list = *f.tree.layout(f.list);
    assert_eq!(list.y, 4);
    assert_eq!(list.inner_height, 2);

    assert!(f.tree.focus(f.input).is_ok());
    assert!(f.tree.focus(f.list).is_ok());
}

#[test]
fn test_find_and_typed_access() {
    let mut f = fixture(false);
    assert_eq!(f.tree.find("choices"), Some(f.list));
    assert_eq!(f.tree.find("missing"), None);

    let list = f.tree.widget::<List>(f.list).unwrap();
    assert_eq!(list.items().len(), 3);

    f.tree.widget_mut::<Input>(f.input).unwrap().set_value("hi");
    assert_eq!(f.tree.widget::<Input>(f.input).unwrap().value(), "hi");

    // Wrong type downcasts to None
    assert!(f.tree.widget::<List>(f.input).is_none());
}

#[test]
fn test_first_frame_draws_everything() {
    let mut f = fixture(false);
    assert!(frame(&mut f.tree, false));
}

#[test]
fn test_clean_frame_draws_nothing() {
    let mut f = fixture(false);
    frame(&mut f.tree, false);
    assert!(!frame(&mut f.tree, false));
}

#[test]
fn test_forced_frame_redraws() {
    let mut f = fixture(false);
    frame(&mut f.tree, false);
    assert!(frame(&mut f.tree, true));
}

#[test]
fn test_state_change_marks_dirty() {
    let mut f = fixture(false);
    frame(&mut f.tree, false);

    f.tree.widget_mut::<List>(f.list).unwrap().goto_next();
    assert!(frame(&mut f.tree, false));

    // Settled again afterwards
    assert!(!frame(&mut f.tree, false));
}

#[test]
fn test_focus_requires_rendered() {
    let mut f = fixture(false);
    let err = f.tree.focus(f.input).unwrap_err();
    assert!(matches!(err, Error::NotRendered { .. }));
    assert!(err.to_string().contains("'name'"));

    frame(&mut f.tree, false);
    assert!(f.tree.focus(f.input).is_ok());
    assert_eq!(f.tree.focused(), Some(f.input));
}

#[test]
fn test_focus_rejects_non_focusable() {
    let mut f = fixture(false);
    frame(&mut f.tree, false);
    let err = f.tree.focus(f.text).unwrap_err();
    assert!(matches!(err, Error::NotFocusable { .. }));
    assert!(err.to_string().contains("'title'"));
    // Current focus untouched by the failed move
    assert_eq!(f.tree.focused(), None);
}

#[test]
fn test_focus_change_redraws_both_nodes() {
    let mut f = fixture(false);
    frame(&mut f.tree, false);
    f.tree.focus(f.input).unwrap();
    assert!(frame(&mut f.tree, false));

    f.tree.focus(f.list).unwrap();
    assert!(frame(&mut f.tree, false));
    assert!(!frame(&mut f.tree, false));
}

#[test]
fn test_focus_first_is_depth_first() {
    let mut f = fixture(false);
    frame(&mut f.tree, false);
    f.tree.focus_first().unwrap();
    assert_eq!(f.tree.focused(), Some(f.input));
}

#[test]
fn test_focus_next_cycles_and_wraps() {
    let mut f = fixture(false);
    frame(&mut f.tree, false);
    f.tree.focus_first().unwrap();

    f.tree.focus_next().unwrap();
    assert_eq!(f.tree.focused(), Some(f.list));
    f.tree.focus_next().unwrap();
    assert_eq!(f.tree.focused(), Some(f.inner_button));
    f.tree.focus_next().unwrap();
    assert_eq!(f.tree.focused(), Some(f.outer_button));
    f.tree.focus_next().unwrap();
    assert_eq!(f.tree.focused(), Some(f.input)); // wrapped
}

#[test]
fn test_focus_trap_confines_cycle() {
    let mut f = fixture(true);
    frame(&mut f.tree, false);
    f.tree.focus_first().unwrap();

    // Cycling from inside the trap never reaches the outside button.
    for _ in 0..6 {
        f.tree.focus_next().unwrap();
        assert_ne!(f.tree.focused(), Some(f.outer_button));
    }
    assert_eq!(f.tree.focused(), Some(f.input));
}

#[test]
fn test_focus_depths() {
    let mut f = fixture(false);
    frame(&mut f.tree, false);
    assert_eq!(f.tree.focused_depth(), None);
    assert_eq!(f.tree.top_focusable_depth(), Some(1)); // the outer button

    f.tree.focus(f.outer_button).unwrap();
    assert_eq!(f.tree.focused_depth(), Some(1));

    f.tree.focus(f.input).unwrap();
    assert_eq!(f.tree.focused_depth(), Some(2));
}

#[test]
fn test_has_valid_focus() {
    let mut f = fixture(false);
    assert!(!f.tree.has_valid_focus());
    frame(&mut f.tree, false);
    f.tree.focus(f.input).unwrap();
    assert!(f.tree.has_valid_focus());
}

#[test]
fn test_dispatch_key_consumed_by_focused_widget() {
    let mut f = fixture(false);
    frame(&mut f.tree, false);
    f.tree.focus(f.input).unwrap();

    let events = f.tree.dispatch_key(&KeyInput::char('a'));
    assert!(events.is_empty());
    assert_eq!(f.tree.widget::<Input>(f.input).unwrap().value(), "a");

    let events = f.tree.dispatch_key(&KeyInput::named(KeyName::Return));
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].id, "name");
    assert_eq!(events[0].kind, EventKind::Submitted { value: "a".into() });
}

#[test]
fn test_dispatch_key_stamps_source_id() {
    let mut f = fixture(false);
    frame(&mut f.tree, false);
    f.tree.focus(f.inner_button).unwrap();

    let events = f.tree.dispatch_key(&KeyInput::named(KeyName::Return));
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].id, "ok");
    assert_eq!(events[0].kind, EventKind::Pressed);
}

#[test]
fn test_dispatch_key_emits_change_events() {
    let mut f = fixture(false);
    frame(&mut f.tree, false);
    f.tree.focus(f.list).unwrap();

    let events = f.tree.dispatch_key(&KeyInput::named(KeyName::Down));
    assert_eq!(events.len(), 1);
    assert_eq!(
        events[0].kind,
        EventKind::Changed {
            index: 1,
            item: "bb".into()
        }
    );
}

#[test]
fn test_dispatch_key_bubbles_unconsumed_input() {
    let mut f = fixture(false);
    frame(&mut f.tree, false);
    f.tree.focus(f.list).unwrap();

    // Up at the first row does not move, so the key bubbles all the way out.
    let events = f.tree.dispatch_key(&KeyInput::named(KeyName::Up));
    assert!(events.is_empty());
    assert_eq!(f.tree.widget::<List>(f.list).unwrap().active_index(), 0);
}

#[test]
fn test_list_viewport_follows_cursor_across_frames() {
    let mut f = fixture(false);
    frame(&mut f.tree, false);

    // Two visible rows over three items; the offset moves only on overshoot.
    f.tree.widget_mut::<List>(f.list).unwrap().goto_next();
    frame(&mut f.tree, false);
    assert_eq!(f.tree.layout(f.list).scroll_y, 0);

    f.tree.widget_mut::<List>(f.list).unwrap().goto_next();
    frame(&mut f.tree, false);
    assert_eq!(f.tree.layout(f.list).scroll_y, 1);
}

#[test]
fn test_component_clone_is_independent() {
    let mut tree = Tree::new(Component::new("screen", Screen), Theme::new("plain"));
    let root = tree.root();

    let original = Component::new("field", Input::new().with_value("abc"))
        .position(Position::new().sized(10.0, 1.0));
    let copy = original.clone();
    let a = tree.attach(root, original);
    let b = tree.attach(root, copy);

    tree.widget_mut::<Input>(a).unwrap().set_value("xyz");
    assert_eq!(tree.widget::<Input>(b).unwrap().value(), "abc");
}
