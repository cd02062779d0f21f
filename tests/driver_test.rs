use std::cell::RefCell;
use std::rc::Rc;

use velour::core::{Component, KeyInput, KeyName, Layout, NodeId, Position, Surface, Theme, Tree};
use velour::{Button, Driver, DriverConfig, Input, Screen, UiEvent, Window};

/// Routing-only configuration: with the automatic timer off, `handle_key`
/// never touches the terminal, so the key policy is testable headlessly.
fn headless_config() -> DriverConfig {
    let mut config = DriverConfig::default();
    config.frame.auto_update = false;
    config
}

fn frame(tree: &mut Tree) {
    tree.begin_frame(false);
    tree.compute(Layout::root(80, 24));
    let mut surface = Surface::new();
    tree.draw(&mut surface).unwrap();
}

struct Fixture {
    tree: Tree,
    input: NodeId,
    button: NodeId,
    quit: NodeId,
}

/// Screen with a quit button at depth 1 and a window holding an input and a
/// button at depth 2.
fn fixture() -> Fixture {
    let mut tree = Tree::new(Component::new("screen", Screen), Theme::new("plain"));
    let root = tree.root();

    let window = tree.attach(
        root,
        Component::new("main", Window).position(Position::new().sized(60.0, 20.0)),
    );
    let input = tree.attach(
        window,
        Component::new("name", Input::new()).position(Position::new().sized(20.0, 1.0)),
    );
    let button = tree.attach(
        window,
        Component::new("ok", Button::new("OK")).position(Position::new().sized(4.0, 1.0)),
    );
    let quit = tree.attach(
        root,
        Component::new("quit", Button::new("Quit")).position(Position::new().sized(6.0, 1.0)),
    );

    let mut f = Fixture {
        tree,
        input,
        button,
        quit,
    };
    frame(&mut f.tree);
    f
}

#[test]
fn test_pre_hook_short_circuits_routing() {
    let mut f = fixture();
    let mut driver = Driver::new(headless_config()).unwrap();
    f.tree.focus(f.input).unwrap();

    let seen: Rc<RefCell<Vec<KeyInput>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    driver.on_key_press(move |input| {
        sink.borrow_mut().push(input.clone());
        false
    });

    driver.handle_key(&mut f.tree, &KeyInput::named(KeyName::Tab)).unwrap();
    driver.handle_key(&mut f.tree, &KeyInput::char('a')).unwrap();

    // The hook saw both keys and nothing else did.
    assert_eq!(seen.borrow().len(), 2);
    assert_eq!(f.tree.focused(), Some(f.input));
    assert_eq!(f.tree.widget::<Input>(f.input).unwrap().value(), "");
    assert!(driver.is_running());
}

#[test]
fn test_ctrl_c_ends_session_before_widgets() {
    let mut f = fixture();
    let mut driver = Driver::new(headless_config()).unwrap();
    f.tree.focus(f.input).unwrap();
    assert!(driver.is_running());

    driver.handle_key(&mut f.tree, &KeyInput::ctrl('c')).unwrap();

    assert!(!driver.is_running());
    // The interrupt never reached the focused editor
    assert_eq!(f.tree.widget::<Input>(f.input).unwrap().value(), "");
}

#[test]
fn test_tab_advances_focus() {
    let mut f = fixture();
    let mut driver = Driver::new(headless_config()).unwrap();
    f.tree.focus(f.input).unwrap();

    driver.handle_key(&mut f.tree, &KeyInput::named(KeyName::Tab)).unwrap();
    assert_eq!(f.tree.focused(), Some(f.button));

    driver.handle_key(&mut f.tree, &KeyInput::named(KeyName::Tab)).unwrap();
    assert_eq!(f.tree.focused(), Some(f.quit));
}

#[test]
fn test_escape_ignored_below_top_depth() {
    let mut f = fixture();
    let mut driver = Driver::new(headless_config()).unwrap();
    // The quit button sits at depth 1; the input is deeper.
    f.tree.focus(f.input).unwrap();

    driver.handle_key(&mut f.tree, &KeyInput::named(KeyName::Escape)).unwrap();
    assert!(driver.is_running());
}

#[test]
fn test_escape_exits_at_top_depth() {
    let mut f = fixture();
    let mut driver = Driver::new(headless_config()).unwrap();
    f.tree.focus(f.quit).unwrap();

    driver.handle_key(&mut f.tree, &KeyInput::named(KeyName::Escape)).unwrap();
    assert!(!driver.is_running());
}

#[test]
fn test_escape_exit_can_be_disabled() {
    let mut f = fixture();
    let mut config = headless_config();
    config.input.exit_on_escape = false;
    let mut driver = Driver::new(config).unwrap();
    f.tree.focus(f.quit).unwrap();

    driver.handle_key(&mut f.tree, &KeyInput::named(KeyName::Escape)).unwrap();
    assert!(driver.is_running());
}

#[test]
fn test_widget_events_reach_the_sink() {
    let mut f = fixture();
    let mut driver = Driver::new(headless_config()).unwrap();
    f.tree.focus(f.button).unwrap();

    let events: Rc<RefCell<Vec<UiEvent>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = events.clone();
    driver.on_event(move |event| sink.borrow_mut().push(event.clone()));

    driver.handle_key(&mut f.tree, &KeyInput::named(KeyName::Return)).unwrap();

    let events = events.borrow();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].id, "ok");
}

#[test]
fn test_typed_keys_route_to_focused_widget() {
    let mut f = fixture();
    let mut driver = Driver::new(headless_config()).unwrap();
    f.tree.focus(f.input).unwrap();

    for c in "hi".chars() {
        driver.handle_key(&mut f.tree, &KeyInput::char(c)).unwrap();
    }
    assert_eq!(f.tree.widget::<Input>(f.input).unwrap().value(), "hi");
}
