use anyhow::Result;
use log::info;

use velour::core::Edges;
use velour::{
    Button, Component, Driver, DriverConfig, Input, List, OriginX, OriginY, Position, Screen,
    ScrollBar, Text, Tree, Window,
};

// Absolute size specs cover the margin box: offsets are folded into the spec
// and the margins subtract back out, leaving the intended extent.
fn main() -> Result<()> {
    let config = DriverConfig::load()?;
    let theme = config.theme()?;

    let mut tree = Tree::new(Component::new("screen", Screen), theme);
    let root = tree.root();

    let window = tree.attach(
        root,
        Component::new("main-window", Window)
            .label("Velour")
            .focus_trap(true)
            .position(
                Position::new()
                    .anchored(OriginX::Center, OriginY::Center)
                    .sized(0.8, 0.8),
            ),
    );

    tree.attach(
        window,
        Component::new("intro", Text::new(
            "Use tab to cycle focus, up/down to move through the list, \
             return to activate the focused component and escape to quit.",
        ))
        .position(
            Position::new()
                .sized(0.9, 4.0)
                .with_margin(Edges::new(1, 0, 0, 2)),
        ),
    );

    // 26x3 bordered field at (2, 5)
    tree.attach(
        window,
        Component::new("name", Input::new().max_length(40))
            .label("Name")
            .position(
                Position::new()
                    .sized(28.0, 8.0)
                    .with_margin(Edges::new(5, 0, 0, 2))
                    .with_padding(Edges::new(0, 1, 0, 1)),
            ),
    );

    // 26x6 bordered list at (2, 9); four visible rows over six items
    tree.attach(
        window,
        Component::new("flavors", List::new(vec![
            "Amber".into(),
            "Cobalt".into(),
            "Crimson".into(),
            "Jade".into(),
            "Obsidian".into(),
            "Saffron".into(),
        ]))
        .label("Flavor")
        .position(
            Position::new()
                .sized(28.0, 15.0)
                .with_margin(Edges::new(9, 0, 0, 2))
                .with_padding(Edges::new(0, 1, 0, 1)),
        ),
    );

    // 3x6 track beside the list
    tree.attach(
        window,
        Component::new("flavors-scroll", ScrollBar::new(6, 4)).position(
            Position::new()
                .sized(32.0, 15.0)
                .with_margin(Edges::new(9, 0, 0, 29)),
        ),
    );

    tree.attach(
        window,
        Component::new("ok", Button::new("OK")).position(
            Position::new()
                .anchored(OriginX::Right, OriginY::Bottom)
                .sized(19.0, 4.0)
                .with_margin(Edges::new(0, 13, 1, 0))
                .with_padding(Edges::new(0, 1, 0, 1)),
        ),
    );
    tree.attach(
        window,
        Component::new("cancel", Button::new("Cancel")).position(
            Position::new()
                .anchored(OriginX::Right, OriginY::Bottom)
                .sized(12.0, 4.0)
                .with_margin(Edges::new(0, 2, 1, 0))
                .with_padding(Edges::new(0, 1, 0, 1)),
        ),
    );

    let mut driver = Driver::new(config)?;
    driver.on_event(|event| {
        info!("'{}' - {:?}", event.id, event.kind);
    });
    driver.run(&mut tree)?;
    Ok(())
}
