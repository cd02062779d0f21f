use velour::core::layout::{resolve_dimension, Edges, Layout, OriginX, OriginY, Position, SizeOverrides};

#[test]
fn test_resolve_dimension_fractional() {
    assert_eq!(resolve_dimension(0.5, 100, 0), 50);
    assert_eq!(resolve_dimension(0.25, 10, 0), 3); // 2.5 rounds up
    assert_eq!(resolve_dimension(0.9, 80, 0), 72);
}

#[test]
fn test_resolve_dimension_absolute() {
    assert_eq!(resolve_dimension(24.0, 100, 0), 24);
    // Absolute specs floor to whole cells
    assert_eq!(resolve_dimension(24.9, 100, 0), 24);
    assert_eq!(resolve_dimension(1.0, 100, 0), 1);
}

#[test]
fn test_resolve_dimension_auto_is_zero() {
    assert_eq!(resolve_dimension(0.0, 100, 0), 0);
    assert_eq!(resolve_dimension(-1.0, 100, 0), 0);
}

#[test]
fn test_resolve_dimension_subtracts_margins() {
    assert_eq!(resolve_dimension(10.0, 100, 4), 6);
    assert_eq!(resolve_dimension(0.5, 20, 3), 7);
    // Margins larger than the resolved size floor at zero
    assert_eq!(resolve_dimension(3.0, 100, 10), 0);
}

#[test]
fn test_compute_top_left_with_margin() {
    let parent = Layout::root(80, 24);
    let position = Position::new()
        .sized(10.0, 5.0)
        .with_margin(Edges::new(2, 0, 0, 3));
    let layout = position.compute(&parent, SizeOverrides::default(), false);

    assert_eq!(layout.x, 3);
    assert_eq!(layout.y, 2);
    assert_eq!(layout.width, 7); // 10 minus horizontal margins
    assert_eq!(layout.height, 3);
}

#[test]
fn test_margin_box_authoring() {
    // An absolute spec covers the margin box: folding the offset into the
    // spec leaves the intended extent after the margins subtract out.
    let parent = Layout::root(80, 24);
    let position = Position::new()
        .sized(28.0, 8.0)
        .with_margin(Edges::new(5, 0, 0, 2));
    let layout = position.compute(&parent, SizeOverrides::default(), false);

    assert_eq!((layout.x, layout.y), (2, 5));
    assert_eq!((layout.width, layout.height), (26, 3));
    assert!(!layout.is_degenerate());
}

#[test]
fn test_compute_center_anchor() {
    let parent = Layout::root(80, 24);
    let position = Position::new()
        .anchored(OriginX::Center, OriginY::Center)
        .sized(10.0, 4.0);
    let layout = position.compute(&parent, SizeOverrides::default(), false);

    assert_eq!(layout.x, 35);
    assert_eq!(layout.y, 10);
    assert_eq!(layout.width, 10);
    assert_eq!(layout.height, 4);
}

#[test]
fn test_compute_bottom_right_anchor() {
    let parent = Layout::root(80, 24);
    let position = Position::new()
        .anchored(OriginX::Right, OriginY::Bottom)
        .sized(10.0, 4.0)
        .with_margin(Edges::new(0, 2, 1, 0));
    let layout = position.compute(&parent, SizeOverrides::default(), false);

    assert_eq!(layout.width, 8);
    assert_eq!(layout.height, 3);
    assert_eq!(layout.x, 70); // 80 - (8 + right margin 2)
    assert_eq!(layout.y, 20); // 24 - (3 + bottom margin 1)
}

#[test]
fn test_compute_inner_box_with_border_and_padding() {
    let parent = Layout::root(80, 24);
    let position = Position::new()
        .sized(10.0, 6.0)
        .with_padding(Edges::uniform(1));
    let layout = position.compute(&parent, SizeOverrides::default(), true);

    assert_eq!(layout.inner_x, layout.x + 2); // border + left padding
    assert_eq!(layout.inner_y, layout.y + 2);
    assert_eq!(layout.inner_width, 6); // 10 - 2 border - 2 padding
    assert_eq!(layout.inner_height, 2);
}

#[test]
fn test_compute_clamps_to_parent() {
    let parent = Layout::root(80, 24);
    let position = Position::new().sized(100.0, 50.0);
    let layout = position.compute(&parent, SizeOverrides::default(), false);

    assert_eq!(layout.width, 80);
    assert_eq!(layout.height, 24);
    assert_eq!(layout.x, 0);
    assert_eq!(layout.y, 0);
}

#[test]
fn test_compute_fractional_size() {
    let parent = Layout::root(80, 24);
    let position = Position::new().sized(0.5, 0.5);
    let layout = position.compute(&parent, SizeOverrides::default(), false);

    assert_eq!(layout.width, 40);
    assert_eq!(layout.height, 12);
}

#[test]
fn test_compute_auto_uses_overrides() {
    let parent = Layout::root(80, 24);
    let position = Position::new(); // auto in both dimensions
    let overrides = SizeOverrides {
        width: Some(12),
        height: Some(3),
    };
    let layout = position.compute(&parent, overrides, false);

    assert_eq!(layout.width, 12);
    assert_eq!(layout.height, 3);
}

#[test]
fn test_degenerate_layout() {
    let parent = Layout::root(80, 24);
    let layout = Position::new().compute(&parent, SizeOverrides::default(), false);
    assert!(layout.is_degenerate());

    let layout = Position::new()
        .sized(10.0, 2.0)
        .compute(&parent, SizeOverrides::default(), false);
    assert!(!layout.is_degenerate());
}

#[test]
fn test_undersized_terminal_degrades_to_empty() {
    let parent = Layout::root(0, 0);
    let position = Position::new().sized(10.0, 4.0);
    let layout = position.compute(&parent, SizeOverrides::default(), true);
    assert!(layout.is_degenerate());
    assert_eq!(layout.inner_width, 0);
}

fn viewport(inner_y: u16, inner_height: u16, scroll_y: usize) -> Layout {
    Layout {
        inner_y,
        inner_height,
        scroll_y,
        ..Layout::default()
    }
}

#[test]
fn test_scroll_range_content_fits() {
    let layout = viewport(5, 4, 0);
    let range = layout.scroll_content_range(0, 3);
    assert_eq!(range.y, 5);
    assert_eq!(range.height, 3);
    assert_eq!(range.content_y, 0);
}

#[test]
fn test_scroll_range_follows_active_past_bottom() {
    let layout = viewport(5, 2, 0);
    // Active row 2 with a 2-row viewport pushes the window down by one.
    let range = layout.scroll_content_range(2, 3);
    assert_eq!(range.height, 2);
    assert_eq!(range.content_y, 1);
}

#[test]
fn test_scroll_range_stays_put_when_active_visible() {
    let layout = viewport(5, 2, 1);
    let range = layout.scroll_content_range(1, 3);
    assert_eq!(range.content_y, 1);
    let range = layout.scroll_content_range(2, 3);
    assert_eq!(range.content_y, 1);
}

#[test]
fn test_scroll_range_follows_active_past_top() {
    let layout = viewport(5, 2, 1);
    let range = layout.scroll_content_range(0, 3);
    assert_eq!(range.content_y, 0);
}

#[test]
fn test_scroll_range_clamps_stored_offset() {
    // A stale stored offset beyond the end clamps back into range.
    let layout = viewport(0, 2, 10);
    let range = layout.scroll_content_range(4, 5);
    assert_eq!(range.content_y, 3);
    assert_eq!(range.height, 2);
}

#[test]
fn test_scroll_range_empty_content() {
    let layout = viewport(0, 2, 0);
    let range = layout.scroll_content_range(0, 0);
    assert_eq!(range.height, 0);
    assert_eq!(range.content_y, 0);
}
