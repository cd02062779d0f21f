//! Layout engine: box model and positioning.
//!
//! A [`Position`] describes where a component wants to be (origin anchor,
//! width/height specs, margin, padding); [`Position::compute`] turns it into
//! an absolute [`Layout`] against the parent's inner box. Size specs are
//! interpreted three ways: a value in (0, 1) is a fraction of the parent's
//! inner size, a value ≥ 1 is an absolute cell count, and a value ≤ 0 means
//! auto — the owning widget must substitute a content-derived override before
//! the shared step runs; the engine never guesses content size.

/// Horizontal edge of the parent inner box a component is anchored against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OriginX {
    #[default]
    Left,
    Center,
    Right,
}

/// Vertical edge of the parent inner box a component is anchored against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OriginY {
    #[default]
    Top,
    Center,
    Bottom,
}

/// Per-side cell counts for margin and padding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Edges {
    pub top: u16,
    pub right: u16,
    pub bottom: u16,
    pub left: u16,
}

impl Edges {
    pub const fn new(top: u16, right: u16, bottom: u16, left: u16) -> Self {
        Self { top, right, bottom, left }
    }

    pub const fn uniform(value: u16) -> Self {
        Self::new(value, value, value, value)
    }

    pub const fn horizontal(self) -> u16 {
        self.left + self.right
    }

    pub const fn vertical(self) -> u16 {
        self.top + self.bottom
    }
}

/// Authored box model for one component instance.
///
/// Cloned per instance on attach, never shared, so per-frame computed output
/// never aliases across components.
#[derive(Debug, Clone, PartialEq)]
pub struct Position {
    pub origin_x: OriginX,
    pub origin_y: OriginY,
    /// Width spec: (0,1) fractional, ≥ 1 absolute, ≤ 0 auto.
    pub width: f32,
    /// Height spec, same interpretation as `width`.
    pub height: f32,
    pub margin: Edges,
    pub padding: Edges,
}

impl Default for Position {
    fn default() -> Self {
        Self {
            origin_x: OriginX::Left,
            origin_y: OriginY::Top,
            width: 0.0,
            height: 0.0,
            margin: Edges::default(),
            padding: Edges::default(),
        }
    }
}

impl Position {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn anchored(mut self, x: OriginX, y: OriginY) -> Self {
        self.origin_x = x;
        self.origin_y = y;
        self
    }

    pub fn sized(mut self, width: f32, height: f32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_margin(mut self, margin: Edges) -> Self {
        self.margin = margin;
        self
    }

    pub fn with_padding(mut self, padding: Edges) -> Self {
        self.padding = padding;
        self
    }

    /// Combine the authored specs (or widget-supplied `overrides` for auto
    /// dimensions) with the origin anchor to produce absolute geometry.
    ///
    /// The outer box is clamped inside the parent's inner box; the inner box
    /// subtracts one cell per side when `has_border` is set, then padding.
    /// Degenerate results clamp to zero rather than erroring, so an
    /// undersized terminal degrades to empty boxes.
    pub fn compute(&self, parent: &Layout, overrides: SizeOverrides, has_border: bool) -> Layout {
        let parent_w = parent.inner_width;
        let parent_h = parent.inner_height;

        let width_spec = if self.width <= 0.0 {
            overrides.width.map(|w| w as f32).unwrap_or(0.0)
        } else {
            self.width
        };
        let height_spec = if self.height <= 0.0 {
            overrides.height.map(|h| h as f32).unwrap_or(0.0)
        } else {
            self.height
        };

        let mut width = resolve_dimension(width_spec, parent_w, self.margin.horizontal());
        let mut height = resolve_dimension(height_spec, parent_h, self.margin.vertical());
        width = width.min(parent_w);
        height = height.min(parent_h);

        let x = match self.origin_x {
            OriginX::Left => parent.inner_x + self.margin.left,
            OriginX::Center => parent.inner_x + (parent_w - width) / 2,
            OriginX::Right => {
                parent.inner_x + parent_w.saturating_sub(width + self.margin.right)
            }
        };
        let y = match self.origin_y {
            OriginY::Top => parent.inner_y + self.margin.top,
            OriginY::Center => parent.inner_y + (parent_h - height) / 2,
            OriginY::Bottom => {
                parent.inner_y + parent_h.saturating_sub(height + self.margin.bottom)
            }
        };

        // Outer box never exceeds the parent inner box.
        let max_x = parent.inner_x + parent_w.saturating_sub(width);
        let max_y = parent.inner_y + parent_h.saturating_sub(height);
        let x = x.clamp(parent.inner_x, max_x.max(parent.inner_x));
        let y = y.clamp(parent.inner_y, max_y.max(parent.inner_y));

        let border: u16 = u16::from(has_border);
        let inner_x = x + border + self.padding.left;
        let inner_y = y + border + self.padding.top;
        let inner_width = width.saturating_sub(2 * border + self.padding.horizontal());
        let inner_height = height.saturating_sub(2 * border + self.padding.vertical());

        Layout {
            x,
            y,
            width,
            height,
            inner_x,
            inner_y,
            inner_width,
            inner_height,
            scroll_y: 0,
        }
    }
}

/// Widget-supplied substitutes for auto (≤ 0) size specs, derived from
/// content (text length, item count, wrapped lines).
#[derive(Debug, Clone, Copy, Default)]
pub struct SizeOverrides {
    pub width: Option<u16>,
    pub height: Option<u16>,
}

impl SizeOverrides {
    pub fn width(width: u16) -> Self {
        Self {
            width: Some(width),
            height: None,
        }
    }

    pub fn height(height: u16) -> Self {
        Self {
            width: None,
            height: Some(height),
        }
    }
}

/// Resolve one size spec against the parent size.
///
/// (0,1) rounds the fraction of `parent_size`; ≥ 1 floors to a cell count;
/// both subtract `margin_sum` and floor at zero. A spec ≤ 0 resolves to zero:
/// the caller must already have substituted a content-derived override.
pub fn resolve_dimension(spec: f32, parent_size: u16, margin_sum: u16) -> u16 {
    let cells = if spec > 0.0 && spec < 1.0 {
        (spec * f32::from(parent_size)).round() as i32
    } else if spec >= 1.0 {
        spec.floor() as i32
    } else {
        0
    };
    (cells - i32::from(margin_sum)).max(0) as u16
}

/// Absolute geometry computed for the current frame.
///
/// Valid only immediately after a compute pass; `scroll_y` is the sole field
/// carried across frames (viewport offset for scrolling widgets).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Layout {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
    pub inner_x: u16,
    pub inner_y: u16,
    pub inner_width: u16,
    pub inner_height: u16,
    pub scroll_y: usize,
}

impl Layout {
    /// Layout spanning the whole terminal; the root's inbound parent box.
    pub fn root(columns: u16, rows: u16) -> Self {
        Self {
            x: 0,
            y: 0,
            width: columns,
            height: rows,
            inner_x: 0,
            inner_y: 0,
            inner_width: columns,
            inner_height: rows,
            scroll_y: 0,
        }
    }

    /// An empty box draws nothing and cannot hold focus.
    pub fn is_degenerate(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Scroll-viewport window over `content_length` logical rows.
    ///
    /// Pure in its inputs (including the stored `scroll_y`): the window moves
    /// by exactly the overshoot when `active_index` crosses an edge, stays
    /// put otherwise, and is clamped to `[0, content_length - height]`. When
    /// everything fits, `content_y` is always zero.
    pub fn scroll_content_range(&self, active_index: usize, content_length: usize) -> ScrollRange {
        let visible = (self.inner_height as usize).min(content_length);
        let content_y = if content_length <= self.inner_height as usize {
            0
        } else {
            let max_offset = content_length - visible;
            let mut offset = self.scroll_y.min(max_offset);
            if active_index < offset {
                offset = active_index;
            } else if active_index >= offset + visible {
                offset = active_index + 1 - visible;
            }
            offset.min(max_offset)
        };

        ScrollRange {
            y: self.inner_y,
            height: visible as u16,
            content_y,
        }
    }
}

/// Visible slice of scrollable content: screen row `y`, `height` visible
/// rows, first visible logical index `content_y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollRange {
    pub y: u16,
    pub height: u16,
    pub content_y: usize,
}
