//! The component tree: ownership, dirty tracking, the two-phase frame
//! pipeline and focus.
//!
//! Nodes live in an arena addressed by stable [`NodeId`]s; a child keeps a
//! non-owning back-reference to its parent used only for key bubbling and
//! focus-trap scoping. Children are fixed once the tree is built — there is
//! no runtime insertion or removal.
//!
//! Each frame runs exactly two full-tree passes, strictly ordered: compute
//! (top-down, each parent's freshly computed inner box handed to its
//! children) then draw. A node whose reactive snapshot did not change is
//! skipped and its previous output stands; a repainted parent forces its
//! children to repaint since its fill invalidates their cells.

use log::debug;

use crate::core::component::{Component, KeyInput, Snapshot, UiEvent, Widget};
use crate::core::layout::{Layout, Position};
use crate::core::style::Style;
use crate::core::surface::Surface;
use crate::core::theme::Theme;
use crate::error::{Error, Result};

/// Stable handle to a node in the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// Per-frame lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Stale,
    Computed,
    Drawn,
}

struct Node {
    id: String,
    label: String,
    focusable: bool,
    focus_trap: bool,
    position: Position,
    style: Style,
    focus_style: Option<Style>,
    widget: Box<dyn Widget>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    phase: Phase,
    dirty: bool,
    subtree_dirty: bool,
    refresh_requested: bool,
    first_frame: bool,
    ever_drawn: bool,
    prev_snapshot: Option<Snapshot>,
    layout: Layout,
    focused: bool,
}

/// Style variant a node draws with this frame. Takes the fields rather than
/// the node so the widget stays mutably borrowable alongside the result.
fn effective_style<'a>(focused: bool, focus_style: Option<&'a Style>, base: &'a Style) -> &'a Style {
    if focused {
        focus_style.unwrap_or(base)
    } else {
        base
    }
}

pub struct Tree {
    nodes: Vec<Node>,
    root: NodeId,
    theme: Theme,
    focused: Option<NodeId>,
}

impl Tree {
    /// Build a tree around its root component (normally a `Screen`).
    pub fn new(root: Component, theme: Theme) -> Self {
        let mut tree = Self {
            nodes: Vec::new(),
            root: NodeId(0),
            theme,
            focused: None,
        };
        tree.insert(None, root);
        tree
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Attach a child under `parent`. Styles left unset on the component are
    /// cloned from the theme's entries for the widget kind.
    pub fn attach(&mut self, parent: NodeId, component: Component) -> NodeId {
        self.insert(Some(parent), component)
    }

    fn insert(&mut self, parent: Option<NodeId>, component: Component) -> NodeId {
        let kind = component.widget.kind();
        let style = component
            .style
            .or_else(|| self.theme.style(kind).cloned())
            .unwrap_or_default();
        let focus_style = component
            .focus_style
            .or_else(|| self.theme.focus_style(kind).cloned());

        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            id: component.id,
            label: component.label,
            focusable: component.focusable,
            focus_trap: component.focus_trap,
            position: component.position,
            style,
            focus_style,
            widget: component.widget,
            parent,
            children: Vec::new(),
            phase: Phase::Stale,
            dirty: false,
            subtree_dirty: false,
            refresh_requested: false,
            first_frame: true,
            ever_drawn: false,
            prev_snapshot: None,
            layout: Layout::default(),
            focused: false,
        });
        if let Some(parent) = parent {
            self.nodes[parent.0].children.push(id);
        }
        id
    }

    /// Look up a node by its string id.
    pub fn find(&self, id: &str) -> Option<NodeId> {
        self.nodes.iter().position(|n| n.id == id).map(NodeId)
    }

    /// Last computed geometry for a node.
    pub fn layout(&self, id: NodeId) -> &Layout {
        &self.nodes[id.0].layout
    }

    /// Typed access to a widget for reading.
    pub fn widget<T: Widget>(&self, id: NodeId) -> Option<&T> {
        self.nodes[id.0].widget.as_any().downcast_ref()
    }

    /// Typed access to a widget for mutation between frames; changes to
    /// reactive fields are picked up by the next frame's snapshot diff.
    pub fn widget_mut<T: Widget>(&mut self, id: NodeId) -> Option<&mut T> {
        self.nodes[id.0].widget.as_any_mut().downcast_mut()
    }

    // ---- frame pipeline -------------------------------------------------

    /// Start a frame: reset phases, diff reactive snapshots into dirty flags
    /// and derive per-subtree dirtiness for pass pruning.
    pub fn begin_frame(&mut self, force: bool) {
        for node in &mut self.nodes {
            node.phase = Phase::Stale;
            let snapshot = node.widget.snapshot();
            let changed = node.prev_snapshot.as_ref() != Some(&snapshot);
            let requested = std::mem::take(&mut node.refresh_requested);
            node.dirty = force || node.first_frame || changed || requested;
            node.prev_snapshot = Some(snapshot);
            node.first_frame = false;
        }
        // Children are always appended after their parent, so one reverse
        // sweep settles subtree flags bottom-up.
        for i in (0..self.nodes.len()).rev() {
            let subtree = self.nodes[i].dirty
                || self.nodes[i]
                    .children
                    .iter()
                    .any(|c| self.nodes[c.0].subtree_dirty);
            self.nodes[i].subtree_dirty = subtree;
        }
    }

    /// Pass 1: layout, top-down from the terminal box.
    pub fn compute(&mut self, root_box: Layout) {
        self.compute_node(self.root, &root_box, false);
    }

    fn compute_node(&mut self, id: NodeId, parent: &Layout, forced: bool) {
        if !forced && !self.nodes[id.0].subtree_dirty {
            return;
        }
        let dirty = forced || self.nodes[id.0].dirty;
        if dirty {
            let node = &mut self.nodes[id.0];
            let style = effective_style(node.focused, node.focus_style.as_ref(), &node.style);
            let has_border = style.has_border();
            let overrides = node.widget.natural_size(&node.position, style, parent);
            let mut layout = node.position.compute(parent, overrides, has_border);
            // The viewport offset is the one computed field that survives
            // across frames.
            layout.scroll_y = node.layout.scroll_y;
            node.layout = layout;
            node.dirty = true;
            node.phase = Phase::Computed;
        }
        let inner = self.nodes[id.0].layout;
        let children = self.nodes[id.0].children.clone();
        for child in children {
            self.compute_node(child, &inner, dirty);
        }
    }

    /// Pass 2: paint, same order. Returns whether anything was drawn.
    pub fn draw(&mut self, surface: &mut Surface) -> Result<bool> {
        self.draw_node(self.root, surface, false)
    }

    fn draw_node(&mut self, id: NodeId, surface: &mut Surface, forced: bool) -> Result<bool> {
        if !forced && !self.nodes[id.0].subtree_dirty {
            return Ok(false);
        }
        let dirty = forced || self.nodes[id.0].dirty;
        let mut painted_self = false;
        if dirty {
            let node = &mut self.nodes[id.0];
            if node.phase == Phase::Computed && !node.layout.is_degenerate() {
                let style = effective_style(node.focused, node.focus_style.as_ref(), &node.style);
                if style.background.is_some() {
                    surface.fill(&node.layout, style)?;
                }
                if let Some(border) = style.border {
                    surface.draw_border(&node.layout, border, &node.label, style)?;
                }
                surface.apply_style(style)?;
                node.widget.draw(surface, &mut node.layout, style)?;
                node.phase = Phase::Drawn;
                node.ever_drawn = true;
                painted_self = true;
            }
        }
        let mut drew = painted_self;
        let children = self.nodes[id.0].children.clone();
        for child in children {
            // A repainted parent invalidates its children's cells.
            drew |= self.draw_node(child, surface, painted_self)?;
        }
        Ok(drew)
    }

    // ---- focus ----------------------------------------------------------

    /// `true` iff the node was drawn with non-degenerate bounds and is still
    /// reachable from the active root.
    pub fn is_rendered(&self, id: NodeId) -> bool {
        let node = &self.nodes[id.0];
        node.ever_drawn && !node.layout.is_degenerate()
    }

    pub fn focused(&self) -> Option<NodeId> {
        self.focused
    }

    /// Move focus, firing blur and focus hooks exactly once each.
    ///
    /// Fails synchronously when the target is not focusable or not rendered;
    /// the current focus is left untouched in that case.
    pub fn focus(&mut self, id: NodeId) -> Result<()> {
        if !self.nodes[id.0].focusable {
            return Err(Error::NotFocusable {
                id: self.nodes[id.0].id.clone(),
            });
        }
        if !self.is_rendered(id) {
            return Err(Error::NotRendered {
                id: self.nodes[id.0].id.clone(),
            });
        }
        if self.focused == Some(id) {
            return Ok(());
        }
        if let Some(old) = self.focused.take() {
            debug!("'{}' - blur", self.nodes[old.0].id);
            self.nodes[old.0].focused = false;
            self.nodes[old.0].refresh_requested = true;
            self.nodes[old.0].widget.on_blur();
        }
        debug!("'{}' - focus", self.nodes[id.0].id);
        self.nodes[id.0].focused = true;
        self.nodes[id.0].refresh_requested = true;
        self.nodes[id.0].widget.on_focus();
        self.focused = Some(id);
        Ok(())
    }

    /// Depth-first enumeration of focusable nodes with their depths.
    pub fn focus_list(&self) -> Vec<(NodeId, usize)> {
        let mut list = Vec::new();
        self.collect_focusable(self.root, 0, &mut list);
        list
    }

    fn collect_focusable(&self, id: NodeId, depth: usize, out: &mut Vec<(NodeId, usize)>) {
        if self.nodes[id.0].focusable {
            out.push((id, depth));
        }
        for &child in &self.nodes[id.0].children {
            self.collect_focusable(child, depth + 1, out);
        }
    }

    /// Focus the first rendered focusable node, depth-first. Does nothing if
    /// there is none.
    pub fn focus_first(&mut self) -> Result<()> {
        let first = self
            .focus_list()
            .into_iter()
            .find(|(id, _)| self.is_rendered(*id));
        match first {
            Some((id, _)) => self.focus(id),
            None => Ok(()),
        }
    }

    /// Cycle focus through the depth-first focus order, wrapping. When the
    /// focused node's parent is a focus trap, the cycle is confined to the
    /// trap's subtree (modal semantics).
    pub fn focus_next(&mut self) -> Result<()> {
        let Some(current) = self.focused else {
            return Ok(());
        };
        let mut list: Vec<NodeId> = self
            .focus_list()
            .into_iter()
            .filter(|(id, _)| self.is_rendered(*id))
            .map(|(id, _)| id)
            .collect();
        if let Some(parent) = self.nodes[current.0].parent {
            if self.nodes[parent.0].focus_trap {
                list.retain(|&id| id == current || self.is_descendant_of(id, parent));
            }
        }
        let Some(index) = list.iter().position(|&id| id == current) else {
            return self.focus_first();
        };
        let next = list[(index + 1) % list.len()];
        if next == current {
            return Ok(());
        }
        self.focus(next)
    }

    fn is_descendant_of(&self, id: NodeId, ancestor: NodeId) -> bool {
        let mut cursor = self.nodes[id.0].parent;
        while let Some(node) = cursor {
            if node == ancestor {
                return true;
            }
            cursor = self.nodes[node.0].parent;
        }
        false
    }

    /// Whether the current focus target is still usable.
    pub fn has_valid_focus(&self) -> bool {
        self.focused
            .map(|id| self.nodes[id.0].focusable && self.is_rendered(id))
            .unwrap_or(false)
    }

    /// Re-fire the focus hook on the focused node so focus-dependent cursor
    /// placement stays correct even when that node was not redrawn.
    pub fn refresh_focus(&mut self) {
        if let Some(id) = self.focused {
            self.nodes[id.0].widget.on_focus();
        }
    }

    /// Terminal cursor cell requested by the focused widget, if any.
    pub fn focus_cursor(&self) -> Option<(u16, u16)> {
        let id = self.focused?;
        let node = &self.nodes[id.0];
        node.widget.cursor_pos(&node.layout)
    }

    /// Depth of the focused node in the tree, if any.
    pub fn focused_depth(&self) -> Option<usize> {
        let focused = self.focused?;
        self.focus_list()
            .into_iter()
            .find(|(id, _)| *id == focused)
            .map(|(_, depth)| depth)
    }

    /// Smallest depth among all focusable nodes.
    pub fn top_focusable_depth(&self) -> Option<usize> {
        self.focus_list().into_iter().map(|(_, d)| d).min()
    }

    // ---- input ----------------------------------------------------------

    /// Offer a keystroke to the focused widget, bubbling unconsumed input
    /// through its ancestors. Emitted widget events are stamped with the
    /// source node's id and returned.
    pub fn dispatch_key(&mut self, input: &KeyInput) -> Vec<UiEvent> {
        let mut events = Vec::new();
        let mut target = self.focused;
        while let Some(id) = target {
            let node = &mut self.nodes[id.0];
            let outcome = node.widget.on_key(input);
            events.extend(outcome.events.into_iter().map(|kind| UiEvent {
                id: node.id.clone(),
                kind,
            }));
            if outcome.consumed {
                break;
            }
            target = node.parent;
        }
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn effective_style_selects_focus_variant() {
        let base = Style::new();
        let focus = Style::new().underlined(true);

        assert!(!effective_style(false, Some(&focus), &base).underline);
        assert!(effective_style(true, Some(&focus), &base).underline);
        // No focus variant authored falls back to the base style
        assert!(!effective_style(true, None, &base).underline);
    }
}
