//! Hit area system for mouse interactions.
//!
//! Components register clickable regions while rendering, each carrying a
//! typed [`ClickAction`]; the event loop hit-tests the registry on mouse
//! clicks. Binding the action at render time replaces any runtime
//! inspection of what was clicked.

use ratatui::layout::Rect;

use crate::models::TodoId;

/// An action bound to a clickable region at render time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickAction {
    /// Flip the completion flag of a todo (click on its title span)
    ToggleComplete(TodoId),
    /// Enter or leave inline-edit mode (click on the `[edit]` button)
    ToggleEdit(TodoId),
    /// Delete a todo (click on the `[del]` button)
    Delete(TodoId),
    /// Focus an open inline-edit input
    FocusEditInput(TodoId),
    /// Focus the new-todo input bar
    FocusNewTodoInput,
    /// Dismiss the error dialog
    DismissAlert,
}

/// A clickable region with its associated action.
#[derive(Debug, Clone)]
pub struct HitArea {
    pub rect: Rect,
    pub action: ClickAction,
}

impl HitArea {
    pub fn new(rect: Rect, action: ClickAction) -> Self {
        Self { rect, action }
    }

    /// Check if a point is within this hit area.
    #[inline]
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.rect.x
            && x < self.rect.x + self.rect.width
            && y >= self.rect.y
            && y < self.rect.y + self.rect.height
    }
}

/// Registry of hit areas for the current frame.
///
/// Cleared at the start of each render cycle; later registrations win on
/// overlap (z-order: last registered is on top).
#[derive(Debug, Default)]
pub struct HitAreaRegistry {
    areas: Vec<HitArea>,
}

impl HitAreaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop all registered areas. Call at the start of each render.
    pub fn clear(&mut self) {
        self.areas.clear();
    }

    /// Register a new hit area.
    pub fn register(&mut self, rect: Rect, action: ClickAction) {
        self.areas.push(HitArea::new(rect, action));
    }

    /// Find the action for the topmost area containing the point.
    pub fn hit_test(&self, x: u16, y: u16) -> Option<ClickAction> {
        self.areas
            .iter()
            .rev()
            .find(|area| area.contains(x, y))
            .map(|area| area.action.clone())
    }

    /// Number of areas registered this frame.
    pub fn len(&self) -> usize {
        self.areas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }
}
