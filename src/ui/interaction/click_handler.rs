//! Click action dispatcher.
//!
//! Called from the event loop when a mouse click lands on a registered
//! hit area; translates the typed action into App mutations.

use super::hit_area::ClickAction;
use crate::app::App;

/// Handle a click action by updating App state.
pub fn handle_click_action(app: &mut App, action: ClickAction) {
    // The alert is blocking: only its own dismiss action gets through
    if app.alert.is_some() && action != ClickAction::DismissAlert {
        return;
    }

    app.mark_dirty();

    match action {
        ClickAction::ToggleComplete(id) => {
            tracing::debug!("click: toggle complete {}", id);
            app.toggle_complete(&id);
        }
        ClickAction::ToggleEdit(id) => {
            tracing::debug!("click: toggle edit {}", id);
            app.toggle_edit(&id);
        }
        ClickAction::Delete(id) => {
            tracing::debug!("click: delete {}", id);
            app.delete_todo(&id);
        }
        ClickAction::FocusEditInput(id) => {
            app.active_edit = Some(id);
        }
        ClickAction::FocusNewTodoInput => {
            app.active_edit = None;
        }
        ClickAction::DismissAlert => {
            app.dismiss_alert();
        }
    }
}
