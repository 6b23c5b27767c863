//! Frame composition: file table, status bar, and modal overlays.

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::app::{App, AppMode};
use crate::ui::panel::{render_file_table, PanelProps};
use crate::ui::popup::{render_input_popup, render_popup};
use crate::ui::statusbar::{render_statusbar, StatusBarProps};

/// Main render function, composes the full UI layout each frame.
pub fn render(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(f.area());

    let browser = app.browser();
    let title = browser.current_dir().display().to_string();
    let visual_rows = app.visual_rows();

    let props = PanelProps {
        entries: browser.entries(),
        cursor: browser.cursor(),
        visual_rows: &visual_rows,
        flash: app.flash_active(),
        title: &title,
        show_icons: app.config().ui.show_icons,
        date_format: &app.config().ui.date_format,
    };
    render_file_table(f, chunks[0], &props, app.theme());

    let statusbar = StatusBarProps {
        current_dir: &title,
        entry_count: browser.entries().len(),
        cursor: browser.cursor(),
        visual_active: app.selection().is_active(),
        status_message: app.status_message(),
        is_error: app.status_is_error(),
    };
    render_statusbar(f, chunks[1], &statusbar, app.theme());

    match app.mode() {
        AppMode::Confirm => render_confirm_popup(f, app),
        AppMode::Rename { buffer, caret, .. } => {
            render_input_popup(f, "Rename", buffer, *caret, app.theme());
        }
        AppMode::Normal => {}
    }
}

/// Lists every queued target as a `DELETE:` line, then asks for y/n.
fn render_confirm_popup(f: &mut Frame, app: &App) {
    let Some(pending) = app.pending() else {
        return;
    };

    let mut lines = pending.confirmation_lines();
    lines.push(String::new());
    lines.push("Confirm? (y/n)".to_string());

    render_popup(f, "Confirm delete", &lines, app.theme());
}
