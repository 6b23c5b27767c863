//! File list panel rendering.
//!
//! Renders the directory view as a `Table` widget with icon + name, size,
//! and modification time columns. Visual-mode rows get the theme's visual
//! background; the cursor row flashes with the yank color while a flash
//! deadline is active.

use std::time::SystemTime;

use chrono::{DateTime, Local};
use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Row, Table, TableState},
    Frame,
};
use fsnek_core::config::theme::Theme;
use fsnek_core::fs::entry::FileEntry;
use fsnek_core::fs::ops::format_size;

use crate::icons::icon_for_entry;
use crate::ui::parse_color;

/// Data needed to render the file panel.
pub struct PanelProps<'a> {
    pub entries: &'a [FileEntry],
    pub cursor: usize,
    /// Rows inside the active visual range (empty when visual mode is off).
    pub visual_rows: &'a [usize],
    /// Whether the yank flash is currently lit.
    pub flash: bool,
    pub title: &'a str,
    pub show_icons: bool,
    pub date_format: &'a str,
}

/// Renders the file table with the cursor row highlighted.
pub fn render_file_table(f: &mut Frame, area: Rect, props: &PanelProps<'_>, theme: &Theme) {
    let rows: Vec<Row> = props
        .entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let icon = if props.show_icons {
                icon_for_entry(entry)
            } else if entry.is_dir() {
                "/"
            } else {
                " "
            };
            let name = format!("{icon}{}", entry.name());
            let size = format_size(entry.size());
            let mtime = format_mtime(entry.modified(), props.date_format);

            let mut style = entry_style(entry, theme);
            if props.visual_rows.contains(&i) {
                style = style.bg(parse_color(&theme.panel.visual_bg));
            }

            Row::new(vec![
                Span::styled(name, style),
                Span::styled(size, style),
                Span::styled(mtime, style),
            ])
        })
        .collect();

    let highlight = if props.flash {
        Style::default()
            .bg(parse_color(&theme.panel.flash_bg))
            .fg(parse_color(&theme.panel.cursor_fg))
    } else {
        Style::default()
            .bg(parse_color(&theme.panel.cursor_bg))
            .fg(parse_color(&theme.panel.cursor_fg))
    };

    let table = Table::new(
        rows,
        [
            Constraint::Min(20),
            Constraint::Length(9),
            Constraint::Length(19),
        ],
    )
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(props.title.to_owned())
            .border_style(Style::default().fg(parse_color(&theme.popup.border_fg))),
    )
    .row_highlight_style(highlight)
    .highlight_symbol("> ");

    let mut state = TableState::default();
    if !props.entries.is_empty() {
        state.select(Some(props.cursor.min(props.entries.len() - 1)));
    }

    f.render_stateful_widget(table, area, &mut state);
}

fn entry_style(entry: &FileEntry, theme: &Theme) -> Style {
    if entry.is_dir() {
        Style::default()
            .fg(parse_color(&theme.panel.dir_fg))
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(parse_color(&theme.panel.file_fg))
    }
}

/// Formats a modification time with the configured strftime pattern.
/// Unknown times render as `"Unknown"`, matching the size column.
pub fn format_mtime(modified: Option<SystemTime>, date_format: &str) -> String {
    match modified {
        Some(t) => DateTime::<Local>::from(t).format(date_format).to_string(),
        None => "Unknown".to_string(),
    }
}
