//! Status bar rendering.
//!
//! The status bar occupies a single row at the bottom of the terminal and
//! shows the current directory, cursor position, a visual-mode indicator,
//! and an optional status message.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use fsnek_core::config::theme::Theme;

use crate::ui::parse_color;

/// Data needed to render the status bar.
pub struct StatusBarProps<'a> {
    pub current_dir: &'a str,
    pub entry_count: usize,
    pub cursor: usize,
    pub visual_active: bool,
    pub status_message: Option<&'a str>,
    /// When true the status message is rendered in the error color.
    pub is_error: bool,
}

/// Renders the bottom status bar.
pub fn render_statusbar(f: &mut Frame, area: Rect, props: &StatusBarProps<'_>, theme: &Theme) {
    let bg = parse_color(&theme.statusbar.bg);
    let path_fg = parse_color(&theme.statusbar.path_fg);
    let message_fg = if props.is_error {
        parse_color(&theme.statusbar.error_fg)
    } else {
        parse_color(&theme.statusbar.message_fg)
    };

    let position = if props.entry_count > 0 {
        format!(" {}/{}", props.cursor + 1, props.entry_count)
    } else {
        " 0/0".to_owned()
    };

    let visual_indicator = if props.visual_active { " [VISUAL]" } else { "" };

    let status_span = props
        .status_message
        .map(|msg| {
            Span::styled(
                format!("  {msg}"),
                Style::default()
                    .fg(message_fg)
                    .bg(bg)
                    .add_modifier(Modifier::ITALIC),
            )
        })
        .unwrap_or_default();

    let line = Line::from(vec![
        Span::styled(
            position,
            Style::default()
                .fg(path_fg)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {}", props.current_dir),
            Style::default().fg(path_fg).bg(bg),
        ),
        Span::styled(
            visual_indicator.to_owned(),
            Style::default()
                .fg(message_fg)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
        status_span,
    ]);

    let bar = Paragraph::new(line).style(Style::default().bg(bg));
    f.render_widget(bar, area);
}
