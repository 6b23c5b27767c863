//! Centered popup dialogs: delete confirmation and rename input.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use fsnek_core::config::theme::Theme;

use crate::ui::parse_color;

/// Renders a centered popup dialog with the given title and message lines.
pub fn render_popup(f: &mut Frame, title: &str, lines: &[String], theme: &Theme) {
    let area = centered_rect(60, 40, f.area());
    let border_fg = parse_color(&theme.popup.border_fg);
    let title_fg = parse_color(&theme.popup.title_fg);

    f.render_widget(Clear, area);

    let content: Vec<Line> = lines.iter().map(|l| Line::from(l.as_str())).collect();

    let popup = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(
                title.to_owned(),
                Style::default().fg(title_fg).add_modifier(Modifier::BOLD),
            ))
            .border_style(Style::default().fg(border_fg)),
    );

    f.render_widget(popup, area);
}

/// Renders a single-line text input popup with a visible caret.
///
/// The caret is drawn by reversing the character it sits on; a caret at the
/// end of the buffer reverses a trailing space.
pub fn render_input_popup(f: &mut Frame, title: &str, buffer: &str, caret: usize, theme: &Theme) {
    let area = centered_rect(50, 20, f.area());
    let border_fg = parse_color(&theme.popup.border_fg);
    let input_fg = parse_color(&theme.popup.input_fg);

    f.render_widget(Clear, area);

    let chars: Vec<char> = buffer.chars().collect();
    let caret = caret.min(chars.len());
    let before: String = chars[..caret].iter().collect();
    let at: String = chars
        .get(caret)
        .map(|c| c.to_string())
        .unwrap_or_else(|| " ".to_string());
    let after: String = chars.get(caret + 1..).unwrap_or(&[]).iter().collect();

    let line = Line::from(vec![
        Span::styled(before, Style::default().fg(input_fg)),
        Span::styled(
            at,
            Style::default().fg(input_fg).add_modifier(Modifier::REVERSED),
        ),
        Span::styled(after, Style::default().fg(input_fg)),
    ]);

    let popup = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title.to_owned())
            .border_style(Style::default().fg(border_fg)),
    );

    f.render_widget(popup, area);
}

/// Calculates a centered rectangle of the given percentage size within the parent area.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_is_inside_parent() {
        let parent = Rect::new(0, 0, 100, 40);
        let rect = centered_rect(50, 40, parent);
        assert!(rect.x >= parent.x);
        assert!(rect.y >= parent.y);
        assert!(rect.right() <= parent.right());
        assert!(rect.bottom() <= parent.bottom());
    }

    #[test]
    fn centered_rect_respects_percentages() {
        let parent = Rect::new(0, 0, 100, 100);
        let rect = centered_rect(50, 40, parent);
        assert_eq!(rect.width, 50);
        assert_eq!(rect.height, 40);
    }
}
