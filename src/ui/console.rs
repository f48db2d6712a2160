// Console overlay.
// Shows the in-app activity log on top of the document.

use chrono::Utc;
use ratatui::{prelude::*, widgets::*};

use crate::app::App;
use crate::state::ConsoleLevel;
use crate::state::projects::relative_time;

/// Draw the console overlay, centered over the document.
pub fn draw_console(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    if area.width < 40 || area.height < 10 {
        return;
    }
    let width = area.width.saturating_sub(8).clamp(30, 90);
    let height = area.height.saturating_sub(6).clamp(8, 16);
    let x = (area.width.saturating_sub(width)) / 2;
    let y = (area.height.saturating_sub(height)) / 2;
    let popup = Rect::new(x, y, width, height);

    // Clear the area behind the popup
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Console ");

    if app.console.messages.is_empty() {
        let text = Paragraph::new("No messages")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(text, popup);
        return;
    }

    let now = Utc::now();
    let items: Vec<ListItem> = app
        .console
        .messages
        .iter()
        .map(|msg| {
            let (icon, color) = match msg.level {
                ConsoleLevel::Error => ("✗", Color::Red),
                ConsoleLevel::Warn => ("!", Color::Yellow),
                ConsoleLevel::Info => ("·", Color::Cyan),
            };

            let time = relative_time(msg.timestamp, now);

            ListItem::new(Line::from(vec![
                Span::styled(format!("{} ", icon), Style::default().fg(color)),
                Span::styled(time, Style::default().fg(Color::DarkGray)),
                Span::raw(" "),
                Span::styled(msg.message.clone(), Style::default().fg(color)),
            ]))
        })
        .collect();

    let list_widget = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    frame.render_stateful_widget(list_widget, popup, &mut app.console.list_state);
}
