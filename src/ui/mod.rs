// UI module for rendering the TUI.
// Frame layout: nav bar, document viewport, status bar, then overlays.

pub mod console;
pub mod document;
pub mod navbar;
pub mod toast;

use ratatui::{prelude::*, widgets::*};

use crate::app::App;
use crate::content;

/// Rows taken by the nav bar.
pub const NAVBAR_HEIGHT: u16 = 3;
/// Rows taken by the status bar.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Main draw function that renders the entire UI.
pub fn draw(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::vertical([
        Constraint::Length(NAVBAR_HEIGHT),
        Constraint::Min(1),
        Constraint::Length(STATUS_BAR_HEIGHT),
    ])
    .split(frame.area());

    navbar::draw_navbar(frame, app, chunks[0]);
    document::draw_document(frame, app, chunks[1]);
    draw_status_bar(frame, app, chunks[2]);

    if app.show_console {
        console::draw_console(frame, app);
    }
    if app.show_help {
        draw_help_overlay(frame);
    }

    // The toast sits above everything, including overlays.
    toast::draw_toast(frame, &app.toast);
}

/// Draw the status bar with keybinding hints and the console badge.
fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let copy_keys: Vec<String> = content::CONTACT_LINKS
        .iter()
        .map(|link| link.hotkey.to_string())
        .collect();

    let mut hints = vec![
        Span::raw(" ↑↓ "),
        Span::styled("Scroll", Style::default().fg(Color::DarkGray)),
        Span::raw("  Tab "),
        Span::styled("Links", Style::default().fg(Color::DarkGray)),
        Span::raw("  ↵ "),
        Span::styled("Go", Style::default().fg(Color::DarkGray)),
        Span::raw(format!("  {} ", copy_keys.join("/"))),
        Span::styled("Copy email", Style::default().fg(Color::DarkGray)),
        Span::raw("  n/p "),
        Span::styled("Card", Style::default().fg(Color::DarkGray)),
        Span::raw("  o "),
        Span::styled("Open", Style::default().fg(Color::DarkGray)),
        Span::raw("  r "),
        Span::styled("Refresh", Style::default().fg(Color::DarkGray)),
        Span::raw("  ? "),
        Span::styled("Help", Style::default().fg(Color::DarkGray)),
        Span::raw("  q "),
        Span::styled("Quit", Style::default().fg(Color::DarkGray)),
    ];

    if app.console.unread_errors > 0 {
        hints.push(Span::styled(
            format!("  ` Console ({})", app.console.unread_errors),
            Style::default().fg(Color::Red),
        ));
    }

    let status = Paragraph::new(Line::from(hints));
    frame.render_widget(status, area);
}

/// Draw the help overlay.
fn draw_help_overlay(frame: &mut Frame) {
    let area = frame.area();

    let popup_width = 52u16.min(area.width);
    let popup_height = 19u16.min(area.height);
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;

    let popup_area = Rect::new(popup_x, popup_y, popup_width, popup_height);

    // Clear the area behind the popup
    frame.render_widget(Clear, popup_area);

    let key_style = Style::default().fg(Color::Cyan);
    let help_text = vec![
        Line::from(vec![Span::styled(
            "Keyboard Shortcuts",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from(""),
        Line::from(vec![
            Span::styled("  ↑/↓ or j/k   ", key_style),
            Span::raw("Scroll the page"),
        ]),
        Line::from(vec![
            Span::styled("  PgUp/PgDn    ", key_style),
            Span::raw("Page scroll"),
        ]),
        Line::from(vec![
            Span::styled("  Home/End     ", key_style),
            Span::raw("Jump to top/bottom"),
        ]),
        Line::from(vec![
            Span::styled("  Tab/S-Tab    ", key_style),
            Span::raw("Move nav link focus"),
        ]),
        Line::from(vec![
            Span::styled("  Enter, 1-3   ", key_style),
            Span::raw("Smooth-scroll to section"),
        ]),
        Line::from(vec![
            Span::styled("  e / w        ", key_style),
            Span::raw("Copy a contact email"),
        ]),
        Line::from(vec![
            Span::styled("  n / p        ", key_style),
            Span::raw("Select next/prev project card"),
        ]),
        Line::from(vec![
            Span::styled("  o            ", key_style),
            Span::raw("Open selected repository"),
        ]),
        Line::from(vec![
            Span::styled("  l            ", key_style),
            Span::raw("Open live demo (when present)"),
        ]),
        Line::from(vec![
            Span::styled("  r            ", key_style),
            Span::raw("Refresh projects"),
        ]),
        Line::from(vec![
            Span::styled("  `            ", key_style),
            Span::raw("Toggle console"),
        ]),
        Line::from(vec![
            Span::styled("  q            ", key_style),
            Span::raw("Quit"),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Press ", Style::default().fg(Color::DarkGray)),
            Span::styled("Esc", Style::default().fg(Color::Yellow)),
            Span::styled(" or ", Style::default().fg(Color::DarkGray)),
            Span::styled("?", Style::default().fg(Color::Yellow)),
            Span::styled(" to close", Style::default().fg(Color::DarkGray)),
        ]),
    ];

    let help_paragraph = Paragraph::new(help_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(" Help ")
                .title_style(
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
        )
        .alignment(Alignment::Left);

    frame.render_widget(help_paragraph, popup_area);
}
