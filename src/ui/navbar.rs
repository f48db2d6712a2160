// Nav bar rendering.
// One link per section; exactly one is highlighted as active, and the
// current location fragment is shown on the right.

use ratatui::{prelude::*, widgets::*};

use crate::app::App;
use crate::state::Section;

/// Draw the nav bar at the top of the screen.
pub fn draw_navbar(frame: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = Section::ALL
        .iter()
        .map(|section| {
            let style = if *section == app.nav.active {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else if *section == app.nav.focused {
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::UNDERLINED)
            } else {
                Style::default().fg(Color::White)
            };

            Line::from(Span::styled(section.title(), style))
        })
        .collect();

    let selected_index = Section::ALL
        .iter()
        .position(|s| *s == app.nav.active)
        .unwrap_or(0);

    let fragment = Line::from(Span::styled(
        format!(" {} ", app.nav.active.fragment()),
        Style::default().fg(Color::DarkGray),
    ))
    .right_aligned();

    let tabs_widget = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(" portico ")
                .title_style(
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )
                .title_top(fragment),
        )
        .select(selected_index)
        .highlight_style(Style::default().fg(Color::Yellow))
        .divider(Span::raw(" │ "));

    frame.render_widget(tabs_widget, area);
}
