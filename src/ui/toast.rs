// Toast rendering.
// A bottom-centered box drawn above everything else while a message is up.

use ratatui::{prelude::*, widgets::*};

use crate::state::Toast;
use crate::state::toast::ToastStyle;

/// Draw the toast surface, if a message is visible.
pub fn draw_toast(frame: &mut Frame, toast: &Toast) {
    let Some(message) = toast.visible() else {
        return;
    };

    let area = frame.area();
    if area.height < 4 || area.width < 24 {
        return;
    }

    let width = (message.chars().count() as u16 + 4).clamp(20, area.width.saturating_sub(4));
    let x = (area.width.saturating_sub(width)) / 2;
    let y = area.height.saturating_sub(4);
    let toast_area = Rect::new(x, y, width, 3);

    // Clear whatever is under the toast
    frame.render_widget(Clear, toast_area);

    let (border_style, text_style) = match toast.style() {
        ToastStyle::Styled => (
            Style::default().fg(Color::Cyan),
            Style::default().fg(Color::White),
        ),
        ToastStyle::Plain => (Style::default(), Style::default()),
    };

    let widget = Paragraph::new(message.to_string())
        .alignment(Alignment::Center)
        .style(text_style)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style),
        );
    frame.render_widget(widget, toast_area);
}
