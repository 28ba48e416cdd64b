use ratatui::{prelude::*, widgets::Paragraph};

use crate::app::App;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let card_area = super::centered(area, 48, 9);

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Enter Your Name",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(app.name_input(), Style::default().fg(Color::Yellow)),
            Span::styled("_", Style::default().fg(Color::Yellow)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "[Enter] continue  ·  [Esc] back",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let widget = Paragraph::new(content)
        .alignment(Alignment::Center)
        .block(super::card());
    frame.render_widget(widget, card_area);
}
