use ratatui::{prelude::*, widgets::Paragraph};

use crate::app::{App, MenuItem};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let card_area = super::centered(area, 44, 15);
    let player = app.session().player().unwrap_or_default();

    let mut content = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("Welcome, {}", player),
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
    ];

    for (index, item) in MenuItem::ALL.iter().enumerate() {
        if matches!(item, MenuItem::Leaderboard) {
            content.push(Line::from(""));
        }

        let selected = index == app.menu_cursor();
        let style = if selected {
            Style::default().fg(Color::Green).bold()
        } else {
            Style::default().fg(Color::Gray)
        };
        let marker = if selected { "> " } else { "  " };
        content.push(Line::from(Span::styled(
            format!("{}{}", marker, item.label()),
            style,
        )));
    }

    content.push(Line::from(""));
    content.push(Line::from("j/k move  ·  enter select  ·  q quit".fg(Color::DarkGray)));

    let widget = Paragraph::new(content)
        .alignment(Alignment::Center)
        .block(super::card());
    frame.render_widget(widget, card_area);
}
