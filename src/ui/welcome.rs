use ratatui::{prelude::*, widgets::Paragraph};

use crate::app::{App, WelcomeItem};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let card_area = super::centered(area, 44, 13);

    let mut content = vec![
        Line::from(""),
        super::title_line(),
        Line::from(""),
        Line::from("Tech trivia · 3 difficulties · 20 questions".fg(Color::DarkGray)),
        Line::from(""),
    ];

    for (index, item) in WelcomeItem::ALL.iter().enumerate() {
        let selected = index == app.welcome_cursor();
        let style = match (selected, item) {
            (true, WelcomeItem::Quit) => Style::default().fg(Color::Red).bold(),
            (true, _) => Style::default().fg(Color::Green).bold(),
            (false, _) => Style::default().fg(Color::Gray),
        };
        let marker = if selected { "> " } else { "  " };
        content.push(Line::from(Span::styled(
            format!("{}{}", marker, item.label()),
            style,
        )));
    }

    content.push(Line::from(""));
    content.push(Line::from("j/k move  ·  enter select".fg(Color::DarkGray)));

    let widget = Paragraph::new(content)
        .alignment(Alignment::Center)
        .block(super::card());
    frame.render_widget(widget, card_area);
}
