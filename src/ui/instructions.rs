use ratatui::{prelude::*, widgets::Paragraph};

const RULES: [&str; 6] = [
    "Answer tech-related questions",
    "4 options per question",
    "1 point per correct answer",
    "Skipping counts as wrong",
    "Highscores saved per difficulty",
    "Top 10 scores shown in leaderboard",
];

pub fn render(frame: &mut Frame, area: Rect) {
    let card_area = super::centered(area, 50, 14);

    let mut content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "INSTRUCTIONS",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
    ];
    content.extend(
        RULES
            .iter()
            .map(|rule| Line::from(format!("- {}", rule).fg(Color::Gray))),
    );
    content.push(Line::from(""));
    content.push(Line::from("enter back".fg(Color::DarkGray)));

    let widget = Paragraph::new(content).block(super::card());
    frame.render_widget(widget, card_area);
}
