use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::scoring::Band;
use crate::session::RoundSummary;

pub fn render(frame: &mut Frame, area: Rect, summary: &RoundSummary) {
    let card_area = super::centered(area, 48, 15);
    let color = get_grade_color(summary.score, summary.total);

    let mut content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "QUIZ COMPLETE!",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("Score: {}/{}", summary.score, summary.total),
            Style::default().fg(color).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            summary.milestone,
            Style::default().fg(Color::Yellow).bold(),
        )),
        Line::from(average_text(summary.band).fg(Color::Gray)),
        Line::from(""),
    ];

    if summary.new_high_score {
        content.push(Line::from(Span::styled(
            format!("New {} high score!", summary.difficulty),
            Style::default().fg(Color::Green),
        )));
    }
    if let Some(rank) = summary.rank {
        content.push(Line::from(
            format!("Leaderboard rank #{}", rank).fg(Color::Gray),
        ));
    }

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray)
            .title_bottom(Line::from(" enter back to menu ").centered()),
    );
    frame.render_widget(widget, card_area);
}

fn average_text(band: Option<Band>) -> String {
    match band {
        Some(band) => format!("Average Score: {}", band),
        None => "No score".to_string(),
    }
}

fn get_grade_color(score: u32, total: usize) -> Color {
    let percentage = if total > 0 {
        score as usize * 100 / total
    } else {
        0
    };
    match percentage {
        90..=100 => Color::Green,
        70..=89 => Color::Cyan,
        50..=69 => Color::Yellow,
        _ => Color::Red,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_average_text() {
        assert_eq!(
            average_text(Some(Band::SixteenToTwenty)),
            "Average Score: 16-20"
        );
        assert_eq!(average_text(Band::for_score(0)), "No score");
    }

    #[test]
    fn test_grade_color() {
        assert_eq!(get_grade_color(20, 20), Color::Green);
        assert_eq!(get_grade_color(15, 20), Color::Cyan);
        assert_eq!(get_grade_color(10, 20), Color::Yellow);
        assert_eq!(get_grade_color(0, 20), Color::Red);
    }
}
