use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
};

use crate::app::App;
use crate::models::Question;
use crate::scoring::TOTAL_QUESTIONS;
use crate::session::{Feedback, Round};

const OPTION_LABELS: [char; 4] = ['A', 'B', 'C', 'D'];

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let session = app.session();
    let (Some(round), Some(question)) = (session.round(), session.displayed_question()) else {
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(4),
        Constraint::Length(2),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(2)
    .split(area);

    render_header(frame, chunks[0], session.player().unwrap_or_default(), round);
    render_progress(frame, chunks[1], round);
    render_question_text(frame, chunks[2], &question.prompt);
    render_feedback(frame, chunks[3], session.feedback());
    render_options(frame, chunks[4], question, app.selected_option(), session.feedback());
    super::controls(
        frame,
        chunks[5],
        "j/k navigate  ·  enter select  ·  s skip  ·  esc menu  ·  q quit",
    );
}

fn render_header(frame: &mut Frame, area: Rect, player: &str, round: &Round) {
    let [left, right] =
        Layout::horizontal([Constraint::Fill(1), Constraint::Length(24)]).areas(area);

    let score = Paragraph::new(format!(
        "{} · Score: {}/{}",
        player,
        round.score(),
        TOTAL_QUESTIONS
    ))
    .fg(Color::Gray);
    frame.render_widget(score, left);

    // The counter keeps going past the last question while its feedback shows.
    let counter = round.question_counter().min(TOTAL_QUESTIONS);
    let badge = Line::from(vec![
        Span::styled(format!("{}/{}  ", counter, TOTAL_QUESTIONS), Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!(" {} ", round.difficulty().as_str().to_uppercase()),
            Style::default().fg(Color::Black).bg(Color::Yellow).bold(),
        ),
    ]);
    frame.render_widget(Paragraph::new(badge).alignment(Alignment::Right), right);
}

fn render_progress(frame: &mut Frame, area: Rect, round: &Round) {
    let answered = round.question_counter().saturating_sub(1);
    let ratio = (answered as f64 / TOTAL_QUESTIONS as f64).min(1.0);
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Green).bg(Color::DarkGray))
        .ratio(ratio)
        .label("");
    frame.render_widget(gauge, area);
}

fn render_question_text(frame: &mut Frame, area: Rect, text: &str) {
    let widget = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .fg(Color::White)
        .bold()
        .block(Block::default().borders(Borders::BOTTOM).border_style(Color::DarkGray));
    frame.render_widget(widget, area);
}

fn render_feedback(frame: &mut Frame, area: Rect, feedback: Option<&Feedback>) {
    let Some(feedback) = feedback else {
        return;
    };
    let color = if feedback.is_correct() { Color::Green } else { Color::Red };
    let widget = Paragraph::new(feedback.message())
        .alignment(Alignment::Center)
        .fg(color)
        .bold();
    frame.render_widget(widget, area);
}

fn render_options(
    frame: &mut Frame,
    area: Rect,
    question: &Question,
    selected: usize,
    feedback: Option<&Feedback>,
) {
    let locked = feedback.is_some();
    let mut lines: Vec<Line> = Vec::with_capacity(question.options.len() * 2);

    for (index, option) in question.options.iter().enumerate() {
        let is_selected = !locked && index == selected;
        let style = if locked && question.is_correct(option) {
            Style::default().fg(Color::Green).bold()
        } else if locked {
            Style::default().fg(Color::DarkGray)
        } else if is_selected {
            Style::default().fg(Color::Cyan).bold()
        } else {
            Style::default().fg(Color::Gray)
        };
        let marker = if is_selected { ">" } else { " " };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(format!("{}. ", OPTION_LABELS[index]), style),
            Span::styled(option.as_str(), style),
        ]));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines), area);
}
