mod high_scores;
mod instructions;
mod leaderboard;
mod login;
mod menu;
mod quiz;
mod result;
mod welcome;

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap},
};

use crate::app::App;
use crate::session::Screen;

const TITLE: &str = "TECHMASTER CHALLENGE";

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    let [body, status] = Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(area);

    match app.screen() {
        Screen::Welcome => welcome::render(frame, body, app),
        Screen::Instructions => instructions::render(frame, body),
        Screen::Login => login::render(frame, body, app),
        Screen::Menu => menu::render(frame, body, app),
        Screen::Question => quiz::render(frame, body, app),
        Screen::RoundComplete(summary) => result::render(frame, body, summary),
        Screen::Leaderboard(difficulty) => leaderboard::render(frame, body, app, *difficulty),
        Screen::HighScores => high_scores::render(frame, body, app),
    }

    if let Some(message) = app.status() {
        let widget = Paragraph::new(message).fg(Color::Yellow);
        frame.render_widget(widget, status);
    }

    if let Some(notice) = app.notice() {
        render_notice(frame, area, &notice.title, &notice.message, notice.is_error);
    }
}

/// A bordered box of fixed height, centered vertically and horizontally.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [_, row, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height),
        Constraint::Fill(1),
    ])
    .areas(area);
    let [_, cell, _] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(width),
        Constraint::Fill(1),
    ])
    .areas(row);
    cell
}

fn card() -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Color::DarkGray)
        .padding(Padding::horizontal(2))
}

fn title_line() -> Line<'static> {
    Line::from(Span::styled(TITLE, Style::default().fg(Color::Cyan).bold()))
}

fn controls(frame: &mut Frame, area: Rect, text: &str) {
    let widget = Paragraph::new(text)
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

fn render_notice(frame: &mut Frame, area: Rect, title: &str, message: &str, is_error: bool) {
    let popup = centered(area, 50, 7);
    let color = if is_error { Color::Red } else { Color::Green };

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(message, Style::default().fg(Color::White).bold())),
        Line::from(""),
        Line::from(Span::styled("[Enter] OK", Style::default().fg(Color::DarkGray))),
    ];

    let widget = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(color)
                .title(format!(" {} ", title))
                .title_style(Style::default().fg(color).bold()),
        );

    frame.render_widget(Clear, popup);
    frame.render_widget(widget, popup);
}
