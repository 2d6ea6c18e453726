//! Status bar
//!
//! Bottom line with counts and key hints for the current screen.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::{App, Screen};

use super::conversations::conversation_heading;

/// Render the status bar.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let (info, hints) = match app.screen() {
        Screen::Splash { .. } => (String::new(), ""),
        Screen::Conversations => {
            let conversations = app.store().conversations().len();
            let unread = app.store().total_unread();
            (
                format!("{conversations} conversations | {unread} unread"),
                "Enter open | Tab contacts | Esc quit",
            )
        },
        Screen::Chat { conversation_id, phone_number } => {
            let heading = conversation_heading(app, conversation_id, phone_number);
            let messages = app
                .store()
                .conversation(conversation_id)
                .map_or(0, |conversation| conversation.messages.len());
            (format!("{heading} | {messages} messages"), "Enter send | Esc back")
        },
    };

    let status_line = Line::from(vec![
        Span::raw(" "),
        Span::styled(info, Style::default().add_modifier(Modifier::BOLD)),
        Span::styled(format!("  {hints}"), Style::default().fg(Color::Gray)),
    ]);

    let paragraph =
        Paragraph::new(status_line).style(Style::default().bg(Color::DarkGray).fg(Color::White));

    frame.render_widget(paragraph, area);
}
