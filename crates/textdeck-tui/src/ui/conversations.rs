//! Conversation list screen
//!
//! Recent-contacts strip on top, the conversation list below. Unread
//! conversations carry a count badge; the selection marker mirrors the
//! focused row set.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};
use textdeck_core::format_phone;

use crate::app::{App, ListFocus};

const SELECTED_PREFIX: &str = "> ";
const UNSELECTED_PREFIX: &str = "  ";
const PREVIEW_INDENT: &str = "    ";

/// Render the recent-contacts strip.
pub fn render_contacts(frame: &mut Frame, app: &App, area: Rect) {
    let selection = app.selection();
    let focused = selection.focus == ListFocus::Contacts;

    let mut spans = vec![Span::raw(" ")];
    for (index, contact) in app.store().contacts().iter().enumerate() {
        let selected = focused && index == selection.contact;
        let style = if selected {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        let prefix = if selected { SELECTED_PREFIX } else { UNSELECTED_PREFIX };

        spans.push(Span::raw(prefix));
        spans.push(Span::styled(contact.title(), style));
        spans.push(Span::raw("  "));
    }

    let border_style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let block = Block::default().borders(Borders::ALL).border_style(border_style).title(" Recent ");
    let paragraph = Paragraph::new(Line::from(spans)).block(block);

    frame.render_widget(paragraph, area);
}

/// Render the conversation list.
pub fn render_list(frame: &mut Frame, app: &App, area: Rect) {
    let selection = app.selection();
    let focused = selection.focus == ListFocus::Conversations;

    let items: Vec<ListItem> = app
        .store()
        .conversations()
        .iter()
        .enumerate()
        .map(|(index, conversation)| {
            let selected = focused && index == selection.conversation;
            let unread = conversation.unread_count;

            let title_style = if selected {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else if unread > 0 {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            let prefix = if selected { SELECTED_PREFIX } else { UNSELECTED_PREFIX };

            let mut header = vec![
                Span::raw(prefix),
                Span::styled(conversation.title(), title_style),
                Span::styled(format!("  {}", conversation.date), Style::default().fg(Color::DarkGray)),
            ];
            if unread > 0 {
                header.push(Span::styled(
                    format!("  ({unread})"),
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ));
            }

            let preview = conversation.last_message.clone().unwrap_or_default();
            let preview_line = Line::from(vec![
                Span::raw(PREVIEW_INDENT),
                Span::styled(preview, Style::default().fg(Color::Gray)),
            ]);

            ListItem::new(vec![Line::from(header), preview_line])
        })
        .collect();

    let block = Block::default().borders(Borders::ALL).title(" Messages ");
    let list = List::new(items).block(block);

    frame.render_widget(list, area);
}

/// Strip title helper shared with the chat header.
pub fn conversation_heading(app: &App, conversation_id: &str, phone_number: &str) -> String {
    app.store()
        .conversation(conversation_id)
        .map_or_else(|| format_phone(phone_number), textdeck_core::Conversation::title)
}
