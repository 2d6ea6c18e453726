//! Chat area
//!
//! Displays the open conversation's messages as bubbles: inbound on the
//! left, outbound right-aligned, each with its time label. Shows the tail
//! of the thread when it outgrows the area.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};
use textdeck_core::{Sender, format_phone};

use crate::app::App;

use super::conversations::conversation_heading;

const BORDER_SIZE: u16 = 2;

/// Render the chat area.
pub fn render(frame: &mut Frame, app: &App, conversation_id: &str, phone_number: &str, area: Rect) {
    let heading = conversation_heading(app, conversation_id, phone_number);
    let block = Block::default().borders(Borders::ALL).title(format!(" {heading} "));

    let items: Vec<ListItem> = app.store().conversation(conversation_id).map_or_else(
        || {
            vec![ListItem::new(Line::from(Span::styled(
                format!("No messages with {} yet", format_phone(phone_number)),
                Style::default().fg(Color::DarkGray),
            )))]
        },
        |conversation| {
            conversation
                .messages
                .iter()
                .map(|message| {
                    let time = Span::styled(
                        format!("[{}] ", message.time),
                        Style::default().fg(Color::DarkGray),
                    );
                    let line = match message.sender {
                        Sender::Them => Line::from(vec![
                            time,
                            Span::styled(
                                message.text.clone(),
                                Style::default().fg(Color::Green),
                            ),
                        ]),
                        Sender::Me => Line::from(vec![
                            time,
                            Span::styled(
                                message.text.clone(),
                                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                            ),
                        ])
                        .right_aligned(),
                    };
                    ListItem::new(line)
                })
                .collect()
        },
    );

    let visible_height = area.height.saturating_sub(BORDER_SIZE) as usize;
    let skip = items.len().saturating_sub(visible_height);
    let visible_items: Vec<_> = items.into_iter().skip(skip).collect();

    let list = List::new(visible_items).block(block);

    frame.render_widget(list, area);
}
