//! Splash screen
//!
//! Centered logo that fades in over the first second, then holds until the
//! auto-advance fires. The fade is a tick-driven style ramp; it has no
//! effect on state or ordering.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::SPLASH_FADE_TICKS;

const LOGO: &str = "t e x t d e c k";
const TAGLINE: &str = "messages";

/// Render the splash screen.
pub fn render(frame: &mut Frame, ticks: u32, area: Rect) {
    const LOGO_HEIGHT: u16 = 2;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(LOGO_HEIGHT),
            Constraint::Fill(1),
        ])
        .split(area);

    let [_, logo_area, _] = chunks.as_ref() else {
        return;
    };

    let logo_style = Style::default().fg(fade_color(ticks)).add_modifier(Modifier::BOLD);
    let tagline_style = Style::default().fg(Color::DarkGray);

    let lines = vec![
        Line::from(Span::styled(LOGO, logo_style)),
        Line::from(Span::styled(TAGLINE, tagline_style)),
    ];

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, *logo_area);
}

/// Map elapsed ticks onto the fade-in ramp.
fn fade_color(ticks: u32) -> Color {
    let third = SPLASH_FADE_TICKS / 3;
    if ticks < third {
        Color::DarkGray
    } else if ticks < third.saturating_mul(2) {
        Color::Gray
    } else {
        Color::White
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fade_brightens_monotonically() {
        assert_eq!(fade_color(0), Color::DarkGray);
        assert_eq!(fade_color(SPLASH_FADE_TICKS / 2), Color::Gray);
        assert_eq!(fade_color(SPLASH_FADE_TICKS), Color::White);
    }
}
