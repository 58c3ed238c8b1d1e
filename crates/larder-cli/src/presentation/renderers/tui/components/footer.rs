use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::{Component, status_level_to_color};
use crate::presentation::formatters::sanitize;
use crate::presentation::renderers::tui::app::AppState;

pub(crate) struct FooterComponent;

impl FooterComponent {
    fn hints(state: &AppState) -> &'static str {
        if state.form.is_some() {
            "Tab field  ←/→ location  Enter save  Esc cancel"
        } else if state.confirm.is_some() {
            "y delete  n keep"
        } else {
            "←/→ shelf  ↑/↓ item  a add  e edit  d delete  q quit"
        }
    }
}

impl Component for FooterComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &AppState) {
        let mut lines = vec![Line::styled(
            Self::hints(state),
            Style::default().fg(Color::DarkGray),
        )];

        if let Some(message) = &state.message {
            let color = status_level_to_color(message.level);
            lines.push(Line::from(vec![
                Span::styled(format!("{} ", message.icon()), Style::default().fg(color)),
                Span::styled(
                    sanitize(&message.label).into_owned(),
                    Style::default().fg(color),
                ),
            ]));
        }

        let footer = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(Color::DarkGray)),
        );

        f.render_widget(footer, area);
    }
}
