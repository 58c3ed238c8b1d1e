use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use super::{Component, centered};
use crate::presentation::formatters::sanitize;
use crate::presentation::renderers::tui::app::{AppState, FormField};

/// Add/edit form drawn over the board.
pub(crate) struct FormComponent;

impl FormComponent {
    fn field<'a>(label: &'a str, value: String, focused: bool) -> Line<'a> {
        let label_style = if focused {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        let value = if focused { format!("{}_", value) } else { value };
        Line::from(vec![
            Span::styled(format!("{:<10}", label), label_style),
            Span::raw(value),
        ])
    }
}

impl Component for FormComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &AppState) {
        let Some(form) = &state.form else {
            return;
        };

        let title = if form.editing { " Edit item " } else { " Add item " };
        let location = if form.focus == FormField::Location {
            format!("< {} >", form.location)
        } else {
            form.location.to_string()
        };

        let mut lines = vec![
            Self::field(
                "Name",
                sanitize(&form.name).into_owned(),
                form.focus == FormField::Name,
            ),
            Self::field(
                "Date",
                sanitize(&form.date).into_owned(),
                form.focus == FormField::Date,
            ),
            Self::field("Location", location, form.focus == FormField::Location),
            Line::raw(""),
        ];
        if let Some(error) = &form.error {
            lines.push(Line::styled(
                sanitize(error).into_owned(),
                Style::default().fg(Color::Red),
            ));
        }

        let popup = centered(area, 48, 8);
        f.render_widget(Clear, popup);
        f.render_widget(
            Paragraph::new(lines)
                .wrap(Wrap { trim: false })
                .block(Block::default().borders(Borders::ALL).title(title)),
            popup,
        );
    }
}

pub(crate) struct ConfirmComponent;

impl Component for ConfirmComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &AppState) {
        let Some(name) = &state.confirm else {
            return;
        };

        let popup = centered(area, 44, 5);
        f.render_widget(Clear, popup);
        f.render_widget(
            Paragraph::new(vec![
                Line::raw(format!("Delete {}?", sanitize(name))),
                Line::styled("[y] delete   [n] keep", Style::default().fg(Color::Gray)),
            ])
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Red))
                    .title(" Confirm "),
            ),
            popup,
        );
    }
}
