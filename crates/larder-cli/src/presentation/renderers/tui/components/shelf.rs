use larder_types::Location;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
};

use super::{Component, urgency_color};
use crate::presentation::formatters::{sanitize, truncate};
use crate::presentation::renderers::tui::app::AppState;

/// One column of the board.
pub(crate) struct ShelfComponent {
    pub location: Location,
}

impl Component for ShelfComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &AppState) {
        let items = state.shelf(self.location);
        let active = state.column == self.location;

        let border = if active {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(format!(" {} ({}) ", self.location, items.len()));

        if items.is_empty() {
            let empty = List::new([ListItem::new(Line::styled(
                "No items",
                Style::default().fg(Color::DarkGray),
            ))])
            .block(block);
            f.render_widget(empty, area);
            return;
        }

        // Borders, highlight symbol and the date column.
        let name_width = usize::from(area.width.saturating_sub(2 + 2 + 12)).max(4);

        let rows: Vec<ListItem> = items
            .iter()
            .map(|item| {
                let style = Style::default().fg(urgency_color(item.urgency));
                ListItem::new(vec![
                    Line::from(vec![
                        Span::styled(
                            format!(
                                "{:<width$}",
                                truncate(&sanitize(&item.name), name_width),
                                width = name_width
                            ),
                            style.add_modifier(Modifier::BOLD),
                        ),
                        Span::raw(" "),
                        Span::styled(item.date.clone(), Style::default().fg(Color::Gray)),
                    ]),
                    Line::styled(format!("  {}", item.status), style),
                ])
            })
            .collect();

        let mut list_state = ListState::default();
        if active {
            list_state.select(state.selected_row(self.location));
        }

        let list = List::new(rows)
            .block(block)
            .highlight_style(Style::default().bg(Color::Rgb(40, 40, 40)))
            .highlight_symbol("> ");

        f.render_stateful_widget(list, area, &mut list_state);
    }
}
