use larder_engine::Urgency;
use larder_types::Location;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::app::AppState;
use super::components::{
    Component, ConfirmComponent, FooterComponent, FormComponent, ShelfComponent, urgency_color,
};

pub(crate) fn draw(f: &mut Frame, state: &AppState) {
    let footer_height = if state.message.is_some() { 3 } else { 2 };

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(footer_height),
        ])
        .split(f.area());

    render_header(f, main_chunks[0], state);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(main_chunks[1]);

    for (location, area) in Location::ALL.into_iter().zip(columns.iter()) {
        ShelfComponent { location }.render(f, *area, state);
    }

    FooterComponent.render(f, main_chunks[2], state);

    let screen = f.area();
    if state.form.is_some() {
        FormComponent.render(f, screen, state);
    } else if state.confirm.is_some() {
        ConfirmComponent.render(f, screen, state);
    }
}

fn render_header(f: &mut Frame, area: Rect, state: &AppState) {
    let counts = state.screen.counts;
    let mut spans = vec![
        Span::styled("Larder", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(format!("  {}  ", state.screen.today)),
    ];

    for (count, urgency, label) in [
        (counts.expired, Urgency::Gray, "expired"),
        (counts.red, Urgency::Red, "soon"),
        (counts.yellow, Urgency::Yellow, "this week"),
        (counts.green, Urgency::Green, "later"),
    ] {
        spans.push(Span::styled(
            format!("{} {}  ", count, label),
            Style::default().fg(urgency_color(urgency)),
        ));
    }

    if state.live {
        spans.push(Span::styled("● live", Style::default().fg(Color::Green)));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use larder_runtime::Controller;
    use larder_store::{ItemStore, MemoryBackend};
    use larder_types::ItemFields;
    use ratatui::{Terminal, backend::TestBackend};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    fn controller_with_milk() -> Controller {
        let mut store = ItemStore::open(Box::new(MemoryBackend::new())).unwrap();
        store
            .add(&ItemFields::new(
                "Milk",
                Location::Fridge,
                NaiveDate::from_ymd_opt(2026, 10, 19).unwrap(),
            ))
            .unwrap();
        Controller::new(store)
    }

    fn screen_text(state: &AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(90, 20)).unwrap();
        terminal.draw(|f| draw(f, state)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_board_shows_three_shelves() {
        let controller = controller_with_milk();
        let state = AppState::new(&controller, today());

        let text = screen_text(&state);
        assert!(text.contains("Fridge (1)"));
        assert!(text.contains("Freezer (0)"));
        assert!(text.contains("Pantry (0)"));
        assert!(text.contains("Milk"));
        assert!(text.contains("Expires tomorrow!"));
        assert!(text.contains("2026-10-18"));
    }

    #[test]
    fn test_form_overlays_board() {
        let mut controller = controller_with_milk();
        let mut state = AppState::new(&controller, today());
        state.handle_key(
            KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE),
            &mut controller,
        );

        let text = screen_text(&state);
        assert!(text.contains("Add item"));
        assert!(text.contains("Enter save"));
    }
}
