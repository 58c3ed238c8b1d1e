use larder_engine::Urgency;
use ratatui::{Frame, layout::Rect, style::Color};

use super::app::AppState;
use crate::presentation::view_models::StatusLevel;

pub(crate) trait Component {
    fn render(&self, f: &mut Frame, area: Rect, state: &AppState);
}

pub(crate) mod footer;
pub(crate) mod modal;
pub(crate) mod shelf;

pub(crate) use footer::FooterComponent;
pub(crate) use modal::{ConfirmComponent, FormComponent};
pub(crate) use shelf::ShelfComponent;

pub(crate) fn urgency_color(urgency: Urgency) -> Color {
    match urgency {
        Urgency::Gray => Color::DarkGray,
        Urgency::Red => Color::Red,
        Urgency::Yellow => Color::Yellow,
        Urgency::Green => Color::Green,
    }
}

pub(crate) fn status_level_to_color(level: StatusLevel) -> Color {
    match level {
        StatusLevel::Success => Color::Green,
        StatusLevel::Info => Color::Cyan,
        StatusLevel::Warning => Color::Yellow,
        StatusLevel::Error => Color::Red,
    }
}

/// A `width` x `height` box in the middle of `area`, shrunk to fit.
pub(crate) fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_shrinks_to_area() {
        let area = Rect::new(0, 0, 20, 10);
        assert_eq!(centered(area, 10, 4), Rect::new(5, 3, 10, 4));
        assert_eq!(centered(area, 50, 50), area);
    }
}
