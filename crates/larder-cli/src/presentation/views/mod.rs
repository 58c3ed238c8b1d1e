mod export;
mod init;
mod item;
mod notice;
mod shelves;

pub use item::ItemLine;
pub use shelves::ShelvesView;

use larder_engine::Urgency;
use owo_colors::OwoColorize;

/// Paint already laid-out text in its urgency color.
pub(crate) fn paint(text: &str, urgency: Urgency, color: bool) -> String {
    if !color {
        return text.to_string();
    }
    match urgency {
        Urgency::Gray => text.bright_black().to_string(),
        Urgency::Red => text.red().bold().to_string(),
        Urgency::Yellow => text.yellow().to_string(),
        Urgency::Green => text.green().to_string(),
    }
}

pub(crate) fn heading(text: &str, color: bool) -> String {
    if color {
        text.bold().to_string()
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paint_without_color_is_plain() {
        assert_eq!(paint("Milk", Urgency::Red, false), "Milk");
    }

    #[test]
    fn test_paint_with_color_adds_ansi() {
        let painted = paint("Milk", Urgency::Red, true);
        assert!(painted.contains("\x1b["));
        assert!(painted.contains("Milk"));
    }
}
