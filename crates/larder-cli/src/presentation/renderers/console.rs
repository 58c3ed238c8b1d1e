use anyhow::Result;
use owo_colors::OwoColorize;
use serde::Serialize;
use std::io::{self, Write};

use super::traits::Renderer;
use crate::presentation::formatters::sanitize;
use crate::presentation::view_models::{
    CommandResultViewModel, CreateView, OutputFormat, ViewOptions,
};

pub struct ConsoleRenderer {
    format: OutputFormat,
    color: bool,
}

impl ConsoleRenderer {
    pub fn new(format: OutputFormat, color: bool) -> Self {
        Self { format, color }
    }

    /// Render into any writer; `render` targets stdout.
    pub fn write_to<T, W>(&self, out: &mut W, result: &CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView,
        W: Write,
    {
        if self.format == OutputFormat::Json {
            writeln!(out, "{}", serde_json::to_string_pretty(result)?)?;
            return Ok(());
        }

        if let Some(badge) = &result.badge {
            let label = sanitize(&badge.label);
            if self.color {
                writeln!(out, "{} {}", badge.icon(), label.bold())?;
            } else {
                writeln!(out, "{} {}", badge.icon(), label)?;
            }
            writeln!(out)?;
        }

        let options = ViewOptions { color: self.color };
        write!(out, "{}", result.content.create_view(options))?;

        if !result.suggestions.is_empty() {
            if self.color {
                writeln!(out, "\n{}", "Tips:".yellow().bold())?;
            } else {
                writeln!(out, "\nTips:")?;
            }
            for tip in &result.suggestions {
                write!(out, "  - {}", tip.description)?;
                if let Some(cmd) = tip.command.as_deref().map(sanitize) {
                    if self.color {
                        write!(out, ": {}", cmd.cyan())?;
                    } else {
                        write!(out, ": {}", cmd)?;
                    }
                }
                writeln!(out)?;
            }
        }

        Ok(())
    }
}

impl Renderer for ConsoleRenderer {
    fn render<T>(&self, result: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView,
    {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.write_to(&mut out, &result)?;
        out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::view_models::{Guidance, NoticeViewModel, StatusBadge};

    fn render(format: OutputFormat) -> String {
        let result = CommandResultViewModel::new(NoticeViewModel::new("Nothing to do"))
            .with_badge(StatusBadge::warning("Item not found"))
            .with_suggestion(Guidance::new("List items").with_command("larder list"));

        let mut buf = Vec::new();
        ConsoleRenderer::new(format, false)
            .write_to(&mut buf, &result)
            .unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_text_output_has_badge_content_and_tips() {
        assert_eq!(
            render(OutputFormat::Text),
            "⚠ Item not found\n\nNothing to do\n\nTips:\n  - List items: larder list\n"
        );
    }

    #[test]
    fn test_json_output_is_the_whole_result() {
        let value: serde_json::Value = serde_json::from_str(&render(OutputFormat::Json)).unwrap();
        assert_eq!(value["badge"]["level"], "warning");
        assert_eq!(value["content"]["message"], "Nothing to do");
        assert_eq!(value["suggestions"][0]["command"], "larder list");
    }

    #[test]
    fn test_tip_commands_are_neutralized() {
        let result = CommandResultViewModel::new(NoticeViewModel::new("Expired"))
            .with_suggestion(Guidance::new("Remove it").with_command("larder rm ab\x1b[2J"));

        let mut buf = Vec::new();
        ConsoleRenderer::new(OutputFormat::Text, false)
            .write_to(&mut buf, &result)
            .unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("  - Remove it: larder rm ab\\u{1b}[2J\n"));
        assert!(!text.contains('\x1b'));
    }
}
