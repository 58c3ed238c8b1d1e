use anyhow::{Context as _, Result};
use chrono::NaiveDate;
use is_terminal::IsTerminal;
use larder_runtime::Larder;
use larder_types::parse_date;
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};

use crate::presentation::{ConsoleRenderer, OutputFormat};
use crate::types;

/// Pins "today" for a whole invocation (used by tests and demos).
pub const TODAY_ENV: &str = "LARDER_TODAY";

pub struct ExecutionContext {
    data_dir: PathBuf,
    format: OutputFormat,
    color: bool,
    pinned_today: OnceCell<Option<NaiveDate>>,
}

impl ExecutionContext {
    pub fn new(data_dir: PathBuf, format: types::OutputFormat) -> Self {
        let format = OutputFormat::from(format);
        Self {
            data_dir,
            format,
            color: format == OutputFormat::Text && std::io::stdout().is_terminal(),
            pinned_today: OnceCell::new(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Whether text output may carry ANSI colors.
    pub fn color(&self) -> bool {
        self.color
    }

    pub fn renderer(&self) -> ConsoleRenderer {
        ConsoleRenderer::new(self.format, self.color)
    }

    pub fn open(&self) -> Result<Larder> {
        Larder::open(&self.data_dir)
            .with_context(|| format!("Failed to open {}", self.data_dir.display()))
    }

    /// The local date, unless pinned through `LARDER_TODAY`.
    pub fn today(&self) -> Result<NaiveDate> {
        let pinned = self.pinned_today.get_or_try_init(|| -> Result<_> {
            match std::env::var(TODAY_ENV) {
                Ok(text) => parse_date(&text)
                    .map(Some)
                    .with_context(|| format!("{} is not a valid date", TODAY_ENV)),
                Err(_) => Ok(None),
            }
        })?;
        Ok(pinned.unwrap_or_else(larder_engine::today_local))
    }
}
