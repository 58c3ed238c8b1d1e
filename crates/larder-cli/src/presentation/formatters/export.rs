use anyhow::{Result, anyhow};
use serde::Serialize;
use std::fmt::Write as _;

use crate::presentation::view_models::{ItemViewModel, ShelvesViewModel};

/// Entity-escape `&<>"'` for HTML text and attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

pub fn to_json(shelves: &ShelvesViewModel) -> Result<String> {
    Ok(serde_json::to_string_pretty(shelves)?)
}

#[derive(Serialize)]
struct CsvRow<'a> {
    id: &'a str,
    name: &'a str,
    location: &'a str,
    date: &'a str,
    days_until: i64,
    urgency: &'a str,
    status: &'a str,
}

impl<'a> From<&'a ItemViewModel> for CsvRow<'a> {
    fn from(item: &'a ItemViewModel) -> Self {
        Self {
            id: &item.id,
            name: &item.name,
            location: &item.location,
            date: &item.date,
            days_until: item.days_until,
            urgency: item.urgency.as_str(),
            status: &item.status,
        }
    }
}

/// One row per item, shelves in display order. Quoting is left to `csv`.
pub fn to_csv(shelves: &ShelvesViewModel) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    let items = shelves.shelves.iter().flat_map(|shelf| shelf.items.iter());
    let mut wrote_any = false;
    for item in items {
        writer.serialize(CsvRow::from(item))?;
        wrote_any = true;
    }
    if !wrote_any {
        // serde-driven headers are only emitted with the first record
        writer.write_record([
            "id",
            "name",
            "location",
            "date",
            "days_until",
            "urgency",
            "status",
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|err| anyhow!("Failed to flush CSV: {}", err.error()))?;
    Ok(String::from_utf8(bytes)?)
}

const HTML_STYLE: &str = "\
body { font-family: sans-serif; margin: 2rem; }
section { margin-bottom: 1.5rem; }
table { border-collapse: collapse; min-width: 32rem; }
th, td { text-align: left; padding: 0.25rem 0.75rem; }
.gray { color: #888888; }
.red { color: #c62828; font-weight: bold; }
.yellow { color: #b28704; }
.green { color: #2e7d32; }";

/// Standalone page with one table per location.
pub fn to_html(shelves: &ShelvesViewModel) -> Result<String> {
    let mut html = String::new();

    writeln!(html, "<!DOCTYPE html>")?;
    writeln!(html, "<html lang=\"en\">")?;
    writeln!(html, "<head>")?;
    writeln!(html, "<meta charset=\"utf-8\">")?;
    writeln!(
        html,
        "<title>Larder - {}</title>",
        escape_html(&shelves.today)
    )?;
    writeln!(html, "<style>\n{}\n</style>", HTML_STYLE)?;
    writeln!(html, "</head>")?;
    writeln!(html, "<body>")?;
    writeln!(
        html,
        "<h1>Larder <small>{}</small></h1>",
        escape_html(&shelves.today)
    )?;

    for shelf in &shelves.shelves {
        let location = escape_html(&shelf.location);
        writeln!(html, "<section>")?;
        writeln!(html, "<h2>{} ({})</h2>", location, shelf.items.len())?;

        if shelf.items.is_empty() {
            writeln!(html, "<p>No items</p>")?;
        } else {
            writeln!(html, "<table>")?;
            writeln!(
                html,
                "<tr><th>Name</th><th>Date</th><th>Status</th></tr>"
            )?;
            for item in &shelf.items {
                writeln!(
                    html,
                    "<tr class=\"{}\" data-id=\"{}\"><td>{}</td><td>{}</td><td>{}</td></tr>",
                    item.urgency.as_str(),
                    escape_html(&item.id),
                    escape_html(&item.name),
                    escape_html(&item.date),
                    escape_html(&item.status),
                )?;
            }
            writeln!(html, "</table>")?;
        }
        writeln!(html, "</section>")?;
    }

    writeln!(html, "</body>")?;
    writeln!(html, "</html>")?;
    Ok(html)
}
