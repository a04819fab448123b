//! Table rendering utilities for CLI outputs.

use ansi_term::Style;
use unicode_width::UnicodeWidthStr;

pub struct Column {
    pub header: String,
    pub width: usize,
}

impl Column {
    pub fn new(header: impl Into<String>, width: usize) -> Self {
        Self {
            header: header.into(),
            width,
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
    header_style: Style,
    body_style: Style,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            header_style: Style::new().bold(),
            body_style: Style::new(),
        }
    }

    pub fn with_styles(mut self, header: Style, body: Style) -> Self {
        self.header_style = header;
        self.body_style = body;
        self
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Effective widths: the declared minimum widened to fit every cell.
    fn widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                self.rows
                    .iter()
                    .filter_map(|r| r.get(i))
                    .map(|c| UnicodeWidthStr::width(c.as_str()))
                    .chain([col.width, UnicodeWidthStr::width(col.header.as_str())])
                    .max()
                    .unwrap_or(col.width)
            })
            .collect()
    }

    pub fn render(&self) -> String {
        let widths = self.widths();
        let mut out = String::new();

        let header: Vec<&str> = self.columns.iter().map(|c| c.header.as_str()).collect();
        out.push_str(&self.header_style.paint(line(&header, &widths)).to_string());
        out.push('\n');

        let total: usize = widths.iter().map(|w| w + 1).sum();
        out.push_str(&"-".repeat(total.saturating_sub(1)));
        out.push('\n');

        for row in &self.rows {
            let cells: Vec<&str> = row.iter().map(String::as_str).collect();
            out.push_str(&self.body_style.paint(line(&cells, &widths)).to_string());
            out.push('\n');
        }

        out
    }
}

fn line(cells: &[&str], widths: &[usize]) -> String {
    let mut s = String::new();
    for (i, w) in widths.iter().enumerate() {
        let cell = cells.get(i).copied().unwrap_or("");
        let pad = w.saturating_sub(UnicodeWidthStr::width(cell));
        s.push_str(cell);
        s.push_str(&" ".repeat(pad));
        if i + 1 < widths.len() {
            s.push(' ');
        }
    }
    s.trim_end().to_string()
}
