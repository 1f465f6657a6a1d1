//! Box-drawn text tables.
//!
//! Cells may carry ANSI color sequences; widths are measured on the visible
//! text only.

use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone, Default)]
pub struct Table {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
    footer: Option<String>,
}

impl Table {
    pub fn new<I, S>(header: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            header: header.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
            footer: None,
        }
    }

    /// Adds a body row. Missing cells render empty, extra cells are dropped.
    pub fn add_row(&mut self, row: Vec<String>) {
        let mut row: Vec<String> = row.into_iter().map(|cell| flatten(&cell)).collect();
        row.resize(self.header.len(), String::new());
        self.rows.push(row);
    }

    /// Footer line spanning all columns
    pub fn set_footer(&mut self, footer: impl Into<String>) {
        self.footer = Some(flatten(&footer.into()));
    }

    pub fn render(&self) -> String {
        let mut widths: Vec<usize> = self.header.iter().map(|h| visible_width(h)).collect();
        for row in &self.rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(visible_width(cell));
            }
        }

        if let Some(footer) = &self.footer {
            let inner = inner_width(&widths);
            let needed = visible_width(footer) + 2;
            if needed > inner {
                if let Some(last) = widths.last_mut() {
                    *last += needed - inner;
                }
            }
        }

        let mut out = String::new();
        out.push_str(&border(&widths, '┌', '┬', '┐'));

        let header: Vec<String> = self
            .header
            .iter()
            .zip(&widths)
            .map(|(cell, width)| center(cell, *width))
            .collect();
        out.push_str(&line(&header));
        out.push_str(&border(&widths, '├', '┼', '┤'));

        for row in &self.rows {
            let cells: Vec<String> = row
                .iter()
                .zip(&widths)
                .map(|(cell, width)| pad_right(cell, *width))
                .collect();
            out.push_str(&line(&cells));
        }

        match &self.footer {
            Some(footer) => {
                out.push_str(&border(&widths, '├', '┴', '┤'));
                let inner = inner_width(&widths);
                out.push('│');
                out.push_str(&center(footer, inner.saturating_sub(2)));
                out.push_str("│\n");
                out.push('└');
                out.push_str(&"─".repeat(inner));
                out.push_str("┘\n");
            }
            None => out.push_str(&border(&widths, '└', '┴', '┘')),
        }

        out
    }
}

/// Display width of `text` without ANSI escape sequences
pub fn visible_width(text: &str) -> usize {
    strip_ansi(text).width()
}

fn strip_ansi(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c == '\u{1b}' {
            // CSI sequence: ESC [ params final-byte
            if chars.next() == Some('[') {
                for c in chars.by_ref() {
                    if ('@'..='~').contains(&c) {
                        break;
                    }
                }
            }
        } else {
            out.push(c);
        }
    }
    out
}

fn flatten(cell: &str) -> String {
    cell.replace("\r\n", " ").replace(['\n', '\r'], " ")
}

/// Width between the outer borders: padded cells plus inner separators
fn inner_width(widths: &[usize]) -> usize {
    widths.iter().map(|w| w + 2).sum::<usize>() + widths.len().saturating_sub(1)
}

fn border(widths: &[usize], left: char, middle: char, right: char) -> String {
    let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
    format!("{}{}{}\n", left, segments.join(&middle.to_string()), right)
}

fn line(cells: &[String]) -> String {
    format!("│{}│\n", cells.join("│"))
}

fn pad_right(cell: &str, width: usize) -> String {
    let fill = width.saturating_sub(visible_width(cell));
    format!(" {}{} ", cell, " ".repeat(fill))
}

fn center(cell: &str, width: usize) -> String {
    let fill = width.saturating_sub(visible_width(cell));
    let left = fill / 2;
    format!(
        " {}{}{} ",
        " ".repeat(left),
        cell,
        " ".repeat(fill - left)
    )
}
