//! Table rendering utilities for CLI outputs.

use crate::utils::formatting::pad_right;
use unicode_width::UnicodeWidthStr;

pub struct Table {
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    fn column_widths(&self) -> Vec<usize> {
        let cols = self.rows.iter().map(Vec::len).max().unwrap_or(0);
        (0..cols)
            .map(|i| {
                self.rows
                    .iter()
                    .filter_map(|r| r.get(i))
                    .map(|c| c.width())
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    /// Render with a box border. `draw_line(index, size)` decides whether a
    /// horizontal rule goes before row `index`; `index == size` is the bottom.
    pub fn render<F>(&self, draw_line: F) -> String
    where
        F: Fn(usize, usize) -> bool,
    {
        let widths = self.column_widths();
        let size = self.rows.len();
        let mut out = String::new();

        let rule = |left: &str, fill: &str, join: &str, right: &str| -> String {
            let parts: Vec<String> = widths.iter().map(|w| fill.repeat(w + 2)).collect();
            format!("{}{}{}\n", left, parts.join(join), right)
        };

        for (idx, row) in self.rows.iter().enumerate() {
            if draw_line(idx, size) {
                if idx == 0 {
                    out.push_str(&rule("╔", "═", "╤", "╗"));
                } else {
                    out.push_str(&rule("╟", "─", "┼", "╢"));
                }
            }

            let cells: Vec<String> = widths
                .iter()
                .enumerate()
                .map(|(i, w)| {
                    let cell = row.get(i).map(String::as_str).unwrap_or("");
                    format!(" {} ", pad_right(cell, *w))
                })
                .collect();
            out.push_str(&format!("║{}║\n", cells.join("│")));
        }

        if draw_line(size, size) {
            out.push_str(&rule("╚", "═", "╧", "╝"));
        }

        out
    }
}

impl Default for Table {
    fn default() -> Self {
        Self::new()
    }
}
