//! Table rendering utilities for CLI outputs.

use unicode_width::UnicodeWidthStr;

use crate::utils::formatting::pad_right;

pub struct Column {
    pub header: String,
    pub width: usize,
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Build a table from headers and rows, sizing each column to its
    /// widest cell (faculty names can be long).
    pub fn fitted(headers: &[&str], rows: Vec<Vec<String>>) -> Self {
        let columns = headers
            .iter()
            .enumerate()
            .map(|(i, h)| {
                let content_max = rows
                    .iter()
                    .map(|r| UnicodeWidthStr::width(r[i].as_str()))
                    .max()
                    .unwrap_or(0);
                Column {
                    header: h.to_string(),
                    width: content_max.max(UnicodeWidthStr::width(*h)),
                }
            })
            .collect();

        Self { columns, rows }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Total rendered width (columns plus the single-space gaps).
    pub fn total_width(&self) -> usize {
        let cols: usize = self.columns.iter().map(|c| c.width).sum();
        cols + self.columns.len().saturating_sub(1)
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        // Header
        for col in &self.columns {
            out.push_str(&pad_right(&col.header, col.width));
            out.push(' ');
        }
        out.push('\n');

        // Rows
        for row in &self.rows {
            for (i, col) in self.columns.iter().enumerate() {
                out.push_str(&pad_right(&row[i], col.width));
                out.push(' ');
            }
            out.push('\n');
        }

        out
    }
}
