//! Form view model and its plain-text rendering.

use std::fmt::Write;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextField {
    pub name: &'static str,
    pub title: String,
    pub description: String,
    pub size: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitButton {
    pub label: String,
}

/// What the display phase produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormView {
    /// Nothing to list; only a notice is shown.
    Empty { notice: String },
    Listing {
        instructions: String,
        table: Table,
        field: TextField,
        submit: SubmitButton,
    },
}

pub trait Renderer {
    fn render(&self, view: &FormView) -> String;
}

/// Renders forms as aligned plain text for a terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalRenderer;

impl TerminalRenderer {
    fn table(table: &Table, out: &mut String) {
        let columns = table.header.len();
        let mut widths: Vec<usize> = table.header.iter().map(|h| h.chars().count()).collect();
        for row in &table.rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let line = |cells: &[String]| {
            let padded: Vec<String> = (0..columns)
                .map(|i| {
                    let cell = cells.get(i).map(String::as_str).unwrap_or("");
                    format!("{cell:<width$}", width = widths[i])
                })
                .collect();
            padded.join("  ").trim_end().to_string()
        };

        let _ = writeln!(out, "{}", line(&table.header));
        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        let _ = writeln!(out, "{}", rule.join("  "));
        for row in &table.rows {
            let _ = writeln!(out, "{}", line(row));
        }
    }
}

impl Renderer for TerminalRenderer {
    fn render(&self, view: &FormView) -> String {
        let mut out = String::new();
        match view {
            FormView::Empty { notice } => {
                let _ = writeln!(out, "{notice}");
            }
            FormView::Listing {
                instructions,
                table,
                field,
                submit,
            } => {
                let _ = writeln!(out, "{instructions}\n");
                Self::table(table, &mut out);
                let _ = writeln!(out);
                let _ = writeln!(out, "{} ({})", field.title, field.description);
                let _ = writeln!(out, "[{}]", submit.label);
            }
        }
        out
    }
}
