use std::io::Write;

use comfy_table::{modifiers, presets, CellAlignment, ContentArrangement, Table};
use terminal_size::{terminal_size, Width};

use crate::error::RenderError;

use super::row::ProductRow;
use super::state::RenderState;
use super::target::RenderTarget;
use super::NO_RESULTS_MESSAGE;

pub const COLUMN_HEADERS: [&str; 3] = ["Product ID", "Product Name", "Price"];

pub fn build_table(rows: &[ProductRow], width: Option<u16>) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL);
    table.apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    if let Some(w) = width {
        table.set_width(w);
    }
    table.set_header(COLUMN_HEADERS.to_vec());
    for r in rows {
        table.add_row(vec![&r.id, &r.name, &r.price]);
    }
    if let Some(col) = table.column_mut(2) {
        col.set_cell_alignment(CellAlignment::Right);
    }
    table
}

/// Serialize the rows of a results state as a JSON array.
pub fn render_json(state: &RenderState) -> Result<String, RenderError> {
    Ok(serde_json::to_string_pretty(state.rows())?)
}

/// Writes render states to a terminal (or any writer) as tables.
pub struct TerminalTarget<W: Write> {
    out: W,
    width: Option<u16>,
}

impl<W: Write> TerminalTarget<W> {
    pub fn new(out: W) -> Self {
        Self { out, width: None }
    }

    /// Size the table to the attached terminal, leaving a small margin.
    pub fn fit_to_terminal(mut self) -> Self {
        if let Some((Width(w), _)) = terminal_size() {
            self.width = Some(w.saturating_sub(4));
        }
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> RenderTarget for TerminalTarget<W> {
    fn render(&mut self, state: &RenderState) -> Result<(), RenderError> {
        match state {
            RenderState::Empty => {}
            RenderState::Error(message) => {
                writeln!(self.out, "{}", yansi::Paint::new(message).red())?;
            }
            RenderState::Results(rows) if rows.is_empty() => {
                writeln!(self.out, "{}", yansi::Paint::new(NO_RESULTS_MESSAGE).dim())?;
            }
            RenderState::Results(rows) => {
                let table = build_table(rows, self.width);
                writeln!(self.out, "\n{table}\n")?;
            }
        }
        self.out.flush()?;
        Ok(())
    }
}
