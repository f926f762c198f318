//! Column-aligned text tables.
//!
//! Output follows tab-writer rules: every column is as wide as its widest
//! cell plus a fixed gap, but never narrower than [`MIN_WIDTH`], and
//! trailing whitespace is stripped. A free-text
//! [`Line::Message`] interrupts the table; rows after it start a new
//! alignment block.

use tabled::builder::Builder;
use tabled::settings::object::Segment;
use tabled::settings::{Padding, Style, Width};

/// Smallest column width, gap included
pub const MIN_WIDTH: usize = 15;

/// Gap between columns in the image tables
pub const IMAGE_GAP: usize = 2;

/// Gap between columns in the builders table
pub const BUILDER_GAP: usize = 4;

/// One output line below the header
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    /// A regular row of cells
    Cells(Vec<String>),
    /// Text printed verbatim in place of a row
    Message(String),
}

impl Line {
    /// Row from anything string-like
    pub fn cells<I, S>(cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Line::Cells(cells.into_iter().map(Into::into).collect())
    }
}

/// Renders `header` and `lines` as aligned text without a trailing newline.
pub fn render(header: &[&str], lines: &[Line], gap: usize) -> String {
    let mut output: Vec<String> = Vec::new();
    let mut block = Builder::default();
    block.push_record(header.iter().map(|h| h.to_string()));
    let mut block_rows = 1;

    for line in lines {
        match line {
            Line::Cells(cells) => {
                block.push_record(cells.iter().cloned());
                block_rows += 1;
            }
            Line::Message(text) => {
                if block_rows > 0 {
                    output.extend(render_block(block, gap));
                }
                output.push(text.trim_end().to_string());
                block = Builder::default();
                block_rows = 0;
            }
        }
    }

    if block_rows > 0 {
        output.extend(render_block(block, gap));
    }

    output.join("\n")
}

/// Renders one run of rows that share column widths.
fn render_block(block: Builder, gap: usize) -> Vec<String> {
    let mut table = block.build();
    table
        .with(Style::empty())
        .with(Padding::new(0, gap, 0, 0))
        .modify(Segment::all(), Width::increase(MIN_WIDTH.saturating_sub(gap)));

    table
        .to_string()
        .lines()
        .map(|line| line.trim_end().to_string())
        .collect()
}
