//! Textual rendering for [`Matrix`], with a truncated view for large shapes.

use std::fmt;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::matrix::Matrix;

/// Marker printed in place of a sentinel/empty matrix.
pub const EMPTY_MARKER: &str = "[empty matrix]";

/// Controls how a matrix is rendered.
///
/// The window sizes and precision are cosmetic defaults, not a contract;
/// callers are free to override any of them.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct DisplayOptions {
    /// Rows printed before the rest is elided.
    pub max_rows: usize,
    /// Columns printed per row before the rest is elided.
    pub max_cols: usize,
    /// Fixed-notation decimal places.
    pub precision: usize,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            max_rows: 10,
            max_cols: 8,
            precision: 2,
        }
    }
}

fn render<W: fmt::Write>(m: &Matrix, opts: &DisplayOptions, out: &mut W) -> fmt::Result {
    if m.is_empty() {
        return writeln!(out, "{EMPTY_MARKER}");
    }

    let (rows, cols) = m.shape();
    let show_rows = rows.min(opts.max_rows.max(1));
    let show_cols = cols.min(opts.max_cols.max(1));
    let truncated = show_rows < rows || show_cols < cols;
    if truncated {
        debug!("truncating {rows}x{cols} matrix view to {show_rows}x{show_cols}");
    }

    for i in 0..show_rows {
        write!(out, " [")?;
        for j in 0..show_cols {
            if j > 0 {
                write!(out, "   ")?;
            }
            write!(out, "{:.*}", opts.precision, m[(i, j)])?;
        }
        if show_cols < cols {
            write!(out, "   ...")?;
        }
        writeln!(out, "]")?;
    }
    if show_rows < rows {
        writeln!(out, " ...")?;
    }
    if truncated {
        writeln!(out, "{rows}x{cols} (showing {show_rows}x{show_cols})")?;
    }
    Ok(())
}

impl Matrix {
    /// Renders the matrix as text with the given options.
    pub fn format_with(&self, opts: &DisplayOptions) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = render(self, opts, &mut out);
        out
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, &DisplayOptions::default(), f)
    }
}
