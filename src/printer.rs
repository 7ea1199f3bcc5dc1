//! Textual output of sets, vectors and matrices.
//!
//! All `Display` implementations of the crate go through the printers in this module.
//! The formatter flags are honoured: a precision (`{:.3}`) fixes the number of decimals
//! and the alternate flag (`{:#}`) prints matrices with one row per line.

use std::fmt::{self, Write};
use std::hash::Hash;

use crate::{
    set::ExtendedSet,
    tensors::{matrix::Matrix, vector::Vector},
};

/// The overall print mode.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum PrintMode {
    #[default]
    Plain,
    Latex,
}

impl PrintMode {
    pub fn is_plain(&self) -> bool {
        *self == PrintMode::Plain
    }

    pub fn is_latex(&self) -> bool {
        *self == PrintMode::Latex
    }
}

/// Various options for printing values.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PrintOptions {
    pub mode: PrintMode,
    /// Number of decimals of every printed number.
    pub precision: Option<usize>,
    /// Print a matrix with one row per line and aligned columns.
    pub pretty_matrix: bool,
}

impl PrintOptions {
    pub const fn new() -> Self {
        Self {
            mode: PrintMode::Plain,
            precision: None,
            pretty_matrix: false,
        }
    }

    /// Print the output in a Latex input format.
    pub const fn latex() -> PrintOptions {
        Self {
            mode: PrintMode::Latex,
            ..Self::new()
        }
    }

    /// Print matrices over multiple lines.
    pub const fn pretty() -> PrintOptions {
        Self {
            pretty_matrix: true,
            ..Self::new()
        }
    }

    pub fn from_fmt(f: &fmt::Formatter) -> PrintOptions {
        PrintOptions::new().update_with_fmt(f)
    }

    pub fn update_with_fmt(mut self, f: &fmt::Formatter) -> Self {
        if f.precision().is_some() {
            self.precision = f.precision();
        }

        if f.alternate() {
            self.pretty_matrix = true;
        }
        self
    }

    pub const fn with_precision(mut self, precision: usize) -> Self {
        self.precision = Some(precision);
        self
    }

    fn fmt_number<W: Write>(&self, x: f64, f: &mut W) -> fmt::Result {
        match self.precision {
            Some(p) => write!(f, "{:.*}", p, x),
            None => write!(f, "{}", x),
        }
    }

    fn number_to_string(&self, x: f64) -> String {
        let mut s = String::new();
        // writing to a string cannot fail
        let _ = self.fmt_number(x, &mut s);
        s
    }
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// A printer for matrices.
pub struct MatrixPrinter<'a> {
    pub matrix: &'a Matrix,
    pub opts: PrintOptions,
}

impl<'a> MatrixPrinter<'a> {
    pub fn new(matrix: &'a Matrix) -> MatrixPrinter<'a> {
        MatrixPrinter {
            matrix,
            opts: PrintOptions::default(),
        }
    }

    pub fn new_with_options(matrix: &'a Matrix, opts: PrintOptions) -> MatrixPrinter<'a> {
        MatrixPrinter { matrix, opts }
    }

    fn fmt_pretty(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let cells: Vec<Vec<String>> = self
            .matrix
            .row_iter()
            .map(|r| r.iter().map(|x| self.opts.number_to_string(*x)).collect())
            .collect();

        let mut widths = vec![0; self.matrix.ncols()];
        for r in &cells {
            for (w, c) in widths.iter_mut().zip(r) {
                *w = (*w).max(c.chars().count());
            }
        }

        for (ri, r) in cells.iter().enumerate() {
            f.write_char('[')?;
            for (ci, (c, w)) in r.iter().zip(&widths).enumerate() {
                if ci > 0 {
                    f.write_str("  ")?;
                }
                write!(f, "{:>width$}", c, width = *w)?;
            }
            f.write_char(']')?;
            if ri + 1 < cells.len() {
                f.write_char('\n')?;
            }
        }

        Ok(())
    }
}

impl<'a> fmt::Display for MatrixPrinter<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.opts.mode.is_latex() {
            f.write_str("\\begin{pmatrix}")?;
            for (ri, r) in self.matrix.row_iter().enumerate() {
                if ri > 0 {
                    f.write_str("\\\\")?;
                }
                for (ci, c) in r.iter().enumerate() {
                    if ci > 0 {
                        f.write_str(" & ")?;
                    }
                    self.opts.fmt_number(*c, f)?;
                }
            }
            return f.write_str("\\end{pmatrix}");
        }

        if self.opts.pretty_matrix {
            return self.fmt_pretty(f);
        }

        f.write_char('{')?;
        for (ri, r) in self.matrix.row_iter().enumerate() {
            if ri > 0 {
                f.write_char(',')?;
            }
            f.write_char('{')?;
            for (ci, c) in r.iter().enumerate() {
                if ci > 0 {
                    f.write_char(',')?;
                }
                self.opts.fmt_number(*c, f)?;
            }
            f.write_char('}')?;
        }
        f.write_char('}')
    }
}

/// A printer for vectors.
pub struct VectorPrinter<'a> {
    pub vector: &'a Vector,
    pub opts: PrintOptions,
}

impl<'a> VectorPrinter<'a> {
    pub fn new(vector: &'a Vector) -> VectorPrinter<'a> {
        VectorPrinter {
            vector,
            opts: PrintOptions::default(),
        }
    }

    pub fn new_with_options(vector: &'a Vector, opts: PrintOptions) -> VectorPrinter<'a> {
        VectorPrinter { vector, opts }
    }
}

impl<'a> fmt::Display for VectorPrinter<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let (open, sep, close) = if self.opts.mode.is_latex() {
            ("\\begin{pmatrix}", "\\\\", "\\end{pmatrix}")
        } else {
            ("{", ",", "}")
        };

        f.write_str(open)?;
        for (i, x) in self.vector.iter().enumerate() {
            if i > 0 {
                f.write_str(sep)?;
            }
            self.opts.fmt_number(*x, f)?;
        }
        f.write_str(close)
    }
}

/// A printer for sets. The elements are printed in iteration order.
pub struct SetPrinter<'a, T: Hash + Eq + Clone> {
    pub set: &'a ExtendedSet<T>,
    pub opts: PrintOptions,
}

impl<'a, T: Hash + Eq + Clone> SetPrinter<'a, T> {
    pub fn new(set: &'a ExtendedSet<T>) -> SetPrinter<'a, T> {
        SetPrinter {
            set,
            opts: PrintOptions::default(),
        }
    }

    pub fn new_with_options(set: &'a ExtendedSet<T>, opts: PrintOptions) -> SetPrinter<'a, T> {
        SetPrinter { set, opts }
    }
}

impl<'a, T: Hash + Eq + Clone + fmt::Display> fmt::Display for SetPrinter<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.opts.mode.is_latex() {
            if self.set.is_empty() {
                return f.write_str("\\emptyset");
            }

            f.write_str("\\{")?;
            for (i, e) in self.set.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{}", e)?;
            }
            return f.write_str("\\}");
        }

        f.write_char('{')?;
        for (i, e) in self.set.iter().enumerate() {
            if i > 0 {
                f.write_char(',')?;
            }
            write!(f, "{}", e)?;
        }
        f.write_char('}')
    }
}
