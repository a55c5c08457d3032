//! `Display` formatting for [`Matrix`].

use core::fmt;

use super::Matrix;

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.nrows == 1 {
            write!(f, "matrix([")?;
            write_row(f, self.row(0))?;
            return write!(f, "])");
        }

        writeln!(f, "matrix([")?;
        for (r, row) in self.rows().enumerate() {
            write!(f, "  ")?;
            write_row(f, row)?;
            if r < self.nrows - 1 {
                writeln!(f, ",")?;
            } else {
                writeln!(f)?;
            }
        }
        write!(f, "])")
    }
}

fn write_row(f: &mut fmt::Formatter<'_>, row: &[f64]) -> fmt::Result {
    write!(f, "[")?;
    for (i, v) in row.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        match f.precision() {
            Some(p) => write!(f, "{v:.p$}")?,
            None => write!(f, "{v}")?,
        }
    }
    write!(f, "]")
}
