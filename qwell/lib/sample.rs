//! Sampling of wavefunctions over uniform coordinate grids, and output of the
//! resulting tables as delimited text for plotting.
//!
//! Tables are `n × 4` arrays whose columns are
//! ```text
//! x, Re ψ(x), Im ψ(x), |ψ(x)|²
//! ```
//! and are written one row per line with values separated by `" , "`, each
//! with 10 significant digits.
//!
//! ```
//! use num_complex::Complex64 as C64;
//! use qwell::sample::{ sample_wavefunction, probability };
//!
//! let table = sample_wavefunction((0.0, 1.0, 101), |x| C64::new(x.sqrt(), 0.0));
//! assert_eq!(table.shape(), &[101, 4]);
//! assert!((probability(&table).unwrap() - 0.5).abs() < 1e-12);
//! ```

use std::{
    fs,
    io::{ BufWriter, Write },
    path::Path,
};
use ndarray as nd;
use num_complex::Complex64 as C64;
use crate::{
    Arr2,
    error::SinkError,
    utils::trapz,
};

pub type SinkResult<T> = Result<T, SinkError>;

/// Default sampling range (nm).
pub const DEF_RANGE: (f64, f64) = (-3.0, 3.0);

/// Default number of sampling points for potential step wavefunctions.
pub const STEP_POINTS: usize = 501;

/// Default number of sampling points for barrier and well wavefunctions.
pub const BARRIER_POINTS: usize = 1001;

/// Sample a wavefunction over a coordinate grid generated from
/// "linspace-style" arguments (start, inclusive end, and number of points).
pub fn sample_wavefunction<F>(xargs: (f64, f64, usize), mut psi: F)
    -> nd::Array2<f64>
where F: FnMut(f64) -> C64
{
    let x: nd::Array1<f64> = nd::Array1::linspace(xargs.0, xargs.1, xargs.2);
    let mut table: nd::Array2<f64> = nd::Array2::zeros((x.len(), 4));
    for (mut row, &xk) in table.rows_mut().into_iter().zip(x.iter()) {
        let q = psi(xk);
        row[0] = xk;
        row[1] = q.re;
        row[2] = q.im;
        row[3] = q.norm_sqr();
    }
    table
}

/// Integrate the `|ψ|²` column of a table with the trapezoidal rule, assuming
/// uniform grid spacing.
pub fn probability<S>(table: &Arr2<S>) -> SinkResult<f64>
where S: nd::Data<Elem = f64>
{
    let n = table.nrows();
    SinkError::check_grid(n)?;
    let dx = table[[1, 0]] - table[[0, 0]];
    Ok(trapz(&table.column(3), dx))
}

// format with 10 significant digits, switching to exponent notation outside a
// comfortable magnitude range
fn fmt_sig(v: f64) -> String {
    if v == 0.0 || !v.is_finite() { return format!("{}", v); }
    let mag = v.abs().log10().floor() as i32;
    if (-5..10).contains(&mag) {
        let decimals = (9 - mag).max(0) as usize;
        let s = format!("{:.*}", decimals, v);
        if s.contains('.') {
            s.trim_end_matches('0').trim_end_matches('.').to_string()
        } else {
            s
        }
    } else {
        format!("{:.9e}", v)
    }
}

/// Write every row of a table to `writer`.
pub fn write_rows<S, W>(writer: &mut W, table: &Arr2<S>) -> SinkResult<()>
where
    S: nd::Data<Elem = f64>,
    W: Write,
{
    for row in table.rows() {
        let line: Vec<String> = row.iter().map(|v| fmt_sig(*v)).collect();
        writeln!(writer, "{}", line.join(" , "))?;
    }
    Ok(())
}

/// Write a table to the file at `path`, truncating any existing contents.
pub fn write_table<P, S>(path: P, table: &Arr2<S>) -> SinkResult<()>
where
    P: AsRef<Path>,
    S: nd::Data<Elem = f64>,
{
    let path = path.as_ref();
    let file = fs::File::create(path)
        .inspect_err(|err| {
            log::warn!("could not open {} for writing: {}", path.display(), err);
        })?;
    let mut writer = BufWriter::new(file);
    write_rows(&mut writer, table)?;
    writer.flush()?;
    log::debug!("wrote {} rows to {}", table.nrows(), path.display());
    Ok(())
}
