//! Plot data export.
//!
//! Curves are collected as [`Series`] and rendered to long-format CSV 
//! (`series,x,y`, one row per point) by [`export_csv`], ready for any 
//! external plotting tool.

use std::path::Path;

use thiserror::Error; 

use crate::root_finding::ScalarFunction; 


#[derive(Debug, Error)]
pub enum PlotError { 
    #[error("no series to export")]
    Empty,

    #[error("series `{label}` has {x_len} x-values but {y_len} y-values")]
    UnequalLength { label: String, x_len: usize, y_len: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}


/// One labelled curve.
#[derive(Debug, Clone, PartialEq)]
pub struct Series { 
    pub label : String, 
    pub x     : Vec<f64>, 
    pub y     : Vec<f64>, 
}

impl Series { 
    pub fn new(label: impl Into<String>, x: Vec<f64>, y: Vec<f64>) -> Self { 
        Self { label: label.into(), x, y }
    }

    /// Samples `f` over `grid`.
    pub fn sample<F>(label: impl Into<String>, grid: &[f64], f: F) -> Self 
    where F: ScalarFunction { 
        let y = grid.iter().map(|&x| f.eval(x)).collect(); 
        Self::new(label, grid.to_vec(), y)
    }

    pub fn len(&self) -> usize { 
        self.x.len()
    }

    pub fn is_empty(&self) -> bool { 
        self.x.is_empty()
    }
}


/// Renders `series` as CSV with header `series,x,y`.
///
/// # Errors 
/// - [`PlotError::Empty`]         : `series` is empty  
/// - [`PlotError::UnequalLength`] : some series has `x.len() != y.len()`  
pub fn export_csv(series: &[Series]) -> Result<String, PlotError> { 
    if series.is_empty() { 
        return Err(PlotError::Empty);
    }

    let mut csv = String::from("series,x,y\n"); 
    for s in series { 
        if s.x.len() != s.y.len() { 
            return Err(PlotError::UnequalLength { 
                label: s.label.clone(), 
                x_len: s.x.len(), 
                y_len: s.y.len() 
            });
        }

        let label = escape_csv_field(&s.label); 
        for (&x, &y) in s.x.iter().zip(&s.y) { 
            csv.push_str(&label);
            csv.push(',');
            csv.push_str(&format_number(x));
            csv.push(',');
            csv.push_str(&format_number(y));
            csv.push('\n');
        }
    }

    Ok(csv)
}

/// Writes [`export_csv`] output to `path`.
pub fn save_csv(series: &[Series], path: &Path) -> Result<(), PlotError> { 
    let csv = export_csv(series)?; 
    std::fs::write(path, csv)?; 
    Ok(())
}


fn escape_csv_field(field: &str) -> String {
    if field.contains([',', '"', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

fn format_number(num: f64) -> String {
    if (num.abs() < 1e-10 && num != 0.0) || num.abs() > 1e10 {
        format!("{:e}", num)
    } else {
        num.to_string()
    }
}
