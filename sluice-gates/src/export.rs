//! Flat tabular export of bank results.
//!
//! One CSV row per gate, in gate order, with the columns:
//!
//! | column                     | unit |
//! |----------------------------|------|
//! | `Gate`                     | –    |
//! | `Sill (m)`                 | m    |
//! | `Opening Height (m)`       | m    |
//! | `Water Depth (m)`          | m    |
//! | `Flow - V.T. Chow (m³/s)`  | m³/s |
//! | `Flow - Corps Ref (m³/s)`  | m³/s |
//! | `Percent Error (%)`        | %    |
//!
//! Values are written with the shortest representation that round-trips to
//! the same `f64`, so the export loses no precision.

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use thiserror::Error;
use tracing::info;
use uom::si::{length::meter, ratio::percent, volume_rate::cubic_meter_per_second};

use crate::bank::{BankResults, GateResult};

/// Default file name of the CSV export.
pub const DEFAULT_FILE_NAME: &str = "sluice_gate_results.csv";

/// Header row of the CSV export.
pub const HEADER: [&str; 7] = [
    "Gate",
    "Sill (m)",
    "Opening Height (m)",
    "Water Depth (m)",
    "Flow - V.T. Chow (m³/s)",
    "Flow - Corps Ref (m³/s)",
    "Percent Error (%)",
];

/// Errors that may occur while exporting results.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ExportError {
    #[error("failed to create `{path}`")]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write CSV record")]
    Csv(#[from] csv::Error),

    #[error("failed to write results")]
    Write(#[from] std::io::Error),
}

/// Writes results as CSV to any writer.
///
/// # Errors
///
/// Returns an [`ExportError`] if a record cannot be written or the writer
/// fails to flush.
pub fn write_csv<W: Write>(results: &BankResults, writer: W) -> Result<(), ExportError> {
    let mut csv_writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    csv_writer.write_record(HEADER)?;
    for gate in results.iter() {
        csv_writer.write_record(row(gate))?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Writes results as CSV to a file, replacing any existing file.
///
/// # Errors
///
/// Returns an [`ExportError`] if the file cannot be created or written.
pub fn export_csv(results: &BankResults, path: &Path) -> Result<(), ExportError> {
    let file = File::create(path).map_err(|source| ExportError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    write_csv(results, BufWriter::new(file))?;
    info!(path = %path.display(), rows = results.gates.len(), "exported results");
    Ok(())
}

fn row(gate: &GateResult) -> [String; 7] {
    let GateResult { spec, flow } = gate;
    [
        spec.id.to_string(),
        spec.sill.get::<meter>().to_string(),
        spec.opening.get::<meter>().to_string(),
        flow.depth.get::<meter>().to_string(),
        flow.energy.rate().get::<cubic_meter_per_second>().to_string(),
        flow.momentum.rate().get::<cubic_meter_per_second>().to_string(),
        flow.percent_deviation.get::<percent>().to_string(),
    ]
}
