//! CSV results table, one row per solved instance.
//!
//! ```text
//! Instance_ID,Num_Vertices,Num_Edges,Hamiltonian_Path,Hamiltonian_Cycle,Largest_Cycle_Size,Algorithm,Time
//! 1,4,5,"[1, 2, 3, 4]","[1, 2, 3, 4, 1]",4,BruteForce,0.000012
//! 3,5,4,None,None,0,BruteForce,0.000004
//! ```
//!
//! Fields are quoted only when needed, so vertex lists (which contain commas) are
//! quoted while `None`, the algorithm name and the numbers are written bare. A
//! reader that expects `"BruteForce"` quoted gets the same field value either way.

use std::fs::File;
use std::io;
use std::path::Path;
use std::time::Duration;

use crate::cs::graph::Vertex;
use crate::error::Result;

pub const HEADER: [&str; 8] = [
    "Instance_ID",
    "Num_Vertices",
    "Num_Edges",
    "Hamiltonian_Path",
    "Hamiltonian_Cycle",
    "Largest_Cycle_Size",
    "Algorithm",
    "Time",
];

/// Marker written in place of a missing path or cycle.
pub const NONE: &str = "None";

/// Outcome of one algorithm on one instance.
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    pub instance_id: String,
    pub vertex_count: usize,
    pub edge_count: usize,
    pub path: Option<Vec<Vertex>>,
    pub cycle: Option<Vec<Vertex>>,
    pub largest_cycle: usize,
    pub algorithm: &'static str,
    pub elapsed: Duration,
}

impl Record {
    fn fields(&self) -> [String; 8] {
        [
            self.instance_id.clone(),
            self.vertex_count.to_string(),
            self.edge_count.to_string(),
            format_vertices(self.path.as_deref()),
            format_vertices(self.cycle.as_deref()),
            self.largest_cycle.to_string(),
            self.algorithm.to_string(),
            format!("{:.6}", self.elapsed.as_secs_f64()),
        ]
    }
}

/// Renders `[1, 2, 3]`, or [`NONE`] when absent.
#[must_use]
pub fn format_vertices(vertices: Option<&[Vertex]>) -> String {
    match vertices {
        Some(vs) => {
            let items: Vec<String> = vs.iter().map(ToString::to_string).collect();
            format!("[{}]", items.join(", "))
        }
        None => NONE.to_string(),
    }
}

/// Writes records as CSV rows under a fixed header.
pub struct ReportWriter<W: io::Write> {
    inner: csv::Writer<W>,
}

impl ReportWriter<File> {
    /// Creates (or truncates) the CSV file at `path` and writes the header.
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        Self::new(File::create(path)?)
    }
}

impl<W: io::Write> ReportWriter<W> {
    /// Wraps `writer` and writes the header row.
    pub fn new(writer: W) -> Result<Self> {
        let mut inner = csv::WriterBuilder::new().has_headers(false).from_writer(writer);
        inner.write_record(HEADER)?;
        Ok(ReportWriter { inner })
    }

    pub fn write(&mut self, record: &Record) -> Result<()> {
        self.inner.write_record(record.fields())?;
        Ok(())
    }

    pub fn write_all<'a>(&mut self, records: impl IntoIterator<Item = &'a Record>) -> Result<()> {
        for record in records {
            self.write(record)?;
        }
        Ok(())
    }

    /// Flushes buffered rows and returns the underlying writer.
    pub fn into_inner(self) -> Result<W> {
        self.inner
            .into_inner()
            .map_err(|e| e.into_error().into())
    }
}
