use bevy::prelude::*;
use chrono::Local;
use std::fmt;
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufRead, BufReader, LineWriter, Write};
use std::path::{Path, PathBuf};

use crate::components::TelemetryRecord;
use crate::utils::{Result, SimError};

const FILE_PREFIX: &str = "data-";
const FILE_EXTENSION: &str = "txt";

/// Append-only telemetry sink, one `x y bank elapsed` line per tick.
#[derive(Resource, Debug)]
pub struct TelemetryWriter {
    path: PathBuf,
    writer: LineWriter<File>,
    records: usize,
}

impl TelemetryWriter {
    /// Creates a fresh `data-YYYYmmdd-HHMMSS.txt` under `dir`, creating the
    /// directory if needed. A run started within the same second gets a
    /// numeric suffix rather than reusing the file.
    pub fn create(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;

        let stem = format!("{}{}", FILE_PREFIX, Local::now().format("%Y%m%d-%H%M%S"));
        let mut attempt = 0;
        loop {
            let name = match attempt {
                0 => format!("{}.{}", stem, FILE_EXTENSION),
                n => format!("{}-{}.{}", stem, n, FILE_EXTENSION),
            };
            match Self::create_at(dir.join(name)) {
                Err(SimError::Io(e)) if e.kind() == io::ErrorKind::AlreadyExists => attempt += 1,
                result => return result,
            }
        }
    }

    /// Creates the telemetry file at exactly `path`; fails if it exists.
    pub fn create_at(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = OpenOptions::new()
            .append(true)
            .create_new(true)
            .open(&path)?;
        info!("Writing telemetry to {}", path.display());

        Ok(Self {
            path,
            writer: LineWriter::new(file),
            records: 0,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn records(&self) -> usize {
        self.records
    }

    pub fn append(&mut self, record: &TelemetryRecord) -> Result<()> {
        writeln!(self.writer, "{}", record)?;
        self.records += 1;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

/// Most recent telemetry file in `dir`, judged by its timestamped name.
pub fn latest_telemetry_file(dir: impl AsRef<Path>) -> Result<Option<PathBuf>> {
    let mut latest: Option<PathBuf> = None;
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let is_telemetry = path.is_file()
            && path.extension().is_some_and(|ext| ext == FILE_EXTENSION)
            && path
                .file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| name.starts_with(FILE_PREFIX));

        if is_telemetry && latest.as_ref().map_or(true, |best| path > *best) {
            latest = Some(path);
        }
    }
    Ok(latest)
}

/// A telemetry file read back into memory.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TelemetryLog {
    records: Vec<TelemetryRecord>,
}

/// Column view of a log, ready for plotting against time.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TelemetrySeries {
    pub time: Vec<f64>,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub bank: Vec<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TelemetrySummary {
    pub samples: usize,
    /// Elapsed time of the last sample (s).
    pub duration: f64,
    /// Bank angle with the largest magnitude seen (degrees).
    pub peak_bank: f64,
    pub final_bank: f64,
    /// Net lateral displacement over the run (m).
    pub lateral_drift: f64,
    /// Net altitude change over the run (m).
    pub altitude_change: f64,
}

impl TelemetryLog {
    pub fn new(records: Vec<TelemetryRecord>) -> Self {
        Self { records }
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let reader = BufReader::new(File::open(path)?);

        let mut records = Vec::new();
        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let record = line.parse::<TelemetryRecord>().map_err(|e| {
                SimError::TelemetryError(format!("{}:{}: {}", path.display(), index + 1, e))
            })?;
            records.push(record);
        }

        Ok(Self { records })
    }

    pub fn records(&self) -> &[TelemetryRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn series(&self) -> TelemetrySeries {
        let mut series = TelemetrySeries::default();
        for record in &self.records {
            series.time.push(record.elapsed);
            series.x.push(record.x);
            series.y.push(record.y);
            series.bank.push(record.bank);
        }
        series
    }

    /// `None` for an empty log.
    pub fn summary(&self) -> Option<TelemetrySummary> {
        let first = self.records.first()?;
        let last = self.records.last()?;
        let peak_bank = self
            .records
            .iter()
            .map(|r| r.bank)
            .fold(0.0_f64, |peak, bank| if bank.abs() > peak.abs() { bank } else { peak });

        Some(TelemetrySummary {
            samples: self.records.len(),
            duration: last.elapsed,
            peak_bank,
            final_bank: last.bank,
            lateral_drift: last.x - first.x,
            altitude_change: last.y - first.y,
        })
    }
}

impl fmt::Display for TelemetrySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "samples:         {}", self.samples)?;
        writeln!(f, "duration:        {:.3} s", self.duration)?;
        writeln!(f, "peak bank:       {:.3}°", self.peak_bank)?;
        writeln!(f, "final bank:      {:.3}°", self.final_bank)?;
        writeln!(f, "lateral drift:   {:.3} m", self.lateral_drift)?;
        write!(f, "altitude change: {:.3} m", self.altitude_change)
    }
}
