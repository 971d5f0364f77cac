//! Writers for per-frame sample records.

use std::io::Write;

use orbita_config::{LengthUnit, OutputFormat};
use orbita_kepler::{Position, units};
use serde::Serialize;

use crate::error::SimError;

/// One emitted frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SampleRecord {
    pub step: u64,
    /// Elapsed time since periapsis, seconds.
    pub time_s: f64,
    pub x: f64,
    pub y: f64,
}

impl SampleRecord {
    /// Build a record from an SI position, converting lengths to `unit`.
    pub fn new(step: u64, time_s: f64, position_m: Position, unit: LengthUnit) -> Self {
        Self {
            step,
            time_s,
            x: to_unit(position_m.x, unit),
            y: to_unit(position_m.y, unit),
        }
    }
}

/// Convert a length in meters to `unit`.
pub fn to_unit(meters: f64, unit: LengthUnit) -> f64 {
    match unit {
        LengthUnit::Meters => meters,
        LengthUnit::AstronomicalUnits => units::meters_to_au(meters),
    }
}

/// Streams [`SampleRecord`]s as CSV or JSON lines.
pub struct RecordWriter<W: Write> {
    out: W,
    format: OutputFormat,
    header_written: bool,
}

impl<W: Write> RecordWriter<W> {
    pub fn new(out: W, format: OutputFormat) -> Self {
        Self {
            out,
            format,
            header_written: false,
        }
    }

    pub fn write(&mut self, record: &SampleRecord) -> Result<(), SimError> {
        match self.format {
            OutputFormat::Csv => {
                if !self.header_written {
                    writeln!(self.out, "step,time_s,x,y")?;
                    self.header_written = true;
                }
                writeln!(
                    self.out,
                    "{},{},{},{}",
                    record.step, record.time_s, record.x, record.y
                )?;
            }
            OutputFormat::Json => {
                serde_json::to_writer(&mut self.out, record)?;
                writeln!(self.out)?;
            }
        }
        Ok(())
    }

    pub fn flush(&mut self) -> Result<(), SimError> {
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(step: u64) -> SampleRecord {
        SampleRecord {
            step,
            time_s: 10.0 * step as f64,
            x: 1.5,
            y: -0.25,
        }
    }

    #[test]
    fn test_csv_has_single_header() {
        let mut writer = RecordWriter::new(Vec::new(), OutputFormat::Csv);
        writer.write(&record(0)).unwrap();
        writer.write(&record(1)).unwrap();
        let text = String::from_utf8(writer.into_inner()).unwrap();
        assert_eq!(text, "step,time_s,x,y\n0,0,1.5,-0.25\n1,10,1.5,-0.25\n");
    }

    #[test]
    fn test_json_lines() {
        let mut writer = RecordWriter::new(Vec::new(), OutputFormat::Json);
        writer.write(&record(2)).unwrap();
        let text = String::from_utf8(writer.into_inner()).unwrap();
        let value: serde_json::Value = serde_json::from_str(text.trim_end()).unwrap();
        assert_eq!(value["step"], 2);
        assert_eq!(value["x"], 1.5);
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn test_record_converts_to_au() {
        let pos = Position::new(units::AU_METERS, -2.0 * units::AU_METERS);
        let rec = SampleRecord::new(3, 0.0, pos, LengthUnit::AstronomicalUnits);
        assert!((rec.x - 1.0).abs() < 1e-12);
        assert!((rec.y + 2.0).abs() < 1e-12);

        let rec = SampleRecord::new(3, 0.0, pos, LengthUnit::Meters);
        assert_eq!(rec.x, units::AU_METERS);
    }
}
