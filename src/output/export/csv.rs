//! CSV export of profile sequences
//!
//! One row per retained time instant: the instant itself followed by the
//! full profile, so the file carries the complete history a plotting or
//! analysis script needs. Readable by pandas, Excel, gnuplot and friends.
//!
//! ```csv
//! t,w0,w1,w2
//! 0.000000000,0.000000000,1.000000000,0.000000000
//! 0.010000000,0.000000000,0.999013042,0.000000000
//! ```

use nalgebra::DVector;
use std::error::Error;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::solver::SimulationResult;

// =================================================================================================
// Configuration
// =================================================================================================

/// Configuration for CSV export.
#[derive(Debug, Clone)]
pub struct CsvConfig {
    /// Column delimiter (default: ',')
    pub delimiter: char,

    /// Number of decimal places for floating-point values (default: 9)
    pub precision: usize,

    /// Header for the time column (default: "t")
    pub time_header: String,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            precision: 9,
            time_header: "t".to_string(),
        }
    }
}

impl CsvConfig {
    /// Config with 15 decimal places, enough to round-trip f64 histories.
    pub fn high_precision() -> Self {
        Self {
            precision: 15,
            ..Default::default()
        }
    }
}

// =================================================================================================
// Export functions
// =================================================================================================

/// Export an aligned time/profile sequence.
///
/// # Arguments
///
/// * `time_points` - Retained instants
/// * `profiles` - One profile per instant, all the same length
/// * `output_path` - Output file; parent directories are created
/// * `config` - Optional CSV configuration
///
/// # Errors
///
/// Fails on empty or misaligned sequences and on I/O problems.
pub fn export_profiles_csv(
    time_points: &[f64],
    profiles: &[DVector<f64>],
    output_path: &str,
    config: Option<&CsvConfig>,
) -> Result<(), Box<dyn Error>> {
    let owned_config = config.cloned().unwrap_or_default();
    let config = &owned_config;

    if time_points.is_empty() {
        return Err("Nothing to export: empty time axis".into());
    }
    if time_points.len() != profiles.len() {
        return Err(format!(
            "Time axis has {} instants but {} profiles were given",
            time_points.len(),
            profiles.len()
        )
        .into());
    }
    let points = profiles[0].len();
    if profiles.iter().any(|p| p.len() != points) {
        return Err("Profiles have inconsistent lengths".into());
    }

    let mut writer = create_writer(output_path)?;

    // Header: t,w0,w1,...
    write!(writer, "{}", config.time_header)?;
    for i in 0..points {
        write!(writer, "{}w{}", config.delimiter, i)?;
    }
    writeln!(writer)?;

    for (t, profile) in time_points.iter().zip(profiles.iter()) {
        write!(writer, "{:.prec$}", t, prec = config.precision)?;
        for value in profile.iter() {
            write!(writer, "{}{:.prec$}", config.delimiter, value, prec = config.precision)?;
        }
        writeln!(writer)?;
    }

    writer.flush()?;
    Ok(())
}

/// Export the pointwise error history of a run: one row per instant with
/// the maximum absolute difference between the numerical and analytical
/// profiles.
pub fn export_error_summary_csv(
    result: &SimulationResult,
    output_path: &str,
    config: Option<&CsvConfig>,
) -> Result<(), Box<dyn Error>> {
    let owned_config = config.cloned().unwrap_or_default();
    let config = &owned_config;

    if result.is_empty() {
        return Err("Nothing to export: empty simulation result".into());
    }

    let mut writer = create_writer(output_path)?;

    writeln!(writer, "{}{}max_abs_error", config.time_header, config.delimiter)?;
    for i in 0..result.len() {
        writeln!(
            writer,
            "{:.prec$}{}{:.prec$e}",
            result.time_points[i],
            config.delimiter,
            result.max_error_at(i),
            prec = config.precision
        )?;
    }

    writer.flush()?;
    Ok(())
}

fn create_writer(output_path: &str) -> Result<BufWriter<File>, Box<dyn Error>> {
    let path = Path::new(output_path);
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    Ok(BufWriter::new(File::create(path)?))
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::HeatRod;
    use crate::solver::{CrankNicolson, StepperConfig};
    use tempfile::tempdir;

    #[test]
    fn test_export_profiles() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("profiles.csv");

        let time = vec![0.0, 0.5];
        let profiles = vec![
            DVector::from_vec(vec![0.0, 1.0, 0.0]),
            DVector::from_vec(vec![0.0, 0.5, 0.0]),
        ];

        export_profiles_csv(&time, &profiles, path.to_str().unwrap(), None).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("t,w0,w1,w2"));
        assert_eq!(lines.clone().count(), 2);
        assert!(lines.next().unwrap().starts_with("0.000000000,"));
    }

    #[test]
    fn test_export_creates_parent_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested/deeper/profiles.csv");

        let time = vec![0.0];
        let profiles = vec![DVector::from_vec(vec![1.0])];

        export_profiles_csv(&time, &profiles, path.to_str().unwrap(), None).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_misaligned_sequences_rejected() {
        let time = vec![0.0, 1.0];
        let profiles = vec![DVector::from_vec(vec![1.0])];

        let result = export_profiles_csv(&time, &profiles, "unused.csv", None);
        assert!(result.is_err());
    }

    #[test]
    fn test_inconsistent_profiles_rejected() {
        let time = vec![0.0, 1.0];
        let profiles = vec![
            DVector::from_vec(vec![1.0, 2.0]),
            DVector::from_vec(vec![1.0]),
        ];

        let result = export_profiles_csv(&time, &profiles, "unused.csv", None);
        assert!(result.unwrap_err().to_string().contains("inconsistent"));
    }

    #[test]
    fn test_error_summary() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("errors.csv");

        let rod = HeatRod::new(1.0, 0.01, 11).unwrap();
        let result = CrankNicolson::new()
            .solve(&rod, &StepperConfig::new(0.01, 5))
            .unwrap();

        export_error_summary_csv(&result, path.to_str().unwrap(), None).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("t,max_abs_error"));
        assert_eq!(text.lines().count(), 7); // header + 6 instants
    }

    #[test]
    fn test_custom_delimiter_and_precision() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("profiles.csv");

        let config = CsvConfig {
            delimiter: ';',
            precision: 3,
            time_header: "time".to_string(),
        };

        let time = vec![0.25];
        let profiles = vec![DVector::from_vec(vec![0.125])];
        export_profiles_csv(&time, &profiles, path.to_str().unwrap(), Some(&config)).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().next(), Some("time;w0"));
        assert!(text.contains("0.250;0.125"));
    }
}
