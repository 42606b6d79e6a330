//! JSON output for company reports.
//!
//! # Output Structure
//!
//! Reports are grouped by company slug and named after the UTC date they
//! were generated on; a later run on the same day replaces the earlier file:
//! ```text
//! json_output_dir/
//! └── tesla/
//!     ├── 2025-05-06.json
//!     └── 2025-05-07.json
//! ```

use crate::models::CompanyReport;
use crate::utils::slugify;
use std::error::Error;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{error, info, instrument};

/// Path of the JSON file for `report` under `json_output_dir`.
pub fn report_path(report: &CompanyReport, json_output_dir: &Path) -> PathBuf {
    json_output_dir
        .join(slugify(&report.company))
        .join(format!("{}.json", report.generated_at.format("%Y-%m-%d")))
}

/// Write a [`CompanyReport`] as pretty-printed JSON and return the file path.
#[instrument(level = "info", skip_all, fields(json_output_dir = %json_output_dir.display()))]
pub async fn write_report(
    report: &CompanyReport,
    json_output_dir: &Path,
) -> Result<PathBuf, Box<dyn Error>> {
    let json = serde_json::to_string_pretty(report)?;
    let path = report_path(report, json_output_dir);

    if let Some(dir) = path.parent() {
        info!(dir = %dir.display(), "Ensuring JSON directory exists");
        if let Err(e) = fs::create_dir_all(dir).await {
            error!(dir = %dir.display(), error = %e, "Failed to create JSON dir");
            return Err(e.into());
        }
    }

    fs::write(&path, json).await?;
    info!(path = %path.display(), "Wrote JSON report");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::comparative::aggregate;
    use chrono::{TimeZone, Utc};

    pub(crate) fn empty_report(company: &str) -> CompanyReport {
        CompanyReport {
            company: company.to_string(),
            articles: Vec::new(),
            comparative_analysis: aggregate(&[]),
            final_summary: "No valid articles found.".to_string(),
            final_audio: None,
            final_audio_error: Some("nothing to narrate".to_string()),
            outcomes: Vec::new(),
            generated_at: Utc.with_ymd_and_hms(2025, 5, 6, 20, 30, 0).unwrap(),
        }
    }

    #[test]
    fn test_report_path() {
        let report = empty_report("Johnson & Johnson");
        assert_eq!(
            report_path(&report, Path::new("/out")),
            PathBuf::from("/out/johnson-johnson/2025-05-06.json")
        );
    }

    #[tokio::test]
    async fn test_write_report_round_trips_key_fields() {
        let dir = tempfile::tempdir().unwrap();
        let report = empty_report("Tesla");
        let path = write_report(&report, dir.path()).await.unwrap();

        let written: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written["company"], "Tesla");
        assert_eq!(written["final_summary"], "No valid articles found.");
        assert!(written["final_audio"].is_null());
        assert_eq!(
            written["comparative_analysis"]["sentiment_distribution"]["Happy"],
            0
        );
        assert_eq!(
            written["comparative_analysis"]["coverage_difference"][0]["impact"],
            "N/A"
        );
    }
}
