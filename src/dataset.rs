use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};

use crate::models::{DatasetAverages, EsgRecord};

/// Raw dataset headers and their canonical names. Headers are trimmed before
/// matching; anything not listed keeps its trimmed name.
const COLUMN_RENAMES: &[(&str, &str)] = &[
    ("Total ESG Risk score", "Total_ESG"),
    ("Environment Risk Score", "Environment"),
    ("Social Risk Score", "Social"),
    ("Governance Risk Score", "Governance"),
    ("Controversy Score", "Controversy"),
    ("ESG Risk Level", "Normal_Risk"),
    ("Controversy Level", "Controversy_Level"),
    ("Sector", "Sector"),
];

/// The cleaned reference dataset.
///
/// Loaded once at startup; rows with a missing or unparseable required field
/// are dropped at load time and counted, never surfaced at use time.
#[derive(Debug)]
pub struct Dataset {
    pub records: Vec<EsgRecord>,
    /// Rows excluded during cleaning.
    pub dropped: usize,
}

impl Dataset {
    /// Load and clean a CSV dataset.
    ///
    /// Fails if the file cannot be read or a required column is absent —
    /// there are no partial-load semantics for the reference data.
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("failed to open dataset {}", path.display()))?;
        let mut reader = csv::Reader::from_reader(file);

        let headers = reader
            .headers()
            .with_context(|| format!("failed to read headers from {}", path.display()))?;

        // Normalize column names: trim, then apply the canonical rename map.
        let mut columns: HashMap<String, usize> = HashMap::new();
        for (idx, raw) in headers.iter().enumerate() {
            let trimmed = raw.trim();
            let canonical = COLUMN_RENAMES
                .iter()
                .find(|(from, _)| *from == trimmed)
                .map(|(_, to)| *to)
                .unwrap_or(trimmed);
            columns.insert(canonical.to_string(), idx);
        }

        let col = |name: &str| -> Result<usize> {
            columns
                .get(name)
                .copied()
                .with_context(|| format!("dataset is missing required column `{name}`"))
        };

        let total_esg = col("Total_ESG")?;
        let environment = col("Environment")?;
        let social = col("Social")?;
        let governance = col("Governance")?;
        let controversy = col("Controversy")?;
        let normal_risk = col("Normal_Risk")?;
        let controversy_level = col("Controversy_Level")?;
        let sector = col("Sector")?;

        let mut records = Vec::new();
        let mut dropped = 0usize;

        for row in reader.records() {
            let row = row.with_context(|| format!("failed to read row from {}", path.display()))?;

            let numeric = |idx: usize| -> Option<f64> {
                row.get(idx)
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .and_then(|s| s.parse::<f64>().ok())
                    .filter(|v| v.is_finite())
            };
            let text = |idx: usize| row.get(idx).unwrap_or("").trim().to_string();

            let record = match (
                numeric(total_esg),
                numeric(environment),
                numeric(social),
                numeric(governance),
                numeric(controversy),
            ) {
                (Some(total_esg), Some(environment), Some(social), Some(governance), Some(controversy)) => {
                    EsgRecord {
                        total_esg,
                        environment,
                        social,
                        governance,
                        controversy,
                        normal_risk: text(normal_risk),
                        controversy_level: text(controversy_level),
                        sector: text(sector),
                    }
                }
                _ => {
                    dropped += 1;
                    continue;
                }
            };

            // The risk and controversy labels are part of the required set.
            if record.normal_risk.is_empty() || record.controversy_level.is_empty() {
                dropped += 1;
                continue;
            }

            records.push(record);
        }

        anyhow::ensure!(
            !records.is_empty(),
            "dataset {} contains no usable rows",
            path.display()
        );

        Ok(Self { records, dropped })
    }

    /// Per-metric means, optionally restricted to one sector
    /// (case-insensitive). `None` when the filter matches no records.
    pub fn averages(&self, sector: Option<&str>) -> Option<DatasetAverages> {
        let matching: Vec<&EsgRecord> = match sector {
            Some(name) => self
                .records
                .iter()
                .filter(|r| r.sector.eq_ignore_ascii_case(name))
                .collect(),
            None => self.records.iter().collect(),
        };

        if matching.is_empty() {
            return None;
        }

        let n = matching.len() as f64;
        Some(DatasetAverages {
            environment: matching.iter().map(|r| r.environment).sum::<f64>() / n,
            social: matching.iter().map(|r| r.social).sum::<f64>() / n,
            governance: matching.iter().map(|r| r.governance).sum::<f64>() / n,
        })
    }

    /// Distinct sector names, sorted. Used for the unknown-sector hint.
    pub fn sectors(&self) -> Vec<String> {
        let mut sectors: Vec<String> = self
            .records
            .iter()
            .map(|r| r.sector.clone())
            .filter(|s| !s.is_empty())
            .collect();
        sectors.sort();
        sectors.dedup();
        sectors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    const SAMPLE: &str = "\
Symbol, Total ESG Risk score ,Environment Risk Score,Social Risk Score,Governance Risk Score,Controversy Score,ESG Risk Level,Controversy Level,Sector
AAA,21.0,8.0,7.0,6.0,1.0,Medium,Low,Technology
BBB,30.0,12.0,10.0,8.0,3.0,High,Elevated,Energy
CCC,15.0,6.0,,4.0,1.0,Low,Low,Technology
DDD,18.0,7.0,n/a,5.0,2.0,Low,Moderate,Utilities
EEE,24.0,10.0,8.0,6.0,2.0,Medium,Moderate,technology
";

    fn write_sample(content: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("esg.csv");
        let mut file = File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        (dir, path)
    }

    #[test]
    fn test_load_drops_incomplete_rows() {
        let (_dir, path) = write_sample(SAMPLE);
        let dataset = Dataset::load(&path).unwrap();

        // CCC has an empty Social field, DDD an unparseable one.
        assert_eq!(dataset.records.len(), 3);
        assert_eq!(dataset.dropped, 2);
    }

    #[test]
    fn test_header_normalization_handles_stray_spaces() {
        // ` Total ESG Risk score ` is padded in SAMPLE; loading succeeds and
        // the values land in the right field.
        let (_dir, path) = write_sample(SAMPLE);
        let dataset = Dataset::load(&path).unwrap();
        assert_eq!(dataset.records[0].total_esg, 21.0);
        assert_eq!(dataset.records[0].normal_risk, "Medium");
    }

    #[test]
    fn test_averages_over_all_records() {
        let (_dir, path) = write_sample(SAMPLE);
        let dataset = Dataset::load(&path).unwrap();
        let avg = dataset.averages(None).unwrap();

        assert!((avg.environment - 10.0).abs() < 1e-9);
        assert!((avg.social - 25.0 / 3.0).abs() < 1e-9);
        assert!((avg.governance - 20.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_sector_filter_is_case_insensitive() {
        let (_dir, path) = write_sample(SAMPLE);
        let dataset = Dataset::load(&path).unwrap();
        let avg = dataset.averages(Some("TECHNOLOGY")).unwrap();

        // AAA and EEE.
        assert!((avg.environment - 9.0).abs() < 1e-9);
        assert!((avg.social - 7.5).abs() < 1e-9);
        assert!((avg.governance - 6.0).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_sector_yields_none() {
        let (_dir, path) = write_sample(SAMPLE);
        let dataset = Dataset::load(&path).unwrap();
        assert!(dataset.averages(Some("Aerospace")).is_none());
    }

    #[test]
    fn test_sectors_are_sorted_and_deduped() {
        let (_dir, path) = write_sample(SAMPLE);
        let dataset = Dataset::load(&path).unwrap();
        assert_eq!(dataset.sectors(), vec!["Energy", "Technology", "technology"]);
    }

    #[test]
    fn test_missing_required_column_fails() {
        let (_dir, path) = write_sample(
            "Symbol,Environment Risk Score,Social Risk Score\nAAA,8.0,7.0\n",
        );
        let err = Dataset::load(&path).unwrap_err();
        assert!(err.to_string().contains("missing required column"));
    }

    #[test]
    fn test_missing_file_fails() {
        let dir = tempdir().unwrap();
        assert!(Dataset::load(&dir.path().join("absent.csv")).is_err());
    }
}
