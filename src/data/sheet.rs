use std::path::Path;

use anyhow::{Context, Result};

use super::model::{SampleGroups, SampleRecord, PRIMARY_TUMOR, SOLID_TISSUE_NORMAL};
use crate::error::PipelineError;

/// Parse the GDC sample sheet and partition samples into tumor / normal
/// file-path lists.
///
/// Quantification files are resolved relative to the sheet's own directory,
/// so a sheet at `cohort/gdc_sample_sheet.tsv` yields paths under `cohort/`.
///
/// Rows whose `Sample Type` matches neither recognised label are dropped,
/// and rows that fail to deserialise (missing columns) are skipped; both
/// only show up at debug log level. A missing sheet file is fatal.
pub fn load_sample_sheet(path: &Path) -> Result<SampleGroups> {
    if !path.exists() {
        return Err(PipelineError::SheetNotFound(path.to_path_buf()).into());
    }
    let base = path.parent().unwrap_or_else(|| Path::new(""));

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .from_path(path)
        .with_context(|| format!("opening sample sheet {}", path.display()))?;

    let mut groups = SampleGroups::default();

    for (row_no, result) in reader.deserialize::<SampleRecord>().enumerate() {
        let record = match result {
            Ok(r) => r,
            Err(err) => {
                log::debug!("sample sheet row {row_no}: skipped ({err})");
                continue;
            }
        };
        match record.sample_type.as_str() {
            PRIMARY_TUMOR => groups.tumor.push(base.join(record.file_path())),
            SOLID_TISSUE_NORMAL => groups.normal.push(base.join(record.file_path())),
            other => {
                log::debug!("sample sheet row {row_no}: unrecognised sample type '{other}'");
            }
        }
    }

    Ok(groups)
}
