use std::path::{Path, PathBuf};

use serde::Deserialize;

/// `Sample Type` label for tumor tissue, exactly as the GDC sheet spells it.
pub const PRIMARY_TUMOR: &str = "Primary Tumor";
/// `Sample Type` label for adjacent normal tissue.
pub const SOLID_TISSUE_NORMAL: &str = "Solid Tissue Normal";

// ---------------------------------------------------------------------------
// SampleRecord – one row of the sample sheet
// ---------------------------------------------------------------------------

/// One row of the GDC sample sheet. Field names follow the sheet's header
/// text; any extra columns in the sheet are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct SampleRecord {
    #[serde(rename = "File ID")]
    pub file_id: String,
    #[serde(rename = "File Name")]
    pub file_name: String,
    #[serde(rename = "Sample Type")]
    pub sample_type: String,
}

impl SampleRecord {
    /// Location of this sample's quantification file: `<File ID>/<File Name>`.
    pub fn file_path(&self) -> PathBuf {
        Path::new(&self.file_id).join(&self.file_name)
    }
}

// ---------------------------------------------------------------------------
// SampleGroups – cohort file paths split by clinical label
// ---------------------------------------------------------------------------

/// Quantification-file paths partitioned by clinical group, in sheet row
/// order. Built once during sheet parsing and never mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct SampleGroups {
    pub tumor: Vec<PathBuf>,
    pub normal: Vec<PathBuf>,
}
