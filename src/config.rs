use std::path::PathBuf;

/// Configuration for one pipeline run.
///
/// The main binary uses [`Config::default`]; tests build their own so the
/// pipeline never depends on process-wide state.
#[derive(Debug, Clone)]
pub struct Config {
    /// GDC sample sheet (tab-separated) mapping files to sample types.
    /// Quantification files are expected next to it, at `<File ID>/<File Name>`.
    pub sample_sheet: PathBuf,
    /// Gene identifier to look up in each quantification file.
    pub target_gene: String,
    /// Destination PNG; overwritten if it already exists.
    pub output_image: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            sample_sheet: PathBuf::from("gdc_sample_sheet.tsv"),
            target_gene: "NKX2-1".to_string(),
            output_image: PathBuf::from("nkx2-1_boxplot.png"),
        }
    }
}
