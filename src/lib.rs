//! Extract a single gene's expression from a cohort of TCGA quantification
//! files, split samples into Primary Tumor / Solid Tissue Normal via the GDC
//! sample sheet, and render a two-group boxplot PNG.

pub mod config;
pub mod data;
pub mod error;
pub mod plot;

use anyhow::Result;

pub use config::Config;
pub use error::PipelineError;

/// Run the whole pipeline: parse the sample sheet, extract per-sample
/// expression for both groups, render the boxplot.
///
/// Progress goes to stdout; per-file skip reasons only show up at
/// `RUST_LOG=debug`. A missing sample sheet aborts before any extraction
/// and nothing is written to disk.
pub fn run(config: &Config) -> Result<()> {
    println!("Step 1: Parsing metadata...");
    let groups = data::sheet::load_sample_sheet(&config.sample_sheet)?;
    println!("Found {} Tumor samples.", groups.tumor.len());
    println!("Found {} Normal samples.", groups.normal.len());

    println!("Step 2: Extracting {} expression...", config.target_gene);
    let tumor_values = data::expression::extract_gene_values(&groups.tumor, &config.target_gene);
    let normal_values = data::expression::extract_gene_values(&groups.normal, &config.target_gene);

    println!("Step 3: Creating Boxplot...");
    plot::render_boxplot(
        &normal_values,
        &tumor_values,
        &config.target_gene,
        &config.output_image,
    )?;

    println!("Success! Plot saved to {}", config.output_image.display());
    Ok(())
}
