//! Generate a small synthetic cohort (sample sheet + quantification files)
//! so the boxplot tool can be tried without downloading TCGA data.
//!
//! Layout written into `demo_cohort/`:
//! ```text
//! demo_cohort/gdc_sample_sheet.tsv
//! demo_cohort/<file-id>/<file-id>.rna_seq.tsv   (one per sample)
//! ```
//! Tumor samples draw the target gene's TPM from a high log-normal,
//! normal samples from a low one, so the resulting boxplot shows a
//! clear separation.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

const COHORT_DIR: &str = "demo_cohort";
const TARGET_GENE: &str = "NKX2-1";
const TUMOR_SAMPLES: usize = 40;
const NORMAL_SAMPLES: usize = 12;

/// Background genes to pad each quantification file with.
const BACKGROUND_GENES: [&str; 6] = ["GAPDH", "TP53", "EGFR", "KRAS", "ACTB", "MYC"];

/// Minimal deterministic PRNG (splitmix64 core).
struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        SimpleRng { state: seed }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9e3779b97f4a7c15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
        z ^ (z >> 31)
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal deviates.
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }

    /// Log-normal TPM: `2^gauss(log2_mean, log2_sd)`.
    fn tpm(&mut self, log2_mean: f64, log2_sd: f64) -> f64 {
        self.gauss(log2_mean, log2_sd).exp2()
    }
}

fn file_id(rng: &mut SimpleRng) -> String {
    // Shaped like a GDC UUID, hex only.
    let mut id = String::new();
    for (i, group) in [8usize, 4, 4, 4, 12].iter().enumerate() {
        if i > 0 {
            id.push('-');
        }
        for _ in 0..*group {
            id.push(char::from_digit((rng.next_u64() % 16) as u32, 16).unwrap());
        }
    }
    id
}

/// One STAR-counts style quantification file: summary lines, column header,
/// then one row per gene with TPM in column 7.
fn write_quant_file(path: &Path, target_tpm: f64, rng: &mut SimpleRng) -> Result<()> {
    let mut body = String::new();
    body.push_str("N_unmapped\t\t\t481021\t481021\t481021\t\t\t\n");
    body.push_str("N_multimapping\t\t\t257114\t257114\t257114\t\t\t\n");
    body.push_str("N_noFeature\t\t\t139855\t203412\t198776\t\t\t\n");
    body.push_str(
        "gene_id\tgene_name\tgene_type\tunstranded\tstranded_first\tstranded_second\ttpm_unstranded\tfpkm_unstranded\tfpkm_uq_unstranded\n",
    );

    let mut genes: Vec<(&str, f64)> = BACKGROUND_GENES
        .iter()
        .map(|g| (*g, rng.tpm(5.0, 1.5)))
        .collect();
    genes.push((TARGET_GENE, target_tpm));

    for (i, (gene, tpm)) in genes.iter().enumerate() {
        let counts = (tpm * 87.3) as u64;
        body.push_str(&format!(
            "ENSG{:011}.{}\t{}\tprotein_coding\t{}\t{}\t{}\t{:.4}\t{:.4}\t{:.4}\n",
            134000 + i,
            rng.next_u64() % 9 + 1,
            gene,
            counts,
            counts / 2,
            counts / 2,
            tpm,
            tpm * 0.92,
            tpm * 1.07,
        ));
    }

    fs::write(path, body).with_context(|| format!("writing {}", path.display()))
}

fn main() -> Result<()> {
    env_logger::init();

    let mut rng = SimpleRng::new(42);
    let cohort = Path::new(COHORT_DIR);
    fs::create_dir_all(cohort).context("creating cohort directory")?;

    let sheet_path = cohort.join("gdc_sample_sheet.tsv");
    let mut sheet = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .from_path(&sheet_path)
        .context("opening sample sheet for writing")?;
    sheet.write_record([
        "File ID",
        "File Name",
        "Data Category",
        "Data Type",
        "Project ID",
        "Sample ID",
        "Sample Type",
    ])?;

    let plan = [
        ("Primary Tumor", TUMOR_SAMPLES, 6.5, 1.2),
        ("Solid Tissue Normal", NORMAL_SAMPLES, 3.0, 0.8),
    ];

    for (sample_type, count, log2_mean, log2_sd) in plan {
        for i in 0..count {
            let id = file_id(&mut rng);
            let file_name = format!("{id}.rna_seq.augmented_star_gene_counts.tsv");

            let sample_dir = cohort.join(&id);
            fs::create_dir_all(&sample_dir)
                .with_context(|| format!("creating {}", sample_dir.display()))?;
            write_quant_file(
                &sample_dir.join(&file_name),
                rng.tpm(log2_mean, log2_sd),
                &mut rng,
            )?;

            let sample_id = format!("TCGA-{:02}-{:04}", i % 99, 1000 + i);
            sheet.write_record([
                id.as_str(),
                file_name.as_str(),
                "Transcriptome Profiling",
                "Gene Expression Quantification",
                "TCGA-LUAD",
                sample_id.as_str(),
                sample_type,
            ])?;
        }
    }
    sheet.flush()?;

    println!(
        "Wrote {} tumor + {} normal samples under {COHORT_DIR}/",
        TUMOR_SAMPLES, NORMAL_SAMPLES
    );
    println!("Run the plot with the sample sheet at {}", sheet_path.display());
    Ok(())
}
