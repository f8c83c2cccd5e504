use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// TPM lives in the 7th tab-delimited column of a quantification file.
const TPM_FIELD: usize = 6;

/// Header/comment line prefixes used by GDC STAR-counts files.
const HEADER_PREFIXES: [&str; 2] = ["N_", "gene_id"];

/// Extract `log2(TPM + 1)` for `target_gene` from each file in `paths`.
///
/// Files that are missing, never mention the gene, or carry an unusable TPM
/// field contribute no value; the surviving values keep the input order.
/// Skips are deliberate per-file recovery, not errors, and are only visible
/// at debug log level.
pub fn extract_gene_values(paths: &[PathBuf], target_gene: &str) -> Vec<f64> {
    let mut values = Vec::with_capacity(paths.len());
    for path in paths {
        match gene_value_from_file(path, target_gene) {
            Some(v) => values.push(v),
            None => log::debug!("{}: no usable {target_gene} measurement", path.display()),
        }
    }
    values
}

/// Scan one quantification file for the target gene.
///
/// The scan always terminates at the first line containing the gene,
/// whether or not its TPM field parses; later occurrences (e.g. an
/// alternate transcript) are never considered.
fn gene_value_from_file(path: &Path, target_gene: &str) -> Option<f64> {
    let file = File::open(path).ok()?;

    for line in BufReader::new(file).lines() {
        let line = line.ok()?;
        if HEADER_PREFIXES.iter().any(|p| line.starts_with(p)) {
            continue;
        }
        // Substring containment rather than field-exact match. This assumes
        // the gene name is not embedded in some unrelated identifier in the
        // same file; see DESIGN.md.
        if line.contains(target_gene) {
            return tpm_field(&line).map(log2_tpm);
        }
    }
    None
}

/// Pull the TPM column out of a data line. `None` when the line has fewer
/// than seven columns or the field is not a number.
fn tpm_field(line: &str) -> Option<f64> {
    line.split('\t').nth(TPM_FIELD)?.trim().parse::<f64>().ok()
}

/// Variance-stabilising transform applied before plotting.
fn log2_tpm(tpm: f64) -> f64 {
    (tpm + 1.0).log2()
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    /// A minimal STAR-counts style file: two summary lines, a header line,
    /// then one data row per (gene, tpm) pair.
    fn write_quant_file(dir: &TempDir, name: &str, rows: &[(&str, &str)]) -> PathBuf {
        let mut body = String::from(
            "N_unmapped\t\t\t12\t12\t12\t\t\t\n\
             N_noFeature\t\t\t34\t34\t34\t\t\t\n\
             gene_id\tgene_name\tgene_type\tunstranded\tstranded_first\tstranded_second\ttpm_unstranded\tfpkm_unstranded\tfpkm_uq_unstranded\n",
        );
        for (i, (gene, tpm)) in rows.iter().enumerate() {
            body.push_str(&format!(
                "ENSG0000000{i}.1\t{gene}\tprotein_coding\t100\t50\t50\t{tpm}\t1.0\t1.0\n"
            ));
        }
        let path = dir.path().join(name);
        fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn zero_tpm_maps_to_zero() {
        let dir = TempDir::new().unwrap();
        let path = write_quant_file(&dir, "a.tsv", &[("NKX2-1", "0")]);
        assert_eq!(extract_gene_values(&[path], "NKX2-1"), vec![0.0]);
    }

    #[test]
    fn tpm_seven_maps_to_three() {
        let dir = TempDir::new().unwrap();
        let path = write_quant_file(&dir, "a.tsv", &[("NKX2-1", "7")]);
        assert_eq!(extract_gene_values(&[path], "NKX2-1"), vec![3.0]);
    }

    #[test]
    fn extraction_is_deterministic() {
        let dir = TempDir::new().unwrap();
        let path = write_quant_file(&dir, "a.tsv", &[("NKX2-1", "15")]);
        let first = extract_gene_values(std::slice::from_ref(&path), "NKX2-1");
        let second = extract_gene_values(std::slice::from_ref(&path), "NKX2-1");
        assert_eq!(first, second);
        assert_eq!(first, vec![4.0]);
    }

    #[test]
    fn missing_file_is_skipped() {
        let dir = TempDir::new().unwrap();
        let good = write_quant_file(&dir, "good.tsv", &[("NKX2-1", "1")]);
        let paths = vec![dir.path().join("absent.tsv"), good];
        assert_eq!(extract_gene_values(&paths, "NKX2-1"), vec![1.0]);
    }

    #[test]
    fn non_numeric_tpm_is_skipped_without_affecting_neighbours() {
        let dir = TempDir::new().unwrap();
        let bad = write_quant_file(&dir, "bad.tsv", &[("NKX2-1", "NA")]);
        let good = write_quant_file(&dir, "good.tsv", &[("NKX2-1", "3")]);
        assert_eq!(extract_gene_values(&[bad, good], "NKX2-1"), vec![2.0]);
    }

    #[test]
    fn gene_absent_yields_no_value() {
        let dir = TempDir::new().unwrap();
        let path = write_quant_file(&dir, "a.tsv", &[("GAPDH", "100")]);
        assert!(extract_gene_values(&[path], "NKX2-1").is_empty());
    }

    #[test]
    fn header_lines_never_match() {
        let dir = TempDir::new().unwrap();
        // Gene name embedded in a header line must not be taken as a hit.
        let path = dir.path().join("a.tsv");
        fs::write(
            &path,
            "gene_id\tNKX2-1\tgene_type\tunstranded\tstranded_first\tstranded_second\ttpm_unstranded\tx\ty\n",
        )
        .unwrap();
        assert!(extract_gene_values(&[path], "NKX2-1").is_empty());
    }

    #[test]
    fn scan_stops_at_first_match_even_when_unparseable() {
        let dir = TempDir::new().unwrap();
        // First matching line has a bad TPM; a later good line must not rescue it.
        let path = write_quant_file(&dir, "a.tsv", &[("NKX2-1", "NA"), ("NKX2-1", "7")]);
        assert!(extract_gene_values(&[path], "NKX2-1").is_empty());
    }

    #[test]
    fn first_of_two_matches_wins() {
        let dir = TempDir::new().unwrap();
        let path = write_quant_file(&dir, "a.tsv", &[("NKX2-1", "1"), ("NKX2-1", "1023")]);
        assert_eq!(extract_gene_values(&[path], "NKX2-1"), vec![1.0]);
    }

    #[test]
    fn short_row_yields_no_value() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a.tsv");
        fs::write(&path, "ENSG1\tNKX2-1\tprotein_coding\n").unwrap();
        assert!(extract_gene_values(&[path], "NKX2-1").is_empty());
    }
}
