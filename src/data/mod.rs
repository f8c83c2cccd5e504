/// Data layer: sample-sheet parsing and per-file expression extraction.
///
/// ```text
///  gdc_sample_sheet.tsv
///        │
///        ▼
///   ┌─────────┐
///   │  sheet   │  partition rows → SampleGroups (tumor / normal paths)
///   └─────────┘
///        │
///        ▼
///   ┌────────────┐
///   │ expression  │  per file: first gene line → log2(TPM + 1)
///   └────────────┘
/// ```

pub mod expression;
pub mod model;
pub mod sheet;
