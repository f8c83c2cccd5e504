use std::path::Path;

use anyhow::Result;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::data::model::{PRIMARY_TUMOR, SOLID_TISSUE_NORMAL};
use crate::error::PipelineError;

// 8 x 6 inches at 300 DPI.
const WIDTH: u32 = 2400;
const HEIGHT: u32 = 1800;

/// Render the two-group boxplot and write it to `output` as a PNG,
/// overwriting any existing file.
///
/// Category order is fixed: Solid Tissue Normal on the left, Primary Tumor
/// on the right. Each box carries an `n=<count>` annotation centered above
/// its group maximum. Either group being empty is a fatal
/// [`PipelineError::EmptyGroup`], raised before anything is drawn.
pub fn render_boxplot(
    normal: &[f64],
    tumor: &[f64],
    target_gene: &str,
    output: &Path,
) -> Result<()> {
    let normal_max = group_max(normal, SOLID_TISSUE_NORMAL)?;
    let tumor_max = group_max(tumor, PRIMARY_TUMOR)?;

    let normal_quartiles = Quartiles::new(normal);
    let tumor_quartiles = Quartiles::new(tumor);

    // Upper whiskers (1.5 IQR fences) can sit above the raw maxima, so the
    // y-range has to cover both.
    let y_top = [
        normal_max,
        tumor_max,
        f64::from(normal_quartiles.values()[4]),
        f64::from(tumor_quartiles.values()[4]),
    ]
    .into_iter()
    .fold(0.0_f64, f64::max)
        * 1.1
        + 0.5;

    let root = BitMapBackend::new(output, (WIDTH, HEIGHT)).into_drawing_area();
    root.fill(&WHITE)?;

    static CATEGORIES: [&str; 2] = [SOLID_TISSUE_NORMAL, PRIMARY_TUMOR];
    let categories = &CATEGORIES;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("{target_gene} Expression in LUAD"),
            ("sans-serif", 64),
        )
        .margin(40)
        .x_label_area_size(90)
        .y_label_area_size(130)
        .build_cartesian_2d(categories[..].into_segmented(), 0f32..y_top as f32)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_labels(categories.len())
        .y_desc("Log2 (TPM + 1)")
        .axis_desc_style(("sans-serif", 48))
        .label_style(("sans-serif", 36))
        .draw()?;

    chart.draw_series(vec![
        Boxplot::new_vertical(SegmentValue::CenterOf(&categories[0]), &normal_quartiles)
            .width(220)
            .whisker_width(0.5)
            .style(BLACK.stroke_width(3)),
        Boxplot::new_vertical(SegmentValue::CenterOf(&categories[1]), &tumor_quartiles)
            .width(220)
            .whisker_width(0.5)
            .style(BLACK.stroke_width(3)),
    ])?;

    let count_style = ("sans-serif", 40)
        .into_font()
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Bottom));
    for (label, count, max) in [
        (&categories[0], normal.len(), normal_max),
        (&categories[1], tumor.len(), tumor_max),
    ] {
        chart.draw_series(std::iter::once(Text::new(
            format!("n={count}"),
            (SegmentValue::CenterOf(label), max as f32),
            count_style.clone(),
        )))?;
    }

    root.present()?;
    Ok(())
}

/// Maximum of a group's values; an empty group is fatal before any drawing.
fn group_max(values: &[f64], label: &'static str) -> Result<f64> {
    match values.iter().copied().reduce(f64::max) {
        Some(max) => Ok(max),
        None => Err(PipelineError::EmptyGroup(label).into()),
    }
}
