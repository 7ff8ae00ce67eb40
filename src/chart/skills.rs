//! Ranked, frequency-colored skill chart

use charming::{
    Chart, ImageRenderer,
    component::{Axis, Grid, Title},
    element::{AxisLabel, AxisType, Color, ItemStyle, LineStyle, SplitLine, TextStyle},
    renderer::ImageFormat,
    series::Bar,
};

use jobstat::analysis::ColorSource;

use super::colors::{COLOR_BACKGROUND, COLOR_GRID, COLOR_TEXT};
use super::{CHART_HEIGHT, CHART_WIDTH, SkillChartData};

/// Render top skills as bars colored by frequency.
///
/// Every skill is its own series on a shared stack, holding its count at
/// its own category and zero elsewhere, so each bar can carry its own color.
pub fn render_skills_chart(
    data: &SkillChartData,
    colors: &dyn ColorSource,
    output_path: &str,
) -> Result<(), String> {
    if data.entities.is_empty() {
        return Err("No data to render".to_string());
    }

    let labels: Vec<String> = data.entities.iter().map(|e| e.key.clone()).collect();

    let mut chart = Chart::new()
        .background_color(Color::Value(COLOR_BACKGROUND.to_string()))
        .title(
            Title::new()
                .text("Top Required Skills")
                .subtext(&data.filename)
                .left("center")
                .top("2%")
                .text_style(TextStyle::new().color(COLOR_TEXT).font_size(32))
                .subtext_style(TextStyle::new().color(COLOR_TEXT).font_size(22)),
        )
        .grid(
            Grid::new()
                .left("5%")
                .right("3%")
                .bottom("5%")
                .top("12%")
                .contain_label(true),
        )
        .x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .data(labels)
                .axis_label(
                    AxisLabel::new()
                        .color(COLOR_TEXT)
                        .font_size(18)
                        .rotate(90),
                ),
        )
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .name("Postings")
                .name_text_style(TextStyle::new().color(COLOR_TEXT).font_size(24))
                .axis_label(AxisLabel::new().color(COLOR_TEXT).font_size(20))
                .split_line(
                    SplitLine::new().line_style(LineStyle::new().width(0.5).color(COLOR_GRID)),
                ),
        );

    for (idx, entity) in data.entities.iter().enumerate() {
        let color = colors.color_for(&entity.key).to_hex();
        let bar_data: Vec<f64> = (0..data.entities.len())
            .map(|i| if i == idx { entity.value } else { 0.0 })
            .collect();

        chart = chart.series(
            Bar::new()
                .name(entity.key.as_str())
                .data(bar_data)
                .stack("skills")
                .item_style(ItemStyle::new().color(color.as_str())),
        );
    }

    tracing::debug!(
        skills = data.entities.len(),
        path = output_path,
        "rendering skills chart"
    );

    let mut renderer = ImageRenderer::new(CHART_WIDTH, CHART_HEIGHT);
    renderer
        .save_format(ImageFormat::Png, &chart, output_path)
        .map_err(|e| format!("Failed to save chart: {}", e))?;

    Ok(())
}
