//! Gradient line chart of average salary per job title

use charming::{
    Chart, ImageRenderer,
    component::{Axis, Grid, Title},
    element::{AxisLabel, AxisType, Color, ItemStyle, LineStyle, SplitLine, Symbol, TextStyle},
    renderer::ImageFormat,
    series::Line,
};

use jobstat::analysis::ColorSource;

use super::colors::{COLOR_BACKGROUND, COLOR_GRID, COLOR_TEXT};
use super::{CHART_HEIGHT, CHART_WIDTH, SalaryChartData, round_value};

/// Render the salary chart to a PNG file.
///
/// Each segment between neighbouring titles is its own two-point series,
/// colored by the left endpoint, so the line fades along the ramp.
pub fn render_salary_chart(
    data: &SalaryChartData,
    colors: &dyn ColorSource,
    output_path: &str,
) -> Result<(), String> {
    if data.entities.is_empty() {
        return Err("No data to render".to_string());
    }

    let title = match &data.most_common_industry {
        Some(industry) => format!(
            "Average Salary by Job Title (Most Common Industry: {})",
            industry
        ),
        None => "Average Salary by Job Title".to_string(),
    };

    let labels: Vec<String> = data.entities.iter().map(|e| e.key.clone()).collect();

    let mut chart = Chart::new()
        .background_color(Color::Value(COLOR_BACKGROUND.to_string()))
        .title(
            Title::new()
                .text(title)
                .left("center")
                .top("2%")
                .text_style(TextStyle::new().color(COLOR_TEXT).font_size(32)),
        )
        .grid(
            Grid::new()
                .left("5%")
                .right("3%")
                .bottom("5%")
                .top("10%")
                .contain_label(true),
        )
        .x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .boundary_gap(false)
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
                .name("Average Salary")
                .name_text_style(TextStyle::new().color(COLOR_TEXT).font_size(24))
                .axis_label(AxisLabel::new().color(COLOR_TEXT).font_size(20))
                .split_line(
                    SplitLine::new().line_style(LineStyle::new().width(0.5).color(COLOR_GRID)),
                ),
        );

    // A single title still gets a visible point
    if data.entities.len() == 1 {
        let entity = &data.entities[0];
        let color = colors.color_for(&entity.key).to_hex();
        chart = chart.series(
            Line::new()
                .name(entity.key.as_str())
                .data(vec![vec![0.0, round_value(entity.value)]])
                .symbol(Symbol::Circle)
                .symbol_size(12)
                .item_style(ItemStyle::new().color(color.as_str())),
        );
    }

    for (i, pair) in data.entities.windows(2).enumerate() {
        let color = colors.color_for(&pair[0].key).to_hex();
        let segment = vec![
            vec![i as f64, round_value(pair[0].value)],
            vec![(i + 1) as f64, round_value(pair[1].value)],
        ];

        chart = chart.series(
            Line::new()
                .name(pair[0].key.as_str())
                .data(segment)
                .symbol(Symbol::None)
                .line_style(LineStyle::new().width(6).color(color.as_str()))
                .item_style(ItemStyle::new().color(color.as_str())),
        );
    }

    tracing::debug!(
        titles = data.entities.len(),
        path = output_path,
        "rendering salary chart"
    );

    let mut renderer = ImageRenderer::new(CHART_WIDTH, CHART_HEIGHT);
    renderer
        .save_format(ImageFormat::Png, &chart, output_path)
        .map_err(|e| format!("Failed to save chart: {}", e))?;

    Ok(())
}
