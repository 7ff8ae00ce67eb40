//! Chart rendering for salary and skill summaries

mod colors;
mod salary;
mod skills;

pub use salary::render_salary_chart;
pub use skills::render_skills_chart;

use jobstat::analysis::Entity;

/// Data for the average salary line chart
pub struct SalaryChartData {
    /// Entities in display order (highest mean first)
    pub entities: Vec<Entity>,
    /// Most common industry, shown in the title when known
    pub most_common_industry: Option<String>,
}

/// Data for the ranked skill chart
pub struct SkillChartData {
    pub filename: String,
    /// Shown skills, most frequent first
    pub entities: Vec<Entity>,
}

/// Chart dimensions (2x for Retina quality)
pub(super) const CHART_WIDTH: u32 = 2800;
pub(super) const CHART_HEIGHT: u32 = 1400;

/// Round to whole units for labels
pub(super) fn round_value(v: f64) -> f64 {
    v.round()
}
