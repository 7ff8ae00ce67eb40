//! Fixed chart colors; data colors come from the color mapping

pub(super) const COLOR_BACKGROUND: &str = "#FFFFFF"; // White, as the word cloud used
pub(super) const COLOR_TEXT: &str = "#1A1A1A"; // Near black
pub(super) const COLOR_GRID: &str = "#D0D0D0"; // Grid lines
