//! Chart layout arithmetic and static labels

use crate::ChartMargin;

// ============================================================================
// LAYOUT
// ============================================================================

/// Position and inner size of one plot inside the chart's SVG
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotFrame {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotFrame {
    /// SVG transform for the plot group
    pub fn transform(&self) -> String {
        format!("translate({},{})", self.left, self.top)
    }

    /// Convert a chart-relative point to plot-local coordinates
    pub fn to_local(&self, point: (f64, f64)) -> (f64, f64) {
        (point.0 - self.left, point.1 - self.top)
    }

    /// Whether a chart-relative point falls inside the plot area
    pub fn contains(&self, point: (f64, f64)) -> bool {
        let (x, y) = self.to_local(point);
        x >= 0.0 && x <= self.width && y >= 0.0 && y <= self.height
    }
}

/// Outer size plus the frames of the main and overview plots.
///
/// The overview panel occupies the bottom `brush_height` pixels of the chart;
/// a quarter of the top margin separates it from the main plot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartLayout {
    pub width: f64,
    pub height: f64,
    pub margin: ChartMargin,
    pub main: PlotFrame,
    pub overview: PlotFrame,
}

impl ChartLayout {
    pub fn compute(width: f64, height: f64, brush_height: f64, margin: ChartMargin) -> Self {
        let inner_width = (width - margin.left - margin.right).max(0.0);
        let main_height = (height - margin.top - margin.bottom - brush_height).max(0.0);
        let overview_top = height - brush_height + margin.top / 4.0;
        let overview_height = (brush_height - margin.bottom - margin.top / 4.0).max(0.0);

        Self {
            width,
            height,
            margin,
            main: PlotFrame {
                left: margin.left,
                top: margin.top,
                width: inner_width,
                height: main_height,
            },
            overview: PlotFrame {
                left: margin.left,
                top: overview_top,
                width: inner_width,
                height: overview_height,
            },
        }
    }

    /// ViewBox string for SVG
    pub fn viewbox(&self) -> String {
        format!("0 0 {} {}", self.width, self.height)
    }
}

// ============================================================================
// LABELS
// ============================================================================

/// Static text drawn around the plots
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLabels {
    pub title: String,
    pub x: String,
    pub y: String,
}

impl Default for ChartLabels {
    fn default() -> Self {
        Self {
            title: "Value vs Date Graph".to_string(),
            x: "Date".to_string(),
            y: "Value".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout() {
        let layout = ChartLayout::compute(960.0, 500.0, 200.0, ChartMargin::default());

        assert_eq!(layout.main.width, 850.0);
        assert_eq!(layout.main.height, 220.0);
        assert_eq!(layout.main.top, 40.0);
        assert_eq!(layout.overview.top, 310.0);
        assert_eq!(layout.overview.height, 150.0);
        assert_eq!(layout.overview.left, 60.0);
    }

    #[test]
    fn test_tiny_layout_clamps_to_zero() {
        let layout = ChartLayout::compute(50.0, 100.0, 200.0, ChartMargin::default());
        assert_eq!(layout.main.width, 0.0);
        assert_eq!(layout.main.height, 0.0);
    }

    #[test]
    fn test_frame_hit_testing() {
        let layout = ChartLayout::compute(960.0, 500.0, 200.0, ChartMargin::default());
        assert!(layout.main.contains((60.0, 40.0)));
        assert!(!layout.main.contains((59.0, 40.0)));
        assert!(layout.overview.contains((100.0, 400.0)));
        assert_eq!(layout.overview.to_local((100.0, 400.0)), (40.0, 90.0));
    }
}
