//! Pie chart model
//!
//! Turns a category breakdown into wedges with labels and angles. Wedges
//! start at 90 degrees and run counterclockwise. Drawing happens in the `tui`
//! module; this module only does the geometry.

use super::breakdown::{CategoryBreakdown, CategoryTotal};
use crate::models::Amount;

/// One slice of the pie
#[derive(Debug, Clone, PartialEq)]
pub struct Wedge {
    pub category: String,
    pub amount: Amount,
    /// Share of the charted total, 0-100
    pub percentage: f64,
    /// Start angle in degrees, counterclockwise from the positive x axis
    pub start_angle: f64,
    /// Angular size in degrees
    pub sweep: f64,
}

impl Wedge {
    /// Label drawn next to the wedge, e.g. "Food 61.5%"
    pub fn label(&self) -> String {
        format!("{} {:.1}%", self.category, self.percentage)
    }
}

/// A titled pie chart
#[derive(Debug, Clone, PartialEq)]
pub struct PieChart {
    pub title: String,
    /// Sum of the charted wedges
    pub total: Amount,
    pub wedges: Vec<Wedge>,
    /// Categories with a zero or negative total, which have no wedge
    pub omitted: Vec<CategoryTotal>,
}

pub const START_ANGLE: f64 = 90.0;

impl PieChart {
    /// Build a chart from a breakdown
    ///
    /// Only categories with a positive total get a wedge.
    pub fn from_breakdown(title: impl Into<String>, breakdown: &CategoryBreakdown) -> Self {
        let (charted, omitted): (Vec<_>, Vec<_>) = breakdown
            .categories
            .iter()
            .cloned()
            .partition(|c| c.total.value() > 0.0);

        let total: Amount = charted.iter().map(|c| c.total).sum();
        if !total.value().is_finite() {
            // Every fraction would be NaN; draw nothing and list all categories
            return Self {
                title: title.into(),
                total,
                wedges: Vec::new(),
                omitted: breakdown.categories.clone(),
            };
        }

        let mut wedges = Vec::with_capacity(charted.len());
        let mut angle = START_ANGLE;
        for category in charted {
            let fraction = category.total.value() / total.value();
            let sweep = fraction * 360.0;
            wedges.push(Wedge {
                category: category.category,
                amount: category.total,
                percentage: fraction * 100.0,
                start_angle: angle,
                sweep,
            });
            angle += sweep;
        }

        Self {
            title: title.into(),
            total,
            wedges,
            omitted,
        }
    }

    /// Whether there is anything to draw
    pub fn is_drawable(&self) -> bool {
        !self.wedges.is_empty()
    }

    /// Whether the charted total is too large to represent
    pub fn is_overflowed(&self) -> bool {
        !self.total.value().is_finite()
    }

    /// Index of the wedge covering a point at `angle` degrees
    pub fn wedge_at_angle(&self, angle: f64) -> Option<usize> {
        if self.wedges.is_empty() {
            return None;
        }
        let offset = (angle - START_ANGLE).rem_euclid(360.0);
        let mut covered = 0.0;
        for (idx, wedge) in self.wedges.iter().enumerate() {
            covered += wedge.sweep;
            if offset < covered {
                return Some(idx);
            }
        }
        // Rounding can leave a sliver at the very end
        Some(self.wedges.len() - 1)
    }

    /// Index of the wedge under the point (x, y) of a unit pie, if inside it
    pub fn wedge_at_point(&self, x: f64, y: f64) -> Option<usize> {
        if x * x + y * y > 1.0 {
            return None;
        }
        self.wedge_at_angle(y.atan2(x).to_degrees())
    }

    /// Plain-text rendering, used when no interactive terminal is available
    pub fn format_text(&self) -> String {
        let mut output = format!("{}\n", self.title);
        output.push_str(&format!("{}\n", "-".repeat(self.title.chars().count().max(20))));

        for wedge in &self.wedges {
            let bar_len = (wedge.percentage / 5.0).round() as usize;
            output.push_str(&format!(
                "  {:<24} {:>6.1}%  {}\n",
                wedge.category,
                wedge.percentage,
                "#".repeat(bar_len)
            ));
        }

        for category in &self.omitted {
            output.push_str(&format!(
                "  {:<24} not charted ({})\n",
                category.category, category.total
            ));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Expense;

    fn chart(entries: &[(&str, f64)]) -> PieChart {
        let expenses: Vec<_> = entries
            .iter()
            .map(|(c, a)| Expense::new("2024-01-01", *c, Amount::new(*a)))
            .collect();
        PieChart::from_breakdown("Current Expenses", &CategoryBreakdown::from_expenses(&expenses))
    }

    #[test]
    fn test_percentages_sum_to_100() {
        let chart = chart(&[("Food", 50.0), ("Rent", 30.0), ("Fun", 20.0), ("Food", 3.0)]);

        let sum: f64 = chart.wedges.iter().map(|w| w.percentage).sum();
        assert!((sum - 100.0).abs() < 1e-9);

        let sweep: f64 = chart.wedges.iter().map(|w| w.sweep).sum();
        assert!((sweep - 360.0).abs() < 1e-9);
    }

    #[test]
    fn test_labels_use_one_decimal() {
        let chart = chart(&[("Food", 2.0), ("Rent", 1.0)]);

        assert_eq!(chart.wedges[0].label(), "Food 66.7%");
        assert_eq!(chart.wedges[1].label(), "Rent 33.3%");
    }

    #[test]
    fn test_wedges_start_at_90_degrees() {
        let chart = chart(&[("Food", 1.0), ("Rent", 1.0)]);

        assert_eq!(chart.wedges[0].start_angle, 90.0);
        assert_eq!(chart.wedges[1].start_angle, 270.0);
    }

    #[test]
    fn test_wedge_at_point() {
        let chart = chart(&[("Food", 1.0), ("Rent", 1.0)]);

        // Counterclockwise from the top: the left half is the first wedge
        assert_eq!(chart.wedge_at_point(-0.5, 0.0), Some(0));
        assert_eq!(chart.wedge_at_point(0.5, 0.0), Some(1));
        assert_eq!(chart.wedge_at_point(2.0, 0.0), None);
    }

    #[test]
    fn test_non_positive_categories_are_omitted() {
        let chart = chart(&[("Food", 10.0), ("Refund", -4.0), ("Free", 0.0)]);

        assert_eq!(chart.wedges.len(), 1);
        assert_eq!(chart.wedges[0].percentage, 100.0);
        assert_eq!(chart.omitted.len(), 2);
        assert!(chart.format_text().contains("Refund"));
    }

    #[test]
    fn test_nothing_drawable() {
        let chart = chart(&[("Refund", -4.0)]);
        assert!(!chart.is_drawable());
        assert_eq!(chart.wedge_at_angle(0.0), None);
    }

    #[test]
    fn test_overflowing_total_draws_nothing() {
        let chart = chart(&[("Food", 1e308), ("Rent", 1e308)]);

        assert!(chart.is_overflowed());
        assert!(!chart.is_drawable());
        assert_eq!(chart.omitted.len(), 2);
        assert!(!chart.format_text().contains("NaN"));
    }

    #[test]
    fn test_format_text() {
        let chart = chart(&[("Food", 80.0)]);
        let output = chart.format_text();

        assert!(output.starts_with("Current Expenses\n"));
        assert!(output.contains("100.0%"));
    }
}
