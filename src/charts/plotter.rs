//! Scatter Plotter Module
//! Draws the interactive income vs home value scatterplot using egui_plot.

use egui::{Align2, Color32, RichText};
use egui_plot::{Legend, Plot, PlotPoint, PlotPoints, Points, Text};

use crate::data::{Group, Projection, ScatterPoint};

/// Fixed axis ranges, matching the source chart.
const X_MAX: f64 = 620_000.0;
const Y_MAX: f64 = 120_000.0;

const POINT_RADIUS: f32 = 5.0;

/// Hover hit radius as a fraction of each axis range.
const HOVER_FRACTION: f64 = 0.02;

/// Group color palette: gold / light blue / coral, gray fallback.
pub fn group_color(group: Group) -> Color32 {
    match group {
        Group::East => Color32::from_rgb(255, 215, 0),
        Group::Central => Color32::from_rgb(173, 216, 230),
        Group::West => Color32::from_rgb(255, 127, 80),
        Group::Unknown => Color32::from_rgb(128, 128, 128),
    }
}

/// Format a value as comma-grouped currency (`62843.0` -> `"$62,843"`).
/// Non-finite values come out as `"$-"`.
pub fn format_currency(value: f64) -> String {
    if !value.is_finite() {
        return "$-".to_string();
    }
    let n = value.round() as i64;
    let digits = n.abs().to_string();

    let mut grouped = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if n < 0 { "-" } else { "" };
    format!("${}{}", sign, grouped)
}

/// Draws the scatterplot with tooltips, extremal annotations, legend and a
/// year watermark.
pub struct ScatterPlotter;

impl ScatterPlotter {
    pub fn draw(ui: &mut egui::Ui, projection: &Projection) {
        let rows = projection.rows.clone();
        let year = projection.year;

        Plot::new("income_vs_home_value")
            .legend(Legend::default())
            .include_x(0.0)
            .include_x(X_MAX)
            .include_y(0.0)
            .include_y(Y_MAX)
            .allow_scroll(false)
            .x_axis_label("Typical Home Value (middle-third weighted average)")
            .y_axis_label("Median Household Income")
            .label_formatter(move |_name, value| Self::tooltip_text(&rows, value))
            .show(ui, |plot_ui| {
                // watermark
                plot_ui.text(
                    Text::new(
                        PlotPoint::new(X_MAX * 7.0 / 8.0, Y_MAX * 7.0 / 8.0),
                        RichText::new(format!("Year: {}", year))
                            .size(32.0)
                            .color(Color32::from_gray(120)),
                    )
                    .anchor(Align2::CENTER_CENTER),
                );

                for group in [Group::East, Group::Central, Group::West, Group::Unknown] {
                    let points: Vec<[f64; 2]> = projection
                        .rows
                        .iter()
                        .filter(|p| p.group == group)
                        .map(|p| [p.home_value, p.income])
                        .collect();
                    if points.is_empty() {
                        continue;
                    }
                    plot_ui.points(
                        Points::new(PlotPoints::new(points))
                            .radius(POINT_RADIUS)
                            .color(group_color(group))
                            .name(group.label()),
                    );
                }

                if let Some(row) = &projection.max_income {
                    Self::annotate(
                        plot_ui,
                        row.home_value,
                        row.income,
                        &format!(
                            "Highest Income State\n{} has the highest income of {}",
                            row.region_name,
                            format_currency(row.value)
                        ),
                        Color32::DARK_BLUE,
                        Align2::RIGHT_BOTTOM,
                    );
                }
                if let Some(row) = &projection.max_home_value {
                    Self::annotate(
                        plot_ui,
                        row.home_value,
                        row.income,
                        &format!(
                            "Highest Home Value State\n{} has the highest home value of {}",
                            row.region_name,
                            format_currency(row.value)
                        ),
                        Color32::DARK_GREEN,
                        Align2::LEFT_BOTTOM,
                    );
                }
            });
    }

    /// Extremal callout. An extremal row scanned over the whole table can
    /// carry a NaN paired coordinate; those axes snap to the origin so the
    /// callout still renders.
    fn annotate(
        plot_ui: &mut egui_plot::PlotUi,
        x: f64,
        y: f64,
        label: &str,
        color: Color32,
        anchor: Align2,
    ) {
        let x = if x.is_finite() { x } else { 0.0 };
        let y = if y.is_finite() { y } else { 0.0 };
        plot_ui.text(
            Text::new(
                PlotPoint::new(x, y),
                RichText::new(label).size(12.0).color(color),
            )
            .anchor(anchor),
        );
    }

    /// Tooltip for the point nearest the pointer, in the source chart's
    /// `State / Group`, home value, income shape.
    fn tooltip_text(rows: &[ScatterPoint], pointer: &PlotPoint) -> String {
        let max_dx = X_MAX * HOVER_FRACTION;
        let max_dy = Y_MAX * HOVER_FRACTION;

        let mut best: Option<(f64, &ScatterPoint)> = None;
        for point in rows {
            let dx = (point.home_value - pointer.x) / max_dx;
            let dy = (point.income - pointer.y) / max_dy;
            let dist = dx * dx + dy * dy;
            if dist <= 1.0 && best.map_or(true, |(d, _)| dist < d) {
                best = Some((dist, point));
            }
        }

        match best {
            Some((_, point)) => format!(
                "{} / {}\nHome value: {}\nIncome: {}",
                point.region_name,
                point.group.label(),
                format_currency(point.home_value),
                format_currency(point.income)
            ),
            None => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_currency_with_comma_grouping() {
        assert_eq!(format_currency(38622.0), "$38,622");
        assert_eq!(format_currency(1234567.0), "$1,234,567");
        assert_eq!(format_currency(500.0), "$500");
        assert_eq!(format_currency(0.0), "$0");
        assert_eq!(format_currency(-1000.0), "$-1,000");
        assert_eq!(format_currency(f64::NAN), "$-");
    }

    #[test]
    fn groups_have_distinct_colors() {
        let colors = [
            group_color(Group::East),
            group_color(Group::Central),
            group_color(Group::West),
            group_color(Group::Unknown),
        ];
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn tooltip_picks_the_nearest_point_within_range() {
        let rows = vec![
            ScatterPoint {
                region_name: "Ohio".to_string(),
                group: Group::East,
                home_value: 120000.0,
                income: 38622.0,
            },
            ScatterPoint {
                region_name: "Texas".to_string(),
                group: Group::Central,
                home_value: 110000.0,
                income: 39927.0,
            },
        ];

        let near_ohio = PlotPoint::new(121000.0, 38700.0);
        let text = ScatterPlotter::tooltip_text(&rows, &near_ohio);
        assert!(text.starts_with("Ohio / East"));
        assert!(text.contains("$120,000"));
        assert!(text.contains("$38,622"));

        let far_away = PlotPoint::new(500000.0, 100000.0);
        assert_eq!(ScatterPlotter::tooltip_text(&rows, &far_away), "");
    }
}
