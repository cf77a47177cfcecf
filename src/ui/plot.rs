use eframe::egui::{Align2, Ui};
use egui_plot::{Bar, BarChart, GridMark, Plot, PlotPoint, Points, Text};

use crate::color::CityColors;
use crate::data::model::CityCostRecord;

const CHART_HEIGHT: f32 = 280.0;

// ---------------------------------------------------------------------------
// Bar chart metrics
// ---------------------------------------------------------------------------

/// A per-city value drawn as a bar chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    TotalCost,
    Rent,
    Transport,
}

impl Metric {
    pub const ALL: [Metric; 3] = [Metric::TotalCost, Metric::Rent, Metric::Transport];

    pub fn title(&self) -> &'static str {
        match self {
            Metric::TotalCost => "Total Student Cost Across German Cities",
            Metric::Rent => "Monthly Rent Comparison",
            Metric::Transport => "Monthly Transport Cost Comparison",
        }
    }

    pub fn y_label(&self) -> &'static str {
        match self {
            Metric::TotalCost => "Total Monthly Student Cost (€)",
            Metric::Rent => "Monthly Rent (€)",
            Metric::Transport => "Monthly Transport (€)",
        }
    }

    pub fn value(&self, record: &CityCostRecord) -> f64 {
        match self {
            Metric::TotalCost => record.total_student_cost,
            Metric::Rent => record.rent,
            Metric::Transport => record.transport_pass,
        }
    }

    fn plot_id(&self) -> &'static str {
        match self {
            Metric::TotalCost => "bar_total_cost",
            Metric::Rent => "bar_rent",
            Metric::Transport => "bar_transport",
        }
    }
}

/// Label for an x-axis grid mark: the city at an integer position, else
/// nothing.
fn city_tick_label(cities: &[String], value: f64) -> String {
    let idx = value.round();
    if (value - idx).abs() > 1e-6 || idx < 0.0 {
        return String::new();
    }
    cities.get(idx as usize).cloned().unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Charts (central panel)
// ---------------------------------------------------------------------------

/// One bar per visible city, in source order.
pub fn bar_chart(ui: &mut Ui, metric: Metric, records: &[&CityCostRecord], colors: &CityColors) {
    ui.heading(metric.title());

    let cities: Vec<String> = records.iter().map(|r| r.city.clone()).collect();
    let bars: Vec<Bar> = records
        .iter()
        .enumerate()
        .map(|(i, r)| {
            Bar::new(i as f64, metric.value(r))
                .name(&r.city)
                .fill(colors.color_for(&r.city))
                .width(0.6)
        })
        .collect();

    Plot::new(metric.plot_id())
        .height(CHART_HEIGHT)
        .x_axis_label("City")
        .y_axis_label(metric.y_label())
        .x_grid_spacer(egui_plot::uniform_grid_spacer(|_| [1.0, 5.0, 10.0]))
        .x_axis_formatter(move |mark: GridMark, _range| city_tick_label(&cities, mark.value))
        .include_y(0.0)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).name(metric.y_label()));
        });
}

/// Rent against transport, every point labelled with its city.
pub fn rent_vs_transport(ui: &mut Ui, records: &[&CityCostRecord], colors: &CityColors) {
    ui.heading("Rent vs Transport Costs");

    Plot::new("scatter_rent_transport")
        .height(CHART_HEIGHT)
        .x_axis_label("Monthly Rent (€)")
        .y_axis_label("Monthly Transport (€)")
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .show(ui, |plot_ui| {
            for r in records {
                let color = colors.color_for(&r.city);
                plot_ui.points(
                    Points::new(vec![[r.rent, r.transport_pass]])
                        .name(&r.city)
                        .color(color)
                        .radius(5.0),
                );
                plot_ui.text(
                    Text::new(PlotPoint::new(r.rent, r.transport_pass), r.city.as_str())
                        .anchor(Align2::RIGHT_BOTTOM)
                        .color(color),
                );
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::sample_table;

    #[test]
    fn test_metric_values() {
        let table = sample_table();
        let berlin = table.find_city("Berlin").unwrap();
        assert_eq!(Metric::TotalCost.value(berlin), 986.0);
        assert_eq!(Metric::Rent.value(berlin), 600.0);
        assert_eq!(Metric::Transport.value(berlin), 86.0);
    }

    #[test]
    fn test_city_tick_labels() {
        let cities = vec!["Berlin".to_string(), "Munich".to_string()];
        assert_eq!(city_tick_label(&cities, 0.0), "Berlin");
        assert_eq!(city_tick_label(&cities, 1.0), "Munich");
        assert_eq!(city_tick_label(&cities, 0.5), "");
        assert_eq!(city_tick_label(&cities, 2.0), "");
        assert_eq!(city_tick_label(&cities, -1.0), "");
    }
}
