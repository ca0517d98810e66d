use eframe::egui::{self, Color32};
use egui_plot::{Bar, BarChart, Legend, Line, Plot, PlotPoints, Points};

use crate::ChartData;

/// Width of one bar in the grouped opening/depth chart, in gate numbers.
const GROUPED_BAR_WIDTH: f64 = 0.4;

const CHART_HEIGHT: f32 = 260.0;

/// A runnable egui application showing the three bank charts.
pub struct PlotApp {
    data: ChartData,
}

impl PlotApp {
    #[must_use]
    pub fn new(data: ChartData) -> Self {
        Self { data }
    }

    #[allow(clippy::missing_errors_doc)]
    pub fn run(self, name: &str) -> Result<(), eframe::Error> {
        eframe::run_native(
            name,
            eframe::NativeOptions::default(),
            Box::new(|_cc| Ok(Box::new(self))),
        )
    }

    fn openings_and_depths(&self, ui: &mut egui::Ui) {
        ui.heading("Gate Opening vs. Water Depth");

        let openings = bars(&self.data.openings, -GROUPED_BAR_WIDTH / 2.0, GROUPED_BAR_WIDTH);
        let depths = bars(&self.data.depths, GROUPED_BAR_WIDTH / 2.0, GROUPED_BAR_WIDTH);

        Plot::new("openings-and-depths")
            .legend(Legend::default())
            .height(CHART_HEIGHT)
            .x_axis_label("Gate Number")
            .y_axis_label("Height [m]")
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(
                    BarChart::new(openings)
                        .name("Gate Opening [m]")
                        .color(Color32::LIGHT_BLUE),
                );
                plot_ui.bar_chart(
                    BarChart::new(depths)
                        .name("Water Depth [m]")
                        .color(Color32::DARK_BLUE),
                );
            });
    }

    fn flow_comparison(&self, ui: &mut egui::Ui) {
        ui.heading("Flowrate Comparison");
        ui.label(format!(
            "Total Flow ({}): {:.3} m³/s    Total Flow ({}): {:.3} m³/s",
            self.data.energy_name,
            self.data.total_energy,
            self.data.momentum_name,
            self.data.total_momentum,
        ));

        Plot::new("flow-comparison")
            .legend(Legend::default())
            .height(CHART_HEIGHT)
            .x_axis_label("Gate Number")
            .y_axis_label("Flowrate [m³/s]")
            .show(ui, |plot_ui| {
                for (name, series) in [
                    (&self.data.energy_name, &self.data.energy_flow),
                    (&self.data.momentum_name, &self.data.momentum_flow),
                ] {
                    plot_ui.line(Line::new(PlotPoints::from(series.clone())).name(name));
                    plot_ui.points(
                        Points::new(PlotPoints::from(series.clone()))
                            .radius(3.0)
                            .name(name),
                    );
                }
            });
    }

    fn percent_error(&self, ui: &mut egui::Ui) {
        ui.heading("Percent Error Between Methods");

        Plot::new("percent-error")
            .height(CHART_HEIGHT)
            .x_axis_label("Gate")
            .y_axis_label("Error [%]")
            .show(ui, |plot_ui| {
                let errors = bars(&self.data.percent_error, 0.0, 2.0 * GROUPED_BAR_WIDTH);
                plot_ui.bar_chart(BarChart::new(errors).color(Color32::ORANGE));
            });
    }
}

impl eframe::App for PlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                self.openings_and_depths(ui);
                ui.separator();
                self.flow_comparison(ui);
                ui.separator();
                self.percent_error(ui);
            });
        });
    }
}

/// Converts `(x, y)` points to bars of `width` shifted by `offset` along x.
fn bars(points: &[[f64; 2]], offset: f64, width: f64) -> Vec<Bar> {
    points
        .iter()
        .map(|&[x, y]| Bar::new(x + offset, y).width(width))
        .collect()
}
