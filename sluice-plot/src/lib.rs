//! Chart window for sluice gate bank results.
//!
//! [`ChartData`] turns bank results into plot series and [`PlotApp`] shows
//! them in a native egui window.

mod app;
mod chart;

pub use app::PlotApp;
pub use chart::ChartData;
