//! egui window for [`Figure`]s.

use eframe::egui::{self, Color32};
use egui_plot::{Legend, Line, Plot, PlotPoints, PlotUi, Points, Polygon};

use crate::{Figure, IvFigure, Measurement, RtFigure};

const PALETTE: [Color32; 6] = [
    Color32::from_rgb(31, 119, 180),
    Color32::from_rgb(255, 127, 14),
    Color32::from_rgb(44, 160, 44),
    Color32::from_rgb(214, 39, 40),
    Color32::from_rgb(148, 103, 189),
    Color32::from_rgb(140, 86, 75),
];

/// Opens a blocking egui window showing `figures` side by side.
///
/// Blocks until the window is closed by the user.
///
/// # Errors
///
/// Returns an error if the native window cannot be created.
pub fn show(title: &str, figures: Vec<Figure>) -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions::default();
    eframe::run_native(
        title,
        options,
        Box::new(move |_cc| Ok(Box::new(PlotApp::new(figures)))),
    )
}

/// The egui [`eframe::App`] that renders figures in columns.
pub struct PlotApp {
    figures: Vec<Figure>,
}

impl PlotApp {
    #[must_use]
    pub fn new(figures: Vec<Figure>) -> Self {
        Self { figures }
    }
}

impl eframe::App for PlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            if self.figures.is_empty() {
                ui.label("Nothing to plot.");
                return;
            }
            ui.columns(self.figures.len(), |columns| {
                for (index, (column, figure)) in columns.iter_mut().zip(&self.figures).enumerate() {
                    column.heading(figure.title());
                    match figure {
                        Figure::Iv(figure) => draw_iv(column, index, figure),
                        Figure::Rt(figure) => draw_rt(column, index, figure),
                    }
                }
            });
        });
    }
}

fn draw_iv(ui: &mut egui::Ui, index: usize, figure: &IvFigure) {
    Plot::new(("iv_figure", index))
        .legend(Legend::default())
        .x_axis_label(IvFigure::X_LABEL)
        .y_axis_label(IvFigure::Y_LABEL)
        .include_x(figure.x_limits.min)
        .include_x(figure.x_limits.max)
        .include_y(figure.y_limits.min)
        .include_y(figure.y_limits.max)
        .show(ui, |plot_ui| {
            if let Some(band) = &figure.band {
                for polygon in band.polygons() {
                    let outline: PlotPoints = polygon.into_iter().collect();
                    plot_ui.polygon(
                        Polygon::new(outline)
                            .name("1σ band")
                            .fill_color(PALETTE[1].gamma_multiply(0.5))
                            .stroke((0.0, PALETTE[1])),
                    );
                }
            }
            if let Some(line) = figure.fit_line {
                let line: PlotPoints = line.into_iter().collect();
                plot_ui.line(Line::new(line).name("Fit").color(PALETTE[1]));
            }

            let joined = figure.fit_line.is_none();
            for (i, series) in figure.series.iter().enumerate() {
                let color = PALETTE[(i * 2) % PALETTE.len()];
                draw_measurements(plot_ui, &series.name, &series.points, color);
                if joined {
                    let path: PlotPoints = series.points.iter().map(|p| [p.x, p.y]).collect();
                    plot_ui.line(Line::new(path).color(color));
                }
            }
        });
}

fn draw_rt(ui: &mut egui::Ui, index: usize, figure: &RtFigure) {
    Plot::new(("rt_figure", index))
        .x_axis_label(RtFigure::X_LABEL)
        .y_axis_label(RtFigure::Y_LABEL)
        .include_x(figure.x_limits.min)
        .include_x(figure.x_limits.max)
        .include_y(figure.y_limits.min)
        .include_y(figure.y_limits.max)
        .show(ui, |plot_ui| {
            draw_measurements(plot_ui, "R(T)", &figure.points, PALETTE[0]);
        });
}

/// Draws points with their error bars as short line segments.
fn draw_measurements(plot_ui: &mut PlotUi, name: &str, points: &[Measurement], color: Color32) {
    for p in points {
        if p.x_err > 0.0 {
            let bar: PlotPoints = [[p.x - p.x_err, p.y], [p.x + p.x_err, p.y]]
                .into_iter()
                .collect();
            plot_ui.line(Line::new(bar).color(color));
        }
        if p.y_err > 0.0 {
            let bar: PlotPoints = [[p.x, p.y - p.y_err], [p.x, p.y + p.y_err]]
                .into_iter()
                .collect();
            plot_ui.line(Line::new(bar).color(color));
        }
    }

    let markers: PlotPoints = points.iter().map(|p| [p.x, p.y]).collect();
    plot_ui.points(Points::new(markers).name(name).color(color).radius(3.0));
}
