use super::{EcgError, EcgSeries, SERIES_LABEL, TITLE, X_LABEL, Y_LABEL};
use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotPoints};
use log::info;

/// Interactive window holding one ecg line.
pub struct EcgViewer {
    points: Vec<[f64; 2]>,
}

impl EcgViewer {
    pub fn new(series: &EcgSeries) -> Self {
        Self {
            points: series.plot_points(),
        }
    }

    pub fn points(&self) -> &[[f64; 2]] {
        &self.points
    }
}

impl eframe::App for EcgViewer {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(TITLE);
            Plot::new("ecg-plot")
                .legend(Legend::default())
                .x_axis_label(X_LABEL)
                .y_axis_label(Y_LABEL)
                .show(ui, |plot_ui| {
                    let points: PlotPoints = self.points.iter().copied().collect();
                    plot_ui.line(Line::new(points).name(SERIES_LABEL));
                });
        });
    }
}

/// Opens the viewer and blocks until the window is closed.
pub fn show(series: &EcgSeries) -> Result<(), EcgError> {
    let viewer = EcgViewer::new(series);
    info!("showing {} samples, close the window to exit", viewer.points().len());
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 600.0])
            .with_title(TITLE),
        ..Default::default()
    };
    eframe::run_native(TITLE, options, Box::new(move |_cc| Box::new(viewer)))
        .map_err(|e| EcgError::Viewer(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewer_gets_the_ingested_samples() {
        let mut series = EcgSeries::new(3);
        series.push(0, 512);
        series.push(1, 515);
        series.push(2, 509);
        let viewer = EcgViewer::new(&series);
        assert_eq!(viewer.points(), &[[0., 512.], [1., 515.], [2., 509.]]);
    }
}
