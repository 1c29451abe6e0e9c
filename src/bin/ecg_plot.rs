use ecg_plot::plot::parse_cli;
use ecg_plot::{viewer, EcgError, EcgSeries};
use log::info;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    if let Err(e) = run() {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), EcgError> {
    let (csvin, svgout, no_window) = parse_cli();
    info!("read data from {}", csvin.display());
    let series = EcgSeries::from_csv(&csvin)?;
    info!("loaded {} samples", series.len());
    if let Some(svgout) = svgout {
        series.plot_svg(&svgout)?;
        info!("plotted to {}", svgout.display());
    }
    if !no_window {
        viewer::show(&series)?;
    }
    Ok(())
}
