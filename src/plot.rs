use super::{DEFAULT_ECG_PATH, ENV_ECG_PATH, VERSION};
use clap::{App, Arg, ArgMatches};
use std::path::PathBuf;

fn cli_app() -> App<'static, 'static> {
    let arg_csvin = Arg::with_name("input_csvfile")
        .help("ecg csv file: a metadata line, a header line, then timestamp,ecg rows")
        .long_help(
            "ecg csv file: a metadata line, a header line, then timestamp,ecg rows; \
            falls back to $ECG_CSV_PATH, then to ecg.csv",
        )
        .index(1);
    let arg_svgout = Arg::with_name("output_svgfile")
        .help("also plot to this svg file")
        .short("o")
        .long("svg")
        .takes_value(true);
    let arg_no_window = Arg::with_name("no_window")
        .help("do not open the interactive viewer")
        .short("n")
        .long("no-window")
        .takes_value(false)
        .requires("output_svgfile");
    App::new("ecg_plot")
        .version(VERSION.unwrap_or("unknown"))
        .about("cli app to plot the ecg time series")
        .arg(arg_csvin)
        .arg(arg_svgout)
        .arg(arg_no_window)
}

/// Takes the CLI arguments that control the plotting of the ecg time series:
/// input csv, optional svg output, and whether to skip the viewer.
pub fn parse_cli() -> (PathBuf, Option<PathBuf>, bool) {
    let cli_args = cli_app().get_matches();
    from_matches(&cli_args, std::env::var(ENV_ECG_PATH).ok())
}

fn from_matches(
    cli_args: &ArgMatches,
    env_path: Option<String>,
) -> (PathBuf, Option<PathBuf>, bool) {
    let csvin = resolve_csv_path(cli_args.value_of("input_csvfile"), env_path);
    let svgout = cli_args.value_of("output_svgfile").map(PathBuf::from);
    let no_window = cli_args.is_present("no_window");
    (csvin, svgout, no_window)
}

/// The positional argument when given and non-empty,
/// else the environment override, else `DEFAULT_ECG_PATH`.
/// The path is not checked here, opening it is the first thing that can fail.
pub fn resolve_csv_path(arg: Option<&str>, env_path: Option<String>) -> PathBuf {
    match arg {
        Some(p) if !p.is_empty() => PathBuf::from(p),
        _ => match env_path {
            Some(p) if !p.is_empty() => PathBuf::from(p),
            _ => PathBuf::from(DEFAULT_ECG_PATH),
        },
    }
}
