use log::debug;
use plotters::prelude::*;
use std::fs::File;
use std::io::Read;
use std::path::Path;
pub mod error;
pub mod plot;
pub mod viewer;

pub use error::EcgError;

pub const VERSION: Option<&str> = option_env!("CARGO_PKG_VERSION");

/// Path used when neither the command line nor `ECG_CSV_PATH` give one.
pub const DEFAULT_ECG_PATH: &str = "ecg.csv";
/// Environment variable overriding `DEFAULT_ECG_PATH`.
pub const ENV_ECG_PATH: &str = "ECG_CSV_PATH";

/// Leading lines skipped unread: the recording metadata and the column header.
pub const HEADER_LINES: usize = 2;

pub const TITLE: &str = "ECG over time";
pub const SERIES_LABEL: &str = "ECG (µV)";
pub const X_LABEL: &str = "Timestamp";
pub const Y_LABEL: &str = "ECG (µV)";

/// The ECG time series, timestamps and readings in microvolts.
/// Both vectors always have the same length, `push` is the only way in.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EcgSeries {
    timestamp: Vec<i64>,
    ecg: Vec<i64>,
}

impl EcgSeries {
    pub fn new(capacity: usize) -> EcgSeries {
        EcgSeries {
            timestamp: Vec::with_capacity(capacity),
            ecg: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, timestamp: i64, ecg: i64) {
        self.timestamp.push(timestamp);
        self.ecg.push(ecg);
    }

    pub fn len(&self) -> usize {
        self.timestamp.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timestamp.is_empty()
    }

    pub fn timestamps(&self) -> &[i64] {
        &self.timestamp
    }

    pub fn values(&self) -> &[i64] {
        &self.ecg
    }

    /// (timestamp, ecg) pairs in file order
    pub fn samples(&self) -> impl Iterator<Item = (i64, i64)> + '_ {
        self.timestamp.iter().copied().zip(self.ecg.iter().copied())
    }

    /// the samples as the float pairs taken by the viewer
    pub fn plot_points(&self) -> Vec<[f64; 2]> {
        self.samples().map(|(t, v)| [t as f64, v as f64]).collect()
    }

    /// ((xmin, xmax), (ymin, ymax)), None for an empty series
    pub fn bounds(&self) -> Option<((i64, i64), (i64, i64))> {
        Some((min_and_max(&self.timestamp)?, min_and_max(&self.ecg)?))
    }

    /// Init an EcgSeries from csv.
    /// The first two records are skipped without looking at them,
    /// then every record must start with an integer timestamp and an integer reading.
    /// Stops at the first bad record, nothing partial is returned.
    pub fn from_csv<P: AsRef<Path>>(fin: P) -> Result<EcgSeries, EcgError> {
        let fin = fin.as_ref();
        let file = File::open(fin).map_err(|source| EcgError::FileAccess {
            path: fin.to_path_buf(),
            source,
        })?;
        EcgSeries::from_reader(file)
    }

    /// Same as `from_csv` for any reader.
    /// Records follow csv quoting, so a quoted field may span lines;
    /// blank lines are not records.
    pub fn from_reader<R: Read>(rdr: R) -> Result<EcgSeries, EcgError> {
        let mut records = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(rdr)
            .into_records();
        for found in 0..HEADER_LINES {
            match records.next() {
                Some(r) => {
                    r.map_err(read_error)?;
                }
                None => return Err(EcgError::MalformedHeader { found }),
            }
        }
        let mut series = EcgSeries::new(10000);
        for r in records {
            let record = r.map_err(read_error)?;
            let line = record.position().map_or(0, |p| p.line() as usize);
            let timestamp = parse_field(record.get(0), line, 0)?;
            let ecg = parse_field(record.get(1), line, 1)?;
            series.push(timestamp, ecg);
        }
        debug!("parsed {} samples", series.len());
        Ok(series)
    }

    /// plots the ecg time series to svg
    pub fn plot_svg<P: AsRef<Path>>(&self, fout: P) -> Result<(), EcgError> {
        let ((xmin, xmax), (ymin, ymax)) = match self.bounds() {
            Some(((x0, x1), (y0, y1))) => (
                pad_range(x0 as f64, x1 as f64, 20.),
                pad_range(y0 as f64, y1 as f64, 10.),
            ),
            None => ((0., 1.), (0., 1.)),
        };
        let line_color = RGBColor(180, 10, 180);
        let root = SVGBackend::new(fout.as_ref(), (1600, 800)).into_drawing_area();
        root.fill(&WHITE)?;
        let mut chart = ChartBuilder::on(&root)
            .caption(TITLE, ("sans-serif", 32))
            .margin(20)
            .x_label_area_size(60)
            .y_label_area_size(100)
            .build_cartesian_2d(xmin..xmax, ymin..ymax)?;
        chart
            .configure_mesh()
            .light_line_style(&TRANSPARENT)
            .bold_line_style(RGBColor(150, 150, 150).stroke_width(2))
            .set_all_tick_mark_size(2)
            .label_style(("sans-serif", 24))
            .x_desc(X_LABEL)
            .y_desc(Y_LABEL)
            .x_labels(14) // max number of labels
            .draw()?;
        chart
            .draw_series(LineSeries::new(
                self.samples().map(|(t, v)| (t as f64, v as f64)),
                line_color.stroke_width(2),
            ))?
            .label(SERIES_LABEL)
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], line_color.stroke_width(2))
            });
        chart
            .configure_series_labels()
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .label_font(("sans-serif", 24))
            .draw()?;
        root.present()?;
        Ok(())
    }
}

impl std::fmt::Display for EcgSeries {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "timestamp,ecg_uv")?;
        for (t, v) in self.samples() {
            writeln!(f, "{},{}", t, v)?
        }
        Ok(())
    }
}

fn read_error(e: csv::Error) -> EcgError {
    EcgError::Read {
        line: e.position().map_or(0, |p| p.line() as usize),
        source: e,
    }
}

fn parse_field(field: Option<&str>, line: usize, column: usize) -> Result<i64, EcgError> {
    let field = match field {
        Some(f) => f.trim(),
        None => {
            return Err(EcgError::RowParse {
                line,
                column,
                reason: String::from("missing field"),
            })
        }
    };
    field.parse::<i64>().map_err(|e| EcgError::RowParse {
        line,
        column,
        reason: format!("{:?} is not an integer ({})", field, e),
    })
}

pub fn min_and_max<T: std::cmp::PartialOrd + Copy>(s: &[T]) -> Option<(T, T)> {
    let mut self_iter = s.iter();
    let (mut min, mut max) = match self_iter.next() {
        Some(v) => (*v, *v),
        None => return None,
    };
    for es in self_iter {
        if *es > max {
            max = *es
        }
        if *es < min {
            min = *es
        }
    }
    Some((min, max))
}

/// widens (min, max) by span / div on each side;
/// a flat range is widened by |max| / div, at least by one
fn pad_range(min: f64, max: f64, div: f64) -> (f64, f64) {
    let margin = if max > min {
        (max - min) / div
    } else {
        (max.abs() / div).max(1.)
    };
    (min - margin, max + margin)
}
