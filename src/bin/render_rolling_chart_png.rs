#[cfg(feature = "cairo-backend")]
use std::fs::{self, File};
#[cfg(feature = "cairo-backend")]
use std::path::PathBuf;

#[cfg(feature = "cairo-backend")]
const DEFAULT_OUTPUT_PATH: &str = "target/rolling_chart.png";

#[cfg(feature = "cairo-backend")]
#[derive(Debug)]
struct CliArgs {
    config_path: Option<PathBuf>,
    output_path: PathBuf,
    width: i32,
    height: i32,
    pixel_ratio: f64,
    samples: usize,
}

#[cfg(feature = "cairo-backend")]
fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

#[cfg(not(feature = "cairo-backend"))]
fn main() {
    eprintln!("this tool requires feature `cairo-backend`");
    std::process::exit(1);
}

#[cfg(feature = "cairo-backend")]
fn run() -> Result<(), String> {
    use chrono::{Duration, NaiveDate};
    use rolling_chart::render::CairoRenderer;
    use rolling_chart::{ChartConfig, RollingChart};

    let _ = rolling_chart::telemetry::init_default_tracing();
    let args = parse_args()?;

    let config = match &args.config_path {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .map_err(|err| format!("failed to read config `{}`: {err}", path.display()))?;
            ChartConfig::from_json_str(&raw).map_err(|err| err.to_string())?
        }
        None => ChartConfig::new(["sine", "cosine", "sawtooth"])
            .with_id("demo")
            .with_unit("&deg;C")
            .with_interval_size(8.0)
            .with_vertical_lines(true)
            .with_vertical_line_frequency(5)
            .with_timestamps(true),
    };

    let renderer = CairoRenderer::with_pixel_ratio(args.width, args.height, args.pixel_ratio)
        .map_err(|err| err.to_string())?;
    let mut chart = RollingChart::new(renderer, config).map_err(|err| err.to_string())?;

    let start = NaiveDate::from_ymd_opt(2024, 1, 1)
        .and_then(|date| date.and_hms_opt(12, 0, 0))
        .ok_or_else(|| "invalid demo start time".to_owned())?;
    let series_count = chart.config().series_count();
    for tick in 0..args.samples {
        let phase = tick as f64 * 0.15;
        let values: Vec<f64> = (0..series_count)
            .map(|series| sample_value(series, phase, tick))
            .collect();
        let time = start + Duration::seconds(tick as i64);
        chart
            .update_at(&values, time)
            .map_err(|err| format!("update {tick} failed: {err}"))?;
    }

    if let Some(parent) = args.output_path.parent() {
        fs::create_dir_all(parent)
            .map_err(|err| format!("failed to create `{}`: {err}", parent.display()))?;
    }
    let mut file = File::create(&args.output_path)
        .map_err(|err| format!("failed to create `{}`: {err}", args.output_path.display()))?;
    chart
        .renderer()
        .write_png(&mut file)
        .map_err(|err| err.to_string())?;

    let bounds = chart.bounds();
    println!(
        "wrote {} ({} samples, capacity {}, bounds {:.2}..{:.2})",
        args.output_path.display(),
        args.samples,
        chart.capacity(),
        bounds.min,
        bounds.max
    );
    Ok(())
}

#[cfg(feature = "cairo-backend")]
fn sample_value(series: usize, phase: f64, tick: usize) -> f64 {
    match series % 3 {
        0 => 20.0 + 10.0 * phase.sin(),
        1 => 20.0 + 10.0 * phase.cos(),
        _ => (tick % 40) as f64,
    }
}

#[cfg(feature = "cairo-backend")]
fn parse_args() -> Result<CliArgs, String> {
    let mut parsed = CliArgs {
        config_path: None,
        output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
        width: 800,
        height: 300,
        pixel_ratio: 1.0,
        samples: 200,
    };

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        let mut value = |name: &str| {
            args.next()
                .ok_or_else(|| format!("missing value for {name}"))
        };
        match arg.as_str() {
            "--config" => parsed.config_path = Some(PathBuf::from(value("--config")?)),
            "--output" => parsed.output_path = PathBuf::from(value("--output")?),
            "--width" => parsed.width = parse_number(&value("--width")?, "--width")?,
            "--height" => parsed.height = parse_number(&value("--height")?, "--height")?,
            "--pixel-ratio" => {
                parsed.pixel_ratio = parse_number(&value("--pixel-ratio")?, "--pixel-ratio")?;
            }
            "--samples" => parsed.samples = parse_number(&value("--samples")?, "--samples")?,
            "--help" | "-h" => {
                println!("{}", usage_message());
                std::process::exit(0);
            }
            _ => {
                return Err(format!("unknown argument `{arg}`\n\n{}", usage_message()));
            }
        }
    }

    Ok(parsed)
}

#[cfg(feature = "cairo-backend")]
fn parse_number<T: std::str::FromStr>(raw: &str, name: &str) -> Result<T, String> {
    raw.parse()
        .map_err(|_| format!("invalid value `{raw}` for {name}"))
}

#[cfg(feature = "cairo-backend")]
fn usage_message() -> String {
    format!(
        "usage: render_rolling_chart_png [--config <chart.json>] [--output <png>] \
         [--width <px>] [--height <px>] [--pixel-ratio <ratio>] [--samples <n>]\n\
         default output: {DEFAULT_OUTPUT_PATH}"
    )
}
