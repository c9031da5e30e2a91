use anyhow::{bail, Context, Result};
use calendar_view::{CalendarConfig, CalendarView, NoOverrides, TapOutcome, TextGridRenderer};
use log::{error, info};
use shared::Month;
use std::path::PathBuf;

const USAGE: &str = "usage: calendar-demo [--config PATH] [--month YYYY-MM] [--tap POSITION]... [--json]";

/// Command line options for the demo
#[derive(Debug, Default)]
struct Options {
    config_path: Option<PathBuf>,
    month: Option<Month>,
    taps: Vec<usize>,
    json: bool,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Options> {
    let mut options = Options::default();
    while let Some(arg) = args.next() {
        let mut value = |name: &str| args.next().with_context(|| format!("{name} needs a value\n{USAGE}"));
        match arg.as_str() {
            "--config" => options.config_path = Some(PathBuf::from(value("--config")?)),
            "--month" => options.month = Some(value("--month")?.parse()?),
            "--tap" => {
                let position = value("--tap")?;
                options.taps.push(
                    position
                        .parse()
                        .with_context(|| format!("Invalid tap position '{position}'"))?,
                );
            }
            "--json" => options.json = true,
            "-h" | "--help" => bail!(USAGE),
            other => bail!("Unknown argument '{other}'\n{USAGE}"),
        }
    }
    Ok(options)
}

fn run(options: Options) -> Result<()> {
    let config = match &options.config_path {
        Some(path) => CalendarConfig::load_or_default(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => CalendarConfig::default(),
    };

    let mut view = CalendarView::with_config(config);
    let title = match options.month {
        Some(month) => view.display(month),
        None => view.current_title(),
    };
    println!("{title}");

    for position in options.taps {
        if position >= shared::DAY_CELL_COUNT {
            bail!("Tap position {position} is outside the grid (0..{})", shared::DAY_CELL_COUNT);
        }
        let outcome = view.tap(position, |_| true);
        if options.json {
            println!("{}", serde_json::to_string(&outcome)?);
        } else {
            match outcome {
                TapOutcome::Selected { event } => println!(
                    "selected {} (to {:?}, {} day(s))",
                    event.selection.date, event.selection.to_date, event.selection.length
                ),
                TapOutcome::Cleared { date, .. } => println!("cleared range starting {date}"),
                TapOutcome::Rejected { preview } => println!("rejected {}", preview.date),
                TapOutcome::Ignored { reason } => println!("ignored tap at {position}: {reason:?}"),
            }
        }
    }

    let mut renderer = TextGridRenderer::new();
    view.render(&mut renderer, &NoOverrides);
    print!("{renderer}");
    Ok(())
}

fn main() {
    // Initialize logging for debugging
    env_logger::init();
    info!("Starting calendar demo");

    let result = parse_args(std::env::args().skip(1)).and_then(run);
    if let Err(e) = result {
        error!("Calendar demo failed: {:#}", e);
        eprintln!("{e:#}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> impl Iterator<Item = String> {
        list.iter().map(|s| s.to_string()).collect::<Vec<_>>().into_iter()
    }

    #[test]
    fn test_parse_args() {
        let options = parse_args(args(&["--month", "2024-03", "--tap", "14", "--tap", "15", "--json"])).unwrap();
        assert_eq!(options.month, Some(Month::new(2024, 3).unwrap()));
        assert_eq!(options.taps, vec![14, 15]);
        assert!(options.json);
        assert!(options.config_path.is_none());
    }

    #[test]
    fn test_parse_args_errors() {
        assert!(parse_args(args(&["--month"])).is_err());
        assert!(parse_args(args(&["--month", "March"])).is_err());
        assert!(parse_args(args(&["--tap", "x"])).is_err());
        assert!(parse_args(args(&["--bogus"])).is_err());
    }
}
