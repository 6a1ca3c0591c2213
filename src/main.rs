// SPDX-License-Identifier: MPL-2.0
use analogy_gallery::app::{self, paths, Flags};
use analogy_gallery::config;
use analogy_gallery::content::{ChartId, ImageSource, Site};
use analogy_gallery::Error;
use std::path::PathBuf;
use std::process::ExitCode;

const USAGE: &str = "\
Usage: analogy_gallery [OPTIONS] [CHART]

Arguments:
  [CHART]               Open this chart page instead of the gallery

Options:
  --content <DIR>       Content directory (questionnaire/, data/, description/)
  --images <URL|DIR>    Base URL or directory for analogy and chart images
  --config-dir <DIR>    Directory holding settings.toml
  --check               Generate pages, print the route table, and exit
  -v, --verbose         Increase log verbosity (repeatable)
  -h, --help            Print this help
";

#[derive(Debug, Default, PartialEq)]
struct Cli {
    content: Option<PathBuf>,
    images: Option<String>,
    config_dir: Option<String>,
    check: bool,
    verbosity: u8,
    help: bool,
    chart: Option<String>,
}

fn parse_args(mut args: pico_args::Arguments) -> Result<Cli, pico_args::Error> {
    let mut verbosity = 0u8;
    while args.contains(["-v", "--verbose"]) {
        verbosity = verbosity.saturating_add(1);
    }

    let cli = Cli {
        help: args.contains(["-h", "--help"]),
        check: args.contains("--check"),
        content: args.opt_value_from_str("--content")?,
        images: args.opt_value_from_str("--images")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        verbosity,
        chart: args.opt_free_from_str()?,
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        return Err(pico_args::Error::ArgumentParsingFailed {
            cause: format!("unexpected arguments: {remaining:?}"),
        });
    }
    Ok(cli)
}

fn init_logging(verbosity: u8) {
    // RUST_LOG still takes precedence over -v
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .filter_module("wgpu", log::LevelFilter::Warn)
        .filter_module("wgpu_core", log::LevelFilter::Warn)
        .filter_module("iced", log::LevelFilter::Warn)
        .format_timestamp_millis()
        .init();
}

fn run(cli: Cli) -> Result<(), Error> {
    paths::init_cli_overrides(cli.config_dir);

    let (mut config, warning) = config::load();
    if let Some(warning) = warning {
        log::warn!("{warning}");
    }
    if let Some(root) = cli.content {
        config.content.root = Some(root);
    }
    if let Some(images) = cli.images {
        config.content.image_base = Some(images);
    }

    let root = config.content.root_or_default();
    let images = ImageSource::new(config.content.image_base_or_default());
    log::info!("content root: {}", root.display());
    log::info!(
        "image base: {} ({})",
        images.base(),
        if images.is_remote() { "remote" } else { "local" }
    );

    let site = Site::generate(&root, images)?;

    if cli.check {
        for route in site.route_table() {
            println!("{route}");
        }
        return Ok(());
    }

    let initial_chart = match cli.chart {
        Some(name) => {
            let id: ChartId = name.parse()?;
            if !site.has_page(&id) {
                return Err(Error::Content(format!("no page for chart {id}")));
            }
            Some(id)
        }
        None => None,
    };

    app::run(Flags {
        site,
        config,
        initial_chart,
    })?;
    Ok(())
}

fn main() -> ExitCode {
    let cli = match parse_args(pico_args::Arguments::from_env()) {
        Ok(cli) => cli,
        Err(err) => {
            eprintln!("error: {err}\n\n{USAGE}");
            return ExitCode::from(2);
        }
    };

    if cli.help {
        print!("{USAGE}");
        return ExitCode::SUCCESS;
    }

    init_logging(cli.verbosity);
    log::debug!("command-line args: {cli:?}");

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;

    fn parse(args: &[&str]) -> Result<Cli, pico_args::Error> {
        parse_args(pico_args::Arguments::from_vec(
            args.iter().map(OsString::from).collect(),
        ))
    }

    #[test]
    fn no_arguments_opens_gallery() {
        assert_eq!(parse(&[]).expect("parse"), Cli::default());
    }

    #[test]
    fn parses_all_options() {
        let cli = parse(&[
            "--content",
            "/srv/content",
            "--images",
            "https://example.org/img",
            "--config-dir",
            "/tmp/cfg",
            "--check",
            "-v",
            "-v",
            "Waterfall",
        ])
        .expect("parse");

        assert_eq!(cli.content, Some(PathBuf::from("/srv/content")));
        assert_eq!(cli.images.as_deref(), Some("https://example.org/img"));
        assert_eq!(cli.config_dir.as_deref(), Some("/tmp/cfg"));
        assert!(cli.check);
        assert_eq!(cli.verbosity, 2);
        assert_eq!(cli.chart.as_deref(), Some("Waterfall"));
    }

    #[test]
    fn rejects_extra_positional_arguments() {
        assert!(parse(&["Waterfall", "Sankey"]).is_err());
    }

    #[test]
    fn missing_option_value_is_an_error() {
        assert!(parse(&["--content"]).is_err());
    }
}
