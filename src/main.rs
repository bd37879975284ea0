// SPDX-License-Identifier: MPL-2.0
use iced_folio::app::{self, paths, Flags};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
IcedFolio - photo portfolio client

USAGE:
  iced_folio [OPTIONS]

OPTIONS:
  -h, --help               Print this help
      --base-url URL       Address of the portfolio service
      --config-dir PATH    Directory holding settings.toml

ENVIRONMENT:
  ICED_FOLIO_CONFIG_DIR    Config directory, overridden by --config-dir
  RUST_LOG                 Log filter (default: info)
";

fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,iced_folio=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .init();
}

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        base_url: args.opt_value_from_str("--base-url")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unexpected arguments");
    }
    Ok(Some(flags))
}

fn main() -> iced::Result {
    init_logging();

    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return Ok(());
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    paths::init_cli_overrides(flags.config_dir.clone());
    app::run(flags)
}
