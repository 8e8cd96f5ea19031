// SPDX-License-Identifier: MPL-2.0
use cosmic_folio::app::{self, Flags};
use cosmic_folio::{config, paths};
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, reload, EnvFilter};

type ReloadHandle = reload::Handle<EnvFilter, tracing_subscriber::Registry>;

const HELP: &str = "\
cosmic-folio

USAGE:
  cosmic-folio [OPTIONS] [ROUTE]

ARGS:
  <ROUTE>                 Deep link such as /en/projects

OPTIONS:
  -h, --help              Print this help
      --lang <CODE>       Select a language (pt, en, es) and remember it
      --data-dir <PATH>   Directory for saved preferences
      --config-dir <PATH> Directory for settings.toml
";

fn main() -> iced::Result {
    let reload_handle = init_tracing();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = match parse_flags(args) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    paths::init_cli_overrides(flags.data_dir.clone(), flags.config_dir.clone());
    let (config, config_warning) = config::load();
    set_log_level(&reload_handle, &config.general.log_level);

    info!(
        route = flags.route.as_deref().unwrap_or("/"),
        lang = flags.lang.as_deref().unwrap_or("-"),
        activation = ?config.navigation.activation,
        "Starting portfolio"
    );
    app::run(flags, config, config_warning)
}

fn parse_flags(mut args: pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    let lang = args.opt_value_from_str("--lang")?;
    let data_dir = args.opt_value_from_str("--data-dir")?;
    let config_dir = args.opt_value_from_str("--config-dir")?;

    let mut free = args.finish().into_iter();
    let route = free.next().and_then(|arg| arg.into_string().ok());
    for extra in free {
        warn!(argument = ?extra, "Ignoring unexpected argument");
    }

    Ok(Flags {
        lang,
        route,
        data_dir,
        config_dir,
    })
}

fn init_tracing() -> ReloadHandle {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config::DEFAULT_LOG_LEVEL));
    let (filter_layer, handle) = reload::Layer::new(env_filter);
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_line_number(true)
                .with_filter(filter_layer),
        )
        .init();
    handle
}

/// Applies the configured level unless `RUST_LOG` is set.
fn set_log_level(handle: &ReloadHandle, level: &str) {
    if std::env::var_os(EnvFilter::DEFAULT_ENV).is_some() {
        return;
    }
    let parsed = match EnvFilter::builder().parse(level) {
        Ok(filter) => filter,
        Err(err) => {
            warn!(%level, "Invalid log level in settings: {err}");
            return;
        }
    };
    if let Err(err) = handle.modify(|filter| *filter = parsed) {
        warn!(%level, "Failed to update log level from config: {err}");
    }
}
