// SPDX-License-Identifier: MPL-2.0
use loading_poster::app::{self, paths, Flags};
use loading_poster::error::{Error, Result};
use loading_poster::ui::theming::StartupDisplayMode;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
Heavy Vehicle Loading Requirements poster

USAGE:
  loading_poster [OPTIONS]

OPTIONS:
  --display-mode <MODE>  Initial display mode: light, dark or system
  --config-dir <DIR>     Directory holding settings.toml
  -h, --help             Print this help

ENVIRONMENT:
  LOADING_POSTER_CONFIG_DIR  Config directory (overridden by --config-dir)
  RUST_LOG                   Log filter (default: info)
";

/// Parses the command line. `Ok(None)` means help was printed.
fn parse_args(mut args: pico_args::Arguments) -> Result<Option<Flags>> {
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(None);
    }

    let display_mode = args
        .opt_value_from_fn("--display-mode", str::parse::<StartupDisplayMode>)?;
    let config_dir: Option<String> = args.opt_value_from_str("--config-dir")?;

    let rest = args.finish();
    if !rest.is_empty() {
        return Err(Error::InvalidArgument(format!(
            "unexpected arguments: {rest:?}"
        )));
    }

    Ok(Some(Flags {
        display_mode,
        config_dir,
    }))
}

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let flags = match parse_args(pico_args::Arguments::from_env()) {
        Ok(Some(flags)) => flags,
        Ok(None) => return Ok(()),
        Err(err) => {
            eprintln!("{err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    paths::init_cli_override(flags.config_dir.clone());
    tracing::info!(?flags, "starting");

    app::run(flags)
}
