// SPDX-License-Identifier: MPL-2.0
use iced_showcase::app::{self, paths, Flags};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
Usage: iced_showcase [OPTIONS] [PATH]

PATH is a showcase manifest (.toml) or a directory of images.

Options:
  --lang LANG         Interface language (e.g. en-US, fr)
  --config-dir DIR    Directory holding settings.toml
  --interval MS       Slide interval in milliseconds
  -h, --help          Print this help
";

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("iced_showcase=info")),
        )
        .init();

    let flags = match parse_args() {
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
    tracing::info!(path = ?flags.path, "starting iced_showcase");

    app::run(flags)
}

/// Returns `None` when help was requested.
fn parse_args() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let lang = args.opt_value_from_str("--lang")?;
    let config_dir = args.opt_value_from_str("--config-dir")?;
    let interval_ms = args.opt_value_from_str("--interval")?;
    let path = args
        .finish()
        .into_iter()
        .next()
        .and_then(|s| s.into_string().ok());

    Ok(Some(Flags {
        lang,
        path,
        interval_ms,
        config_dir,
    }))
}
