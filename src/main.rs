// SPDX-License-Identifier: MPL-2.0
use smp::app::{self, Flags};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
SMP - a minimal media player

USAGE:
  smp [OPTIONS] [PATH]

OPTIONS:
  --lang <LOCALE>       Interface language (e.g. en-US, fr)
  --config-dir <DIR>    Directory holding settings.toml
  -h, --help            Print this help

ARGS:
  [PATH]                File or directory to open in the first window
";

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,smp=info")),
        )
        .init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    app::run(parse_flags(args))
}

/// Reads `--lang`, `--config-dir` and the optional positional path.
fn parse_flags(mut args: pico_args::Arguments) -> Flags {
    let lang = args.opt_value_from_str("--lang").unwrap_or_else(|err| {
        tracing::warn!(%err, "ignoring --lang");
        None
    });
    let config_dir = args.opt_value_from_str("--config-dir").unwrap_or_else(|err| {
        tracing::warn!(%err, "ignoring --config-dir");
        None
    });

    let mut free = args.finish().into_iter();
    let file_path = free.next().map(PathBuf::from);
    for extra in free {
        tracing::warn!(arg = %extra.to_string_lossy(), "ignoring extra argument");
    }

    Flags {
        lang,
        file_path,
        config_dir,
    }
}
