// SPDX-License-Identifier: MPL-2.0
use campaign_studio::app::{self, paths, Flags, Screen};
use std::process::ExitCode;

const HELP: &str = "\
Campaign Studio

USAGE:
  campaign_studio [OPTIONS]

OPTIONS:
  --server <URL>          Backend base URL (default: http://127.0.0.1:8000)
  --lang <LOCALE>         UI language, e.g. en-US or fr
  --screen <SCREEN>       Initial screen: gallery or brief
  --config-dir <DIR>      Directory holding settings.toml
  -h, --help              Print this help

ENVIRONMENT:
  CAMPAIGN_STUDIO_SERVER      Backend base URL
  CAMPAIGN_STUDIO_CONFIG_DIR  Directory holding settings.toml
  RUST_LOG                    Log filter (default: campaign_studio=info)
";

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        server: args.opt_value_from_str("--server")?,
        screen: args.opt_value_from_str::<_, Screen>("--screen")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unexpected arguments");
    }

    Ok(Some(flags))
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("campaign_studio=info")),
        )
        .init();

    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            return ExitCode::from(2);
        }
    };

    paths::init_cli_overrides(flags.config_dir.clone());

    match app::run(flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "application exited with an error");
            ExitCode::FAILURE
        }
    }
}
