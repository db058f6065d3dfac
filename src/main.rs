// SPDX-License-Identifier: MPL-2.0
use cedric_plans::app::{self, Flags};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
Cedric House Plans

USAGE:
  cedric_plans [OPTIONS]

OPTIONS:
  --plan <ID>          Open the detail page of plan ID on startup
  --config-dir <DIR>   Read settings.toml from DIR
  --api-base <URL>     Storefront API base URL
  --diagnostics <FILE> Write an activity report to FILE on exit
  -h, --help           Print this help
";

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = match parse_flags(&mut args) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "ignoring unrecognised arguments");
    }

    app::run(flags)
}

fn parse_flags(args: &mut pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    Ok(Flags {
        plan: args.opt_value_from_str("--plan")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        api_base: args.opt_value_from_str("--api-base")?,
        diagnostics: args.opt_value_from_str("--diagnostics")?,
    })
}
