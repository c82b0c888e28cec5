// SPDX-License-Identifier: MPL-2.0
use iced_gallery::app::{self, paths, Flags};
use iced_gallery::infrastructure::HttpFetcher;
use iced_gallery::logging;
use std::path::PathBuf;

const HELP: &str = "\
Usage: iced_gallery [OPTIONS] [DATA_FILE]

Arguments:
  [DATA_FILE]           JSON gallery file ([{ \"name\", \"images\" }])

Options:
  --lang <LOCALE>       Interface language (e.g. en-US, fr)
  --config-dir <DIR>    Directory holding settings.toml
  --search <TERM>       Initial search term
  -h, --help            Print this help
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let lang: Option<String> = args.opt_value_from_str("--lang").unwrap_or_else(|err| {
        eprintln!("Invalid --lang: {err}");
        None
    });
    let config_dir: Option<String> = args.opt_value_from_str("--config-dir").unwrap_or_else(|err| {
        eprintln!("Invalid --config-dir: {err}");
        None
    });
    let search: Option<String> = args.opt_value_from_str("--search").unwrap_or_else(|err| {
        eprintln!("Invalid --search: {err}");
        None
    });
    let data_file = args
        .finish()
        .into_iter()
        .next()
        .map(PathBuf::from);

    logging::init_logging();
    paths::init_cli_overrides(config_dir);

    let fetcher = match HttpFetcher::new() {
        Ok(fetcher) => fetcher,
        Err(err) => {
            tracing::error!(error = %err, "Failed to create HTTP client");
            std::process::exit(1);
        }
    };

    app::run(Flags {
        data_file,
        lang,
        search,
        fetcher,
    })
}
