// SPDX-License-Identifier: MPL-2.0
use storefront::app::{self, Flags};
use storefront::{config, logging};

fn main() -> iced::Result {
    let flags = match Flags::from_args(pico_args::Arguments::from_env()) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("{err}\n\n{}", app::USAGE);
            std::process::exit(2);
        }
    };

    if flags.help {
        println!("{}", app::USAGE);
        return Ok(());
    }

    logging::init(flags.verbose);
    config::paths::init_cli_override(flags.config_dir.clone());
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting");

    app::run(flags)
}
