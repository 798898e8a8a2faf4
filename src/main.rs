use std::process::ExitCode;

use clap::Parser;
use log::error;

use texclip::clipboard::{self, SystemClipboard};
use texclip::server::{self, AppState};

const CLIPBOARD_HINT: &str =
    "clipboard unavailable; check system permissions or install a clipboard provider \
     (e.g. xclip or wl-clipboard on Linux)";

/// Receive LaTeX snippets over the local network and copy them to the
/// clipboard.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// TCP port to listen on.
    #[arg(long, default_value_t = 8000)]
    port: u16,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    env_logger::Builder::from_env("TEXCLIP")
        .filter_level(log::LevelFilter::Info)
        .init();

    // Prove clipboard access works before binding the port.
    let mut system = match SystemClipboard::new() {
        Ok(system) => system,
        Err(err) => {
            error!("{err}");
            error!("{CLIPBOARD_HINT}");
            return ExitCode::from(1);
        }
    };
    if let Err(err) = clipboard::self_test(&mut system) {
        error!("{err}");
        error!("{CLIPBOARD_HINT}");
        return ExitCode::from(1);
    }

    let state = AppState::new(Box::new(system));
    if let Err(err) = server::serve(cli.port, state).await {
        error!("server error: {err}");
        return ExitCode::from(1);
    }

    ExitCode::SUCCESS
}
