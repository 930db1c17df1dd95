// src/main.rs

use tracing::warn;

use multilaunch::{cli, logging, run, wait_for_enter};

#[tokio::main]
async fn main() {
    let args = cli::parse();
    if let Err(err) = logging::init_logging(args.log_level) {
        eprintln!("multilaunch error: {err:?}");
        std::process::exit(1);
    }

    let pause = args.pause;
    let code = match run(args).await {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("multilaunch error: {err}");
            err.exit_code()
        }
    };

    if pause {
        if let Err(err) = wait_for_enter().await {
            warn!(error = %err, "could not read from stdin while waiting for Enter");
        }
    }

    std::process::exit(code);
}
