use std::io;
use std::process::ExitCode;

use forward::{init_logging, run, RunConfig};
use tracing::error;

fn main() -> ExitCode {
    if let Err(e) = init_logging() {
        eprintln!("failed to install logger: {}", e);
    }

    let cfg = match RunConfig::from_args(std::env::args().skip(1)) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::from(2);
        }
    };

    let stdout = io::stdout();
    let mut sink = stdout.lock();
    match run(&cfg, &mut sink) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "forward pass failed");
            ExitCode::FAILURE
        }
    }
}
