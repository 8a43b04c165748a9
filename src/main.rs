//! Runs the population count benchmark suite and prints the report to standard output.

use std::io::{self, Write};
use std::process;

use log::error;
use popcount_shootout::{harness, BenchConfig, HarnessError, Strategy};

/// Report a failed run and return the exit status. Running out of memory is part of the report
/// on standard output, everything else goes to the log.
fn report_error<W: Write>(err: &HarnessError, out: &mut W) -> i32 {
    match err {
        HarnessError::OutOfMemory { .. } => {
            // the process exits anyway, a failing stdout changes nothing
            let _ = writeln!(out, "{}", err);
            let _ = out.flush();
        }
        _ => error!("{}", err),
    }
    err.exit_code()
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = BenchConfig::default();
    let strategy = Strategy::detect();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Err(err) = harness::run(&config, strategy, &mut out) {
        let code = report_error(&err, &mut out);
        process::exit(code);
    }
}
