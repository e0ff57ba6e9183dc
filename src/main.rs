//! sensu-consul-check - Consul service health check
//!
//! Prints one line per diagnostic to stdout and exits with the verdict's
//! severity: 0 OK, 1 WARNING, 2 CRITICAL, 3 when the arguments are unusable.

use clap::Parser;
use sensu_consul_check::utils::logging::init_logging;
use sensu_consul_check::{CheckArgs, Config, NAME, UNKNOWN_EXIT_CODE};
use std::process::ExitCode;
use tracing::debug;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = match CheckArgs::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // --help and --version are not failures
            let code = if e.use_stderr() { UNKNOWN_EXIT_CODE } else { 0 };
            let _ = e.print();
            return ExitCode::from(code);
        }
    };

    init_logging(&args.log_level, args.log_format);
    debug!(server = %args.consul_server, "parsed arguments");

    let config = Config::from_args(&args);
    let verdict = sensu_consul_check::run(&config).await;

    for line in verdict.lines(NAME) {
        println!("{}", line);
    }
    ExitCode::from(verdict.severity.exit_code())
}
