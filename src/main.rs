use clap::Parser;
use owo_colors::OwoColorize;
use std::process::ExitCode;

use librenms_export::cli::Args;
use librenms_export::runner;

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // --help and --version are not failures
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            return ExitCode::from(code);
        }
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&args.log_level))
        .init();

    match runner::run(&args.options()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::debug!("{e:?}");
            eprintln!("{}", format!("An error occurred: {e}").bold().red());
            ExitCode::from(e.exit_code())
        }
    }
}
