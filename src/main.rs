use clap::Parser;
use std::error::Error;
use std::process::ExitCode;
mod commands;
mod logging;

use commands::create::{CommandFailed, MissingProjectName};

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Scaffold a Next.js + Tailwind CSS + shadcn/ui starter project",
    long_about = None
)]
struct Args {
    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let args = Args::parse();
    if let Err(err) = logging::init_logging(args.verbose) {
        eprintln!("Failed to initialize logging: {}", err);
        return ExitCode::FAILURE;
    }
    log::debug!("Command line args: {:?}", args);

    match commands::create::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{}", err);
            ExitCode::from(exit_code_for(err.as_ref()))
        }
    }
}

/// Map a fatal error onto the process exit status.
fn exit_code_for(err: &(dyn Error + 'static)) -> u8 {
    if err.is::<MissingProjectName>() {
        return 1;
    }
    match err.downcast_ref::<CommandFailed>().and_then(|failed| failed.code) {
        Some(code) => u8::try_from(code).ok().filter(|c| *c != 0).unwrap_or(1),
        None => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_code_follows_failed_command() {
        let err: Box<dyn Error> = Box::new(CommandFailed {
            command: "pnpm add zod".to_string(),
            code: Some(42),
        });
        assert_eq!(exit_code_for(err.as_ref()), 42);
    }

    #[test]
    fn exit_code_is_one_for_signals_and_other_errors() {
        let killed: Box<dyn Error> = Box::new(CommandFailed {
            command: "pnpm dev".to_string(),
            code: None,
        });
        assert_eq!(exit_code_for(killed.as_ref()), 1);

        let io: Box<dyn Error> = "disk full".into();
        assert_eq!(exit_code_for(io.as_ref()), 1);

        let missing: Box<dyn Error> = Box::new(MissingProjectName);
        assert_eq!(exit_code_for(missing.as_ref()), 1);
    }

    #[test]
    fn exit_code_clamps_out_of_range_codes() {
        let err: Box<dyn Error> = Box::new(CommandFailed {
            command: "git commit".to_string(),
            code: Some(-1),
        });
        assert_eq!(exit_code_for(err.as_ref()), 1);
    }
}
