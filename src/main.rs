use std::process::ExitCode;
use todo::commands::Cli;
use todo::libs::error::{exit_status, TaskError};
use todo::libs::messages::{macros::is_debug_mode, Message};
use todo::{msg_error, msg_info};

fn main() -> ExitCode {
    if is_debug_mode() {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("todo=debug")),
            )
            .with_writer(std::io::stderr)
            .init();
    }

    match Cli::menu() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => report(err),
    }
}

/// Prints a failed command and picks the exit status: 1 for user mistakes,
/// 2 for store and I/O failures.
fn report(err: anyhow::Error) -> ExitCode {
    match err.downcast_ref::<TaskError>() {
        Some(TaskError::CorruptStore { path, .. }) => {
            msg_error!(err);
            msg_info!(Message::StoreCorrupt(path.clone()));
        }
        Some(_) => msg_error!(err),
        // Already carries its own prefix or comes from a prompt/parser
        None => eprintln!("{:#}", err),
    }
    ExitCode::from(exit_status(&err))
}
