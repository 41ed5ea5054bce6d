//! evensum binary entry point.

use std::process::ExitCode;

use evensum::ui::output;

fn main() -> ExitCode {
    match evensum::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output::error(format!("{:#}", err));
            ExitCode::FAILURE
        }
    }
}
