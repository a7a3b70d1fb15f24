use std::process::ExitCode;

fn main() -> ExitCode {
    match fourier_demo::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
