use std::process::ExitCode;

fn main() -> ExitCode {
    match termchart::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("termchart: {e}");
            ExitCode::FAILURE
        }
    }
}
