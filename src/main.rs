use std::process::ExitCode;

fn main() -> ExitCode {
    cefr_items::logging::init();

    match cefr_items::app::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::from(err.exit_code())
        }
    }
}
