use brasilapi_cli::presentation::cli::{run, Outcome};

fn main() {
    match run() {
        Ok(Outcome::Done) => {}
        Ok(Outcome::ReportedServiceError) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
