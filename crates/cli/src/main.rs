//! Command line interface for the Lebanon visa form filler

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use visa_form::NoTranslation;

/// Fill the Lebanon visa application form with data from a JSON file
#[derive(Parser)]
#[command(name = "fill-visa-form", version)]
struct Args {
    /// Path to the blank PDF form template
    #[arg(short, long, default_value = "Visa_Application_Form.pdf")]
    template: PathBuf,

    /// Path to the JSON file with applicant data
    #[arg(short, long, default_value = "visa_applicant_data.json")]
    data: PathBuf,

    /// Output path for the filled PDF
    #[arg(short, long, default_value = "output/filled_visa_form.pdf")]
    output: PathBuf,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    if !args.template.exists() {
        eprintln!("Error: Template PDF not found: {}", args.template.display());
        return ExitCode::FAILURE;
    }
    if !args.data.exists() {
        eprintln!("Error: Data file not found: {}", args.data.display());
        return ExitCode::FAILURE;
    }

    match visa_form::fill_visa_form(&args.template, &args.data, &args.output, &NoTranslation) {
        Ok(path) => {
            println!("Filled form written to {}", path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
