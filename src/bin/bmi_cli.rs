//! Terminal front-end: type a weight and a height, get the band and advice.
//!
//! Usage: bmi_cli 70 1,75 [--json]

use bmi_calculator::utils::formatting::{format_bmi, result_line};
use bmi_calculator::utils::parsing::parse_measurement;
use bmi_calculator::BmiError;
use clap::Parser;
use std::process::ExitCode;

/// BMI calculator
#[derive(Parser, Debug)]
#[command(name = "bmi_cli")]
#[command(version)]
#[command(about = "Compute body-mass index and show its band and recommendation", long_about = None)]
struct Args {
    /// Weight in kilograms (e.g. 70 or 70,5)
    #[arg(value_name = "WEIGHT_KG", allow_hyphen_values = true)]
    weight: String,

    /// Height in metres (e.g. 1.75 or 1,75)
    #[arg(value_name = "HEIGHT_M", allow_hyphen_values = true)]
    height: String,

    /// Print the assessment as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();

    let assessment = match parse_measurement(&args.weight, &args.height) {
        Ok(a) => a,
        Err(err) => {
            report_error(&err);
            return Ok(ExitCode::from(2));
        }
    };

    if args.json {
        let out = serde_json::json!({
            "bmi": assessment.bmi,
            "bmi_display": format_bmi(assessment.bmi),
            "classification": assessment.classification,
            "label": assessment.classification.label(),
            "recommendation": assessment.recommendation,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{} {}", assessment.classification.indicator(), result_line(&assessment));
        println!(
            "[{}] {}",
            assessment.recommendation.severity.as_str(),
            assessment.recommendation.text
        );
    }

    Ok(ExitCode::SUCCESS)
}

fn report_error(err: &BmiError) {
    eprintln!("{}", err.user_message());
    eprintln!("  {}", err);
}
