//! Process command - extract contact fields from a single OCR text file.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::info;

use scancard_core::contact::{ContactParser, ExtractionResult, RuleBasedContactParser};
use scancard_core::models::config::ScancardConfig;

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input file with OCR text
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Show processing time
    #[arg(long)]
    show_timing: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

pub async fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("Processing file: {}", args.input.display());

    let text = fs::read_to_string(&args.input)?;
    let parser = parser_from_config(&config);
    let result = parser.parse(&text);

    // "Nothing found" is a successful run; surfaced as a warning only.
    if result.fields.is_empty() {
        eprintln!(
            "{} No contact fields found in {}",
            style("!").yellow(),
            args.input.display()
        );
    }

    let output = format_result(&result, args.format)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    if args.show_timing {
        println!();
        println!(
            "{} Processing time: {}ms",
            style("ℹ").blue(),
            result.processing_time_ms
        );
    }

    Ok(())
}

pub fn load_config(config_path: Option<&str>) -> anyhow::Result<ScancardConfig> {
    Ok(if let Some(path) = config_path {
        ScancardConfig::from_file(std::path::Path::new(path))?
    } else {
        ScancardConfig::default()
    })
}

pub fn parser_from_config(config: &ScancardConfig) -> RuleBasedContactParser {
    RuleBasedContactParser::new()
        .with_continuation_merge(config.extraction.merge_continuation_line)
        .with_lenient_fallbacks(config.extraction.lenient_fallbacks)
}

pub fn format_result(result: &ExtractionResult, format: OutputFormat) -> anyhow::Result<String> {
    Ok(match format {
        OutputFormat::Json => serde_json::to_string_pretty(&result.fields)?,
        OutputFormat::Csv => format_csv(result)?,
        OutputFormat::Text => format_text(result),
    })
}

fn format_csv(result: &ExtractionResult) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(["name", "address", "phone_number"])?;
    wtr.write_record([
        result.fields.name.as_str(),
        result.fields.address.as_str(),
        result.fields.phone_number.as_str(),
    ])?;

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(result: &ExtractionResult) -> String {
    let mut output = String::new();

    output.push_str(&format!("Name:    {}\n", display_or_dash(&result.fields.name)));
    output.push_str(&format!(
        "Address: {}\n",
        display_or_dash(&result.fields.address)
    ));
    output.push_str(&format!(
        "Phone:   {}\n",
        display_or_dash(&result.fields.phone_number)
    ));

    if let Some(confidence) = result.confidence {
        output.push_str(&format!("\nOCR confidence: {:.1}%\n", confidence * 100.0));
    }

    output
}

fn display_or_dash(value: &str) -> &str {
    if value.is_empty() { "-" } else { value }
}
