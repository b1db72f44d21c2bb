use clap::{Parser, Subcommand};
use quote_form::prelude::*;
use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

/// Validate quote requests and build the mailto hand-off from the command line
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Optional form definition JSON. Defaults to the standard quote form.
    #[arg(short, long, global = true)]
    form: Option<String>,

    /// Optional config TOML (recipient, draft prefix, delays)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate a JSON object of field values and print the mailto URI if it passes
    Check {
        /// Path to a JSON file such as {"name": "Jane", "phone": "0790256695"}
        submission_path: String,
    },
    /// Format a phone number the way the phone field does while typing
    FormatPhone { raw: String },
    /// Fill in the form field by field, keeping a draft file between runs
    Interactive {
        /// Draft file. Values typed here survive an aborted session.
        #[arg(short, long, default_value = "quote-drafts.bin")]
        drafts: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let form = match &cli.form {
        Some(path) => FormDefinition::from_file(path)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to load form: {}", e))),
        None => FormDefinition::quote_request(),
    };
    let config = match &cli.config {
        Some(path) => FormConfig::load(path)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to load config: {}", e))),
        None => FormConfig::default(),
    };
    for problem in config.validate() {
        eprintln!("Warning: {}", problem);
    }

    match cli.command {
        Command::Check { submission_path } => run_check(form, config, &submission_path),
        Command::FormatPhone { raw } => run_format_phone(&raw),
        Command::Interactive { drafts } => run_interactive(form, config, drafts),
    }
}

fn run_check(form: FormDefinition, config: FormConfig, submission_path: &str) {
    let json = fs::read_to_string(submission_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to read submission file '{}': {}",
            submission_path, e
        ))
    });
    let values: BTreeMap<String, String> = serde_json::from_str(&json)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse submission JSON: {}", e)));

    let mut engine = FormEngine::new(form, config, MemoryDraftStore::new());
    for (id, value) in &values {
        if let Err(e) = engine.input(id, value) {
            eprintln!("Skipping '{}': {}", id, e);
        }
    }

    let outcome = engine
        .submit()
        .unwrap_or_else(|e| exit_with_error(&format!("Submission failed: {}", e)));
    match outcome {
        SubmitOutcome::Accepted(submission) => {
            print_report(&submission.report);
            println!("\n{}\n", submission.message);
            println!("{}", submission.mailto);
        }
        SubmitOutcome::Rejected(report) => {
            print_report(&report);
            if let Some((id, _)) = report.first_invalid() {
                exit_with_error(&format!("Submission rejected, first invalid field: '{}'", id));
            }
        }
    }
}

fn run_format_phone(raw: &str) {
    let formatted = format_phone(raw);
    let verdict = if is_valid_phone(raw) { "valid" } else { "invalid" };
    println!("{} ({})", formatted, verdict);
}

/// Prompts for every field in form order, validating each answer as if the
/// field had lost focus.
fn run_interactive(form: FormDefinition, config: FormConfig, drafts: PathBuf) {
    println!("--- Quote Request ---");

    let store = FileDraftStore::open(&drafts).unwrap_or_else(|e| {
        exit_with_error(&format!("Failed to open drafts '{}': {}", drafts.display(), e))
    });
    let fields = form.fields().to_vec();
    let mut engine = FormEngine::new(form, config, store);

    for field in &fields {
        if !field.options.is_empty() {
            println!("Options: {}", field.options.join(", "));
        }
        loop {
            let saved = engine.value(&field.id).unwrap_or_default().to_string();
            let default = (!saved.is_empty()).then_some(saved.as_str());
            let answer = prompt_for_input(field.label(), default);

            if let Err(e) = engine.input(&field.id, &answer) {
                exit_with_error(&e.to_string());
            }
            let verdict = engine
                .blur(&field.id)
                .unwrap_or_else(|e| exit_with_error(&e.to_string()));
            if verdict.valid {
                break;
            }
            println!("  ! {}", verdict.message);
        }
        if field.kind == FieldKind::Textarea {
            if let Ok(reading) = engine.character_count(&field.id) {
                println!("  {}", reading);
            }
        }
    }

    match engine.submit() {
        Ok(SubmitOutcome::Accepted(submission)) => {
            println!("\n{}\n", submission.message);
            println!("Open this link to send the request:\n{}", submission.mailto);
            engine.complete_submission();
        }
        Ok(SubmitOutcome::Rejected(report)) => print_report(&report),
        Err(e) => exit_with_error(&e.to_string()),
    }
}

fn print_report(report: &ValidationReport) {
    println!("--- Validation ---");
    for (id, verdict) in &report.entries {
        if verdict.valid {
            println!("  {:<10} ok", id);
        } else {
            println!("  {:<10} {}", id, verdict.message);
        }
    }
}

/// A helper function to prompt the user and read a line of input.
fn prompt_for_input(prompt_text: &str, default: Option<&str>) -> String {
    let mut line = String::new();
    let default_prompt = default.map_or("".to_string(), |d| format!(" [default: {}]", d));

    print!("> {}{}: ", prompt_text, default_prompt);
    if let Err(e) = io::stdout().flush() {
        exit_with_error(&format!("Failed to flush stdout: {}", e));
    }

    if let Err(e) = io::stdin().read_line(&mut line) {
        exit_with_error(&format!("Failed to read line: {}", e));
    }
    let trimmed = line.trim().to_string();

    if trimmed.is_empty() {
        default.unwrap_or("").to_string()
    } else {
        trimmed
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
