//! Command routing and execution
//!
//! Turns parsed arguments plus configuration into a [`RunPlan`], then runs it.

use crate::cli::args::{Commands, DatasetArgs};
use crate::cli::validation::validate_run;
use crate::config::FlightConfig;
use crate::error::{ErrorCode, FlightError};
use crate::questions::{answer, Answer, Question, QuestionSettings};
use crate::report::{FormatType, OutputFormatter};
use crate::source::Dataset;
use anyhow::{Context, Result};
use tracing::debug;

/// Everything needed to answer the requested questions
#[derive(Debug, Clone)]
pub struct RunPlan {
    pub dataset: Dataset,
    pub questions: Vec<Question>,
    pub settings: QuestionSettings,
    pub format: FormatType,
}

/// Resolve a command against configuration; flags override configured values
pub fn plan_command(
    command: Commands,
    format: Option<FormatType>,
    config: &FlightConfig,
) -> crate::error::Result<RunPlan> {
    let mut settings = config.question_settings();

    let (dataset, questions) = match command {
        Commands::Empty { dataset, threshold } => {
            if let Some(t) = threshold {
                settings.empty_threshold = t;
            }
            (dataset, vec![Question::EmptyFlights])
        }
        Commands::Airports { dataset, top } => {
            apply_top(&mut settings, top);
            (dataset, vec![Question::TopAirports])
        }
        Commands::Cities { dataset, top } => {
            apply_top(&mut settings, top);
            (dataset, vec![Question::TopCities])
        }
        Commands::Connections { dataset, top } => {
            apply_top(&mut settings, top);
            (dataset, vec![Question::Connections])
        }
        Commands::All {
            dataset,
            threshold,
            top,
        } => {
            if let Some(t) = threshold {
                settings.empty_threshold = t;
            }
            apply_top(&mut settings, top);
            (dataset, Question::ALL.to_vec())
        }
    };

    let path = dataset_path(dataset, config)?;
    validate_run(&path, &settings)?;

    Ok(RunPlan {
        dataset: Dataset::new(path, config.source_options()),
        questions,
        settings,
        format: format.unwrap_or(config.format),
    })
}

fn apply_top(settings: &mut QuestionSettings, top: Option<usize>) {
    if let Some(n) = top {
        settings.top_n = n;
    }
}

fn dataset_path(args: DatasetArgs, config: &FlightConfig) -> crate::error::Result<std::path::PathBuf> {
    args.file.or_else(|| config.dataset.clone()).ok_or_else(|| {
        FlightError::validation_with_code(
            ErrorCode::VALIDATION_FILE_NOT_FOUND,
            "no dataset given; pass --file or set `dataset` in flightmr.toml",
            Some("dataset".to_string()),
        )
    })
}

/// Answer every question in the plan and render the report
pub fn execute_plan(plan: &RunPlan) -> Result<String> {
    debug!("Executing plan: {:?}", plan);
    let answers = plan
        .questions
        .iter()
        .map(|&question| {
            answer(question, &plan.dataset, &plan.settings)
                .with_context(|| format!("Failed to answer {}", question))
        })
        .collect::<Result<Vec<Answer>>>()?;

    let formatter = OutputFormatter::new(plan.format);
    Ok(match answers.as_slice() {
        [single] => formatter.format(single),
        many => formatter.format_all(many),
    })
}

/// Execute a CLI command based on the parsed arguments
pub fn execute_command(
    command: Commands,
    format: Option<FormatType>,
    config: &FlightConfig,
) -> Result<()> {
    let plan = plan_command(command, format, config)?;
    let report = execute_plan(&plan)?;
    print!("{}", report);
    if !report.ends_with('\n') {
        println!();
    }
    Ok(())
}
