use std::{path::PathBuf, process::ExitCode, thread, time::Duration};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use log::info;

use termprompt::{
    Logging, PROJECT_NAME, PROJECT_VERSION, PromptError, PromptFile, PromptKind,
    tui::{
        Banner, Choice, Palette, Progress, Spinner, Status, TextInput, ValidationResult,
        confirm_prompt, multiselect_prompt, select_prompt, text_prompt,
    },
};

/// Conventional exit status for a run cancelled with Ctrl+C
const EXIT_INTERRUPTED: u8 = 130;

#[derive(Parser)]
#[command(version = PROJECT_VERSION, about, long_about = None)]
pub struct UserArgs {
    #[command(subcommand)]
    command: Command,

    /// Log to stderr instead of the log file
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log at debug level
    #[arg(long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Run the prompt described by a TOML or JSON file
    Select(FileArgs),

    /// Run a prompt file as a multiple selection, whatever its kind
    Multi(FileArgs),

    /// Ask for a line of text
    Input(InputArgs),

    /// Ask for a secret, echoed as `*`
    Secret {
        #[command(flatten)]
        input: InputArgs,

        /// Do not echo anything while typing
        #[arg(long)]
        no_echo: bool,
    },

    /// Ask a yes/no question; exits 0 for yes and 1 for no
    Confirm {
        label: String,

        /// Preselect "No"
        #[arg(long)]
        default_no: bool,
    },

    /// Pick from options given on the command line
    Choose {
        #[arg(required = true)]
        options: Vec<String>,

        #[arg(short, long, default_value = "Select an option")]
        label: String,

        /// Allow several options
        #[arg(short, long)]
        multi: bool,
    },

    /// List theme names usable in prompt files
    #[command(visible_alias = "ls-themes")]
    Themes,

    /// Show the status, banner, spinner and progress outputs
    Demo,
}

#[derive(Args)]
struct FileArgs {
    /// Prompt file, `.json` or TOML
    file: PathBuf,

    /// Print the selection as a JSON array
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct InputArgs {
    #[arg(short, long)]
    label: Option<String>,

    #[arg(short, long)]
    description: Option<String>,

    /// Hint shown while the input is empty
    #[arg(short, long)]
    placeholder: Option<String>,

    /// Value returned when the input is submitted empty
    #[arg(long = "default")]
    default_value: Option<String>,

    /// Reject an empty answer
    #[arg(short, long)]
    required: bool,
}

fn init_logging(verbose: bool, debug: bool) -> Result<()> {
    let logging = Logging::new().with_debug_mode(debug);
    if verbose {
        logging.start()
    } else {
        let file_name = format!("{PROJECT_NAME}.log");
        logging.with_file(file_name).start()
    }
}

fn not_empty(value: &str) -> ValidationResult {
    if value.trim().is_empty() {
        ValidationResult::Invalid("A value is required".to_string())
    } else {
        ValidationResult::Valid
    }
}

fn print_values(values: &[String], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(values)?);
    } else {
        for value in values {
            println!("{value}");
        }
    }
    Ok(())
}

fn run_file(args: &FileArgs, force_multi: bool) -> Result<()> {
    let file = PromptFile::load(&args.file)?;

    let values: Vec<String> = if force_multi || file.kind == PromptKind::Multi {
        file.multi_select()?
            .prompt()?
            .into_iter()
            .map(|choice| choice.value)
            .collect()
    } else {
        file.single_select()?
            .prompt()?
            .into_iter()
            .map(|choice| choice.value)
            .collect()
    };

    info!("Selected {} value(s) from {}", values.len(), args.file.display());
    print_values(&values, args.json)
}

fn run_input(args: InputArgs, mut prompt: TextInput) -> Result<()> {
    if let Some(label) = args.label {
        prompt = prompt.with_label(label);
    }
    if let Some(description) = args.description {
        prompt = prompt.with_description(description);
    }
    if let Some(placeholder) = args.placeholder {
        prompt = prompt.with_placeholder(placeholder);
    }
    if let Some(default_value) = args.default_value {
        prompt = prompt.with_default_value(default_value);
    }

    let value = if args.required {
        prompt.with_validator(not_empty).prompt()?
    } else {
        prompt.prompt()?
    };
    println!("{value}");
    Ok(())
}

fn choose(options: &[String], label: &str, multi: bool) -> Result<()> {
    if multi {
        let choices = options
            .iter()
            .map(|option| Choice::new(option.clone(), option.as_str()))
            .collect();
        let values = multiselect_prompt(label, choices, false)?;
        return print_values(&values, false);
    }

    let refs: Vec<&str> = options.iter().map(String::as_str).collect();
    let index = select_prompt(label, &refs)?;
    let picked = options.get(index).context("Selected option out of range")?;
    println!("{picked}");
    Ok(())
}

fn list_themes() {
    for (name, _) in Palette::PRESETS {
        println!("{name}");
    }
}

fn demo() -> Result<()> {
    let name = text_prompt("Who is watching? ", Some(not_empty))?;

    Banner::new(format!("Hello, {name}"))
        .with_sub_label(format!("{PROJECT_NAME} {PROJECT_VERSION}"))
        .print()?;

    let spinner = Spinner::new("Warming up...").start()?;
    thread::sleep(Duration::from_secs(2));
    spinner.stop();
    Status::info("Warmed up").print()?;

    let steps = 20;
    let progress = Progress::new("Counting").with_steps(steps).start()?;
    for _ in 0..steps {
        thread::sleep(Duration::from_millis(100));
        progress.increment();
    }
    progress.done();

    Status::success("Demo complete").print()?;
    Status::warn("Nothing was saved").print()?;
    Ok(())
}

fn run(args: UserArgs) -> Result<ExitCode> {
    init_logging(args.verbose, args.debug)?;

    match args.command {
        Command::Select(file) => run_file(&file, false)?,
        Command::Multi(file) => run_file(&file, true)?,
        Command::Input(input) => run_input(input, TextInput::new())?,
        Command::Secret { input, no_echo } => {
            let prompt = if no_echo {
                TextInput::secret().no_echo()
            } else {
                TextInput::secret()
            };
            run_input(input, prompt)?;
        }
        Command::Confirm { label, default_no } => {
            if !confirm_prompt(&label, !default_no)? {
                return Ok(ExitCode::FAILURE);
            }
        }
        Command::Choose {
            options,
            label,
            multi,
        } => choose(&options, &label, multi)?,
        Command::Themes => list_themes(),
        Command::Demo => demo()?,
    }

    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    let args = UserArgs::parse();

    match run(args) {
        Ok(code) => code,
        Err(e)
            if e
                .downcast_ref::<PromptError>()
                .is_some_and(PromptError::is_interrupted) =>
        {
            info!("Cancelled by user");
            ExitCode::from(EXIT_INTERRUPTED)
        }
        Err(e) => {
            eprintln!("{} {e:#}", "Error:".red());
            ExitCode::FAILURE
        }
    }
}
