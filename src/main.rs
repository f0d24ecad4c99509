//! text-quiz CLI: generate a quiz from a text file or stdin.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process;
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use text_quiz_gen::quiz_engine::export::letter;
use text_quiz_gen::{
    render_printable, to_json, try_generate_quiz, Difficulty, ExportOptions, Numbering, Quiz,
    QuizError, QuizSettings,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Quiz,
    Printable,
    Json,
}

impl FromStr for OutputFormat {
    type Err = QuizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "quiz"      => Ok(OutputFormat::Quiz),
            "printable" => Ok(OutputFormat::Printable),
            "json"      => Ok(OutputFormat::Json),
            _ => Err(QuizError::UnknownFormat(s.to_string())),
        }
    }
}

#[derive(Parser)]
#[command(name = "text-quiz", version, about = "Generate multiple-choice and true/false quizzes from text")]
struct Cli {
    /// Text file to read ("-" or omitted reads stdin)
    #[arg(long, short)]
    input: Option<PathBuf>,

    /// JSON settings file; flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of multiple-choice questions
    #[arg(long)]
    mc: Option<usize>,

    /// Number of true/false questions
    #[arg(long)]
    tf: Option<usize>,

    /// easy, moderate or hard
    #[arg(long)]
    difficulty: Option<Difficulty>,

    /// RNG seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// Title printed in the printable header
    #[arg(long)]
    title: Option<String>,

    /// Ordinal numbering: per-type or global
    #[arg(long)]
    numbering: Option<Numbering>,

    /// Output format: quiz, printable, json
    #[arg(long, default_value = "quiz")]
    format: OutputFormat,

    /// Line width for the printable format
    #[arg(long)]
    width: Option<usize>,
}

fn read_text(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        _ => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}

fn settings(cli: &Cli) -> Result<QuizSettings> {
    let mut settings = match &cli.config {
        Some(path) => QuizSettings::load(path)?,
        None => QuizSettings::default(),
    };
    if let Some(mc) = cli.mc {
        settings.mc_count = mc;
    }
    if let Some(tf) = cli.tf {
        settings.tf_count = tf;
    }
    if let Some(difficulty) = cli.difficulty {
        settings.difficulty = difficulty;
    }
    if let Some(numbering) = cli.numbering {
        settings.numbering = numbering;
    }
    if cli.seed.is_some() {
        settings.seed = cli.seed;
    }
    if cli.title.is_some() {
        settings.title = cli.title.clone();
    }
    if let Some(width) = cli.width {
        settings.wrap_width = width;
    }
    Ok(settings)
}

fn print_quiz(quiz: &Quiz) {
    for q in &quiz.questions {
        println!("{}", q.prompt);
        for (idx, opt) in q.options.iter().enumerate() {
            println!("   {}. {opt}", letter(idx));
        }
        println!();
    }
}

fn run(cli: Cli) -> Result<()> {
    let settings = settings(&cli)?;
    let text = read_text(cli.input.as_deref())?;

    let quiz = try_generate_quiz(settings.request(text))?;
    info!(
        quiz_id = %quiz.quiz_id,
        questions = quiz.questions.len(),
        difficulty = %quiz.difficulty,
        "generated quiz"
    );

    match cli.format {
        OutputFormat::Quiz => print_quiz(&quiz),
        OutputFormat::Printable => {
            let options = ExportOptions { width: settings.wrap_width };
            print!("{}", render_printable(&quiz, &options));
        }
        OutputFormat::Json => {
            let value = to_json(&quiz, true);
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
    }
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("text_quiz_gen=warn,text_quiz=warn")),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
