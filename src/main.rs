use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use resume_compiler::core::FsOps;
use resume_compiler::{app_log, EnvironmentConfig, ResumeCompiler, ResumeRecord};
use std::path::{Path, PathBuf};

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "resumetex")]
#[command(about = "Compile resume records into LaTeX documents")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    #[arg(long, default_value = "config.yaml")]
    config: PathBuf,

    /// Emit logs as JSON lines
    #[arg(long)]
    log_json: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Compile a resume record (JSON or YAML) into LaTeX source
    Compile {
        #[arg(long)]
        input: PathBuf,
        /// Template id, defaults to the configured default template
        #[arg(long)]
        template: Option<String>,
        /// Write to this file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
        /// Reference date for tense decisions (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// List available templates
    Templates,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_json);

    let config = EnvironmentConfig::load(&cli.config)?;
    app_log!(info, "Templates: {}", config.templates_path.display());
    app_log!(info, "Default template: {}", config.default_template);

    let compiler = ResumeCompiler::from_config(&config);

    match cli.command {
        Command::Compile {
            input,
            template,
            output,
            date,
        } => {
            let record = read_record(&input).await?;
            let template = config.template_id(template.as_deref());
            let document = match date {
                Some(today) => compiler.compile_at(template, &record, today).await,
                None => compiler.compile(template, &record).await,
            }
            .context("Resume compilation failed; check the templates deployment")?;

            match output {
                Some(path) => {
                    FsOps::write_file_safe(&path, &document).await?;
                    app_log!(info, "Wrote {}", path.display());
                }
                None => print!("{}", document),
            }
        }
        Command::Templates => {
            for id in compiler.templates().list_templates().await? {
                println!("{}", id);
            }
        }
    }

    Ok(())
}

fn init_logging(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    // Logs go to stderr so stdout stays clean for the document.
    if json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_current_span(false)
                    .with_span_list(false),
            )
            .init();
    } else {
        registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

async fn read_record(path: &Path) -> Result<ResumeRecord> {
    let content = FsOps::read_file_safe(path).await?;
    let is_yaml = matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    );

    if is_yaml {
        serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse resume YAML: {}", path.display()))
    } else {
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse resume JSON: {}", path.display()))
    }
}
