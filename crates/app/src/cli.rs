//! Command-line interface definition and dispatch

use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context as _;
use clap::{ArgGroup, Args, Parser, Subcommand};
use mailtriage_domain::{Category, Config, FeedbackSubmission, TriageError};
use tracing::warn;

use crate::commands::{
    analyze, check_health, clear_history, fetch_status, list_history, remove_history_entry, render,
    run_shell, send_feedback, AnalyzeRequest, EmailSource, FeedbackStatus,
};
use crate::context::AppContext;
use crate::utils::logging::{error_label, log_command_execution};

#[derive(Debug, Parser)]
#[command(name = "mailtriage", version, about = "Classify emails and draft replies")]
pub struct Cli {
    /// Config file (JSON or TOML); standard locations are probed when omitted
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Classification service base URL (overrides config and environment)
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,

    /// Keep history in memory only
    #[arg(long, global = true)]
    pub ephemeral: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Apply command-line overrides on top of the loaded configuration.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(url) = &self.api_url {
            config.api.base_url = url.clone();
        }
        if self.ephemeral {
            config.storage.ephemeral = true;
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Classify an email and print the suggested reply
    Analyze(AnalyzeArgs),
    /// Send feedback for a past analysis
    Feedback(FeedbackArgs),
    /// Manage the local history of recent analyses
    History {
        #[command(subcommand)]
        action: HistoryAction,
    },
    /// Check the classification service
    Health,
    /// Show the server-side status of an analysis
    Status {
        /// Analysis id
        id: String,
    },
    /// Interactive session
    Shell,
}

impl Command {
    /// Stable identifier used in logs
    pub fn name(&self) -> &'static str {
        match self {
            Self::Analyze(_) => "analyze",
            Self::Feedback(_) => "feedback",
            Self::History { action: HistoryAction::List { .. } } => "history::list",
            Self::History { action: HistoryAction::Remove { .. } } => "history::remove",
            Self::History { action: HistoryAction::Clear } => "history::clear",
            Self::Health => "health",
            Self::Status { .. } => "status",
            Self::Shell => "shell",
        }
    }
}

#[derive(Debug, Args)]
#[command(group(ArgGroup::new("source").required(true).args(["text", "file"])))]
pub struct AnalyzeArgs {
    /// Email text
    #[arg(long)]
    pub text: Option<String>,

    /// Email file (.txt or .pdf, at most 1MB)
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Rate the suggested reply and send feedback right away
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=5))]
    pub rating: Option<u8>,

    /// Edited reply to send with the feedback
    #[arg(long, requires = "rating", conflicts_with = "reply_file")]
    pub reply: Option<String>,

    /// Read the edited reply from a file
    #[arg(long, requires = "rating", value_name = "PATH")]
    pub reply_file: Option<PathBuf>,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct FeedbackArgs {
    /// Analysis id
    pub id: String,

    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=5))]
    pub rating: Option<u8>,

    #[arg(long)]
    pub edited_reply: Option<String>,

    /// Category the email should have had (productive or unproductive)
    #[arg(long)]
    pub category: Option<Category>,

    #[arg(long)]
    pub comments: Option<String>,
}

impl FeedbackArgs {
    pub fn into_submission(self) -> FeedbackSubmission {
        FeedbackSubmission {
            analysis_id: self.id,
            edited_reply: self.edited_reply,
            rating: self.rating,
            user_category: self.category,
            comments: self.comments,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum HistoryAction {
    /// List recent analyses, newest first
    List {
        #[arg(long)]
        json: bool,
    },
    /// Delete one entry
    Remove { id: String },
    /// Delete all entries
    Clear,
}

/// Run `command`, writing its output to `out`.
pub async fn run<W: Write>(
    ctx: &AppContext,
    command: Command,
    out: &mut W,
) -> anyhow::Result<()> {
    let name = command.name();
    let started = Instant::now();

    let result = dispatch(ctx, command, out).await;

    log_command_execution(name, started.elapsed(), result.is_ok());
    if let Some(err) = result.as_ref().err().and_then(|e| e.downcast_ref::<TriageError>()) {
        warn!(command = name, error_type = error_label(err), "Command failed");
    }
    result
}

async fn dispatch<W: Write>(
    ctx: &AppContext,
    command: Command,
    out: &mut W,
) -> anyhow::Result<()> {
    match command {
        Command::Analyze(args) => {
            let json = args.json;
            let report = analyze(ctx, analyze_request(args)?).await?;

            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
            } else {
                writeln!(out, "{}", render::analysis(&report.result))?;
                match &report.feedback {
                    FeedbackStatus::NotRequested => {}
                    FeedbackStatus::Sent => writeln!(out, "\nFeedback sent.")?,
                    FeedbackStatus::Failed(message) => {
                        writeln!(out, "\nFeedback not sent: {message}")?
                    }
                }
            }
        }
        Command::Feedback(args) => {
            send_feedback(ctx, args.into_submission()).await?;
            writeln!(out, "Feedback sent.")?;
        }
        Command::History { action } => match action {
            HistoryAction::List { json } => {
                let records = list_history(ctx);
                if json {
                    writeln!(out, "{}", serde_json::to_string_pretty(&records)?)?;
                } else {
                    writeln!(out, "{}", render::history(&records))?;
                }
            }
            HistoryAction::Remove { id } => {
                if remove_history_entry(ctx, &id)? {
                    writeln!(out, "Removed {id}")?;
                } else {
                    writeln!(out, "No history entry with id {id}")?;
                }
            }
            HistoryAction::Clear => {
                clear_history(ctx)?;
                writeln!(out, "History cleared")?;
            }
        },
        Command::Health => {
            let snapshot = check_health(ctx).await;
            writeln!(out, "{}", render::health(snapshot.as_ref()))?;
        }
        Command::Status { id } => {
            let report = fetch_status(ctx, &id).await?;
            writeln!(out, "{}", render::status(&report))?;
        }
        Command::Shell => {
            let stdin = io::stdin();
            run_shell(ctx, stdin.lock(), &mut *out).await?;
        }
    }

    Ok(())
}

fn analyze_request(args: AnalyzeArgs) -> anyhow::Result<AnalyzeRequest> {
    let source = match (args.file, args.text) {
        (Some(path), _) => EmailSource::File(path),
        (None, Some(text)) => EmailSource::Text(text),
        (None, None) => anyhow::bail!("provide --text or --file"),
    };

    let reply = match args.reply_file {
        Some(path) => Some(
            std::fs::read_to_string(&path)
                .with_context(|| format!("reading reply from {}", path.display()))?,
        ),
        None => args.reply,
    };

    Ok(AnalyzeRequest { source, rating: args.rating, reply })
}
