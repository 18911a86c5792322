//! Interactive shell driving a single analysis session
//!
//! Reads one command per line, mirrors the web form workflow: pick a file or
//! type text, submit, review and edit the reply, rate it, send feedback,
//! start over.

use std::io::{self, BufRead, Write};
use std::path::Path;

use mailtriage_core::{probe_health, AnalysisSession};
use mailtriage_domain::{HealthSnapshot, TriageError};
use mailtriage_infra::read_email_file;
use tokio::task::JoinHandle;
use tracing::debug;

use super::render;
use crate::context::AppContext;

const HELP: &str = "\
Commands:
  file PATH      select a .txt or .pdf file (clears typed text)
  text TEXT      type the email text
  clear          empty the form
  clear file     drop the selected file, keeping the form open for text
  submit         analyse the current input
  show           show the form or the current result
  edit TEXT      replace the suggested reply
  restore        go back to the original suggested reply
  rate N         rate the reply from 1 to 5
  feedback       send rating and edited reply
  new            start a new analysis
  history        list recent analyses
  remove ID      delete one history entry
  wipe           delete all history
  health         check the classification service
  help           show this help
  quit           leave the shell";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Run the shell until `quit` or end of input.
///
/// Command failures are printed and the loop continues; only I/O errors on
/// `input` or `output` end the shell early.
pub async fn run_shell<R, W>(ctx: &AppContext, input: R, mut output: W) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    let mut shell = Shell::new(ctx);
    writeln!(output, "mailtriage shell - type 'help' for commands")?;

    for line in input.lines() {
        let line = line?;
        shell.report_health(&mut output).await?;

        if shell.execute(line.trim_start(), &mut output).await? == Flow::Quit {
            break;
        }
        output.flush()?;
    }

    output.flush()
}

struct Shell<'a> {
    ctx: &'a AppContext,
    session: AnalysisSession,
    startup_health: Option<JoinHandle<Option<HealthSnapshot>>>,
}

impl<'a> Shell<'a> {
    fn new(ctx: &'a AppContext) -> Self {
        let client = ctx.client.clone();
        let startup_health = tokio::spawn(async move { probe_health(client.as_ref()).await });
        Self { ctx, session: ctx.session(), startup_health: Some(startup_health) }
    }

    /// Print the start-up health result once it has arrived.
    async fn report_health<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        let finished = self.startup_health.as_ref().is_some_and(JoinHandle::is_finished);
        if !finished {
            return Ok(());
        }

        if let Some(handle) = self.startup_health.take() {
            match handle.await {
                Ok(snapshot) => writeln!(out, "{}", render::health(snapshot.as_ref()))?,
                Err(err) => debug!(error = %err, "Startup health probe did not complete"),
            }
        }
        Ok(())
    }

    async fn execute<W: Write>(&mut self, line: &str, out: &mut W) -> io::Result<Flow> {
        // Only the separator after the command word is dropped; `text`
        // keeps the rest of the line as typed.
        let (command, raw) = match line.split_once(' ') {
            Some((command, raw)) => (command, raw),
            None => (line, ""),
        };
        let rest = raw.trim();

        match command {
            "" => {}
            "file" => self.select_file(rest, out)?,
            "text" => {
                let result = self.session.set_text(raw);
                let length = raw.chars().count();
                report(out, result, |()| format!("Text set ({length} characters)"))?;
            }
            "clear" if rest == "file" => {
                let result = self.session.clear_file();
                report(out, result, |()| "File cleared".to_string())?;
            }
            "clear" => report(out, self.session.clear_form(), |()| "Form cleared".to_string())?,
            "submit" => self.submit(out).await?,
            "show" => self.show(out)?,
            "edit" => {
                let result = self.session.edit_reply(rest);
                report(out, result, |()| "Reply updated".to_string())?;
            }
            "restore" => {
                let result = self.session.restore_reply();
                report(out, result, |()| "Original reply restored".to_string())?;
            }
            "rate" => self.rate(rest, out)?,
            "feedback" => self.send_feedback(out).await?,
            "new" => {
                self.session.start_new_analysis();
                writeln!(out, "{}", render::form(self.session.form().input()))?;
            }
            "history" => writeln!(out, "{}", render::history(&self.session.history().list()))?,
            "remove" => self.remove(rest, out)?,
            "wipe" => {
                let result = self.session.history().clear();
                report(out, result, |()| "History cleared".to_string())?;
            }
            "health" => {
                let snapshot = probe_health(self.ctx.client.as_ref()).await;
                writeln!(out, "{}", render::health(snapshot.as_ref()))?;
            }
            "help" => writeln!(out, "{HELP}")?,
            "quit" | "exit" => return Ok(Flow::Quit),
            other => writeln!(out, "Unknown command: {other} (type 'help')")?,
        }

        Ok(Flow::Continue)
    }

    fn select_file<W: Write>(&mut self, path: &str, out: &mut W) -> io::Result<()> {
        if path.is_empty() {
            return writeln!(out, "Usage: file PATH");
        }

        let selected = read_email_file(Path::new(path)).and_then(|file| {
            let summary = format!("Selected {} ({} bytes)", file.name, file.size);
            self.session.select_file(file).map(|()| summary)
        });
        report(out, selected, |summary| summary)
    }

    async fn submit<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        if let Some(mode) = self.session.form().mode() {
            writeln!(out, "Analysing {mode}...")?;
        }

        match self.session.submit().await {
            Ok(result) => writeln!(out, "{}", render::analysis(&result)),
            Err(err) => writeln!(out, "Error: {err}"),
        }
    }

    fn show<W: Write>(&self, out: &mut W) -> io::Result<()> {
        if self.session.is_editable() {
            writeln!(out, "{}", render::form(self.session.form().input()))?;
        }
        writeln!(out, "{}", render::state(self.session.state()))
    }

    fn rate<W: Write>(&mut self, value: &str, out: &mut W) -> io::Result<()> {
        let result = value
            .parse::<u8>()
            .map_err(|_| TriageError::InvalidInput(format!("'{value}' is not a rating (1-5)")))
            .and_then(|rating| self.session.set_rating(rating).map(|()| rating));
        report(out, result, |rating| format!("Rated {rating}/5"))
    }

    /// Feedback requires a rating here, as in the web form.
    async fn send_feedback<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        let Some(draft) = self.session.draft() else {
            return writeln!(out, "Error: no analysis result to give feedback on");
        };
        if draft.rating().is_none() {
            return writeln!(out, "Rate the reply first (rate 1-5)");
        }

        let sent = match self.session.feedback_submission() {
            Ok(submission) => self.ctx.feedback.submit(&submission).await,
            Err(err) => Err(err),
        };
        report(out, sent, |()| "Feedback sent, thank you".to_string())
    }

    fn remove<W: Write>(&self, id: &str, out: &mut W) -> io::Result<()> {
        if id.is_empty() {
            return writeln!(out, "Usage: remove ID");
        }

        let removed = self.session.history().remove_by_id(id);
        report(out, removed, |removed| {
            if removed {
                format!("Removed {id}")
            } else {
                format!("No history entry with id {id}")
            }
        })
    }
}

/// Print the success message or the error.
fn report<T, W, F>(out: &mut W, result: Result<T, TriageError>, message: F) -> io::Result<()>
where
    W: Write,
    F: FnOnce(T) -> String,
{
    match result {
        Ok(value) => writeln!(out, "{}", message(value)),
        Err(err) => writeln!(out, "Error: {err}"),
    }
}
