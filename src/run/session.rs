//! One form instance driven from the command line.
//!
//! A `Session` feeds URLs into a single `AnalysisForm`, one submit cycle at a
//! time, and writes what the form shows after each cycle.

use std::io::Write;

use anyhow::{Context, Result};
use log::{info, warn};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::client::AnalysisClient;
use crate::config::{OutputFormat, EMPTY_URL_NOTICE, INPUT_PLACEHOLDER};
use crate::form::{AnalysisForm, FormPhase, SubmitRejected};
use crate::models::AnalysisOutcome;
use crate::render::ResultView;

/// Tally of a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Requests actually sent
    pub submitted: usize,
    pub succeeded: usize,
    pub failed: usize,
    /// Submits refused before sending (empty URL)
    pub rejected: usize,
    /// URLs were read from stdin rather than given on the command line
    pub interactive: bool,
}

impl RunReport {
    /// Process exit code: a one-shot run fails with 1 unless the analysis
    /// succeeded; an interactive session always ends with 0.
    pub fn exit_code(&self) -> i32 {
        if self.interactive || (self.succeeded > 0 && self.failed == 0) {
            0
        } else {
            1
        }
    }
}

/// Drives one `AnalysisForm` and writes its output to `out`.
///
/// In text mode the busy label is printed once per submit cycle, before the
/// request is sent, and is followed by the card or the error banner. It is
/// never erased. In JSON mode every cycle writes exactly one JSON document,
/// including a refused empty URL.
pub struct Session<W: Write> {
    client: AnalysisClient,
    view: ResultView,
    output: OutputFormat,
    form: AnalysisForm,
    out: W,
    report: RunReport,
}

impl<W: Write> Session<W> {
    pub fn new(client: AnalysisClient, view: ResultView, output: OutputFormat, out: W) -> Self {
        Self {
            client,
            view,
            output,
            form: AnalysisForm::new(),
            out,
            report: RunReport::default(),
        }
    }

    pub fn form(&self) -> &AnalysisForm {
        &self.form
    }

    pub fn report(&self) -> RunReport {
        self.report
    }

    /// Consumes the session, returning the writer and the tally.
    pub fn into_parts(self) -> (W, RunReport) {
        (self.out, self.report)
    }

    /// Edits the URL and submits it: one full form cycle.
    ///
    /// # Errors
    ///
    /// Only fails if writing to the output fails. Analysis failures are shown,
    /// not returned.
    pub async fn analyze(&mut self, url: &str) -> Result<&FormPhase> {
        self.form.set_url(url);

        let ticket = match self.form.begin_submit() {
            Ok(ticket) => ticket,
            Err(SubmitRejected::EmptyUrl) => {
                self.report.rejected += 1;
                match self.output {
                    OutputFormat::Text => writeln!(self.out, "{EMPTY_URL_NOTICE}")
                        .context("Failed to write output")?,
                    OutputFormat::Json => self.write_json(
                        &AnalysisOutcome::Failure(EMPTY_URL_NOTICE.to_string()),
                    )?,
                }
                return Ok(self.form.phase());
            }
            Err(e @ SubmitRejected::AlreadyPending) => {
                // Unreachable while sessions are sequential; keep the form untouched
                warn!("Submit ignored: {}", e);
                self.report.rejected += 1;
                return Ok(self.form.phase());
            }
        };

        if self.output == OutputFormat::Text {
            write!(self.out, "{}", self.view.render_phase(self.form.phase()))
                .context("Failed to write output")?;
        }
        self.report.submitted += 1;

        let outcome = self.client.analyze(ticket.url()).await;
        self.form.finish(outcome);

        match self.form.phase() {
            FormPhase::Succeeded(_) => self.report.succeeded += 1,
            FormPhase::Failed(_) => self.report.failed += 1,
            FormPhase::Idle | FormPhase::Pending => {}
        }
        self.write_phase()?;
        Ok(self.form.phase())
    }

    /// Reads URLs line by line until EOF, submitting each one.
    ///
    /// # Errors
    ///
    /// Fails if reading the input or writing the output fails.
    pub async fn analyze_lines<R>(&mut self, input: R) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
    {
        self.report.interactive = true;
        let mut lines = input.lines();
        loop {
            self.prompt()?;
            let Some(line) = lines.next_line().await.context("Failed to read input")? else {
                break;
            };
            self.analyze(&line).await?;
        }
        if self.output == OutputFormat::Text {
            writeln!(self.out).context("Failed to write output")?;
        }
        info!(
            "Session ended: {} submitted, {} succeeded, {} failed",
            self.report.submitted, self.report.succeeded, self.report.failed
        );
        Ok(())
    }

    fn prompt(&mut self) -> Result<()> {
        if self.output == OutputFormat::Text {
            write!(self.out, "{INPUT_PLACEHOLDER}: ").context("Failed to write output")?;
            self.out.flush().context("Failed to flush output")?;
        }
        Ok(())
    }

    fn write_phase(&mut self) -> Result<()> {
        if self.output == OutputFormat::Json {
            let outcome = match self.form.phase() {
                FormPhase::Succeeded(result) => AnalysisOutcome::Success(result.clone()),
                FormPhase::Failed(message) => AnalysisOutcome::Failure(message.clone()),
                FormPhase::Idle | FormPhase::Pending => return Ok(()),
            };
            return self.write_json(&outcome);
        }
        let rendered = self.view.render_phase(self.form.phase());
        self.write_str(&rendered)
    }

    fn write_json(&mut self, outcome: &AnalysisOutcome) -> Result<()> {
        let mut json = serde_json::to_string_pretty(&outcome.to_json())
            .context("Failed to serialize result")?;
        json.push('\n');
        self.write_str(&json)
    }

    fn write_str(&mut self, text: &str) -> Result<()> {
        self.out
            .write_all(text.as_bytes())
            .context("Failed to write output")?;
        self.out.flush().context("Failed to flush output")
    }
}
