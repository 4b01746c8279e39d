//! Shared driver for `wait` subcommands
//!
//! Shows a spinner while polling, cancels on Ctrl-C, and turns the outcome
//! into a message (or an error for timeouts and cancellation).

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use log::debug;

use crate::cli::{CommandContext, OutputFormat, WaitArgs};
use capella::client::{WaitMode, WaitOptions, WaitOutcome};
use capella::error::{Error, Result};

/// Cancellation signal handed to the resource's `wait`
pub type Cancel = Pin<Box<dyn Future<Output = ()> + Send>>;

/// Completes on Ctrl-C. If the handler can't be installed it never completes.
pub fn ctrl_c() -> Cancel {
    Box::pin(async {
        if tokio::signal::ctrl_c().await.is_err() {
            std::future::pending::<()>().await;
        }
    })
}

/// Poll `what` with `wait` and report the outcome.
pub async fn run<F, Fut>(ctx: &CommandContext, what: &str, args: &WaitArgs, wait: F) -> Result<()>
where
    F: FnOnce(WaitMode, WaitOptions, Cancel) -> Fut,
    Fut: Future<Output = Result<WaitOutcome>>,
{
    let mode = args.mode();
    let options = args.options(ctx.wait_defaults());
    debug!("Waiting on {} ({:?} \"{}\", {:?})", what, mode, args.status, options);

    let spinner = spinner(ctx.format, &describe(what, mode, &args.status));
    let outcome = wait(mode, options, ctrl_c()).await;
    spinner.finish_and_clear();

    report(ctx.format, what, &args.status, options, outcome?)
}

fn describe(what: &str, mode: WaitMode, target: &str) -> String {
    match mode {
        WaitMode::While => format!("Waiting while {} is {}", what, target),
        WaitMode::Until => format!("Waiting until {} is {}", what, target),
    }
}

fn spinner(format: OutputFormat, message: &str) -> ProgressBar {
    if format == OutputFormat::Json {
        return ProgressBar::hidden();
    }

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner:.cyan} {msg} [{elapsed}]")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(120));
    spinner
}

fn report(
    format: OutputFormat,
    what: &str,
    target: &str,
    options: WaitOptions,
    outcome: WaitOutcome,
) -> Result<()> {
    if format == OutputFormat::Json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "resource": what,
                "target": target,
                "reached": outcome.is_reached(),
                "status": outcome.status(),
                "polls": outcome.polls(),
            }))?
        );
    }

    let status = outcome.status().unwrap_or("gone").to_string();
    match outcome {
        WaitOutcome::Reached { .. } => {
            if format != OutputFormat::Json {
                println!("{} {} is {}", "✓".green(), what, status.bold());
            }
            Ok(())
        }
        WaitOutcome::TimedOut { .. } => Err(Error::Other(format!(
            "timed out after {}s waiting on {} (last status: {})",
            options.timeout.as_secs(),
            what,
            status
        ))),
        WaitOutcome::Cancelled { .. } => Err(Error::Other(format!(
            "cancelled waiting on {} (last status: {})",
            what, status
        ))),
    }
}
