use super::ui;
use crate::core::{ConversionOutcome, ConversionSession, RateProvider};
use anyhow::{Result, anyhow, bail};
use indicatif::ProgressBar;
use std::sync::Arc;
use tracing::debug;

/// Formats a finished outcome for the terminal. Failures become errors so the
/// process exits non-zero.
pub fn render_outcome(
    outcome: &ConversionOutcome,
    amount: &str,
    from: &str,
    to: &str,
) -> Result<String> {
    match outcome {
        ConversionOutcome::Success {
            converted,
            rate_text,
        } => Ok(format!(
            "{} {} = {} {}\n{}",
            amount.trim(),
            from,
            ui::style_text(&format!("{converted:.2}"), ui::StyleType::Value),
            to,
            ui::style_text(rate_text, ui::StyleType::Subtle)
        )),
        ConversionOutcome::Failure(message) => Err(anyhow!(message.clone())),
        ConversionOutcome::Empty | ConversionOutcome::Loading => {
            Err(anyhow!("Conversion did not complete"))
        }
    }
}

/// Runs a single conversion, showing a spinner while rates are loading.
pub async fn run(
    provider: Arc<dyn RateProvider>,
    amount: &str,
    from: &str,
    to: &str,
) -> Result<()> {
    let session = Arc::new(ConversionSession::new(provider));
    let mut observer = session.subscribe();
    let mut task = session.spawn_convert(amount, from, to);
    let mut task_done = false;

    let mut spinner: Option<ProgressBar> = None;
    let waited: Result<ConversionOutcome> = async {
        loop {
            let outcome = observer.borrow_and_update().clone();
            debug!(?outcome, "Observed outcome");
            match outcome {
                ConversionOutcome::Empty => {}
                ConversionOutcome::Loading => {
                    spinner.get_or_insert_with(|| {
                        ui::new_spinner(&format!("Fetching {from} rates..."))
                    });
                }
                ConversionOutcome::Success { .. } | ConversionOutcome::Failure(_) => {
                    break Ok(outcome);
                }
            }
            if task_done {
                bail!("Conversion did not complete");
            }
            // A task that dies without publishing must not leave us waiting.
            tokio::select! {
                changed = observer.changed() => changed?,
                joined = &mut task => {
                    joined?;
                    task_done = true;
                }
            }
        }
    }
    .await;

    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }
    let outcome = waited?;
    if !task_done {
        task.await?;
    }

    println!("{}", render_outcome(&outcome, amount, from, to)?);
    Ok(())
}
