use super::Invocation;
use crate::client::SecretsClient;
use crate::report::Reporter;
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};

/// Delete the secret immediately, skipping the recovery window.
pub async fn run<C, R>(client: &C, reporter: &mut R, invocation: &Invocation) -> Result<()>
where
    C: SecretsClient + ?Sized,
    R: Reporter,
{
    let deleted = client
        .delete_secret(&invocation.secret_id, true)
        .await
        .context("failed to delete secret")?;

    reporter.info(&format!(
        "Deletion successful: name='{}', arn='{}', deletion-date='{}'",
        deleted.name,
        deleted.arn,
        format_date(deleted.deletion_date)
    ));
    if invocation.verbose {
        reporter.info(&format!("Deletion raw response: {}", deleted.raw));
    }

    Ok(())
}

fn format_date(date: Option<DateTime<Utc>>) -> String {
    match date {
        Some(date) => date.to_rfc3339(),
        None => "unknown".to_string(),
    }
}
