use super::Invocation;
use crate::client::SecretsClient;
use crate::report::Reporter;
use anyhow::{Context, Result};

pub async fn run<C, R>(client: &C, reporter: &mut R, invocation: &Invocation) -> Result<()>
where
    C: SecretsClient + ?Sized,
    R: Reporter,
{
    let restored = client
        .restore_secret(&invocation.secret_id)
        .await
        .context("failed to restore secret")?;

    reporter.info(&format!(
        "Restore successful: name='{}', arn='{}'",
        restored.name, restored.arn
    ));
    if invocation.verbose {
        reporter.info(&format!("Restore raw response: {}", restored.raw));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test::{arn, Call, FakeClient};
    use crate::report::test::RecordingReporter;

    #[tokio::test]
    async fn test_restore_logs_summary() {
        let client = FakeClient::default();
        let mut reporter = RecordingReporter::default();
        let invocation = Invocation {
            secret_id: "foo".to_string(),
            restore_first: true,
            verbose: false,
        };

        run(&client, &mut reporter, &invocation).await.unwrap();

        assert_eq!(client.calls(), vec![Call::Restore("foo".to_string())]);
        assert_eq!(
            reporter.lines,
            vec![format!("Restore successful: name='foo', arn='{}'", arn("foo"))]
        );
    }

    #[tokio::test]
    async fn test_restore_failure_is_wrapped() {
        let client = FakeClient {
            fail_restore: true,
            ..Default::default()
        };
        let mut reporter = RecordingReporter::default();
        let invocation = Invocation {
            secret_id: "foo".to_string(),
            restore_first: true,
            verbose: true,
        };

        let err = run(&client, &mut reporter, &invocation).await.unwrap_err();

        assert_eq!(err.to_string(), "failed to restore secret");
        assert!(reporter.lines.is_empty());
    }
}
