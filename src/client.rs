use crate::error::{Error, Result};
use crate::pretty;
use async_trait::async_trait;
use aws_sdk_secretsmanager::error::DisplayErrorContext;
use aws_sdk_secretsmanager::primitives::DateTime as AwsDateTime;
use chrono::{DateTime, Utc};

/// Result of a successful restore call
pub struct Restored {
    pub name: String,
    pub arn: String,
    /// Colorless rendering of the complete response
    pub raw: String,
}

/// Result of a successful delete call
pub struct Deleted {
    pub name: String,
    pub arn: String,
    pub deletion_date: Option<DateTime<Utc>>,
    /// Colorless rendering of the complete response
    pub raw: String,
}

/// The two Secrets Manager operations the workflow needs
#[async_trait]
pub trait SecretsClient: Send + Sync {
    /// Cancel a scheduled deletion and make the secret accessible again
    async fn restore_secret(&self, secret_id: &str) -> Result<Restored>;

    /// Delete a secret, immediately when `force_without_recovery` is set
    async fn delete_secret(&self, secret_id: &str, force_without_recovery: bool)
        -> Result<Deleted>;
}

pub struct AwsSecretsClient {
    inner: aws_sdk_secretsmanager::Client,
}

impl AwsSecretsClient {
    pub fn new(config: &aws_config::SdkConfig) -> Self {
        Self {
            inner: aws_sdk_secretsmanager::Client::new(config),
        }
    }
}

#[async_trait]
impl SecretsClient for AwsSecretsClient {
    async fn restore_secret(&self, secret_id: &str) -> Result<Restored> {
        let output = self
            .inner
            .restore_secret()
            .secret_id(secret_id)
            .send()
            .await
            .map_err(|e| Error::Service(DisplayErrorContext(&e).to_string()))?;

        Ok(Restored {
            name: output.name().unwrap_or_default().to_string(),
            arn: output.arn().unwrap_or_default().to_string(),
            raw: pretty::colorless(&output),
        })
    }

    async fn delete_secret(
        &self,
        secret_id: &str,
        force_without_recovery: bool,
    ) -> Result<Deleted> {
        let output = self
            .inner
            .delete_secret()
            .secret_id(secret_id)
            .force_delete_without_recovery(force_without_recovery)
            .send()
            .await
            .map_err(|e| Error::Service(DisplayErrorContext(&e).to_string()))?;

        Ok(Deleted {
            name: output.name().unwrap_or_default().to_string(),
            arn: output.arn().unwrap_or_default().to_string(),
            deletion_date: output.deletion_date().and_then(to_chrono),
            raw: pretty::colorless(&output),
        })
    }
}

fn to_chrono(date: &AwsDateTime) -> Option<DateTime<Utc>> {
    DateTime::<Utc>::from_timestamp(date.secs(), date.subsec_nanos())
}
