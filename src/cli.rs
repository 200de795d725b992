use crate::commands::Invocation;
use clap::builder::NonEmptyStringValueParser;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "aws-secretsmanager-delete-4real")]
#[command(about = "Delete an AWS Secrets Manager secret 4 real")]
#[command(long_about = "Delete an AWS Secrets Manager secret 4 real.

The secret is deleted with ForceDeleteWithoutRecovery, so there is no
recovery window: once the request succeeds the secret is gone. A secret
that is already scheduled for deletion can be restored first with
--restore-first.")]
#[command(version)]
#[command(after_help = "Examples:
  aws-secretsmanager-delete-4real -s my/app/db              Force delete a secret
  aws-secretsmanager-delete-4real -s my/app/db -r           Restore, then force delete
  aws-secretsmanager-delete-4real -s my/app/db -v           Also print the raw API response
  aws-secretsmanager-delete-4real -s arn:aws:... --region eu-west-1")]
pub struct Cli {
    /// Delete secret with identifier SECRET-ID (name or ARN)
    #[arg(short, long, value_name = "SECRET-ID", value_parser = NonEmptyStringValueParser::new())]
    pub secret_id: String,

    /// Restore the secret before deleting it
    #[arg(short, long)]
    pub restore_first: bool,

    /// Verbose responses from AWS API
    #[arg(short, long)]
    pub verbose: bool,

    /// AWS region to use instead of the default provider chain
    #[arg(long, env = "AWS_REGION")]
    pub region: Option<String>,

    /// Named profile from the shared AWS config files
    #[arg(long, env = "AWS_PROFILE")]
    pub profile: Option<String>,
}

impl Cli {
    pub fn invocation(&self) -> Invocation {
        Invocation {
            secret_id: self.secret_id.clone(),
            restore_first: self.restore_first,
            verbose: self.verbose,
        }
    }
}
