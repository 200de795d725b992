pub mod delete;
pub mod restore;

use crate::client::SecretsClient;
use crate::report::Reporter;
use anyhow::Result;

/// What a single run of the program was asked to do
#[derive(Debug, Clone)]
pub struct Invocation {
    pub secret_id: String,
    pub restore_first: bool,
    pub verbose: bool,
}

/// Optionally restore the secret, then force delete it.
pub async fn run<C, R>(client: &C, reporter: &mut R, invocation: &Invocation) -> Result<()>
where
    C: SecretsClient + ?Sized,
    R: Reporter,
{
    if invocation.restore_first {
        // The restore outcome is ignored: the delete always follows.
        let _ = restore::run(client, reporter, invocation).await;
    }

    delete::run(client, reporter, invocation).await
}
