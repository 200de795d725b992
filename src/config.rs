use crate::error::{Error, Result};
use aws_config::{BehaviorVersion, Region, SdkConfig};

/// Resolve the AWS configuration, applying explicit overrides on top of the
/// default provider chain (env vars, shared config files, instance metadata).
pub async fn load(region: Option<String>, profile: Option<String>) -> Result<SdkConfig> {
    let mut loader = aws_config::defaults(BehaviorVersion::latest());

    if let Some(profile) = profile {
        loader = loader.profile_name(profile);
    }
    if let Some(region) = region {
        loader = loader.region(Region::new(region));
    }

    let config = loader.load().await;

    if config.region().is_none() {
        return Err(Error::ConfigLoad(
            "no AWS region could be resolved (set AWS_REGION, --region or a profile region)"
                .to_string(),
        ));
    }

    Ok(config)
}
