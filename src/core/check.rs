//! One-shot check orchestration
//!
//! validate → resolve endpoint → build client → evaluate. Any error ends the
//! invocation with a CRITICAL verdict.

use tracing::{info, warn};

use crate::config::Config;
use crate::core::consul::ConsulClient;
use crate::core::health::{Verdict, evaluate};
use crate::core::traits::HealthQueryClient;
use crate::utils::error::Result;

/// Run the check against the configured Consul server
pub async fn run(config: &Config) -> Verdict {
    into_verdict(try_run(config).await)
}

/// Run the check with an already constructed client
pub async fn run_with_client<C>(config: &Config, client: &C) -> Verdict
where
    C: HealthQueryClient + ?Sized,
{
    let result = match config.validate() {
        Ok(()) => evaluate(&config.target, client).await,
        Err(e) => Err(e),
    };
    into_verdict(result)
}

async fn try_run(config: &Config) -> Result<Verdict> {
    config.validate()?;
    let endpoint = config.endpoint()?;
    let client = ConsulClient::new(&endpoint, &config.connection)?;
    evaluate(&config.target, &client).await
}

fn into_verdict(result: Result<Verdict>) -> Verdict {
    match result {
        Ok(verdict) => {
            info!(severity = %verdict.severity, "check completed");
            verdict
        }
        Err(e) => {
            warn!(error = %e, "check failed");
            Verdict::from_error(&e)
        }
    }
}
