//! Query target validators
//!
//! Runs before any network access.

use super::trait_def::Validate;
use crate::config::models::TargetSpec;
use tracing::{debug, warn};

/// Rejection message for `--tags` combined with `--all`
pub const TAGS_ALL_EXCLUSIVE: &str = "--tags and --all are mutually exclusive";

impl Validate for TargetSpec {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating query target");

        if self.has_tags() && self.all {
            return Err(TAGS_ALL_EXCLUSIVE.to_string());
        }

        if self.has_tags() && self.service().is_none() {
            warn!("--tags has no effect without --service");
        }

        Ok(())
    }
}
