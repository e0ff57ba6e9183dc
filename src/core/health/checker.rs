//! Health evaluator
//!
//! Issues at most one registry query for a target and reduces the returned
//! check records to a verdict.

use tracing::{debug, trace};

use super::query::QueryMode;
use super::types::{CheckStatus, Diagnostic, HealthCheckRecord, Severity, Verdict};
use crate::config::TargetSpec;
use crate::core::traits::HealthQueryClient;
use crate::utils::error::{CheckError, Result};

/// Message when every evaluated check passes
pub const ALL_PASSING_MESSAGE: &str = "all checks are passing";
/// Message when the query returned no records
pub const NOT_FOUND_MESSAGE: &str = "no checks found for provided arguments";

/// Counters gathered in the aggregation pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CheckTally {
    /// The query returned at least one record, excluded or not
    pub found: bool,
    pub warnings: usize,
    pub criticals: usize,
    pub excluded: usize,
}

/// Select the query for `spec`, run it once and aggregate the result
pub async fn evaluate<C>(spec: &TargetSpec, client: &C) -> Result<Verdict>
where
    C: HealthQueryClient + ?Sized,
{
    let mode = QueryMode::select(spec);
    let records = fetch(mode, client).await?;
    debug!(query = %mode, records = records.len(), "retrieved health checks");
    Ok(aggregate(&records, spec))
}

/// Run the registry call matching `mode`. No retries.
pub async fn fetch<C>(mode: QueryMode<'_>, client: &C) -> Result<Vec<HealthCheckRecord>>
where
    C: HealthQueryClient + ?Sized,
{
    let result = match mode {
        QueryMode::ServiceWithTags { service, tags } => {
            client.service_checks_with_tags(service, tags).await
        }
        QueryMode::Node(node) => client.node_checks(node).await,
        QueryMode::All => client.all_checks().await,
        QueryMode::Service(service) => client.service_checks(service).await,
        QueryMode::NoQuery => {
            debug!("no node, service or --all given; skipping query");
            return Ok(Vec::new());
        }
    };

    result.map_err(|source| CheckError::retrieval(mode, source))
}

/// Reduce `records` to a verdict
///
/// The severity does not depend on record order; diagnostics follow it.
pub fn aggregate(records: &[HealthCheckRecord], spec: &TargetSpec) -> Verdict {
    let mut tally = CheckTally::default();
    let mut diagnostics = Vec::new();

    for record in records {
        tally.found = true;

        if spec.is_excluded(&record.service_name) {
            trace!(check = %record.check_id, service = %record.service_name, "excluded");
            tally.excluded += 1;
            continue;
        }

        match record.status {
            CheckStatus::Passing | CheckStatus::Other => continue,
            CheckStatus::Warning => tally.warnings += 1,
            CheckStatus::Critical | CheckStatus::Unknown => tally.criticals += 1,
        }
        diagnostics.push(Diagnostic::for_record(record));
    }

    debug!(
        found = tally.found,
        warnings = tally.warnings,
        criticals = tally.criticals,
        excluded = tally.excluded,
        "aggregated health checks"
    );

    resolve(tally, diagnostics, spec.fail_if_not_found)
}

fn resolve(tally: CheckTally, diagnostics: Vec<Diagnostic>, fail_if_not_found: bool) -> Verdict {
    if !tally.found && fail_if_not_found {
        return Verdict::with_message(Severity::Critical, NOT_FOUND_MESSAGE);
    }
    if tally.criticals > 0 {
        return Verdict::new(Severity::Critical, diagnostics);
    }
    if tally.warnings > 0 {
        return Verdict::new(Severity::Warning, diagnostics);
    }
    if tally.found {
        Verdict::with_message(Severity::Ok, ALL_PASSING_MESSAGE)
    } else {
        Verdict::with_message(Severity::Ok, NOT_FOUND_MESSAGE)
    }
}
