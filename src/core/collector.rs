use crate::core::normalize::normalize_domain;
use crate::domain::model::{CollectionResult, ShortageWarning, Stratum, StratumSample};
use std::collections::HashSet;

/// Normalizes and deduplicates `raw`, keeping the first occurrence of each
/// canonical domain in input order. Empty results are dropped.
pub fn unique_keep_order<I, S>(raw: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    let mut out = Vec::new();

    for entry in raw {
        let domain = normalize_domain(entry.as_ref());
        if domain.is_empty() || seen.contains(&domain) {
            continue;
        }
        seen.insert(domain.clone());
        out.push(domain);
    }

    out
}

/// Collects one stratum: unique canonical domains truncated to `limit`.
///
/// `limit` doubles as the shortage threshold; a shortfall is reported but the
/// available domains are still returned in full.
pub fn collect_stratum(
    stratum: &Stratum,
    limit: usize,
    allow_short: bool,
) -> (StratumSample, Option<ShortageWarning>) {
    let mut domains = unique_keep_order(&stratum.domains);
    let unique_count = domains.len();

    let warning = (unique_count < limit).then(|| ShortageWarning {
        stratum: stratum.name.clone(),
        found: unique_count,
        required: limit,
        allow_short,
    });

    domains.truncate(limit);

    (
        StratumSample {
            name: stratum.name.clone(),
            domains,
            unique_count,
        },
        warning,
    )
}

/// Runs `collect_stratum` over every stratum, preserving configured order.
pub fn collect_strata(strata: &[Stratum], limit: usize, allow_short: bool) -> CollectionResult {
    let mut result = CollectionResult::default();

    for stratum in strata {
        let (sample, warning) = collect_stratum(stratum, limit, allow_short);
        tracing::debug!(
            "Stratum {}: {} raw, {} unique, {} kept",
            sample.name,
            stratum.domains.len(),
            sample.unique_count,
            sample.domains.len()
        );
        if let Some(warning) = warning {
            result.warnings.push(warning);
        }
        result.samples.push(sample);
    }

    result
}
