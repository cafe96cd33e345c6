//! Merge fetched parameter values into a directive list

use ssmenv_core::{Directive, ResolvedParameters};
use tracing::debug;

/// Return a copy of `directives` with every deferred value looked up in
/// `resolved` by exact path. Paths missing from `resolved` leave the value
/// unset; comments and plain values are copied unchanged.
pub fn enrich(directives: &[Directive], resolved: &ResolvedParameters) -> Vec<Directive> {
    let enriched: Vec<Directive> = directives
        .iter()
        .map(|directive| match directive {
            Directive::Deferred {
                name,
                path,
                inline_comment,
                ..
            } => Directive::Deferred {
                name: name.clone(),
                path: path.clone(),
                value: resolved.get(path).map(str::to_owned),
                inline_comment: inline_comment.clone(),
            },
            other => other.clone(),
        })
        .collect();

    debug!(
        "Enriched {} directives using {} fetched parameters",
        enriched.len(),
        resolved.len()
    );

    enriched
}
