//! Parameter Store path extraction

use ssmenv_core::Directive;

/// Paths of every deferred directive, in template order.
///
/// Duplicates are kept: two variables may point at the same parameter and
/// each is matched against the fetch result independently.
pub fn collect_paths(directives: &[Directive]) -> Vec<String> {
    directives
        .iter()
        .filter_map(Directive::deferred_path)
        .map(str::to_owned)
        .collect()
}

/// Paths of deferred directives that still have no value
pub fn unresolved_paths(directives: &[Directive]) -> Vec<&str> {
    directives
        .iter()
        .filter(|directive| directive.is_unresolved())
        .filter_map(Directive::deferred_path)
        .collect()
}
