//! Line classifier for environment templates

use ssmenv_core::{Directive, SSM_PREFIX};
use tracing::{debug, trace};

/// Parse a whole template into directives, one per meaningful line, in
/// source order. Blank lines and assignments with an empty name are dropped.
pub fn parse(text: &str) -> Vec<Directive> {
    let directives: Vec<Directive> = text.lines().filter_map(parse_line).collect();

    debug!(
        "Parsed {} directives from {} bytes of template",
        directives.len(),
        text.len()
    );

    directives
}

/// Classify a single line. Returns `None` for lines that produce no directive.
pub fn parse_line(line: &str) -> Option<Directive> {
    let line = line.trim();

    if line.is_empty() {
        return None;
    }

    // Comment lines are kept whole, `#` included
    if line.starts_with('#') {
        return Some(Directive::comment(line));
    }

    let Some((key, rest)) = line.split_once('=') else {
        trace!("Keeping line without '=' as passthrough: {}", line);
        return Some(Directive::unparsed(line));
    };

    let name = key.trim();
    if name.is_empty() {
        trace!("Skipping assignment without a name: {}", line);
        return None;
    }

    let (raw_value, inline_comment) = split_inline_comment(rest.trim());

    // `ssm:` followed by nothing is an ordinary value
    if let Some(path) = raw_value.strip_prefix(SSM_PREFIX).map(str::trim) {
        if !path.is_empty() {
            return Some(Directive::Deferred {
                name: name.to_string(),
                path: path.to_string(),
                value: None,
                inline_comment,
            });
        }
    }

    Some(Directive::Value {
        name: name.to_string(),
        value: (!raw_value.is_empty()).then(|| raw_value.to_string()),
        inline_comment,
    })
}

/// Split `value # comment` on the first `#`. An empty comment counts as none.
fn split_inline_comment(rest: &str) -> (&str, Option<String>) {
    match rest.split_once('#') {
        Some((value, comment)) => {
            let comment = comment.trim();
            (
                value.trim(),
                (!comment.is_empty()).then(|| comment.to_string()),
            )
        }
        None => (rest, None),
    }
}
