//! Render directives back into environment file text

use ssmenv_core::{CommentOrigin, Directive, SSM_PREFIX};

/// Render all directives, one line each, with a trailing newline.
/// An empty list renders as an empty string.
pub fn format(directives: &[Directive]) -> String {
    if directives.is_empty() {
        return String::new();
    }

    let mut output = directives
        .iter()
        .map(format_directive)
        .collect::<Vec<_>>()
        .join("\n");
    output.push('\n');
    output
}

/// Render a single directive as one output line (without newline)
pub fn format_directive(directive: &Directive) -> String {
    match directive {
        Directive::Comment {
            text,
            origin: CommentOrigin::Source,
        } if text.starts_with('#') => text.clone(),
        Directive::Comment { text, .. } => format!("# {text}"),
        Directive::Value {
            name,
            value,
            inline_comment,
        } => append_comment(
            format!("{name}={}", value.as_deref().unwrap_or_default()),
            inline_comment.as_deref(),
        ),
        Directive::Deferred {
            name,
            value: Some(value),
            inline_comment,
            ..
        } => append_comment(format!("{name}={value}"), inline_comment.as_deref()),
        Directive::Deferred {
            name,
            path,
            value: None,
            inline_comment,
        } => {
            let not_found = format!("{SSM_PREFIX}{path} not found");
            append_comment(
                append_comment(format!("{name}="), Some(&not_found)),
                inline_comment.as_deref(),
            )
        }
    }
}

fn append_comment(line: String, comment: Option<&str>) -> String {
    match comment {
        Some(comment) => format!("{line} # {comment}"),
        None => line,
    }
}
