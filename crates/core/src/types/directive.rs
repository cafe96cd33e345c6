//! Typed representation of environment template lines

/// Where a comment directive came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentOrigin {
    /// A line that was written as a `#` comment
    Source,
    /// A line without `=` that could not be read as an assignment
    Unparsed,
}

/// One classified unit derived from a single non-blank template line.
///
/// A template is represented as an ordered `Vec<Directive>` so that comments,
/// line order and repeated names survive the round trip to the output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    /// A comment or an unparsable passthrough line
    Comment { text: String, origin: CommentOrigin },

    /// A plain `NAME=value` assignment; `value` is `None` when the right-hand
    /// side was empty
    Value {
        name: String,
        value: Option<String>,
        inline_comment: Option<String>,
    },

    /// A `NAME=ssm:<path>` assignment whose value must be fetched. `path` is
    /// never empty and `value` stays `None` until the parameter is resolved.
    Deferred {
        name: String,
        path: String,
        value: Option<String>,
        inline_comment: Option<String>,
    },
}

impl Directive {
    /// A comment line, kept as written
    #[must_use]
    pub fn comment(text: impl Into<String>) -> Self {
        Directive::Comment {
            text: text.into(),
            origin: CommentOrigin::Source,
        }
    }

    /// A line that could not be parsed as an assignment
    #[must_use]
    pub fn unparsed(text: impl Into<String>) -> Self {
        Directive::Comment {
            text: text.into(),
            origin: CommentOrigin::Unparsed,
        }
    }

    /// An assignment with a literal value
    #[must_use]
    pub fn value(name: impl Into<String>, value: impl Into<String>) -> Self {
        Directive::Value {
            name: name.into(),
            value: Some(value.into()),
            inline_comment: None,
        }
    }

    /// An assignment with an empty right-hand side
    #[must_use]
    pub fn empty(name: impl Into<String>) -> Self {
        Directive::Value {
            name: name.into(),
            value: None,
            inline_comment: None,
        }
    }

    /// An unresolved Parameter Store reference
    #[must_use]
    pub fn deferred(name: impl Into<String>, path: impl Into<String>) -> Self {
        Directive::Deferred {
            name: name.into(),
            path: path.into(),
            value: None,
            inline_comment: None,
        }
    }

    /// Attach a trailing comment to an assignment. Comments are returned unchanged.
    #[must_use]
    pub fn with_inline_comment(self, comment: impl Into<String>) -> Self {
        match self {
            Directive::Value { name, value, .. } => Directive::Value {
                name,
                value,
                inline_comment: Some(comment.into()),
            },
            Directive::Deferred {
                name, path, value, ..
            } => Directive::Deferred {
                name,
                path,
                value,
                inline_comment: Some(comment.into()),
            },
            comment_line @ Directive::Comment { .. } => comment_line,
        }
    }

    /// Variable name for assignments, `None` for comments
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            Directive::Value { name, .. } | Directive::Deferred { name, .. } => Some(name),
            Directive::Comment { .. } => None,
        }
    }

    /// Parameter Store path for deferred directives
    #[must_use]
    pub fn deferred_path(&self) -> Option<&str> {
        match self {
            Directive::Deferred { path, .. } => Some(path),
            _ => None,
        }
    }

    /// True for a deferred directive that has not received a value
    #[must_use]
    pub fn is_unresolved(&self) -> bool {
        matches!(self, Directive::Deferred { value: None, .. })
    }
}
