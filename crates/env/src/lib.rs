//! Environment template processing for ssmenv
//!
//! This crate turns the text of an environment template into an ordered list
//! of [`Directive`]s, fills in values fetched from Parameter Store, and
//! renders the result back to text. Every function here is pure: no file,
//! network or process-environment access.
//!
//! ```
//! use ssmenv_core::ResolvedParameters;
//!
//! let directives = ssmenv_env::parse("# db\nDB_PASSWORD=ssm:/app/db/password\n");
//! assert_eq!(ssmenv_env::collect_paths(&directives), vec!["/app/db/password"]);
//!
//! let resolved: ResolvedParameters = [("/app/db/password", "hunter2")].into_iter().collect();
//! let enriched = ssmenv_env::enrich(&directives, &resolved);
//! assert_eq!(ssmenv_env::format(&enriched), "# db\nDB_PASSWORD=hunter2\n");
//! ```
//!
//! [`Directive`]: ssmenv_core::Directive

pub mod enrich;
pub mod format;
pub mod parser;
pub mod paths;

pub use enrich::enrich;
pub use format::{format, format_directive};
pub use parser::{parse, parse_line};
pub use paths::{collect_paths, unresolved_paths};
