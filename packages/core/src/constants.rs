// ABOUTME: Shared constants: portfolio marker, fallback texts and field limits
// ABOUTME: Used by the pipeline, reply parser and input validation

/// Description substring that marks a repository as a portfolio project
pub const DEFAULT_PORTFOLIO_MARKER: &str = "#portfolio";

/// README body substituted when the README cannot be fetched
pub const README_NOT_FOUND: &str = "README not found.";

/// Summary text of the degraded record built from an unparseable reply
pub const SUMMARY_FAILED: &str = "Summary failed.";

/// Upper bounds for visitor-submitted feedback fields
pub const MAX_AUTHOR_LEN: usize = 100;
pub const MAX_EMAIL_LEN: usize = 254;
pub const MAX_COMMENT_LEN: usize = 5000;

/// Upper bound for admin-curated retrospective text
pub const MAX_RETROSPECTIVE_LEN: usize = 20_000;

/// Summary text used when the reply parses but its `text` is blank
pub const NO_SUMMARY_AVAILABLE: &str = "No summary available.";
