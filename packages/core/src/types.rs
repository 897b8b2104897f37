// ABOUTME: Domain type definitions shared across Folio packages
// ABOUTME: Repository descriptors, summaries, project cards, feedback and retrospectives

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::SUMMARY_FAILED;

/// Repository metadata as returned by the hosting API listing.
///
/// Only the fields Folio reads are kept; everything else in the GitHub payload
/// is ignored during deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryDescriptor {
    pub name: String,
    /// `owner/name`, the repository identity used as cache key
    pub full_name: String,
    pub description: Option<String>,
    pub html_url: String,
}

impl RepositoryDescriptor {
    /// Whether the description contains the portfolio marker
    pub fn has_marker(&self, marker: &str) -> bool {
        self.description
            .as_deref()
            .is_some_and(|description| description.contains(marker))
    }
}

/// Structured summary of a README as produced by the generation service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadmeSummary {
    pub text: String,
    pub deployed_url: Option<String>,
    pub tech_stack: Vec<String>,
}

impl ReadmeSummary {
    /// Fallback used when the generation reply cannot be parsed
    pub fn degraded() -> Self {
        Self {
            text: SUMMARY_FAILED.to_string(),
            deployed_url: None,
            tech_stack: Vec::new(),
        }
    }

    pub fn is_degraded(&self) -> bool {
        *self == Self::degraded()
    }
}

/// Card-ready record for one portfolio project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectCard {
    /// Repository `full_name`; feedback and retrospectives are keyed by it
    pub project_id: String,
    pub name: String,
    pub summary: String,
    pub technologies: Vec<String>,
    pub deployed_url: Option<String>,
    pub github_url: String,
}

impl ProjectCard {
    pub fn from_summary(repo: &RepositoryDescriptor, summary: ReadmeSummary) -> Self {
        Self {
            project_id: repo.full_name.clone(),
            name: repo.name.clone(),
            summary: summary.text,
            technologies: summary.tech_stack,
            deployed_url: summary.deployed_url,
            github_url: repo.html_url.clone(),
        }
    }
}

/// Visitor feedback on a project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    pub id: String,
    pub project_id: String,
    pub author: String,
    pub email: String,
    pub comment: String,
    pub approved: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackCreateInput {
    pub author: String,
    pub email: String,
    pub comment: String,
}

/// Approval-state filter for the moderation queue
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackFilter {
    All,
    #[default]
    Pending,
    Approved,
}

impl FeedbackFilter {
    /// Value the `approved` column must have, or `None` for no constraint
    pub fn approved(&self) -> Option<bool> {
        match self {
            FeedbackFilter::All => None,
            FeedbackFilter::Pending => Some(false),
            FeedbackFilter::Approved => Some(true),
        }
    }
}

impl FromStr for FeedbackFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(FeedbackFilter::All),
            "pending" => Ok(FeedbackFilter::Pending),
            "approved" => Ok(FeedbackFilter::Approved),
            other => Err(format!("Unknown feedback filter: {}", other)),
        }
    }
}

impl fmt::Display for FeedbackFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FeedbackFilter::All => "all",
            FeedbackFilter::Pending => "pending",
            FeedbackFilter::Approved => "approved",
        };
        f.write_str(s)
    }
}

/// Admin-curated retrospective text, one per project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Retrospective {
    pub project_id: String,
    pub project_name: Option<String>,
    pub retrospective: String,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RetrospectiveUpsertInput {
    pub project_name: Option<String>,
    pub retrospective: String,
}
