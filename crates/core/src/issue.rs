// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Issue records consumed by the analysis engine.
//!
//! Issues arrive from an external store (usually a JSON Lines export), so
//! deserialization is lenient: unknown statuses fold into `open`, unknown
//! dependency types fold into `related`, and missing collections default to
//! empty.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Workflow status of an issue.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub enum Status {
    /// Not yet started.
    #[default]
    Open,
    /// Currently being worked on.
    InProgress,
    /// Waiting on something else.
    Blocked,
    /// Finished or abandoned.
    Closed,
}

impl Status {
    /// Returns the string representation used in storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Open => "open",
            Status::InProgress => "in_progress",
            Status::Blocked => "blocked",
            Status::Closed => "closed",
        }
    }

    /// Maps any status string onto the closed set.
    ///
    /// Anything unrecognized lands in the open bucket. `todo` and `done` are
    /// accepted so `wok` exports load without conversion.
    pub fn from_lenient(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }

    /// Returns true for the closed status.
    pub fn is_closed(&self) -> bool {
        matches!(self, Status::Closed)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Status {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "open" | "todo" => Ok(Status::Open),
            "in_progress" | "in-progress" => Ok(Status::InProgress),
            "blocked" => Ok(Status::Blocked),
            "closed" | "done" => Ok(Status::Closed),
            _ => Err(Error::InvalidStatus(s.to_string())),
        }
    }
}

impl<'de> Deserialize<'de> for Status {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(Status::from_lenient(&raw))
    }
}

/// Kind of relationship a dependency expresses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub enum DependencyType {
    /// The depends-on issue must finish before this one can.
    Blocks,
    /// Informational link.
    #[default]
    Related,
    /// Hierarchical grouping.
    ParentChild,
    /// Found while working on the depends-on issue.
    DiscoveredFrom,
}

impl DependencyType {
    /// Returns the string representation used in storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            DependencyType::Blocks => "blocks",
            DependencyType::Related => "related",
            DependencyType::ParentChild => "parent-child",
            DependencyType::DiscoveredFrom => "discovered-from",
        }
    }

    /// Unknown relation names become `related`, which never blocks.
    pub fn from_lenient(s: &str) -> Self {
        s.parse().unwrap_or(DependencyType::Related)
    }
}

impl fmt::Display for DependencyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DependencyType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "blocks" => Ok(DependencyType::Blocks),
            "related" => Ok(DependencyType::Related),
            "parent-child" | "parent_child" => Ok(DependencyType::ParentChild),
            "discovered-from" | "discovered_from" => Ok(DependencyType::DiscoveredFrom),
            _ => Err(Error::InvalidDependencyType(s.to_string())),
        }
    }
}

impl<'de> Deserialize<'de> for DependencyType {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(DependencyType::from_lenient(&raw))
    }
}

/// An outgoing dependency edge: this issue depends on `depends_on_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dependency {
    /// The issue this one depends on.
    pub depends_on_id: String,
    /// The kind of relationship.
    #[serde(rename = "type", default)]
    pub dep_type: DependencyType,
}

impl Dependency {
    /// A `blocks` dependency on the given issue.
    pub fn blocks(depends_on_id: impl Into<String>) -> Self {
        Dependency {
            depends_on_id: depends_on_id.into(),
            dep_type: DependencyType::Blocks,
        }
    }

    /// Returns true when this edge is a blocking one.
    pub fn is_blocking(&self) -> bool {
        self.dep_type == DependencyType::Blocks
    }
}

fn default_issue_type() -> String {
    "task".to_string()
}

/// A tracked work item as seen by the analysis engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    /// Unique identifier.
    pub id: String,
    /// Short description of the work.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Current workflow state.
    #[serde(default)]
    pub status: Status,
    /// Priority level (lower is more urgent by convention).
    #[serde(default)]
    pub priority: i32,
    /// Free-form classification (task, bug, feature, ...).
    #[serde(default = "default_issue_type")]
    pub issue_type: String,
    /// Labels in stored order. Duplicates are kept as-is.
    #[serde(default)]
    pub labels: Vec<String>,
    /// When the issue was created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// When the issue was last modified.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    /// When the issue was closed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub closed_at: Option<DateTime<Utc>>,
    /// Outgoing dependency edges in stored order.
    #[serde(default)]
    pub dependencies: Vec<Dependency>,
}

impl Issue {
    /// Creates an open, unlabeled issue with no timestamps.
    pub fn new(id: impl Into<String>) -> Self {
        Issue {
            id: id.into(),
            title: None,
            status: Status::Open,
            priority: 0,
            issue_type: default_issue_type(),
            labels: Vec::new(),
            created_at: None,
            updated_at: None,
            closed_at: None,
            dependencies: Vec::new(),
        }
    }

    /// Sets the status (builder pattern).
    pub fn with_status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }

    /// Sets the labels (builder pattern).
    pub fn with_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels = labels.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the priority (builder pattern).
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the issue type (builder pattern).
    pub fn with_type(mut self, issue_type: impl Into<String>) -> Self {
        self.issue_type = issue_type.into();
        self
    }

    /// Sets the creation time (builder pattern).
    pub fn created(mut self, at: DateTime<Utc>) -> Self {
        self.created_at = Some(at);
        self
    }

    /// Sets the last update time (builder pattern).
    pub fn updated(mut self, at: DateTime<Utc>) -> Self {
        self.updated_at = Some(at);
        self
    }

    /// Marks the issue closed at the given time (builder pattern).
    pub fn closed(mut self, at: DateTime<Utc>) -> Self {
        self.status = Status::Closed;
        self.closed_at = Some(at);
        self
    }

    /// Adds a `blocks` dependency on another issue (builder pattern).
    pub fn blocked_by(mut self, blocker_id: impl Into<String>) -> Self {
        self.dependencies.push(Dependency::blocks(blocker_id));
        self
    }

    /// Adds an arbitrary dependency (builder pattern).
    pub fn with_dependency(mut self, dep: Dependency) -> Self {
        self.dependencies.push(dep);
        self
    }

    /// Returns true if any of the issue's labels equals `label`.
    pub fn has_label(&self, label: &str) -> bool {
        self.labels.iter().any(|l| l == label)
    }

    /// Returns true if the issue is closed.
    pub fn is_closed(&self) -> bool {
        self.status.is_closed()
    }

    /// IDs of the issues this one is blocked by, in stored order.
    pub fn blocker_ids(&self) -> impl Iterator<Item = &str> {
        self.dependencies
            .iter()
            .filter(|d| d.is_blocking())
            .map(|d| d.depends_on_id.as_str())
    }
}

#[cfg(test)]
#[path = "issue_tests.rs"]
mod tests;
