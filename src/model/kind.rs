//! Closed registry of supported dataset kinds

use super::entities;
use super::types::EntityShape;
use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// A supported GitHub repository collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EntityKind {
    Branch,
    Collaborator,
    Comment,
    Commit,
    Content,
    DeployKey,
    Deployment,
    Fork,
    Invitation,
    Page,
    Release,
    TrafficReferrer,
    Webhook,
}

impl EntityKind {
    /// Every kind, in registry order
    pub const ALL: [EntityKind; 13] = [
        EntityKind::Branch,
        EntityKind::Collaborator,
        EntityKind::Comment,
        EntityKind::Commit,
        EntityKind::Content,
        EntityKind::DeployKey,
        EntityKind::Deployment,
        EntityKind::Fork,
        EntityKind::Invitation,
        EntityKind::Page,
        EntityKind::Release,
        EntityKind::TrafficReferrer,
        EntityKind::Webhook,
    ];

    /// Dataset label as entered by users
    pub fn label(self) -> &'static str {
        match self {
            EntityKind::Branch => "Branches",
            EntityKind::Collaborator => "Collaborators",
            EntityKind::Comment => "Comments",
            EntityKind::Commit => "Commits",
            EntityKind::Content => "Contents",
            EntityKind::DeployKey => "Deploy Keys",
            EntityKind::Deployment => "Deployments",
            EntityKind::Fork => "Forks",
            EntityKind::Invitation => "Invitations",
            EntityKind::Page => "Pages",
            EntityKind::Release => "Releases",
            EntityKind::TrafficReferrer => "Traffic:Referrers",
            EntityKind::Webhook => "Webhooks",
        }
    }

    /// Resolve a dataset label. Matching is exact and case-sensitive.
    pub fn from_label(label: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.label() == label)
            .ok_or_else(|| Error::unknown_dataset(label))
    }

    /// Descriptor table of this kind
    pub fn shape(self) -> &'static EntityShape {
        match self {
            EntityKind::Branch => &entities::BRANCH,
            EntityKind::Collaborator => &entities::COLLABORATOR,
            EntityKind::Comment => &entities::COMMENT,
            EntityKind::Commit => &entities::COMMIT,
            EntityKind::Content => &entities::CONTENT,
            EntityKind::DeployKey => &entities::DEPLOY_KEY,
            EntityKind::Deployment => &entities::DEPLOYMENT,
            EntityKind::Fork => &entities::FORK,
            EntityKind::Invitation => &entities::INVITATION,
            EntityKind::Page => &entities::PAGE,
            EntityKind::Release => &entities::RELEASE,
            EntityKind::TrafficReferrer => &entities::TRAFFIC_REFERRER,
            EntityKind::Webhook => &entities::WEBHOOK,
        }
    }

    /// Path below `/repos/{owner}/{repo}/` serving this collection
    pub fn resource_path(self) -> &'static str {
        match self {
            EntityKind::Branch => "branches",
            EntityKind::Collaborator => "collaborators",
            EntityKind::Comment => "comments",
            EntityKind::Commit => "commits",
            EntityKind::Content => "contents",
            EntityKind::DeployKey => "keys",
            EntityKind::Deployment => "deployments",
            EntityKind::Fork => "forks",
            EntityKind::Invitation => "invitations",
            EntityKind::Page => "pages/builds",
            EntityKind::Release => "releases",
            EntityKind::TrafficReferrer => "traffic/popular/referrers",
            EntityKind::Webhook => "hooks",
        }
    }

    /// All valid dataset labels
    pub fn labels() -> impl Iterator<Item = &'static str> {
        Self::ALL.into_iter().map(EntityKind::label)
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for EntityKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_label(s)
    }
}
