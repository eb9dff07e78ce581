//! Static shapes of the supported GitHub resources
//!
//! Field layouts follow the GitHub REST v3 payloads. Nested shapes that
//! appear in several resources (`USER`, `PERMISSIONS`, ...) are declared
//! once and referenced.

use super::types::{Attribute, EntityShape, ScalarKind};

// ============================================================================
// Shared shapes
// ============================================================================

pub static USER: EntityShape = EntityShape {
    name: "User",
    attributes: &[
        Attribute::string("login"),
        Attribute::integer("id"),
        Attribute::string("nodeId").remote("node_id"),
        Attribute::string("avatarUrl").remote("avatar_url"),
        Attribute::string("gravatarId").remote("gravatar_id"),
        Attribute::string("url"),
        Attribute::string("htmlUrl").remote("html_url"),
        Attribute::string("followersUrl").remote("followers_url"),
        Attribute::string("followingUrl").remote("following_url"),
        Attribute::string("gistsUrl").remote("gists_url"),
        Attribute::string("starredUrl").remote("starred_url"),
        Attribute::string("subscriptionsUrl").remote("subscriptions_url"),
        Attribute::string("organizationsUrl").remote("organizations_url"),
        Attribute::string("reposUrl").remote("repos_url"),
        Attribute::string("eventsUrl").remote("events_url"),
        Attribute::string("receivedEventsUrl").remote("received_events_url"),
        Attribute::string("type"),
        Attribute::boolean("siteAdmin").remote("site_admin"),
    ],
    base: None,
};

pub static PERMISSIONS: EntityShape = EntityShape {
    name: "Permissions",
    attributes: &[
        Attribute::boolean("pull"),
        Attribute::boolean("triage"),
        Attribute::boolean("push"),
        Attribute::boolean("maintain"),
        Attribute::boolean("admin"),
    ],
    base: None,
};

pub static REPOSITORY_SUMMARY: EntityShape = EntityShape {
    name: "RepositorySummary",
    attributes: &[
        Attribute::integer("id"),
        Attribute::string("nodeId").remote("node_id"),
        Attribute::string("name"),
        Attribute::string("fullName").remote("full_name"),
        Attribute::object("owner", &USER),
        Attribute::boolean("private"),
        Attribute::string("htmlUrl").remote("html_url"),
        Attribute::string("description"),
        Attribute::boolean("fork"),
        Attribute::string("url"),
    ],
    base: None,
};

pub static LICENSE: EntityShape = EntityShape {
    name: "License",
    attributes: &[
        Attribute::string("key"),
        Attribute::string("name"),
        Attribute::string("spdxId").remote("spdx_id"),
        Attribute::string("url"),
        Attribute::string("nodeId").remote("node_id"),
    ],
    base: None,
};

// ============================================================================
// Branches
// ============================================================================

pub static BRANCH_COMMIT: EntityShape = EntityShape {
    name: "BranchCommit",
    attributes: &[Attribute::string("sha"), Attribute::string("url")],
    base: None,
};

pub static REQUIRED_STATUS_CHECKS: EntityShape = EntityShape {
    name: "RequiredStatusChecks",
    attributes: &[
        Attribute::string("enforcementLevel").remote("enforcement_level"),
        Attribute::list_of_scalar("contexts", ScalarKind::String),
    ],
    base: None,
};

pub static BRANCH_PROTECTION: EntityShape = EntityShape {
    name: "BranchProtection",
    attributes: &[
        Attribute::boolean("enabled"),
        Attribute::object("requiredStatusChecks", &REQUIRED_STATUS_CHECKS)
            .remote("required_status_checks"),
    ],
    base: None,
};

pub static BRANCH: EntityShape = EntityShape {
    name: "Branch",
    attributes: &[
        Attribute::string("name"),
        Attribute::object("commit", &BRANCH_COMMIT),
        Attribute::boolean("protected"),
        Attribute::object("protection", &BRANCH_PROTECTION),
        Attribute::string("protectionUrl").remote("protection_url"),
    ],
    base: None,
};

// ============================================================================
// Collaborators
// ============================================================================

pub static COLLABORATOR: EntityShape = EntityShape {
    name: "Collaborator",
    attributes: &[
        Attribute::object("permissions", &PERMISSIONS),
        Attribute::string("roleName").remote("role_name"),
    ],
    base: Some(&USER),
};

// ============================================================================
// Comments
// ============================================================================

pub static COMMENT: EntityShape = EntityShape {
    name: "Comment",
    attributes: &[
        Attribute::string("htmlUrl").remote("html_url"),
        Attribute::string("url"),
        Attribute::integer("id"),
        Attribute::string("nodeId").remote("node_id"),
        Attribute::string("body"),
        Attribute::string("path"),
        Attribute::integer("position"),
        Attribute::integer("line"),
        Attribute::string("commitId").remote("commit_id"),
        Attribute::object("user", &USER),
        Attribute::string("createdAt").remote("created_at"),
        Attribute::string("updatedAt").remote("updated_at"),
    ],
    base: None,
};

// ============================================================================
// Commits
// ============================================================================

pub static COMMIT_USER: EntityShape = EntityShape {
    name: "CommitUser",
    attributes: &[
        Attribute::string("name"),
        Attribute::string("email"),
        Attribute::string("date"),
    ],
    base: None,
};

pub static COMMIT_TREE: EntityShape = EntityShape {
    name: "CommitTree",
    attributes: &[Attribute::string("url"), Attribute::string("sha")],
    base: None,
};

pub static COMMIT_VERIFICATION: EntityShape = EntityShape {
    name: "CommitVerification",
    attributes: &[
        Attribute::boolean("verified"),
        Attribute::string("reason"),
        Attribute::string("signature"),
        Attribute::string("payload"),
    ],
    base: None,
};

pub static COMMIT_DATA: EntityShape = EntityShape {
    name: "CommitData",
    attributes: &[
        Attribute::string("url"),
        Attribute::object("author", &COMMIT_USER),
        Attribute::object("committer", &COMMIT_USER),
        Attribute::string("message"),
        Attribute::object("tree", &COMMIT_TREE),
        Attribute::integer("commentCount").remote("comment_count"),
        Attribute::object("verification", &COMMIT_VERIFICATION),
    ],
    base: None,
};

pub static COMMIT: EntityShape = EntityShape {
    name: "Commit",
    attributes: &[
        Attribute::string("url"),
        Attribute::string("sha"),
        Attribute::string("nodeId").remote("node_id"),
        Attribute::string("htmlUrl").remote("html_url"),
        Attribute::string("commentsUrl").remote("comments_url"),
        Attribute::object("commit", &COMMIT_DATA),
        Attribute::object("mainAuthor", &USER).remote("author"),
        Attribute::object("mainCommitter", &USER).remote("committer"),
        Attribute::list_of("parents", &COMMIT_TREE),
    ],
    base: None,
};

// ============================================================================
// Contents
// ============================================================================

pub static CONTENT_LINKS: EntityShape = EntityShape {
    name: "ContentLinks",
    attributes: &[
        Attribute::string("git"),
        Attribute::string("self"),
        Attribute::string("html"),
    ],
    base: None,
};

pub static CONTENT: EntityShape = EntityShape {
    name: "Content",
    attributes: &[
        Attribute::string("type"),
        Attribute::string("encoding"),
        Attribute::integer("size"),
        Attribute::string("name"),
        Attribute::string("path"),
        Attribute::string("content"),
        Attribute::string("sha"),
        Attribute::string("url"),
        Attribute::string("gitUrl").remote("git_url"),
        Attribute::string("htmlUrl").remote("html_url"),
        Attribute::string("downloadUrl").remote("download_url"),
        Attribute::object("links", &CONTENT_LINKS).remote("_links"),
    ],
    base: None,
};

// ============================================================================
// Deploy keys
// ============================================================================

pub static DEPLOY_KEY: EntityShape = EntityShape {
    name: "DeployKey",
    attributes: &[
        Attribute::integer("id"),
        Attribute::string("key"),
        Attribute::string("url"),
        Attribute::string("title"),
        Attribute::boolean("verified"),
        Attribute::string("createdAt").remote("created_at"),
        Attribute::boolean("readOnly").remote("read_only"),
    ],
    base: None,
};

// ============================================================================
// Deployments
// ============================================================================

pub static DEPLOYMENT_PAYLOAD: EntityShape = EntityShape {
    name: "DeploymentPayload",
    attributes: &[Attribute::string("deploy")],
    base: None,
};

pub static DEPLOYMENT: EntityShape = EntityShape {
    name: "Deployment",
    attributes: &[
        Attribute::string("url"),
        Attribute::integer("id"),
        Attribute::string("nodeId").remote("node_id"),
        Attribute::string("sha"),
        Attribute::string("ref"),
        Attribute::string("task"),
        Attribute::object("payload", &DEPLOYMENT_PAYLOAD),
        Attribute::string("originalEnvironment").remote("original_environment"),
        Attribute::string("environment"),
        Attribute::string("description"),
        Attribute::object("creator", &USER),
        Attribute::string("createdAt").remote("created_at"),
        Attribute::string("updatedAt").remote("updated_at"),
        Attribute::string("statusesUrl").remote("statuses_url"),
        Attribute::string("repositoryUrl").remote("repository_url"),
        Attribute::boolean("transientEnvironment").remote("transient_environment"),
        Attribute::boolean("productionEnvironment").remote("production_environment"),
    ],
    base: None,
};

// ============================================================================
// Forks
// ============================================================================

pub static FORK: EntityShape = EntityShape {
    name: "Fork",
    attributes: &[
        Attribute::integer("id"),
        Attribute::string("nodeId").remote("node_id"),
        Attribute::string("name"),
        Attribute::string("fullName").remote("full_name"),
        Attribute::object("owner", &USER),
        Attribute::boolean("private"),
        Attribute::string("htmlUrl").remote("html_url"),
        Attribute::string("description"),
        Attribute::boolean("fork"),
        Attribute::string("url"),
        Attribute::string("homepage"),
        Attribute::string("language"),
        Attribute::integer("forksCount").remote("forks_count"),
        Attribute::integer("stargazersCount").remote("stargazers_count"),
        Attribute::integer("watchersCount").remote("watchers_count"),
        Attribute::integer("size"),
        Attribute::string("defaultBranch").remote("default_branch"),
        Attribute::integer("openIssuesCount").remote("open_issues_count"),
        Attribute::list_of_scalar("topics", ScalarKind::String),
        Attribute::boolean("hasIssues").remote("has_issues"),
        Attribute::boolean("hasProjects").remote("has_projects"),
        Attribute::boolean("hasWiki").remote("has_wiki"),
        Attribute::boolean("hasPages").remote("has_pages"),
        Attribute::boolean("hasDownloads").remote("has_downloads"),
        Attribute::boolean("archived"),
        Attribute::boolean("disabled"),
        Attribute::string("visibility"),
        Attribute::string("pushedAt").remote("pushed_at"),
        Attribute::string("createdAt").remote("created_at"),
        Attribute::string("updatedAt").remote("updated_at"),
        Attribute::object("permissions", &PERMISSIONS),
        Attribute::object("license", &LICENSE),
    ],
    base: None,
};

// ============================================================================
// Invitations
// ============================================================================

pub static INVITATION: EntityShape = EntityShape {
    name: "Invitation",
    attributes: &[
        Attribute::integer("id"),
        Attribute::string("nodeId").remote("node_id"),
        Attribute::object("repository", &REPOSITORY_SUMMARY),
        Attribute::object("invitee", &USER),
        Attribute::object("inviter", &USER),
        Attribute::string("permissions"),
        Attribute::string("createdAt").remote("created_at"),
        Attribute::boolean("expired"),
        Attribute::string("url"),
        Attribute::string("htmlUrl").remote("html_url"),
    ],
    base: None,
};

// ============================================================================
// Pages builds
// ============================================================================

pub static PAGE_ERROR: EntityShape = EntityShape {
    name: "PageError",
    attributes: &[Attribute::string("message")],
    base: None,
};

pub static PAGE: EntityShape = EntityShape {
    name: "Page",
    attributes: &[
        Attribute::string("url"),
        Attribute::string("status"),
        Attribute::object("error", &PAGE_ERROR),
        Attribute::object("pusher", &USER),
        Attribute::string("commit"),
        Attribute::integer("duration"),
        Attribute::string("createdAt").remote("created_at"),
        Attribute::string("updatedAt").remote("updated_at"),
    ],
    base: None,
};

// ============================================================================
// Releases
// ============================================================================

pub static RELEASE_ASSET: EntityShape = EntityShape {
    name: "ReleaseAsset",
    attributes: &[
        Attribute::string("url"),
        Attribute::string("browserDownloadUrl").remote("browser_download_url"),
        Attribute::integer("id"),
        Attribute::string("nodeId").remote("node_id"),
        Attribute::string("name"),
        Attribute::string("label"),
        Attribute::string("state"),
        Attribute::string("contentType").remote("content_type"),
        Attribute::integer("size"),
        Attribute::integer("downloadCount").remote("download_count"),
        Attribute::string("createdAt").remote("created_at"),
        Attribute::string("updatedAt").remote("updated_at"),
        Attribute::object("uploader", &USER),
    ],
    base: None,
};

pub static RELEASE: EntityShape = EntityShape {
    name: "Release",
    attributes: &[
        Attribute::string("url"),
        Attribute::string("htmlUrl").remote("html_url"),
        Attribute::string("assetsUrl").remote("assets_url"),
        Attribute::string("uploadUrl").remote("upload_url"),
        Attribute::string("tarballUrl").remote("tarball_url"),
        Attribute::string("zipballUrl").remote("zipball_url"),
        Attribute::integer("id"),
        Attribute::string("nodeId").remote("node_id"),
        Attribute::string("tagName").remote("tag_name"),
        Attribute::string("targetCommitish").remote("target_commitish"),
        Attribute::string("name"),
        Attribute::string("body"),
        Attribute::boolean("draft"),
        Attribute::boolean("prerelease"),
        Attribute::string("createdAt").remote("created_at"),
        Attribute::string("publishedAt").remote("published_at"),
        Attribute::object("author", &USER),
        Attribute::list_of("assets", &RELEASE_ASSET),
    ],
    base: None,
};

// ============================================================================
// Traffic referrers
// ============================================================================

pub static TRAFFIC_REFERRER: EntityShape = EntityShape {
    name: "TrafficReferrer",
    attributes: &[
        Attribute::string("referrer"),
        Attribute::integer("count"),
        Attribute::integer("uniques"),
    ],
    base: None,
};

// ============================================================================
// Webhooks
// ============================================================================

pub static WEBHOOK_CONFIG: EntityShape = EntityShape {
    name: "WebhookConfig",
    attributes: &[
        Attribute::string("contentType").remote("content_type"),
        Attribute::string("insecureSsl").remote("insecure_ssl"),
        Attribute::string("url"),
    ],
    base: None,
};

pub static WEBHOOK_LAST_RESPONSE: EntityShape = EntityShape {
    name: "WebhookLastResponse",
    attributes: &[
        Attribute::integer("code"),
        Attribute::string("status"),
        Attribute::string("message"),
    ],
    base: None,
};

pub static WEBHOOK: EntityShape = EntityShape {
    name: "Webhook",
    attributes: &[
        Attribute::string("type"),
        Attribute::integer("id"),
        Attribute::string("name"),
        Attribute::boolean("active"),
        Attribute::list_of_scalar("events", ScalarKind::String),
        Attribute::object("config", &WEBHOOK_CONFIG),
        Attribute::string("updatedAt").remote("updated_at"),
        Attribute::string("createdAt").remote("created_at"),
        Attribute::string("url"),
        Attribute::string("testUrl").remote("test_url"),
        Attribute::string("pingUrl").remote("ping_url"),
        Attribute::object("lastResponse", &WEBHOOK_LAST_RESPONSE).remote("last_response"),
    ],
    base: None,
};
