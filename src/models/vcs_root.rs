use serde::{Deserialize, Serialize};

use crate::error::{Result, TeamCityError};
use crate::models::project::ProjectReference;
use crate::properties::Properties;

/// Version control root resource. The `vcs_name` field selects the plugin
/// (`jetbrains.git` for git roots) and the typed settings live in the
/// property collection.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct VcsRoot {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub vcs_name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub href: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<ProjectReference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<Properties>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub uuid: String,
}

/// How a git root authenticates against its remote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GitAuthMethod {
    Anonymous,
    Password,
}

impl GitAuthMethod {
    fn as_str(self) -> &'static str {
        match self {
            GitAuthMethod::Anonymous => "ANONYMOUS",
            GitAuthMethod::Password => "PASSWORD",
        }
    }
}

/// Settings for a git root. The password lands in a secure property, so the
/// server accepts it on writes and never returns it.
#[derive(Debug, Clone)]
pub struct GitVcsRootOptions {
    pub fetch_url: String,
    pub push_url: Option<String>,
    pub default_branch: String,
    pub auth_method: GitAuthMethod,
    pub username: Option<String>,
    pub password: Option<String>,
}

impl GitVcsRootOptions {
    pub fn anonymous(fetch_url: &str, default_branch: &str) -> GitVcsRootOptions {
        GitVcsRootOptions {
            fetch_url: fetch_url.to_string(),
            push_url: None,
            default_branch: default_branch.to_string(),
            auth_method: GitAuthMethod::Anonymous,
            username: None,
            password: None,
        }
    }

    pub fn password(
        fetch_url: &str,
        default_branch: &str,
        username: &str,
        password: &str,
    ) -> GitVcsRootOptions {
        GitVcsRootOptions {
            fetch_url: fetch_url.to_string(),
            push_url: None,
            default_branch: default_branch.to_string(),
            auth_method: GitAuthMethod::Password,
            username: Some(username.to_string()),
            password: Some(password.to_string()),
        }
    }

    fn properties(&self) -> Properties {
        let mut properties = Properties::from_pairs([
            ("url", self.fetch_url.as_str()),
            ("branch", self.default_branch.as_str()),
            ("authMethod", self.auth_method.as_str()),
        ]);
        if let Some(push_url) = &self.push_url {
            properties.add_or_replace("push_url", push_url);
        }
        if let Some(username) = &self.username {
            properties.add_or_replace("username", username);
        }
        if let Some(password) = &self.password {
            properties.add_or_replace("secure:password", password);
        }
        properties
    }
}

impl VcsRoot {
    /// Git root ready to be created under an existing project.
    pub fn git(name: &str, project_id: &str, options: GitVcsRootOptions) -> Result<VcsRoot> {
        if name.is_empty() {
            return Err(TeamCityError::InvalidInput(
                "vcs root name is required".to_string(),
            ));
        }
        if project_id.is_empty() {
            return Err(TeamCityError::InvalidInput(
                "vcs root project id is required".to_string(),
            ));
        }
        if options.fetch_url.is_empty() {
            return Err(TeamCityError::InvalidInput(
                "vcs root fetch url is required".to_string(),
            ));
        }

        Ok(VcsRoot {
            name: name.to_string(),
            vcs_name: "jetbrains.git".to_string(),
            project: Some(ProjectReference {
                id: project_id.to_string(),
                ..Default::default()
            }),
            properties: Some(options.properties()),
            ..Default::default()
        })
    }
}

/// Shallow root representation used when attaching to build configurations.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct VcsRootReference {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub href: String,
}
