use serde::{Deserialize, Serialize};

use crate::error::{Result, TeamCityError};
use crate::models::vcs_root::VcsRootReference;

/// Build configuration resource.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct BuildType {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub project_id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub project_name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub href: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub web_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paused: Option<bool>,
}

impl BuildType {
    /// Build configuration ready to be created under an existing project.
    pub fn new(name: &str, project_id: &str) -> Result<BuildType> {
        if name.is_empty() {
            return Err(TeamCityError::InvalidInput(
                "build configuration name is required".to_string(),
            ));
        }
        if project_id.is_empty() {
            return Err(TeamCityError::InvalidInput(
                "build configuration project id is required".to_string(),
            ));
        }

        Ok(BuildType {
            name: name.to_string(),
            project_id: project_id.to_string(),
            ..Default::default()
        })
    }
}

/// Shallow build configuration representation embedded in other resources.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct BuildTypeReference {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub project_id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub href: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub web_url: String,
}

/// Collection wire shape embedding build configuration references.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct BuildTypeReferences {
    #[serde(default)]
    pub count: usize,
    #[serde(rename = "buildType", default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<BuildTypeReference>,
}

impl BuildTypeReferences {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Attachment of a version control root to a build configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct VcsRootEntry {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inherited: Option<bool>,
    #[serde(rename = "vcs-root")]
    pub vcs_root: VcsRootReference,
    #[serde(rename = "checkout-rules", skip_serializing_if = "String::is_empty")]
    pub checkout_rules: String,
}

impl VcsRootEntry {
    pub fn new(vcs_root: VcsRootReference) -> VcsRootEntry {
        VcsRootEntry {
            vcs_root,
            ..Default::default()
        }
    }
}
