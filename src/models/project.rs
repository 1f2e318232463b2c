use serde::{Deserialize, Serialize};

use crate::error::{Result, TeamCityError};
use crate::locator::Locator;
use crate::models::build_type::BuildTypeReferences;
use crate::properties::Properties;

/// Project resource.
///
/// String fields serialize only when non-empty, so a locally built project
/// posts exactly the fields the caller set and a diff against server state
/// compares like-for-like.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub href: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Properties>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_project: Option<ProjectReference>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub parent_project_id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub web_url: String,
    #[serde(skip_serializing_if = "BuildTypeReferences::is_empty")]
    pub build_types: BuildTypeReferences,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub uuid: String,
}

impl Project {
    /// Build a project ready to be created. The name is required; pass an
    /// empty parent id for a top-level project.
    pub fn new(name: &str, description: &str, parent_project_id: &str) -> Result<Project> {
        if name.is_empty() {
            return Err(TeamCityError::InvalidInput(
                "project name is required".to_string(),
            ));
        }

        let parent_project = if parent_project_id.is_empty() {
            None
        } else {
            Some(ProjectReference {
                id: parent_project_id.to_string(),
                ..Default::default()
            })
        };

        Ok(Project {
            name: name.to_string(),
            description: description.to_string(),
            parent_project,
            parent_project_id: parent_project_id.to_string(),
            parameters: Some(Properties::new()),
            ..Default::default()
        })
    }

    /// Point the project at a new parent, keeping the id field and the
    /// embedded reference in sync.
    pub fn set_parent_project(&mut self, parent_project_id: &str) {
        self.parent_project_id = parent_project_id.to_string();
        self.parent_project = Some(ProjectReference {
            id: parent_project_id.to_string(),
            ..Default::default()
        });
    }

    /// Reference form used when embedding this project in another resource.
    pub fn reference(&self) -> ProjectReference {
        ProjectReference {
            id: self.id.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
            href: self.href.clone(),
            web_url: self.web_url.clone(),
        }
    }

    /// Stable locator for this project. The uuid survives id renames, so
    /// updates address the project through it.
    pub fn locator(&self) -> Locator {
        Locator::uuid(&self.uuid)
    }
}

/// Shallow project representation embedded in other resources.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectReference {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub href: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub web_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_project_requires_name() {
        let result = Project::new("", "description", "");

        assert!(matches!(result, Err(TeamCityError::InvalidInput(_))));
    }

    #[test]
    fn test_new_project_with_parent_embeds_reference() {
        let project = Project::new("Child", "", "Parent").unwrap();

        assert_eq!(project.parent_project_id, "Parent");
        assert_eq!(project.parent_project.unwrap().id, "Parent");
    }

    #[test]
    fn test_top_level_project_serializes_without_parent() {
        let project = Project::new("Top", "", "").unwrap();

        let serialized = serde_json::to_value(&project).unwrap();

        assert_eq!(
            serialized,
            serde_json::json!({"name": "Top", "parameters": {}})
        );
    }
}
