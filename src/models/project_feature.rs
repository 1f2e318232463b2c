use serde::{Deserialize, Serialize};

use crate::error::{Result, TeamCityError};
use crate::properties::Properties;

/// Feature type shared by connection-style project features.
const FEATURE_TYPE_OAUTH_PROVIDER: &str = "OAuthProvider";

const PROVIDER_TYPE_SLACK_CONNECTION: &str = "slackConnection";
const PROVIDER_TYPE_SLACK_NOTIFIER: &str = "slackNotifier";

/// Wire shape shared by all project features. Typed features convert to and
/// from this body at the service boundary.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectFeatureBody {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(rename = "type", skip_serializing_if = "String::is_empty")]
    pub feature_type: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub href: String,
    pub properties: Properties,
}

/// Collection wire shape for a project's feature list.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProjectFeatures {
    #[serde(default)]
    pub count: usize,
    #[serde(rename = "projectFeature", default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<ProjectFeatureBody>,
}

/// Settings of a Slack OAuth connection. The secret and the bot token are
/// secure values: sent on writes, never present in server responses.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlackConnectionOptions {
    pub client_id: String,
    pub client_secret: String,
    pub display_name: String,
    pub provider_type: String,
    pub token: String,
}

impl SlackConnectionOptions {
    pub fn new(
        client_id: &str,
        client_secret: &str,
        display_name: &str,
        token: &str,
    ) -> SlackConnectionOptions {
        SlackConnectionOptions {
            client_id: client_id.to_string(),
            client_secret: client_secret.to_string(),
            display_name: display_name.to_string(),
            provider_type: String::new(),
            token: token.to_string(),
        }
    }
}

/// Slack OAuth connection configured on a project.
#[derive(Debug, Clone)]
pub struct ProjectFeatureSlackConnection {
    id: String,
    project_id: String,
    pub options: SlackConnectionOptions,
}

impl ProjectFeatureSlackConnection {
    pub fn new(project_id: &str, options: SlackConnectionOptions) -> ProjectFeatureSlackConnection {
        ProjectFeatureSlackConnection {
            id: String::new(),
            project_id: project_id.to_string(),
            options,
        }
    }

    fn properties(&self) -> Properties {
        Properties::from_pairs([
            ("clientId", self.options.client_id.as_str()),
            ("secure:clientSecret", self.options.client_secret.as_str()),
            ("displayName", self.options.display_name.as_str()),
            ("providerType", PROVIDER_TYPE_SLACK_CONNECTION),
            ("secure:token", self.options.token.as_str()),
        ])
    }

    fn from_body(project_id: &str, body: &ProjectFeatureBody) -> ProjectFeatureSlackConnection {
        ProjectFeatureSlackConnection {
            id: body.id.clone(),
            project_id: project_id.to_string(),
            options: SlackConnectionOptions {
                client_id: body.properties.get("clientId").unwrap_or("").to_string(),
                client_secret: String::new(),
                display_name: body.properties.get("displayName").unwrap_or("").to_string(),
                provider_type: body.properties.get("providerType").unwrap_or("").to_string(),
                token: String::new(),
            },
        }
    }
}

/// Settings of a Slack build notifier connection. Same secure value rules as
/// [`SlackConnectionOptions`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlackNotifierOptions {
    pub client_id: String,
    pub client_secret: String,
    pub display_name: String,
    pub provider_type: String,
    pub token: String,
}

impl SlackNotifierOptions {
    pub fn new(
        client_id: &str,
        client_secret: &str,
        display_name: &str,
        token: &str,
    ) -> SlackNotifierOptions {
        SlackNotifierOptions {
            client_id: client_id.to_string(),
            client_secret: client_secret.to_string(),
            display_name: display_name.to_string(),
            provider_type: String::new(),
            token: token.to_string(),
        }
    }
}

/// Slack notifier connection configured on a project.
#[derive(Debug, Clone)]
pub struct ProjectFeatureSlackNotifier {
    id: String,
    project_id: String,
    pub options: SlackNotifierOptions,
}

impl ProjectFeatureSlackNotifier {
    pub fn new(project_id: &str, options: SlackNotifierOptions) -> ProjectFeatureSlackNotifier {
        ProjectFeatureSlackNotifier {
            id: String::new(),
            project_id: project_id.to_string(),
            options,
        }
    }

    fn properties(&self) -> Properties {
        Properties::from_pairs([
            ("clientId", self.options.client_id.as_str()),
            ("secure:clientSecret", self.options.client_secret.as_str()),
            ("displayName", self.options.display_name.as_str()),
            ("providerType", PROVIDER_TYPE_SLACK_NOTIFIER),
            ("secure:token", self.options.token.as_str()),
        ])
    }

    fn from_body(project_id: &str, body: &ProjectFeatureBody) -> ProjectFeatureSlackNotifier {
        ProjectFeatureSlackNotifier {
            id: body.id.clone(),
            project_id: project_id.to_string(),
            options: SlackNotifierOptions {
                client_id: body.properties.get("clientId").unwrap_or("").to_string(),
                client_secret: String::new(),
                display_name: body.properties.get("displayName").unwrap_or("").to_string(),
                provider_type: body.properties.get("providerType").unwrap_or("").to_string(),
                token: String::new(),
            },
        }
    }
}

/// Typed project feature. Connection-style features share the
/// `OAuthProvider` feature type and are told apart by their `providerType`
/// property.
#[derive(Debug, Clone)]
pub enum ProjectFeature {
    SlackConnection(ProjectFeatureSlackConnection),
    SlackNotifier(ProjectFeatureSlackNotifier),
}

impl ProjectFeature {
    pub fn id(&self) -> &str {
        match self {
            ProjectFeature::SlackConnection(feature) => &feature.id,
            ProjectFeature::SlackNotifier(feature) => &feature.id,
        }
    }

    pub fn set_id(&mut self, id: &str) {
        match self {
            ProjectFeature::SlackConnection(feature) => feature.id = id.to_string(),
            ProjectFeature::SlackNotifier(feature) => feature.id = id.to_string(),
        }
    }

    pub fn project_id(&self) -> &str {
        match self {
            ProjectFeature::SlackConnection(feature) => &feature.project_id,
            ProjectFeature::SlackNotifier(feature) => &feature.project_id,
        }
    }

    pub fn set_project_id(&mut self, project_id: &str) {
        match self {
            ProjectFeature::SlackConnection(feature) => {
                feature.project_id = project_id.to_string()
            }
            ProjectFeature::SlackNotifier(feature) => feature.project_id = project_id.to_string(),
        }
    }

    pub fn feature_type(&self) -> &'static str {
        FEATURE_TYPE_OAUTH_PROVIDER
    }

    /// Full property collection for this feature, secure values included.
    pub fn properties(&self) -> Properties {
        match self {
            ProjectFeature::SlackConnection(feature) => feature.properties(),
            ProjectFeature::SlackNotifier(feature) => feature.properties(),
        }
    }

    pub(crate) fn to_body(&self) -> ProjectFeatureBody {
        ProjectFeatureBody {
            id: self.id().to_string(),
            feature_type: self.feature_type().to_string(),
            href: String::new(),
            properties: self.properties(),
        }
    }

    pub(crate) fn from_body(project_id: &str, body: &ProjectFeatureBody) -> Result<ProjectFeature> {
        if body.feature_type != FEATURE_TYPE_OAUTH_PROVIDER {
            return Err(TeamCityError::UnsupportedFeature(body.feature_type.clone()));
        }

        match body.properties.get("providerType") {
            Some(PROVIDER_TYPE_SLACK_CONNECTION) => Ok(ProjectFeature::SlackConnection(
                ProjectFeatureSlackConnection::from_body(project_id, body),
            )),
            Some(PROVIDER_TYPE_SLACK_NOTIFIER) => Ok(ProjectFeature::SlackNotifier(
                ProjectFeatureSlackNotifier::from_body(project_id, body),
            )),
            other => Err(TeamCityError::UnsupportedFeature(format!(
                "{} with provider type '{}'",
                body.feature_type,
                other.unwrap_or("")
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slack_connection_property_map_masks_secrets() {
        let feature = ProjectFeature::SlackConnection(ProjectFeatureSlackConnection::new(
            "MyProject",
            SlackConnectionOptions::new("abcd.1234", "1234abcd", "Notifier", "xoxb-36484"),
        ));

        let map = feature.properties().map();

        assert_eq!(map.get("clientId"), Some(&"abcd.1234".to_string()));
        assert_eq!(map.get("displayName"), Some(&"Notifier".to_string()));
        assert_eq!(map.get("providerType"), Some(&"slackConnection".to_string()));
        assert!(!map.contains_key("secure:clientSecret"));
        assert!(!map.contains_key("secure:token"));
    }

    #[test]
    fn test_secure_values_still_serialize_on_the_wire() {
        let feature = ProjectFeature::SlackConnection(ProjectFeatureSlackConnection::new(
            "MyProject",
            SlackConnectionOptions::new("abcd.1234", "1234abcd", "Notifier", "xoxb-36484"),
        ));

        let properties = feature.properties();

        assert_eq!(properties.get("secure:clientSecret"), Some("1234abcd"));
        assert_eq!(properties.get("secure:token"), Some("xoxb-36484"));
    }

    #[test]
    fn test_from_body_rejects_unknown_feature_type() {
        let body = ProjectFeatureBody {
            feature_type: "versionedSettings".to_string(),
            ..Default::default()
        };

        let result = ProjectFeature::from_body("MyProject", &body);

        assert!(matches!(
            result,
            Err(TeamCityError::UnsupportedFeature(kind)) if kind == "versionedSettings"
        ));
    }

    #[test]
    fn test_from_body_dispatches_on_provider_type() {
        let body = ProjectFeatureBody {
            id: "PROJECT_EXT_2".to_string(),
            feature_type: "OAuthProvider".to_string(),
            properties: Properties::from_pairs([
                ("clientId", "abcd.1234"),
                ("displayName", "Deploys"),
                ("providerType", "slackNotifier"),
            ]),
            ..Default::default()
        };

        let feature = ProjectFeature::from_body("MyProject", &body).unwrap();

        assert!(matches!(feature, ProjectFeature::SlackNotifier(_)));
        assert_eq!(feature.id(), "PROJECT_EXT_2");
        assert_eq!(feature.project_id(), "MyProject");
    }
}
