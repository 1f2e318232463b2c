use serde::{Deserialize, Serialize};

use crate::error::{Result, TeamCityError};
use crate::properties::Properties;

const FEATURE_TYPE_GOLANG: &str = "golang";
const FEATURE_TYPE_SSH_AGENT: &str = "ssh-agent";

/// Wire shape shared by all build features. Typed features convert to and
/// from this body at the service boundary.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct BuildFeatureBody {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(rename = "type", skip_serializing_if = "String::is_empty")]
    pub feature_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inherited: Option<bool>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub href: String,
    pub properties: Properties,
}

/// Golang test report publishing on a build configuration.
#[derive(Debug, Clone, Default)]
pub struct FeatureGolang {
    id: String,
    disabled: bool,
    build_type_id: String,
}

impl FeatureGolang {
    pub fn new() -> FeatureGolang {
        FeatureGolang::default()
    }
}

/// SSH agent forwarding an uploaded key into the build environment.
#[derive(Debug, Clone)]
pub struct FeatureSshAgent {
    id: String,
    disabled: bool,
    build_type_id: String,
    teamcity_ssh_key: String,
}

impl FeatureSshAgent {
    /// The key name must match a key uploaded to the owning project.
    pub fn new(teamcity_ssh_key: &str) -> Result<FeatureSshAgent> {
        if teamcity_ssh_key.is_empty() {
            return Err(TeamCityError::InvalidInput(
                "ssh agent key name is required".to_string(),
            ));
        }

        Ok(FeatureSshAgent {
            id: String::new(),
            disabled: false,
            build_type_id: String::new(),
            teamcity_ssh_key: teamcity_ssh_key.to_string(),
        })
    }

    pub fn teamcity_ssh_key(&self) -> &str {
        &self.teamcity_ssh_key
    }
}

/// Typed build feature attached to a build configuration.
#[derive(Debug, Clone)]
pub enum BuildFeature {
    Golang(FeatureGolang),
    SshAgent(FeatureSshAgent),
}

impl BuildFeature {
    pub fn id(&self) -> &str {
        match self {
            BuildFeature::Golang(feature) => &feature.id,
            BuildFeature::SshAgent(feature) => &feature.id,
        }
    }

    pub fn set_id(&mut self, id: &str) {
        match self {
            BuildFeature::Golang(feature) => feature.id = id.to_string(),
            BuildFeature::SshAgent(feature) => feature.id = id.to_string(),
        }
    }

    pub fn build_type_id(&self) -> &str {
        match self {
            BuildFeature::Golang(feature) => &feature.build_type_id,
            BuildFeature::SshAgent(feature) => &feature.build_type_id,
        }
    }

    pub fn set_build_type_id(&mut self, build_type_id: &str) {
        match self {
            BuildFeature::Golang(feature) => feature.build_type_id = build_type_id.to_string(),
            BuildFeature::SshAgent(feature) => feature.build_type_id = build_type_id.to_string(),
        }
    }

    pub fn disabled(&self) -> bool {
        match self {
            BuildFeature::Golang(feature) => feature.disabled,
            BuildFeature::SshAgent(feature) => feature.disabled,
        }
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        match self {
            BuildFeature::Golang(feature) => feature.disabled = disabled,
            BuildFeature::SshAgent(feature) => feature.disabled = disabled,
        }
    }

    pub fn feature_type(&self) -> &'static str {
        match self {
            BuildFeature::Golang(_) => FEATURE_TYPE_GOLANG,
            BuildFeature::SshAgent(_) => FEATURE_TYPE_SSH_AGENT,
        }
    }

    pub(crate) fn to_body(&self) -> BuildFeatureBody {
        let properties = match self {
            // json is the only test output format the feature accepts.
            BuildFeature::Golang(_) => Properties::from_pairs([("test.format", "json")]),
            BuildFeature::SshAgent(feature) => {
                Properties::from_pairs([("teamcitySshKey", feature.teamcity_ssh_key.as_str())])
            }
        };

        BuildFeatureBody {
            id: self.id().to_string(),
            feature_type: self.feature_type().to_string(),
            disabled: Some(self.disabled()),
            inherited: Some(false),
            href: String::new(),
            properties,
        }
    }

    pub(crate) fn from_body(build_type_id: &str, body: &BuildFeatureBody) -> Result<BuildFeature> {
        match body.feature_type.as_str() {
            FEATURE_TYPE_GOLANG => Ok(BuildFeature::Golang(FeatureGolang {
                id: body.id.clone(),
                disabled: body.disabled.unwrap_or(false),
                build_type_id: build_type_id.to_string(),
            })),
            FEATURE_TYPE_SSH_AGENT => Ok(BuildFeature::SshAgent(FeatureSshAgent {
                id: body.id.clone(),
                disabled: body.disabled.unwrap_or(false),
                build_type_id: build_type_id.to_string(),
                teamcity_ssh_key: body
                    .properties
                    .get("teamcitySshKey")
                    .unwrap_or("")
                    .to_string(),
            })),
            other => Err(TeamCityError::UnsupportedFeature(other.to_string())),
        }
    }
}
