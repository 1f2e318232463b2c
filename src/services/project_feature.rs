use log::debug;

use crate::error::{Result, TeamCityError};
use crate::locator::Locator;
use crate::models::{ProjectFeature, ProjectFeatureBody, ProjectFeatures};
use crate::properties::Properties;
use crate::rest::RestClient;

/// Operations on the features of one project.
pub struct ProjectFeatureService {
    project_id: String,
    rest: RestClient,
}

impl ProjectFeatureService {
    pub(crate) fn new(project_id: String, rest: RestClient) -> ProjectFeatureService {
        ProjectFeatureService { project_id, rest }
    }

    fn base_path(&self) -> String {
        format!("projects/{}/projectFeatures", Locator::id(&self.project_id))
    }

    /// Create a feature on the project and return it with the
    /// server-assigned id.
    pub fn create(&self, feature: &ProjectFeature) -> Result<ProjectFeature> {
        let body: ProjectFeatureBody =
            self.rest
                .post(&self.base_path(), &feature.to_body(), "project feature")?;
        ProjectFeature::from_body(&self.project_id, &body)
    }

    pub fn get_by_id(&self, feature_id: &str) -> Result<ProjectFeature> {
        let body: ProjectFeatureBody = self.rest.get(
            &format!("{}/{}", self.base_path(), Locator::id(feature_id)),
            "project feature",
        )?;
        ProjectFeature::from_body(&self.project_id, &body)
    }

    /// Fetch the single feature of the given type. Errors when the project
    /// has none.
    pub fn get_by_type(&self, feature_type: &str) -> Result<ProjectFeature> {
        let body: ProjectFeatureBody = self.rest.get(
            &format!(
                "{}/type:{}",
                self.base_path(),
                urlencoding::encode(feature_type)
            ),
            "project feature",
        )?;
        ProjectFeature::from_body(&self.project_id, &body)
    }

    /// All features on the project that this client knows how to represent.
    /// Features of unsupported types are skipped.
    pub fn list(&self) -> Result<Vec<ProjectFeature>> {
        let body: ProjectFeatures = self.rest.get(&self.base_path(), "project features")?;
        Ok(body
            .items
            .iter()
            .filter_map(|item| ProjectFeature::from_body(&self.project_id, item).ok())
            .collect())
    }

    /// Write the feature's properties and return the refreshed feature.
    ///
    /// When the desired properties already match the server and no secure
    /// value is being set, the write is skipped entirely. Secure values
    /// cannot be compared since the server never returns them, so setting
    /// one always forces the write.
    pub fn update(&self, feature: &ProjectFeature) -> Result<ProjectFeature> {
        if feature.id().is_empty() {
            return Err(TeamCityError::InvalidInput(
                "feature id is required for update".to_string(),
            ));
        }

        let current = self.get_by_id(feature.id())?;
        let desired = feature.properties();

        let sets_secure_value = desired
            .items
            .iter()
            .any(|item| item.is_secure() && !item.value.is_empty());
        if !sets_secure_value && desired.map() == current.properties().map() {
            debug!(
                "properties of feature {} already match, skipping write",
                feature.id()
            );
            return Ok(current);
        }

        let _: Properties = self.rest.put(
            &format!(
                "{}/{}/properties",
                self.base_path(),
                Locator::id(feature.id())
            ),
            &desired,
            "project feature properties",
        )?;

        self.get_by_id(feature.id())
    }

    pub fn delete(&self, feature_id: &str) -> Result<()> {
        self.rest.delete(
            &format!("{}/{}", self.base_path(), Locator::id(feature_id)),
            "project feature",
        )
    }
}
