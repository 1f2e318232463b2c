use crate::error::Result;
use crate::locator::Locator;
use crate::models::{BuildFeature, BuildFeatureBody};
use crate::rest::RestClient;

/// Operations on the features of one build configuration.
pub struct BuildFeatureService {
    build_type_id: String,
    rest: RestClient,
}

impl BuildFeatureService {
    pub(crate) fn new(build_type_id: String, rest: RestClient) -> BuildFeatureService {
        BuildFeatureService {
            build_type_id,
            rest,
        }
    }

    fn base_path(&self) -> String {
        format!("buildTypes/{}/features", Locator::id(&self.build_type_id))
    }

    /// Create a feature on the build configuration and return it with the
    /// server-assigned id.
    pub fn create(&self, feature: &BuildFeature) -> Result<BuildFeature> {
        let body: BuildFeatureBody =
            self.rest
                .post(&self.base_path(), &feature.to_body(), "build feature")?;
        BuildFeature::from_body(&self.build_type_id, &body)
    }

    pub fn get_by_id(&self, feature_id: &str) -> Result<BuildFeature> {
        let body: BuildFeatureBody = self.rest.get(
            &format!("{}/{}", self.base_path(), urlencoding::encode(feature_id)),
            "build feature",
        )?;
        BuildFeature::from_body(&self.build_type_id, &body)
    }

    pub fn delete(&self, feature_id: &str) -> Result<()> {
        self.rest.delete(
            &format!("{}/{}", self.base_path(), urlencoding::encode(feature_id)),
            "build feature",
        )
    }
}
