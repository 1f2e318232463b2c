use crate::error::{Result, TeamCityError};
use crate::locator::Locator;
use crate::models::{BuildType, BuildTypeReference, VcsRootEntry, VcsRootReference};
use crate::rest::RestClient;

/// Operations on build configuration resources.
pub struct BuildTypeService {
    rest: RestClient,
}

impl BuildTypeService {
    pub(crate) fn new(rest: RestClient) -> BuildTypeService {
        BuildTypeService { rest }
    }

    /// Create a build configuration under its project. The creation response
    /// is the shallow reference shape.
    pub fn create(&self, build_type: &BuildType) -> Result<BuildTypeReference> {
        if build_type.name.is_empty() {
            return Err(TeamCityError::InvalidInput(
                "build configuration name is required".to_string(),
            ));
        }
        if build_type.project_id.is_empty() {
            return Err(TeamCityError::InvalidInput(
                "build configuration project id is required".to_string(),
            ));
        }

        self.rest.post("buildTypes", build_type, "build type")
    }

    pub fn get_by_id(&self, id: &str) -> Result<BuildType> {
        self.rest
            .get(&format!("buildTypes/{}", Locator::id(id)), "build type")
    }

    pub fn delete(&self, id: &str) -> Result<()> {
        self.rest
            .delete(&format!("buildTypes/{}", Locator::id(id)), "build type")
    }

    /// Attach an existing version control root to a build configuration.
    pub fn attach_vcs_root(
        &self,
        build_type_id: &str,
        vcs_root: &VcsRootReference,
    ) -> Result<VcsRootEntry> {
        let entry = VcsRootEntry::new(vcs_root.clone());
        self.rest.post(
            &format!("buildTypes/{}/vcs-root-entries", Locator::id(build_type_id)),
            &entry,
            "build type vcs root entry",
        )
    }
}
