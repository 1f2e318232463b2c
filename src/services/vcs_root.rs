use crate::error::{Result, TeamCityError};
use crate::locator::Locator;
use crate::models::{VcsRoot, VcsRootReference};
use crate::rest::RestClient;

/// Operations on version control root resources.
pub struct VcsRootService {
    rest: RestClient,
}

impl VcsRootService {
    pub(crate) fn new(rest: RestClient) -> VcsRootService {
        VcsRootService { rest }
    }

    /// Create a root. The creation response is the shallow reference shape,
    /// ready to be attached to a build configuration.
    pub fn create(&self, vcs_root: &VcsRoot) -> Result<VcsRootReference> {
        if vcs_root.name.is_empty() {
            return Err(TeamCityError::InvalidInput(
                "vcs root name is required".to_string(),
            ));
        }
        if vcs_root.project.is_none() {
            return Err(TeamCityError::InvalidInput(
                "vcs root project is required".to_string(),
            ));
        }

        self.rest.post("vcsRoots", vcs_root, "vcs root")
    }

    pub fn get_by_id(&self, id: &str) -> Result<VcsRoot> {
        self.rest
            .get(&format!("vcsRoots/{}", Locator::id(id)), "vcs root")
    }

    pub fn delete(&self, id: &str) -> Result<()> {
        self.rest
            .delete(&format!("vcsRoots/{}", Locator::id(id)), "vcs root")
    }
}
