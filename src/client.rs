use std::env;

use crate::error::{Result, TeamCityError};
use crate::rest::RestClient;
use crate::services::{
    AgentPoolService, BuildFeatureService, BuildTypeService, ProjectFeatureService,
    ProjectService, ServerService, VcsRootService,
};

/// Environment variables read by [`TeamCityClient::from_env`].
const ENV_ADDR: &str = "TEAMCITY_ADDR";
const ENV_TOKEN: &str = "TEAMCITY_TOKEN";

/// Entry point to the API, handing out one service per resource kind.
///
/// All services share the same connection pool, so services are cheap to
/// construct and the client can be kept for the lifetime of the program.
///
/// # Example
///
/// ```no_run
/// use teamcity_client::TeamCityClient;
///
/// # fn main() -> teamcity_client::Result<()> {
/// let client = TeamCityClient::new("https://teamcity.example.test", "token");
/// let server = client.server().get()?;
/// println!("connected to {}", server.version);
/// # Ok(())
/// # }
/// ```
pub struct TeamCityClient {
    rest: RestClient,
}

impl TeamCityClient {
    /// `base_url` is the server address without the REST path suffix.
    pub fn new(base_url: &str, token: &str) -> TeamCityClient {
        TeamCityClient {
            rest: RestClient::new(base_url, token),
        }
    }

    /// Read the server address and access token from `TEAMCITY_ADDR` and
    /// `TEAMCITY_TOKEN`.
    pub fn from_env() -> Result<TeamCityClient> {
        let addr = env::var(ENV_ADDR)
            .map_err(|_| TeamCityError::InvalidInput(format!("{} is not set", ENV_ADDR)))?;
        let token = env::var(ENV_TOKEN)
            .map_err(|_| TeamCityError::InvalidInput(format!("{} is not set", ENV_TOKEN)))?;
        Ok(TeamCityClient::new(&addr, &token))
    }

    pub fn projects(&self) -> ProjectService {
        ProjectService::new(self.rest.clone())
    }

    pub fn build_types(&self) -> BuildTypeService {
        BuildTypeService::new(self.rest.clone())
    }

    pub fn vcs_roots(&self) -> VcsRootService {
        VcsRootService::new(self.rest.clone())
    }

    pub fn agent_pools(&self) -> AgentPoolService {
        AgentPoolService::new(self.rest.clone())
    }

    pub fn server(&self) -> ServerService {
        ServerService::new(self.rest.clone())
    }

    /// Feature operations scoped to one project.
    pub fn project_features(&self, project_id: &str) -> ProjectFeatureService {
        ProjectFeatureService::new(project_id.to_string(), self.rest.clone())
    }

    /// Feature operations scoped to one build configuration.
    pub fn build_features(&self, build_type_id: &str) -> BuildFeatureService {
        BuildFeatureService::new(build_type_id.to_string(), self.rest.clone())
    }
}
