use crate::error::Result;
use crate::locator::Locator;
use crate::models::{AgentPool, AgentPools};
use crate::rest::RestClient;

/// Operations on agent pool resources.
pub struct AgentPoolService {
    rest: RestClient,
}

impl AgentPoolService {
    pub(crate) fn new(rest: RestClient) -> AgentPoolService {
        AgentPoolService { rest }
    }

    /// Create a pool. The server assigns the integer id returned in the
    /// response.
    pub fn create(&self, pool: &AgentPool) -> Result<AgentPool> {
        self.rest.post("agentPools", pool, "agent pool")
    }

    pub fn get(&self, id: i64) -> Result<AgentPool> {
        self.rest
            .get(&format!("agentPools/{}", Locator::id_int(id)), "agent pool")
    }

    pub fn list(&self) -> Result<AgentPools> {
        self.rest.get("agentPools", "agent pools")
    }

    /// Delete a pool. Agents still assigned to it move back to the default
    /// pool on the server side.
    pub fn delete(&self, id: i64) -> Result<()> {
        self.rest
            .delete(&format!("agentPools/{}", Locator::id_int(id)), "agent pool")
    }
}
