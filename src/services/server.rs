use crate::error::Result;
use crate::models::ServerInfo;
use crate::rest::RestClient;

/// Read-only server information endpoint. Doubles as a connectivity and
/// credential check.
pub struct ServerService {
    rest: RestClient,
}

impl ServerService {
    pub(crate) fn new(rest: RestClient) -> ServerService {
        ServerService { rest }
    }

    pub fn get(&self) -> Result<ServerInfo> {
        self.rest.get("server", "server")
    }
}
