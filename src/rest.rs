//! Shared HTTP plumbing for the resource services.
//!
//! One round trip per call, no retries. Non-2xx handling is disabled on the
//! agent so every status code flows through [`RestClient::check`], which
//! synthesizes a typed error carrying the raw response body.

use std::time::Duration;

use log::debug;
use serde::de::DeserializeOwned;
use serde::Serialize;
use ureq::Agent;

use crate::error::{Result, TeamCityError};

const REQUEST_TIMEOUT_SECS: u64 = 30;

/// HTTP helper shared by all resource services.
///
/// Holds the agent, the versioned API base and the access token. Cloning is
/// cheap since the agent's connection pool is shared between clones.
#[derive(Clone)]
pub(crate) struct RestClient {
    agent: Agent,
    base_url: String,
    token: String,
}

impl RestClient {
    pub(crate) fn new(base_url: &str, token: &str) -> RestClient {
        let agent: Agent = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(REQUEST_TIMEOUT_SECS)))
            .http_status_as_error(false)
            .build()
            .into();

        RestClient {
            agent,
            base_url: format!("{}/app/rest", base_url.trim_end_matches('/')),
            token: token.to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    fn auth_header(&self) -> String {
        format!("Bearer {}", self.token)
    }

    pub(crate) fn get<T: DeserializeOwned>(&self, path: &str, resource: &str) -> Result<T> {
        let url = self.url(path);
        debug!("GET {}", url);

        let response = self
            .agent
            .get(&url)
            .header("Authorization", &self.auth_header())
            .header("Accept", "application/json")
            .call()
            .map_err(TeamCityError::Http)?;

        let mut response = self.check(response, &[200], "GET", resource)?;
        let body = response.body_mut().read_to_string()?;
        Ok(serde_json::from_str(&body)?)
    }

    pub(crate) fn get_with_fields<T: DeserializeOwned>(
        &self,
        path: &str,
        fields: &str,
        resource: &str,
    ) -> Result<T> {
        let url = format!("{}?fields={}", self.url(path), urlencoding::encode(fields));
        debug!("GET {}", url);

        let response = self
            .agent
            .get(&url)
            .header("Authorization", &self.auth_header())
            .header("Accept", "application/json")
            .call()
            .map_err(TeamCityError::Http)?;

        let mut response = self.check(response, &[200], "GET", resource)?;
        let body = response.body_mut().read_to_string()?;
        Ok(serde_json::from_str(&body)?)
    }

    pub(crate) fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        resource: &str,
    ) -> Result<T> {
        let url = self.url(path);
        debug!("POST {}", url);

        let response = self
            .agent
            .post(&url)
            .header("Authorization", &self.auth_header())
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .send_json(body)
            .map_err(TeamCityError::Http)?;

        let mut response = self.check(response, &[200, 201], "POST", resource)?;
        let body = response.body_mut().read_to_string()?;
        Ok(serde_json::from_str(&body)?)
    }

    pub(crate) fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        resource: &str,
    ) -> Result<T> {
        let url = self.url(path);
        debug!("PUT {}", url);

        let response = self
            .agent
            .put(&url)
            .header("Authorization", &self.auth_header())
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .send_json(body)
            .map_err(TeamCityError::Http)?;

        let mut response = self.check(response, &[200, 201], "PUT", resource)?;
        let body = response.body_mut().read_to_string()?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Write a single string-valued field. The server takes these as plain
    /// text and answers with the stored value in the same encoding.
    pub(crate) fn put_text_plain(&self, path: &str, value: &str, resource: &str) -> Result<String> {
        let url = self.url(path);
        debug!("PUT {} (text/plain)", url);

        let response = self
            .agent
            .put(&url)
            .header("Authorization", &self.auth_header())
            .header("Content-Type", "text/plain; charset=utf-8")
            .header("Accept", "text/plain")
            .send(value)
            .map_err(TeamCityError::Http)?;

        let mut response = self.check(response, &[200, 201], "PUT", resource)?;
        Ok(response.body_mut().read_to_string()?)
    }

    pub(crate) fn delete(&self, path: &str, resource: &str) -> Result<()> {
        let url = self.url(path);
        debug!("DELETE {}", url);

        let response = self
            .agent
            .delete(&url)
            .header("Authorization", &self.auth_header())
            .call()
            .map_err(TeamCityError::Http)?;

        self.check(response, &[200, 204], "DELETE", resource)?;
        Ok(())
    }

    /// Pass expected statuses through and turn everything else into a
    /// [`TeamCityError::Rest`] with the body preserved verbatim.
    fn check(
        &self,
        mut response: ureq::http::Response<ureq::Body>,
        expected: &[u16],
        verb: &'static str,
        resource: &str,
    ) -> Result<ureq::http::Response<ureq::Body>> {
        let status = response.status().as_u16();
        if expected.contains(&status) {
            return Ok(response);
        }

        let body = response
            .body_mut()
            .read_to_string()
            .unwrap_or_else(|_| String::new());
        debug!("{} {} failed with status {}", verb, resource, status);

        Err(TeamCityError::Rest {
            status,
            verb,
            resource: resource.to_string(),
            body,
        })
    }
}
