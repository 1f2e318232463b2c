//! Typed synchronous client for the TeamCity REST API.
//!
//! The [`TeamCityClient`] entry point hands out one service per resource
//! kind (projects, build configurations, VCS roots, agent pools, features
//! and server info). Services validate input client-side, speak JSON over a
//! shared connection pool and return typed models or a [`TeamCityError`].

pub mod client;
pub mod error;
pub mod locator;
pub mod models;
pub mod properties;
mod rest;
pub mod services;

pub use client::TeamCityClient;
pub use error::{Result, TeamCityError};
pub use locator::Locator;
pub use models::{
    AgentPool, AgentPoolReference, AgentPools, BuildFeature, BuildType, BuildTypeReference,
    FeatureGolang, FeatureSshAgent, GitAuthMethod, GitVcsRootOptions, Project, ProjectFeature,
    ProjectFeatureSlackConnection, ProjectFeatureSlackNotifier, ProjectReference, ServerInfo,
    SlackConnectionOptions, SlackNotifierOptions, VcsRoot, VcsRootEntry, VcsRootReference,
};
pub use properties::{Properties, Property};

#[cfg(test)]
mod agent_pool_tests;
#[cfg(test)]
mod build_type_tests;
