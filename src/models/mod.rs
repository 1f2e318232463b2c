pub mod agent_pool;
pub mod build_feature;
pub mod build_type;
pub mod project;
pub mod project_feature;
pub mod server;
pub mod vcs_root;

pub use agent_pool::{AgentPool, AgentPoolReference, AgentPools};
pub use build_feature::{BuildFeature, BuildFeatureBody, FeatureGolang, FeatureSshAgent};
pub use build_type::{BuildType, BuildTypeReference, BuildTypeReferences, VcsRootEntry};
pub use project::{Project, ProjectReference};
pub use project_feature::{
    ProjectFeature, ProjectFeatureBody, ProjectFeatureSlackConnection,
    ProjectFeatureSlackNotifier, ProjectFeatures, SlackConnectionOptions, SlackNotifierOptions,
};
pub use server::ServerInfo;
pub use vcs_root::{GitAuthMethod, GitVcsRootOptions, VcsRoot, VcsRootReference};
