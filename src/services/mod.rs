pub mod agent_pool;
pub mod build_feature;
pub mod build_type;
pub mod project;
pub mod project_feature;
pub mod server;
pub mod vcs_root;

pub use agent_pool::AgentPoolService;
pub use build_feature::BuildFeatureService;
pub use build_type::BuildTypeService;
pub use project::ProjectService;
pub use project_feature::ProjectFeatureService;
pub use server::ServerService;
pub use vcs_root::VcsRootService;
