use log::debug;

use crate::error::{Result, TeamCityError};
use crate::locator::Locator;
use crate::models::{Project, ProjectReference};
use crate::properties::Properties;
use crate::rest::RestClient;

/// Fields requested on every project read. `$long` alone leaves out the
/// uuid, which updates rely on.
const PROJECT_FIELDS: &str = "$long,uuid";

/// Operations on project resources.
pub struct ProjectService {
    rest: RestClient,
}

impl ProjectService {
    pub(crate) fn new(rest: RestClient) -> ProjectService {
        ProjectService { rest }
    }

    /// Create a project.
    ///
    /// The creation endpoint ignores everything but name and parent, so a
    /// reconciliation pass runs right after it to push the remaining
    /// constructor arguments, then the fresh server state is returned.
    pub fn create(&self, project: &Project) -> Result<Project> {
        if project.name.is_empty() {
            return Err(TeamCityError::InvalidInput(
                "project name is required".to_string(),
            ));
        }

        let created: Project = self.rest.post("projects", project, "project")?;

        let mut desired = project.clone();
        desired.id = created.id.clone();
        self.reconcile(&Locator::id(&created.id), &desired, true)
    }

    pub fn get_by_id(&self, id: &str) -> Result<Project> {
        self.get(&Locator::id(id))
    }

    pub fn get_by_name(&self, name: &str) -> Result<Project> {
        self.get(&Locator::name(name))
    }

    pub fn get_by_uuid(&self, uuid: &str) -> Result<Project> {
        self.get(&Locator::uuid(uuid))
    }

    /// Fetch a project by locator. Parameters inherited from ancestor
    /// projects are filtered out, leaving only the project's own.
    pub fn get(&self, locator: &Locator) -> Result<Project> {
        let mut project: Project = self.rest.get_with_fields(
            &format!("projects/{}", locator),
            PROJECT_FIELDS,
            "project",
        )?;

        if let Some(parameters) = project.parameters.take() {
            project.parameters = Some(parameters.non_inherited());
        }
        Ok(project)
    }

    /// Update mutable fields to match the given project.
    ///
    /// The project is addressed by uuid so the update still lands when the
    /// id field itself is being changed.
    pub fn update(&self, project: &Project) -> Result<Project> {
        self.reconcile(&project.locator(), project, false)
    }

    pub fn delete(&self, id: &str) -> Result<()> {
        self.delete_locator(&Locator::id(id))
    }

    pub fn delete_locator(&self, locator: &Locator) -> Result<()> {
        self.rest.delete(&format!("projects/{}", locator), "project")
    }

    fn update_string_field(
        &self,
        locator: &Locator,
        field: &str,
        value: &str,
        resource: &str,
    ) -> Result<String> {
        self.rest
            .put_text_plain(&format!("projects/{}/{}", locator, field), value, resource)
    }

    /// Diff the desired state against the server and write only the fields
    /// that changed.
    ///
    /// The diff is not an optimization: the server treats some redundant
    /// writes as new events. Reassigning a project to the parent it already
    /// has copies the project and renames it "name (1)", so the parent is
    /// only written when it actually changes.
    ///
    /// Parameters are compared through the masked map view. Setting a
    /// secure value always forces the parameters write, since the server
    /// never echoes secure values back for comparison.
    fn reconcile(&self, locator: &Locator, project: &Project, is_create: bool) -> Result<Project> {
        let current = self.get(locator)?;

        if current.name != project.name {
            self.update_string_field(locator, "name", &project.name, "project name")?;
        }
        if current.description != project.description {
            self.update_string_field(
                locator,
                "description",
                &project.description,
                "project description",
            )?;
        }
        if current.id != project.id {
            self.update_string_field(locator, "id", &project.id, "project id")?;
        }

        // Creation already places the project under its parent.
        if !is_create {
            let parent_requested =
                !project.parent_project_id.is_empty() || project.parent_project.is_some();
            if parent_requested && current.parent_project_id != project.parent_project_id {
                let parent = project.parent_project.clone().unwrap_or_else(|| {
                    ProjectReference {
                        id: project.parent_project_id.clone(),
                        ..Default::default()
                    }
                });
                let _: ProjectReference = self.rest.put(
                    &format!("projects/{}/parentProject", project.id),
                    &parent,
                    "project parent",
                )?;
            }
        }

        if let Some(parameters) = &project.parameters {
            if !parameters.is_empty() {
                let sets_secure_value = parameters
                    .items
                    .iter()
                    .any(|item| item.is_secure() && !item.value.is_empty());
                let unchanged = !sets_secure_value
                    && current
                        .parameters
                        .as_ref()
                        .is_some_and(|existing| existing.map() == parameters.map());

                if unchanged {
                    debug!("parameters of {} already match, skipping write", project.id);
                } else {
                    let _: Properties = self.rest.put(
                        &format!("projects/{}/parameters", project.id),
                        parameters,
                        "project parameters",
                    )?;
                }
            }
        }

        self.get(locator)
    }
}
