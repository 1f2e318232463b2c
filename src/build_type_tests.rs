#[cfg(test)]
mod tests {
    use crate::client::TeamCityClient;
    use crate::error::TeamCityError;
    use crate::models::{BuildType, VcsRootReference};
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_create_build_type() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/app/rest/buildTypes"))
            .and(header("Authorization", "Bearer test-token"))
            .and(body_json(serde_json::json!({
                "name": "Build and publish",
                "projectId": "Deploy"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": "Deploy_BuildAndPublish",
                "name": "Build and publish",
                "projectId": "Deploy",
                "href": "/app/rest/buildTypes/id:Deploy_BuildAndPublish"
            })))
            .mount(&mock_server)
            .await;

        let client = TeamCityClient::new(&mock_server.uri(), "test-token");
        let build_type = BuildType::new("Build and publish", "Deploy").unwrap();
        let created = client.build_types().create(&build_type).unwrap();

        assert_eq!(created.id, "Deploy_BuildAndPublish");
        assert_eq!(created.project_id, "Deploy");
    }

    #[tokio::test]
    async fn test_create_rejects_missing_project_id() {
        let client = TeamCityClient::new("http://localhost:8111", "test-token");
        let build_type = BuildType {
            name: "Orphan".to_string(),
            ..Default::default()
        };

        let result = client.build_types().create(&build_type);

        assert!(matches!(
            result,
            Err(TeamCityError::InvalidInput(message)) if message.contains("project id")
        ));
    }

    #[tokio::test]
    async fn test_get_build_type() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/app/rest/buildTypes/id:Deploy_BuildAndPublish"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": "Deploy_BuildAndPublish",
                "name": "Build and publish",
                "projectId": "Deploy",
                "projectName": "Deploy",
                "paused": false,
                "webUrl": "http://localhost:8111/viewType.html?buildTypeId=Deploy_BuildAndPublish"
            })))
            .mount(&mock_server)
            .await;

        let client = TeamCityClient::new(&mock_server.uri(), "test-token");
        let build_type = client.build_types().get_by_id("Deploy_BuildAndPublish").unwrap();

        assert_eq!(build_type.name, "Build and publish");
        assert_eq!(build_type.paused, Some(false));
    }

    #[tokio::test]
    async fn test_delete_build_type() {
        let mock_server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/app/rest/buildTypes/id:Deploy_BuildAndPublish"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = TeamCityClient::new(&mock_server.uri(), "test-token");

        client.build_types().delete("Deploy_BuildAndPublish").unwrap();
    }

    #[tokio::test]
    async fn test_attach_vcs_root() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(
                "/app/rest/buildTypes/id:Deploy_BuildAndPublish/vcs-root-entries",
            ))
            .and(body_json(serde_json::json!({
                "vcs-root": {"id": "Deploy_Repository"}
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": "Deploy_Repository",
                "vcs-root": {
                    "id": "Deploy_Repository",
                    "name": "Deploy repository",
                    "href": "/app/rest/vcsRoots/id:Deploy_Repository"
                }
            })))
            .mount(&mock_server)
            .await;

        let client = TeamCityClient::new(&mock_server.uri(), "test-token");
        let reference = VcsRootReference {
            id: "Deploy_Repository".to_string(),
            ..Default::default()
        };
        let entry = client
            .build_types()
            .attach_vcs_root("Deploy_BuildAndPublish", &reference)
            .unwrap();

        assert_eq!(entry.id, "Deploy_Repository");
        assert_eq!(entry.vcs_root.name, "Deploy repository");
    }
}
