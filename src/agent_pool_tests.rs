#[cfg(test)]
mod tests {
    use crate::client::TeamCityClient;
    use crate::models::AgentPool;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_create_pool() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/app/rest/agentPools"))
            .and(header("Authorization", "Bearer test-token"))
            .and(body_json(serde_json::json!({"name": "Deployment"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": 10,
                "name": "Deployment",
                "href": "/app/rest/agentPools/id:10"
            })))
            .mount(&mock_server)
            .await;

        let client = TeamCityClient::new(&mock_server.uri(), "test-token");
        let created = client.agent_pools().create(&AgentPool::new("Deployment")).unwrap();

        assert_eq!(created.id, Some(10));
        assert_eq!(created.name, "Deployment");
        assert_eq!(created.max_agents, None);
    }

    #[tokio::test]
    async fn test_create_pool_with_agent_limit() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/app/rest/agentPools"))
            .and(body_json(serde_json::json!({"name": "Small", "maxAgents": 3})))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": 11,
                "name": "Small",
                "maxAgents": 3
            })))
            .mount(&mock_server)
            .await;

        let client = TeamCityClient::new(&mock_server.uri(), "test-token");
        let created = client
            .agent_pools()
            .create(&AgentPool::with_max_agents("Small", 3))
            .unwrap();

        assert_eq!(created.max_agents, Some(3));
    }

    #[tokio::test]
    async fn test_get_pool_by_numeric_id() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/app/rest/agentPools/id:10"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": 10,
                "name": "Deployment",
                "maxAgents": 5,
                "href": "/app/rest/agentPools/id:10"
            })))
            .mount(&mock_server)
            .await;

        let client = TeamCityClient::new(&mock_server.uri(), "test-token");
        let pool = client.agent_pools().get(10).unwrap();

        assert_eq!(pool.id, Some(10));
        assert_eq!(pool.name, "Deployment");
        assert_eq!(pool.max_agents, Some(5));
    }

    #[tokio::test]
    async fn test_list_pools() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/app/rest/agentPools"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "count": 2,
                "href": "/app/rest/agentPools",
                "agentPool": [
                    {"id": 0, "name": "Default", "href": "/app/rest/agentPools/id:0"},
                    {"id": 10, "name": "Deployment", "href": "/app/rest/agentPools/id:10"}
                ]
            })))
            .mount(&mock_server)
            .await;

        let client = TeamCityClient::new(&mock_server.uri(), "test-token");
        let pools = client.agent_pools().list().unwrap();

        assert_eq!(pools.count, 2);
        assert_eq!(pools.items.len(), 2);
        assert_eq!(pools.items[0].name, "Default");
        assert_eq!(pools.items[1].id, 10);
    }

    #[tokio::test]
    async fn test_delete_pool() {
        let mock_server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/app/rest/agentPools/id:10"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = TeamCityClient::new(&mock_server.uri(), "test-token");

        client.agent_pools().delete(10).unwrap();
    }

    #[tokio::test]
    async fn test_get_missing_pool_is_not_found() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/app/rest/agentPools/id:99"))
            .respond_with(
                ResponseTemplate::new(404)
                    .set_body_string("Could not find the entity requested. Check the reference is correct."),
            )
            .mount(&mock_server)
            .await;

        let client = TeamCityClient::new(&mock_server.uri(), "test-token");
        let result = client.agent_pools().get(99);

        assert!(result.is_err());
        assert!(result.unwrap_err().is_not_found());
    }
}
