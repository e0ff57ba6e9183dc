//! Consul HTTP client tests
//!
//! Verifies request paths, query parameters, headers and response decoding.

#[cfg(test)]
mod tests {
    use crate::common::{CheckFactory, FakeConsul, ServiceEntryFactory};
    use crate::{assert_err, assert_ok};
    use sensu_consul_check::{
        CheckStatus, ConnectionConfig, ConsulClient, ConsulEndpoint, HealthQueryClient,
        RegistryError,
    };
    use std::collections::BTreeSet;
    use wiremock::ResponseTemplate;

    fn client_for(consul: &FakeConsul, token: Option<&str>) -> ConsulClient {
        let endpoint = assert_ok!(ConsulEndpoint::resolve(&consul.uri()));
        let connection = ConnectionConfig {
            server: consul.uri(),
            token: token.map(str::to_string),
            ..Default::default()
        };
        assert_ok!(ConsulClient::new(&endpoint, &connection))
    }

    fn tags(values: &[&str]) -> BTreeSet<String> {
        values.iter().map(|tag| tag.to_string()).collect()
    }

    // ==================== Query Endpoints ====================

    #[tokio::test]
    async fn test_service_checks_flatten_entries() {
        let consul = FakeConsul::start().await;
        consul
            .service(
                "web",
                vec![
                    ServiceEntryFactory::entry(
                        "n1",
                        "web",
                        &[],
                        vec![
                            CheckFactory::passing("serfHealth", "n1"),
                            CheckFactory::service_check("service:web-1", "n1", "web", "warning"),
                        ],
                    ),
                    ServiceEntryFactory::entry(
                        "n2",
                        "web",
                        &[],
                        vec![CheckFactory::service_check(
                            "service:web-2",
                            "n2",
                            "web",
                            "critical",
                        )],
                    ),
                ],
            )
            .await;

        let records = assert_ok!(client_for(&consul, None).service_checks("web").await);

        assert_eq!(records.len(), 3);
        assert_eq!(records[0].check_id, "serfHealth");
        assert_eq!(records[1].status, CheckStatus::Warning);
        assert_eq!(records[2].node, "n2");
        assert_eq!(records[2].service_name, "web");
    }

    #[tokio::test]
    async fn test_service_checks_with_tags_sends_every_tag() {
        let consul = FakeConsul::start().await;
        consul
            .service_with_tags(
                "web",
                &["blue", "canary"],
                vec![ServiceEntryFactory::entry(
                    "n1",
                    "web",
                    &["blue", "canary"],
                    vec![CheckFactory::service_check("service:web-1", "n1", "web", "passing")],
                )],
            )
            .await;

        let records = assert_ok!(
            client_for(&consul, None)
                .service_checks_with_tags("web", &tags(&["canary", "blue"]))
                .await
        );

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].status, CheckStatus::Passing);
    }

    #[tokio::test]
    async fn test_node_checks() {
        let consul = FakeConsul::start().await;
        consul
            .node(
                "n1",
                vec![
                    CheckFactory::passing("serfHealth", "n1"),
                    CheckFactory::node_check("disk", "n1", "critical"),
                ],
            )
            .await;

        let records = assert_ok!(client_for(&consul, None).node_checks("n1").await);

        assert_eq!(records.len(), 2);
        assert_eq!(records[1].check_id, "disk");
        assert_eq!(records[1].status, CheckStatus::Critical);
    }

    #[tokio::test]
    async fn test_all_checks_queries_any_state() {
        let consul = FakeConsul::start().await;
        consul
            .all(vec![
                CheckFactory::node_check("maint", "n3", "maintenance"),
                CheckFactory::node_check("agent", "n3", "unknown"),
            ])
            .await;

        let records = assert_ok!(client_for(&consul, None).all_checks().await);

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].status, CheckStatus::Other);
        assert_eq!(records[1].status, CheckStatus::Unknown);
    }

    // ==================== Headers ====================

    #[tokio::test]
    async fn test_acl_token_header() {
        let consul = FakeConsul::start().await;
        consul.all(vec![]).await;

        assert_ok!(client_for(&consul, Some("s3cr3t")).all_checks().await);

        let requests = consul.server.received_requests().await.unwrap_or_default();
        assert_eq!(requests.len(), 1);
        let token = requests[0]
            .headers
            .get("X-Consul-Token")
            .map(|value| value.to_str().unwrap_or_default().to_string());
        assert_eq!(token.as_deref(), Some("s3cr3t"));
    }

    #[tokio::test]
    async fn test_no_token_header_without_token() {
        let consul = FakeConsul::start().await;
        consul.all(vec![]).await;

        assert_ok!(client_for(&consul, None).all_checks().await);

        let requests = consul.server.received_requests().await.unwrap_or_default();
        assert!(requests[0].headers.get("X-Consul-Token").is_none());
    }

    // ==================== Failures ====================

    #[tokio::test]
    async fn test_error_status_becomes_api_error() {
        let consul = FakeConsul::start().await;
        consul
            .respond(
                "/v1/health/node/n1",
                ResponseTemplate::new(403).set_body_string("ACL not found\n"),
            )
            .await;

        let err = assert_err!(client_for(&consul, None).node_checks("n1").await);

        assert_eq!(err, RegistryError::api(403, "ACL not found"));
    }

    #[tokio::test]
    async fn test_truncated_error_body_keeps_status() {
        use std::io::{Read, Write};

        let listener = assert_ok!(std::net::TcpListener::bind("127.0.0.1:0"));
        let server = format!("http://{}", assert_ok!(listener.local_addr()));
        // announce a longer body than is sent, then hang up
        let agent = std::thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut request = [0u8; 1024];
            let _ = stream.read(&mut request).unwrap();
            stream
                .write_all(b"HTTP/1.1 500 Internal Server Error\r\nContent-Length: 100\r\n\r\nNo clus")
                .unwrap();
        });

        let endpoint = assert_ok!(ConsulEndpoint::resolve(&server));
        let client = assert_ok!(ConsulClient::new(&endpoint, &ConnectionConfig::default()));

        let err = assert_err!(client.all_checks().await);
        agent.join().unwrap();

        assert_eq!(err, RegistryError::api(500, ""));
    }

    #[tokio::test]
    async fn test_malformed_body_becomes_decode_error() {
        let consul = FakeConsul::start().await;
        consul
            .respond(
                "/v1/health/state/any",
                ResponseTemplate::new(200).set_body_string("{not json"),
            )
            .await;

        let err = assert_err!(client_for(&consul, None).all_checks().await);

        assert!(matches!(err, RegistryError::Decode { .. }));
    }

    #[tokio::test]
    async fn test_null_body_is_empty() {
        let consul = FakeConsul::start().await;
        consul
            .respond(
                "/v1/health/node/ghost",
                ResponseTemplate::new(200).set_body_string("null"),
            )
            .await;

        let records = assert_ok!(client_for(&consul, None).node_checks("ghost").await);

        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn test_unreachable_agent_is_network_error() {
        // bind then release a port so nothing is listening on it
        let listener = assert_ok!(std::net::TcpListener::bind("127.0.0.1:0"));
        let server = format!("http://{}", assert_ok!(listener.local_addr()));
        drop(listener);

        let endpoint = assert_ok!(ConsulEndpoint::resolve(&server));
        let client = assert_ok!(ConsulClient::new(&endpoint, &ConnectionConfig::default()));

        let err = assert_err!(client.all_checks().await);

        assert!(matches!(err, RegistryError::Network { .. }));
    }
}
