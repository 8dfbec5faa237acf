// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Verify how responses are resolved into results and errors.

#[cfg(test)]
mod tests {
    use gax::options::RequestOptionsBuilder;
    use httptest::{Expectation, Server, all_of, cycle, matchers::*, responders::*};
    use ibm_cloud_iam_identity_v1::client::IamIdentity;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::time::Duration;

    type Result<T> = anyhow::Result<T>;

    async fn test_client(server: &Server) -> Result<IamIdentity> {
        let client = IamIdentity::builder()
            .with_endpoint(format!("http://{}", server.addr()))
            .with_credentials(auth::credentials::no_auth::Builder::default().build())
            .build()
            .await?;
        Ok(client)
    }

    fn error_envelope(status: u16) -> String {
        json!({
            "trace": "trace-123",
            "errors": [{
                "code": "not_found",
                "message": "API key not found",
                "more_info": "https://cloud.ibm.com/docs",
            }],
            "status_code": status,
        })
        .to_string()
    }

    #[tokio::test]
    async fn invalid_json() -> Result<()> {
        for retries in [false, true] {
            let server = Server::run();
            server.expect(
                Expectation::matching(request::method_path("GET", "/v1/apikeys"))
                    .times(1)
                    .respond_with(
                        status_code(200)
                            .append_header("content-type", "application/json")
                            .body("this is not JSON"),
                    ),
            );
            let mut client = test_client(&server).await?;
            if retries {
                client.enable_retries(3, Duration::from_millis(1));
            }
            let err = client
                .list_api_keys()
                .send()
                .await
                .expect_err("invalid JSON should fail");
            assert!(err.is_deserialization(), "{err:?}");
            assert_eq!(err.http_status_code(), Some(200), "{err:?}");
            assert_eq!(
                err.http_payload().map(|p| p.as_ref()),
                Some("this is not JSON".as_bytes()),
                "{err:?}"
            );
            assert!(
                err.http_headers()
                    .and_then(|h| h.get("content-type"))
                    .is_some(),
                "{err:?}"
            );
        }
        Ok(())
    }

    #[tokio::test]
    async fn empty_body_for_every_operation() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(any())
                .times(15)
                .respond_with(status_code(200)),
        );
        let client = test_client(&server).await?;

        macro_rules! check_empty {
            ($builder:expr) => {
                let response = $builder.send().await?;
                assert_eq!(response.status_code(), 200);
                assert!(response.body().is_none(), "{response:?}");
            };
        }
        check_empty!(client.list_api_keys());
        check_empty!(client.create_api_key().set_name("n").set_iam_id("i"));
        check_empty!(client.get_api_keys_details().set_iam_api_key("k"));
        check_empty!(client.get_api_key().set_id("id"));
        check_empty!(client.update_api_key().set_id("id").set_if_match("*"));
        check_empty!(client.delete_api_key().set_id("id"));
        check_empty!(client.lock_api_key().set_id("id"));
        check_empty!(client.unlock_api_key().set_id("id"));
        check_empty!(client.list_service_ids());
        check_empty!(client.create_service_id().set_account_id("a").set_name("n"));
        check_empty!(client.get_service_id().set_id("id"));
        check_empty!(client.update_service_id().set_id("id").set_if_match("*"));
        check_empty!(client.delete_service_id().set_id("id"));
        check_empty!(client.lock_service_id().set_id("id"));
        check_empty!(client.unlock_service_id().set_id("id"));
        Ok(())
    }

    #[tokio::test]
    async fn empty_body_with_created_and_accepted() -> Result<()> {
        for status in [201_u16, 202] {
            let server = Server::run();
            server.expect(
                Expectation::matching(request::method_path("POST", "/v1/serviceids/"))
                    .respond_with(status_code(status)),
            );
            let client = test_client(&server).await?;
            let response = client
                .create_service_id()
                .set_account_id("a")
                .set_name("n")
                .send()
                .await?;
            assert_eq!(response.status_code(), status);
            assert!(response.body().is_none(), "{response:?}");
        }
        Ok(())
    }

    #[tokio::test]
    async fn no_content_ignores_body() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("DELETE", "/v1/apikeys/id"))
                .respond_with(status_code(200).body("ignored, not JSON")),
        );
        let client = test_client(&server).await?;
        let response = client.delete_api_key().set_id("id").send().await?;
        assert!(response.body().is_none(), "{response:?}");
        Ok(())
    }

    #[tokio::test]
    async fn api_error() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/v1/apikeys/missing"))
                .respond_with(
                    status_code(404)
                        .append_header("content-type", "application/json")
                        .append_header("transaction-id", "tx-123")
                        .body(error_envelope(404)),
                ),
        );
        let client = test_client(&server).await?;
        let err = client
            .get_api_key()
            .set_id("missing")
            .send()
            .await
            .expect_err("a 404 should fail");
        assert_eq!(err.http_status_code(), Some(404), "{err:?}");
        assert_eq!(
            err.http_headers()
                .and_then(|h| h.get("transaction-id"))
                .and_then(|v| v.to_str().ok()),
            Some("tx-123"),
            "{err:?}"
        );
        let api = err.api_error().expect("an ApiError in the error");
        assert_eq!(api.message(), "API key not found");
        assert_eq!(api.code(), Some("not_found"));
        assert_eq!(api.trace(), Some("trace-123"));
        assert_eq!(api.status_code, Some(404));
        assert_eq!(api.errors.len(), 1);
        assert_eq!(
            api.errors[0].more_info.as_deref(),
            Some("https://cloud.ibm.com/docs")
        );
        Ok(())
    }

    #[tokio::test]
    async fn generic_http_error() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/v1/apikeys/id"))
                .respond_with(status_code(502).body("<html>bad gateway</html>")),
        );
        let client = test_client(&server).await?;
        let err = client
            .get_api_key()
            .set_id("id")
            .send()
            .await
            .expect_err("a 502 should fail");
        assert!(err.api_error().is_none(), "{err:?}");
        assert!(err.is_transport(), "{err:?}");
        assert_eq!(err.http_status_code(), Some(502), "{err:?}");
        assert_eq!(
            err.http_payload().map(|p| p.as_ref()),
            Some("<html>bad gateway</html>".as_bytes()),
            "{err:?}"
        );
        Ok(())
    }

    #[tokio::test]
    async fn retries_transient_errors() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/v1/serviceids/id"))
                .times(3)
                .respond_with(cycle![
                    status_code(503).body(error_envelope(503)),
                    status_code(429).body(error_envelope(429)),
                    json_encoded(json!({"id": "id"})),
                ]),
        );
        let mut client = test_client(&server).await?;
        client.enable_retries(3, Duration::from_millis(1));
        let response = client.get_service_id().set_id("id").send().await?;
        assert_eq!(response.body().and_then(|s| s.id.as_deref()), Some("id"));
        Ok(())
    }

    #[tokio::test]
    async fn default_retries_terminate() -> Result<()> {
        let server = Server::run();
        // The initial attempt and the default of 4 retries.
        server.expect(
            Expectation::matching(request::method_path("GET", "/v1/serviceids/id"))
                .times(5)
                .respond_with(
                    status_code(503)
                        .append_header("retry-after", "0")
                        .body(error_envelope(503)),
                ),
        );
        let mut client = test_client(&server).await?;
        client.enable_retries(0, Duration::ZERO);
        let err = client
            .get_service_id()
            .set_id("id")
            .send()
            .await
            .expect_err("retries should stop");
        assert_eq!(err.http_status_code(), Some(503), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn deadline() -> Result<()> {
        for retries in [false, true] {
            let server = Server::run();
            server.expect(
                Expectation::matching(request::method_path("GET", "/v1/apikeys/id"))
                    .times(0..)
                    .respond_with(delay_and_then(
                        Duration::from_secs(1),
                        json_encoded(json!({"id": "id"})),
                    )),
            );
            let mut client = test_client(&server).await?;
            if retries {
                client.enable_retries(3, Duration::from_millis(1));
            }
            let start = std::time::Instant::now();
            let err = client
                .get_api_key()
                .set_id("id")
                .with_timeout(Duration::from_millis(50))
                .send()
                .await
                .expect_err("the deadline should expire");
            assert!(err.is_timeout(), "{err:?}");
            assert!(start.elapsed() < Duration::from_secs(1), "{err:?}");
        }
        Ok(())
    }

    #[tokio::test]
    async fn cancelled() -> Result<()> {
        let server = Server::run();
        let client = test_client(&server).await?;
        let token = tokio_util::sync::CancellationToken::new();
        token.cancel();
        let err = client
            .list_service_ids()
            .with_cancellation(token)
            .send()
            .await
            .expect_err("a cancelled request should fail");
        assert!(err.is_cancelled(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn compression() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/v1/apikeys"),
                request::headers(contains(("content-encoding", "gzip"))),
            ])
            .respond_with(json_encoded(json!({"id": "id"}))),
        );
        let mut client = test_client(&server).await?;
        assert!(!client.enable_gzip_compression());
        client.set_enable_gzip_compression(true);
        let response = client
            .create_api_key()
            .set_name("n")
            .set_iam_id("i")
            .send()
            .await?;
        assert!(response.body().is_some(), "{response:?}");
        Ok(())
    }
}
