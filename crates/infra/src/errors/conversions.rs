//! Conversions from external infrastructure errors into domain errors.

use reqwest::Error as HttpError;
use salestrail_domain::SalesTrailError;
use serde_json::Error as JsonError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub SalesTrailError);

impl From<InfraError> for SalesTrailError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<SalesTrailError> for InfraError {
    fn from(value: SalesTrailError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoSalesTrailError {
    fn into_salestrail(self) -> SalesTrailError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → SalesTrailError */
/* -------------------------------------------------------------------------- */

impl IntoSalesTrailError for HttpError {
    fn into_salestrail(self) -> SalesTrailError {
        if self.is_timeout() {
            return SalesTrailError::Network("HTTP request timed out".into());
        }

        if self.is_connect() {
            return SalesTrailError::Network("HTTP connection failure".into());
        }

        if self.is_decode() {
            return SalesTrailError::Decode(format!("failed to decode response body: {self}"));
        }

        if self.is_builder() {
            return SalesTrailError::Config(format!("invalid HTTP request: {self}"));
        }

        if let Some(status) = self.status() {
            let code = status.as_u16();
            let message = status.canonical_reason().unwrap_or("unknown status").to_string();

            return match code {
                404 => SalesTrailError::NotFound(format!("HTTP 404 {message}")),
                _ => SalesTrailError::Http { status: code, message },
            };
        }

        SalesTrailError::Network(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_salestrail())
    }
}

/* -------------------------------------------------------------------------- */
/* serde_json::Error → SalesTrailError */
/* -------------------------------------------------------------------------- */

impl IntoSalesTrailError for JsonError {
    fn into_salestrail(self) -> SalesTrailError {
        SalesTrailError::Decode(format!(
            "invalid JSON at line {} column {}: {}",
            self.line(),
            self.column(),
            self
        ))
    }
}

impl From<JsonError> for InfraError {
    fn from(value: JsonError) -> Self {
        InfraError(value.into_salestrail())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use reqwest::{Client, StatusCode};
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    async fn status_error(status: StatusCode) -> HttpError {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(status))
            .mount(&server)
            .await;

        let client = Client::builder().no_proxy().build().unwrap();
        client.get(server.uri()).send().await.unwrap().error_for_status().unwrap_err()
    }

    #[tokio::test]
    async fn http_status_500_maps_to_http_error() {
        let mapped: SalesTrailError =
            InfraError::from(status_error(StatusCode::INTERNAL_SERVER_ERROR).await).into();
        match mapped {
            SalesTrailError::Http { status, .. } => assert_eq!(status, 500),
            other => panic!("expected http error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn http_status_404_maps_to_not_found() {
        let mapped: SalesTrailError =
            InfraError::from(status_error(StatusCode::NOT_FOUND).await).into();
        match mapped {
            SalesTrailError::NotFound(msg) => assert!(msg.contains("404")),
            other => panic!("expected not found, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn connection_refused_maps_to_network_error() {
        // Bind and drop a listener so the port is known to be closed.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let address = listener.local_addr().unwrap();
        drop(listener);

        let client = Client::builder().no_proxy().build().unwrap();
        let error = client.get(format!("http://{address}")).send().await.unwrap_err();

        let mapped: SalesTrailError = InfraError::from(error).into();
        assert!(matches!(mapped, SalesTrailError::Network(_)), "got {mapped:?}");
    }

    #[test]
    fn json_errors_map_to_decode() {
        let error = serde_json::from_str::<serde_json::Value>("{ not json").unwrap_err();
        let mapped: SalesTrailError = InfraError::from(error).into();
        match mapped {
            SalesTrailError::Decode(msg) => assert!(msg.contains("line 1")),
            other => panic!("expected decode error, got {:?}", other),
        }
    }
}
