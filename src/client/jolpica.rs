use async_trait::async_trait;
use http::{header, HeaderMap, HeaderValue};
use reqwest::Client;
use tracing::{debug, warn};

use crate::{
    client::StatsSource,
    models::ergast::{Envelope, MrData},
};

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
(KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";

#[derive(Clone)]
pub struct JolpicaClient {
    base_url: String,
    client: Client,
}

impl JolpicaClient {
    pub fn new(base_url: &str) -> Result<Self, reqwest::Error> {
        let mut headers = HeaderMap::new();
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(header::USER_AGENT, HeaderValue::from_static(USER_AGENT));

        let client = Client::builder().default_headers(headers).build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

#[async_trait]
impl StatsSource for JolpicaClient {
    async fn fetch(&self, path: &str) -> Option<MrData> {
        let url = self.url(path);
        debug!("GET {url}");

        let res = match self.client.get(&url).send().await {
            Ok(res) => res,
            Err(e) => {
                warn!("Request to {url} failed: {e}");
                return None;
            }
        };

        if !res.status().is_success() {
            warn!("HTTP error: {} for URL: {}", res.status(), url);
            return None;
        }

        match res.json::<Envelope>().await {
            Ok(envelope) => {
                if envelope.mr_data.is_none() {
                    warn!("Response from {url} has no MRData");
                }
                envelope.mr_data
            }
            Err(e) => {
                warn!("Failed to parse response from {url}: {e}");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, header_exists, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_fetch_success_sends_fixed_headers() {
        let mock_server = MockServer::start().await;

        let response_body = r#"{
            "MRData": {
                "total": "1",
                "DriverTable": {
                    "Drivers": [
                        {
                            "driverId": "max_verstappen",
                            "permanentNumber": "33",
                            "code": "VER",
                            "givenName": "Max",
                            "familyName": "Verstappen",
                            "nationality": "Dutch"
                        }
                    ]
                }
            }
        }"#;

        Mock::given(method("GET"))
            .and(path("/ergast/f1/2024/drivers/max_verstappen.json"))
            .and(header("accept", "application/json"))
            .and(header_exists("user-agent"))
            .respond_with(ResponseTemplate::new(200).set_body_string(response_body))
            .mount(&mock_server)
            .await;

        let client = JolpicaClient::new(&format!("{}/ergast/f1/", mock_server.uri())).unwrap();
        let data = client
            .fetch("2024/drivers/max_verstappen.json")
            .await
            .unwrap();
        let driver = data.first_driver().unwrap();
        assert_eq!(driver.code.as_deref(), Some("VER"));
        assert_eq!(driver.permanent_number.as_deref(), Some("33"));
    }

    #[tokio::test]
    async fn test_query_string_is_forwarded() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/2023/constructors/mercedes/results.json"))
            .and(query_param("limit", "100"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(r#"{"MRData": {"RaceTable": {"Races": []}}}"#),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = JolpicaClient::new(&mock_server.uri()).unwrap();
        let data = client
            .fetch("/2023/constructors/mercedes/results.json?limit=100")
            .await
            .unwrap();
        assert!(data.races().is_empty());
    }

    #[tokio::test]
    async fn test_non_success_status_is_unavailable() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(429))
            .mount(&mock_server)
            .await;

        let client = JolpicaClient::new(&mock_server.uri()).unwrap();
        assert!(client.fetch("2010/drivers/hamilton/results.json").await.is_none());
    }

    #[tokio::test]
    async fn test_garbage_body_is_unavailable() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>down</html>"))
            .mount(&mock_server)
            .await;

        let client = JolpicaClient::new(&mock_server.uri()).unwrap();
        assert!(client.fetch("2010/drivers.json").await.is_none());
    }

    #[tokio::test]
    async fn test_connection_refused_is_unavailable() {
        let client = JolpicaClient::new("http://127.0.0.1:1").unwrap();
        assert!(client.fetch("2010/drivers.json").await.is_none());
    }
}
