//! HTTP client for the Bored API.
//!
//! One capability: fetch a single activity suggestion for a filter. The
//! API answers every query with either one activity or an `error` field
//! meaning nothing matched. A failed call surfaces directly to the UI;
//! there is no retry or backoff.

use std::time::Duration;

use serde::Deserialize;
use tracing::debug;

use crate::error::Error;
use crate::filters::Filters;
use crate::models::Activity;

/// Production endpoint.
pub const DEFAULT_API_URL: &str = "https://www.boredapi.com";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Anything that can produce one activity for a filter. The UI is written
/// against this so tests can substitute a fake instead of the network.
#[allow(async_fn_in_trait)] // only consumed inside this binary
pub trait ActivitySource {
    async fn fetch(&self, filters: &Filters) -> Result<Activity, Error>;
}

/// The wire answer: a suggestion, or the API's "no match" shape.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ApiReply {
    Suggestion(Activity),
    NoMatch { error: String },
}

pub struct BoredClient {
    http: reqwest::Client,
    base_url: String,
}

impl BoredClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("unbored/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }
}

impl ActivitySource for BoredClient {
    async fn fetch(&self, filters: &Filters) -> Result<Activity, Error> {
        let url = format!("{}/api/activity", self.base_url);
        let params = filters.query_params();
        debug!(%url, ?params, "requesting activity");

        let response = self.http.get(&url).query(&params).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Network(format!("server answered {}", status)));
        }

        let body = response.text().await?;
        match serde_json::from_str::<ApiReply>(&body) {
            Ok(ApiReply::Suggestion(activity)) => {
                debug!(key = %activity.id(), "received suggestion");
                Ok(activity)
            }
            Ok(ApiReply::NoMatch { error }) => {
                debug!(%error, "no activity matched the filters");
                Err(Error::NoMatch)
            }
            Err(err) => Err(Error::Format(err.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::filters::RangeFilter;
    use crate::models::ActivityType;

    const JUGGLE: &str = r#"{"activity":"Learn to juggle","type":"recreational","participants":1,"price":0,"link":"","key":"4151544","accessibility":0.1}"#;

    async fn client_for(server: &MockServer) -> BoredClient {
        BoredClient::new(server.uri()).expect("client")
    }

    #[tokio::test]
    async fn fetch_decodes_a_suggestion() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/activity"))
            .respond_with(ResponseTemplate::new(200).set_body_string(JUGGLE))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let activity = client.fetch(&Filters::default()).await.expect("activity");
        assert_eq!(activity.activity, "Learn to juggle");
        assert_eq!(activity.kind, ActivityType::Recreational);
        assert!(!activity.has_link());
    }

    #[tokio::test]
    async fn fetch_forwards_filter_query_params() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/activity"))
            .and(query_param("type", "social"))
            .and(query_param("participants", "2"))
            .and(query_param("maxprice", "0.5"))
            .respond_with(ResponseTemplate::new(200).set_body_string(JUGGLE))
            .expect(1)
            .mount(&server)
            .await;

        let filters = Filters {
            kind: Some(ActivityType::Social),
            participants: Some(2),
            price: RangeFilter::new(None, Some(0.5)),
            ..Filters::default()
        };
        let client = client_for(&server).await;
        client.fetch(&filters).await.expect("activity");
    }

    #[tokio::test]
    async fn error_field_means_no_match() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"{"error":"No activity found with the specified parameters"}"#,
            ))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        match client.fetch(&Filters::default()).await {
            Err(Error::NoMatch) => {}
            other => panic!("expected NoMatch, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn undecodable_body_is_a_format_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>hello</html>"))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        match client.fetch(&Filters::default()).await {
            Err(Error::Format(_)) => {}
            other => panic!("expected Format, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn server_error_is_a_network_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        match client.fetch(&Filters::default()).await {
            Err(Error::Network(_)) => {}
            other => panic!("expected Network, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn refused_connection_is_a_network_error() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener); // release the port so the request fails outright

        let client = BoredClient::new(format!("http://{}", addr)).unwrap();
        match client.fetch(&Filters::default()).await {
            Err(Error::Network(_)) => {}
            other => panic!("expected Network, got {:?}", other),
        }
    }
}
