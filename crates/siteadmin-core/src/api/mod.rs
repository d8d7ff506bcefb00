//! Settings API client.
//!
//! The backend exposes a grouped read (`GET /api/settings?group=...`) and a
//! per-key upsert (`POST /api/settings`). There is no bulk write.

use crate::config::normalize_base_url;
use crate::error::{Error, Result};
use crate::models::SettingRecord;

const SETTINGS_ROUTE: &str = "/api/settings";

/// Backend operations the settings form depends on.
#[allow(async_fn_in_trait)]
pub trait SettingsApi {
    /// Reads every record of `group`.
    async fn fetch_group(&self, token: &str, group: &str) -> Result<Vec<SettingRecord>>;

    /// Creates or replaces a single record.
    async fn upsert(&self, token: &str, record: &SettingRecord) -> Result<()>;
}

impl<A: SettingsApi + ?Sized> SettingsApi for &A {
    async fn fetch_group(&self, token: &str, group: &str) -> Result<Vec<SettingRecord>> {
        (**self).fetch_group(token, group).await
    }

    async fn upsert(&self, token: &str, record: &SettingRecord) -> Result<()> {
        (**self).upsert(token, record).await
    }
}

/// HTTP client for the settings endpoints.
#[derive(Debug, Clone)]
pub struct SettingsClient {
    base_url: String,
    client: reqwest::Client,
}

impl SettingsClient {
    /// Builds a client for an explicit API base URL.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let base_url = normalize_base_url(base_url.into().as_str())?;
        let client = reqwest::Client::builder().build()?;
        Ok(Self { base_url, client })
    }

    /// Returns the base URL this client was configured with.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn settings_url(&self) -> String {
        format!("{}{}", self.base_url, SETTINGS_ROUTE)
    }
}

impl SettingsApi for SettingsClient {
    async fn fetch_group(&self, token: &str, group: &str) -> Result<Vec<SettingRecord>> {
        let response = self
            .client
            .get(self.settings_url())
            .query(&[("group", group)])
            .bearer_auth(token)
            .header("Accept", "application/json")
            .send()
            .await?;
        let response = ensure_success(response).await?;
        Ok(response.json::<Vec<SettingRecord>>().await?)
    }

    async fn upsert(&self, token: &str, record: &SettingRecord) -> Result<()> {
        let response = self
            .client
            .post(self.settings_url())
            .bearer_auth(token)
            .json(record)
            .send()
            .await?;
        ensure_success(response).await?;
        Ok(())
    }
}

async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response> {
    if response.status().is_success() {
        return Ok(response);
    }
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    Err(Error::Api {
        status,
        body: compact_text(&body),
    })
}

/// Truncate text to at most 180 characters for error messages.
fn compact_text(value: &str) -> String {
    value.trim().chars().take(180).collect()
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use pretty_assertions::assert_eq;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::{TcpListener, TcpStream};

    use super::*;

    #[derive(Debug, Clone)]
    struct RecordedRequest {
        method: String,
        target: String,
        headers: Vec<(String, String)>,
        body: String,
    }

    impl RecordedRequest {
        fn header(&self, name: &str) -> Option<&str> {
            self.headers
                .iter()
                .find(|(header, _)| header == name)
                .map(|(_, value)| value.as_str())
        }
    }

    type Recorded = Arc<Mutex<Vec<RecordedRequest>>>;

    /// Serves every connection with `status_line` and `body`, recording requests.
    async fn spawn_stub_server(status_line: &'static str, body: &'static str) -> (String, Recorded) {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind test server");
        let address = listener.local_addr().expect("local address");
        let recorded: Recorded = Arc::new(Mutex::new(Vec::new()));
        let sink = recorded.clone();

        tokio::spawn(async move {
            while let Ok((mut socket, _)) = listener.accept().await {
                let sink = sink.clone();
                tokio::spawn(async move {
                    if let Some(request) = read_request(&mut socket).await {
                        sink.lock().unwrap().push(request);
                    }
                    let response = format!(
                        "HTTP/1.1 {status_line}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                        body.len(),
                        body
                    );
                    let _ = socket.write_all(response.as_bytes()).await;
                    let _ = socket.shutdown().await;
                });
            }
        });

        (format!("http://{address}"), recorded)
    }

    async fn read_request(socket: &mut TcpStream) -> Option<RecordedRequest> {
        let mut buffer = Vec::new();
        let mut chunk = [0_u8; 1024];
        let header_end = loop {
            let read = socket.read(&mut chunk).await.ok()?;
            if read == 0 {
                return None;
            }
            buffer.extend_from_slice(&chunk[..read]);
            if let Some(position) = buffer.windows(4).position(|window| window == b"\r\n\r\n") {
                break position + 4;
            }
        };

        let head = String::from_utf8_lossy(&buffer[..header_end]).to_string();
        let mut lines = head.split("\r\n");
        let mut request_line = lines.next()?.split_whitespace();
        let method = request_line.next()?.to_string();
        let target = request_line.next()?.to_string();
        let headers: Vec<(String, String)> = lines
            .filter_map(|line| line.split_once(':'))
            .map(|(name, value)| (name.trim().to_ascii_lowercase(), value.trim().to_string()))
            .collect();
        let content_length = headers
            .iter()
            .find(|(name, _)| name == "content-length")
            .and_then(|(_, value)| value.parse::<usize>().ok())
            .unwrap_or(0);

        while buffer.len() < header_end + content_length {
            let read = socket.read(&mut chunk).await.ok()?;
            if read == 0 {
                break;
            }
            buffer.extend_from_slice(&chunk[..read]);
        }
        let body_end = buffer.len().min(header_end + content_length);
        let body = String::from_utf8_lossy(&buffer[header_end..body_end]).to_string();

        Some(RecordedRequest {
            method,
            target,
            headers,
            body,
        })
    }

    #[test]
    fn new_rejects_invalid_base_url() {
        assert!(SettingsClient::new("admin.example.com").is_err());
        assert_eq!(
            SettingsClient::new("https://admin.example.com/")
                .unwrap()
                .base_url(),
            "https://admin.example.com"
        );
    }

    #[tokio::test]
    async fn fetch_group_sends_bearer_token_and_group_query() {
        let (base_url, recorded) = spawn_stub_server(
            "200 OK",
            r#"[{"key":"site_name","value":"Acme"},{"group":"general","key":"email","value":"a@b.com"}]"#,
        )
        .await;
        let client = SettingsClient::new(base_url).unwrap();

        let records = client.fetch_group("secret", "general").await.unwrap();

        assert_eq!(
            records,
            vec![
                SettingRecord {
                    group: None,
                    key: "site_name".to_string(),
                    value: "Acme".to_string(),
                },
                SettingRecord::new("general", "email", "a@b.com"),
            ]
        );
        let requests = recorded.lock().unwrap().clone();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, "GET");
        assert_eq!(requests[0].target, "/api/settings?group=general");
        assert_eq!(requests[0].header("authorization"), Some("Bearer secret"));
    }

    #[tokio::test]
    async fn fetch_group_surfaces_http_failure() {
        let (base_url, _) = spawn_stub_server("401 Unauthorized", r#"{"error":"expired"}"#).await;
        let client = SettingsClient::new(base_url).unwrap();

        let error = client.fetch_group("stale", "general").await.unwrap_err();
        assert!(matches!(error, Error::Api { status: 401, .. }));
        assert!(error.to_string().contains("HTTP 401"));
    }

    #[tokio::test]
    async fn fetch_group_rejects_malformed_json() {
        let (base_url, _) = spawn_stub_server("200 OK", "<html>not json</html>").await;
        let client = SettingsClient::new(base_url).unwrap();

        let error = client.fetch_group("secret", "general").await.unwrap_err();
        assert!(matches!(error, Error::Http(_)));
    }

    #[tokio::test]
    async fn upsert_posts_json_record() {
        let (base_url, recorded) = spawn_stub_server("200 OK", "{}").await;
        let client = SettingsClient::new(base_url).unwrap();

        client
            .upsert(
                "secret",
                &SettingRecord::new("general", "homepage_template", "category"),
            )
            .await
            .unwrap();

        let requests = recorded.lock().unwrap().clone();
        assert_eq!(requests.len(), 1);
        let request = &requests[0];
        assert_eq!(request.method, "POST");
        assert_eq!(request.target, "/api/settings");
        assert_eq!(request.header("authorization"), Some("Bearer secret"));
        assert_eq!(request.header("content-type"), Some("application/json"));
        let body: serde_json::Value = serde_json::from_str(&request.body).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "group": "general",
                "key": "homepage_template",
                "value": "category",
            })
        );
    }

    #[tokio::test]
    async fn upsert_surfaces_server_rejection() {
        let (base_url, _) =
            spawn_stub_server("422 Unprocessable Entity", r#"{"error":"invalid email"}"#).await;
        let client = SettingsClient::new(base_url).unwrap();

        let error = client
            .upsert("secret", &SettingRecord::new("general", "email", "nope"))
            .await
            .unwrap_err();
        match error {
            Error::Api { status, body } => {
                assert_eq!(status, 422);
                assert!(body.contains("invalid email"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
