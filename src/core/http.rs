use std::time::Duration;

use futures::future::BoxFuture;
use reqwest::{
    header::{
        CONTENT_TYPE,
        USER_AGENT,
    },
    Client,
};

use super::{
    config::Endpoints,
    models::ErrorBody,
    AnalyseError,
    AnalysisRequest,
    AnalysisResult,
    SaynameError,
};

const USER_AGENT_VALUE: &str = concat!("sayname/", env!("CARGO_PKG_VERSION"), " (+reqwest)");

/// Status line and body text of a finished exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The analysis service as seen by the client. Futures own everything they
/// need so they can be raced against a timer and dropped.
pub trait AnalysisTransport: Send + Sync {
    fn post_analyse(
        &self,
        request: &AnalysisRequest,
    ) -> BoxFuture<'static, Result<RawResponse, AnalyseError>>;

    fn get_health(&self) -> BoxFuture<'static, Result<RawResponse, AnalyseError>>;
}

pub fn http_client() -> Result<Client, SaynameError> {
    Ok(Client::builder().connect_timeout(Duration::from_secs(10)).build()?)
}

pub struct HttpTransport {
    client: Client,
    endpoints: Endpoints,
}

impl HttpTransport {
    pub fn new(client: Client, endpoints: Endpoints) -> Self {
        Self { client, endpoints }
    }

    pub fn from_api_base(api_base: &str) -> Result<Self, SaynameError> {
        Ok(Self::new(http_client()?, Endpoints::resolve(api_base)?))
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }
}

impl AnalysisTransport for HttpTransport {
    fn post_analyse(
        &self,
        request: &AnalysisRequest,
    ) -> BoxFuture<'static, Result<RawResponse, AnalyseError>> {
        let builder = self
            .client
            .post(self.endpoints.analyse.clone())
            .header(USER_AGENT, USER_AGENT_VALUE)
            .header(CONTENT_TYPE, "application/json")
            .json(request);

        Box::pin(async move {
            let response = builder.send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(RawResponse { status, body })
        })
    }

    fn get_health(&self) -> BoxFuture<'static, Result<RawResponse, AnalyseError>> {
        let builder =
            self.client.get(self.endpoints.health.clone()).header(USER_AGENT, USER_AGENT_VALUE);

        Box::pin(async move {
            let response = builder.send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(RawResponse { status, body })
        })
    }
}

/// Maps a finished exchange onto the outcome the UI shows.
pub fn interpret_response(response: &RawResponse) -> Result<AnalysisResult, AnalyseError> {
    if response.is_success() {
        return serde_json::from_str::<AnalysisResult>(&response.body)
            .map_err(|e| AnalyseError::InvalidBody(e.to_string()));
    }

    let detail = serde_json::from_str::<ErrorBody>(&response.body)
        .ok()
        .and_then(|body| body.message().map(str::to_string));

    Err(match detail {
        Some(detail) => AnalyseError::Server { status: response.status, detail },
        None => AnalyseError::Failed { status: response.status },
    })
}

/// Sends one analysis request and waits at most `timeout` for the whole
/// exchange. When the timer wins, the request future is dropped, so a late
/// response can never be reported.
pub async fn analyse_name(
    transport: &dyn AnalysisTransport,
    request: &AnalysisRequest,
    timeout: Duration,
) -> Result<AnalysisResult, AnalyseError> {
    match tokio::time::timeout(timeout, transport.post_analyse(request)).await {
        Err(_) => Err(AnalyseError::Timeout(timeout)),
        Ok(Err(error)) => Err(error),
        Ok(Ok(response)) => interpret_response(&response),
    }
}

pub async fn check_health(transport: &dyn AnalysisTransport, timeout: Duration) -> bool {
    matches!(
        tokio::time::timeout(timeout, transport.get_health()).await,
        Ok(Ok(response)) if response.is_success()
    )
}


#[cfg(test)]
mod tests {
    use tokio::{
        io::{
            AsyncReadExt,
            AsyncWriteExt,
        },
        net::TcpListener,
    };

    use super::{
        testing::MockTransport,
        *,
    };

    const SMITH: &str = r#"{"name":"Smith","language":"English","ipa":"/smɪθ/","macquarie":"smith"}"#;

    fn request(name: &str) -> AnalysisRequest {
        AnalysisRequest::new(name).unwrap()
    }

    #[test]
    fn test_interpret_success() {
        let result = interpret_response(&RawResponse::new(200, SMITH)).unwrap();
        assert_eq!(result.name, "Smith");
        assert_eq!(result.macquarie.as_deref(), Some("smith"));
    }

    #[test]
    fn test_interpret_structured_error() {
        let error = interpret_response(&RawResponse::new(400, r#"{"detail":"bad name"}"#));
        assert_eq!(error, Err(AnalyseError::Server { status: 400, detail: "bad name".into() }));
    }

    #[test]
    fn test_interpret_unstructured_errors() {
        let html = interpret_response(&RawResponse::new(500, "<html>Internal Server Error</html>"));
        assert_eq!(html, Err(AnalyseError::Failed { status: 500 }));

        let other_shape = interpret_response(&RawResponse::new(500, r#"{"error":"boom"}"#));
        assert_eq!(other_shape, Err(AnalyseError::Failed { status: 500 }));

        let validation = interpret_response(&RawResponse::new(
            422,
            r#"{"detail":[{"loc":["body","name"],"msg":"field required"}]}"#,
        ));
        assert_eq!(validation, Err(AnalyseError::Failed { status: 422 }));

        let empty = interpret_response(&RawResponse::new(502, ""));
        assert_eq!(empty.unwrap_err().to_string(), "Failed to analyse name");
    }

    #[test]
    fn test_interpret_unreadable_success_body() {
        let error = interpret_response(&RawResponse::new(200, "not json")).unwrap_err();
        assert!(matches!(error, AnalyseError::InvalidBody(_)));
    }

    #[tokio::test]
    async fn test_analyse_name_success() {
        let mock = MockTransport::ok(SMITH);
        let result = analyse_name(&mock, &request("Smith"), Duration::from_secs(30)).await;
        assert_eq!(result.map(|r| r.ipa), Ok("/smɪθ/".to_string()));
        assert_eq!(mock.names.lock().unwrap().as_slice(), &["Smith".to_string()]);
    }

    #[tokio::test]
    async fn test_transport_error_passes_through() {
        let mock = MockTransport::replying(Err(AnalyseError::Transport("connection refused".into())));
        let error = analyse_name(&mock, &request("Smith"), Duration::from_secs(30)).await;
        assert_eq!(error.unwrap_err().to_string(), "connection refused");
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeout_wins_over_late_success() {
        let mock = MockTransport::ok(SMITH).with_delay(Duration::from_secs(45));
        let error = analyse_name(&mock, &request("Smith"), Duration::from_secs(30)).await;

        assert_eq!(error, Err(AnalyseError::Timeout(Duration::from_secs(30))));
        assert!(error.unwrap_err().to_string().starts_with("Request timed out"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_response_inside_deadline() {
        let mock = MockTransport::ok(SMITH).with_delay(Duration::from_secs(29));
        let result = analyse_name(&mock, &request("Smith"), Duration::from_secs(30)).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_check_health() {
        let healthy = MockTransport::ok(r#"{"status":"healthy"}"#);
        assert!(check_health(&healthy, Duration::from_secs(5)).await);

        let down = MockTransport::replying(Err(AnalyseError::Transport("refused".into())));
        assert!(!check_health(&down, Duration::from_secs(5)).await);

        let erroring = MockTransport::replying(Ok(RawResponse::new(503, "")));
        assert!(!check_health(&erroring, Duration::from_secs(5)).await);
    }

    /// Serves exactly one canned HTTP response and returns the raw request.
    async fn serve_once(
        status_line: &'static str,
        body: &'static str,
    ) -> (String, tokio::task::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = format!("http://{}/api", listener.local_addr().unwrap());

        let server = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut received = Vec::new();
            let mut buffer = [0u8; 1024];

            loop {
                let n = socket.read(&mut buffer).await.unwrap();
                if n == 0 {
                    break;
                }
                received.extend_from_slice(&buffer[..n]);

                let text = String::from_utf8_lossy(&received).to_string();
                if let Some(header_end) = text.find("\r\n\r\n") {
                    let content_length = text[..header_end]
                        .lines()
                        .find_map(|line| {
                            let (name, value) = line.split_once(':')?;
                            name.eq_ignore_ascii_case("content-length")
                                .then(|| value.trim().parse::<usize>().ok())
                                .flatten()
                        })
                        .unwrap_or(0);
                    if received.len() >= header_end + 4 + content_length {
                        break;
                    }
                }
            }

            let response = format!(
                "{}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();

            String::from_utf8_lossy(&received).to_string()
        });

        (address, server)
    }

    fn local_transport(api_base: &str) -> HttpTransport {
        let client = Client::builder().no_proxy().build().unwrap();
        HttpTransport::new(client, Endpoints::resolve(api_base).unwrap())
    }

    #[tokio::test]
    async fn test_http_transport_posts_json() {
        let (api_base, server) = serve_once("HTTP/1.1 200 OK", SMITH).await;
        let transport = local_transport(&api_base);

        let result = analyse_name(&transport, &request(" Smith "), Duration::from_secs(30)).await;
        assert_eq!(result.map(|r| r.name), Ok("Smith".to_string()));

        let raw_request = server.await.unwrap();
        assert!(raw_request.starts_with("POST /api/analyse HTTP/1.1"));
        assert!(raw_request.to_ascii_lowercase().contains("content-type: application/json"));
        assert!(raw_request.ends_with(r#"{"name":"Smith"}"#));
    }

    #[tokio::test]
    async fn test_http_transport_reports_detail() {
        let (api_base, server) =
            serve_once("HTTP/1.1 400 Bad Request", r#"{"detail":"Name cannot be empty"}"#).await;
        let transport = local_transport(&api_base);

        let error = analyse_name(&transport, &request("x"), Duration::from_secs(30)).await;
        assert_eq!(error.unwrap_err().to_string(), "Name cannot be empty");
        server.await.unwrap();
    }
}
