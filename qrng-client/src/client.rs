use std::time::Duration;

use async_trait::async_trait;
use http_body_util::{BodyExt, Empty};
use hyper::body::Bytes;
use hyper::http::uri::PathAndQuery;
use hyper::{Method, Request, Uri};
use hyper_rustls::{HttpsConnector, HttpsConnectorBuilder};
use hyper_util::client::legacy::Client as HyperClient;
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::rt::TokioExecutor;
use log::{debug, error};

use qrng_config::Config;
use qrng_error::{QrngError, Result, config_err};

use crate::response::ApiResponse;
use crate::source::SampleSource;

/// API 키 헤더
const API_KEY_HEADER: &str = "x-api-key";

/// 요청 URI 생성 (`length`, `type` 쿼리 추가)
pub fn request_uri(endpoint: &str, length: usize, value_type: &str) -> Result<Uri> {
    let base: Uri = endpoint.parse()?;
    if base.scheme().is_none() || base.authority().is_none() {
        return Err(config_err(format!("절대 URI 가 아닙니다: {endpoint}")));
    }

    let path = match base.path() {
        "" => "/",
        p => p,
    };
    let query = match base.query() {
        Some(q) if !q.is_empty() => format!("{q}&length={length}&type={value_type}"),
        _ => format!("length={length}&type={value_type}"),
    };
    let path_and_query: PathAndQuery = format!("{path}?{query}").parse()?;

    let mut parts = base.into_parts();
    parts.path_and_query = Some(path_and_query);
    Uri::from_parts(parts).map_err(config_err)
}

/// QRNG API 클라이언트
pub struct QrngClient {
    /// HTTP/HTTPS 클라이언트
    client: HyperClient<HttpsConnector<HttpConnector>, Empty<Bytes>>,
    uri: Uri,
    api_key: String,
    timeout: Duration,
}

impl QrngClient {
    /// 새로운 클라이언트 인스턴스를 생성
    pub fn new(config: &Config) -> Result<Self> {
        let uri = request_uri(&config.endpoint, config.array_size, &config.value_type)?;

        // HTTP 커넥터 설정
        let mut connector = HttpConnector::new();
        connector.enforce_http(false); // https 스킴 허용
        connector.set_connect_timeout(Some(config.timeout()));
        connector.set_nodelay(true); // TCP_NODELAY 활성화

        // TLS 커넥터 (http 엔드포인트도 허용)
        let https = HttpsConnectorBuilder::new()
            .with_webpki_roots()
            .https_or_http()
            .enable_http1()
            .wrap_connector(connector);

        let client = HyperClient::builder(TokioExecutor::new())
            .pool_idle_timeout(Duration::from_secs(30)) // 유휴 연결 타임아웃
            .build(https);

        Ok(Self {
            client,
            uri,
            api_key: config.api_key.clone(),
            timeout: config.timeout(),
        })
    }

    /// 요청 타임아웃 변경
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn uri(&self) -> &Uri {
        &self.uri
    }

    /// uint16 배열 요청 (타임아웃 적용)
    pub async fn fetch(&self) -> Result<Vec<u16>> {
        match tokio::time::timeout(self.timeout, self.request()).await {
            Ok(result) => result,
            Err(e) => {
                error!("QRNG 요청 타임아웃: {:?}", self.timeout);
                Err(e.into())
            }
        }
    }

    async fn request(&self) -> Result<Vec<u16>> {
        let req = Request::builder()
            .method(Method::GET)
            .uri(self.uri.clone())
            .header(API_KEY_HEADER, &self.api_key)
            .body(Empty::<Bytes>::new())?;
        debug!("QRNG 요청: {}", self.uri);

        let response = self.client.request(req).await?;
        let status = response.status();
        debug!("응답코드: {status}");

        if !status.is_success() {
            error!("QRNG 요청 실패: {status}");
            return Err(QrngError::Transport(format!("HTTP 상태코드 {status}")));
        }

        let body = response.into_body().collect().await?.to_bytes();
        let envelope: ApiResponse = serde_json::from_slice(&body)?;
        envelope.into_data()
    }
}

#[async_trait]
impl SampleSource for QrngClient {
    async fn fetch_uint16(&self) -> Result<Vec<u16>> {
        self.fetch().await
    }
}
