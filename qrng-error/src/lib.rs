use std::error::Error as StdError;
use std::fmt;
use std::io;
use tokio::time::error::Elapsed;
use csv::Error as CsvError;
use hyper::http::Error as HttpBuildError;
use hyper::http::uri::InvalidUri;
use hyper_util::client::legacy::Error as ClientError;
use serde_json::Error as JsonError;
use serde_yml::Error as YmlError;

/// QRNG 수집기의 모든 에러 타입을 정의합니다.
#[derive(Debug)]
pub enum QrngError {
    /// 설정 관련 에러
    Config(String),

    /// 파일 입출력 에러
    Io(io::Error),

    /// 전송 에러 (네트워크 실패, 비정상 HTTP 상태코드)
    Transport(String),

    /// API 로직 에러 (HTTP 는 성공했지만 success 가 false)
    ApiLogic(String),

    /// 타임아웃 에러
    Timeout(String),

    /// JSON 직렬화/역직렬화 에러
    Serialization(String),

    /// 출력 파일 기록 에러
    Storage(String),

    /// 내부 상태 관련 에러
    Internal(String),

    /// 기타 에러
    Other(String),
}

impl QrngError {
    /// 전송 계층 에러 여부 (타임아웃 포함)
    pub fn is_transport(&self) -> bool {
        matches!(self, QrngError::Transport(_) | QrngError::Timeout(_))
    }
}

impl fmt::Display for QrngError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QrngError::Config(msg) => write!(f, "설정 에러: {}", msg),
            QrngError::Io(err) => write!(f, "I/O 에러: {}", err),
            QrngError::Transport(msg) => write!(f, "전송 에러: {}", msg),
            QrngError::ApiLogic(msg) => write!(f, "API 에러: {}", msg),
            QrngError::Timeout(msg) => write!(f, "타임아웃 에러: {}", msg),
            QrngError::Serialization(msg) => write!(f, "직렬화 에러: {}", msg),
            QrngError::Storage(msg) => write!(f, "저장 에러: {}", msg),
            QrngError::Internal(msg) => write!(f, "내부 에러: {}", msg),
            QrngError::Other(msg) => write!(f, "기타 에러: {}", msg),
        }
    }
}

impl StdError for QrngError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            QrngError::Io(err) => Some(err),
            _ => None,
        }
    }
}

/// Result 타입 별칭 정의
pub type Result<T> = std::result::Result<T, QrngError>;

/// From 트레이트 구현으로 다양한 에러 타입을 QrngError로 변환
impl From<io::Error> for QrngError {
    fn from(err: io::Error) -> Self {
        QrngError::Io(err)
    }
}

impl From<Elapsed> for QrngError {
    fn from(err: Elapsed) -> Self {
        QrngError::Timeout(format!("요청 타임아웃: {}", err))
    }
}

impl From<ClientError> for QrngError {
    fn from(err: ClientError) -> Self {
        QrngError::Transport(format!("요청 실패: {}", err))
    }
}

impl From<hyper::Error> for QrngError {
    fn from(err: hyper::Error) -> Self {
        QrngError::Transport(format!("응답 수신 실패: {}", err))
    }
}

impl From<HttpBuildError> for QrngError {
    fn from(err: HttpBuildError) -> Self {
        QrngError::Internal(format!("요청 생성 실패: {}", err))
    }
}

impl From<InvalidUri> for QrngError {
    fn from(err: InvalidUri) -> Self {
        QrngError::Config(format!("엔드포인트 URI 파싱 에러: {}", err))
    }
}

impl From<JsonError> for QrngError {
    fn from(err: JsonError) -> Self {
        QrngError::Serialization(format!("JSON 에러: {}", err))
    }
}

impl From<CsvError> for QrngError {
    fn from(err: CsvError) -> Self {
        QrngError::Storage(format!("CSV 기록 에러: {}", err))
    }
}

impl From<YmlError> for QrngError {
    fn from(err: YmlError) -> Self {
        QrngError::Config(format!("YAML 파싱 에러: {}", err))
    }
}

impl From<String> for QrngError {
    fn from(err: String) -> Self {
        QrngError::Other(err)
    }
}

impl From<&str> for QrngError {
    fn from(err: &str) -> Self {
        QrngError::Other(err.to_string())
    }
}

/// 에러 처리 유틸리티 함수
pub fn config_err<E: fmt::Display>(err: E) -> QrngError {
    QrngError::Config(format!("{}", err))
}

pub fn transport_err<E: fmt::Display>(err: E) -> QrngError {
    QrngError::Transport(format!("{}", err))
}

pub fn api_err<E: fmt::Display>(err: E) -> QrngError {
    QrngError::ApiLogic(format!("{}", err))
}

pub fn storage_err<E: fmt::Display>(err: E) -> QrngError {
    QrngError::Storage(format!("{}", err))
}

pub fn internal_err<E: fmt::Display>(err: E) -> QrngError {
    QrngError::Internal(format!("{}", err))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_classification() {
        assert!(transport_err("503 Service Unavailable").is_transport());
        assert!(QrngError::Timeout("10s".to_string()).is_transport());
        assert!(!api_err("API returned success = false").is_transport());
        assert!(!storage_err("disk full").is_transport());
    }

    #[test]
    fn display_keeps_inner_message() {
        let err = api_err("API returned success = false");
        assert_eq!(err.to_string(), "API 에러: API returned success = false");
    }

    #[test]
    fn io_error_has_source() {
        let err: QrngError = io::Error::new(io::ErrorKind::NotFound, "missing").into();
        assert!(err.source().is_some());
        assert!(matches!(err, QrngError::Io(_)));
    }

    #[test]
    fn json_error_maps_to_serialization() {
        let err: QrngError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, QrngError::Serialization(_)));
    }
}
