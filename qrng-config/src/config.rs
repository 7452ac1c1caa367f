use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use qrng_error::Result;

/// 수집기 설정
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// QRNG API 엔드포인트
    pub endpoint: String,
    /// `x-api-key` 헤더 값
    pub api_key: String,
    /// 요청당 값 개수
    pub array_size: usize,
    /// 요청 값 타입
    pub value_type: String,
    /// 요청 타임아웃(초)
    pub timeout_secs: u64,
    /// 최대 요청 횟수
    pub max_requests: u32,
    /// 요청 간 대기 시간(ms)
    pub request_delay_ms: u64,
    /// 원본 uint16 CSV 경로
    pub raw_path: PathBuf,
    /// uint64 결합 CSV 경로
    pub concat_path: PathBuf,
    /// 요청 로그 JSON 경로
    pub log_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// 기본설정으로 생성
    #[must_use]
    pub fn new() -> Self {
        Self {
            endpoint: "https://api.quantumnumbers.anu.edu.au".to_string(),
            api_key: "YOUR_API_KEY_HERE".to_string(),
            array_size: 1024,
            value_type: "uint16".to_string(),
            timeout_secs: 10,
            max_requests: 100,
            request_delay_ms: 1050, // 요청 제한 여유분 포함
            raw_path: PathBuf::from("raw_qrng_logs.csv"),
            concat_path: PathBuf::from("concatenated_qrng.csv"),
            log_path: PathBuf::from("api_request_logs.json"),
        }
    }

    /// 설정파일에서 설정 로드
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        let config = serde_yml::from_str(&contents)?;

        Ok(config)
    }

    /// 요청 간 대기 시간
    pub fn request_delay(&self) -> Duration {
        Duration::from_millis(self.request_delay_ms)
    }

    /// 요청 타임아웃
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_match_acquisition_constants() {
        let config = Config::new();
        assert_eq!(config.array_size, 1024);
        assert_eq!(config.value_type, "uint16");
        assert_eq!(config.max_requests, 100);
        assert_eq!(config.timeout(), Duration::from_secs(10));
        assert_eq!(config.request_delay(), Duration::from_millis(1050));
        assert_eq!(config.raw_path, PathBuf::from("raw_qrng_logs.csv"));
    }

    #[test]
    fn partial_yaml_falls_back_to_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "api_key: secret\nmax_requests: 3\nlog_path: out/log.json").unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.api_key, "secret");
        assert_eq!(config.max_requests, 3);
        assert_eq!(config.log_path, PathBuf::from("out/log.json"));
        assert_eq!(config.array_size, 1024);
        assert_eq!(config.endpoint, "https://api.quantumnumbers.anu.edu.au");
    }

    #[test]
    fn malformed_yaml_is_config_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "max_requests: [not, a, number]").unwrap();

        let err = Config::from_file(file.path()).unwrap_err();
        assert!(matches!(err, qrng_error::QrngError::Config(_)));
    }
}
