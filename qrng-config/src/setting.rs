use std::path::Path;

use log::{info, warn};
use once_cell::sync::Lazy;

use qrng_error::{QrngError, Result};

use crate::config::Config;

/// 설정파일 경로 (QRNG_CONFIG 로 변경 가능)
static CONFIG_PATH: Lazy<String> = Lazy::new(|| {
    std::env::var("QRNG_CONFIG").unwrap_or_else(|_| "config.yml".to_string())
});

/// API 키 환경변수
const API_KEY_ENV: &str = "QRNG_API_KEY";

/// 통합 세팅 인스턴스
pub struct Settings {
    pub qrng: Config,
}

impl Settings {
    /// Setting 생성
    pub fn new() -> Result<Self> {
        let mut qrng = Self::load_config(CONFIG_PATH.as_str())?;
        Self::apply_env(&mut qrng, std::env::var(API_KEY_ENV).ok());

        Ok(Self { qrng })
    }

    /// 수집기 설정 로드
    fn load_config(path: &str) -> Result<Config> {
        // yml 파일 유무 확인
        if Path::new(path).exists() {
            info!("설정파일 로드: {path}");
            match Config::from_file(path) {
                Ok(config) => Ok(config),
                Err(e) => Err(QrngError::Config(format!("설정파일 로드 실패: {}", e))),
            }
        } else {
            // 기본설정사용
            info!("기본설정 사용");
            Ok(Config::new())
        }
    }

    /// 환경변수 덮어쓰기
    fn apply_env(config: &mut Config, api_key: Option<String>) {
        match api_key {
            Some(key) if !key.is_empty() => {
                info!("{API_KEY_ENV} 환경변수의 API 키 사용");
                config.api_key = key;
            }
            _ => {
                if config.api_key == Config::new().api_key {
                    warn!("API 키가 설정되지 않았습니다 ({API_KEY_ENV} 또는 config.yml)");
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.yml");

        let config = Settings::load_config(path.to_str().unwrap()).unwrap();
        assert_eq!(config.max_requests, 100);
    }

    #[test]
    fn broken_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "array_size: -1").unwrap();

        let err = Settings::load_config(path.to_str().unwrap()).unwrap_err();
        assert!(err.to_string().contains("설정파일 로드 실패"));
    }

    #[test]
    fn env_key_overrides_file_key() {
        let mut config = Config::new();
        Settings::apply_env(&mut config, Some("from-env".to_string()));
        assert_eq!(config.api_key, "from-env");

        Settings::apply_env(&mut config, Some(String::new()));
        assert_eq!(config.api_key, "from-env");

        Settings::apply_env(&mut config, None);
        assert_eq!(config.api_key, "from-env");
    }
}
