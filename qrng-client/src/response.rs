use serde::Deserialize;
use serde_json::Value;

use qrng_error::{QrngError, Result, api_err};

/// QRNG API 응답
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ApiResponse {
    /// success 확인 후 data 배열 반환
    ///
    /// 길이는 검사하지 않는다.
    pub fn into_data(self) -> Result<Vec<u16>> {
        if !self.success {
            return Err(match self.message {
                Some(msg) => api_err(format!("API returned success = false ({msg})")),
                None => api_err("API returned success = false"),
            });
        }

        let data = self
            .data
            .ok_or_else(|| QrngError::ApiLogic("API response has no data".to_string()))?;

        Ok(serde_json::from_value(data)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> Result<Vec<u16>> {
        serde_json::from_str::<ApiResponse>(body)?.into_data()
    }

    #[test]
    fn success_passes_data_through() {
        let data = parse(r#"{"success": true, "type": "uint16", "length": 3, "data": [0, 7, 65535]}"#).unwrap();
        assert_eq!(data, vec![0, 7, 65535]);
    }

    #[test]
    fn length_is_not_checked() {
        let data = parse(r#"{"success": true, "data": [1]}"#).unwrap();
        assert_eq!(data.len(), 1);
    }

    #[test]
    fn success_false_is_api_error() {
        let err = parse(r#"{"success": false}"#).unwrap_err();
        assert!(matches!(err, QrngError::ApiLogic(_)));
        assert!(err.to_string().contains("API returned success = false"));
    }

    #[test]
    fn missing_success_is_api_error() {
        let err = parse(r#"{"data": [1, 2, 3, 4]}"#).unwrap_err();
        assert!(matches!(err, QrngError::ApiLogic(_)));
    }

    #[test]
    fn message_is_kept() {
        let err = parse(r#"{"success": false, "message": "Limit exceeded"}"#).unwrap_err();
        assert!(err.to_string().contains("Limit exceeded"));
    }

    #[test]
    fn out_of_range_value_fails_to_decode() {
        let err = parse(r#"{"success": true, "data": [70000]}"#).unwrap_err();
        assert!(matches!(err, QrngError::Serialization(_)));
    }
}
