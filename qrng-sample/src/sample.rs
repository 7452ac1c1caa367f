use serde::{Deserialize, Serialize};

/// u16 값을 16자리 0 패딩 2진 문자열로 변환
pub fn to_binary16(value: u16) -> String {
    format!("{value:016b}")
}

/// API 에서 받은 원본 uint16 값
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawSample {
    pub uint16: u16,
    pub binary: String,
    pub timestamp: String,
}

impl RawSample {
    pub fn new(value: u16, timestamp: &str) -> Self {
        Self {
            uint16: value,
            binary: to_binary16(value),
            timestamp: timestamp.to_string(),
        }
    }

    /// 응답 순서 그대로 샘플 목록 생성
    pub fn from_values(values: &[u16], timestamp: &str) -> Vec<Self> {
        values.iter().map(|&v| Self::new(v, timestamp)).collect()
    }
}

/// uint16 4개를 이어붙인 uint64 값
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConcatenatedSample {
    pub number: u64,
    pub binary: String,
    pub timestamp: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binary16_is_padded_and_exact() {
        for v in [0u16, 1, 2, 255, 256, 0x8000, 0xABCD, u16::MAX] {
            let binary = to_binary16(v);
            assert_eq!(binary.len(), 16);
            assert_eq!(u16::from_str_radix(&binary, 2).unwrap(), v);
        }
        assert_eq!(to_binary16(5), "0000000000000101");
    }

    #[test]
    fn binary16_full_range() {
        assert!((0..=u16::MAX).all(|v| {
            let binary = to_binary16(v);
            binary.len() == 16 && u32::from_str_radix(&binary, 2).unwrap() == u32::from(v)
        }));
    }

    #[test]
    fn raw_samples_keep_order_and_timestamp() {
        let samples = RawSample::from_values(&[3, 1, 2], "2025-01-01T00:00:00.000000");
        let values: Vec<u16> = samples.iter().map(|s| s.uint16).collect();
        assert_eq!(values, vec![3, 1, 2]);
        assert!(samples.iter().all(|s| s.timestamp == "2025-01-01T00:00:00.000000"));
        assert_eq!(samples[0].binary, "0000000000000011");
    }
}
