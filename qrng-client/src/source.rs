use async_trait::async_trait;

use qrng_error::Result;

/// uint16 난수 공급원
#[async_trait]
pub trait SampleSource: Send + Sync {
    /// 요청 한 번으로 uint16 배열 조회
    async fn fetch_uint16(&self) -> Result<Vec<u16>>;
}
