use crate::sample::{ConcatenatedSample, to_binary16};

/// uint64 하나를 만드는 uint16 개수
pub const GROUP_SIZE: usize = 4;

/// uint16 4개씩 묶어 uint64 로 결합
///
/// 4개 단위로 이동하며 마지막에 남는 4개 미만의 값은 버린다.
/// 다음 요청으로 이월하지 않는다.
pub fn concatenate_uint64(values: &[u16], timestamp: &str) -> Vec<ConcatenatedSample> {
    values
        .chunks_exact(GROUP_SIZE)
        .map(|chunk| {
            let binary: String = chunk.iter().map(|&v| to_binary16(v)).collect();
            let number = chunk
                .iter()
                .fold(0u64, |acc, &v| (acc << 16) | u64::from(v));

            ConcatenatedSample {
                number,
                binary,
                timestamp: timestamp.to_string(),
            }
        })
        .collect()
}
