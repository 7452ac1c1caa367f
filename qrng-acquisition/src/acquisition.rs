use log::{debug, error, info};

use qrng_client::SampleSource;
use qrng_config::Config;
use qrng_error::Result;
use qrng_sample::{RawSample, concatenate_uint64, request_timestamp};
use qrng_storage::{CsvTable, Generated, RequestLog, RequestLogEntry};

/// 수집 루프 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    /// n 번째 요청 진행
    Running(u32),
    /// n 번째 요청 성공 후 대기
    Sleeping(u32),
    /// 최대 요청 횟수 도달
    Completed,
    /// n 번째 요청 실패로 중단
    Halted(u32),
}

/// 수집 종료 사유
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    Completed,
    Halted { request_number: u32, error: String },
}

/// 수집 결과 요약
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub outcome: RunOutcome,
    pub requests_succeeded: u32,
}

/// QRNG 수집기
///
/// 요청 → 변환 → 저장 → 대기를 순차로 반복하고, 첫 실패에서 멈춘다.
pub struct Acquisition<S: SampleSource> {
    config: Config,
    source: S,
    raw_table: CsvTable,
    concat_table: CsvTable,
    request_log: RequestLog,
}

impl<S: SampleSource> Acquisition<S> {
    /// 새로운 수집기 인스턴스를 생성
    pub fn new(config: Config, source: S) -> Self {
        let raw_table = CsvTable::raw(config.raw_path.clone());
        let concat_table = CsvTable::concatenated(config.concat_path.clone());
        let request_log = RequestLog::new(config.log_path.clone());

        Self {
            config,
            source,
            raw_table,
            concat_table,
            request_log,
        }
    }

    /// 수집 실행
    ///
    /// 실패 로그 기록 자체가 실패한 경우에만 에러를 반환한다.
    pub async fn run(&self) -> Result<RunSummary> {
        let mut state = self.initial_state();
        let mut requests_succeeded = 0;
        let mut last_error = String::new();

        loop {
            debug!("수집 상태: {state:?}");
            state = match state {
                LoopState::Running(request_number) => {
                    // 실패 로그도 같은 타임스탬프를 사용
                    let timestamp = request_timestamp();

                    match self.acquire(request_number, &timestamp).await {
                        Ok(()) => {
                            requests_succeeded += 1;
                            println!("Request {request_number} successful");

                            if request_number >= self.config.max_requests {
                                LoopState::Completed
                            } else {
                                LoopState::Sleeping(request_number)
                            }
                        }
                        Err(e) => {
                            error!("요청 #{request_number} 실패: {e}");
                            last_error = e.to_string();
                            self.request_log.append(&RequestLogEntry::failed(
                                &timestamp,
                                request_number,
                                last_error.clone(),
                            ))?;

                            println!("Stopping early — failure on request {request_number}");
                            LoopState::Halted(request_number)
                        }
                    }
                }
                LoopState::Sleeping(request_number) => {
                    tokio::time::sleep(self.config.request_delay()).await;
                    LoopState::Running(request_number + 1)
                }
                LoopState::Completed => {
                    info!("수집 완료: {requests_succeeded}건");
                    return Ok(RunSummary {
                        outcome: RunOutcome::Completed,
                        requests_succeeded,
                    });
                }
                LoopState::Halted(request_number) => {
                    info!("수집 중단: 요청 #{request_number}");
                    return Ok(RunSummary {
                        outcome: RunOutcome::Halted {
                            request_number,
                            error: last_error,
                        },
                        requests_succeeded,
                    });
                }
            };
        }
    }

    fn initial_state(&self) -> LoopState {
        if self.config.max_requests == 0 {
            LoopState::Completed
        } else {
            LoopState::Running(1)
        }
    }

    /// 요청 1회: 조회, 변환, 세 출력 파일 기록
    async fn acquire(&self, request_number: u32, timestamp: &str) -> Result<()> {
        let values = self.source.fetch_uint16().await?;
        debug!("요청 #{request_number}: {}개 수신", values.len());

        let raw = RawSample::from_values(&values, timestamp);
        self.raw_table.append_raw(&raw)?;

        let concatenated = concatenate_uint64(&values, timestamp);
        self.concat_table.append_concatenated(&concatenated)?;

        self.request_log.append(&RequestLogEntry::success(
            timestamp,
            request_number,
            self.config.array_size,
            &self.config.value_type,
            Generated {
                uint16: raw.len(),
                uint64: concatenated.len(),
            },
        ))?;

        info!(
            "요청 #{request_number} 저장 완료 (uint16 {}개, uint64 {}개)",
            raw.len(),
            concatenated.len()
        );
        Ok(())
    }
}
