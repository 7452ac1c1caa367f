use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use qrng_error::{QrngError, Result};

use crate::csv_table::ensure_parent_dir;

/// 요청별 생성 개수
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Generated {
    pub uint16: usize,
    pub uint64: usize,
}

/// 요청 결과
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum RequestOutcome {
    Success {
        length: usize,
        #[serde(rename = "type")]
        value_type: String,
        generated: Generated,
    },
    Failed {
        error: String,
    },
}

/// 요청 로그 한 건
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestLogEntry {
    pub timestamp: String,
    pub request_number: u32,
    #[serde(flatten)]
    pub outcome: RequestOutcome,
}

impl RequestLogEntry {
    pub fn success(
        timestamp: &str,
        request_number: u32,
        length: usize,
        value_type: &str,
        generated: Generated,
    ) -> Self {
        Self {
            timestamp: timestamp.to_string(),
            request_number,
            outcome: RequestOutcome::Success {
                length,
                value_type: value_type.to_string(),
                generated,
            },
        }
    }

    pub fn failed(timestamp: &str, request_number: u32, error: String) -> Self {
        Self {
            timestamp: timestamp.to_string(),
            request_number,
            outcome: RequestOutcome::Failed { error },
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self.outcome, RequestOutcome::Success { .. })
    }
}

/// JSON 배열 요청 로그
///
/// 추가할 때마다 전체 배열을 읽고 다시 쓴다. 한 프로세스만 쓴다고 가정한다.
#[derive(Debug, Clone)]
pub struct RequestLog {
    path: PathBuf,
}

impl RequestLog {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 로그 추가, 추가 후 전체 건수 반환
    pub fn append(&self, entry: &RequestLogEntry) -> Result<usize> {
        let mut logs = self.load()?;
        logs.push(serde_json::to_value(entry)?);

        ensure_parent_dir(&self.path)?;
        let mut writer = BufWriter::new(File::create(&self.path)?);
        serde_json::to_writer_pretty(&mut writer, &logs)?;
        writer.flush()?;

        debug!(
            "요청 로그 기록: #{} ({}건)",
            entry.request_number,
            logs.len()
        );
        Ok(logs.len())
    }

    /// 기록된 로그 조회
    pub fn entries(&self) -> Result<Vec<RequestLogEntry>> {
        self.load()?
            .into_iter()
            .map(|v| serde_json::from_value(v).map_err(QrngError::from))
            .collect()
    }

    // 기존 항목은 형식 검사 없이 그대로 보존
    fn load(&self) -> Result<Vec<Value>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let reader = BufReader::new(File::open(&self.path)?);
        Ok(serde_json::from_reader(reader)?)
    }
}
