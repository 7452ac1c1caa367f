use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

use csv::WriterBuilder;
use log::{debug, info};
use serde::Serialize;

use qrng_error::Result;
use qrng_sample::{ConcatenatedSample, RawSample};

use crate::table::TableType;

/// 상위 디렉토리 확인 및 생성
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() && !dir.exists() {
            fs::create_dir_all(dir)?;
            info!("디렉토리 생성: {}", dir.display());
        }
    }
    Ok(())
}

/// append 전용 CSV 테이블
#[derive(Debug, Clone)]
pub struct CsvTable {
    path: PathBuf,
    table: TableType,
}

impl CsvTable {
    pub fn new<P: Into<PathBuf>>(path: P, table: TableType) -> Self {
        Self {
            path: path.into(),
            table,
        }
    }

    /// 원본 uint16 테이블
    pub fn raw<P: Into<PathBuf>>(path: P) -> Self {
        Self::new(path, TableType::Raw)
    }

    /// uint64 결합 테이블
    pub fn concatenated<P: Into<PathBuf>>(path: P) -> Self {
        Self::new(path, TableType::Concatenated)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn append_raw(&self, samples: &[RawSample]) -> Result<usize> {
        self.append(samples)
    }

    pub fn append_concatenated(&self, samples: &[ConcatenatedSample]) -> Result<usize> {
        self.append(samples)
    }

    /// 행 추가
    ///
    /// 파일이 없을 때만 헤더를 쓴다. writer 는 반환 전에 flush 되고
    /// 스코프를 벗어나면서 파일이 닫힌다.
    fn append<T: Serialize>(&self, rows: &[T]) -> Result<usize> {
        ensure_parent_dir(&self.path)?;

        let exists = self.path.exists();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);

        if !exists {
            debug!("{} 헤더 기록: {}", self.table.get_name(), self.path.display());
            writer.write_record(self.table.headers())?;
        }

        for row in rows {
            writer.serialize(row)?;
        }
        writer.flush()?;

        debug!("{} {}행 추가", self.table.get_name(), rows.len());
        Ok(rows.len())
    }
}
