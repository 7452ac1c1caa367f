/// 출력 테이블 유형
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableType {
    Raw,
    Concatenated,
}

impl TableType {
    /// 테이블 이름 반환
    pub const fn get_name(self) -> &'static str {
        match self {
            TableType::Raw => "raw_qrng",
            TableType::Concatenated => "concatenated_qrng",
        }
    }

    /// 헤더 행
    pub const fn headers(self) -> [&'static str; 3] {
        match self {
            TableType::Raw => ["uint16", "binary", "timestamp"],
            TableType::Concatenated => ["number", "binary", "timestamp"],
        }
    }
}
