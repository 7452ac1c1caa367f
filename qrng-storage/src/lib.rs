pub mod table;
pub mod csv_table;
pub mod request_log;

pub use table::TableType;

pub use csv_table::{
    CsvTable,
    ensure_parent_dir,
};

pub use request_log::{
    Generated,
    RequestLog,
    RequestLogEntry,
    RequestOutcome,
};
