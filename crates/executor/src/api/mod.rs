//! Typed API over the executor.
//!
//! ```text
//! let executor = Executor::new(RecordStore::new());
//! let records = executor.records(&inv);
//!
//! records.store("Qm123", "report.pdf")?;
//! for record in records.list()? {
//!     println!("{} {}", record.cid, record.file_name);
//! }
//! ```

mod records;

pub use records::Records;
