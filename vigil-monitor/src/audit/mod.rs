//! Audit sinks: durable JSONL on disk, in-memory for tests and embedding.

pub mod jsonl;
pub mod memory;

pub use jsonl::JsonlAuditSink;
pub use memory::MemoryAuditSink;
