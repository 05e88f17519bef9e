//! Memory store adapters.

mod in_memory;
mod jsonl;

pub use in_memory::InMemoryMemoryStore;
pub use jsonl::JsonlMemoryStore;
