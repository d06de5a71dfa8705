pub mod columns;
pub mod document;
pub mod memory;
pub mod relational;
pub mod repository;
pub mod state;
pub mod supabase;

pub use document::RedisDocumentRepository;
pub use memory::{MemoryRepository, MemoryStore};
pub use relational::RelationalRepository;
pub use repository::Repository;
#[cfg(any(test, feature = "mocks"))]
pub use repository::MockRepository;
pub use state::{AppState, Database};
