pub mod error;
pub mod id;
pub mod record;
pub mod user;

pub use error::{AppError, RepositoryError};
pub use id::EntityId;
pub use record::{Record, Stored};
pub use user::{UpdateUserFields, UserFields};
