pub mod store;
pub mod update;

pub use store::{Store, StoreError};
pub use update::UpdateBuilder;
