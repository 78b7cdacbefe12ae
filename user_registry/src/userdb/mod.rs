mod errors;
mod storage;
mod types;

pub use errors::UserError;
pub use types::UserRecord;

pub(crate) use storage::UserStore;
