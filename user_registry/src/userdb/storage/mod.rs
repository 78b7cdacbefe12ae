mod config;
mod sqlite;
mod store_type;

pub(crate) use store_type::UserStore;
