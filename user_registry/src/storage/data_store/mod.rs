mod config;
mod types;

pub(crate) use config::{GENERIC_DATA_STORE, check_data_store_url, override_data_store_url};
