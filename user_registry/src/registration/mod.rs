mod errors;
mod listing;
mod users;

pub use errors::RegistrationError;
pub use listing::{display_users, write_user_list, write_user_list_json};
pub use users::{add_user, authenticate_user, create_db, get_user, list_users};
