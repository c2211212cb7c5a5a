pub mod users;
pub mod user_types;
pub mod companies;
pub mod permissions;
