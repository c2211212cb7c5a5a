pub mod user;
pub mod user_type;
pub mod company;
pub mod permission;
