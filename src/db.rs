pub mod store;
pub use store::{MemoryStore, Record};
pub mod user_repo;
pub use user_repo::UserRepository;
pub mod user_type_repo;
pub use user_type_repo::UserTypeRepository;
pub mod company_repo;
pub use company_repo::CompanyRepository;
pub mod permission_repo;
pub use permission_repo::PermissionRepository;
