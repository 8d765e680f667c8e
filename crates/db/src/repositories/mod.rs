//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods that
//! accept `&PgPool` as the first argument. Every call is bounded by the
//! 3-second query timeout in [`crate::error`].

pub mod actor_repo;
pub mod dorama_repo;
pub mod genre_repo;
pub mod permission_repo;
pub mod token_repo;
pub mod user_repo;

pub use actor_repo::ActorRepo;
pub use dorama_repo::DoramaRepo;
pub use genre_repo::GenreRepo;
pub use permission_repo::PermissionRepo;
pub use token_repo::TokenRepo;
pub use user_repo::UserRepo;
