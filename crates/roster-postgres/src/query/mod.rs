//! Database query repositories.
//!
//! Repository traits are implemented directly for [`PgConnection`],
//! providing type-safe, high-level operations over the schema.
//!
//! [`PgConnection`]: crate::PgConnection

mod users;

pub use users::UserRepository;
