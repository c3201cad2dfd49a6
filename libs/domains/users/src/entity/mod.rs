//! Sea-ORM entities for `users` and `favorites`

pub mod favorite;
pub mod user;
