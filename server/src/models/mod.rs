// trolley_api/src/models/mod.rs

//! Request/response shapes and database rows for users and items.
//! Cart documents live in the `trolley` crate.

pub mod item;
pub mod user;

pub use item::{Item, ItemPatch, NewItem};
pub use user::{Credentials, NewUser, User, UserDto, UserName};
