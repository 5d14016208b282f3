//! Model to entity mappers
//!
//! `From<Model> for Entity` where the conversion cannot fail, `TryFrom` where
//! a column holds a value the domain may reject.

mod transaction;
mod user;
