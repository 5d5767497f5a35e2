//! Entity to model mappers
//!
//! `From<Model> for Entity` conversions from database rows to domain objects.

mod album;
mod message;
mod song;
mod user;
