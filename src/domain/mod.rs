//! Domain layer containing the calculator's data model.
//!
//! The domain layer has no dependencies on the HTTP or CLI layers. Parsing and
//! arithmetic over these types live in [`crate::engine`].

pub mod entities;
