//! DTOs shared between the admin panel frontend and the orders backend.

pub mod domain;
pub mod enums;
