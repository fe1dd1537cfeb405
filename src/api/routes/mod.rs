//! API route declarations

pub mod cafe_routes;
