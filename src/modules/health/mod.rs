pub mod controller;
pub mod crud;
pub mod interface;
pub mod routes;
pub mod service;

pub use routes::health_routes;
