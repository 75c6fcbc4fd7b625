pub mod controller;
pub mod credentials;
pub mod interface;
pub mod middleware;
pub mod model;
pub mod routes;
pub mod schema;
pub mod service;

pub use routes::auth_routes;
