pub mod jwt;
pub mod request;
pub mod response;
pub mod telemetry;
pub mod update;
