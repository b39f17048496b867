pub mod negotiation;
pub mod resource;
pub mod routes;
pub mod store;
