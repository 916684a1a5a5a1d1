pub mod check;
pub mod compose;
pub mod resolve;
pub mod routes;
