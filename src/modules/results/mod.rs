pub mod controller;
pub mod model;
pub mod router;
pub mod service;

pub use model::StudentResult;
pub use router::init_results_router;
