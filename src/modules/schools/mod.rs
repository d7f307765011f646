pub mod model;
pub mod service;

pub use model::School;
pub use service::SchoolService;
