pub mod auth;
pub mod results;
pub mod schools;

pub use self::auth::model::SchoolClaims;
pub use self::schools::model::School;
