pub mod health;
pub mod teams;

pub use health::health;
pub use teams::{get_teams, handle_rejection, method_not_allowed};
