//! HTML template rendering handlers.

mod create;
mod home;
mod login;
mod startup;
mod user;

pub use create::{create_form_handler, submit_handler};
pub use home::{home_handler, reset_handler};
pub use login::{login_handler, login_page_handler, logout_handler};
pub use startup::startup_handler;
pub use user::user_handler;
