pub use self::routes::ui;

mod handlers;
mod routes;
