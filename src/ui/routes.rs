use warp::{Filter, Rejection, Reply};

use super::handlers;

/// All page routes of the site.
pub fn ui() -> impl Filter<Extract = impl Reply, Error = Rejection> + Clone {
    index()
        .or(contact())
        .with(warp::trace::request())
}

/// `GET /`
fn index() -> impl Filter<Extract = impl Reply, Error = Rejection> + Clone {
    warp::path::end().and(warp::get()).map(handlers::index)
}

/// `GET /contato`
fn contact() -> impl Filter<Extract = impl Reply, Error = Rejection> + Clone {
    warp::path!("contato").and(warp::get()).map(handlers::contact)
}
