use crate::templates;

#[tracing::instrument]
pub fn index() -> templates::Index {
    templates::Index
}

#[tracing::instrument]
pub fn contact() -> templates::Contact {
    templates::Contact::default()
}
