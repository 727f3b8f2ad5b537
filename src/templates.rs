use askama::Template;

/// Name of the course shown on the contact page.
pub const COURSE: &str = "Geek University";

/// The home page. Rendered without any context values.
#[derive(Debug, PartialEq, Eq, Template)]
#[template(path = "index.html")]
pub struct Index;

/// The contact page.
#[derive(Debug, PartialEq, Eq, Template)]
#[template(path = "contato.html")]
pub struct Contact {
    pub curso: &'static str,
}

impl Default for Contact {
    fn default() -> Self {
        Self { curso: COURSE }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_index() {
        let html = Index.render().unwrap();

        assert!(html.contains("<title>Geek University</title>"));
        assert_eq!(Some("html"), Index::EXTENSION);
    }

    #[test]
    fn render_contact() {
        let page = Contact::default();
        assert_eq!("Geek University", page.curso);

        let html = page.render().unwrap();
        assert!(html.contains("<h1>Contato</h1>"));
        assert!(html.contains("Geek University"));
    }
}
