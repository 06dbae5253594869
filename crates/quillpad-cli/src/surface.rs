use quillpad_engine::{ArticleField, ArticleInput, EditorSurface};

/// Form backed by command-line arguments.
#[derive(Debug, Default)]
pub struct ArgsSurface {
    input: ArticleInput,
    rendered: Option<String>,
}

impl ArgsSurface {
    pub fn rendered(&self) -> Option<&str> {
        self.rendered.as_deref()
    }
}

impl EditorSurface for ArgsSurface {
    fn field(&self, field: ArticleField) -> String {
        self.input.value(field).to_string()
    }

    fn set_field(&mut self, field: ArticleField, value: &str) {
        self.input.set_value(field, value);
    }

    fn set_rendered(&mut self, html: &str) {
        self.rendered = Some(html.to_string());
    }
}
