use phrasing::{
    formatting::{self, Render},
    language::*,
};

/// Trait for AST types that can present themselves via a renderer
pub trait Present {
    /// Present this AST node using the given renderer
    fn present(&self, renderer: &dyn Render) -> String;
}

impl Present for Expression {
    fn present(&self, renderer: &dyn Render) -> String {
        formatting::render_expression(self, renderer)
    }
}

impl Present for Sequence {
    fn present(&self, renderer: &dyn Render) -> String {
        formatting::render_expression(&Expression::Sequence(self.clone()), renderer)
    }
}

impl Present for Sentence {
    fn present(&self, renderer: &dyn Render) -> String {
        formatting::render(self, renderer)
    }
}
