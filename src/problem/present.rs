use ftl::{
    formatting::{render, Render, SerializeError},
    language::*,
};

/// Trait for AST types that can present themselves via a renderer
pub trait Present {
    /// Present this AST node using the given renderer
    fn present(&self, renderer: &dyn Render) -> Result<String, SerializeError>;
}

impl Present for Body {
    fn present(&self, renderer: &dyn Render) -> Result<String, SerializeError> {
        render(renderer, self)
    }
}
