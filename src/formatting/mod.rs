//! Render compiled sentences back into template syntax

mod formatter;
mod syntax;
mod terminal;

pub use formatter::*;
pub use syntax::*;
pub use terminal::Terminal;
