//! Template renderers.

mod handlebars;

pub use self::handlebars::HandlebarsRenderer;
