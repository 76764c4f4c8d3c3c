//! Handlebars renderer for the Reactium component template set.

use handlebars::Handlebars;
use tracing::{instrument, trace};

use arcgen_core::{
    application::{ApplicationError, ports::TemplateRenderer},
    domain::TemplateContext,
    error::ArcgenResult,
};

/// Renders `.hbs` sources against a [`TemplateContext`].
///
/// Templates are compiled per call; a template set is a handful of small
/// files rendered once each.
pub struct HandlebarsRenderer {
    registry: Handlebars<'static>,
}

impl HandlebarsRenderer {
    /// Create a renderer with HTML escaping on and strict mode off, so a
    /// template may reference fields that are absent for the current feature
    /// selection (`{{route}}` without a route renders empty).
    pub fn new() -> Self {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(false);
        Self { registry }
    }

    /// Fail on references to missing fields instead of rendering them empty.
    pub fn strict(mut self) -> Self {
        self.registry.set_strict_mode(true);
        self
    }
}

impl Default for HandlebarsRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer for HandlebarsRenderer {
    #[instrument(skip(self, source, context))]
    fn render(&self, name: &str, source: &str, context: &TemplateContext) -> ArcgenResult<String> {
        let rendered = self
            .registry
            .render_template(source, context)
            .map_err(|e| ApplicationError::RenderingFailed {
                template: name.to_string(),
                reason: e.to_string(),
            })?;
        trace!(bytes = rendered.len(), "Rendered");
        Ok(rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arcgen_core::domain::{Feature, GenerationParams, ProjectVariant};

    fn context() -> TemplateContext {
        let params = GenerationParams::builder(ProjectVariant::ReactiumWeb, "/ws/app", "/ws")
            .name("main menu")
            .features([Feature::Route, Feature::Hooks])
            .unwrap()
            .build()
            .unwrap()
            .with_route_input("b, a")
            .unwrap();
        TemplateContext::from(&params)
    }

    #[test]
    fn interpolates_and_branches() {
        let source = "const {{name}} = 1;{{#if hooks}} // hooks{{/if}}{{#if domain}} // domain{{/if}}";
        let out = HandlebarsRenderer::new()
            .render("index-functional.hbs", source, &context())
            .unwrap();
        assert_eq!(out, "const MainMenu = 1; // hooks");
    }

    #[test]
    fn triple_stash_keeps_route_quotes() {
        let out = HandlebarsRenderer::new()
            .render("route.hbs", "path: {{{route}}}", &context())
            .unwrap();
        assert_eq!(out, "path: ['/b', '/a']");
    }

    #[test]
    fn double_stash_escapes() {
        let out = HandlebarsRenderer::new()
            .render("route.hbs", "path: {{route}}", &context())
            .unwrap();
        assert!(out.contains("&#x27;"));
    }

    #[test]
    fn missing_field_renders_empty_unless_strict() {
        let source = "[{{className}}]";
        let lenient = HandlebarsRenderer::new().render("x.hbs", source, &context());
        assert_eq!(lenient.unwrap(), "[]");

        let strict = HandlebarsRenderer::new()
            .strict()
            .render("x.hbs", source, &context());
        assert!(strict.is_err());
    }

    #[test]
    fn syntax_error_names_template() {
        let err = HandlebarsRenderer::new()
            .render("domain.hbs", "{{#if name}}unclosed", &context())
            .unwrap_err();
        assert!(err.to_string().contains("domain.hbs"));
    }
}
