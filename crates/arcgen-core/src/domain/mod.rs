//! Core domain layer for arcgen.
//!
//! This module contains pure business logic: variant detection, naming and
//! route transformations, the generation parameter record and the template
//! manifest. All I/O is handled via ports defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: Detection asks a probe closure instead of touching the disk
//! - **No logging**: Observability belongs to the application and CLI layers
//! - **Immutable entities**: All domain objects are Clone + PartialEq

pub mod detection;
pub mod entities;
pub mod error;
pub mod naming;
pub mod value_objects;

mod validation;

pub use detection::{detect, locate_workspace, markers, normalize_path};

pub use entities::{
    GenerationParams, GenerationParamsBuilder, ManifestEntry, ManifestKey, OutputPlacement,
    RouteSetting, TemplateContext, TemplateManifest,
};

pub use error::{DomainError, ErrorCategory};

pub use value_objects::{
    DEFAULT_STYLE_FILE, Feature, NATIVE_STYLE_TYPE, ProjectVariant, StyleTier,
};

pub use validation::DomainValidator;

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    // ========================================================================
    // Detection → Params → Manifest
    // ========================================================================

    fn has(files: &'static [&'static str]) -> impl Fn(&Path, &str) -> bool {
        move |dir, name| files.iter().any(|f| Path::new(f) == dir.join(name))
    }

    #[test]
    fn detected_web_project_yields_full_manifest() {
        let variant = detect(
            Path::new("/ws/app/src/app/components"),
            Path::new("/ws"),
            has(&["/ws/app/reactium-config.js"]),
        )
        .unwrap();

        let params = GenerationParams::builder(variant, "/ws/app/src/app/components", "/ws")
            .name("main menu")
            .index(true)
            .features(Feature::ALL)
            .unwrap()
            .build()
            .unwrap()
            .with_route_input("/menu")
            .unwrap()
            .with_style_tier(StyleTier::Organisms)
            .unwrap();

        DomainValidator::validate_params(&params).unwrap();

        let manifest = TemplateManifest::resolve(&params, "/ws/app/.cli/template");
        let outputs: Vec<_> = manifest
            .enabled()
            .map(|entry| entry.output_file.as_str())
            .collect();

        assert_eq!(params.dir(), Path::new("/ws/app/src/app/components/MainMenu"));
        assert_eq!(
            outputs,
            [
                "reactium-hooks.js",
                "index.js",
                "domain.js",
                "route.js",
                "_reactium-style-organisms.scss"
            ]
        );
    }

    #[test]
    fn detected_actinium_project_cannot_build_params() {
        let variant = detect(
            Path::new("/ws/api/src"),
            Path::new("/ws"),
            has(&["/ws/api/actinium-config.js"]),
        )
        .unwrap();

        let result = GenerationParams::builder(variant, "/ws/api/src", "/ws").build();
        assert_eq!(result.unwrap_err().category(), ErrorCategory::Configuration);
    }

    #[test]
    fn zone_alias_selects_domain() {
        let feature: Feature = "zone".parse().unwrap();
        let params = GenerationParams::builder(ProjectVariant::ReactiumWeb, "/ws/app", "/ws")
            .features([feature])
            .unwrap()
            .build()
            .unwrap();

        assert!(params.domain());
        assert!(TemplateContext::from(&params).zone);
    }
}
