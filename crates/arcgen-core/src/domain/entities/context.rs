//! Template rendering context.
//!
//! A closed, serializable view of [`GenerationParams`]. Templates see exactly
//! these fields (camelCase) and nothing else.

use serde::Serialize;

use crate::domain::entities::params::GenerationParams;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateContext {
    pub dir: String,
    pub name: String,
    pub raw_name: String,
    pub workspace: String,
    pub variant: String,
    pub index: bool,
    pub hooks: bool,
    pub style: bool,
    pub domain: bool,
    /// Alias of `domain` kept for templates written against the zone naming.
    pub zone: bool,
    /// Formatted route, only when the route feature resolved.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    pub is_reactium_web: bool,
    pub is_reactium_native: bool,
}

impl From<&GenerationParams> for TemplateContext {
    fn from(params: &GenerationParams) -> Self {
        Self {
            dir: params.dir().display().to_string(),
            name: params.name().to_string(),
            raw_name: params.raw_name().to_string(),
            workspace: params.workspace().display().to_string(),
            variant: params.variant().to_string(),
            index: params.index(),
            hooks: params.hooks(),
            style: params.style(),
            domain: params.domain(),
            zone: params.domain(),
            route: params.route().resolved().map(str::to_string),
            style_type: params.style_type().map(str::to_string),
            class_name: params.class_name().map(str::to_string),
            is_reactium_web: params.is_reactium_web(),
            is_reactium_native: params.is_reactium_native(),
        }
    }
}
