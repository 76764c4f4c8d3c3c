//! arcgen Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for arcgen, a
//! scaffolding engine for Reactium projects, following hexagonal (ports and
//! adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           arcgen-cli (CLI)              │
//! │   (dialoguer prompts, indicatif bar)    │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │   (ScaffoldService, TemplateService)    │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Filesystem, Renderer, Prompter, ...)   │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     arcgen-adapters (Infrastructure)    │
//! │ (LocalFilesystem, HandlebarsRenderer)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │ (detection, GenerationParams, manifest) │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use arcgen_core::prelude::*;
//!
//! // 1. Pair the target with its workspace root
//! let target = ScaffoldTarget::locate("./src/app/components", &workspaces)?;
//!
//! // 2. Use application service (with injected adapters)
//! let service = ScaffoldService::new(filesystem, renderer, prompter, confirmer, progress);
//! let report = service.component(&target)?;
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        GenerationReport, ProjectInfo, ScaffoldDefaults, ScaffoldService, ScaffoldTarget,
        TemplateService,
        ports::{
            Choice, ConfirmLabels, Confirmer, Filesystem, ProgressSink, Prompter,
            TemplateRenderer, TextPrompt,
        },
    };
    pub use crate::domain::{
        Feature, GenerationParams, ManifestKey, ProjectVariant, StyleTier, TemplateContext,
        TemplateManifest,
    };
    pub use crate::error::{ArcgenError, ArcgenResult, ErrorCategory};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
