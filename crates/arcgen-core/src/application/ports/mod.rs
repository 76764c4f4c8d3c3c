//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `arcgen-adapters` and the CLI
//! implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: File operations and marker lookups
//!   - `TemplateRenderer`: Template rendering
//!   - `Prompter`, `Confirmer`: User input
//!   - `ProgressSink`: Progress reporting
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{
    Choice, ConfirmLabels, Confirmer, Filesystem, ProgressSink, Prompter, TextPrompt,
    TemplateRenderer, titles,
};
