//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use arcgen_core::domain::{Feature, StyleTier};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "arcgen",
    bin_name = "arcgen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Reactium component scaffolding",
    long_about = "arcgen detects the Reactium project around a directory and \
                  generates components, routes, domains and stylesheets from \
                  the project's own Handlebars templates.",
    after_help = "EXAMPLES:\n\
        \x20 arcgen component src/app/components\n\
        \x20 arcgen component . --name main-menu --features hooks,style --style atoms --yes\n\
        \x20 arcgen route src/app/components/About --route /about\n\
        \x20 arcgen detect\n\
        \x20 arcgen completions bash > /usr/share/bash-completion/completions/arcgen",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a new component directory.
    #[command(
        visible_alias = "c",
        about = "Create a component",
        after_help = "EXAMPLES:\n\
            \x20 arcgen component src/app/components\n\
            \x20 arcgen component . --name user-card --features hooks,domain --yes\n\
            \x20 arcgen component . --name Home --features route,style --route '/, /home' --style organisms"
    )]
    Component(ComponentArgs),

    /// Add a route.js to an existing component.
    #[command(
        about = "Add a route to a component",
        after_help = "EXAMPLES:\n\
            \x20 arcgen route src/app/components/About\n\
            \x20 arcgen route . --route '/about, /about/:tab'"
    )]
    Route(RouteArgs),

    /// Add a domain.js to an existing component.
    #[command(
        visible_alias = "zone",
        about = "Add a domain to a component",
        after_help = "EXAMPLES:\n\
            \x20 arcgen domain src/app/components/Header"
    )]
    Domain(DomainArgs),

    /// Add a stylesheet to an existing component.
    #[command(
        about = "Add a stylesheet to a component",
        after_help = "EXAMPLES:\n\
            \x20 arcgen style src/app/components/Header\n\
            \x20 arcgen style . --style atoms"
    )]
    Style(StyleArgs),

    /// Show which project a directory belongs to.
    #[command(
        about = "Detect the project variant",
        after_help = "EXAMPLES:\n\
            \x20 arcgen detect\n\
            \x20 arcgen detect src/app --output-format json"
    )]
    Detect(DetectArgs),

    /// Initialise an arcgen configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 arcgen init           # global config\n\
            \x20 arcgen init --local   # .arcgen.toml in CWD"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 arcgen completions bash > ~/.local/share/bash-completion/completions/arcgen\n\
            \x20 arcgen completions zsh  > ~/.zfunc/_arcgen\n\
            \x20 arcgen completions fish > ~/.config/fish/completions/arcgen.fish"
    )]
    Completions(CompletionsArgs),

    /// Manage the arcgen configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 arcgen config get defaults.style\n\
            \x20 arcgen config set workspaces ~/code,~/work\n\
            \x20 arcgen config list"
    )]
    Config(ConfigCommands),
}

// ── shared generation flags ───────────────────────────────────────────────────

/// Flags shared by every generating command.
#[derive(Debug, Args)]
pub struct TargetArgs {
    /// Directory to generate in.
    #[arg(value_name = "DIR", default_value = ".", help = "Target directory")]
    pub dir: PathBuf,

    /// Workspace root; may be repeated. The first root containing DIR wins.
    #[arg(
        short = 'w',
        long = "workspace",
        value_name = "DIR",
        help = "Workspace root (repeatable)"
    )]
    pub workspace: Vec<PathBuf>,
}

/// How to treat files that already exist.
#[derive(Debug, Args)]
pub struct OverwriteArgs {
    /// Replace existing files without asking.
    #[arg(
        short = 'y',
        long = "yes",
        conflicts_with = "no_overwrite",
        help = "Overwrite existing files without asking"
    )]
    pub yes: bool,

    /// Keep every existing file without asking.
    #[arg(long = "no-overwrite", help = "Never overwrite existing files")]
    pub no_overwrite: bool,
}

// ── component ─────────────────────────────────────────────────────────────────

/// Arguments for `arcgen component`.
#[derive(Debug, Args)]
pub struct ComponentArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    /// Component name; skips the name prompt.
    #[arg(short = 'n', long = "name", value_name = "NAME", help = "Component name")]
    pub name: Option<String>,

    /// Features to generate; skips the feature prompt.
    #[arg(
        short = 'f',
        long = "features",
        value_name = "FEATURES",
        value_enum,
        value_delimiter = ',',
        help = "Comma-separated features: hooks, style, route, domain"
    )]
    pub features: Option<Vec<FeatureArg>>,

    /// Route paths (web) or screen name (native).
    #[arg(short = 'r', long = "route", value_name = "ROUTE", help = "Route paths")]
    pub route: Option<String>,

    /// Stylesheet tier.
    #[arg(short = 's', long = "style", value_enum, value_name = "TIER", help = "Stylesheet tier")]
    pub style: Option<StyleArg>,

    #[command(flatten)]
    pub overwrite: OverwriteArgs,
}

// ── route / domain / style ────────────────────────────────────────────────────

/// Arguments for `arcgen route`.
#[derive(Debug, Args)]
pub struct RouteArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    /// Route paths, comma or space separated.
    #[arg(short = 'r', long = "route", value_name = "ROUTE", help = "Route paths")]
    pub route: Option<String>,

    #[command(flatten)]
    pub overwrite: OverwriteArgs,
}

/// Arguments for `arcgen domain`.
#[derive(Debug, Args)]
pub struct DomainArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    #[command(flatten)]
    pub overwrite: OverwriteArgs,
}

/// Arguments for `arcgen style`.
#[derive(Debug, Args)]
pub struct StyleArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    /// Stylesheet tier.
    #[arg(short = 's', long = "style", value_enum, value_name = "TIER", help = "Stylesheet tier")]
    pub style: Option<StyleArg>,

    #[command(flatten)]
    pub overwrite: OverwriteArgs,
}

// ── detect ────────────────────────────────────────────────────────────────────

/// Arguments for `arcgen detect`.
#[derive(Debug, Args)]
pub struct DetectArgs {
    #[command(flatten)]
    pub target: TargetArgs,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `arcgen init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to `.arcgen.toml` in the current directory.
    #[arg(
        long = "local",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `arcgen completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `arcgen config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.style`.
        key: String,
    },
    /// Set a configuration key to a value.
    Set {
        /// Dotted key path.
        key: String,
        /// New value. Lists are comma separated.
        value: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── value enums ───────────────────────────────────────────────────────────────

/// Selectable features.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum FeatureArg {
    #[value(alias = "hook")]
    Hooks,
    Style,
    Route,
    /// Also accepted as `zone`.
    #[value(alias = "zone")]
    Domain,
}

impl From<FeatureArg> for Feature {
    fn from(arg: FeatureArg) -> Self {
        match arg {
            FeatureArg::Hooks => Feature::Hooks,
            FeatureArg::Style => Feature::Style,
            FeatureArg::Route => Feature::Route,
            FeatureArg::Domain => Feature::Domain,
        }
    }
}

/// Stylesheet tiers, lowest load priority first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum StyleArg {
    Default,
    Mixins,
    Variables,
    Base,
    Atoms,
    Molecules,
    Organisms,
    Overrides,
}

impl From<StyleArg> for StyleTier {
    fn from(arg: StyleArg) -> Self {
        match arg {
            StyleArg::Default => StyleTier::Default,
            StyleArg::Mixins => StyleTier::Mixins,
            StyleArg::Variables => StyleTier::Variables,
            StyleArg::Base => StyleTier::Base,
            StyleArg::Atoms => StyleTier::Atoms,
            StyleArg::Molecules => StyleTier::Molecules,
            StyleArg::Organisms => StyleTier::Organisms,
            StyleArg::Overrides => StyleTier::Overrides,
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{CommandFactory, Parser};

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_component_flags() {
        let cli = Cli::parse_from([
            "arcgen",
            "component",
            "src",
            "--name",
            "main-menu",
            "--features",
            "hooks,zone",
            "--style",
            "atoms",
            "-w",
            "/ws",
            "-w",
            "/other",
            "--yes",
        ]);
        let Commands::Component(args) = cli.command else {
            panic!("expected Component command");
        };
        assert_eq!(args.target.dir, PathBuf::from("src"));
        assert_eq!(args.target.workspace.len(), 2);
        assert_eq!(
            args.features,
            Some(vec![FeatureArg::Hooks, FeatureArg::Domain])
        );
        assert_eq!(args.style, Some(StyleArg::Atoms));
        assert!(args.overwrite.yes);
    }

    #[test]
    fn dir_defaults_to_cwd() {
        let cli = Cli::parse_from(["arcgen", "domain"]);
        let Commands::Domain(args) = cli.command else {
            panic!("expected Domain command");
        };
        assert_eq!(args.target.dir, PathBuf::from("."));
    }

    #[test]
    fn zone_is_an_alias_for_domain() {
        let cli = Cli::parse_from(["arcgen", "zone", "src/Header"]);
        assert!(matches!(cli.command, Commands::Domain(_)));
    }

    #[test]
    fn yes_and_no_overwrite_conflict() {
        let result = Cli::try_parse_from(["arcgen", "domain", "--yes", "--no-overwrite"]);
        assert!(result.is_err());
    }

    #[test]
    fn unknown_feature_rejected() {
        let result = Cli::try_parse_from(["arcgen", "component", "--features", "reducer"]);
        assert!(result.is_err());
    }

    #[test]
    fn no_color_flag_sets_global() {
        let cli = Cli::parse_from(["arcgen", "detect", "--no-color"]);
        assert!(cli.global.no_color);
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["arcgen", "--quiet", "--verbose", "detect"]);
        assert!(result.is_err());
    }

    #[test]
    fn style_arg_maps_to_tier() {
        assert_eq!(StyleTier::from(StyleArg::Overrides), StyleTier::Overrides);
        assert_eq!(Feature::from(FeatureArg::Domain), Feature::Domain);
    }
}
