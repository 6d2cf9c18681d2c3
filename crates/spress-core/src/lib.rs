//! Spress Core - site scaffolding domain and orchestration.
//!
//! This crate provides the domain and application layers for the Spress
//! scaffolding tool, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           spress-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │            (SiteGenerator)              │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Filesystem, SkeletonSource, Packages)  │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     spress-adapters (Infrastructure)    │
//! │ (LocalFilesystem, BlankSkeleton, etc.)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │ (ThemeName, SkeletonTree, SiteManifest) │
//! │         No External Dependencies        │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use spress_core::application::SiteGenerator;
//!
//! // Build the generator with injected adapters; the package manager is
//! // optional and only required for non-blank themes.
//! let generator = SiteGenerator::new(skeletons, filesystem)
//!     .with_package_manager(packages);
//! generator.generate("./my-site".as_ref(), "blank", false)?;
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        SiteGenerator,
        ports::{Filesystem, InstallOptions, PackageManager, SkeletonSource},
    };
    pub use crate::domain::{
        BLANK_THEME, RenderContext, SiteManifest, SkeletonEntry, SkeletonTree, ThemeName,
        ThemePackage,
    };
    pub use crate::error::{SpressError, SpressResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
