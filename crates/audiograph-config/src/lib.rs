//! Patch files and factory patches for audiograph.
//!
//! A patch is a named [`Graph`](audiograph_core::Graph) persisted to disk in
//! the same shape the host receives, as TOML or JSON.
//!
//! # Features
//!
//! - **Patch Files**: Load and save patches as TOML or JSON, chosen by extension
//! - **Bare Graphs**: JSON files holding just an encoded graph array load as patches
//! - **Factory Patches**: Built-in patches for common graph shapes
//!
//! # Example
//!
//! ```rust,no_run
//! use audiograph_config::{Patch, get_factory_patch};
//! use audiograph_core::kinds::{dac, oscillator};
//! use audiograph_core::params::frequency;
//!
//! // Load a patch from file
//! let patch = Patch::load("my_patch.toml").unwrap();
//!
//! // Create a patch programmatically
//! let patch = Patch::new("Beep")
//!     .with_description("A bare 880 Hz sine")
//!     .with_root(oscillator(vec![frequency(880.0)], vec![dac()]));
//! patch.save("beep.json").unwrap();
//!
//! // Start from a factory patch
//! let tremolo = get_factory_patch("tremolo").unwrap();
//! println!("{}", tremolo.encode());
//! ```

mod error;
mod patch;

/// Factory patches bundled with the library.
pub mod factory_patches;

pub use error::ConfigError;
pub use factory_patches::{
    FACTORY_PATCH_NAMES, factory_patch_names, factory_patches, get_factory_patch,
    is_factory_patch,
};
pub use patch::{Patch, PatchFormat};
