// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.
// unused_results is intentionally not denied: attach/free handle
// operations return status flags callers routinely discard.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! CPU-side core of an interactive 3D molecular structure viewer.
//!
//! Molviz parses whitespace-delimited XYZ-style coordinate files, infers
//! covalent bonds from empirical per-element-pair distance tables, and
//! maintains instanced sphere/cylinder geometry for every atom and bond.
//! An external render layer (window, GPU context, shaders, lighting
//! buffers) consumes the instance streams through the [`scene::Scene`]
//! registry and the [`scene::MeshUploader`] contract.
//!
//! # Key entry points
//!
//! - [`molecule::MoleculeChain`] - ordered, steppable sequence of loaded
//!   structures (e.g. a diffusion-model denoising trajectory)
//! - [`chem::classify_bond`] - distance-based bond-order classification
//! - [`scene::Scene`] - mesh registry + camera state for the renderer
//! - [`options::Options`] - runtime configuration with TOML presets
//!
//! # Architecture
//!
//! Everything is single-threaded and frame-driven: parsing, bond
//! classification, and geometry construction happen synchronously at load
//! time. Meshes live in a generational arena owned by the scene; models
//! and chains hold stable [`scene::MeshId`] handles, so detaching a
//! structure from the render set is a validated operation rather than
//! pointer erasure.

pub mod camera;
pub mod chem;
pub mod error;
pub mod geometry;
pub mod molecule;
pub mod options;
pub mod scene;
