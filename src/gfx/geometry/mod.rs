//! # Mesh Ingestion
//!
//! This module turns on-disk mesh descriptions into data for the shared pools.
//!
//! - [`off`] parses the OFF indexed-triangle format into a temporary
//!   [`OffMesh`] without touching any shared state.
//! - [`normals`] derives smooth per-vertex normals for a pool slice.
//!
//! ## Usage
//!
//! ```no_run
//! use stencilscene::gfx::geometry::load_off;
//!
//! let mesh = load_off("bunny.off", &["../data", "data"])?;
//! println!("{} vertices centered at {:?}", mesh.vertex_count(), mesh.center);
//! # Ok::<(), stencilscene::gfx::geometry::MeshError>(())
//! ```

pub mod normals;
pub mod off;

use std::{io, path::PathBuf};

use thiserror::Error;

pub use normals::compute_normals_and_barycenters;
pub use off::{load_off, parse_off, OffMesh, OFF_TAG};

/// Failures raised while loading a mesh. All of them abort the insertion that
/// triggered the load and leave the scene untouched.
#[derive(Debug, Error)]
pub enum MeshError {
    /// The file was not present in any of the search locations.
    #[error("mesh file `{file}` not found (searched: {})", off::describe_search(.searched))]
    NotFound { file: String, searched: Vec<PathBuf> },

    /// The contents are not a well-formed OFF description.
    #[error("malformed OFF data at line {line}: {reason}")]
    Format { line: usize, reason: String },

    /// The file exists but could not be read.
    #[error("failed to read `{}`", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl MeshError {
    pub(crate) fn format(line: usize, reason: impl Into<String>) -> Self {
        Self::Format {
            line,
            reason: reason.into(),
        }
    }
}
