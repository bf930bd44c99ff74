//! # OFF Mesh Parsing
//!
//! Line-oriented reader for the Object File Format:
//!
//! ```text
//! OFF
//! <vertex count> <face count> [edge count]
//! x y z            (vertex count lines, extra tokens ignored)
//! k id0 .. id(k-1) (face count lines)
//! ```
//!
//! Face ids are local to the file. [`MeshPool::append`](crate::gfx::scene::MeshPool::append)
//! rebases them when the mesh is committed to the shared pools.

use std::{
    fs, io,
    path::{Path, PathBuf},
    str::FromStr,
};

use cgmath::{Vector3, Zero};
use log::{debug, warn};

use super::MeshError;

/// Tag expected on the first line of every OFF file.
pub const OFF_TAG: &str = "OFF";

/// A fully parsed mesh that has not been committed to any pool yet.
#[derive(Debug, Clone, PartialEq)]
pub struct OffMesh {
    pub positions: Vec<Vector3<f32>>,
    /// Flat list of file-local vertex ids, three per triangle.
    pub indices: Vec<u32>,
    /// Mean of all vertex positions.
    pub center: Vector3<f32>,
}

impl OffMesh {
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// Reads `file_name` from the first directory in `search_dirs` that has a
/// readable copy.
///
/// Any failure to read a candidate moves on to the next one. If none works,
/// the first failure other than a missing file is reported as
/// [`MeshError::Io`]; when every candidate was simply absent the result is
/// [`MeshError::NotFound`].
pub fn load_off<P: AsRef<Path>>(file_name: &str, search_dirs: &[P]) -> Result<OffMesh, MeshError> {
    let mut searched = Vec::with_capacity(search_dirs.len());
    let mut unreadable: Option<(PathBuf, io::Error)> = None;

    for dir in search_dirs {
        let path = dir.as_ref().join(file_name);
        match fs::read_to_string(&path) {
            Ok(source) => {
                debug!("Loading mesh from {}", path.display());
                return parse_off(&source);
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!("No mesh at {}, trying next location", path.display());
            }
            Err(err) => {
                warn!("Cannot read {}: {}, trying next location", path.display(), err);
                if unreadable.is_none() {
                    unreadable = Some((path.clone(), err));
                }
            }
        }
        searched.push(path);
    }

    match unreadable {
        Some((path, source)) => Err(MeshError::Io { path, source }),
        None => Err(MeshError::NotFound {
            file: file_name.to_string(),
            searched,
        }),
    }
}

/// Parses OFF text into a standalone [`OffMesh`].
///
/// Blank lines and `#` comments are skipped. Each face reads exactly as many
/// ids as its leading count says; the count itself is not checked, but faces
/// that are not triangles are reported with a warning.
pub fn parse_off(source: &str) -> Result<OffMesh, MeshError> {
    let mut lines = source
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, strip_comment(line)))
        .filter(|(_, line)| !line.trim().is_empty());

    let (tag_line, tag) = lines
        .next()
        .ok_or_else(|| MeshError::format(1, "file is empty"))?;
    if !tag.split_whitespace().all(|word| word == OFF_TAG) {
        return Err(MeshError::format(
            tag_line,
            format!("expected `{}` tag, found `{}`", OFF_TAG, tag.trim()),
        ));
    }

    let (header_line, header) = lines
        .next()
        .ok_or_else(|| MeshError::format(tag_line + 1, "missing vertex and face counts"))?;
    let mut counts = header.split_whitespace();
    let vertex_count: usize = parse_token(counts.next(), header_line, "vertex count")?;
    let face_count: usize = parse_token(counts.next(), header_line, "face count")?;
    if vertex_count == 0 {
        return Err(MeshError::format(header_line, "mesh declares no vertices"));
    }

    let mut last_line = header_line;
    let mut positions = Vec::with_capacity(vertex_count);
    let mut sum = Vector3::zero();
    for _ in 0..vertex_count {
        let (line_no, line) = lines.next().ok_or_else(|| {
            MeshError::format(
                last_line + 1,
                format!("expected {} vertices, found {}", vertex_count, positions.len()),
            )
        })?;
        let mut words = line.split_whitespace();
        let x = parse_token(words.next(), line_no, "x coordinate")?;
        let y = parse_token(words.next(), line_no, "y coordinate")?;
        let z = parse_token(words.next(), line_no, "z coordinate")?;

        let position = Vector3::new(x, y, z);
        sum += position;
        positions.push(position);
        last_line = line_no;
    }

    let mut indices = Vec::with_capacity(face_count * 3);
    let mut non_triangles = 0usize;
    for face in 0..face_count {
        let (line_no, line) = lines.next().ok_or_else(|| {
            MeshError::format(
                last_line + 1,
                format!("expected {} faces, found {}", face_count, face),
            )
        })?;
        let mut words = line.split_whitespace();
        let corners: usize = parse_token(words.next(), line_no, "corner count")?;
        if corners != 3 {
            non_triangles += 1;
        }

        for _ in 0..corners {
            let id: u32 = parse_token(words.next(), line_no, "vertex id")?;
            if id as usize >= vertex_count {
                return Err(MeshError::format(
                    line_no,
                    format!("vertex id {} out of range for {} vertices", id, vertex_count),
                ));
            }
            indices.push(id);
        }
        last_line = line_no;
    }

    if non_triangles > 0 {
        warn!(
            "{} of {} faces are not triangles and will not render correctly",
            non_triangles, face_count
        );
    }

    Ok(OffMesh {
        positions,
        indices,
        center: sum / vertex_count as f32,
    })
}

fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(start) => &line[..start],
        None => line,
    }
}

fn parse_token<T: FromStr>(token: Option<&str>, line: usize, what: &str) -> Result<T, MeshError> {
    let token = token.ok_or_else(|| MeshError::format(line, format!("missing {}", what)))?;
    token
        .parse()
        .map_err(|_| MeshError::format(line, format!("invalid {} `{}`", what, token)))
}

/// Search paths that were tried, for error reporting.
pub fn describe_search(searched: &[PathBuf]) -> String {
    searched
        .iter()
        .map(|path| path.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
