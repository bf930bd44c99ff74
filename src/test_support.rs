//! Fixtures shared by the unit tests.

use std::{
    fs,
    path::{Path, PathBuf},
    process,
    sync::atomic::{AtomicUsize, Ordering},
};

use crate::{config::SceneConfig, gfx::scene::ObjectKind};

/// Unit cube centered at the origin, outward counter-clockwise winding.
pub const CUBE_OFF: &str = "OFF
8 12 0
-0.5 -0.5 -0.5
0.5 -0.5 -0.5
0.5 0.5 -0.5
-0.5 0.5 -0.5
-0.5 -0.5 0.5
0.5 -0.5 0.5
0.5 0.5 0.5
-0.5 0.5 0.5
3 4 5 6
3 4 6 7
3 0 2 1
3 0 3 2
3 0 4 7
3 0 7 3
3 1 2 6
3 1 6 5
3 3 7 6
3 3 6 2
3 0 1 5
3 0 5 4
";

/// Small off-center tetrahedron standing in for the bunny.
pub const TETRA_OFF: &str = "OFF
4 4 0
0.1 0.1 0.1
0.3 0.1 0.1
0.1 0.3 0.1
0.1 0.1 0.3
3 0 2 1
3 0 1 3
3 0 3 2
3 1 2 3
";

/// Octahedron standing in for the bumpy cube.
pub const OCTA_OFF: &str = "OFF
6 8 0
1 0 0
-1 0 0
0 1 0
0 -1 0
0 0 1
0 0 -1
3 0 2 4
3 2 1 4
3 1 3 4
3 3 0 4
3 2 0 5
3 1 2 5
3 3 1 5
3 0 3 5
";

static NEXT_DIR: AtomicUsize = AtomicUsize::new(0);

/// Scratch directory removed on drop.
pub struct TempDir {
    path: PathBuf,
}

impl TempDir {
    pub fn new(label: &str) -> Self {
        let path = std::env::temp_dir().join(format!(
            "stencilscene-{}-{}-{}",
            label,
            process::id(),
            NEXT_DIR.fetch_add(1, Ordering::Relaxed)
        ));
        fs::create_dir_all(&path).expect("create temp dir");
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.path.join(name);
        fs::write(&path, contents).expect("write fixture");
        path
    }
}

impl Drop for TempDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

/// A directory holding every known mesh kind under its expected file name.
pub fn mesh_dir() -> TempDir {
    let dir = TempDir::new("meshes");
    dir.write(ObjectKind::UnitCube.file_name(), CUBE_OFF);
    dir.write(ObjectKind::Bunny.file_name(), TETRA_OFF);
    dir.write(ObjectKind::BumpyCube.file_name(), OCTA_OFF);
    dir
}

/// Deterministic config reading meshes from `dir` only.
pub fn config_for(dir: &TempDir) -> SceneConfig {
    SceneConfig::new().mesh_dirs([dir.path()]).seed(42)
}
