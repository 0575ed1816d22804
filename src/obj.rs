//! Wavefront OBJ export for inspecting a generated terrain in other tools.

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use crate::error::Result;
use crate::terrain::Terrain;

impl Terrain {
    /// Write positions, normals and faces as an OBJ document.
    /// Faces reference the normal with the same index as each vertex.
    pub fn write_obj<W: Write>(&self, mut out: W) -> Result<()> {
        writeln!(out, "# fault-plane terrain, {0}x{0} cells", self.div())?;

        for v in self.positions() {
            writeln!(out, "v {} {} {}", v.x, v.y, v.z)?;
        }
        for n in self.normals() {
            writeln!(out, "vn {} {} {}", n.x, n.y, n.z)?;
        }

        // obj indices are 1-based
        for [a, b, c] in self.triangles().iter().map(|t| t.map(|i| i + 1)) {
            writeln!(out, "f {a}//{a} {b}//{b} {c}//{c}")?;
        }

        out.flush()?;
        Ok(())
    }

    pub fn save_obj<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path)?;
        return self.write_obj(BufWriter::new(file));
    }
}
