/// Line list for wireframe drawing: `(a,b)`, `(b,c)`, `(c,a)` for every
/// triangle, in triangle order. Edges shared by two triangles appear twice.
pub fn triangle_edges(triangles: &[[u32; 3]]) -> Vec<[u32; 2]> {
    triangles
        .iter()
        .flat_map(|&[a, b, c]| [[a, b], [b, c], [c, a]])
        .collect()
}
