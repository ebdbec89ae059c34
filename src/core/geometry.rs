use glam::Vec3;

/// Polyhedron families used for the floating nodes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeKind {
    Icosahedron,
    Box,
    Tetrahedron,
    Octahedron,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 4] = [
        ShapeKind::Icosahedron,
        ShapeKind::Box,
        ShapeKind::Tetrahedron,
        ShapeKind::Octahedron,
    ];

    /// Circumradius for the polyhedra, edge length for the box.
    pub fn size(self) -> f32 {
        match self {
            ShapeKind::Icosahedron => 0.5,
            ShapeKind::Box => 0.5,
            ShapeKind::Tetrahedron => 0.4,
            ShapeKind::Octahedron => 0.5,
        }
    }

    pub fn vertices(self) -> Vec<Vec3> {
        let s = self.size();
        match self {
            ShapeKind::Icosahedron => {
                let t = (1.0 + 5.0_f32.sqrt()) / 2.0;
                [
                    (-1.0, t, 0.0),
                    (1.0, t, 0.0),
                    (-1.0, -t, 0.0),
                    (1.0, -t, 0.0),
                    (0.0, -1.0, t),
                    (0.0, 1.0, t),
                    (0.0, -1.0, -t),
                    (0.0, 1.0, -t),
                    (t, 0.0, -1.0),
                    (t, 0.0, 1.0),
                    (-t, 0.0, -1.0),
                    (-t, 0.0, 1.0),
                ]
                .iter()
                .map(|&(x, y, z)| Vec3::new(x, y, z).normalize() * s)
                .collect()
            }
            ShapeKind::Box => {
                let h = s * 0.5;
                let mut out = Vec::with_capacity(8);
                for &x in &[-h, h] {
                    for &y in &[-h, h] {
                        for &z in &[-h, h] {
                            out.push(Vec3::new(x, y, z));
                        }
                    }
                }
                out
            }
            ShapeKind::Tetrahedron => [
                (1.0, 1.0, 1.0),
                (-1.0, -1.0, 1.0),
                (-1.0, 1.0, -1.0),
                (1.0, -1.0, -1.0),
            ]
            .iter()
            .map(|&(x, y, z)| Vec3::new(x, y, z).normalize() * s)
            .collect(),
            ShapeKind::Octahedron => vec![
                Vec3::X * s,
                -Vec3::X * s,
                Vec3::Y * s,
                -Vec3::Y * s,
                Vec3::Z * s,
                -Vec3::Z * s,
            ],
        }
    }

    /// Wireframe edges in local space.
    ///
    /// All four shapes are edge-uniform, so an edge is any vertex pair at the
    /// minimum pairwise distance.
    pub fn edges(self) -> Vec<[Vec3; 2]> {
        let verts = self.vertices();
        let mut min_d = f32::MAX;
        for i in 0..verts.len() {
            for j in (i + 1)..verts.len() {
                min_d = min_d.min(verts[i].distance(verts[j]));
            }
        }
        let tol = min_d * 1e-3;
        let mut out = Vec::new();
        for i in 0..verts.len() {
            for j in (i + 1)..verts.len() {
                if (verts[i].distance(verts[j]) - min_d).abs() <= tol {
                    out.push([verts[i], verts[j]]);
                }
            }
        }
        out
    }
}

/// Square floor grid on the XZ plane, `divisions + 1` lines per axis.
pub fn grid_lines(size: f32, divisions: u32, y: f32) -> Vec<[Vec3; 2]> {
    let half = size * 0.5;
    let step = size / divisions.max(1) as f32;
    let mut out = Vec::with_capacity(2 * (divisions as usize + 1));
    for i in 0..=divisions {
        let k = -half + i as f32 * step;
        out.push([Vec3::new(-half, y, k), Vec3::new(half, y, k)]);
        out.push([Vec3::new(k, y, -half), Vec3::new(k, y, half)]);
    }
    out
}
