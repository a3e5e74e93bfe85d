/// Describes which of the eight surrounding cells count as neighbors.
///
/// Cells outside the board are never neighbors: the field is not stitched
/// together at its bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Topology {
    /// Up, down, left and right.
    Orthogonal,
    /// The four diagonal cells.
    Oblique,
    /// Both of the above (Moore neighborhood).
    All,
}

impl Topology {
    const ORTHOGONAL: [(isize, isize); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];
    const OBLIQUE: [(isize, isize); 4] = [(-1, -1), (1, -1), (-1, 1), (1, 1)];

    /// Relative `(dx, dy)` offsets of the neighbors.
    pub fn offsets(self) -> &'static [(isize, isize)] {
        const ALL: [(isize, isize); 8] = {
            let (o, d) = (Topology::ORTHOGONAL, Topology::OBLIQUE);
            [o[0], o[1], o[2], o[3], d[0], d[1], d[2], d[3]]
        };
        match self {
            Topology::Orthogonal => &Self::ORTHOGONAL,
            Topology::Oblique => &Self::OBLIQUE,
            Topology::All => &ALL,
        }
    }
}

impl std::fmt::Display for Topology {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Topology::Orthogonal => "NEIGHBORS_ORTHOGONAL",
            Topology::Oblique => "NEIGHBORS_OBLIQUE",
            Topology::All => "NEIGHBORS_ALL",
        };
        f.write_str(name)
    }
}
