/// Single coordinate axis used for board width, height, and positions.
pub type Coord = u16;

/// Count type for mines, flags, and total cells.
pub type CellCount = u32;

/// Grid coordinates `(x, y)`.
pub type Coord2 = (Coord, Coord);

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    (a as CellCount) * (b as CellCount)
}

pub(crate) const fn nd_index((x, y): Coord2) -> [usize; 2] {
    [x as usize, y as usize]
}

const NEIGHBOR_OFFSETS: [(i16, i16); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Offsets `center` by `delta`, yielding a value only while it stays on the
/// board.
fn offset(center: Coord2, delta: (i16, i16), bounds: Coord2) -> Option<Coord2> {
    let x = center.0.checked_add_signed(delta.0)?;
    let y = center.1.checked_add_signed(delta.1)?;
    (x < bounds.0 && y < bounds.1).then_some((x, y))
}

/// Iterates the up-to-8 grid neighbors of `center`, clipped to `bounds`.
pub fn neighbors(center: Coord2, bounds: Coord2) -> impl Iterator<Item = Coord2> {
    NEIGHBOR_OFFSETS
        .iter()
        .filter_map(move |&delta| offset(center, delta, bounds))
}
