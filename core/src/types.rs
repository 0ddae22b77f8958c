/// Single coordinate axis used for board rows and columns.
pub type Coord = u8;

/// Two-dimensional coordinates `(row, col)`, row 0 at the top and column 0
/// at the left.
pub type Coord2 = (Coord, Coord);

/// Session score and high-score magnitude.
pub type Score = u32;

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}
