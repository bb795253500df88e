//! Pieces module - tetromino shapes and the rotation transform
//!
//! Shapes are stored as raw offsets from the piece origin. Rotation maps each
//! offset `(x, y)` to `(y, -x)` and keeps no orientation state, so repeated
//! rotation acts on whatever offsets the piece currently holds.

use crate::types::PieceKind;

/// Offset of a single mino relative to piece origin
pub type MinoOffset = (i8, i8);

/// Shape of a piece - 4 mino offsets from piece origin
pub type PieceShape = [MinoOffset; 4];

/// Get the spawn shape (mino offsets) for a piece kind
pub fn get_shape(kind: PieceKind) -> PieceShape {
    match kind {
        PieceKind::I => [(1, 0), (2, 0), (3, 0), (4, 0)],
        PieceKind::J => [(0, 0), (1, 0), (2, 0), (2, 1)],
        PieceKind::L => [(0, 1), (1, 1), (2, 1), (2, 0)],
        PieceKind::O => [(0, 0), (1, 0), (0, 1), (1, 1)],
        PieceKind::S => [(1, 0), (2, 0), (0, 1), (1, 1)],
        PieceKind::T => [(1, 0), (0, 1), (1, 1), (2, 1)],
        PieceKind::Z => [(0, 0), (1, 0), (1, 1), (2, 1)],
    }
}

/// Rotate every offset 90° about the piece origin: `(x, y) -> (y, -x)`.
pub fn rotate_shape(shape: &PieceShape) -> PieceShape {
    shape.map(|(x, y)| (y, -x))
}

/// Try to rotate a shape in place at origin (x, y), no kicks.
/// Returns the rotated shape if every mino lands on a valid cell.
pub fn try_rotate(
    shape: &PieceShape,
    x: i8,
    y: i8,
    is_valid: impl Fn(i8, i8) -> bool,
) -> Option<PieceShape> {
    let rotated = rotate_shape(shape);
    rotated
        .iter()
        .all(|&(mx, my)| is_valid(x + mx, y + my))
        .then_some(rotated)
}
