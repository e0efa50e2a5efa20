use crate::PieceKind;

/// Target the engine draws a frame onto.
///
/// Coordinates are board cells (`0..10` columns, `0..20` rows, row 0 at the
/// top). The piece type identifies the color; mapping it to pixels or
/// terminal cells is up to the implementation.
pub trait DrawSurface {
    fn fill_cell(&mut self, x: usize, y: usize, kind: PieceKind);
}

impl<S> DrawSurface for &mut S
where
    S: DrawSurface + ?Sized,
{
    fn fill_cell(&mut self, x: usize, y: usize, kind: PieceKind) {
        (**self).fill_cell(x, y, kind);
    }
}
