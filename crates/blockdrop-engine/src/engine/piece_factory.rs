use crate::{Piece, PieceKind};

use super::random::RandomSource;

#[expect(clippy::cast_possible_truncation)]
const PIECE_KIND_COUNT: u32 = PieceKind::LEN as u32;

/// Spawns new falling pieces.
///
/// Every spawn consumes exactly one draw from the random source and picks a
/// piece type uniformly. The piece starts on the top row, centered.
///
/// # Example
///
/// ```
/// use blockdrop_engine::{PieceFactory, PieceKind, SequenceSource};
///
/// // Draw 3 is the fourth type id, the O piece.
/// let mut factory = PieceFactory::new(SequenceSource::new([3, 0]));
///
/// let piece = factory.spawn();
/// assert_eq!(piece.kind(), PieceKind::O);
/// assert_eq!((piece.x(), piece.y()), (4, 0));
/// assert_eq!(factory.spawn().kind(), PieceKind::I);
/// ```
#[derive(Debug, Clone)]
pub struct PieceFactory<R> {
    source: R,
}

impl<R> PieceFactory<R>
where
    R: RandomSource,
{
    #[must_use]
    pub fn new(source: R) -> Self {
        Self { source }
    }

    /// Draws the next piece type.
    pub fn next_kind(&mut self) -> PieceKind {
        let index = self.source.next_int(PIECE_KIND_COUNT) as usize;
        PieceKind::ALL[index % PieceKind::LEN]
    }

    /// Draws the next piece type and places it at the spawn position.
    pub fn spawn(&mut self) -> Piece {
        Piece::spawn(self.next_kind())
    }

    #[must_use]
    pub fn source(&self) -> &R {
        &self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{SeededSource, SequenceSource};

    #[test]
    fn test_draw_maps_to_type_id_order() {
        let mut factory = PieceFactory::new(SequenceSource::new(0..7));
        let kinds: Vec<_> = (0..7).map(|_| factory.next_kind()).collect();
        assert_eq!(kinds, PieceKind::ALL);
    }

    #[test]
    fn test_each_spawn_consumes_one_draw() {
        let mut factory = PieceFactory::new(SequenceSource::new([6, 1, 4]));
        assert_eq!(factory.spawn().kind(), PieceKind::Z);
        assert_eq!(factory.spawn().kind(), PieceKind::J);
        assert_eq!(factory.spawn().kind(), PieceKind::S);
    }

    #[test]
    fn test_spawn_is_deterministic_for_seed() {
        let mut a = PieceFactory::new(SeededSource::from_seed(5));
        let mut b = PieceFactory::new(SeededSource::from_seed(5));
        for _ in 0..50 {
            assert_eq!(a.spawn(), b.spawn());
        }
    }
}
