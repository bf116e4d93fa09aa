//! Extended random draws for scene building.
//!
//! [`ExtendedRandom`] sits on top of one injected [`RandomPort`] and turns its
//! uniform integers into the shapes a scene needs: bounded integers, powers
//! of two, translucent colors, sizes and whole trees.

use std::sync::Arc;

use sandbox_domain::{Color, Dimension, DomainError, Point, Tree};

use crate::infrastructure::ports::RandomPort;


/// Exclusive upper bound for each side of [`ExtendedRandom::next_dimension`].
pub const MAX_DIMENSION_SIDE: i32 = 4096;

/// Number of distinct shifts for [`ExtendedRandom::next_power_of_two`],
/// giving results from `2^0` up to `2^30`.
const POWER_OF_TWO_SHIFTS: i32 = 31;

/// Convenience draws over a shared random source.
#[derive(Clone)]
pub struct ExtendedRandom {
    random: Arc<dyn RandomPort>,
}

impl ExtendedRandom {
    pub fn new(random: Arc<dyn RandomPort>) -> Self {
        Self { random }
    }

    /// Uniform over the whole i32 range.
    pub fn next_int(&self) -> i32 {
        self.random.random_i32()
    }

    /// Uniform in `[0, bound)`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidArgument` if `bound <= 0`.
    pub fn next_int_bounded(&self, bound: i32) -> Result<i32, DomainError> {
        if bound <= 0 {
            tracing::debug!(bound, "Rejected non-positive bound");
            return Err(DomainError::invalid_argument(format!(
                "Bound must be positive, got {}",
                bound
            )));
        }
        Ok(self.random.random_range(0, bound - 1))
    }

    /// A power of two picked uniformly from `2^0 ..= 2^30`.
    pub fn next_power_of_two(&self) -> i32 {
        let shift = self.random.random_range(0, POWER_OF_TWO_SHIFTS - 1);
        let value = 1 << shift;
        tracing::trace!(shift, value, "Drew power of two");
        value
    }

    /// A color from one full-range draw read as packed ARGB, so alpha varies
    /// as freely as the other channels.
    pub fn next_color(&self) -> Color {
        Color::from_argb(self.next_int() as u32)
    }

    /// Like [`ExtendedRandom::next_color`] but always fully opaque.
    pub fn next_opaque_color(&self) -> Color {
        self.next_color().with_alpha(u8::MAX)
    }

    /// Some point on the plane.
    ///
    /// No distribution is promised; callers must not rely on where points
    /// land or on how many draws this consumes.
    pub fn next_point(&self) -> Point {
        Point::new(self.next_int(), self.next_int())
    }

    /// Width and height each uniform in `[1, 4096)`.
    pub fn next_dimension(&self) -> Dimension {
        let width = self.random.random_range(1, MAX_DIMENSION_SIDE - 1);
        let height = self.random.random_range(1, MAX_DIMENSION_SIDE - 1);
        Self::drawn_dimension(width, height)
    }

    /// Width uniform in `[1, bound.width)`, height uniform in
    /// `[1, bound.height)`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidArgument` if either side of `bound` is 1,
    /// which leaves nothing to draw from.
    pub fn next_dimension_within(&self, bound: Dimension) -> Result<Dimension, DomainError> {
        if bound.width() <= 1 || bound.height() <= 1 {
            tracing::debug!(%bound, "Rejected dimension bound without drawable range");
            return Err(DomainError::invalid_argument(format!(
                "Dimension bound must exceed 1 on both sides, got {}",
                bound
            )));
        }
        let width = self.random.random_range(1, bound.width() - 1);
        let height = self.random.random_range(1, bound.height() - 1);
        Ok(Self::drawn_dimension(width, height))
    }

    /// A tree with a random leaf color and a size from
    /// [`ExtendedRandom::next_dimension`].
    pub fn next_tree(&self) -> Tree {
        let tree = Tree::new(self.next_color(), self.next_dimension());
        tracing::trace!(%tree, "Drew tree");
        tree
    }

    /// A tree with a random leaf color and a size drawn within `bound`.
    ///
    /// # Errors
    ///
    /// Same as [`ExtendedRandom::next_dimension_within`].
    pub fn next_tree_within(&self, bound: Dimension) -> Result<Tree, DomainError> {
        let size = self.next_dimension_within(bound)?;
        Ok(Tree::new(self.next_color(), size))
    }

    fn drawn_dimension(width: i32, height: i32) -> Dimension {
        // Both sides were drawn from ranges starting at 1
        match Dimension::new(width, height) {
            Ok(dimension) => dimension,
            Err(e) => unreachable!("drew invalid dimension: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use mockall::predicate::eq;
    use sandbox_domain::{Color, Dimension, DomainError};

    use super::*;
    use crate::infrastructure::ports::MockRandomPort;

    fn extended(mock: MockRandomPort) -> ExtendedRandom {
        ExtendedRandom::new(Arc::new(mock))
    }

    fn dimension(width: i32, height: i32) -> Dimension {
        Dimension::new(width, height).expect("valid dimension")
    }

    #[test]
    fn next_int_passes_through_full_range() {
        let mut random = MockRandomPort::new();
        random.expect_random_i32().times(1).return_const(i32::MIN);

        assert_eq!(extended(random).next_int(), i32::MIN);
    }

    #[test]
    fn next_int_bounded_draws_below_bound() {
        let mut random = MockRandomPort::new();
        random
            .expect_random_range()
            .with(eq(0), eq(99))
            .times(1)
            .return_const(99);

        assert_eq!(extended(random).next_int_bounded(100), Ok(99));
    }

    #[test]
    fn next_int_bounded_rejects_non_positive_bound() {
        let mut random = MockRandomPort::new();
        random.expect_random_range().never();
        let extended = extended(random);

        for bound in [0, -1, i32::MIN] {
            let err = extended.next_int_bounded(bound).expect_err("bound rejected");
            assert!(matches!(err, DomainError::InvalidArgument(_)));
        }
    }

    #[test]
    fn next_power_of_two_uses_shift_below_31() {
        let mut random = MockRandomPort::new();
        random
            .expect_random_range()
            .with(eq(0), eq(30))
            .times(2)
            .returning({
                let mut shifts = vec![0, 30].into_iter();
                move |_, _| shifts.next().unwrap_or(0)
            });
        let extended = extended(random);

        assert_eq!(extended.next_power_of_two(), 1);
        assert_eq!(extended.next_power_of_two(), 1 << 30);
    }

    #[test]
    fn next_color_reads_draw_as_argb() {
        let mut random = MockRandomPort::new();
        random
            .expect_random_i32()
            .times(1)
            .return_const(0x4080_C0FF_u32 as i32);

        let color = extended(random).next_color();
        assert_eq!(color, Color::new(0x80, 0xC0, 0xFF, 0x40));
        assert!(!color.is_opaque());
    }

    #[test]
    fn next_color_keeps_transparent_alpha() {
        let mut random = MockRandomPort::new();
        random.expect_random_i32().return_const(0x00FF_FFFF);

        assert_eq!(extended(random).next_color().alpha(), 0);
    }

    #[test]
    fn next_opaque_color_forces_alpha() {
        let mut random = MockRandomPort::new();
        random.expect_random_i32().return_const(0x0012_3456);

        assert_eq!(
            extended(random).next_opaque_color(),
            Color::rgb(0x12, 0x34, 0x56)
        );
    }

    #[test]
    fn next_dimension_draws_each_side_below_4096() {
        let mut random = MockRandomPort::new();
        random
            .expect_random_range()
            .with(eq(1), eq(4095))
            .times(2)
            .returning({
                let mut sides = vec![4095, 1].into_iter();
                move |_, _| sides.next().unwrap_or(1)
            });

        assert_eq!(extended(random).next_dimension(), dimension(4095, 1));
    }

    #[test]
    fn next_dimension_within_draws_below_bound() {
        let mut random = MockRandomPort::new();
        random
            .expect_random_range()
            .with(eq(1), eq(9))
            .times(1)
            .return_const(9);
        random
            .expect_random_range()
            .with(eq(1), eq(19))
            .times(1)
            .return_const(2);

        let drawn = extended(random)
            .next_dimension_within(dimension(10, 20))
            .expect("bound is wide enough");
        assert_eq!(drawn, dimension(9, 2));
    }

    #[test]
    fn next_dimension_within_rejects_bound_of_one() {
        let mut random = MockRandomPort::new();
        random.expect_random_range().never();
        let extended = extended(random);

        let err = extended
            .next_dimension_within(dimension(1, 50))
            .expect_err("width of 1 leaves nothing to draw");
        assert!(matches!(err, DomainError::InvalidArgument(_)));

        let err = extended
            .next_dimension_within(dimension(50, 1))
            .expect_err("height of 1 leaves nothing to draw");
        assert!(err.to_string().contains("50x1"));
    }

    #[test]
    fn next_tree_combines_color_and_size() {
        let mut random = MockRandomPort::new();
        random.expect_random_i32().return_const(-1);
        random.expect_random_range().return_const(7);

        let tree = extended(random).next_tree();
        assert_eq!(tree.leaf_color(), Color::new(255, 255, 255, 255));
        assert_eq!(tree.dimension(), dimension(7, 7));
    }

    #[test]
    fn next_tree_within_propagates_invalid_bound() {
        let mut random = MockRandomPort::new();
        random.expect_random_i32().never();
        random.expect_random_range().never();

        let result = extended(random).next_tree_within(dimension(1, 1));
        assert!(matches!(result, Err(DomainError::InvalidArgument(_))));
    }
}
