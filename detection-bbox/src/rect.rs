use crate::{common::*, Point};

/// The generic axis-aligned rectangle with integer corners.
pub trait Rect {
    fn x_min(&self) -> i64;
    fn y_min(&self) -> i64;
    fn x_max(&self) -> i64;
    fn y_max(&self) -> i64;
}

pub trait RectExt: Rect {
    /// The top-left and bottom-right corners.
    fn corners(&self) -> (Point, Point) {
        (
            Point::new(self.x_min(), self.y_min()),
            Point::new(self.x_max(), self.y_max()),
        )
    }

    /// Check if every corner coordinate of `other` is within `tolerance`
    /// pixels of the corresponding coordinate of `self`.
    ///
    /// The relation is symmetric but not transitive.
    fn similar<R>(&self, other: &R, tolerance: u64) -> bool
    where
        R: Rect + ?Sized,
    {
        self.x_min().abs_diff(other.x_min()) <= tolerance
            && self.y_min().abs_diff(other.y_min()) <= tolerance
            && self.x_max().abs_diff(other.x_max()) <= tolerance
            && self.y_max().abs_diff(other.y_max()) <= tolerance
    }

    /// Check if `self` is [similar](RectExt::similar) to at least one of `others`.
    ///
    /// Stops at the first match.
    fn similar_to_any<'a, R, I>(&self, others: I, tolerance: u64) -> bool
    where
        R: Rect + 'a,
        I: IntoIterator<Item = &'a R>,
    {
        match others
            .into_iter()
            .position(|other| self.similar(other, tolerance))
        {
            Some(index) => {
                trace!("similar to rect at index {} (tolerance {})", index, tolerance);
                true
            }
            None => false,
        }
    }

    /// Check if the point lies in the rectangle, boundaries included.
    fn contains_point<P>(&self, point: P) -> bool
    where
        P: Into<Point>,
    {
        let Point { x, y } = point.into();
        (self.x_min()..=self.x_max()).contains(&x)
            && (self.y_min()..=self.y_max()).contains(&y)
    }
}

impl<T> RectExt for T where T: Rect + ?Sized {}
