use nalgebra::{Point3, Vector3};

/// Axis-Aligned Bounding Box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub mins: Point3<f32>,
    pub maxs: Point3<f32>,
}

impl Aabb {
    #[inline]
    pub fn new(mins: Point3<f32>, maxs: Point3<f32>) -> Self {
        Self { mins, maxs }
    }

    /// The smallest box containing every point in `points`, or `None` if there are no points.
    pub fn from_points(points: impl IntoIterator<Item = Point3<f32>>) -> Option<Self> {
        let mut points = points.into_iter();
        let first = points.next()?;
        Some(points.fold(Self::new(first, first), |aabb, p| aabb.grow(&p)))
    }

    /// Extend `self` so that it contains `p`.
    #[inline]
    pub fn grow(self, p: &Point3<f32>) -> Self {
        Self {
            mins: self.mins.inf(p),
            maxs: self.maxs.sup(p),
        }
    }

    #[inline]
    pub fn contains(&self, p: &Point3<f32>) -> bool {
        let Self { mins: i, maxs: a } = self;
        (p.x >= i.x && p.y >= i.y && p.z >= i.z) && (p.x <= a.x && p.y <= a.y && p.z <= a.z)
    }

    /// Determine the center of `self`.
    #[inline]
    pub fn center(&self) -> Point3<f32> {
        nalgebra::center(&self.mins, &self.maxs)
    }

    /// Size of `self` along each axis.
    #[inline]
    pub fn extents(&self) -> Vector3<f32> {
        self.maxs - self.mins
    }
}

#[cfg(test)]
mod tests {
    use nalgebra::{point, vector};

    use super::*;

    #[test]
    fn from_points() {
        assert_eq!(Aabb::from_points(Vec::<Point3<f32>>::new()), None);

        let aabb = Aabb::from_points([
            point![0.0, 1.0, -2.0],
            point![3.0, -1.0, 0.0],
            point![1.0, 0.0, 4.0],
        ])
        .unwrap();
        assert_eq!(aabb.mins, point![0.0, -1.0, -2.0]);
        assert_eq!(aabb.maxs, point![3.0, 1.0, 4.0]);
        assert_eq!(aabb.extents(), vector![3.0, 2.0, 6.0]);
        assert_eq!(aabb.center(), point![1.5, 0.0, 1.0]);
        assert!(aabb.contains(&point![1.0, 0.0, 4.0]));
        assert!(!aabb.contains(&point![1.0, 0.0, 4.5]));
    }
}
