//! # Mesh Information
//!
//! A [`Spans3D`] object specifies how many grid points there are along each axis, while the
//! geometry types specify where those points are located. Putting the two together gives a
//! full description of the computational domain.
//!
//! The geometry is built from three 1D coordinate lines. How those lines are interpreted
//! depends on the [`GridTopology`] of the grid:
//!
//! * `Cartesian`: the lines are the X, Y and Z locations. They are stored as is (scaled) in a
//!   [`Rectilinear3D`] and the point `(i, j, k)` is implicitly at `(x[i], y[j], z[k])`.
//! * `Cylindrical`: the lines are radius, angle (radians) and height. Every point is
//!   transformed to cartesian coordinates and stored explicitly in a [`Structured3D`].
//!
//! In both cases the points are ordered with the first axis varying fastest, which is the
//! same order that point data is flattened in.

mod rectilinear;
mod spans;
mod structured;

pub use rectilinear::{Mesh3D, Rectilinear3D};
pub use spans::Spans3D;
pub use structured::Structured3D;

use crate::prelude::*;
use std::str::FromStr;

/// How the coordinate lines of a grid are interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum GridTopology {
    /// independent X / Y / Z coordinate lines, written as a rectilinear grid
    #[display(fmt = "cartesian")]
    Cartesian,
    /// radius / angle / height lines, written as a structured grid of explicit points
    #[display(fmt = "cylindrical")]
    Cylindrical,
}

impl GridTopology {
    /// Build the geometry of a grid from three coordinate lines.
    ///
    /// `counts[n]` lines are taken from `lines[n]` and every coordinate is multiplied by
    /// `scaling` before it is stored.
    pub fn build_geometry(
        &self,
        lines: [&[f64]; 3],
        counts: [usize; 3],
        scaling: f64,
    ) -> Result<Geometry, Error> {
        check_lines(&lines, &counts)?;

        let geometry = match self {
            Self::Cartesian => {
                Geometry::Rectilinear(Rectilinear3D::from_lines(lines, counts, scaling))
            }
            Self::Cylindrical => {
                Geometry::Structured(Structured3D::from_cylindrical(lines, counts, scaling))
            }
        };

        Ok(geometry)
    }
}

fn check_lines(lines: &[&[f64]; 3], counts: &[usize; 3]) -> Result<(), Error> {
    for (axis, (line, count)) in lines.iter().zip(counts.iter()).enumerate() {
        if *count == 0 || *count > line.len() {
            return Err(Error::MeshLines {
                axis,
                count: *count,
                available: line.len(),
            });
        }
    }

    Ok(())
}

impl TryFrom<i32> for GridTopology {
    type Error = Error;

    /// convert from the integer mesh type code, `0` is cartesian and `1` is cylindrical
    fn try_from(mesh_type: i32) -> Result<Self, Self::Error> {
        match mesh_type {
            0 => Ok(Self::Cartesian),
            1 => Ok(Self::Cylindrical),
            other => Err(Error::UnknownTopology(other.to_string())),
        }
    }
}

impl FromStr for GridTopology {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cartesian" | "rectilinear" | "0" => Ok(Self::Cartesian),
            "cylindrical" | "1" => Ok(Self::Cylindrical),
            _ => Err(Error::UnknownTopology(s.to_string())),
        }
    }
}

/// The point locations of a grid
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Rectilinear(Rectilinear3D),
    Structured(Structured3D),
}

impl Geometry {
    pub fn spans(&self) -> &Spans3D {
        match self {
            Self::Rectilinear(rect) => &rect.spans,
            Self::Structured(structured) => &structured.spans,
        }
    }

    pub fn num_points(&self) -> usize {
        self.spans().num_points()
    }

    /// cartesian location of the point `(i, j, k)`, `None` if the index is outside the grid
    pub fn point(&self, i: usize, j: usize, k: usize) -> Option<[f64; 3]> {
        match self {
            Self::Rectilinear(rect) => rect.point(i, j, k),
            Self::Structured(structured) => structured.point(i, j, k),
        }
    }

    /// the topology this geometry is written as
    pub fn topology(&self) -> GridTopology {
        match self {
            Self::Rectilinear(_) => GridTopology::Cartesian,
            Self::Structured(_) => GridTopology::Cylindrical,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn topology_codes() {
        assert_eq!(GridTopology::try_from(0).unwrap(), GridTopology::Cartesian);
        assert_eq!(GridTopology::try_from(1).unwrap(), GridTopology::Cylindrical);
        assert!(matches!(
            GridTopology::try_from(2),
            Err(Error::UnknownTopology(_))
        ));
        assert!(matches!(
            GridTopology::try_from(-1),
            Err(Error::UnknownTopology(_))
        ));
    }

    #[test]
    fn topology_strings() {
        assert_eq!(
            "Cylindrical".parse::<GridTopology>().unwrap(),
            GridTopology::Cylindrical
        );
        assert_eq!(
            "cartesian".parse::<GridTopology>().unwrap(),
            GridTopology::Cartesian
        );
        assert!("spherical".parse::<GridTopology>().is_err());
        assert_eq!(GridTopology::Cylindrical.to_string(), "cylindrical");
    }

    #[test]
    fn cartesian_scaled() {
        let x = [0., 1., 2.];
        let y = [0., 1.];
        let z = [0., 5.];
        let geometry = GridTopology::Cartesian
            .build_geometry([&x, &y, &z], [3, 2, 2], 2.0)
            .unwrap();

        assert_eq!(geometry.num_points(), 12);
        assert_eq!(geometry.point(1, 0, 0), Some([2., 0., 0.]));
        assert_eq!(geometry.point(2, 1, 1), Some([4., 2., 10.]));
        assert_eq!(geometry.point(3, 0, 0), None);
        assert_eq!(geometry.topology(), GridTopology::Cartesian);
    }

    #[test]
    fn cylindrical_transform() {
        let r = [1.];
        let theta = [0., std::f64::consts::FRAC_PI_2];
        let z = [0.];
        let geometry = GridTopology::Cylindrical
            .build_geometry([&r, &theta, &z], [1, 2, 1], 1.0)
            .unwrap();

        assert_eq!(geometry.num_points(), 2);

        let first = geometry.point(0, 0, 0).unwrap();
        let second = geometry.point(0, 1, 0).unwrap();

        for (actual, expected) in first.iter().zip([1., 0., 0.]) {
            assert!((actual - expected).abs() < 1e-12);
        }
        for (actual, expected) in second.iter().zip([0., 1., 0.]) {
            assert!((actual - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn counts_validated() {
        let x = [0., 1.];
        let err = GridTopology::Cartesian
            .build_geometry([&x, &x, &x], [2, 3, 2], 1.0)
            .unwrap_err();

        assert!(matches!(
            err,
            Error::MeshLines {
                axis: 1,
                count: 3,
                available: 2
            }
        ));

        assert!(GridTopology::Cylindrical
            .build_geometry([&x, &x, &x], [2, 2, 0], 1.0)
            .is_err());
    }

    #[test]
    fn counts_use_prefix_of_lines() {
        let x = [0., 1., 2., 3.];
        let geometry = GridTopology::Cartesian
            .build_geometry([&x, &x, &x], [2, 2, 2], 1.0)
            .unwrap();

        match geometry {
            Geometry::Rectilinear(rect) => assert_eq!(rect.mesh.x_locations, vec![0., 1.]),
            Geometry::Structured(_) => panic!("cartesian topology built a structured grid"),
        }
    }
}
