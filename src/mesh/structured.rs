use super::Spans3D;

#[derive(Debug, Clone, PartialEq)]
/// A 3D domain where the location of every point is stored explicitly.
///
/// `points` holds `(x, y, z)` triples, one per point, with the first axis index varying
/// fastest.
pub struct Structured3D {
    pub spans: Spans3D,
    pub points: Vec<f64>,
}

impl Structured3D {
    pub fn new(points: Vec<f64>, spans: Spans3D) -> Self {
        debug_assert_eq!(points.len(), 3 * spans.num_points());
        Self { spans, points }
    }

    /// generate the cartesian location of every point of a cylindrical mesh.
    ///
    /// `lines` are radius, angle (in radians) and height.
    pub(crate) fn from_cylindrical(lines: [&[f64]; 3], counts: [usize; 3], scaling: f64) -> Self {
        let [radius, angle, height] = lines;
        let [nr, na, nh] = counts;

        let mut points = Vec::with_capacity(3 * nr * na * nh);

        for k in 0..nh {
            for j in 0..na {
                let (sin, cos) = angle[j].sin_cos();

                for i in 0..nr {
                    points.push(radius[i] * cos * scaling);
                    points.push(radius[i] * sin * scaling);
                    points.push(height[k] * scaling);
                }
            }
        }

        Self::new(points, Spans3D::new(nr, na, nh))
    }

    pub fn point(&self, i: usize, j: usize, k: usize) -> Option<[f64; 3]> {
        let idx = 3 * self.spans.flat_index(i, j, k)?;
        Some([self.points[idx], self.points[idx + 1], self.points[idx + 2]])
    }
}

#[test]
fn point_order() {
    let radius = [1., 2.];
    let angle = [0., std::f64::consts::PI];
    let height = [0., 3.];

    let grid = Structured3D::from_cylindrical([&radius, &angle, &height], [2, 2, 2], 1.0);

    assert_eq!(grid.points.len(), 3 * 8);

    // the radius varies fastest, then the angle, then the height
    let second = &grid.points[3..6];
    assert!((second[0] - 2.).abs() < 1e-12);
    assert!(second[1].abs() < 1e-12);
    assert_eq!(second[2], 0.);

    let third = &grid.points[6..9];
    assert!((third[0] + 1.).abs() < 1e-12);

    let fifth = &grid.points[12..15];
    assert_eq!(fifth[2], 3.);
}
