use super::Spans3D;

#[derive(Debug, Clone, PartialEq)]
/// Full information on a 3D cartesian computational domain.
///
/// A rectilinear grid only stores the coordinate lines of each axis; the point `(i, j, k)`
/// is located at `(x_locations[i], y_locations[j], z_locations[k])`.
pub struct Rectilinear3D {
    pub spans: Spans3D,
    pub mesh: Mesh3D,
}

impl Rectilinear3D {
    /// create a new domain from mesh information and span information.
    pub fn new(mesh: Mesh3D, spans: Spans3D) -> Rectilinear3D {
        Self { mesh, spans }
    }

    /// copy the first `counts[n]` coordinates of every line, multiplied by `scaling`
    pub(crate) fn from_lines(lines: [&[f64]; 3], counts: [usize; 3], scaling: f64) -> Self {
        let [x, y, z] = lines;
        let [nx, ny, nz] = counts;

        let scale = |line: &[f64], count: usize| -> Vec<f64> {
            line[..count].iter().map(|value| value * scaling).collect()
        };

        let mesh = Mesh3D::new(scale(x, nx), scale(y, ny), scale(z, nz));
        Self::new(mesh, Spans3D::new(nx, ny, nz))
    }

    pub fn point(&self, i: usize, j: usize, k: usize) -> Option<[f64; 3]> {
        Some([
            *self.mesh.x_locations.get(i)?,
            *self.mesh.y_locations.get(j)?,
            *self.mesh.z_locations.get(k)?,
        ])
    }
}

/// Describes the computational stencil for 3D rectilinear geometry
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh3D {
    pub x_locations: Vec<f64>,
    pub y_locations: Vec<f64>,
    pub z_locations: Vec<f64>,
}

impl Mesh3D {
    /// Constructor for the 3D mesh.
    pub fn new(x_locations: Vec<f64>, y_locations: Vec<f64>, z_locations: Vec<f64>) -> Mesh3D {
        Self {
            x_locations,
            y_locations,
            z_locations,
        }
    }
}

#[test]
fn scaled_lines() {
    let x = [0., 1., 2.];
    let y = [0., 1.];
    let z = [0., 5.];

    let rect = Rectilinear3D::from_lines([&x, &y, &z], [3, 2, 2], 2.0);

    assert_eq!(rect.mesh.x_locations, vec![0., 2., 4.]);
    assert_eq!(rect.mesh.y_locations, vec![0., 2.]);
    assert_eq!(rect.mesh.z_locations, vec![0., 10.]);
    assert_eq!(rect.spans, Spans3D::new(3, 2, 2));
}
