use std::fmt;

/// Describes the extent of the computational domain, the index of the first and last point
/// along every axis.
///
/// Most often you want to use the [`Spans3D::new`] constructor which places the first point
/// of every axis at index `0`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Spans3D {
    pub x_start: usize,
    pub x_end: usize,
    pub y_start: usize,
    pub y_end: usize,
    pub z_start: usize,
    pub z_end: usize,
}

impl Spans3D {
    /// create a simple span geometry from some known point lengths.
    ///
    /// every length must be at least 1
    pub fn new(nx: usize, ny: usize, nz: usize) -> Self {
        debug_assert!(nx > 0 && ny > 0 && nz > 0);

        Self {
            x_start: 0,
            x_end: nx.saturating_sub(1),
            y_start: 0,
            y_end: ny.saturating_sub(1),
            z_start: 0,
            z_end: nz.saturating_sub(1),
        }
    }

    /// Get the total length in the X direction for this
    /// local segment as paraview would interpret it
    pub fn x_len(&self) -> usize {
        self.x_end - self.x_start + 1
    }

    /// Get the total length in the Y direction for this
    /// local segment as paraview would interpret it
    pub fn y_len(&self) -> usize {
        self.y_end - self.y_start + 1
    }

    /// Get the total length in the Z direction for this
    /// local segment as paraview would interpret it
    pub fn z_len(&self) -> usize {
        self.z_end - self.z_start + 1
    }

    /// number of points along each axis
    pub fn dims(&self) -> [usize; 3] {
        [self.x_len(), self.y_len(), self.z_len()]
    }

    pub fn num_points(&self) -> usize {
        self.x_len() * self.y_len() * self.z_len()
    }

    /// flat index of the point `(i, j, k)`, the first axis varies fastest
    pub fn flat_index(&self, i: usize, j: usize, k: usize) -> Option<usize> {
        if i >= self.x_len() || j >= self.y_len() || k >= self.z_len() {
            return None;
        }

        Some(i + self.x_len() * (j + self.y_len() * k))
    }
}

/// Format the spans into a string that would be written to a vtk file
impl fmt::Display for Spans3D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {} {}",
            self.x_start, self.x_end, self.y_start, self.y_end, self.z_start, self.z_end
        )
    }
}

#[test]
fn extent_string() {
    let spans = Spans3D::new(3, 2, 1);
    assert_eq!(spans.to_string(), "0 2 0 1 0 0");
    assert_eq!(spans.dims(), [3, 2, 1]);
    assert_eq!(spans.num_points(), 6);
}

#[test]
fn flat_index() {
    let spans = Spans3D::new(2, 2, 2);
    assert_eq!(spans.flat_index(1, 0, 0), Some(1));
    assert_eq!(spans.flat_index(0, 1, 0), Some(2));
    assert_eq!(spans.flat_index(1, 1, 1), Some(7));
    assert_eq!(spans.flat_index(2, 0, 0), None);
}
