use super::DataArray;
use crate::prelude::*;

/// number of components of every vector field
pub const VECTOR_COMPONENTS: usize = 3;

#[derive(Deref, Debug, Clone)]
/// Array container for vector information in a 3D domain such as velocity
///
/// The array is component major: the first axis selects the cartesian component (x, y, z) and
/// the remaining three axes are the X, Y and Z point indices. For a mesh with `nx=100`,
/// `ny=200` and `nz=300` points your array shape should be `(3, 100, 200, 300)`.
pub struct Field3D<'a, NUM>(ArrayView4<'a, NUM>);

impl<'a, NUM> Field3D<'a, NUM>
where
    NUM: Numeric,
{
    /// Construct a `Field3D` from an array view.
    pub fn new(arr: ArrayView4<'a, NUM>) -> Self {
        Self(arr)
    }

    /// check that there are exactly three components for every point of the mesh
    pub(crate) fn check_spans(&self, name: &str, spans: &Spans3D) -> Result<(), Error> {
        let (components, nx, ny, nz) = self.0.dim();

        if components != VECTOR_COMPONENTS {
            return Err(Error::ComponentCount {
                name: name.to_string(),
                components,
            });
        }

        if [nx, ny, nz] != spans.dims() {
            return Err(Error::ShapeMismatch {
                name: name.to_string(),
                expected: spans.dims(),
                actual: self.0.shape().to_vec(),
            });
        }

        Ok(())
    }

    /// iterate over the values in the order the points are stored. Each point yields its
    /// three components before moving on to the next point, the first spatial axis varies
    /// fastest.
    pub fn iter_points(&self) -> impl Iterator<Item = NUM> + 'a {
        self.0.clone().reversed_axes().into_iter().copied()
    }

    /// flatten the values into an owned point data array
    pub(crate) fn into_data_array(self, name: &str) -> DataArray {
        let values: Vec<NUM> = self.iter_points().collect();
        DataArray::new(
            name.to_string(),
            VECTOR_COMPONENTS,
            NUM::into_values(values),
        )
    }
}

impl<'a, NUM> From<ArrayView4<'a, NUM>> for Field3D<'a, NUM>
where
    NUM: Numeric,
{
    fn from(x: ArrayView4<'a, NUM>) -> Self {
        Self::new(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array4;

    #[test]
    fn tuple_order() {
        let (nx, ny, nz) = (3, 2, 2);
        let arr = Array4::from_shape_fn((3, nx, ny, nz), |(n, i, j, k)| {
            (1000 * n + 100 * i + 10 * j + k) as f64
        });

        let flat: Vec<f64> = Field3D::new(arr.view()).iter_points().collect();
        assert_eq!(flat.len(), 3 * nx * ny * nz);

        let mut idx = 0;
        for k in 0..nz {
            for j in 0..ny {
                for i in 0..nx {
                    for n in 0..3 {
                        assert_eq!(flat[idx], arr[[n, i, j, k]]);
                        idx += 1;
                    }
                }
            }
        }
    }

    #[test]
    fn component_count() {
        let arr = Array4::<f32>::zeros((2, 2, 2, 2));
        let err = Field3D::new(arr.view())
            .check_spans("velocity", &Spans3D::new(2, 2, 2))
            .unwrap_err();

        assert!(matches!(err, Error::ComponentCount { components: 2, .. }));
    }

    #[test]
    fn shape_checked() {
        let arr = Array4::<f32>::zeros((3, 2, 2, 2));
        let field = Field3D::new(arr.view());

        assert!(field.check_spans("velocity", &Spans3D::new(2, 2, 2)).is_ok());
        assert!(matches!(
            field.check_spans("velocity", &Spans3D::new(2, 2, 1)),
            Err(Error::ShapeMismatch { .. })
        ));
    }
}
