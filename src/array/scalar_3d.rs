use super::DataArray;
use crate::prelude::*;

#[derive(Deref, Debug, Clone)]
/// Array container for scalar information in a 3D domain such as pressure
///
/// The first axis should contain X information, the second axis Y information and the third
/// axis Z information. No vector information can be stored in `Scalar3D`. If you need to store
/// vector data, see [Field3D](crate::Field3D)
///
/// ## Example
///
/// For some scalar data (such as a pressure field, or density field), if your mesh has `nx=100`,
/// `ny=200` and `nz=300` points then your array shape should be `(100, 200, 300)`
pub struct Scalar3D<'a, NUM>(ArrayView3<'a, NUM>);

impl<'a, NUM> Scalar3D<'a, NUM>
where
    NUM: Numeric,
{
    /// Construct a `Scalar3D` from an array view.
    pub fn new(arr: ArrayView3<'a, NUM>) -> Self {
        Self(arr)
    }

    /// check that there is exactly one value for every point of the mesh
    pub(crate) fn check_spans(&self, name: &str, spans: &Spans3D) -> Result<(), Error> {
        if self.0.shape() != &spans.dims()[..] {
            return Err(Error::ShapeMismatch {
                name: name.to_string(),
                expected: spans.dims(),
                actual: self.0.shape().to_vec(),
            });
        }

        Ok(())
    }

    /// iterate over the values in the order the points are stored: the first axis
    /// varies fastest and the third axis slowest
    pub fn iter_points(&self) -> impl Iterator<Item = NUM> + 'a {
        self.0.clone().reversed_axes().into_iter().copied()
    }

    /// flatten the values into an owned point data array
    pub(crate) fn into_data_array(self, name: &str) -> DataArray {
        let values: Vec<NUM> = self.iter_points().collect();
        DataArray::new(name.to_string(), 1, NUM::into_values(values))
    }
}

impl<'a, NUM> From<ArrayView3<'a, NUM>> for Scalar3D<'a, NUM>
where
    NUM: Numeric,
{
    fn from(x: ArrayView3<'a, NUM>) -> Self {
        Self::new(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iter_order() {
        let nx = 3;
        let ny = 2;
        let nz = 4;

        let arr = ndarray::Array1::range(0., (nx * ny * nz) as f64, 1.)
            .into_shape((nx, ny, nz))
            .unwrap();

        let mut expected = Vec::new();

        for k in 0..nz {
            for j in 0..ny {
                for i in 0..nx {
                    expected.push(arr[[i, j, k]]);
                }
            }
        }

        let actual = Scalar3D::new(arr.view()).iter_points().collect::<Vec<_>>();

        assert_eq!(expected, actual)
    }

    #[test]
    fn flat_index() {
        let arr = ndarray::Array3::from_shape_fn((2, 2, 2), |(i, j, k)| (i + 2 * j + 4 * k) as f32);
        let array = Scalar3D::new(arr.view()).into_data_array("index");
        let flat = array.values().as_f32().unwrap();

        for k in 0..2 {
            for j in 0..2 {
                for i in 0..2 {
                    assert_eq!(flat[k * 4 + j * 2 + i], (i + 2 * j + 4 * k) as f32);
                }
            }
        }

        assert_eq!(array.components(), 1);
        assert_eq!(array.name(), "index");
    }

    #[test]
    fn shape_checked() {
        let arr = ndarray::Array3::<f64>::zeros((2, 3, 4));
        let field = Scalar3D::new(arr.view());

        assert!(field.check_spans("p", &Spans3D::new(2, 3, 4)).is_ok());

        let err = field.check_spans("p", &Spans3D::new(2, 3, 5)).unwrap_err();
        assert!(matches!(err, Error::ShapeMismatch { .. }));
    }
}
