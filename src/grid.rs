//! The in-memory grid: mesh geometry plus the point data attached to it.

use crate::array::{Field3D, Scalar3D};
use crate::prelude::*;
use ndarray::{AsArray, Ix3, Ix4};
use tracing::{debug, error};

/// A grid of a fixed [`GridTopology`].
///
/// The geometry is absent until [`Grid::set_mesh_lines`] is called. Every array of point
/// data attached afterwards must have exactly one value (or one 3-tuple) per point.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    topology: GridTopology,
    geometry: Option<Geometry>,
    point_data: PointData,
}

impl Grid {
    pub fn new(topology: GridTopology) -> Self {
        Self {
            topology,
            geometry: None,
            point_data: PointData::new(),
        }
    }

    pub fn topology(&self) -> GridTopology {
        self.topology
    }

    pub fn geometry(&self) -> Option<&Geometry> {
        self.geometry.as_ref()
    }

    pub fn point_data(&self) -> &PointData {
        &self.point_data
    }

    /// Set the mesh from three coordinate lines, see
    /// [`GridTopology::build_geometry`](crate::GridTopology::build_geometry).
    ///
    /// The mesh may be replaced at any time, but only by a mesh with the same number of
    /// points along every axis while fields are attached.
    pub fn set_mesh_lines(
        &mut self,
        lines: [&[f64]; 3],
        counts: [usize; 3],
        scaling: f64,
    ) -> Result<(), Error> {
        let geometry = self.topology.build_geometry(lines, counts, scaling)?;

        if let Some(current) = &self.geometry {
            // attached arrays were flattened for the current extent
            if !self.point_data.is_empty() && current.spans().dims() != geometry.spans().dims() {
                return Err(Error::MeshResize {
                    current: current.spans().dims(),
                    requested: geometry.spans().dims(),
                    fields: self.point_data.len(),
                });
            }
        }

        debug!(
            topology = %self.topology,
            ?counts,
            scaling,
            points = geometry.num_points(),
            "mesh lines set"
        );

        self.geometry = Some(geometry);
        Ok(())
    }

    /// the extent of the current mesh
    pub fn spans(&self) -> Result<&Spans3D, Error> {
        self.geometry
            .as_ref()
            .map(Geometry::spans)
            .ok_or(Error::MeshNotSet)
    }

    /// Attach a scalar field indexed `[i, j, k]`. The shape of the field must match the
    /// number of mesh lines along each axis.
    pub fn add_scalar_field<'a, NUM, V>(&mut self, name: &str, field: V) -> Result<(), Error>
    where
        NUM: Numeric,
        V: AsArray<'a, NUM, Ix3>,
    {
        check_name(name)?;
        let field = Scalar3D::new(field.into());
        field.check_spans(name, self.spans()?)?;

        self.attach(field.into_data_array(name));
        Ok(())
    }

    /// Attach a vector field indexed `[component, i, j, k]` with exactly three components.
    pub fn add_vector_field<'a, NUM, V>(&mut self, name: &str, field: V) -> Result<(), Error>
    where
        NUM: Numeric,
        V: AsArray<'a, NUM, Ix4>,
    {
        check_name(name)?;
        let field = Field3D::new(field.into());
        field.check_spans(name, self.spans()?)?;

        self.attach(field.into_data_array(name));
        Ok(())
    }

    fn attach(&mut self, array: DataArray) {
        debug!(
            name = array.name(),
            components = array.components(),
            precision = ?array.precision(),
            "attaching point data"
        );

        if self.point_data.insert(array).is_some() {
            debug!("replaced an existing array of the same name");
        }
    }

    pub fn number_of_fields(&self) -> usize {
        self.point_data.len()
    }

    pub fn field_names(&self) -> Vec<String> {
        self.point_data.names().map(str::to_string).collect()
    }

    /// remove a single field, returns `true` if it was attached
    pub fn remove_field(&mut self, name: &str) -> bool {
        self.point_data.remove(name).is_some()
    }

    pub fn clear_all_fields(&mut self) {
        debug!(fields = self.point_data.len(), "clearing all point data");
        self.point_data.clear()
    }

    /// The geometry, checked to be present and consistent with the topology of the grid.
    ///
    /// A geometry of the wrong kind can only be the result of a bug in this crate and is
    /// reported as [`Error::Internal`].
    pub(crate) fn checked_geometry(&self) -> Result<&Geometry, Error> {
        let geometry = self.geometry.as_ref().ok_or(Error::MeshNotSet)?;

        if geometry.topology() != self.topology {
            error!(
                topology = %self.topology,
                geometry = %geometry.topology(),
                "grid geometry does not match its topology"
            );
            return Err(Error::Internal(format!(
                "{} grid holds a {} geometry",
                self.topology,
                geometry.topology()
            )));
        }

        Ok(geometry)
    }
}

fn check_name(name: &str) -> Result<(), Error> {
    if name.trim().is_empty() {
        return Err(Error::InvalidFieldName);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{Array3, Array4};

    fn cartesian() -> Grid {
        let line = [0., 1.];
        let mut grid = Grid::new(GridTopology::Cartesian);
        grid.set_mesh_lines([&line, &line, &line], [2, 2, 2], 1.0)
            .unwrap();
        grid
    }

    #[test]
    fn field_before_mesh() {
        let mut grid = Grid::new(GridTopology::Cylindrical);
        let field = Array3::<f64>::zeros((2, 2, 2));

        assert!(matches!(
            grid.add_scalar_field("rho", &field),
            Err(Error::MeshNotSet)
        ));
        assert!(matches!(grid.checked_geometry(), Err(Error::MeshNotSet)));
    }

    #[test]
    fn size_mismatch() {
        let mut grid = cartesian();
        let field = Array3::<f32>::zeros((2, 2, 3));

        assert!(matches!(
            grid.add_scalar_field("rho", &field),
            Err(Error::ShapeMismatch { .. })
        ));
        assert_eq!(grid.number_of_fields(), 0);
    }

    #[test]
    fn mixed_precision() {
        let mut grid = cartesian();
        grid.add_scalar_field("single", &Array3::<f32>::zeros((2, 2, 2)))
            .unwrap();
        grid.add_vector_field("double", &Array4::<f64>::zeros((3, 2, 2, 2)))
            .unwrap();

        let data = grid.point_data();
        assert_eq!(data.get("single").unwrap().precision(), Precision::Float32);
        assert_eq!(data.get("double").unwrap().precision(), Precision::Float64);
        assert_eq!(data.get("double").unwrap().tuples(), 8);
        assert_eq!(grid.field_names(), vec!["single", "double"]);
    }

    #[test]
    fn empty_name() {
        let mut grid = cartesian();
        assert!(matches!(
            grid.add_scalar_field(" ", &Array3::<f64>::zeros((2, 2, 2))),
            Err(Error::InvalidFieldName)
        ));
    }

    #[test]
    fn resize_with_fields() {
        let mut grid = cartesian();
        grid.add_scalar_field("rho", &Array3::<f64>::zeros((2, 2, 2)))
            .unwrap();

        let line = [0., 1., 2.];
        assert!(matches!(
            grid.set_mesh_lines([&line, &line, &line], [3, 2, 2], 1.0),
            Err(Error::MeshResize { .. })
        ));

        // same extent with different coordinates is fine
        grid.set_mesh_lines([&line, &line, &line], [2, 2, 2], 3.0)
            .unwrap();

        let long = [0., 1., 2., 3.];
        assert!(matches!(
            grid.set_mesh_lines([&long, &long, &long], [4, 2, 1], 1.0),
            Err(Error::MeshResize { .. })
        ));

        grid.clear_all_fields();
        grid.set_mesh_lines([&line, &line, &line], [3, 2, 2], 1.0)
            .unwrap();
        assert_eq!(grid.spans().unwrap().num_points(), 12);
    }

    #[test]
    fn reshape_with_fields() {
        let line = [0., 1., 2.];
        let mut grid = Grid::new(GridTopology::Cartesian);
        grid.set_mesh_lines([&line, &line, &line], [2, 2, 3], 1.0)
            .unwrap();
        grid.add_scalar_field("f", &Array3::<f64>::zeros((2, 2, 3)))
            .unwrap();

        let err = grid
            .set_mesh_lines([&line, &line, &line], [3, 2, 2], 1.0)
            .unwrap_err();
        assert!(matches!(
            err,
            Error::MeshResize {
                current: [2, 2, 3],
                requested: [3, 2, 2],
                fields: 1
            }
        ));

        // the previous mesh is kept
        assert_eq!(grid.spans().unwrap().dims(), [2, 2, 3]);
    }

    #[test]
    fn remove_field() {
        let mut grid = cartesian();
        grid.add_scalar_field("rho", &Array3::<f64>::zeros((2, 2, 2)))
            .unwrap();

        assert!(grid.remove_field("rho"));
        assert!(!grid.remove_field("rho"));
        assert_eq!(grid.number_of_fields(), 0);
    }

    #[test]
    fn mismatched_geometry_is_internal() {
        let mut grid = cartesian();
        let line = [1., 2.];
        grid.geometry = Some(
            GridTopology::Cylindrical
                .build_geometry([&line, &line, &line], [2, 2, 2], 1.0)
                .unwrap(),
        );

        let err = grid.checked_geometry().unwrap_err();
        assert!(err.is_internal());
    }
}
