//! # vtk-file-io
//!
//! Export scalar and vector fields sampled on a 3D mesh to VTK files that can be opened
//! in paraview.
//!
//! Two mesh topologies are supported:
//!
//! * [`GridTopology::Cartesian`]: the mesh is described by one coordinate line per axis and
//!   written as a rectilinear grid (`.vtr` / `.vtk`)
//! * [`GridTopology::Cylindrical`]: the lines are `(radius, angle, height)` and every point
//!   is transformed to cartesian coordinates, written as a structured grid (`.vts` / `.vtk`)
//!
//! Both can be written in the XML or the legacy container, with ascii or binary data. XML
//! binary data may additionally be compressed with zlib.
//!
//! ```no_run
//! use vtk_file_io::{FileIoConfig, GridTopology, VtkFileIo};
//!
//! let config = FileIoConfig::new("flow", GridTopology::Cartesian).compress(true);
//! let mut io = VtkFileIo::new(config);
//!
//! let x = [0., 1., 2.];
//! let y = [0., 1.];
//! let z = [0., 5.];
//! io.set_mesh_lines([&x, &y, &z], [3, 2, 2], 1.0)?;
//!
//! let rho = ndarray::Array3::<f64>::zeros((3, 2, 2));
//! io.add_scalar_field("rho", &rho)?;
//!
//! // writes `flow.vtr`
//! io.write()?;
//! # Ok::<(), vtk_file_io::Error>(())
//! ```

pub mod array;
mod file_io;
pub mod grid;
pub mod mesh;
mod point_data;
pub mod prelude;
mod traits;
pub mod write_vtk;

pub use array::{DataArray, Field3D, Scalar3D, Values};
pub use file_io::{FileIoConfig, VtkFileIo, DEFAULT_PAD_LENGTH};
pub use grid::Grid;
pub use mesh::{Geometry, GridTopology, Mesh3D, Rectilinear3D, Spans3D, Structured3D};
pub use point_data::PointData;
pub use traits::{Numeric, Precision};
pub use write_vtk::{write_vtk, Encoding, OutputFormat, WriteOptions};

pub use ndarray;

/// general purpose error enumeration for possible causes of failure.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("unknown mesh type `{0}`, expected 0 (cartesian) or 1 (cylindrical)")]
    UnknownTopology(String),
    #[error("axis {axis} requests {count} mesh lines but {available} coordinates were given")]
    MeshLines {
        axis: usize,
        count: usize,
        available: usize,
    },
    #[error("mesh lines have not been set")]
    MeshNotSet,
    #[error(
        "cannot change the mesh from {current:?} to {requested:?} points per axis while {fields} fields are attached"
    )]
    MeshResize {
        current: [usize; 3],
        requested: [usize; 3],
        fields: usize,
    },
    #[error("field `{name}` has shape {actual:?} but the mesh has {expected:?} points per axis")]
    ShapeMismatch {
        name: String,
        expected: [usize; 3],
        actual: Vec<usize>,
    },
    #[error("vector field `{name}` has {components} components, expected 3")]
    ComponentCount { name: String, components: usize },
    #[error("field names must not be empty")]
    InvalidFieldName,
    #[error("An io error occured: `{0}`")]
    Io(#[from] std::io::Error),
    #[error("Could not write XML data to file: `{0}`")]
    XmlWrite(#[from] quick_xml::Error),
    #[error("internal error: {0}")]
    Internal(String),
}

impl Error {
    /// `true` for errors that signal a bug in this crate rather than bad input from
    /// the caller
    pub fn is_internal(&self) -> bool {
        matches!(self, Error::Internal(_))
    }
}
