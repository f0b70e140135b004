//! Common traits and types that are useful for working with `vtk_file_io`
#![allow(unused_imports)]

pub use crate::file_io::{FileIoConfig, VtkFileIo};
pub use crate::mesh::GridTopology;
pub use crate::traits::{Numeric, Precision};
pub use crate::write_vtk::{Encoding, OutputFormat};

pub(crate) use crate::Error;
pub(crate) use std::io::Write;

pub(crate) use crate::array::{DataArray, Values};
pub(crate) use crate::mesh::{Geometry, Spans3D};
pub(crate) use crate::point_data::PointData;

pub(crate) use derive_more::{Constructor, Deref, Display};

pub(crate) use ndarray::{ArrayView3, ArrayView4};
