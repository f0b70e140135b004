//! Serialization of a [`Grid`] to the VTK file formats.
//!
//! The XML format (`.vtr` for rectilinear grids, `.vts` for structured grids) writes every
//! array inline, either as ascii text or as base64 encoded binary that can optionally be
//! compressed with zlib. The legacy format (`.vtk`) writes ascii text or big endian binary
//! and has no support for compression.
//!
//! Every call serializes the complete current state of the grid; nothing is appended to
//! an existing file.

mod compress;
mod legacy;
mod xml;

use crate::grid::Grid;
use crate::prelude::*;

pub use compress::BLOCK_SIZE;

/// header line of legacy files when none is configured
pub const DEFAULT_HEADER: &str = "vtk output";

/// The container format of the output file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum OutputFormat {
    /// `.vtk` files
    #[display(fmt = "legacy")]
    Legacy,
    /// `.vtr` / `.vts` files
    #[default]
    #[display(fmt = "xml")]
    Xml,
}

impl OutputFormat {
    /// file extension (without the leading `.`) for a grid of the given topology
    pub fn extension(&self, topology: GridTopology) -> &'static str {
        match (self, topology) {
            (Self::Legacy, _) => "vtk",
            (Self::Xml, GridTopology::Cartesian) => "vtr",
            (Self::Xml, GridTopology::Cylindrical) => "vts",
        }
    }
}

/// How the numbers of every array are encoded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum Encoding {
    #[display(fmt = "ascii")]
    Ascii,
    #[default]
    #[display(fmt = "binary")]
    Binary,
}

impl Encoding {
    pub fn from_binary_flag(binary: bool) -> Self {
        if binary {
            Self::Binary
        } else {
            Self::Ascii
        }
    }
}

/// Options shared by the writers. Options that do not apply to a format are ignored.
#[derive(Debug, Clone, PartialEq, Constructor)]
pub struct WriteOptions {
    pub encoding: Encoding,
    /// zlib compression of binary XML data
    pub compress: bool,
    /// the header line of legacy files
    pub header: String,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            encoding: Encoding::Binary,
            compress: false,
            header: DEFAULT_HEADER.to_string(),
        }
    }
}

/// Write a grid to a `Writer` in the given format
pub fn write_vtk<W: Write>(
    writer: W,
    grid: &Grid,
    format: OutputFormat,
    options: &WriteOptions,
) -> Result<(), Error> {
    let geometry = grid.checked_geometry()?;

    match format {
        OutputFormat::Xml => xml::write_xml(writer, geometry, grid.point_data(), options),
        OutputFormat::Legacy => legacy::write_legacy(writer, geometry, grid.point_data(), options),
    }
}

#[test]
fn extensions() {
    assert_eq!(OutputFormat::Legacy.extension(GridTopology::Cylindrical), "vtk");
    assert_eq!(OutputFormat::Xml.extension(GridTopology::Cartesian), "vtr");
    assert_eq!(OutputFormat::Xml.extension(GridTopology::Cylindrical), "vts");
    assert_eq!(OutputFormat::default(), OutputFormat::Xml);
    assert_eq!(Encoding::from_binary_flag(false), Encoding::Ascii);
}
