use crate::grid::Grid;
use crate::prelude::*;
use crate::write_vtk::{self, WriteOptions, DEFAULT_HEADER};

use ndarray::{AsArray, Ix3, Ix4};
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// zero padding width of the timestep suffix when none is configured
pub const DEFAULT_PAD_LENGTH: usize = 10;

/// Configuration of a [`VtkFileIo`].
///
/// The fields are public for direct use, but builder style setters are also provided:
///
/// ```
/// use vtk_file_io::{FileIoConfig, GridTopology};
///
/// let config = FileIoConfig::new("out/e_field", GridTopology::Cylindrical)
///     .binary(false)
///     .timestep(Some(120))
///     .pad_length(6);
///
/// assert_eq!(config.binary, false);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FileIoConfig {
    /// base of the output path, without timestep suffix or extension
    pub filename: String,
    pub topology: GridTopology,
    /// binary or ascii data
    pub binary: bool,
    /// zlib compression of binary XML data
    pub compress: bool,
    /// when set, the output filename is suffixed with `_<timestep>`
    pub timestep: Option<u64>,
    /// minimum number of digits of the timestep suffix
    pub pad_length: usize,
    /// header line of legacy files
    pub header: String,
}

impl FileIoConfig {
    /// Create a new configuration with default parameters: binary, uncompressed data and
    /// no timestep suffix
    pub fn new<T: Into<String>>(filename: T, topology: GridTopology) -> Self {
        Self {
            filename: filename.into(),
            topology,
            binary: true,
            compress: false,
            timestep: None,
            pad_length: DEFAULT_PAD_LENGTH,
            header: DEFAULT_HEADER.to_string(),
        }
    }

    pub fn binary(mut self, binary: bool) -> Self {
        self.binary = binary;
        self
    }

    /// Compression only applies to binary data in the XML format
    pub fn compress(mut self, compress: bool) -> Self {
        self.compress = compress;
        self
    }

    pub fn timestep(mut self, timestep: Option<u64>) -> Self {
        self.timestep = timestep;
        self
    }

    pub fn pad_length(mut self, pad_length: usize) -> Self {
        self.pad_length = pad_length;
        self
    }

    /// The header line of legacy files. Only the first line is used.
    pub fn header<T: Into<String>>(mut self, header: T) -> Self {
        self.header = header.into();
        self
    }
}

/// Exports fields sampled on a cartesian or cylindrical mesh to VTK files.
///
/// The usual sequence of calls is:
///
/// 1. [`set_mesh_lines`](VtkFileIo::set_mesh_lines) once,
/// 2. [`add_scalar_field`](VtkFileIo::add_scalar_field) /
///    [`add_vector_field`](VtkFileIo::add_vector_field) for every field,
/// 3. [`write`](VtkFileIo::write),
/// 4. [`clear_all_fields`](VtkFileIo::clear_all_fields) and
///    [`set_timestep`](VtkFileIo::set_timestep) before adding the fields of the next step.
#[derive(Debug, Clone)]
pub struct VtkFileIo {
    config: FileIoConfig,
    grid: Grid,
}

impl VtkFileIo {
    pub fn new(config: FileIoConfig) -> Self {
        let grid = Grid::new(config.topology);
        Self { config, grid }
    }

    /// Construct from the integer mesh type code: `0` for a cartesian mesh and `1` for a
    /// cylindrical mesh. Any other code is an error.
    pub fn from_mesh_type<T: Into<String>>(filename: T, mesh_type: i32) -> Result<Self, Error> {
        let topology = GridTopology::try_from(mesh_type)?;
        Ok(Self::new(FileIoConfig::new(filename, topology)))
    }

    pub fn config(&self) -> &FileIoConfig {
        &self.config
    }

    pub fn topology(&self) -> GridTopology {
        self.grid.topology()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn set_filename<T: Into<String>>(&mut self, filename: T) {
        self.config.filename = filename.into();
    }

    pub fn set_binary(&mut self, binary: bool) {
        self.config.binary = binary;
    }

    pub fn set_compress(&mut self, compress: bool) {
        self.config.compress = compress;
    }

    pub fn set_header<T: Into<String>>(&mut self, header: T) {
        self.config.header = header.into();
    }

    /// activate the timestep suffix of the output filename
    pub fn set_timestep(&mut self, timestep: u64) {
        self.config.timestep = Some(timestep);
    }

    pub fn clear_timestep(&mut self) {
        self.config.timestep = None;
    }

    /// Set the mesh from three coordinate lines: X / Y / Z for a cartesian mesh, and
    /// radius / angle / height for a cylindrical mesh. The first `counts[n]` values of
    /// `lines[n]` are used and every coordinate is multiplied by `scaling`.
    pub fn set_mesh_lines(
        &mut self,
        lines: [&[f64]; 3],
        counts: [usize; 3],
        scaling: f64,
    ) -> Result<(), Error> {
        self.grid.set_mesh_lines(lines, counts, scaling)
    }

    /// Attach a scalar field indexed `[i, j, k]`, either `f32` or `f64`.
    ///
    /// A field with the same name as an attached field replaces it.
    pub fn add_scalar_field<'a, NUM, V>(&mut self, name: &str, field: V) -> Result<(), Error>
    where
        NUM: Numeric,
        V: AsArray<'a, NUM, Ix3>,
    {
        self.grid.add_scalar_field(name, field)
    }

    /// Attach a vector field indexed `[component, i, j, k]`, either `f32` or `f64`.
    ///
    /// A field with the same name as an attached field replaces it.
    pub fn add_vector_field<'a, NUM, V>(&mut self, name: &str, field: V) -> Result<(), Error>
    where
        NUM: Numeric,
        V: AsArray<'a, NUM, Ix4>,
    {
        self.grid.add_vector_field(name, field)
    }

    pub fn number_of_fields(&self) -> usize {
        self.grid.number_of_fields()
    }

    pub fn field_names(&self) -> Vec<String> {
        self.grid.field_names()
    }

    pub fn remove_field(&mut self, name: &str) -> bool {
        self.grid.remove_field(name)
    }

    pub fn clear_all_fields(&mut self) {
        self.grid.clear_all_fields()
    }

    /// The output filename without extension: the base filename, suffixed with
    /// `_<timestep>` zero padded to at least `pad_length` digits if a timestep is active.
    pub fn timestep_filename(&self, pad_length: usize) -> String {
        match self.config.timestep {
            Some(timestep) => format!(
                "{}_{:0width$}",
                self.config.filename,
                timestep,
                width = pad_length
            ),
            None => self.config.filename.clone(),
        }
    }

    /// The full path [`write_format`](VtkFileIo::write_format) writes to
    pub fn output_path(&self, format: OutputFormat) -> PathBuf {
        let mut path = self.timestep_filename(self.config.pad_length);
        path.push('.');
        path.push_str(format.extension(self.topology()));
        PathBuf::from(path)
    }

    /// Write the grid and all attached fields in the XML format, returning the path of the
    /// file.
    pub fn write(&self) -> Result<PathBuf, Error> {
        self.write_xml()
    }

    pub fn write_xml(&self) -> Result<PathBuf, Error> {
        self.write_format(OutputFormat::Xml)
    }

    pub fn write_legacy(&self) -> Result<PathBuf, Error> {
        self.write_format(OutputFormat::Legacy)
    }

    /// Write the current state of the grid to [`output_path`](VtkFileIo::output_path),
    /// replacing any existing file.
    ///
    /// The data is first written to a sibling `.partial` file which is renamed over the
    /// output path once it is complete. A failed write leaves any previous file untouched.
    pub fn write_format(&self, format: OutputFormat) -> Result<PathBuf, Error> {
        self.grid.checked_geometry()?;

        let path = self.output_path(format);
        let partial = partial_path(&path);

        if let Err(err) = self.write_partial(&partial, &path, format) {
            warn!(path = %partial.display(), error = %err, "removing incomplete vtk file");
            // the partial file may not exist if it could not be created
            let _ = fs::remove_file(&partial);
            return Err(err);
        }

        info!(
            path = %path.display(),
            %format,
            encoding = %self.encoding(),
            compress = self.config.compress,
            fields = self.number_of_fields(),
            "wrote vtk file"
        );

        Ok(path)
    }

    fn write_partial(
        &self,
        partial: &Path,
        path: &Path,
        format: OutputFormat,
    ) -> Result<(), Error> {
        let file = File::create(partial)?;
        self.write_to(BufWriter::new(file), format)?;
        fs::rename(partial, path)?;
        Ok(())
    }

    /// Serialize the current state of the grid to any writer
    pub fn write_to<W: Write>(&self, writer: W, format: OutputFormat) -> Result<(), Error> {
        write_vtk::write_vtk(writer, &self.grid, format, &self.write_options())
    }

    fn encoding(&self) -> Encoding {
        Encoding::from_binary_flag(self.config.binary)
    }

    fn write_options(&self) -> WriteOptions {
        WriteOptions::new(
            self.encoding(),
            self.config.compress,
            self.config.header.clone(),
        )
    }
}

/// the path a file is written to before it is moved to `path`
fn partial_path(path: &Path) -> PathBuf {
    let mut partial = path.as_os_str().to_owned();
    partial.push(".partial");
    PathBuf::from(partial)
}
