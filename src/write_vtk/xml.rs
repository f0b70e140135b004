use super::compress;
use super::WriteOptions;
use crate::array::{format_ascii, le_bytes};
use crate::prelude::*;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::writer::Writer;
use tracing::warn;

/// Write a grid as a `RectilinearGrid` or `StructuredGrid` XML file
pub(crate) fn write_xml<W: Write>(
    writer: W,
    geometry: &Geometry,
    point_data: &PointData,
    options: &WriteOptions,
) -> Result<(), Error> {
    let compressed = match (options.compress, options.encoding) {
        (true, Encoding::Ascii) => {
            warn!("compression has no effect on ascii encoded data");
            false
        }
        (compress, _) => compress,
    };

    let array_options = ArrayOptions {
        encoding: options.encoding,
        compress: compressed,
    };

    let mut writer = Writer::new_with_indent(writer, b' ', 2);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", None, None)))?;

    let grid_type = match geometry {
        Geometry::Rectilinear(_) => "RectilinearGrid",
        Geometry::Structured(_) => "StructuredGrid",
    };

    let mut vtk_file = BytesStart::new("VTKFile");
    vtk_file.push_attribute(("type", grid_type));
    vtk_file.push_attribute(("version", "1.0"));
    vtk_file.push_attribute(("byte_order", "LittleEndian"));
    vtk_file.push_attribute(("header_type", "UInt64"));
    if compressed {
        vtk_file.push_attribute(("compressor", compress::COMPRESSOR_NAME));
    }
    writer.write_event(Event::Start(vtk_file))?;

    // output the spans
    let span_str = geometry.spans().to_string();

    let mut grid_element = BytesStart::new(grid_type);
    grid_element.push_attribute(("WholeExtent", span_str.as_str()));
    writer.write_event(Event::Start(grid_element))?;

    let mut piece = BytesStart::new("Piece");
    piece.push_attribute(("Extent", span_str.as_str()));
    writer.write_event(Event::Start(piece))?;

    writer.write_event(Event::Start(BytesStart::new("PointData")))?;
    for array in point_data {
        write_point_data(&mut writer, array, &array_options)?;
    }
    writer.write_event(Event::End(BytesEnd::new("PointData")))?;

    writer.write_event(Event::Empty(BytesStart::new("CellData")))?;

    match geometry {
        Geometry::Rectilinear(rect) => {
            writer.write_event(Event::Start(BytesStart::new("Coordinates")))?;
            write_data_array(&mut writer, "X", 1, &rect.mesh.x_locations, &array_options)?;
            write_data_array(&mut writer, "Y", 1, &rect.mesh.y_locations, &array_options)?;
            write_data_array(&mut writer, "Z", 1, &rect.mesh.z_locations, &array_options)?;
            writer.write_event(Event::End(BytesEnd::new("Coordinates")))?;
        }
        Geometry::Structured(structured) => {
            writer.write_event(Event::Start(BytesStart::new("Points")))?;
            write_data_array(&mut writer, "Points", 3, &structured.points, &array_options)?;
            writer.write_event(Event::End(BytesEnd::new("Points")))?;
        }
    }

    writer.write_event(Event::End(BytesEnd::new("Piece")))?;
    writer.write_event(Event::End(BytesEnd::new(grid_type)))?;
    writer.write_event(Event::End(BytesEnd::new("VTKFile")))?;

    writer.inner().flush()?;

    Ok(())
}

struct ArrayOptions {
    encoding: Encoding,
    compress: bool,
}

fn write_point_data<W: Write>(
    writer: &mut Writer<W>,
    array: &DataArray,
    options: &ArrayOptions,
) -> Result<(), Error> {
    let (name, components) = (array.name(), array.components());

    match array.values() {
        Values::Float32(values) => write_data_array(writer, name, components, values, options),
        Values::Float64(values) => write_data_array(writer, name, components, values, options),
    }
}

/// write a single inline array of data (such as x-velocity) to the vtk file.
fn write_data_array<W: Write, NUM: Numeric>(
    writer: &mut Writer<W>,
    name: &str,
    components: usize,
    values: &[NUM],
    options: &ArrayOptions,
) -> Result<(), Error> {
    let components = components.to_string();

    let mut element = BytesStart::new("DataArray");
    element.push_attribute(("type", NUM::as_precision().xml_name()));
    element.push_attribute(("Name", name));
    element.push_attribute(("NumberOfComponents", components.as_str()));
    element.push_attribute(("format", options.encoding.to_string().as_str()));
    writer.write_event(Event::Start(element))?;

    let data = match options.encoding {
        Encoding::Ascii => {
            let mut data = String::new();
            format_ascii(values, &mut data, None);
            data
        }
        Encoding::Binary if options.compress => compress::encode_compressed(&le_bytes(values))?,
        Encoding::Binary => encode_binary(&le_bytes(values)),
    };

    writer.write_event(Event::Text(BytesText::new(&data)))?;
    writer.write_event(Event::End(BytesEnd::new("DataArray")))?;

    Ok(())
}

/// base64 encode uncompressed data, prefixed with the number of bytes that follow
fn encode_binary(data: &[u8]) -> String {
    let mut byte_data: Vec<u8> = Vec::with_capacity(data.len() + 8);
    byte_data.extend_from_slice(&(data.len() as u64).to_le_bytes());
    byte_data.extend_from_slice(data);

    base64::encode(byte_data.as_slice())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binary_header() {
        let bytes = le_bytes(&[1.0f64, 2.0]);
        let decoded = base64::decode(encode_binary(&bytes)).unwrap();

        assert_eq!(decoded.len(), 8 + 16);
        assert_eq!(u64::from_le_bytes(decoded[..8].try_into().unwrap()), 16);
        assert_eq!(&decoded[8..], bytes.as_slice());
    }

    #[test]
    fn ascii_array_element() {
        let mut writer = Writer::new(Vec::new());
        let options = ArrayOptions {
            encoding: Encoding::Ascii,
            compress: false,
        };
        write_data_array(&mut writer, "rho", 1, &[1.0f32, 2.5], &options).unwrap();

        let text = String::from_utf8(writer.into_inner()).unwrap();
        assert_eq!(
            text,
            r#"<DataArray type="Float32" Name="rho" NumberOfComponents="1" format="ascii">1.0 2.5</DataArray>"#
        );
    }
}
