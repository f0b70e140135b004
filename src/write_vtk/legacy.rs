use super::{WriteOptions, DEFAULT_HEADER};
use crate::array::{be_bytes, format_ascii};
use crate::prelude::*;

use tracing::warn;

/// the legacy reader only accepts a header line of up to 256 characters
const MAX_HEADER_LEN: usize = 255;

/// ascii values per line
const VALUES_PER_LINE: usize = 9;

/// Write a grid as a `RECTILINEAR_GRID` or `STRUCTURED_GRID` legacy file
pub(crate) fn write_legacy<W: Write>(
    mut writer: W,
    geometry: &Geometry,
    point_data: &PointData,
    options: &WriteOptions,
) -> Result<(), Error> {
    if options.compress {
        warn!("compression is not supported by the legacy format and is ignored");
    }

    let encoding = options.encoding;
    let spans = geometry.spans();

    writeln!(writer, "# vtk DataFile Version 3.0")?;
    writeln!(writer, "{}", header_line(&options.header))?;
    writeln!(
        writer,
        "{}",
        match encoding {
            Encoding::Ascii => "ASCII",
            Encoding::Binary => "BINARY",
        }
    )?;

    match geometry {
        Geometry::Rectilinear(rect) => {
            writeln!(writer, "DATASET RECTILINEAR_GRID")?;
            writeln!(writer, "DIMENSIONS {} {} {}", spans.x_len(), spans.y_len(), spans.z_len())?;

            let axes = [
                ("X", &rect.mesh.x_locations),
                ("Y", &rect.mesh.y_locations),
                ("Z", &rect.mesh.z_locations),
            ];

            for (axis, locations) in axes {
                writeln!(writer, "{}_COORDINATES {} double", axis, locations.len())?;
                write_values(&mut writer, locations, encoding)?;
            }
        }
        Geometry::Structured(structured) => {
            writeln!(writer, "DATASET STRUCTURED_GRID")?;
            writeln!(writer, "DIMENSIONS {} {} {}", spans.x_len(), spans.y_len(), spans.z_len())?;
            writeln!(writer, "POINTS {} double", spans.num_points())?;
            write_values(&mut writer, &structured.points, encoding)?;
        }
    }

    if !point_data.is_empty() {
        writeln!(writer, "POINT_DATA {}", spans.num_points())?;
        writeln!(writer, "FIELD FieldData {}", point_data.len())?;

        for array in point_data {
            writeln!(
                writer,
                "{} {} {} {}",
                encode_name(array.name()),
                array.components(),
                array.tuples(),
                array.precision().legacy_name()
            )?;

            match array.values() {
                Values::Float32(values) => write_values(&mut writer, values, encoding)?,
                Values::Float64(values) => write_values(&mut writer, values, encoding)?,
            }
        }
    }

    writer.flush()?;

    Ok(())
}

fn write_values<W: Write, NUM: Numeric>(
    writer: &mut W,
    values: &[NUM],
    encoding: Encoding,
) -> Result<(), Error> {
    match encoding {
        Encoding::Ascii => {
            let mut data = String::new();
            format_ascii(values, &mut data, Some(VALUES_PER_LINE));
            writer.write_all(data.as_bytes())?;
        }
        Encoding::Binary => {
            writer.write_all(&be_bytes(values))?;
        }
    }

    writer.write_all(b"\n")?;

    Ok(())
}

/// the header must be a single line, fall back to the default if nothing is left of it
fn header_line(header: &str) -> String {
    let line: String = header
        .lines()
        .next()
        .unwrap_or_default()
        .chars()
        .take(MAX_HEADER_LEN)
        .collect();

    if line.trim().is_empty() {
        DEFAULT_HEADER.to_string()
    } else {
        line
    }
}

/// array names are whitespace delimited, so whitespace and other special characters are
/// percent encoded
fn encode_name(name: &str) -> String {
    let mut encoded = String::with_capacity(name.len());

    for byte in name.bytes() {
        if byte.is_ascii_graphic() && byte != b'%' {
            encoded.push(byte as char);
        } else {
            encoded.push_str(&format!("%{:02X}", byte));
        }
    }

    encoded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names() {
        assert_eq!(encode_name("rho"), "rho");
        assert_eq!(encode_name("E field"), "E%20field");
        assert_eq!(encode_name("100%"), "100%25");
    }

    #[test]
    fn headers() {
        assert_eq!(header_line(""), DEFAULT_HEADER);
        assert_eq!(header_line("first\nsecond"), "first");
        assert_eq!(header_line(&"a".repeat(300)).len(), MAX_HEADER_LEN);
    }

    #[test]
    fn ascii_values() {
        let mut out = Vec::new();
        let values: Vec<f64> = (0..10).map(f64::from).collect();
        write_values(&mut out, &values, Encoding::Ascii).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "0.0 1.0 2.0 3.0 4.0 5.0 6.0 7.0 8.0\n9.0\n"
        );
    }

    #[test]
    fn binary_values_big_endian() {
        let mut out = Vec::new();
        write_values(&mut out, &[1.5f32], Encoding::Binary).unwrap();

        assert_eq!(&out[..4], &1.5f32.to_be_bytes());
        assert_eq!(out[4], b'\n');
    }
}
