#![allow(dead_code)]

use std::path::Path;

/// the text content of the `DataArray` element with the given `Name` attribute
pub fn data_array_text(xml: &str, name: &str) -> String {
    let attribute = format!("Name=\"{}\"", name);
    let start = xml
        .find(&attribute)
        .unwrap_or_else(|| panic!("no data array named {}", name));
    let rest = &xml[start..];
    let open = rest.find('>').unwrap() + 1;
    let close = rest.find("</DataArray>").unwrap();

    rest[open..close].trim().to_string()
}

/// the number of `DataArray` elements inside the `PointData` element
pub fn point_data_arrays(xml: &str) -> usize {
    let start = xml.find("<PointData").unwrap();
    let end = xml.find("</PointData>").unwrap();
    xml[start..end].matches("<DataArray").count()
}

pub fn parse_ascii(text: &str) -> Vec<f64> {
    text.split_ascii_whitespace()
        .map(|value| value.parse().unwrap())
        .collect()
}

pub fn read_to_string(path: &Path) -> String {
    std::fs::read_to_string(path).unwrap()
}

pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}
