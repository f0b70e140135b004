//! # Traits
//!
//! Numeric storage types that can be attached to a grid as point data. Only `f32` and `f64`
//! are implemented, matching the `Float32` and `Float64` types paraview reads.

use crate::array::Values;
use std::fmt;

/// The precision of a data array as it is written to a file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precision {
    Float32,
    Float64,
}

impl Precision {
    /// `type` attribute of an XML `DataArray`
    pub fn xml_name(&self) -> &'static str {
        match self {
            Self::Float32 => "Float32",
            Self::Float64 => "Float64",
        }
    }

    /// data type keyword of the legacy format
    pub fn legacy_name(&self) -> &'static str {
        match self {
            Self::Float32 => "float",
            Self::Float64 => "double",
        }
    }

    /// number of bytes for a single element
    pub fn size(&self) -> usize {
        match self {
            Self::Float32 => std::mem::size_of::<f32>(),
            Self::Float64 => std::mem::size_of::<f64>(),
        }
    }
}

/// A floating point type that point data can be stored as.
///
/// The float / double distinction of a field is carried by this trait so that a single
/// generic function handles both widths.
pub trait Numeric:
    num_traits::Float + ryu::Float + fmt::Debug + Default + Send + Sync + 'static
{
    /// size of the type in bytes
    const SIZE: usize;

    fn as_precision() -> Precision;

    fn extend_le_bytes(&self, bytes: &mut Vec<u8>);

    fn extend_be_bytes(&self, bytes: &mut Vec<u8>);

    /// move a flat buffer into the type-erased storage used by the point data collection
    fn into_values(values: Vec<Self>) -> Values;
}

macro_rules! impl_numeric {
    ($num:ty, $precision:ident) => {
        impl Numeric for $num {
            const SIZE: usize = std::mem::size_of::<$num>();

            fn as_precision() -> Precision {
                Precision::$precision
            }

            fn extend_le_bytes(&self, bytes: &mut Vec<u8>) {
                bytes.extend_from_slice(&self.to_le_bytes());
            }

            fn extend_be_bytes(&self, bytes: &mut Vec<u8>) {
                bytes.extend_from_slice(&self.to_be_bytes());
            }

            fn into_values(values: Vec<Self>) -> Values {
                Values::$precision(values)
            }
        }
    };
}

impl_numeric!(f32, Float32);
impl_numeric!(f64, Float64);

#[test]
fn precision_names() {
    assert_eq!(<f32 as Numeric>::as_precision().xml_name(), "Float32");
    assert_eq!(<f64 as Numeric>::as_precision().legacy_name(), "double");
    assert_eq!(<f32 as Numeric>::SIZE, Precision::Float32.size());
}
