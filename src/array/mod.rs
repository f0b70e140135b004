//! container types for point data attached to a grid
//!
//! Fields are handed over as borrowed [`ndarray`] views wrapped in [`Scalar3D`] or
//! [`Field3D`]. Once their shape has been checked against the mesh they are flattened into a
//! [`DataArray`], which owns its values and is what the writers serialize.

mod field_3d;
mod scalar_3d;

pub use field_3d::Field3D;
pub use scalar_3d::Scalar3D;

use crate::traits::{Numeric, Precision};

/// values of a single array, stored in the width they were handed over in
#[derive(Debug, Clone, PartialEq)]
pub enum Values {
    Float32(Vec<f32>),
    Float64(Vec<f64>),
}

macro_rules! with_values {
    ($values:expr, $inner:ident => $body:expr) => {
        match $values {
            Values::Float32($inner) => $body,
            Values::Float64($inner) => $body,
        }
    };
}

impl Values {
    /// total number of scalars (tuples * components)
    pub fn len(&self) -> usize {
        with_values!(self, v => v.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn precision(&self) -> Precision {
        match self {
            Self::Float32(_) => Precision::Float32,
            Self::Float64(_) => Precision::Float64,
        }
    }

    pub fn as_f32(&self) -> Option<&[f32]> {
        match self {
            Self::Float32(v) => Some(v),
            Self::Float64(_) => None,
        }
    }

    pub fn as_f64(&self) -> Option<&[f64]> {
        match self {
            Self::Float32(_) => None,
            Self::Float64(v) => Some(v),
        }
    }

    /// number of raw bytes the values occupy
    pub fn byte_len(&self) -> usize {
        self.len() * self.precision().size()
    }
}

impl From<Vec<f64>> for Values {
    fn from(x: Vec<f64>) -> Self {
        Values::Float64(x)
    }
}

impl From<Vec<f32>> for Values {
    fn from(x: Vec<f32>) -> Self {
        Values::Float32(x)
    }
}

/// raw little endian bytes, used by the XML writer
pub(crate) fn le_bytes<NUM: Numeric>(values: &[NUM]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(values.len() * NUM::SIZE);
    values
        .iter()
        .for_each(|float| float.extend_le_bytes(&mut bytes));
    bytes
}

/// raw big endian bytes, the legacy format is always big endian
pub(crate) fn be_bytes<NUM: Numeric>(values: &[NUM]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(values.len() * NUM::SIZE);
    values
        .iter()
        .for_each(|float| float.extend_be_bytes(&mut bytes));
    bytes
}

/// append the values as text, breaking the line every `per_line` values
pub(crate) fn format_ascii<NUM: Numeric>(
    values: &[NUM],
    out: &mut String,
    per_line: Option<usize>,
) {
    let mut buffer = ryu::Buffer::new();

    for (idx, float) in values.iter().enumerate() {
        if idx > 0 {
            match per_line {
                Some(n) if idx % n == 0 => out.push('\n'),
                _ => out.push(' '),
            }
        }

        // ryu prints non-finite values as `NaN` / `inf` which the vtk readers
        // do not understand
        if float.is_finite() {
            out.push_str(buffer.format_finite(*float));
        } else if float.is_nan() {
            out.push_str("nan");
        } else if float.is_sign_positive() {
            out.push_str("inf");
        } else {
            out.push_str("-inf");
        }
    }
}

/// A named array of point data with one or three components per point
#[derive(Debug, Clone, PartialEq)]
pub struct DataArray {
    name: String,
    components: usize,
    values: Values,
}

impl DataArray {
    pub(crate) fn new(name: String, components: usize, values: Values) -> Self {
        debug_assert_eq!(values.len() % components, 0);
        Self {
            name,
            components,
            values,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn components(&self) -> usize {
        self.components
    }

    pub fn values(&self) -> &Values {
        &self.values
    }

    /// number of points covered by this array
    pub fn tuples(&self) -> usize {
        self.values.len() / self.components
    }

    pub fn precision(&self) -> Precision {
        self.values.precision()
    }
}
