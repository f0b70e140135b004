use crate::array::DataArray;

/// The named arrays attached to the points of a grid.
///
/// Names are unique. Inserting an array with a name that is already present replaces the
/// existing array at its current position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointData {
    arrays: Vec<DataArray>,
}

impl PointData {
    pub fn new() -> Self {
        Self::default()
    }

    /// insert an array, returning the array it replaced (if any)
    pub fn insert(&mut self, array: DataArray) -> Option<DataArray> {
        match self.position(array.name()) {
            Some(idx) => Some(std::mem::replace(&mut self.arrays[idx], array)),
            None => {
                self.arrays.push(array);
                None
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&DataArray> {
        self.arrays.iter().find(|array| array.name() == name)
    }

    pub fn remove(&mut self, name: &str) -> Option<DataArray> {
        let idx = self.position(name)?;
        Some(self.arrays.remove(idx))
    }

    pub fn clear(&mut self) {
        self.arrays.clear()
    }

    pub fn len(&self) -> usize {
        self.arrays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arrays.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.arrays.iter().map(DataArray::name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DataArray> {
        self.arrays.iter()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.arrays.iter().position(|array| array.name() == name)
    }
}

impl<'a> IntoIterator for &'a PointData {
    type Item = &'a DataArray;
    type IntoIter = std::slice::Iter<'a, DataArray>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
