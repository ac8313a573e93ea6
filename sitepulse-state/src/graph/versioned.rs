/// A node value paired with a counter bumped on every replacement.
///
/// Leaf stores replace their whole collection on each write, so the version
/// identifies a value without comparing its contents.
#[derive(Debug, Clone, Default)]
pub struct Versioned<T> {
    value: T,
    version: u64,
}

impl<T> Versioned<T> {
    pub fn new(value: T) -> Self {
        Self { value, version: 0 }
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    pub fn version(&self) -> u64 {
        self.version
    }
}

impl<T: PartialEq> Versioned<T> {
    /// Stores `value` and bumps the version. Returns whether the new value
    /// differs structurally from the old one.
    pub fn replace(&mut self, value: T) -> bool {
        let changed = self.value != value;
        self.value = value;
        self.version += 1;
        changed
    }
}
