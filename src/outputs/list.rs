/// A growable list of triangles, each given as three vertex indices of type `V`.
///
/// Triangulation only ever appends; [List::truncate] is used to roll back a partially written result.
pub trait List<V> {
    /// Append one triangle
    fn push(&mut self, v0: V, v1: V, v2: V);

    /// Number of triangles in the list
    fn len(&self) -> usize;

    /// Drop triangles from the end until `len` remain
    fn truncate(&mut self, len: usize);

    /// Make room for `additional` more triangles. Does nothing by default.
    fn reserve(&mut self, additional: usize) {
        let _ = additional;
    }

    /// Returns `true` if the list holds no triangles
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A flat index buffer, three entries per triangle
impl<V> List<V> for Vec<V> {
    fn push(&mut self, v0: V, v1: V, v2: V) {
        Vec::push(self, v0);
        Vec::push(self, v1);
        Vec::push(self, v2);
    }

    fn len(&self) -> usize {
        Vec::len(self) / 3
    }

    fn truncate(&mut self, len: usize) {
        Vec::truncate(self, len * 3)
    }

    fn reserve(&mut self, additional: usize) {
        Vec::reserve(self, additional * 3)
    }
}

impl<V> List<V> for Vec<[V; 3]> {
    fn push(&mut self, v0: V, v1: V, v2: V) {
        Vec::push(self, [v0, v1, v2]);
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn truncate(&mut self, len: usize) {
        Vec::truncate(self, len)
    }

    fn reserve(&mut self, additional: usize) {
        Vec::reserve(self, additional)
    }
}

impl<V> List<V> for Vec<(V, V, V)> {
    fn push(&mut self, v0: V, v1: V, v2: V) {
        Vec::push(self, (v0, v1, v2));
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn truncate(&mut self, len: usize) {
        Vec::truncate(self, len)
    }

    fn reserve(&mut self, additional: usize) {
        Vec::reserve(self, additional)
    }
}

/// Writes into a list owned by the caller
impl<V, L: List<V>> List<V> for &mut L {
    fn push(&mut self, v0: V, v1: V, v2: V) {
        (**self).push(v0, v1, v2)
    }

    fn len(&self) -> usize {
        (**self).len()
    }

    fn truncate(&mut self, len: usize) {
        (**self).truncate(len)
    }

    fn reserve(&mut self, additional: usize) {
        (**self).reserve(additional)
    }
}
