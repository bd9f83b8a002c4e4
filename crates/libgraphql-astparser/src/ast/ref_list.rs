use crate::ast::Ref;

/// A list of refs whose storage is borrowed from a [`RefPool`].
///
/// A new list owns no buffer. It takes one from the pool on the first
/// [`push`](Self::push), so the many lists that stay empty (fields without
/// arguments, types without directives, ...) never allocate. Buffers go
/// back to the pool when the owning [`Document`](crate::ast::Document) is
/// reset.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct RefList {
    refs: Vec<Ref>,
}

impl RefList {
    pub fn push(&mut self, pool: &mut RefPool, reference: Ref) {
        if self.refs.capacity() == 0 {
            self.refs = pool.take();
        }
        self.refs.push(reference);
    }

    pub fn refs(&self) -> &[Ref] {
        &self.refs
    }

    pub fn len(&self) -> usize {
        self.refs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.refs.is_empty()
    }

    /// Whether this list has been bound to pooled storage.
    pub fn is_bound(&self) -> bool {
        self.refs.capacity() > 0
    }

    pub fn iter(&self) -> impl Iterator<Item = Ref> + '_ {
        self.refs.iter().copied()
    }
}

impl<'a> IntoIterator for &'a RefList {
    type Item = &'a Ref;
    type IntoIter = std::slice::Iter<'a, Ref>;

    fn into_iter(self) -> Self::IntoIter {
        self.refs.iter()
    }
}

/// Free list of reusable ref buffers shared by every [`RefList`] of a
/// document.
#[derive(Debug, Default)]
pub struct RefPool {
    free: Vec<Vec<Ref>>,
}

const INITIAL_LIST_CAPACITY: usize = 8;

impl RefPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of buffers currently available for reuse.
    pub fn available(&self) -> usize {
        self.free.len()
    }

    /// Returns `list`'s buffer to the pool, leaving nothing behind in it.
    pub fn recycle(&mut self, list: RefList) {
        let mut refs = list.refs;
        if refs.capacity() > 0 {
            refs.clear();
            self.free.push(refs);
        }
    }

    fn take(&mut self) -> Vec<Ref> {
        self.free
            .pop()
            .unwrap_or_else(|| Vec::with_capacity(INITIAL_LIST_CAPACITY))
    }
}
