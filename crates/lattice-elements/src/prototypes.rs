//! Prototype Resolution
//!
//! Memoized native tag name to interface prototype lookup.

use std::cell::RefCell;
use std::collections::HashMap;

use lattice_dom::DocumentTree;

/// Memoized mapping from native tag name to the tree's interface prototype.
///
/// A cache miss constructs one throwaway probe element through the tree and
/// records its prototype. For tags whose construction has side effects (or
/// is otherwise undesired before registration), [`seed`](PrototypeCache::seed)
/// injects entries without probing.
pub struct PrototypeCache<D: DocumentTree> {
    cache: RefCell<HashMap<String, D::Prototype>>,
}

impl<D: DocumentTree> PrototypeCache<D> {
    pub fn new() -> Self {
        Self {
            cache: RefCell::new(HashMap::new()),
        }
    }

    /// Resolve a native tag to its prototype, probing the tree on a miss.
    ///
    /// Probe construction failures propagate unchanged.
    pub fn resolve(&self, tree: &mut D, tag_name: &str) -> Result<D::Prototype, D::Error> {
        if let Some(prototype) = self.cache.borrow().get(tag_name) {
            return Ok(prototype.clone());
        }
        let probe = tree.create_element(tag_name)?;
        let prototype = tree.prototype_of(probe);
        self.cache
            .borrow_mut()
            .insert(tag_name.to_owned(), prototype.clone());
        Ok(prototype)
    }

    /// Inject a cache entry without constructing a probe element.
    pub fn seed(&self, tag_name: &str, prototype: D::Prototype) {
        self.cache.borrow_mut().insert(tag_name.to_owned(), prototype);
    }
}

impl<D: DocumentTree> Default for PrototypeCache<D> {
    fn default() -> Self {
        Self::new()
    }
}
