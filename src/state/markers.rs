// Registry of on-screen anchor markers, keyed by item.
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use web_sys::Element;
use yew::NodeRef;

use crate::geometry::Rect;
use crate::model::ItemId;
use crate::render::MarkerLookup;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MarkerKey {
    Word(ItemId),
    Image(ItemId),
}

#[derive(Default)]
pub struct MarkerRegistry {
    nodes: HashMap<MarkerKey, NodeRef>,
}

impl MarkerRegistry {
    pub fn register(&mut self, key: MarkerKey, node: NodeRef) {
        self.nodes.insert(key, node);
    }

    /// Only drops the entry if it still belongs to `node`; a remounted tile
    /// may already have registered a newer ref under the same key.
    pub fn unregister(&mut self, key: MarkerKey, node: &NodeRef) {
        if self.nodes.get(&key) == Some(node) {
            self.nodes.remove(&key);
        }
    }

    pub fn contains(&self, key: MarkerKey) -> bool {
        self.nodes.contains_key(&key)
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl MarkerLookup for MarkerRegistry {
    fn marker_rect(&self, key: MarkerKey) -> Option<Rect> {
        let el = self.nodes.get(&key)?.cast::<Element>()?;
        if !el.is_connected() {
            return None;
        }
        let rect: Rect = el.get_bounding_client_rect().into();
        if rect.is_empty() { None } else { Some(rect) }
    }
}

/// Shared handle passed down as context; equality is identity.
#[derive(Clone, Default)]
pub struct MarkerRegistryHandle(pub Rc<RefCell<MarkerRegistry>>);

impl PartialEq for MarkerRegistryHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unmounted_marker_resolves_to_none() {
        let mut reg = MarkerRegistry::default();
        reg.register(MarkerKey::Word(ItemId(1)), NodeRef::default());
        assert!(reg.contains(MarkerKey::Word(ItemId(1))));
        assert_eq!(reg.marker_rect(MarkerKey::Word(ItemId(1))), None);
        assert_eq!(reg.marker_rect(MarkerKey::Image(ItemId(1))), None);
    }

    #[test]
    fn stale_unregister_keeps_newer_ref() {
        let mut reg = MarkerRegistry::default();
        let key = MarkerKey::Image(ItemId(4));
        let old = NodeRef::default();
        let new = NodeRef::default();
        reg.register(key, old.clone());
        reg.register(key, new.clone());
        reg.unregister(key, &old);
        assert!(reg.contains(key));
        reg.unregister(key, &new);
        assert!(reg.is_empty());
    }

    #[test]
    fn handle_equality_is_identity() {
        let a = MarkerRegistryHandle::default();
        let b = MarkerRegistryHandle::default();
        assert!(a == a.clone());
        assert!(a != b);
    }
}
