use std::fmt;

use super::NodeId;

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sub-{}", self.0)
    }
}

struct Subscriber<S> {
    id: SubscriptionId,
    node: NodeId,
    callback: Box<dyn FnMut(&S)>,
}

/// Callbacks keyed by the node they watch. `S` is the full set of node values;
/// each callback picks out its own node.
pub(crate) struct Subscribers<S> {
    next_id: u64,
    entries: Vec<Subscriber<S>>,
}

impl<S> Default for Subscribers<S> {
    fn default() -> Self {
        Self {
            next_id: 1,
            entries: Vec::new(),
        }
    }
}

impl<S> Subscribers<S> {
    pub fn insert(&mut self, node: NodeId, callback: Box<dyn FnMut(&S)>) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push(Subscriber { id, node, callback });
        id
    }

    pub fn remove(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        self.entries.len() != before
    }

    pub fn count(&self, node: NodeId) -> usize {
        self.entries.iter().filter(|entry| entry.node == node).count()
    }

    /// Calls every subscriber of a node in `changed`, in registration order.
    pub fn notify(&mut self, changed: &[NodeId], source: &S) -> usize {
        let mut notified = 0;
        for entry in self.entries.iter_mut() {
            if changed.contains(&entry.node) {
                (entry.callback)(source);
                notified += 1;
            }
        }
        notified
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn notifies_only_matching_nodes() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut subscribers = Subscribers::<u32>::default();

        let log = Rc::clone(&seen);
        subscribers.insert(
            NodeId::Projects,
            Box::new(move |v: &u32| log.borrow_mut().push(*v)),
        );
        let log = Rc::clone(&seen);
        subscribers.insert(
            NodeId::Equipment,
            Box::new(move |v: &u32| log.borrow_mut().push(*v + 100)),
        );

        assert_eq!(subscribers.notify(&[NodeId::Projects], &7), 1);
        assert_eq!(*seen.borrow(), vec![7]);
    }

    #[test]
    fn removed_subscribers_stay_silent() {
        let hits = Rc::new(RefCell::new(0));
        let mut subscribers = Subscribers::<()>::default();

        let counter = Rc::clone(&hits);
        let id = subscribers.insert(
            NodeId::AiAnalytics,
            Box::new(move |_: &()| *counter.borrow_mut() += 1),
        );
        assert_eq!(subscribers.count(NodeId::AiAnalytics), 1);

        assert!(subscribers.remove(id));
        assert!(!subscribers.remove(id));
        subscribers.notify(&[NodeId::AiAnalytics], &());
        assert_eq!(*hits.borrow(), 0);
    }
}
