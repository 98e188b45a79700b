use std::fmt;

use super::*;

impl <P: fmt::Debug, E: fmt::Debug, C> fmt::Debug for PriorityDeque<P, E, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriorityDeque")
            .field("orientation", &self.orientation)
            .field("capacity", &self.nodes.capacity())
            .field("expand_factor", &self.nodes.expand_factor())
            .field("nodes", &DebugNodes(self.nodes.as_slice()))
            .finish()
    }
}

struct DebugNodes<'a, P, E>(&'a [Node<P, E>]);

impl <P: fmt::Debug, E: fmt::Debug> fmt::Debug for DebugNodes<'_, P, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.0.iter().map(|node| (&node.priority, &node.element)))
            .finish()
    }
}
