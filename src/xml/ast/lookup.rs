//! Position-based node lookup
//!
//! Maps an editor position back to the elements around it. Ranges end at the start of an
//! element's last token (the `>` of its end tag), and both ends are inclusive.

use super::node::{XmlDocument, XmlNode};
use super::range::Position;

impl XmlDocument {
    /// Every node whose range contains `position`, deepest first
    pub fn nodes_at(&self, position: Position) -> Vec<&XmlNode> {
        let mut path = Vec::new();
        collect_path(&self.root_tag, position, &mut path);
        path.reverse();
        path
    }

    /// The deepest node containing `position`
    pub fn node_at(&self, position: Position) -> Option<&XmlNode> {
        self.nodes_at(position).into_iter().next()
    }
}

fn collect_path<'a>(node: &'a XmlNode, position: Position, path: &mut Vec<&'a XmlNode>) {
    if !node.range.contains(position) {
        return;
    }
    path.push(node);
    if let Some(child) = node
        .children
        .iter()
        .find(|child| child.range.contains(position))
    {
        collect_path(child, position, path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml::ast::Range;

    fn node(tag: &str, (l1, c1): (usize, usize), (l2, c2): (usize, usize)) -> XmlNode {
        XmlNode::new(
            tag,
            Range::new(Position::new(l1, c1), Position::new(l2, c2)),
        )
    }

    fn document() -> XmlDocument {
        // <beans>
        //     <bean/>
        //     <bean>
        //         <property/>
        //     </bean>
        // </beans>
        let first = node("bean", (1, 4), (1, 9));
        let property = node("property", (3, 8), (3, 17));
        let second = node("bean", (2, 4), (4, 10)).with_children(vec![property]);
        XmlDocument::new(node("beans", (0, 0), (5, 7)).with_children(vec![first, second]))
    }

    #[test]
    fn test_nodes_at_returns_deepest_first() {
        let doc = document();
        let tags: Vec<&str> = doc
            .nodes_at(Position::new(3, 10))
            .iter()
            .map(|n| n.tag_name.as_str())
            .collect();
        assert_eq!(tags, vec!["property", "bean", "beans"]);
    }

    #[test]
    fn test_node_at_between_children_is_parent() {
        let doc = document();
        let found = doc.node_at(Position::new(1, 20)).expect("node");
        assert_eq!(found.tag_name, "beans");
    }

    #[test]
    fn test_node_at_range_end_is_inclusive() {
        let doc = document();
        let found = doc.node_at(Position::new(4, 10)).expect("node");
        assert_eq!(found.tag_name, "bean");
        assert_eq!(found.range.start, Position::new(2, 4));
    }

    #[test]
    fn test_outside_root_finds_nothing() {
        let doc = document();
        assert!(doc.nodes_at(Position::new(6, 0)).is_empty());
        assert!(doc.node_at(Position::new(5, 8)).is_none());
    }
}
