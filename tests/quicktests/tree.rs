use std::collections::HashSet;

use quickcheck::quickcheck;

use crate::Shape;

quickcheck! {
    /// A never-stopping depth-first walk visits exactly the pre-order
    /// flatten of the shape and reports no match.
    fn dfs_visits_in_preorder(shape: Shape) -> bool {
        let tree = shape.build();

        let mut visited = Vec::new();
        let found = tree.traverse(|node| {
            visited.push(*node.value());
            false
        });

        found.is_none() && visited == shape.preorder()
    }

    /// A never-stopping breadth-first walk visits exactly the level-order
    /// flatten of the shape and reports no match.
    fn bfs_visits_in_level_order(shape: Shape) -> bool {
        let tree = shape.build();

        let mut visited = Vec::new();
        let found = tree.traverse_breadth_first(|node| {
            visited.push(*node.value());
            false
        });

        found.is_none() && visited == shape.level_order()
    }

    /// Both walks touch every node exactly once when nothing stops them.
    fn walks_visit_every_node_once(shape: Shape) -> bool {
        let tree = shape.build();

        let mut dfs_count = 0;
        tree.traverse(|_| {
            dfs_count += 1;
            false
        });
        let mut bfs_count = 0;
        tree.traverse_breadth_first(|_| {
            bfs_count += 1;
            false
        });

        dfs_count == shape.node_count() && bfs_count == shape.node_count()
    }

    /// Stopping on a value halts the depth-first walk at that value's first
    /// pre-order occurrence; nothing past it is visited.
    fn dfs_stops_at_first_preorder_match(shape: Shape, idx: usize) -> bool {
        let order = shape.preorder();
        let target = order[idx % order.len()];
        let first = order.iter().position(|&v| v == target).unwrap();

        let tree = shape.build();
        let mut visited = Vec::new();
        let found = tree.traverse(|node| {
            visited.push(*node.value());
            *node.value() == target
        });

        visited == order[..=first] && found.map(|n| *n.value()) == Some(target)
    }

    /// Same early-termination contract for the breadth-first walk, against
    /// the level-order flatten.
    fn bfs_stops_at_first_level_order_match(shape: Shape, idx: usize) -> bool {
        let order = shape.level_order();
        let target = order[idx % order.len()];
        let first = order.iter().position(|&v| v == target).unwrap();

        let tree = shape.build();
        let mut visited = Vec::new();
        let found = tree.traverse_breadth_first(|node| {
            visited.push(*node.value());
            *node.value() == target
        });

        visited == order[..=first] && found.map(|n| *n.value()) == Some(target)
    }

    /// Every value placed in the tree can be found again.
    fn find_locates_every_present_value(shape: Shape) -> bool {
        let tree = shape.build();

        shape
            .preorder()
            .iter()
            .all(|v| tree.find(v).map(|n| n.value()) == Some(v))
    }

    /// Values never placed in the tree are never found.
    fn find_misses_absent_values(shape: Shape, probes: Vec<i8>) -> bool {
        let tree = shape.build();
        let present: HashSet<i8> = shape.preorder().into_iter().collect();

        probes
            .iter()
            .filter(|v| !present.contains(v))
            .all(|v| tree.find(v).is_none())
    }

    /// Children come back in exactly the order they were appended.
    fn children_keep_insertion_order(values: Vec<i8>) -> bool {
        let mut tree = ntree::tree::Node::new(0i8);
        for &v in &values {
            tree.add_child(v);
        }

        let appended: Vec<i8> = tree.children().iter().map(|c| *c.value()).collect();
        appended == values
    }
}
