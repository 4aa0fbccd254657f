use arbres::{NaryTree, Tree};

/// Builds a tree from a list of parent choices: the node `i + 1` is attached under the node
/// picked by `parents[i]` among the nodes already built.
fn build(parents: &[u8]) -> NaryTree<usize> {
    let mut tree = NaryTree::new(0);
    for (i, parent) in parents.iter().enumerate() {
        let mut path = Vec::new();
        // Walk the pre-order index down to a concrete path of child positions.
        let mut target = usize::from(*parent) % (i + 1);
        let mut node = &tree;
        while target > 0 {
            target -= 1;
            let mut position = 0;
            for child in node.children() {
                let size = child.node_count();
                if target < size {
                    break;
                }
                target -= size;
                position += 1;
            }
            path.push(position);
            node = &node.children()[position];
        }

        let mut node = &mut tree;
        for position in path {
            node = &mut node.children_mut()[position];
        }
        node.push(NaryTree::new(i + 1));
    }
    tree
}

#[quickcheck]
fn every_node_is_visited_once(parents: Vec<u8>) -> bool {
    let tree = build(&parents);
    let count = parents.len() + 1;

    let mut prefix = tree.prefix().copied().collect::<Vec<_>>();
    let mut suffix = tree.suffix().copied().collect::<Vec<_>>();
    let mut breadth = tree.breadth().copied().collect::<Vec<_>>();
    prefix.sort_unstable();
    suffix.sort_unstable();
    breadth.sort_unstable();

    let expected = (0..count).collect::<Vec<_>>();
    tree.node_count() == count && prefix == expected && suffix == expected && breadth == expected
}

#[quickcheck]
fn traversal_ends_are_fixed(parents: Vec<u8>) -> bool {
    let tree = build(&parents);

    tree.prefix().next() == Some(&0)
        && tree.suffix().last() == Some(&0)
        && tree.breadth().next() == Some(&0)
}

#[quickcheck]
fn metrics_are_consistent(parents: Vec<u8>) -> bool {
    let tree = build(&parents);
    let height = tree.height() as f64;
    let mean = tree.mean_height();

    tree.leaf_count() >= 1
        && tree.leaf_count() <= tree.node_count()
        && tree.height() < tree.node_count()
        && mean >= 0.0
        && mean <= height
}
