use arbres::{SearchTree, Tree, TreeError};

use std::collections::{BTreeSet, HashSet};

use crate::Op;

/// Applies a set of operations to a tree and a set.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same set of keys in both.
fn do_ops<K>(ops: &[Op<K, ()>], tree: &mut SearchTree<K>, set: &mut BTreeSet<K>)
where
    K: Ord + Clone + std::fmt::Debug,
{
    for op in ops {
        match op {
            Op::Insert(k, ()) => {
                tree.insert(k.clone());
                set.insert(k.clone());
            }
            Op::Remove(k) => match tree.remove(k) {
                Ok(_) => assert!(set.remove(k)),
                Err(TreeError::NotFound) => assert!(!set.contains(k)),
                Err(TreeError::DeletionImpossible) => assert_eq!(set.len(), 1),
                Err(e) => panic!("unexpected error {:?}", e),
            },
        }
    }
}

#[quickcheck]
fn fuzz_multiple_operations_i8(first: i8, ops: Vec<Op<i8, ()>>) -> bool {
    let mut tree = SearchTree::new(first);
    let mut set = BTreeSet::from([first]);

    do_ops(&ops, &mut tree, &mut set);
    tree.in_order().eq(set.iter()) && tree.node_count() == set.len()
}

#[quickcheck]
fn contains(first: i8, xs: Vec<i8>) -> bool {
    let mut tree = SearchTree::new(first);
    for x in &xs {
        tree.insert(*x);
    }

    xs.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn contains_not(first: i8, xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let mut tree = SearchTree::new(first);
    for x in &xs {
        tree.insert(*x);
    }
    let mut added: HashSet<_> = xs.into_iter().collect();
    added.insert(first);
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.find(x).is_none())
}

#[quickcheck]
fn with_deletions(first: i8, xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = SearchTree::new(first);
    for x in &xs {
        tree.insert(*x);
    }
    let mut deleted = HashSet::new();
    for delete in &deletes {
        if tree.remove(delete).is_ok() {
            deleted.insert(*delete);
        }
    }

    let mut still_present = xs;
    still_present.push(first);
    still_present.retain(|x| !deleted.contains(x));

    deleted.iter().all(|x| !tree.contains(x))
        && still_present.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn min_and_max_bound_every_key(first: i8, xs: Vec<i8>) -> bool {
    let mut tree = SearchTree::new(first);
    for x in &xs {
        tree.insert(*x);
    }

    tree.prefix().all(|k| tree.min() <= k && k <= tree.max())
}

#[quickcheck]
fn traversals_visit_the_same_keys(first: i8, xs: Vec<i8>) -> bool {
    let mut tree = SearchTree::new(first);
    for x in &xs {
        tree.insert(*x);
    }

    let expected = tree.in_order().copied().collect::<Vec<_>>();

    sorted(tree.prefix()) == expected
        && sorted(tree.suffix()) == expected
        && sorted(tree.breadth()) == expected
}

fn sorted<'a>(keys: impl Iterator<Item = &'a i8>) -> Vec<i8> {
    let mut keys = keys.copied().collect::<Vec<_>>();
    keys.sort_unstable();
    keys
}
