use arbres::{CollisionTable, TableConfig, TableError};

use std::collections::HashMap;

use crate::Op;

/// Applies a set of operations to a table and a hashmap, leaving the hashmap alone when the
/// table reports it is full.
fn do_ops<K, V>(ops: &[Op<K, V>], table: &mut CollisionTable<K, V>, map: &mut HashMap<K, V>)
where
    K: std::hash::Hash + Eq + Clone,
    V: std::fmt::Debug + PartialEq + Clone,
{
    for op in ops {
        match op {
            Op::Insert(k, v) => match table.put(k.clone(), v.clone()) {
                Ok(previous) => assert_eq!(previous, map.insert(k.clone(), v.clone())),
                Err(TableError::CapacityExhausted { capacity }) => {
                    assert_eq!(map.len(), capacity);
                    assert!(!map.contains_key(k));
                }
                Err(e) => panic!("unexpected error {:?}", e),
            },
            Op::Remove(k) => {
                assert_eq!(table.remove(k), map.remove(k));
            }
        }
    }
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8, i8>>) -> bool {
    let mut table = CollisionTable::new(11, 5).unwrap();
    let mut map = HashMap::new();

    do_ops(&ops, &mut table, &mut map);
    table.len() == map.len() && map.keys().all(|key| table.get(key) == map.get(key))
}

#[quickcheck]
fn fills_up_to_capacity(address: u8, cellar: u8, xs: Vec<u16>) -> bool {
    let config = TableConfig::new(usize::from(address) + 1, usize::from(cellar));
    let mut table = CollisionTable::with_config(config).unwrap();
    let mut distinct = 0;
    for x in &xs {
        if table.contains(x) {
            continue;
        }
        match table.put(*x, ()) {
            Ok(_) => distinct += 1,
            Err(_) => return distinct == config.capacity(),
        }
    }

    table.len() == distinct
}

#[quickcheck]
fn iteration_yields_every_entry_once(xs: Vec<i8>) -> bool {
    let mut table = CollisionTable::with_config(TableConfig::default()).unwrap();
    let mut map = HashMap::new();
    for x in &xs {
        table.put(*x, i16::from(*x) * 2).unwrap();
        map.insert(*x, i16::from(*x) * 2);
    }

    let entries: HashMap<_, _> = table.iter().map(|(k, v)| (*k, *v)).collect();
    table.iter().count() == map.len() && entries == map
}
