use super::{AvlTree, AvlTreeMap, AvlTreeSet, Cursor, Duplicates, Error};

const N: i32 = 1_000;
const LARGE_N: i32 = 1_000_000;

fn collect<T: Clone, C>(tree: &AvlTree<T, C>) -> Vec<T> {
    tree.iter().cloned().collect()
}

#[test]
fn test_new() {
    let tree_i32 = AvlTree::<i32>::new();
    assert!(tree_i32.is_empty());
    assert_eq!(tree_i32.height(), 0);
    assert!(tree_i32.begin() == tree_i32.end());
    tree_i32.check_consistency();

    let tree_i8 = AvlTree::<i8>::with_duplicates();
    assert!(tree_i8.is_empty());
    assert_eq!(tree_i8.duplicates(), Duplicates::Allow);
    tree_i8.check_consistency();

    let map_string = AvlTreeMap::<String, String>::new();
    assert!(map_string.is_empty());
    map_string.check_consistency();
}

#[test]
fn test_rebalance() {
    {
        //     3 ->   2
        //    /      / \
        //   2      1   3
        //  /
        // 1
        let tree: AvlTree<i32> = [3, 2, 1].into_iter().collect();
        tree.check_consistency();
        assert_eq!(tree.height(), 2);
    }
    {
        //     3   ->     3 ->   2
        //    / \        /      / \
        //   2   4      2      1   3
        //  /          /
        // 1          1
        let mut tree: AvlTree<i32> = [3, 2, 4, 1].into_iter().collect();
        tree.check_consistency();
        assert_eq!(tree.height(), 3);
        assert_eq!(tree.erase(&4), 1);
        tree.check_consistency();
        assert_eq!(tree.height(), 2);
    }
    {
        //   3  ->   2
        //  /       / \
        // 1       1   3
        //  \
        //   2
        let tree: AvlTree<i32> = [3, 1, 2].into_iter().collect();
        tree.check_consistency();
        assert_eq!(tree.height(), 2);
    }
    {
        //   3   ->   3  ->   2
        //  / \      /       / \
        // 1   4    1       1   3
        //  \        \
        //   2        2
        let mut tree: AvlTree<i32> = [3, 1, 4, 2].into_iter().collect();
        assert_eq!(tree.height(), 3);
        tree.erase(&4);
        tree.check_consistency();
        assert_eq!(tree.height(), 2);
    }
    {
        // 1 ->    2
        //  \     / \
        //   2   1   3
        //    \
        //     3
        let tree: AvlTree<i32> = [1, 2, 3].into_iter().collect();
        tree.check_consistency();
        assert_eq!(tree.height(), 2);
    }
    {
        //   1     -> 1     ->    2
        //  / \        \         / \
        // 0   2        2       1   3
        //      \        \
        //       3        3
        let mut tree: AvlTree<i32> = [1, 0, 2, 3].into_iter().collect();
        assert_eq!(tree.height(), 3);
        tree.erase(&0);
        tree.check_consistency();
        assert_eq!(tree.height(), 2);
    }
    {
        // 1   ->  2
        //  \     / \
        //   3   1   3
        //  /
        // 2
        let tree: AvlTree<i32> = [1, 3, 2].into_iter().collect();
        tree.check_consistency();
        assert_eq!(tree.height(), 2);
    }
    {
        //   1   ->  1   ->  2
        //  / \       \     / \
        // 0   3       3   1   3
        //    /       /
        //   2       2
        let mut tree: AvlTree<i32> = [1, 0, 3, 2].into_iter().collect();
        assert_eq!(tree.height(), 3);
        tree.erase(&0);
        tree.check_consistency();
        assert_eq!(tree.height(), 2);
    }
    {
        //     5   ->  5    ->   3
        //    / \     /         / \
        //   3   8   3         2   5
        //  / \     / \           /
        // 2   4   2   4         4
        let mut tree: AvlTree<i32> = [5, 3, 8, 2, 4].into_iter().collect();
        tree.erase(&8);
        tree.check_consistency();
        assert_eq!(tree.height(), 3);
        assert_eq!(collect(&tree), [2, 3, 4, 5]);
    }
}

#[test]
fn test_erase_rebalances_up_to_root() {
    // A minimal AVL tree of height 5. Erasing 12 unbalances 11, and the
    // shortened right subtree then unbalances the root as well.
    let mut tree: AvlTree<i32> = [8, 5, 11, 3, 7, 10, 12, 2, 4, 6, 9, 1].into_iter().collect();
    tree.check_consistency();
    assert_eq!(tree.height(), 5);
    tree.erase(&12);
    tree.check_consistency();
    tree.erase(&9);
    tree.check_consistency();
    tree.erase(&1);
    tree.check_consistency();
    assert_eq!(collect(&tree), [2, 3, 4, 5, 6, 7, 8, 10, 11]);
}

#[test]
fn test_insert() {
    use rand::{rngs::StdRng, Rng, SeedableRng};

    let mut rng = StdRng::seed_from_u64(0);
    let mut values: Vec<i32> = (0..N).map(|_| rng.gen()).collect();
    values.sort();
    values.dedup();

    let mut tree = AvlTree::new();
    for value in &values {
        assert!(tree.insert(*value));
        tree.check_consistency();
    }
    assert!(tree.len() == values.len());

    for value in &values {
        assert!(!tree.insert(*value));
    }
    assert!(tree.len() == values.len());
    assert_eq!(collect(&tree), values);
}

#[test]
fn test_insert_sorted_range() {
    let mut tree = AvlTree::new();
    for value in 0..N {
        assert!(tree.insert(value));
        tree.check_consistency();
    }
    assert!(tree.len() == N as usize);
    assert!(tree.height() > 0);
    // AVL height bound: h < 1.4405 * log2(n + 2)
    let bound = 1.4405 * ((N + 2) as f64).log2();
    assert!((tree.height() as f64) < bound);
    assert!(tree.find(&-42).is_end());
}

#[test]
fn test_insert_shuffled_range() {
    use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

    let mut values: Vec<i32> = (0..N).collect();
    let mut rng = StdRng::seed_from_u64(0);
    values.shuffle(&mut rng);

    let mut tree = AvlTree::new();
    for value in &values {
        assert!(tree.insert(*value));
        tree.check_consistency();
    }
    assert!(tree.len() == values.len());

    for value in &values {
        assert!(!tree.insert(*value));
    }
    assert!(tree.len() == values.len());
}

#[test]
fn test_insert_duplicates() {
    use rand::{rngs::StdRng, Rng, SeedableRng};

    let mut rng = StdRng::seed_from_u64(0);
    let values: Vec<i32> = (0..N).map(|_| rng.gen_range(0..N / 10)).collect();

    let mut tree = AvlTree::with_duplicates();
    for value in &values {
        assert!(tree.insert(*value));
        tree.check_consistency();
    }
    assert_eq!(tree.len(), values.len());

    let mut sorted = values.clone();
    sorted.sort();
    assert_eq!(collect(&tree), sorted);
    for value in 0..N / 10 {
        let expected = values.iter().filter(|&&other| other == value).count();
        assert_eq!(tree.count(&value), expected);
    }
}

#[test]
fn test_duplicates_keep_insertion_order() {
    // Ordered by the first component only; the second records insertion order.
    let mut tree = AvlTree::with_comparator(|a: &(i32, usize), b: &(i32, usize)| a.0 < b.0, Duplicates::Allow);
    let keys = [2, 1, 2, 3, 2, 1, 2];
    for (order, key) in keys.into_iter().enumerate() {
        tree.insert((key, order));
        tree.check_consistency();
    }
    assert_eq!(
        collect(&tree),
        [(1, 1), (1, 5), (2, 0), (2, 2), (2, 4), (2, 6), (3, 3)]
    );
    assert_eq!(tree.get(&tree.find(&(2, 99))), Some(&(2, 0)));
    assert_eq!(tree.get(&tree.upper_bound(&(2, 99))), Some(&(3, 3)));
}

#[test]
fn test_find_and_bounds() {
    let mut tree = AvlTree::new();
    tree.extend([1, 6, 7, 3, 2, 4, 8, 9, 5, 3, 0]);
    assert_eq!(tree.len(), 10);
    assert_eq!(tree.erase(&3), 1);
    assert_eq!(tree.erase(&6), 1);
    assert_eq!(tree.erase(&6), 0);
    tree.check_consistency();
    assert_eq!(collect(&tree), [0, 1, 2, 4, 5, 7, 8, 9]);

    let first = tree.lower_bound(&3);
    let last = tree.upper_bound(&7);
    assert_eq!(tree.get(&first), Some(&4));
    assert_eq!(tree.get(&last), Some(&8));
    assert!(tree.between(first, last).eq([4, 5, 7].iter()));

    assert!(tree.find(&3).is_end());
    assert_eq!(tree.get(&tree.find(&4)), Some(&4));
    assert_eq!(tree.get(&tree.lower_bound(&4)), Some(&4));
    assert_eq!(tree.get(&tree.upper_bound(&4)), Some(&5));
    assert!(tree.lower_bound(&10).is_end());
    assert!(tree.upper_bound(&9).is_end());
    assert_eq!(tree.begin(), tree.lower_bound(&-1));

    let empty = AvlTree::<i32>::new();
    assert!(empty.find(&1).is_end());
    assert!(empty.lower_bound(&1).is_end());
    assert!(empty.between(empty.begin(), empty.end()).next().is_none());
}

#[test]
fn test_duplicate_mode() {
    let mut tree = AvlTree::with_duplicates();
    tree.extend([5, 5, 5]);
    assert_eq!(tree.len(), 3);

    let found = tree.find(&5);
    assert_eq!(found, tree.begin());
    let next = tree.erase_at(found);
    assert_eq!(tree.len(), 2);
    assert_eq!(tree.get(&next), Some(&5));
    assert_eq!(collect(&tree), [5, 5]);
    tree.check_consistency();
}

#[test]
fn test_erase_at_returns_successor() {
    use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

    let mut values: Vec<i32> = (0..N).collect();
    let mut rng = StdRng::seed_from_u64(0);
    values.shuffle(&mut rng);
    let mut tree: AvlTree<i32> = values.iter().copied().collect();

    for value in &values {
        let cursor = tree.find(value);
        let mut expected = cursor;
        expected.move_next(&tree);
        let expected_value = tree.get(&expected).copied();

        let next = tree.erase_at(cursor);
        assert_eq!(next, expected);
        assert_eq!(tree.get(&next).copied(), expected_value);
        tree.check_consistency();
    }
    assert!(tree.is_empty());
}

#[test]
fn test_erase_while_iterating() {
    let mut tree = AvlTree::with_duplicates();
    tree.extend([1, 5, 3, 5, 5, 7, 5, 2, 5, 9]);

    let mut cursor = tree.find(&5);
    let mut erased = 0;
    while tree.get(&cursor) == Some(&5) {
        cursor = tree.erase_at(cursor);
        erased += 1;
    }
    assert_eq!(erased, 5);
    assert_eq!(tree.get(&cursor), Some(&7));
    assert_eq!(collect(&tree), [1, 2, 3, 7, 9]);
    tree.check_consistency();

    // Erasing at the end position is a no-op.
    let end = tree.erase_at(tree.end());
    assert!(end.is_end());
    assert_eq!(tree.len(), 5);
}

#[test]
fn test_erase_range() {
    let mut tree: AvlTree<i32> = (0..100).collect();
    let first = tree.lower_bound(&10);
    let last = tree.lower_bound(&90);
    let last = tree.erase_range(first, last);
    assert_eq!(tree.get(&last), Some(&90));
    assert_eq!(tree.len(), 20);
    tree.check_consistency();

    let first = tree.begin();
    let end = tree.erase_range(first, tree.end());
    assert!(end.is_end());
    assert!(tree.is_empty());
}

#[test]
fn test_cursor_stepping() {
    let tree: AvlTree<i32> = [3, 1, 2].into_iter().collect();

    let mut cursor = tree.begin();
    let mut seen = Vec::new();
    while let Some(value) = tree.get(&cursor) {
        seen.push(*value);
        cursor.move_next(&tree);
    }
    assert_eq!(seen, [1, 2, 3]);
    assert_eq!(cursor, tree.end());

    // The end position sits between the largest and the smallest element.
    cursor.move_prev(&tree);
    assert_eq!(tree.get(&cursor), Some(&3));
    cursor.move_next(&tree);
    assert!(cursor.is_end());
    cursor.move_next(&tree);
    assert_eq!(tree.get(&cursor), Some(&1));
    cursor.move_prev(&tree);
    assert!(cursor.is_end());

    let mut empty_cursor = AvlTree::<i32>::new().end();
    let empty = AvlTree::<i32>::new();
    empty_cursor.move_next(&empty);
    assert!(empty_cursor.is_end());
}

#[test]
fn test_cursor_survives_other_mutations() {
    let mut tree: AvlTree<i32> = (0..20).map(|value| value * 2).collect();
    let cursor = tree.find(&10);

    // Insert between the cursor and its cached successor.
    tree.insert(11);
    let mut next = cursor;
    next.move_next(&tree);
    assert_eq!(tree.get(&next), Some(&11));

    // Erase the cached predecessor and many others, triggering rotations.
    for value in (0..20).map(|value| value * 2).filter(|&value| value != 10) {
        tree.erase(&value);
    }
    assert_eq!(tree.get(&cursor), Some(&10));
    let mut prev = cursor;
    prev.move_prev(&tree);
    assert!(prev.is_end());
    tree.check_consistency();
}

#[test]
#[should_panic(expected = "has been erased")]
fn test_stale_cursor_panics() {
    let mut tree: AvlTree<i32> = (0..10).collect();
    let cursor = tree.find(&5);
    let copy: Cursor = cursor;
    tree.erase_at(cursor);
    tree.get(&copy);
}

#[test]
#[should_panic(expected = "has been erased")]
fn test_cursor_stale_after_clear() {
    let mut tree: AvlTree<i32> = (0..10).collect();
    let mut cursor = tree.find(&5);
    tree.clear();
    tree.extend(0..10);
    cursor.move_next(&tree);
}

#[test]
fn test_front_back() {
    let mut tree = AvlTree::new();
    assert_eq!(tree.front(), Err(Error::Empty { op: "front" }));
    assert_eq!(tree.back(), Err(Error::Empty { op: "back" }));
    assert!(tree.first().is_none());

    tree.extend([4, 2, 9]);
    assert_eq!(tree.front(), Ok(&2));
    assert_eq!(tree.back(), Ok(&9));
    assert_eq!(tree.pop_first(), Some(2));
    assert_eq!(tree.pop_last(), Some(9));
    assert_eq!(tree.pop_last(), Some(4));
    assert_eq!(tree.pop_last(), None);
}

#[test]
fn test_clear() {
    use rand::{rngs::StdRng, Rng, SeedableRng};

    let mut rng = StdRng::seed_from_u64(0);
    let mut values: Vec<i32> = (0..N).map(|_| rng.gen()).collect();
    values.sort();
    values.dedup();

    let mut tree = AvlTree::new();
    for value in &values {
        tree.insert(*value);
    }
    assert!(!tree.is_empty());
    assert!(tree.len() == values.len());

    tree.clear();
    assert!(tree.is_empty());
    assert!(tree.len() == 0);
    tree.check_consistency();

    for value in &values {
        assert!(tree.insert(*value));
    }
    assert!(!tree.is_empty());
    assert!(tree.len() == values.len());
    tree.check_consistency();
}

#[test]
fn test_remove() {
    use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

    let mut rng = StdRng::seed_from_u64(0);
    let mut values: Vec<i32> = (0..N).map(|_| rng.gen()).collect();
    values.sort();
    values.dedup();

    let mut tree = AvlTree::new();
    for value in &values {
        tree.insert(*value);
    }

    values.shuffle(&mut rng);
    for value in &values {
        assert!(tree.contains(value));
        assert_eq!(tree.erase(value), 1);
        assert!(!tree.contains(value));
        tree.check_consistency();
    }
    assert!(tree.is_empty());
    assert!(tree.len() == 0);
}

#[test]
fn test_range() {
    let tree: AvlTree<i32> = (0..10).map(|value| value * 10).collect();
    assert!(tree.range(20..=40).eq([20, 30, 40].iter()));
    assert!(tree.range(15..40).eq([20, 30].iter()));
    assert!(tree.range(..15).eq([0, 10].iter()));
    assert!(tree.range(85..).eq([90].iter()));
    assert!(tree.range(41..49).next().is_none());
    assert!(tree.range(..).rev().eq(tree.iter().rev()));
    assert_eq!(tree.range(10..=80).rev().next(), Some(&80));
}

#[test]
#[should_panic(expected = "range start is greater than range end")]
fn test_range_panics_on_reversed_bounds() {
    use std::ops::Bound;

    let tree: AvlTree<i32> = (0..10).collect();
    let _ = tree.range((Bound::Included(5), Bound::Excluded(2)));
}

#[test]
fn test_custom_comparator() {
    let mut tree = AvlTree::with_comparator(|a: &i32, b: &i32| b < a, Duplicates::Reject);
    tree.extend([3, 1, 4, 1, 5, 9, 2, 6]);
    tree.check_consistency();
    assert_eq!(collect(&tree), [9, 6, 5, 4, 3, 2, 1]);
    assert_eq!(tree.get(&tree.lower_bound(&7)), Some(&6));
}

#[test]
fn test_iter_both_ends() {
    let tree: AvlTree<i32> = (0..N).collect();
    let mut iter = tree.iter();
    let mut front = 0;
    let mut back = N - 1;
    while front <= back {
        assert_eq!(iter.next(), Some(&front));
        if front < back {
            assert_eq!(iter.next_back(), Some(&back));
        }
        front += 1;
        back -= 1;
    }
    assert!(iter.next().is_none());
    assert!(iter.next_back().is_none());

    let owned: Vec<i32> = tree.clone().into_iter().rev().collect();
    assert_eq!(owned, (0..N).rev().collect::<Vec<_>>());
    assert_eq!(tree, tree.clone());
}

#[test]
fn test_map() {
    let mut map = AvlTreeMap::new();
    for (key, value) in [(3, "p"), (1, "h"), (2, "a"), (5, "y"), (4, "p"), (3, "b"), (0, "")] {
        map.insert(key, value);
    }
    map.check_consistency();
    assert_eq!(map.len(), 6);
    assert!(map.keys().copied().eq(0..6));
    assert!(map.values().eq(["", "h", "a", "p", "p", "y"].iter()));

    assert_eq!(map.at(&3), Ok(&"p"));
    assert_eq!(map.at(&42), Err(Error::KeyNotFound));
    assert_eq!(map[&5], "y");

    *map.get_or_insert_with(7, || "x") = "z";
    assert_eq!(map.get(&7), Some(&"z"));
    assert_eq!(*map.get_or_insert_with(7, || "unused"), "z");
    map.check_consistency();

    assert_eq!(map.remove(&1), Some("h"));
    assert_eq!(map.remove(&1), None);
    assert!(map.range(2..5).map(|(key, _)| *key).eq([2, 3, 4]));

    let cursor = map.find(&4);
    assert_eq!(map.get_at(&cursor), Some((&4, &"p")));
    let next = map.erase_at(cursor);
    assert_eq!(map.get_at(&next), Some((&5, &"y")));
    map.check_consistency();
}

#[test]
#[should_panic(expected = "no entry found for key")]
fn test_map_index_does_not_insert() {
    let map: AvlTreeMap<i32, i32> = (0..5).map(|key| (key, key)).collect();
    let _value = map[&42];
}

#[test]
fn test_map_iter() {
    use rand::{rngs::StdRng, Rng, SeedableRng};

    let mut rng = StdRng::seed_from_u64(0);
    let mut values: Vec<i32> = (0..N).map(|_| rng.gen()).collect();

    let mut map = AvlTreeMap::new();
    for value in &values {
        map.insert(*value, value.wrapping_add(42));
    }

    values.sort();
    values.dedup();

    let mut map_iter = map.iter();
    for value in &values {
        let kv = map_iter.next();
        assert!(kv.is_some());
        let (&key, &mapped) = kv.unwrap();
        assert_eq!(key, *value);
        assert_eq!(mapped, value.wrapping_add(42));
    }
    assert!(map_iter.next().is_none());

    map.for_each_mut(|key, mapped| *mapped = key.wrapping_sub(42));
    let mut value_iter = values.iter();
    for (&key, &mapped) in &map {
        let value = value_iter.next();
        assert!(value.is_some());
        let value = value.unwrap();
        assert_eq!(key, *value);
        assert_eq!(mapped, value.wrapping_sub(42));
    }
    assert!(value_iter.next().is_none());
}

#[test]
fn test_set() {
    use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

    let mut rng = StdRng::seed_from_u64(0);
    let mut values: Vec<i32> = (0..N).map(|_| rng.gen_range(0..N)).collect();

    let mut set = AvlTreeSet::new();
    for value in &values {
        set.insert(*value);
    }
    set.check_consistency();

    for value in &values {
        let got = set.get(value);
        assert_eq!(got, Some(value));
    }

    values.shuffle(&mut rng);
    values.resize(values.len() / 2, 0);
    for value in &values {
        set.remove(value);
        assert!(!set.contains(value));
    }
    set.check_consistency();
}

#[test]
fn test_set_iter() {
    use rand::{rngs::StdRng, Rng, SeedableRng};

    let mut rng = StdRng::seed_from_u64(0);
    let mut values: Vec<i32> = (0..N).map(|_| rng.gen()).collect();

    let set: AvlTreeSet<i32> = values.iter().copied().collect();

    values.sort();
    values.dedup();

    let mut set_iter = set.iter();
    for value in &values {
        let value_in_set = set_iter.next();
        assert!(value_in_set.is_some());
        let &value_in_set = value_in_set.unwrap();
        assert_eq!(value_in_set, *value);
    }
    assert!(set_iter.next().is_none());

    let owned: Vec<i32> = set.into_iter().collect();
    assert_eq!(owned, values);
}

#[test]
fn test_set_operations() {
    let lhs: AvlTreeSet<i32> = [1, 3, 5, 7, 9].into_iter().collect();
    let rhs: AvlTreeSet<i32> = [2, 3, 5, 8].into_iter().collect();
    assert!(lhs.union(&rhs).copied().eq([1, 2, 3, 5, 7, 8, 9]));
    assert!(lhs.intersection(&rhs).copied().eq([3, 5]));
    assert!(!lhs.is_disjoint(&rhs));

    let other: AvlTreeSet<i32> = [4, 6].into_iter().collect();
    assert!(lhs.is_disjoint(&other));
    assert_eq!(format!("{:?}", other), "{4, 6}");
}

#[test]
#[ignore]
fn test_large() {
    use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

    let mut rng = StdRng::seed_from_u64(0);
    let mut values: Vec<i32> = (0..LARGE_N).map(|_| rng.gen_range(0..LARGE_N)).collect();

    let mut tree = AvlTree::with_duplicates();
    tree.extend(values.iter().copied());
    tree.check_consistency();

    values.shuffle(&mut rng);
    values.resize(values.len() / 2, 0);
    for value in &values {
        let cursor = tree.find(value);
        tree.erase_at(cursor);
    }
    tree.check_consistency();
}
