use avl_cursor_tree::{AvlTree, AvlTreeMap, AvlTreeSet};

fn main() {
    let mut tree = AvlTree::new();
    tree.extend([1, 6, 7, 3, 2, 4, 8, 9, 5, 3, 0]);
    tree.erase(&3);
    tree.erase(&6);
    println!("tree: {:?}", tree);

    let first = tree.lower_bound(&3);
    let last = tree.upper_bound(&7);
    print!("[3, 7]:");
    for value in tree.between(first, last) {
        print!(" {value}");
    }
    println!();

    // Cursors step in both directions and wrap through the end position.
    let mut cursor = tree.end();
    cursor.move_prev(&tree);
    println!("largest: {:?}", tree.get(&cursor));

    let mut multiset = AvlTree::with_duplicates();
    multiset.extend([5, 1, 5, 2, 5, 3]);
    let mut cursor = multiset.find(&5);
    while multiset.get(&cursor) == Some(&5) {
        cursor = multiset.erase_at(cursor);
    }
    println!("without fives: {:?}", multiset);

    let mut map = AvlTreeMap::new();
    for (key, value) in [(3, "p"), (1, "h"), (2, "a"), (5, "y"), (4, "p"), (3, "b"), (0, "")] {
        map.insert(key, value);
    }
    for (k, v) in &map {
        println!("{k} => {v:?}");
    }
    match map.at(&42) {
        Ok(value) => println!("42 => {value}"),
        Err(err) => println!("42: {err}"),
    }

    let set: AvlTreeSet<i32> = (0..5).collect();
    let other: AvlTreeSet<i32> = (3..8).collect();
    println!("union: {:?}", set.union(&other));
    println!("intersection: {:?}", set.intersection(&other));
}
