use ordtree::{OrderedMap, OrderedSet};

fn main() {
    let mut map = OrderedMap::new();
    map.insert(0, "zero");
    map.insert(1, "one");
    map.insert(2, "two");
    map.insert(2, "two");
    map.insert(3, "three");
    map.insert(4, "four");
    map.insert(5, "five");
    assert_eq!(map.get(&1), Some(&"one"));
    map.remove(&1);
    assert!(map.get(&1).is_none());

    assert_eq!(map.floor(&1), Some((&0, &"zero")));
    assert_eq!(map.ceiling(&1), Some((&2, &"two")));
    assert_eq!(map.lower(&4), Some((&3, &"three")));
    assert_eq!(map.higher(&4), Some((&5, &"five")));
    println!("first: {:?}", map.first());
    println!("last: {:?}", map.last());

    for (k, v) in &map {
        println!("{k} => {v}");
    }

    let mut set = OrderedSet::new();
    for x in 0..5 {
        set.insert(x);
    }
    assert!(set.contains(&1));
    set.remove(&1);
    assert!(!set.contains(&1));

    print!("{{ ");
    for x in &set {
        print!("{x}, ");
    }
    println!("}}");
}
