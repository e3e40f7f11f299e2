use inventory_avl::{AvlIndex, Inventory};

fn main() {
    let mut inventory = Inventory::new();
    inventory.insert(50);
    inventory.insert(30);
    inventory.insert(70);
    assert!(!inventory.insert(30));
    inventory.insert(20);
    inventory.insert(40);
    assert!(inventory.search(&40));
    assert!(!inventory.search(&45));

    println!("{}", inventory.stats());
    for code in &inventory {
        println!("{code}");
    }

    let mut names = AvlIndex::new();
    for name in ["bolt", "nut", "washer", "nut"] {
        names.insert(name);
    }
    assert!(names.contains("washer"));

    print!("{{ ");
    for name in names.descending() {
        print!("{name}, ");
    }
    println!("}}");
}
