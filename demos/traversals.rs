use inventory_avl::{Inventory, ProductCode};

const SAMPLE: [ProductCode; 11] = [50, 30, 70, 20, 40, 60, 80, 10, 25, 35, 45];

fn show<'a>(title: &str, codes: impl Iterator<Item = &'a ProductCode>) {
    let codes: Vec<String> = codes.map(ToString::to_string).collect();
    println!("{:<13} {}", title, codes.join(" "));
}

fn main() {
    let mut inventory: Inventory = SAMPLE.into_iter().collect();
    println!("{}\n", inventory.stats());

    show("ascending", inventory.ascending());
    show("descending", inventory.descending());
    show("hierarchical", inventory.hierarchical());
    show("level order", inventory.level_order());

    // Sorted insertion would degrade a plain search tree into a list
    println!();
    for code in 81..=95 {
        inventory.insert(code);
    }
    println!("{}\n", inventory.stats());

    println!("Level-order traversal:");
    let mut by_level = Vec::new();
    inventory.traverse_level_order(|code| by_level.push(*code));
    println!("{:?}", by_level);
}
