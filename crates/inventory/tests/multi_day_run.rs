use gildedrose_inventory::{Category, Inventory, Item, MAX_QUALITY, MIN_QUALITY};

fn tavern_stock() -> Vec<Item> {
    vec![
        Item::new("+5 Dexterity Vest", 10, 20),
        Item::new("Aged Brie", 2, 0),
        Item::new("Elixir of the Mongoose", 5, 7),
        Item::new("Sulfuras, Hand of Ragnaros", 0, 80),
        Item::new("Sulfuras, Hand of Ragnaros", -1, 80),
        Item::new("Backstage passes to a TAFKAL80ETC concert", 15, 20),
        Item::new("Backstage passes to a TAFKAL80ETC concert", 10, 49),
        Item::new("Backstage passes to a TAFKAL80ETC concert", 5, 49),
        Item::new("Conjured Mama Cakes", 3, 6),
    ]
}

fn snapshot(inventory: &Inventory) -> Vec<(i32, i32)> {
    inventory.items().map(|i| (i.sell_in, i.quality)).collect()
}

#[test]
fn two_days_of_the_tavern_stock() {
    let mut inventory = Inventory::new(tavern_stock()).unwrap();
    inventory.advance_days(2);

    assert_eq!(
        snapshot(&inventory),
        vec![
            (8, 18),
            (0, 2),
            (3, 5),
            (0, 80),
            (-1, 80),
            (13, 22),
            (8, 50),
            (3, 50),
            (1, 4),
        ]
    );
}

#[test]
fn eleven_days_of_the_tavern_stock() {
    let mut inventory = Inventory::new(tavern_stock()).unwrap();
    inventory.advance_days(11);

    assert_eq!(
        snapshot(&inventory),
        vec![
            (-1, 8),
            (-9, 20),
            (-6, 0),
            (0, 80),
            (-1, 80),
            (4, 38),
            (-1, 0),
            (-6, 0),
            (-8, 0),
        ]
    );
}

#[test]
fn names_and_order_survive_a_long_run() {
    let stock = tavern_stock();
    let names: Vec<String> = stock.iter().map(|i| i.name.clone()).collect();

    let mut inventory = Inventory::new(stock).unwrap();
    for _ in 0..100 {
        inventory.advance_one_day();
        for (category, item) in inventory.iter() {
            if !category.is_legendary() {
                assert!((MIN_QUALITY..=MAX_QUALITY).contains(&item.quality));
            }
        }
    }

    let after: Vec<String> = inventory.into_items().into_iter().map(|i| i.name).collect();
    assert_eq!(after, names);
}

#[test]
fn everything_but_brie_and_sulfuras_ends_worthless() {
    let mut inventory = Inventory::new(tavern_stock()).unwrap();
    inventory.advance_days(60);

    for (category, item) in inventory.iter() {
        match category {
            Category::Legendary => assert_eq!(item.quality, 80),
            Category::Appreciating => assert_eq!(item.quality, MAX_QUALITY),
            Category::EventTicket | Category::Generic => assert_eq!(item.quality, MIN_QUALITY),
        }
    }
}
