//! Day-by-day inventory simulator.
//!
//! Prints the inventory, advances it one day, and repeats:
//!
//! ```text
//! shelflife-simulator [DAYS] [ITEM]...
//! ```
//!
//! `DAYS` defaults to 2; each `ITEM` is given in the display form
//! `name, sell-in, quality`. With no items, a built-in sample stock
//! covering every aging category is used.

use anyhow::Context;

use shelflife_inventory::{Item, advance_day};

const DEFAULT_DAYS: u32 = 2;

fn main() -> anyhow::Result<()> {
    shelflife_observability::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let days = match args.first() {
        Some(raw) => raw
            .parse::<u32>()
            .with_context(|| format!("day count must be a non-negative integer, got {raw:?}"))?,
        None => DEFAULT_DAYS,
    };
    let mut items = if args.len() > 1 {
        args[1..]
            .iter()
            .map(|spec| {
                spec.parse::<Item>()
                    .with_context(|| format!("bad item spec {spec:?}, expected \"name, sell-in, quality\""))
            })
            .collect::<anyhow::Result<Vec<_>>>()?
    } else {
        sample_stock()
    };

    tracing::info!(days, items = items.len(), "starting inventory simulation");

    for day in 0..=days {
        println!("-------- day {day} --------");
        println!("name, sell-in, quality");
        for item in &items {
            println!("{item}");
        }
        println!();
        advance_day(&mut items);
    }

    Ok(())
}

/// Sample stock with at least one line per aging category, including the
/// awkward starts (expired legendary, passes straddling the tiers).
fn sample_stock() -> Vec<Item> {
    vec![
        Item::new("vintage-cloak", 10, 20),
        Item::new("aged-brie", 2, 0),
        Item::new("mountain-elixir", 5, 7),
        Item::new("legendary", 0, 80),
        Item::new("legendary", -1, 80),
        Item::new("backstage-pass", 15, 20),
        Item::new("backstage-pass", 10, 49),
        Item::new("backstage-pass", 5, 49),
        Item::new("conjured", 3, 6),
    ]
}
