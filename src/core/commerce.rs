//! Product vocabulary for the commerce endpoints.
//!
//! The faker library carries no commerce wordlists, so the service keeps its
//! own. Product names follow the familiar adjective-material-noun pattern
//! ("Ergonomic Steel Chair").

use rand::Rng;

pub const DEPARTMENTS: &[&str] = &[
    "Books", "Movies", "Music", "Games", "Electronics", "Computers", "Home",
    "Garden", "Tools", "Grocery", "Health", "Beauty", "Toys", "Kids", "Baby",
    "Clothing", "Shoes", "Jewelry", "Sports", "Outdoors", "Automotive",
    "Industrial",
];

pub const MATERIALS: &[&str] = &[
    "Steel", "Wooden", "Concrete", "Plastic", "Cotton", "Granite", "Rubber",
    "Leather", "Silk", "Wool", "Linen", "Marble", "Iron", "Bronze", "Copper",
    "Aluminum", "Paper",
];

pub const COLORS: &[&str] = &[
    "red", "green", "blue", "yellow", "purple", "mint green", "teal", "white",
    "black", "orange", "pink", "grey", "maroon", "violet", "turquoise", "tan",
    "sky blue", "salmon", "plum", "orchid", "olive", "magenta", "lime",
    "ivory", "indigo", "gold", "fuchsia", "cyan", "azure", "lavender",
    "silver",
];

const ADJECTIVES: &[&str] = &[
    "Small", "Ergonomic", "Rustic", "Intelligent", "Gorgeous", "Incredible",
    "Fantastic", "Practical", "Sleek", "Awesome", "Enormous", "Mediocre",
    "Synergistic", "Heavy Duty", "Lightweight", "Aerodynamic", "Durable",
];

const PRODUCT_NOUNS: &[&str] = &[
    "Chair", "Car", "Computer", "Gloves", "Pants", "Shirt", "Table", "Shoes",
    "Hat", "Plate", "Knife", "Bottle", "Coat", "Lamp", "Keyboard", "Bag",
    "Bench", "Clock", "Watch", "Wallet",
];

/// Lowest price in cents (1.00)
const MIN_PRICE_CENTS: u32 = 100;

/// Highest price in cents (100.00)
const MAX_PRICE_CENTS: u32 = 10_000;

/// Pick one entry from a non-empty wordlist
fn pick<R: Rng + ?Sized>(rng: &mut R, words: &'static [&'static str]) -> &'static str {
    words[rng.random_range(0..words.len())]
}

pub fn department<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    pick(rng, DEPARTMENTS)
}

pub fn material<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    pick(rng, MATERIALS)
}

pub fn color<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    pick(rng, COLORS)
}

/// Compose a product name from adjective, material and noun
pub fn product_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!(
        "{} {} {}",
        pick(rng, ADJECTIVES),
        pick(rng, MATERIALS),
        pick(rng, PRODUCT_NOUNS)
    )
}

/// Render a price between 1.00 and 100.00 with two fraction digits
pub fn price<R: Rng + ?Sized>(rng: &mut R) -> String {
    let cents = rng.random_range(MIN_PRICE_CENTS..=MAX_PRICE_CENTS);
    format!("{}.{:02}", cents / 100, cents % 100)
}
