// ABOUTME: Keyword classifier assigning every shopping-list item to one aisle
// ABOUTME: Ordered linear scan, first matching category wins, Other when nothing matches
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

use mealwise_core::models::ShoppingCategory;

use crate::matching::{contains_term, normalize_text};

// Order matters: Produce is checked before Meat & Seafood, and so on.
// Short keywords match whole words only (see `contains_term`).
const CATEGORY_KEYWORDS: &[(ShoppingCategory, &[&str])] = &[
    (
        ShoppingCategory::Produce,
        &[
            "onion",
            "garlic",
            "shallot",
            "scallion",
            "leek",
            "tomato",
            "potato",
            "carrot",
            "celery",
            "lettuce",
            "spinach",
            "kale",
            "cabbage",
            "broccoli",
            "cauliflower",
            "cucumber",
            "zucchini",
            "courgette",
            "eggplant",
            "aubergine",
            "bell pepper",
            "chili",
            "chilli",
            "jalapeno",
            "mushroom",
            "ginger",
            "lemon",
            "lime",
            "orange",
            "apple",
            "banana",
            "berry",
            "berries",
            "grape",
            "avocado",
            "mango",
            "pineapple",
            "peach",
            "pear",
            "plum",
            "cherry",
            "cherries",
            "melon",
            "basil",
            "parsley",
            "cilantro",
            "coriander",
            "mint",
            "dill",
            "thyme",
            "rosemary",
            "squash",
            "pumpkin",
            "beet",
            "beetroot",
            "radish",
            "asparagus",
            "green bean",
            "pea",
            "sweetcorn",
            "fennel",
            "artichoke",
            "arugula",
            "sprout",
            "okra",
            "turnip",
            "parsnip",
            "salad",
        ],
    ),
    (
        ShoppingCategory::MeatSeafood,
        &[
            "chicken",
            "beef",
            "pork",
            "lamb",
            "turkey",
            "duck",
            "bacon",
            "ham",
            "sausage",
            "mince",
            "steak",
            "veal",
            "venison",
            "chorizo",
            "prosciutto",
            "salami",
            "pancetta",
            "fish",
            "salmon",
            "tuna",
            "cod",
            "trout",
            "halibut",
            "mackerel",
            "sardine",
            "anchov",
            "tilapia",
            "shrimp",
            "prawn",
            "crab",
            "lobster",
            "mussel",
            "clam",
            "oyster",
            "scallop",
            "squid",
        ],
    ),
    (
        ShoppingCategory::Dairy,
        &[
            "milk",
            "cheese",
            "butter",
            "cream",
            "yogurt",
            "yoghurt",
            "egg",
            "parmesan",
            "mozzarella",
            "cheddar",
            "feta",
            "ricotta",
            "ghee",
            "kefir",
            "creme fraiche",
        ],
    ),
    (
        ShoppingCategory::Pantry,
        &[
            "flour",
            "sugar",
            "salt",
            "pepper",
            "oil",
            "vinegar",
            "rice",
            "pasta",
            "spaghetti",
            "noodle",
            "bean",
            "lentil",
            "chickpea",
            "oat",
            "quinoa",
            "couscous",
            "honey",
            "syrup",
            "sauce",
            "stock",
            "broth",
            "bouillon",
            "spice",
            "cumin",
            "paprika",
            "cinnamon",
            "oregano",
            "nutmeg",
            "dried",
            "powder",
            "baking",
            "yeast",
            "vanilla",
            "cocoa",
            "chocolate",
            "nut",
            "almond",
            "walnut",
            "peanut",
            "seed",
            "canned",
            "tinned",
            "ketchup",
            "mustard",
            "mayonnaise",
            "breadcrumb",
            "cornstarch",
            "cereal",
            "jam",
            "olive",
        ],
    ),
    (
        ShoppingCategory::Frozen,
        &["frozen", "ice", "sorbet", "popsicle"],
    ),
    (
        ShoppingCategory::Bakery,
        &[
            "bread",
            "baguette",
            "roll",
            "bun",
            "bagel",
            "croissant",
            "tortilla",
            "pita",
            "naan",
            "muffin",
            "cake",
            "brioche",
            "ciabatta",
            "sourdough",
            "pastry",
            "wrap",
        ],
    ),
    (
        ShoppingCategory::Beverages,
        &[
            "water", "juice", "coffee", "tea", "wine", "beer", "soda", "lemonade", "kombucha",
            "cider",
        ],
    ),
];

/// Aisle for an item name
///
/// Total: every name gets exactly one category, `Other` when no keyword
/// matches.
#[must_use]
pub fn categorize(item: &str) -> ShoppingCategory {
    let name = normalize_text(item);

    CATEGORY_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|keyword| contains_term(&name, keyword)))
        .map_or(ShoppingCategory::Other, |(category, _)| *category)
}
