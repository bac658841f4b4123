// ABOUTME: Built-in safe and unsafe term lists for the 14 regulated allergens
// ABOUTME: Plain static data consumed once by AllergenTaxonomies::builtin
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

use mealwise_core::models::Allergen;

/// Static term lists for one allergen
pub(super) struct BuiltinTerms {
    pub allergen: Allergen,
    pub unsafe_terms: &'static [&'static str],
    pub safe_terms: &'static [&'static str],
    pub lookalikes: &'static [&'static str],
}

// Unsafe lists include dish names and hidden sources. Safe lists hold
// look-alikes that are confirmed free of the allergen. A safe term must
// never occur inside an unsafe term of the same allergen. Look-alike words
// are compounds in which a short unsafe term or derivative keyword of the
// allergen does not count ("fish" in "shellfish", "ale" in "kale").
pub(super) const BUILTIN_TERMS: &[BuiltinTerms] = &[
    BuiltinTerms {
        allergen: Allergen::Gluten,
        unsafe_terms: &[
            "gluten",
            "wheat",
            "whole wheat",
            "wheat flour",
            "wholemeal",
            "flour",
            "plain flour",
            "self-raising flour",
            "self-rising flour",
            "all-purpose flour",
            "bread flour",
            "spelt",
            "rye",
            "barley",
            "pearl barley",
            "semolina",
            "couscous",
            "bulgur",
            "bulghur",
            "durum",
            "farro",
            "freekeh",
            "kamut",
            "einkorn",
            "emmer",
            "triticale",
            "malt",
            "malted",
            "malt vinegar",
            "oat",
            "oats",
            "oatmeal",
            "ale",
            "beer",
            "lager",
            "stout",
            "bread",
            "breadcrumbs",
            "panko",
            "bun",
            "pasta",
            "spaghetti",
            "linguine",
            "fettuccine",
            "tagliatelle",
            "penne",
            "macaroni",
            "lasagne",
            "lasagna",
            "orzo",
            "gnocchi",
            "noodles",
            "egg noodles",
            "udon",
            "ramen",
            "soy sauce",
            "seitan",
            "crackers",
            "biscuit",
            "cake",
            "pancake",
            "cupcake",
            "pastry",
            "puff pastry",
            "filo",
            "phyllo",
            "pie crust",
            "flour tortilla",
            "pita",
            "naan",
            "bagel",
            "croissant",
            "brioche",
            "croutons",
            "graham cracker",
            "wafer",
            "roux",
        ],
        safe_terms: &[
            "buckwheat",
            "gluten-free",
            "gluten free",
            "rice flour",
            "almond flour",
            "coconut flour",
            "chickpea flour",
            "gram flour",
            "corn flour",
            "cornflour",
            "cornmeal",
            "cornstarch",
            "potato starch",
            "tapioca flour",
            "rice noodles",
            "rice paper",
            "rice cake",
            "glass noodles",
            "corn tortilla",
            "maltodextrin",
            "root beer",
            "ginger ale",
        ],
        lookalikes: &[
            "goat", "coat", "boat", "float", "kale", "pale", "stale", "tamale", "bunch", "pitaya",
            "ricecake",
        ],
    },
    BuiltinTerms {
        allergen: Allergen::Milk,
        unsafe_terms: &[
            "milk",
            "whole milk",
            "skim milk",
            "buttermilk",
            "condensed milk",
            "evaporated milk",
            "milk powder",
            "milkshake",
            "butter",
            "ghee",
            "cream",
            "sour cream",
            "double cream",
            "whipping cream",
            "ice cream",
            "creme fraiche",
            "crème fraîche",
            "half and half",
            "cheese",
            "cream cheese",
            "cottage cheese",
            "goat cheese",
            "cheddar",
            "mozzarella",
            "parmesan",
            "parmigiano",
            "pecorino",
            "ricotta",
            "mascarpone",
            "feta",
            "brie",
            "camembert",
            "gouda",
            "gruyere",
            "gruyère",
            "halloumi",
            "paneer",
            "quark",
            "labneh",
            "yogurt",
            "yoghurt",
            "kefir",
            "lassi",
            "whey",
            "casein",
            "caseinate",
            "lactose",
            "curd",
            "dairy",
            "bechamel",
            "béchamel",
            "alfredo",
            "tzatziki",
            "raita",
        ],
        safe_terms: &[
            "coconut milk",
            "almond milk",
            "oat milk",
            "soy milk",
            "rice milk",
            "cashew milk",
            "hemp milk",
            "coconut cream",
            "coconut yogurt",
            "peanut butter",
            "almond butter",
            "cashew butter",
            "nut butter",
            "sunflower seed butter",
            "apple butter",
            "cocoa butter",
            "shea butter",
            "butternut",
            "butter beans",
            "butterhead",
            "buttercup squash",
            "cream of tartar",
            "cream soda",
            "dairy-free",
            "dairy free",
            "vegan butter",
            "vegan cheese",
            "bean curd",
        ],
        lookalikes: &[
            "soymilk",
            "oatmilk",
            "almondmilk",
            "ricemilk",
            "cashewmilk",
            "hempmilk",
            "coconutmilk",
            "milkfish",
        ],
    },
    BuiltinTerms {
        allergen: Allergen::Peanuts,
        unsafe_terms: &[
            "peanut",
            "peanut butter",
            "peanut oil",
            "groundnut",
            "arachis",
            "arachis oil",
            "satay",
            "monkey nuts",
            "goober",
        ],
        safe_terms: &["peanut-free", "peanut free"],
        lookalikes: &[],
    },
    BuiltinTerms {
        allergen: Allergen::TreeNuts,
        unsafe_terms: &[
            "almond",
            "hazelnut",
            "filbert",
            "walnut",
            "cashew",
            "pecan",
            "pistachio",
            "macadamia",
            "brazil nut",
            "pine nut",
            "chestnut",
            "praline",
            "marzipan",
            "frangipane",
            "nougat",
            "gianduja",
            "nutella",
            "amaretto",
            "amaretti",
            "pesto",
            "mixed nuts",
        ],
        safe_terms: &[
            "coconut",
            "nutmeg",
            "water chestnut",
            "butternut",
            "doughnut",
            "donut",
            "nut-free",
            "nut free",
            "tiger nut",
            "shea",
            "nutritional yeast",
        ],
        lookalikes: &[
            "peanut",
            "groundnut",
            "coconut",
            "doughnut",
            "donut",
            "butternut",
            "tigernut",
            "nutmeg",
            "nutrition",
            "nutritional",
        ],
    },
    BuiltinTerms {
        allergen: Allergen::Eggs,
        unsafe_terms: &[
            "egg",
            "egg white",
            "egg yolk",
            "egg noodles",
            "eggnog",
            "mayonnaise",
            "mayo",
            "aioli",
            "meringue",
            "custard",
            "hollandaise",
            "bearnaise",
            "béarnaise",
            "albumin",
            "albumen",
            "ovalbumin",
            "lysozyme",
            "frittata",
            "omelette",
            "omelet",
            "quiche",
            "carbonara",
        ],
        safe_terms: &[
            "eggplant",
            "egg-free",
            "egg free",
            "vegan mayo",
            "vegan mayonnaise",
            "egg replacer",
            "flax egg",
            "chia egg",
        ],
        lookalikes: &["eggplant"],
    },
    BuiltinTerms {
        allergen: Allergen::Fish,
        unsafe_terms: &[
            "fish",
            "fish sauce",
            "fish stock",
            "anchovy",
            "anchovies",
            "salmon",
            "tuna",
            "cod",
            "haddock",
            "halibut",
            "hake",
            "pollock",
            "plaice",
            "mackerel",
            "sardine",
            "herring",
            "kipper",
            "trout",
            "tilapia",
            "bass",
            "sole",
            "carp",
            "pike",
            "perch",
            "eel",
            "snapper",
            "mahi mahi",
            "whitebait",
            "gravlax",
            "roe",
            "lox",
            "caviar",
            "surimi",
            "bonito",
            "dashi",
            "nam pla",
            "worcestershire",
        ],
        safe_terms: &["fish-free", "fish free", "vegan fish sauce", "fishless"],
        lookalikes: &[
            "shellfish",
            "crayfish",
            "crawfish",
            "cuttlefish",
            "jellyfish",
            "starfish",
            "shake",
            "milkshake",
            "peel",
            "steel",
            "wheel",
            "heel",
            "carpaccio",
            "coddled",
            "pikelet",
        ],
    },
    BuiltinTerms {
        allergen: Allergen::Shellfish,
        unsafe_terms: &[
            "shellfish",
            "crustacean",
            "shrimp",
            "shrimp paste",
            "prawn",
            "crab",
            "crabmeat",
            "lobster",
            "langoustine",
            "crayfish",
            "crawfish",
            "krill",
            "scampi",
            "bisque",
        ],
        safe_terms: &[
            "crab apple",
            "crabapple",
            "shellfish-free",
            "shellfish free",
        ],
        lookalikes: &["crabapple"],
    },
    BuiltinTerms {
        allergen: Allergen::Soy,
        unsafe_terms: &[
            "soy",
            "soya",
            "soybean",
            "soy sauce",
            "soy lecithin",
            "tofu",
            "tempeh",
            "edamame",
            "miso",
            "natto",
            "tamari",
            "shoyu",
            "teriyaki",
            "hoisin",
            "tvp",
            "textured vegetable protein",
            "yuba",
            "bean curd",
            "okara",
        ],
        safe_terms: &["soy-free", "soy free", "coconut aminos"],
        lookalikes: &[],
    },
    BuiltinTerms {
        allergen: Allergen::Molluscs,
        unsafe_terms: &[
            "mollusc",
            "mollusk",
            "clam",
            "razor clam",
            "vongole",
            "mussel",
            "oyster",
            "oyster sauce",
            "scallop",
            "squid",
            "calamari",
            "octopus",
            "cuttlefish",
            "snail",
            "escargot",
            "abalone",
            "whelk",
            "cockle",
            "periwinkle",
            "conch",
            "geoduck",
        ],
        safe_terms: &[
            "oyster mushroom",
            "oyster plant",
            "vegan oyster sauce",
            "mushroom oyster sauce",
            "scalloped potato",
        ],
        lookalikes: &[],
    },
    BuiltinTerms {
        allergen: Allergen::Sesame,
        unsafe_terms: &[
            "sesame",
            "sesame oil",
            "sesame seeds",
            "tahini",
            "tahina",
            "halva",
            "halvah",
            "halwa",
            "hummus",
            "houmous",
            "za'atar",
            "zaatar",
            "gomasio",
            "gomashio",
            "benne",
            "gingelly",
            "furikake",
            "dukkah",
        ],
        safe_terms: &["sesame-free", "sesame free"],
        lookalikes: &[],
    },
    BuiltinTerms {
        allergen: Allergen::Mustard,
        unsafe_terms: &[
            "mustard",
            "mustard seed",
            "mustard oil",
            "mustard greens",
            "dijon",
            "wholegrain mustard",
            "english mustard",
            "honey mustard",
            "mostarda",
            "piccalilli",
        ],
        safe_terms: &["mustard-free", "mustard free"],
        lookalikes: &[],
    },
    BuiltinTerms {
        allergen: Allergen::Lupin,
        unsafe_terms: &["lupin", "lupine", "lupini", "lupin flour"],
        safe_terms: &["lupin-free", "lupin free"],
        lookalikes: &[],
    },
    BuiltinTerms {
        allergen: Allergen::Celery,
        unsafe_terms: &[
            "celery",
            "celeriac",
            "celery salt",
            "celery seed",
            "celery root",
            "mirepoix",
            "soffritto",
        ],
        safe_terms: &["celery-free", "celery free"],
        lookalikes: &[],
    },
    BuiltinTerms {
        allergen: Allergen::Sulphites,
        unsafe_terms: &[
            "sulphite",
            "sulfite",
            "sulphur dioxide",
            "sulfur dioxide",
            "metabisulphite",
            "metabisulfite",
            "wine",
            "wine vinegar",
            "champagne",
            "prosecco",
            "sherry",
            "port wine",
            "vermouth",
            "marsala",
            "cider",
            "balsamic",
            "molasses",
            "dried fruit",
            "dried apricots",
            "raisins",
            "sultanas",
            "currants",
            "prunes",
            "e220",
            "e221",
            "e222",
            "e223",
            "e224",
            "e226",
            "e227",
            "e228",
        ],
        safe_terms: &[
            "sulphite-free",
            "sulfite-free",
            "sulphite free",
            "sulfite free",
        ],
        lookalikes: &[],
    },
];
