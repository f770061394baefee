use crate::domain::classification::entities::FoodLabel;

/// Display-name aliases applied after title-casing. Values are fixed
/// points of the mapping, so normalizing an already-canonical name is a
/// no-op.
const FOOD_NAME_ALIASES: &[(&str, &str)] = &[
    ("Acorn Squash", "Squash"),
    ("Butternut Squash", "Squash"),
    ("Carbonara", "Pasta Carbonara"),
    ("Chocolate Sauce", "Chocolate"),
    ("Custard Apple", "Custard"),
    ("Ear", "Corn"),
    ("French Loaf", "Bread"),
    ("Granny Smith", "Apple"),
    ("Head Cabbage", "Cabbage"),
    ("Hot Dog", "Hot Dog"),
    ("Hotdog", "Hot Dog"),
    ("Ice Lolly", "Popsicle"),
    ("Meat Loaf", "Meatloaf"),
    ("Mushroom", "Mushrooms"),
    ("Spaghetti Squash", "Squash"),
    ("Strawberry", "Strawberries"),
];

/// Labels counted as food-plausible when re-ranking classifier output.
/// Broad object classifiers regularly rank tableware and containers above
/// the food itself, so vessel words act as weak food signals here.
const FOOD_KEYWORDS: &[&str] = &[
    // fruits
    "banana",
    "orange",
    "lemon",
    "pineapple",
    "strawberry",
    "apple",
    "pomegranate",
    "fig",
    "granny_smith",
    "custard_apple",
    // vegetables
    "broccoli",
    "cauliflower",
    "mushroom",
    "bell_pepper",
    "cucumber",
    "zucchini",
    "spaghetti_squash",
    "acorn_squash",
    "butternut_squash",
    "artichoke",
    "cabbage",
    "corn",
    "ear",
    // prepared dishes
    "cheeseburger",
    "hamburger",
    "hotdog",
    "meat_loaf",
    "pizza",
    "chicken",
    "carbonara",
    "burrito",
    "trifle",
    "consomme",
    "guacamole",
    "sushi",
    // breads and desserts
    "bagel",
    "pretzel",
    "french_loaf",
    "bread",
    "croissant",
    "dough",
    "popcorn",
    "chip",
    "chocolate",
    "ice_cream",
    "ice_lolly",
    "frozen",
    "cupcake",
    "cookie",
    "pie",
    "cake",
    "cream",
    "custard",
    "pudding",
    // drinks and vessels, weak signals
    "espresso",
    "eggnog",
    "cup",
    "pitcher",
    "wine_bottle",
    "beer_bottle",
    "plate",
    "bowl",
    "tray",
    "platter",
];

const MAX_ALTERNATIVE_NAMES: usize = 3;

/// Normalize a raw classifier label into a canonical display name.
///
/// Pure and total: separators become spaces, each token is title-cased,
/// and the result is looked up in the alias table. Unknown labels keep
/// their title-cased form; empty or whitespace input passes through
/// unchanged.
pub fn canonical_food_name(raw_label: &str) -> String {
    let formatted = title_case(&raw_label.replace('_', " "));

    FOOD_NAME_ALIASES
        .iter()
        .find(|(alias, _)| *alias == formatted)
        .map(|(_, canonical)| (*canonical).to_string())
        .unwrap_or(formatted)
}

fn title_case(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Case-insensitive substring membership against the food keyword list.
pub fn is_food_related(label: &str) -> bool {
    let label = label.to_lowercase();
    FOOD_KEYWORDS.iter().any(|keyword| label.contains(keyword))
}

/// Candidates re-ranked by food plausibility.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedCandidates {
    pub primary: FoodLabel,
    pub alternatives: Vec<FoodLabel>,
}

/// Pick the primary candidate and up to three alternatives.
///
/// Food-plausible candidates win over more confident non-food ones while
/// keeping their original relative order and confidence scores. When no
/// candidate looks like food the most-confident raw candidate is used as a
/// last resort. Returns `None` for an empty candidate list.
pub fn rank_candidates(candidates: &[FoodLabel]) -> Option<RankedCandidates> {
    let food: Vec<FoodLabel> = candidates
        .iter()
        .filter(|candidate| is_food_related(&candidate.label))
        .cloned()
        .collect();

    if let Some(primary) = food.first() {
        return Some(RankedCandidates {
            primary: primary.clone(),
            alternatives: food
                .iter()
                .skip(1)
                .take(MAX_ALTERNATIVE_NAMES)
                .cloned()
                .collect(),
        });
    }

    let primary = candidates.first()?.clone();
    Some(RankedCandidates {
        primary,
        alternatives: candidates
            .iter()
            .skip(1)
            .take(MAX_ALTERNATIVE_NAMES)
            .cloned()
            .collect(),
    })
}
