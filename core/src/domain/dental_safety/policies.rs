use crate::domain::dental_safety::{
    entities::{FoodTag, Verdict},
    value_objects::{DentalProcedure, DietRestriction, UserContext},
};

const HARD_KEYWORDS: &[&str] = &[
    "apple",
    "carrot",
    "nuts",
    "chips",
    "crackers",
    "pretzel",
    "bagel",
    "raw vegetables",
    "granola",
    "popcorn",
    "hard candy",
];

const SOFT_KEYWORDS: &[&str] = &[
    "yogurt",
    "pudding",
    "soup",
    "smoothie",
    "mashed potato",
    "pasta",
    "bread",
    "banana",
    "avocado",
    "fish",
    "eggs",
    "oatmeal",
    "rice",
];

const COLD_KEYWORDS: &[&str] = &[
    "ice cream",
    "frozen",
    "smoothie",
    "popsicle",
    "cold",
    "refrigerated",
];

const HOT_KEYWORDS: &[&str] = &[
    "soup",
    "coffee",
    "tea",
    "pizza",
    "hot",
    "cooked",
    "baked",
];

const SUGARY_KEYWORDS: &[&str] = &[
    "candy",
    "cake",
    "cookie",
    "chocolate",
    "donut",
    "ice cream",
    "popsicle",
    "soda",
    "juice",
    "fruit",
    "dessert",
    "sweet",
];

const STICKY_KEYWORDS: &[&str] = &[
    "caramel",
    "taffy",
    "gum",
    "honey",
    "syrup",
    "dried fruit",
    "toffee",
];

const ACIDIC_KEYWORDS: &[&str] = &[
    "lemon",
    "lime",
    "orange",
    "grapefruit",
    "tomato",
    "vinegar",
    "soda",
    "wine",
    "pickles",
    "citrus",
];

const CHEWY_KEYWORDS: &[&str] = &[
    "gum",
    "caramel",
    "taffy",
    "bagel",
    "jerky",
    "steak",
    "dried meat",
    "tough meat",
];

/// Texture and temperature rules are first-match-wins: at most one tag is
/// asserted per group.
const TEXTURE_RULES: &[(&[&str], FoodTag)] = &[
    (HARD_KEYWORDS, FoodTag::Hard),
    (SOFT_KEYWORDS, FoodTag::Soft),
];

const TEMPERATURE_RULES: &[(&[&str], FoodTag)] = &[
    (COLD_KEYWORDS, FoodTag::Cold),
    (HOT_KEYWORDS, FoodTag::Hot),
];

/// Chemical and chewiness rules assert independently and may co-occur.
const INDEPENDENT_RULES: &[(&[&str], FoodTag)] = &[
    (SUGARY_KEYWORDS, FoodTag::Sugary),
    (STICKY_KEYWORDS, FoodTag::Sticky),
    (ACIDIC_KEYWORDS, FoodTag::Acidic),
    (CHEWY_KEYWORDS, FoodTag::Chewy),
];

fn contains_any(name: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| name.contains(keyword))
}

/// Derive dental-relevant tags from a canonical food name.
///
/// Pure keyword membership over the rule tables above; names matching no
/// keyword produce an empty set and fall through to a safe verdict.
pub fn derive_tags(food_name: &str) -> Vec<FoodTag> {
    let name = food_name.to_lowercase();
    let mut tags = Vec::new();

    for rules in [TEXTURE_RULES, TEMPERATURE_RULES] {
        if let Some((_, tag)) = rules
            .iter()
            .find(|(keywords, _)| contains_any(&name, keywords))
        {
            tags.push(*tag);
        }
    }

    for (keywords, tag) in INDEPENDENT_RULES {
        if contains_any(&name, keywords) {
            tags.push(*tag);
        }
    }

    tags
}

/// Combine tags and user context into a verdict.
///
/// Ordered priority cascade: dietary restrictions, then braces and recent
/// procedures, then the baseline texture rule that applies to everyone,
/// then the sugary/acidic caution and the hot deferral. Total over any
/// input.
pub fn evaluate_verdict(tags: &[FoodTag], context: &UserContext) -> Verdict {
    let has = |tag: FoodTag| tags.contains(&tag);
    let hard_or_chewy = has(FoodTag::Hard) || has(FoodTag::Chewy);
    let damaging_texture = has(FoodTag::Hard) || has(FoodTag::Sticky) || has(FoodTag::Chewy);

    if context.restricts(DietRestriction::SoftOnly) && hard_or_chewy {
        return Verdict::Avoid;
    }
    if context.restricts(DietRestriction::NoHard) && has(FoodTag::Hard) {
        return Verdict::Avoid;
    }
    if context.restricts(DietRestriction::NoSticky) && has(FoodTag::Sticky) {
        return Verdict::Avoid;
    }
    if context.restricts(DietRestriction::NoChewy) && has(FoodTag::Chewy) {
        return Verdict::Avoid;
    }
    if context.restricts(DietRestriction::NoHot) && has(FoodTag::Hot) {
        return Verdict::Avoid;
    }
    if context.restricts(DietRestriction::NoCold) && has(FoodTag::Cold) {
        return Verdict::Avoid;
    }

    if context.has_braces && damaging_texture {
        return Verdict::Avoid;
    }
    if context.had_procedure(DentalProcedure::Extraction)
        && (has(FoodTag::Hot) || hard_or_chewy)
    {
        return Verdict::Avoid;
    }

    // Baseline texture rule, independent of context: hard, sticky and
    // chewy foods are flagged for everyone.
    if damaging_texture {
        return Verdict::Avoid;
    }

    if has(FoodTag::Sugary) || has(FoodTag::Acidic) {
        return Verdict::Caution;
    }
    if has(FoodTag::Hot) {
        return Verdict::Later;
    }

    Verdict::Safe
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context_with(restrictions: &[DietRestriction]) -> UserContext {
        UserContext {
            diet_restrictions: restrictions.to_vec(),
            ..UserContext::default()
        }
    }

    #[test]
    fn bagel_is_hard_and_chewy_but_not_soft() {
        let tags = derive_tags("Bagel");
        assert!(tags.contains(&FoodTag::Hard));
        assert!(tags.contains(&FoodTag::Chewy));
        assert!(!tags.contains(&FoodTag::Soft));
    }

    #[test]
    fn popsicle_is_cold_and_sugary() {
        let tags = derive_tags("Popsicle");
        assert!(tags.contains(&FoodTag::Cold));
        assert!(tags.contains(&FoodTag::Sugary));
    }

    #[test]
    fn cold_wins_over_hot_within_one_pass() {
        let tags = derive_tags("Frozen Soup");
        assert!(tags.contains(&FoodTag::Cold));
        assert!(!tags.contains(&FoodTag::Hot));
    }

    #[test]
    fn caramel_is_sticky_and_chewy() {
        let tags = derive_tags("Caramel");
        assert!(tags.contains(&FoodTag::Sticky));
        assert!(tags.contains(&FoodTag::Chewy));
    }

    #[test]
    fn lemon_is_acidic() {
        assert!(derive_tags("Lemon").contains(&FoodTag::Acidic));
    }

    #[test]
    fn unmatched_names_produce_no_tags() {
        assert!(derive_tags("Water").is_empty());
        assert!(derive_tags("Unknown Food").is_empty());
        assert!(derive_tags("").is_empty());
    }

    #[test]
    fn empty_tags_are_safe() {
        let verdict = evaluate_verdict(&[], &UserContext::default());
        assert_eq!(verdict, Verdict::Safe);
    }

    #[test]
    fn hard_is_never_safe_even_without_context() {
        let verdict = evaluate_verdict(&[FoodTag::Hard], &UserContext::default());
        assert_eq!(verdict, Verdict::Avoid);
    }

    #[test]
    fn soft_only_diet_rejects_chewy() {
        let context = context_with(&[DietRestriction::SoftOnly]);
        let verdict = evaluate_verdict(&[FoodTag::Chewy], &context);
        assert_eq!(verdict, Verdict::Avoid);
    }

    #[test]
    fn no_cold_restriction_rejects_cold() {
        let context = context_with(&[DietRestriction::NoCold]);
        let verdict = evaluate_verdict(&[FoodTag::Cold], &context);
        assert_eq!(verdict, Verdict::Avoid);
    }

    #[test]
    fn cold_alone_is_safe_without_restrictions() {
        let verdict = evaluate_verdict(&[FoodTag::Cold], &UserContext::default());
        assert_eq!(verdict, Verdict::Safe);
    }

    #[test]
    fn braces_reject_sticky() {
        let context = UserContext {
            has_braces: true,
            ..UserContext::default()
        };
        let verdict = evaluate_verdict(&[FoodTag::Sticky], &context);
        assert_eq!(verdict, Verdict::Avoid);
    }

    #[test]
    fn sugary_without_texture_issues_is_caution() {
        let verdict = evaluate_verdict(&[FoodTag::Sugary], &UserContext::default());
        assert_eq!(verdict, Verdict::Caution);
    }

    #[test]
    fn hot_without_other_triggers_is_later() {
        let verdict = evaluate_verdict(&[FoodTag::Hot], &UserContext::default());
        assert_eq!(verdict, Verdict::Later);
    }

    #[test]
    fn extraction_rejects_hot_foods() {
        let context = UserContext {
            recent_procedures: vec![DentalProcedure::Extraction],
            ..UserContext::default()
        };
        let verdict = evaluate_verdict(&[FoodTag::Hot], &context);
        assert_eq!(verdict, Verdict::Avoid);
    }

    #[test]
    fn restriction_beats_hot_deferral() {
        let context = context_with(&[DietRestriction::NoHot]);
        let verdict = evaluate_verdict(&[FoodTag::Hot], &context);
        assert_eq!(verdict, Verdict::Avoid);
    }
}
