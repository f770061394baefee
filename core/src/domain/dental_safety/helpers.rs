use crate::domain::dental_safety::{
    entities::{FoodTag, Verdict},
    value_objects::{DentalProcedure, DietRestriction, UserContext},
};

const DEFAULT_ALTERNATIVES: &[&str] = &[
    "Yogurt",
    "Smoothie",
    "Mashed potatoes",
    "Scrambled eggs",
];

/// Human-readable reasons matching the verdict, one per triggering tag,
/// with braces-specific wording where it applies. Never empty.
pub fn safety_reasons(verdict: Verdict, tags: &[FoodTag], context: &UserContext) -> Vec<String> {
    let has = |tag: FoodTag| tags.contains(&tag);
    let mut reasons = Vec::new();

    match verdict {
        Verdict::Avoid => {
            if context.restricts(DietRestriction::SoftOnly)
                && (has(FoodTag::Hard) || has(FoodTag::Chewy))
            {
                reasons.push("Not soft enough for your current soft-food diet".to_string());
            }
            if has(FoodTag::Hard) {
                reasons.push(
                    if context.has_braces {
                        "Hard texture can damage brackets and wires on your braces"
                    } else {
                        "Hard texture can damage crowns, fillings, or recent dental work"
                    }
                    .to_string(),
                );
            }
            if has(FoodTag::Sticky) {
                reasons.push(
                    if context.has_braces {
                        "Sticky foods can get stuck in braces and pull on brackets"
                    } else {
                        "Sticky foods can pull on dental work or get stuck between teeth"
                    }
                    .to_string(),
                );
            }
            if has(FoodTag::Chewy) {
                reasons.push(
                    "Chewy texture requires excessive jaw movement and can damage appliances"
                        .to_string(),
                );
            }
            if context.restricts(DietRestriction::NoHot) && has(FoodTag::Hot) {
                reasons.push("Hot foods are restricted for you right now - wait for it to cool down".to_string());
            }
            if context.restricts(DietRestriction::NoCold) && has(FoodTag::Cold) {
                reasons.push("Avoid cold foods for now due to sensitivity".to_string());
            }
            if context.had_procedure(DentalProcedure::Extraction)
                && (has(FoodTag::Hot) || has(FoodTag::Hard) || has(FoodTag::Chewy))
            {
                reasons.push(
                    "Not recommended after a tooth extraction - stick to cool, soft foods"
                        .to_string(),
                );
            }
        }
        Verdict::Caution => {
            if has(FoodTag::Sugary) {
                reasons.push(
                    "High sugar content feeds bacteria - rinse mouth thoroughly after eating"
                        .to_string(),
                );
            }
            if has(FoodTag::Acidic) {
                reasons.push(
                    "Acidic foods can weaken tooth enamel - wait 30 minutes before brushing"
                        .to_string(),
                );
            }
        }
        Verdict::Later => {
            if has(FoodTag::Hot) {
                reasons.push(
                    "Hot temperature can increase sensitivity after dental procedures - let it cool down"
                        .to_string(),
                );
            }
        }
        Verdict::Safe => {
            reasons.push(
                if context.has_braces {
                    "Safe to eat with your braces - soft texture won't cause damage"
                } else if context.in_treatment() {
                    "Safe to eat during your current dental treatment"
                } else {
                    "Safe to eat with your current dental treatment plan"
                }
                .to_string(),
            );
        }
    }

    if reasons.is_empty() {
        reasons.push("Not the best choice with your current dental treatment plan".to_string());
    }

    reasons
}

/// Substitute suggestions for non-safe verdicts: a curated lead suggestion
/// when a soft-food diet or braces triggered the verdict, then the default
/// soft options.
pub fn suggest_alternatives(verdict: Verdict, tags: &[FoodTag], context: &UserContext) -> Vec<String> {
    if verdict == Verdict::Safe {
        return Vec::new();
    }

    let has = |tag: FoodTag| tags.contains(&tag);
    let mut alternatives = Vec::new();

    if context.restricts(DietRestriction::SoftOnly) && (has(FoodTag::Hard) || has(FoodTag::Chewy)) {
        alternatives.push("Stick to soft foods like yogurt, smoothies, or mashed foods".to_string());
    } else if context.has_braces && has(FoodTag::Hard) {
        alternatives.push("Try softer alternatives like cooked vegetables".to_string());
    } else if context.has_braces && has(FoodTag::Sticky) {
        alternatives.push("Choose non-sticky options".to_string());
    }

    alternatives.extend(DEFAULT_ALTERNATIVES.iter().map(|name| (*name).to_string()));
    alternatives
}

#[cfg(test)]
mod tests {
    use super::*;

    fn braces_context() -> UserContext {
        UserContext {
            has_braces: true,
            ..UserContext::default()
        }
    }

    #[test]
    fn braces_sticky_reason_mentions_braces() {
        let reasons = safety_reasons(Verdict::Avoid, &[FoodTag::Sticky], &braces_context());
        assert!(reasons.iter().any(|reason| reason.contains("braces")));
    }

    #[test]
    fn hard_reason_without_braces_mentions_dental_work() {
        let reasons = safety_reasons(Verdict::Avoid, &[FoodTag::Hard], &UserContext::default());
        assert_eq!(reasons.len(), 1);
        assert!(reasons[0].contains("crowns, fillings"));
    }

    #[test]
    fn caution_reasons_cover_each_trigger() {
        let reasons = safety_reasons(
            Verdict::Caution,
            &[FoodTag::Sugary, FoodTag::Acidic],
            &UserContext::default(),
        );
        assert_eq!(reasons.len(), 2);
        assert!(reasons[0].contains("rinse"));
        assert!(reasons[1].contains("enamel"));
    }

    #[test]
    fn safe_verdict_prefers_braces_affirmation() {
        let reasons = safety_reasons(Verdict::Safe, &[], &braces_context());
        assert_eq!(reasons.len(), 1);
        assert!(reasons[0].contains("braces"));
    }

    #[test]
    fn safe_verdict_mentions_ongoing_treatment() {
        let context = UserContext {
            current_treatment: Some("root canal".to_string()),
            ..UserContext::default()
        };
        let reasons = safety_reasons(Verdict::Safe, &[], &context);
        assert_eq!(
            reasons,
            vec!["Safe to eat during your current dental treatment".to_string()]
        );
    }

    #[test]
    fn reasons_are_never_empty() {
        let context = UserContext {
            diet_restrictions: vec![DietRestriction::NoCold],
            ..UserContext::default()
        };
        let reasons = safety_reasons(Verdict::Avoid, &[FoodTag::Cold], &context);
        assert!(!reasons.is_empty());
    }

    #[test]
    fn safe_verdict_has_no_alternatives() {
        let alternatives = suggest_alternatives(Verdict::Safe, &[], &UserContext::default());
        assert!(alternatives.is_empty());
    }

    #[test]
    fn avoid_verdict_always_offers_alternatives() {
        let alternatives =
            suggest_alternatives(Verdict::Avoid, &[FoodTag::Chewy], &UserContext::default());
        assert!(!alternatives.is_empty());
        assert!(alternatives.contains(&"Yogurt".to_string()));
    }

    #[test]
    fn soft_only_diet_gets_curated_lead_suggestion() {
        let context = UserContext {
            diet_restrictions: vec![DietRestriction::SoftOnly],
            ..UserContext::default()
        };
        let alternatives = suggest_alternatives(Verdict::Avoid, &[FoodTag::Chewy], &context);
        assert!(alternatives[0].contains("soft foods"));
        assert!(alternatives.len() > DEFAULT_ALTERNATIVES.len());
    }

    #[test]
    fn braces_hard_trigger_gets_curated_lead_suggestion() {
        let alternatives =
            suggest_alternatives(Verdict::Avoid, &[FoodTag::Hard], &braces_context());
        assert!(alternatives[0].contains("cooked vegetables"));
    }
}
