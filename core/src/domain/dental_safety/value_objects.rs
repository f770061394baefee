/// User-declared dietary constraint narrowing which tags trigger `avoid`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DietRestriction {
    SoftOnly,
    NoHard,
    NoSticky,
    NoChewy,
    NoHot,
    NoCold,
}

impl DietRestriction {
    /// Lenient parse. Unknown values map to `None` so forward-compatible
    /// context payloads are skipped rather than rejected.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "softonly" => Some(DietRestriction::SoftOnly),
            "nohard" => Some(DietRestriction::NoHard),
            "nosticky" => Some(DietRestriction::NoSticky),
            "nochewy" => Some(DietRestriction::NoChewy),
            "nohot" => Some(DietRestriction::NoHot),
            "nocold" => Some(DietRestriction::NoCold),
            _ => None,
        }
    }
}

/// Recent dental intervention that temporarily tightens the safety rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DentalProcedure {
    Extraction,
}

impl DentalProcedure {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "extraction" => Some(DentalProcedure::Extraction),
            _ => None,
        }
    }
}

/// Oral-health context supplied by the caller per request, never persisted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserContext {
    pub has_braces: bool,
    pub diet_restrictions: Vec<DietRestriction>,
    pub recent_procedures: Vec<DentalProcedure>,
    pub current_treatment: Option<String>,
}

impl UserContext {
    pub fn restricts(&self, restriction: DietRestriction) -> bool {
        self.diet_restrictions.contains(&restriction)
    }

    pub fn had_procedure(&self, procedure: DentalProcedure) -> bool {
        self.recent_procedures.contains(&procedure)
    }

    /// Whether the caller declared an ongoing treatment worth mentioning.
    pub fn in_treatment(&self) -> bool {
        self.current_treatment
            .as_deref()
            .is_some_and(|treatment| !treatment.is_empty() && treatment != "none")
    }
}
