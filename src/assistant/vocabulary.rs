//! Synonym tables mapping everyday phrasing to canonical medical terms.
//!
//! Both tables support an exact lookup and, failing that, a substring
//! scan over every alias. The substring fallback keeps the longest
//! contained alias (ties broken by table order), so the winner is stable
//! however the tables are rearranged. Unmapped input passes through
//! unchanged; canonicalization never fails.

/// Condition aliases → canonical condition names.
const CONDITION_ALIASES: &[(&str, &str)] = &[
    ("headache", "headache"),
    ("head ache", "headache"),
    ("migraine", "migraine"),
    ("cold", "common cold"),
    ("flu", "influenza"),
    ("fever", "fever"),
    ("high fever", "fever"),
    ("cough", "cough"),
    ("sore throat", "sore throat"),
    ("throat pain", "sore throat"),
    ("stomach ache", "stomach pain"),
    ("stomach pain", "stomach pain"),
    ("nausea", "nausea"),
    ("vomiting", "vomiting"),
    ("diarrhea", "diarrhea"),
    ("constipation", "constipation"),
    ("allergy", "allergy"),
    ("rash", "skin rash"),
    ("skin rash", "skin rash"),
    ("acne", "acne"),
    ("diabetes", "diabetes"),
    ("high bp", "hypertension"),
    ("high blood pressure", "hypertension"),
    ("hypertension", "hypertension"),
    ("asthma", "asthma"),
    ("arthritis", "arthritis"),
    ("joint pain", "joint pain"),
    ("back pain", "back pain"),
    ("depression", "depression"),
    ("anxiety", "anxiety"),
    ("insomnia", "insomnia"),
    ("sleep problems", "insomnia"),
    ("can't sleep", "insomnia"),
];

/// Specialty aliases → canonical clinical specialty names.
const SPECIALTY_ALIASES: &[(&str, &str)] = &[
    ("heart", "cardiology"),
    ("cardiac", "cardiology"),
    ("cardio", "cardiology"),
    ("cardiology", "cardiology"),
    ("skin", "dermatology"),
    ("dermatology", "dermatology"),
    ("brain", "neurology"),
    ("neuro", "neurology"),
    ("neurology", "neurology"),
    ("bones", "orthopedics"),
    ("joints", "orthopedics"),
    ("orthopedic", "orthopedics"),
    ("orthopedics", "orthopedics"),
    ("eye", "ophthalmology"),
    ("eyes", "ophthalmology"),
    ("ophthalmology", "ophthalmology"),
    ("ear", "ent"),
    ("nose", "ent"),
    ("throat", "ent"),
    ("ent", "ent"),
    ("children", "pediatrics"),
    ("child", "pediatrics"),
    ("pediatric", "pediatrics"),
    ("pediatrics", "pediatrics"),
    ("women", "gynecology"),
    ("gynecology", "gynecology"),
    ("pregnancy", "obstetrics"),
    ("obstetrics", "obstetrics"),
    ("kidney", "nephrology"),
    ("nephrology", "nephrology"),
    ("surgery", "general surgery"),
    ("teeth", "dentistry"),
    ("tooth", "dentistry"),
    ("dental", "dentistry"),
    ("dentistry", "dentistry"),
    ("mental", "psychiatry"),
    ("psychiatry", "psychiatry"),
    ("psychology", "psychology"),
    ("diabetes", "endocrinology"),
    ("endocrine", "endocrinology"),
    ("endocrinology", "endocrinology"),
    ("lungs", "pulmonology"),
    ("respiratory", "pulmonology"),
    ("pulmonology", "pulmonology"),
    ("stomach", "gastroenterology"),
    ("digestive", "gastroenterology"),
    ("gastro", "gastroenterology"),
    ("gastroenterology", "gastroenterology"),
];

/// One alias table; immutable after construction.
#[derive(Debug, Clone, Copy)]
struct SynonymTable {
    entries: &'static [(&'static str, &'static str)],
}

impl SynonymTable {
    fn canonicalize(&self, text: &str) -> String {
        let needle = text.trim().to_lowercase();

        if let Some(&(_, canonical)) = self.entries.iter().find(|&&(alias, _)| alias == needle) {
            return canonical.to_string();
        }

        // Longest contained alias wins; on equal length the earlier entry
        // is kept.
        let mut best: Option<(&str, &str)> = None;
        for &(alias, canonical) in self.entries {
            if needle.contains(alias) {
                match best {
                    Some((kept, _)) if alias.len() <= kept.len() => {}
                    _ => best = Some((alias, canonical)),
                }
            }
        }

        match best {
            Some((_, canonical)) => canonical.to_string(),
            None => needle,
        }
    }
}

/// Both vocabulary tables, built once and shared read-only by the
/// responder.
#[derive(Debug, Clone, Copy)]
pub struct Vocabulary {
    conditions: SynonymTable,
    specialties: SynonymTable,
}

impl Vocabulary {
    pub fn builtin() -> Self {
        Self {
            conditions: SynonymTable {
                entries: CONDITION_ALIASES,
            },
            specialties: SynonymTable {
                entries: SPECIALTY_ALIASES,
            },
        }
    }

    /// Map a free-text condition mention to its canonical name.
    pub fn canonical_condition(&self, text: &str) -> String {
        self.conditions.canonicalize(text)
    }

    /// Map a free-text specialty mention to its canonical name.
    pub fn canonical_specialty(&self, text: &str) -> String {
        self.specialties.canonicalize(text)
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn condition_exact_match() {
        let vocab = Vocabulary::builtin();
        assert_eq!(vocab.canonical_condition("flu"), "influenza");
        assert_eq!(vocab.canonical_condition("high bp"), "hypertension");
    }

    #[test]
    fn condition_trims_and_lowercases() {
        let vocab = Vocabulary::builtin();
        assert_eq!(vocab.canonical_condition("  Fever  "), "fever");
        assert_eq!(vocab.canonical_condition("Can't Sleep"), "insomnia");
    }

    #[test]
    fn condition_substring_match() {
        let vocab = Vocabulary::builtin();
        assert_eq!(vocab.canonical_condition("a headache"), "headache");
        assert_eq!(
            vocab.canonical_condition("cold, allergic to penicillin, aspirin"),
            "common cold"
        );
    }

    #[test]
    fn condition_longest_contained_alias_wins() {
        let vocab = Vocabulary::builtin();
        // Contains both "throat pain" (11) and "fever" (5); the longer
        // alias decides the canonical term.
        assert_eq!(
            vocab.canonical_condition("throat pain and fever"),
            "sore throat"
        );
    }

    #[test]
    fn condition_equal_length_tie_keeps_table_order() {
        let vocab = Vocabulary::builtin();
        // "fever" and "cough" are both contained and the same length;
        // "fever" appears first in the table.
        assert_eq!(vocab.canonical_condition("fever and cough"), "fever");
    }

    #[test]
    fn condition_unmapped_passes_through() {
        let vocab = Vocabulary::builtin();
        assert_eq!(vocab.canonical_condition("tinnitus"), "tinnitus");
        assert_eq!(vocab.canonical_condition("  Tinnitus "), "tinnitus");
    }

    #[test]
    fn condition_canonicalization_idempotent() {
        let vocab = Vocabulary::builtin();
        for (alias, _) in CONDITION_ALIASES {
            let once = vocab.canonical_condition(alias);
            assert_eq!(vocab.canonical_condition(&once), once, "alias {alias}");
        }
    }

    #[test]
    fn specialty_exact_match() {
        let vocab = Vocabulary::builtin();
        assert_eq!(vocab.canonical_specialty("heart"), "cardiology");
        assert_eq!(vocab.canonical_specialty("teeth"), "dentistry");
    }

    #[test]
    fn specialty_substring_match() {
        let vocab = Vocabulary::builtin();
        assert_eq!(vocab.canonical_specialty("the heart area"), "cardiology");
        assert_eq!(vocab.canonical_specialty("problems with lungs"), "pulmonology");
    }

    #[test]
    fn specialty_unmapped_passes_through() {
        let vocab = Vocabulary::builtin();
        assert_eq!(vocab.canonical_specialty("oncology"), "oncology");
    }

    #[test]
    fn specialty_canonicalization_idempotent() {
        let vocab = Vocabulary::builtin();
        for (alias, _) in SPECIALTY_ALIASES {
            let once = vocab.canonical_specialty(alias);
            assert_eq!(vocab.canonical_specialty(&once), once, "alias {alias}");
        }
    }
}
