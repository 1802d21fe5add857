/// Programs must score strictly above this to count as a match at all.
pub const MATCH_THRESHOLD: f64 = 30.0;

/// Score awarded when one name contains the other.
pub const FULL_MATCH_SCORE: f64 = 100.0;

/// Ceiling for keyword-overlap matches, kept below [`FULL_MATCH_SCORE`].
pub const PARTIAL_MATCH_CEILING: f64 = 80.0;

/// Similarity between an offered program and the applicant's preferred program, 0-100.
pub trait CourseMatcher: Send + Sync {
    fn score(&self, program_name: &str, preferred_program: &str) -> f64;

    fn is_match(&self, program_name: &str, preferred_program: &str) -> bool {
        self.score(program_name, preferred_program) > MATCH_THRESHOLD
    }
}

/// Case-insensitive containment check with a keyword-overlap fallback.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordCourseMatcher;

impl CourseMatcher for KeywordCourseMatcher {
    fn score(&self, program_name: &str, preferred_program: &str) -> f64 {
        let program = program_name.to_lowercase();
        let preferred = preferred_program.trim().to_lowercase();

        // A blank preference carries no signal; containment would otherwise match everything.
        if preferred.is_empty() {
            return 0.0;
        }

        if program.contains(&preferred) || preferred.contains(&program) {
            return FULL_MATCH_SCORE;
        }

        let keywords: Vec<&str> = preferred.split_whitespace().collect();
        let matching = keywords
            .iter()
            .filter(|keyword| program.contains(*keyword))
            .count();

        matching as f64 / keywords.len() as f64 * PARTIAL_MATCH_CEILING
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn containment_either_way_is_a_full_match() {
        let matcher = KeywordCourseMatcher;
        assert_eq!(
            matcher.score("B.Tech Computer Science", "Computer Science"),
            100.0
        );
        assert_eq!(matcher.score("B.Tech ECE", "b.tech ece (honours)"), 100.0);
    }

    #[test]
    fn keyword_overlap_scales_to_eighty() {
        let matcher = KeywordCourseMatcher;
        // "computer" matches, "engineering" does not.
        assert_eq!(
            matcher.score("B.Tech Computer Science", "Computer Engineering"),
            40.0
        );
        let partial = matcher.score("B.Tech Information Science", "Data Science Engineering");
        assert!((partial - 80.0 / 3.0).abs() < 1e-9, "got {partial}");
        assert_eq!(matcher.score("B.Sc Research", "Mechanical Engineering"), 0.0);
    }

    #[test]
    fn threshold_is_exclusive() {
        let matcher = KeywordCourseMatcher;
        assert!(matcher.is_match("B.Tech Computer Science", "Computer Engineering"));
        assert!(!matcher.is_match("B.Tech Information Science", "Data Science Engineering"));
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        let matcher = KeywordCourseMatcher;
        assert_eq!(
            matcher.score("B.Tech Computer Science", "Computer Science "),
            100.0
        );
        assert_eq!(
            matcher.score("B.Tech Computer Science", "  computer   engineering "),
            40.0
        );
    }

    #[test]
    fn blank_preference_matches_nothing() {
        let matcher = KeywordCourseMatcher;
        assert_eq!(matcher.score("B.Tech ECE", ""), 0.0);
        assert_eq!(matcher.score("B.Tech ECE", "   "), 0.0);
    }
}
