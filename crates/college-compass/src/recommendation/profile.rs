use crate::catalog::InstitutionType;
use serde::{Deserialize, Serialize};

/// Which criterion the applicant asked to emphasise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    #[default]
    Balanced,
    Placement,
    Rating,
}

impl Priority {
    /// Collapses the two form checkboxes into one priority. Placement wins when both are set.
    pub const fn from_flags(prioritize_placement: bool, prioritize_rating: bool) -> Self {
        if prioritize_placement {
            Priority::Placement
        } else if prioritize_rating {
            Priority::Rating
        } else {
            Priority::Balanced
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Priority::Balanced => "balanced",
            Priority::Placement => "placement",
            Priority::Rating => "rating",
        }
    }
}

/// Institution type filter requested by the applicant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InstitutionTypePreference {
    #[default]
    Any,
    Government,
    Private,
    Deemed,
}

impl InstitutionTypePreference {
    pub fn admits(self, institution_type: InstitutionType) -> bool {
        match self {
            InstitutionTypePreference::Any => true,
            InstitutionTypePreference::Government => {
                institution_type == InstitutionType::Government
            }
            InstitutionTypePreference::Private => institution_type == InstitutionType::Private,
            InstitutionTypePreference::Deemed => institution_type == InstitutionType::Deemed,
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        if value.trim().eq_ignore_ascii_case("any") {
            return Some(Self::Any);
        }
        InstitutionType::parse(value).map(Self::from)
    }
}

impl From<InstitutionType> for InstitutionTypePreference {
    fn from(value: InstitutionType) -> Self {
        match value {
            InstitutionType::Government => Self::Government,
            InstitutionType::Private => Self::Private,
            InstitutionType::Deemed => Self::Deemed,
        }
    }
}

/// What the applicant told us about themselves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicantProfile {
    /// Percentage, 0-100.
    pub marks: f64,
    pub preferred_program: String,
    /// Annual fee budget in rupees.
    pub budget_max: f64,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub preferred_institution_type: InstitutionTypePreference,
}
