use serde::{Deserialize, Serialize};

/// Stable identifier for an institution within a catalog snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InstitutionId(pub String);

impl std::fmt::Display for InstitutionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Governance category of an institution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InstitutionType {
    Government,
    Private,
    Deemed,
}

impl InstitutionType {
    pub const fn label(self) -> &'static str {
        match self {
            InstitutionType::Government => "Government",
            InstitutionType::Private => "Private",
            InstitutionType::Deemed => "Deemed",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "government" | "govt" => Some(Self::Government),
            "private" => Some(Self::Private),
            "deemed" => Some(Self::Deemed),
            _ => None,
        }
    }
}

/// A degree program offered by an institution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Program {
    pub id: String,
    pub name: String,
    pub duration: String,
    /// Annual fee in rupees.
    pub fees: f64,
    pub cutoff_marks: f64,
    pub seats: u32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub specializations: Vec<String>,
}

/// Placement outcomes. Packages are expressed in lakhs per annum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacementStats {
    pub average_package: f64,
    pub highest_package: f64,
    pub placement_rate: f64,
    #[serde(default)]
    pub top_recruiters: Vec<String>,
}

fn default_state() -> String {
    "Karnataka".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Institution {
    pub id: InstitutionId,
    pub name: String,
    pub short_name: String,
    #[serde(rename = "type")]
    pub institution_type: InstitutionType,
    pub city: String,
    #[serde(default = "default_state")]
    pub state: String,
    pub established: i32,
    pub rating: f64,
    pub ranking: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub affiliation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub courses: Vec<Program>,
    pub placement: PlacementStats,
    #[serde(default, rename = "approvedBy")]
    pub accreditations: Vec<String>,
    #[serde(default)]
    pub facilities: Vec<String>,
}

impl Institution {
    /// Cheapest and most expensive annual program fee.
    pub fn fee_range(&self) -> Option<(f64, f64)> {
        self.courses.iter().map(|program| program.fees).fold(None, |range, fee| {
            Some(match range {
                None => (fee, fee),
                Some((low, high)) => (low.min(fee), high.max(fee)),
            })
        })
    }

    pub fn min_fee(&self) -> Option<f64> {
        self.fee_range().map(|(low, _)| low)
    }

    pub fn offers_program_like(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.courses
            .iter()
            .any(|program| program.name.to_lowercase().contains(&needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn program(id: &str, fees: f64) -> Program {
        Program {
            id: id.to_string(),
            name: format!("B.Tech {id}"),
            duration: "4 years".to_string(),
            fees,
            cutoff_marks: 80.0,
            seats: 60,
            specializations: Vec::new(),
        }
    }

    #[test]
    fn fee_range_spans_all_programs() {
        let json = r#"{
            "id": "bmsce", "name": "BMS College of Engineering", "shortName": "BMSCE",
            "type": "Private", "city": "Basavanagudi, Bangalore", "established": 1946,
            "rating": 4.3, "ranking": 28, "courses": [],
            "placement": { "averagePackage": 8, "highestPackage": 35, "placementRate": 85 },
            "approvedBy": ["NAAC A"]
        }"#;
        let mut institution: Institution = serde_json::from_str(json).expect("parses");
        assert_eq!(institution.state, "Karnataka");
        assert_eq!(institution.accreditations, vec!["NAAC A".to_string()]);
        assert_eq!(institution.fee_range(), None);

        institution.courses = vec![program("cs", 180000.0), program("ece", 160000.0)];
        assert_eq!(institution.fee_range(), Some((160000.0, 180000.0)));
        assert_eq!(institution.min_fee(), Some(160000.0));
        assert!(institution.offers_program_like("b.tech ECE"));
        assert!(!institution.offers_program_like("mechanical"));
    }

    #[test]
    fn parses_type_labels_loosely() {
        assert_eq!(InstitutionType::parse(" govt "), Some(InstitutionType::Government));
        assert_eq!(InstitutionType::parse("Deemed"), Some(InstitutionType::Deemed));
        assert_eq!(InstitutionType::parse("autonomous"), None);
        assert_eq!(InstitutionType::Private.label(), "Private");
    }
}
