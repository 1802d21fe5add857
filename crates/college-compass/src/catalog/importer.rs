use super::domain::{Institution, InstitutionId, InstitutionType, PlacementStats, Program};
use super::Catalog;
use serde::{Deserialize, Deserializer};
use std::collections::HashMap;
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub enum CatalogImportError {
    Io(std::io::Error),
    Json(serde_json::Error),
    Csv(csv::Error),
    UnsupportedFormat { path: PathBuf },
    Invalid { institution: String, reason: String },
}

impl std::fmt::Display for CatalogImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogImportError::Io(err) => write!(f, "failed to read catalog: {}", err),
            CatalogImportError::Json(err) => write!(f, "invalid catalog JSON: {}", err),
            CatalogImportError::Csv(err) => write!(f, "invalid catalog CSV data: {}", err),
            CatalogImportError::UnsupportedFormat { path } => write!(
                f,
                "unsupported catalog format for '{}' (expected .json or .csv)",
                path.display()
            ),
            CatalogImportError::Invalid {
                institution,
                reason,
            } => write!(f, "catalog entry '{}' rejected: {}", institution, reason),
        }
    }
}

impl std::error::Error for CatalogImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogImportError::Io(err) => Some(err),
            CatalogImportError::Json(err) => Some(err),
            CatalogImportError::Csv(err) => Some(err),
            CatalogImportError::UnsupportedFormat { .. } | CatalogImportError::Invalid { .. } => {
                None
            }
        }
    }
}

impl From<std::io::Error> for CatalogImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for CatalogImportError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

impl From<csv::Error> for CatalogImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

pub struct CatalogImporter;

impl CatalogImporter {
    /// Loads a catalog, choosing the parser from the file extension.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Catalog, CatalogImportError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("json") => Self::from_json_reader(std::fs::File::open(path)?),
            Some("csv") => Self::from_csv_reader(std::fs::File::open(path)?),
            _ => Err(CatalogImportError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }

    pub fn from_json_reader<R: Read>(reader: R) -> Result<Catalog, CatalogImportError> {
        let institutions: Vec<Institution> = serde_json::from_reader(reader)?;
        Catalog::new(institutions)
    }

    /// One row per program; institution columns repeat and rows group by `institution_id`.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Catalog, CatalogImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut institutions: Vec<Institution> = Vec::new();
        let mut positions: HashMap<String, usize> = HashMap::new();

        for row in csv_reader.deserialize::<CatalogRow>() {
            let row = row?;
            let program = row.program();

            match positions.get(&row.institution_id) {
                Some(&index) => institutions[index].courses.push(program),
                None => {
                    let mut institution = row.institution()?;
                    institution.courses.push(program);
                    positions.insert(row.institution_id.clone(), institutions.len());
                    institutions.push(institution);
                }
            }
        }

        Catalog::new(institutions)
    }
}

#[derive(Debug, Deserialize)]
struct CatalogRow {
    institution_id: String,
    name: String,
    short_name: String,
    #[serde(rename = "type")]
    institution_type: String,
    city: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    state: Option<String>,
    established: i32,
    rating: f64,
    ranking: u32,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    affiliation: Option<String>,
    average_package: f64,
    highest_package: f64,
    placement_rate: f64,
    #[serde(default)]
    top_recruiters: String,
    #[serde(default)]
    accreditations: String,
    #[serde(default)]
    facilities: String,
    program_id: String,
    program_name: String,
    duration: String,
    fees: f64,
    cutoff_marks: f64,
    seats: u32,
    #[serde(default)]
    specializations: String,
}

impl CatalogRow {
    fn institution(&self) -> Result<Institution, CatalogImportError> {
        let institution_type = InstitutionType::parse(&self.institution_type).ok_or_else(|| {
            CatalogImportError::Invalid {
                institution: self.institution_id.clone(),
                reason: format!("unknown institution type '{}'", self.institution_type),
            }
        })?;

        Ok(Institution {
            id: InstitutionId(self.institution_id.clone()),
            name: self.name.clone(),
            short_name: self.short_name.clone(),
            institution_type,
            city: self.city.clone(),
            state: self
                .state
                .clone()
                .unwrap_or_else(|| "Karnataka".to_string()),
            established: self.established,
            rating: self.rating,
            ranking: self.ranking,
            affiliation: self.affiliation.clone(),
            description: None,
            website: None,
            image_url: None,
            courses: Vec::new(),
            placement: PlacementStats {
                average_package: self.average_package,
                highest_package: self.highest_package,
                placement_rate: self.placement_rate,
                top_recruiters: split_list(&self.top_recruiters),
            },
            accreditations: split_list(&self.accreditations),
            facilities: split_list(&self.facilities),
        })
    }

    fn program(&self) -> Program {
        Program {
            id: self.program_id.clone(),
            name: self.program_name.clone(),
            duration: self.duration.clone(),
            fees: self.fees,
            cutoff_marks: self.cutoff_marks,
            seats: self.seats,
            specializations: split_list(&self.specializations),
        }
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(';')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "institution_id,name,short_name,type,city,state,established,rating,ranking,affiliation,average_package,highest_package,placement_rate,top_recruiters,accreditations,facilities,program_id,program_name,duration,fees,cutoff_marks,seats,specializations\n";

    #[test]
    fn csv_rows_group_into_institutions_in_first_seen_order() {
        let csv = format!(
            "{HEADER}\
rvce,RV College of Engineering,RVCE,Private,\"Mysore Road, Bangalore\",,1963,4.5,15,VTU,12,45,92,Infosys; Amazon;Oracle,NAAC A+;NBA,Library,cs,B.Tech Computer Science,4 years,250000,88,180,\n\
iisc,Indian Institute of Science,IISc,Government,Bangalore,Karnataka,1909,4.9,1,,28,80,98,Google,UGC,,bsc,B.Sc Research,4 years,20000,95,120,Physics;Biology\n\
rvce,RV College of Engineering,RVCE,Private,\"Mysore Road, Bangalore\",,1963,4.5,15,VTU,12,45,92,Infosys; Amazon;Oracle,NAAC A+;NBA,Library,ece,B.Tech ECE,4 years,230000,82,150,\n"
        );

        let catalog = CatalogImporter::from_csv_reader(csv.as_bytes()).expect("csv imports");
        let institutions = catalog.institutions();

        assert_eq!(institutions.len(), 2);
        assert_eq!(institutions[0].id.0, "rvce");
        assert_eq!(institutions[0].courses.len(), 2);
        assert_eq!(institutions[0].courses[1].id, "ece");
        assert_eq!(institutions[0].state, "Karnataka");
        assert_eq!(
            institutions[0].placement.top_recruiters,
            vec!["Infosys", "Amazon", "Oracle"]
        );
        assert_eq!(institutions[1].affiliation, None);
        assert_eq!(
            institutions[1].courses[0].specializations,
            vec!["Physics", "Biology"]
        );
    }

    #[test]
    fn csv_rejects_unknown_institution_type() {
        let csv = format!(
            "{HEADER}x,X College,XC,Autonomous,Mysuru,,1990,3.9,80,,4,9,70,,,,p1,BCA,3 years,90000,60,60,\n"
        );

        let err = CatalogImporter::from_csv_reader(csv.as_bytes()).expect_err("type rejected");
        assert!(matches!(err, CatalogImportError::Invalid { ref institution, .. } if institution == "x"));
    }

    #[test]
    fn csv_rejects_rows_that_would_push_scores_out_of_range() {
        let cases = [
            ("neg", "-500,9,70,,,,p1,BCA,3 years,90000,60,60,", "average package"),
            ("nan", "NaN,9,70,,,,p1,BCA,3 years,90000,60,60,", "average package"),
            ("free", "4,9,70,,,,p1,BCA,3 years,0,60,60,", "fee"),
            ("hard", "4,9,70,,,,p1,BCA,3 years,90000,120,60,", "cutoff"),
        ];

        for (id, tail, expected) in cases {
            let csv =
                format!("{HEADER}{id},X College,XC,Private,Mysuru,,1990,3.9,80,,{tail}\n");
            let err = CatalogImporter::from_csv_reader(csv.as_bytes()).expect_err("row rejected");
            match err {
                CatalogImportError::Invalid {
                    institution,
                    reason,
                } => {
                    assert_eq!(institution, id);
                    assert!(reason.contains(expected), "{id}: {reason}");
                }
                other => panic!("{id}: unexpected error {other:?}"),
            }
        }
    }

    #[test]
    fn from_path_rejects_unknown_extensions() {
        let err = CatalogImporter::from_path("catalog.xlsx").expect_err("format rejected");
        assert!(matches!(err, CatalogImportError::UnsupportedFormat { .. }));
    }

    #[test]
    fn json_reader_surfaces_parse_errors() {
        let err = CatalogImporter::from_json_reader("[{\"id\": 3}]".as_bytes())
            .expect_err("malformed json");
        assert!(matches!(err, CatalogImportError::Json(_)));
    }
}
