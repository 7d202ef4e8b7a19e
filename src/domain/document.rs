//! Clinical document shapes
//!
//! Phenopacket-style documents carried inside submission batches. Decoding
//! is permissive (unknown fields ignored, missing fields defaulted), so the
//! classifier pairs each shape with a signal predicate that tells a real
//! document apart from arbitrary JSON that happens to decode.
//!
//! Curator reads these documents solely as carriers of file-reference
//! metadata; the clinical payload fields are kept opaque.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// A file reference carried by a document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DocumentFile {
    /// Reference to the object, typically a `file://` URI or a bare name
    pub uri: String,
    /// Maps subject identifiers to their identifiers inside the file
    pub individual_to_file_identifiers: BTreeMap<String, String>,
    /// Free-form attributes (genome assembly, file format, ...)
    pub file_attributes: BTreeMap<String, String>,
}

/// The subject of an individual document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Subject {
    pub id: String,
    pub alternate_ids: Vec<String>,
    pub sex: String,
    pub karyotypic_sex: String,
    pub time_at_last_encounter: Option<Value>,
    pub vital_status: Option<Value>,
}

/// A biological sample attached to an individual document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Biosample {
    pub id: String,
    pub individual_id: String,
    pub sample_type: Option<Value>,
    pub files: Vec<DocumentFile>,
}

/// Pedigree block of a family document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Pedigree {
    pub persons: Vec<Value>,
}

/// Single-subject clinical document
///
/// The signal fields are the ones that only a genuine individual document
/// populates; `{}` and unrelated JSON objects decode but carry none of them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IndividualDocument {
    pub id: String,
    pub subject: Option<Subject>,
    pub phenotypic_features: Vec<Value>,
    pub measurements: Vec<Value>,
    pub biosamples: Vec<Biosample>,
    pub interpretations: Vec<Value>,
    pub diseases: Vec<Value>,
    pub medical_actions: Vec<Value>,
    pub files: Vec<DocumentFile>,
    pub meta_data: Option<Value>,
}

impl IndividualDocument {
    /// True when at least one signal field is populated
    pub fn has_signal(&self) -> bool {
        self.subject.is_some()
            || !self.phenotypic_features.is_empty()
            || !self.measurements.is_empty()
            || !self.biosamples.is_empty()
            || !self.interpretations.is_empty()
            || !self.diseases.is_empty()
            || !self.medical_actions.is_empty()
    }

    /// Every file reference this document depends on: its top-level files
    /// plus the files of each biosample, in document order.
    pub fn file_uris(&self) -> Vec<&str> {
        let mut uris: Vec<&str> = self.files.iter().map(|f| f.uri.as_str()).collect();
        for biosample in &self.biosamples {
            uris.extend(biosample.files.iter().map(|f| f.uri.as_str()));
        }
        uris
    }
}

/// Family clinical document: a proband plus relatives and a pedigree
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FamilyDocument {
    pub id: String,
    pub proband: Option<IndividualDocument>,
    pub relatives: Vec<IndividualDocument>,
    pub pedigree: Option<Pedigree>,
    pub files: Vec<DocumentFile>,
    pub meta_data: Option<Value>,
}

impl FamilyDocument {
    /// True when at least one signal field is populated. A present but empty
    /// pedigree block still counts as a signal.
    pub fn has_signal(&self) -> bool {
        self.proband.is_some() || !self.relatives.is_empty() || self.pedigree.is_some()
    }

    /// Every file reference this document depends on: its own top-level
    /// files plus each relative's references (each relative is an embedded
    /// individual and contributes its files and biosample files). The
    /// proband's files are not gathered.
    pub fn file_uris(&self) -> Vec<&str> {
        let mut uris: Vec<&str> = self.files.iter().map(|f| f.uri.as_str()).collect();
        for relative in &self.relatives {
            uris.extend(relative.file_uris());
        }
        uris
    }
}

/// Cohort clinical document: a described group of members
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CohortDocument {
    pub id: String,
    pub description: String,
    pub members: Vec<IndividualDocument>,
    pub files: Vec<DocumentFile>,
    pub meta_data: Option<Value>,
}

impl CohortDocument {
    /// True when at least one signal field is populated
    pub fn has_signal(&self) -> bool {
        !self.description.is_empty() || !self.members.is_empty()
    }
}

/// A resolved object's content recognized as one of the document shapes
///
/// Classification is a closed set: content that decodes as none of the
/// shapes (or is not JSON at all) is unrecognized and never an error.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedDocument {
    Individual(IndividualDocument),
    Family(FamilyDocument),
    Cohort(CohortDocument),
}

impl ParsedDocument {
    /// Short lowercase tag for log fields and error messages
    pub fn kind(&self) -> &'static str {
        match self {
            ParsedDocument::Individual(_) => "individual",
            ParsedDocument::Family(_) => "family",
            ParsedDocument::Cohort(_) => "cohort",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_individual_has_no_signal() {
        let doc = IndividualDocument::default();
        assert!(!doc.has_signal());
    }

    #[test]
    fn test_subject_is_a_signal() {
        let doc: IndividualDocument =
            serde_json::from_value(json!({"subject": {"id": "P1"}})).unwrap();
        assert!(doc.has_signal());
        assert_eq!(doc.subject.unwrap().id, "P1");
    }

    #[test]
    fn test_disease_list_is_a_signal() {
        let doc: IndividualDocument =
            serde_json::from_value(json!({"diseases": [{"term": {"id": "OMIM:101600"}}]}))
                .unwrap();
        assert!(doc.has_signal());
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let doc: IndividualDocument = serde_json::from_value(json!({
            "subject": {"id": "P1"},
            "somethingNovel": {"nested": true}
        }))
        .unwrap();
        assert!(doc.has_signal());
    }

    #[test]
    fn test_individual_file_uris_include_biosample_files() {
        let doc: IndividualDocument = serde_json::from_value(json!({
            "subject": {"id": "P1"},
            "files": [{"uri": "file:///reads.bam"}],
            "biosamples": [
                {"id": "B1", "files": [{"uri": "file:///variants.vcf"}]}
            ]
        }))
        .unwrap();

        assert_eq!(
            doc.file_uris(),
            vec!["file:///reads.bam", "file:///variants.vcf"]
        );
    }

    #[test]
    fn test_family_signal_fields() {
        assert!(!FamilyDocument::default().has_signal());

        let with_pedigree: FamilyDocument =
            serde_json::from_value(json!({"pedigree": {}})).unwrap();
        assert!(with_pedigree.has_signal());

        let with_relatives: FamilyDocument =
            serde_json::from_value(json!({"relatives": [{"subject": {"id": "P2"}}]})).unwrap();
        assert!(with_relatives.has_signal());
    }

    #[test]
    fn test_family_gathers_relative_files_but_not_proband_files() {
        let doc: FamilyDocument = serde_json::from_value(json!({
            "id": "FAM1",
            "proband": {
                "subject": {"id": "P1"},
                "files": [{"uri": "file:///proband.vcf"}]
            },
            "relatives": [{
                "subject": {"id": "P2"},
                "files": [{"uri": "file:///mother.vcf"}],
                "biosamples": [
                    {"id": "B1", "files": [{"uri": "file:///mother-sample.bam"}]}
                ]
            }],
            "files": [{"uri": "file:///pedigree.ped"}]
        }))
        .unwrap();

        assert_eq!(
            doc.file_uris(),
            vec![
                "file:///pedigree.ped",
                "file:///mother.vcf",
                "file:///mother-sample.bam"
            ]
        );
    }

    #[test]
    fn test_cohort_signal_fields() {
        assert!(!CohortDocument::default().has_signal());

        let with_description: CohortDocument =
            serde_json::from_value(json!({"description": "controls"})).unwrap();
        assert!(with_description.has_signal());

        let with_members: CohortDocument =
            serde_json::from_value(json!({"members": [{"subject": {"id": "P3"}}]})).unwrap();
        assert!(with_members.has_signal());
    }

    #[test]
    fn test_parsed_document_kind() {
        let doc = ParsedDocument::Individual(IndividualDocument::default());
        assert_eq!(doc.kind(), "individual");

        let doc = ParsedDocument::Family(FamilyDocument::default());
        assert_eq!(doc.kind(), "family");

        let doc = ParsedDocument::Cohort(CohortDocument::default());
        assert_eq!(doc.kind(), "cohort");
    }

    #[test]
    fn test_camel_case_field_names() {
        let doc: IndividualDocument = serde_json::from_value(json!({
            "phenotypicFeatures": [{"type": {"id": "HP:0001250"}}],
            "medicalActions": [{"procedure": {}}]
        }))
        .unwrap();

        assert_eq!(doc.phenotypic_features.len(), 1);
        assert_eq!(doc.medical_actions.len(), 1);
    }
}
