//! Schema.org Dataset output types.
//!
//! Field order matters: serde serializes struct fields in declaration
//! order, and the published file keeps the JSON-LD markers first.

use serde::{Deserialize, Serialize};

pub const SCHEMA_CONTEXT: &str = "http://schema.org";
pub const DATASET_TYPE: &str = "Dataset";
pub const DOI_BASE: &str = "https://doi.org/";
pub const DATASET_LICENSE: &str = "https://creativecommons.org/licenses/by/4.0/";
pub const PUBLISHER_NAME: &str = "Forschungszentrum Juelich GmbH, IBG-4 Bioinformatics, Wilhelm-Johnen-Str., D-52428 Juelich, Germany";

/// One transformed genome record, serialized as a Schema.org `Dataset`
/// JSON-LD object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(rename = "@context")]
    pub context: String,
    #[serde(rename = "@type")]
    pub dataset_type: String,
    #[serde(rename = "@id")]
    pub id: String,
    pub identifier: String,
    pub name: String,
    pub description: String,
    #[serde(rename = "datePublished")]
    pub date_published: String,
    pub keywords: String,
    pub license: String,
    pub citation: String,
    pub publisher: Author,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<Vec<Author>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator: Option<Vec<Author>>,
}

/// A contributing entity, tagged with its Schema.org type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "@type")]
pub enum Author {
    Person {
        name: String,
        #[serde(rename = "familyName")]
        family_name: String,
        #[serde(
            rename = "givenName",
            default,
            skip_serializing_if = "Option::is_none"
        )]
        given_name: Option<String>,
    },
    Organization {
        name: String,
    },
}

pub fn publisher() -> Author {
    Author::Organization {
        name: PUBLISHER_NAME.to_string(),
    }
}
