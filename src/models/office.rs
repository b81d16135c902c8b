use serde::{Deserialize, Serialize};

/// An office space as served by the detail endpoint. Read-only once
/// loaded; the page never writes any of these fields back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Office {
    pub id: i64,
    pub price: i64,
    /// Rental duration in days.
    pub duration: i64,
    pub name: String,
    pub slug: String,
    pub thumbnail: String,
    pub about: String,
    pub address: String,
    #[serde(default)]
    pub photos: Vec<OfficePhoto>,
    #[serde(default)]
    pub benefits: Vec<OfficeBenefit>,
    pub city: Option<City>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OfficePhoto {
    pub id: i64,
    pub photo: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OfficeBenefit {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct City {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub photo: String,
    // The API camel-cases the relation fields on this one model.
    #[serde(rename = "officeSpaces_count", default)]
    pub office_spaces_count: i64,
    #[serde(rename = "officeSpaces", default)]
    pub office_spaces: Vec<Office>,
}
