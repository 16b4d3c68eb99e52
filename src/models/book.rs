use serde::{Deserialize, Serialize};

/// One catalog entry. Field names follow the upstream catalog data
/// format (camelCase keys, e.g. `coverImage`, `publishedYear`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookRecord {
    pub id: u32,
    pub title: String,
    pub author: String,
    pub category: String,
    pub description: String,
    pub cover_image: String,
    pub price: f64,
    pub stock: u32,
    pub rating: f64,
    pub publisher: String,
    pub published_year: u32,
    pub pages: u32,
    pub language: String,
    pub isbn: String,
}
