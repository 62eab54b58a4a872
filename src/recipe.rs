// recipe.rs

use serde::{Deserialize, Serialize};

/// Core recipe model: one card's worth of data. Field names match the
/// persisted JSON and the form field names exactly, so the struct doubles
/// as the form payload.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Recipe {
    #[serde(rename = "imgSrc")]
    pub img_src: String,
    #[serde(rename = "imgAlt")]
    pub img_alt: String,
    #[serde(rename = "titleLnk")]
    pub title_lnk: String,
    #[serde(rename = "titleTxt")]
    pub title_txt: String,
    pub organization: String,
    pub rating: String,
    #[serde(rename = "numRatings")]
    pub num_ratings: String,
    #[serde(rename = "lengthTime")]
    pub length_time: String,
    pub ingredients: String,
}

impl Recipe {
    /// Star-icon file name for this recipe's rating. The icon directory
    /// holds one file per integer rating, named `{rating}-star.svg`; the
    /// rating is not validated, so an odd value yields a file name that
    /// simply will not resolve.
    pub fn star_icon(&self) -> String {
        format!("{}-star.svg", self.rating)
    }
}

/// Fixture shared by the unit tests in this crate.
#[cfg(test)]
pub fn sample_recipe() -> Recipe {
    Recipe {
        img_src: "https://example.com/pasta.jpg".to_string(),
        img_alt: "A bowl of pasta".to_string(),
        title_lnk: "https://example.com/pasta".to_string(),
        title_txt: "Weeknight Pasta".to_string(),
        organization: "Example Kitchen".to_string(),
        rating: "4".to_string(),
        num_ratings: "212".to_string(),
        length_time: "35 min".to_string(),
        ingredients: "pasta, garlic, olive oil".to_string(),
    }
}
