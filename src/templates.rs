// Bring in Askama templating
use askama::Template;

// Define a template struct that references index.html
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub cards: String,             // Pre-rendered recipe cards, in order
    pub stylesheet: &'static str,  // Path to CSS file
}

impl IndexTemplate {
    // Helper to create an IndexTemplate from rendered card markup
    pub fn new(cards: String) -> Self {
        Self {
            cards,
            stylesheet: "/recipes.css",
        }
    }
}
