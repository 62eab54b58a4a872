// card.rs

use askama::Template;

use crate::recipe::Recipe;

/// One recipe card. Renders as a `<recipe-card>` element wrapping a
/// declarative shadow root, so the card's stylesheet and markup stay
/// isolated from the surrounding page in both directions. The only
/// contractual surface is the `data` property; everything inside the
/// shadow root is free to change.
#[derive(Template)]
#[template(path = "card.html")]
pub struct RecipeCard {
    data: Option<Recipe>,
}

impl RecipeCard {
    /// A fresh card with no data: the content container renders empty.
    pub fn new() -> Self {
        Self { data: None }
    }

    /// Assigns the card's data. Assigning an absent value is a no-op and
    /// leaves any previous content in place, matching the rendering
    /// contract: a card either shows a whole record or nothing.
    pub fn set_data(&mut self, data: Option<Recipe>) {
        if data.is_some() {
            self.data = data;
        }
    }
}

impl Default for RecipeCard {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders one card per recipe, preserving input order.
pub fn render_all(recipes: &[Recipe]) -> Result<String, askama::Error> {
    let mut out = String::new();
    for recipe in recipes {
        let mut card = RecipeCard::new();
        card.set_data(Some(recipe.clone()));
        out.push_str(&card.render()?);
    }
    Ok(out)
}
