use crate::*;
use askama::Template;
use axum::{extract::{Form, State}, http, response, response::IntoResponse};
use std::sync::Arc;
use tokio::sync::RwLock;

/// HTML handler for the recipe list page. Loads the persisted list and
/// renders one card per record, in insertion order, plus the add form and
/// the clear button. A storage value that fails to decode takes the whole
/// page down with a 500.
pub async fn get_index(
    State(app_state): State<Arc<RwLock<AppState>>>,
) -> Result<response::Response, http::StatusCode> {
    let app_state = app_state.read().await;

    let recipes = match app_state.store.load() {
        Ok(recipes) => recipes,
        Err(e) => {
            log::error!("recipe load failed: {}", e);
            return Err(http::StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    let cards = match card::render_all(&recipes) {
        Ok(cards) => cards,
        Err(e) => {
            log::error!("card rendering failed: {}", e);
            return Err(http::StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    let template = IndexTemplate::new(cards);
    match template.render() {
        Ok(html) => Ok(response::Html(html).into_response()),
        Err(e) => {
            log::error!("index rendering failed: {}", e);
            Err(http::StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Form submission handler. The form's field names match the recipe's
/// serialized names exactly, so the form payload deserializes straight
/// into a `Recipe`. Appends it to the persisted list and redirects to `/`,
/// which re-renders the list with the new card last and a fresh form.
pub async fn post_recipe(
    State(app_state): State<Arc<RwLock<AppState>>>,
    Form(recipe): Form<Recipe>,
) -> Result<response::Redirect, http::StatusCode> {
    let mut app_state = app_state.write().await;
    match app_state.store.append(recipe) {
        Ok(()) => Ok(response::Redirect::to("/")),
        Err(e) => {
            log::warn!("recipe append failed: {}", e);
            Err(http::StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Clear handler. Erases the entire backing store and redirects to `/`,
/// which re-renders an empty list. There is no undo.
pub async fn post_clear(
    State(app_state): State<Arc<RwLock<AppState>>>,
) -> Result<response::Redirect, http::StatusCode> {
    let mut app_state = app_state.write().await;
    match app_state.store.clear_all() {
        Ok(()) => Ok(response::Redirect::to("/")),
        Err(e) => {
            log::warn!("storage clear failed: {}", e);
            Err(http::StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipe::sample_recipe;
    use crate::storage::{MemoryStorage, RecipeStore, Storage, RECIPES_KEY};

    fn test_state(backend: MemoryStorage) -> Arc<RwLock<AppState>> {
        Arc::new(RwLock::new(AppState {
            store: RecipeStore::new(Box::new(backend)),
        }))
    }

    async fn body_text(response: response::Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn index_renders_persisted_recipes_in_order() {
        let state = test_state(MemoryStorage::default());
        {
            let mut app = state.write().await;
            let mut second = sample_recipe();
            second.title_txt = "Zebra Cake".to_string();
            app.store.save(&[sample_recipe(), second]).unwrap();
        }

        let response = get_index(State(state)).await.unwrap();
        let html = body_text(response).await;
        assert_eq!(html.matches("<recipe-card>").count(), 2);
        assert!(html.find("Weeknight Pasta").unwrap() < html.find("Zebra Cake").unwrap());
    }

    #[tokio::test]
    async fn index_fails_on_corrupt_storage() {
        let mut backend = MemoryStorage::default();
        backend.set_item(RECIPES_KEY, "not json").unwrap();
        let state = test_state(backend);

        let result = get_index(State(state)).await;
        assert_eq!(result.err(), Some(http::StatusCode::INTERNAL_SERVER_ERROR));
    }

    #[tokio::test]
    async fn submit_appends_exactly_one_record() {
        let state = test_state(MemoryStorage::default());
        {
            let mut app = state.write().await;
            app.store.save(&[sample_recipe()]).unwrap();
        }

        post_recipe(State(state.clone()), Form(sample_recipe()))
            .await
            .unwrap();

        let recipes = state.read().await.store.load().unwrap();
        assert_eq!(recipes.len(), 2);
        assert_eq!(recipes[1], sample_recipe());
    }

    #[tokio::test]
    async fn submitted_rating_selects_star_icon() {
        let state = test_state(MemoryStorage::default());
        let mut recipe = sample_recipe();
        recipe.rating = "2".to_string();
        post_recipe(State(state.clone()), Form(recipe)).await.unwrap();

        let response = get_index(State(state)).await.unwrap();
        let html = body_text(response).await;
        assert!(html.contains("/assets/images/icons/2-star.svg"));
    }

    #[tokio::test]
    async fn clear_empties_storage_and_page() {
        let state = test_state(MemoryStorage::default());
        {
            let mut app = state.write().await;
            app.store.save(&[sample_recipe()]).unwrap();
        }

        post_clear(State(state.clone())).await.unwrap();

        assert!(state.read().await.store.load().unwrap().is_empty());
        let response = get_index(State(state)).await.unwrap();
        let html = body_text(response).await;
        assert_eq!(html.matches("<recipe-card>").count(), 0);
    }
}
