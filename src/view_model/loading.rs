//! Read operations: fetching the user and shop snapshots.

use super::error::LoadFailure;
use super::{DashboardViewModel, LoadState};
use crate::api::AdminApi;
use crate::api::error::ApiError;
use crate::error_classifier::ErrorClassifier;
use crate::events::{Event, Source};
use crate::models::{ShopRecord, UserRecord};

impl DashboardViewModel {
    /// Replaces the users snapshot. On failure the list is emptied.
    pub async fn load_users(&mut self, api: &dyn AdminApi) -> Result<usize, ApiError> {
        self.users_state = LoadState::Loading;
        let result = api.list_users().await;
        self.apply_users(result)
    }

    /// Replaces the shops snapshot. On failure the list is emptied.
    pub async fn load_shops(&mut self, api: &dyn AdminApi) -> Result<usize, ApiError> {
        self.shops_state = LoadState::Loading;
        let result = api.list_shops().await;
        self.apply_shops(result)
    }

    /// Loads both collections concurrently. Each side succeeds or falls back
    /// to empty on its own.
    pub async fn load_all(&mut self, api: &dyn AdminApi) -> Result<(), LoadFailure> {
        self.users_state = LoadState::Loading;
        self.shops_state = LoadState::Loading;
        let (users, shops) = futures::join!(api.list_users(), api.list_shops());

        match (self.apply_users(users), self.apply_shops(shops)) {
            (Ok(_), Ok(_)) => Ok(()),
            (Err(users), Ok(_)) => Err(LoadFailure::Users(users)),
            (Ok(_), Err(shops)) => Err(LoadFailure::Shops(shops)),
            (Err(users), Err(shops)) => Err(LoadFailure::Both { users, shops }),
        }
    }

    fn apply_users(&mut self, result: Result<Vec<UserRecord>, ApiError>) -> Result<usize, ApiError> {
        match result {
            Ok(users) => {
                let count = users.len();
                self.replace_users(users);
                self.users_state = LoadState::Loaded;
                self.notify(Event::refresh(Source::Users, format!("Loaded {} users", count)));
                Ok(count)
            }
            Err(e) => {
                self.replace_users(Vec::new());
                self.users_state = LoadState::Failed;
                self.report_load_failure(Source::Users, &e);
                Err(e)
            }
        }
    }

    fn apply_shops(&mut self, result: Result<Vec<ShopRecord>, ApiError>) -> Result<usize, ApiError> {
        match result {
            Ok(shops) => {
                let count = shops.len();
                self.replace_shops(shops);
                self.shops_state = LoadState::Loaded;
                self.notify(Event::refresh(Source::Shops, format!("Loaded {} shops", count)));
                Ok(count)
            }
            Err(e) => {
                self.replace_shops(Vec::new());
                self.shops_state = LoadState::Failed;
                self.report_load_failure(Source::Shops, &e);
                Err(e)
            }
        }
    }

    fn report_load_failure(&mut self, source: Source, error: &ApiError) {
        let level = ErrorClassifier::new().classify(error);
        let what = match source {
            Source::Users => "users",
            Source::Shops => "shops",
            Source::Session => "data",
        };
        self.notify(Event::error(
            source,
            format!("Failed to load {}: {}", what, error.user_message()),
            level,
        ));
    }
}
