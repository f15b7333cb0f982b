use crate::api::error::ApiError;
use crate::models::{
    Acknowledgement, NewShop, NewUser, PasswordChange, RecordId, ShopRecord, ShopUpdate,
    UserRecord, UserUpdate,
};

pub(crate) mod client;
pub use client::AdminApiClient;
pub mod error;

#[cfg(test)]
use mockall::automock;

/// The back-office REST API for users (drivers) and shop accounts.
///
/// Every method issues exactly one request. Callers never retry.
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait AdminApi: Send + Sync {
    /// `GET /api/admin/users`
    async fn list_users(&self) -> Result<Vec<UserRecord>, ApiError>;

    /// `POST /api/admin/users`
    async fn create_user(&self, user: &NewUser) -> Result<Acknowledgement, ApiError>;

    /// `PUT /api/admin/users/{id}`
    async fn update_user(
        &self,
        id: &RecordId,
        update: &UserUpdate,
    ) -> Result<Acknowledgement, ApiError>;

    /// `PUT /api/admin/users/{id}/password`
    async fn update_user_password(
        &self,
        id: &RecordId,
        change: &PasswordChange,
    ) -> Result<Acknowledgement, ApiError>;

    /// `DELETE /api/admin/users/{id}`
    async fn delete_user(&self, id: &RecordId) -> Result<Acknowledgement, ApiError>;

    /// `GET /api/admin/shop-accounts`
    async fn list_shops(&self) -> Result<Vec<ShopRecord>, ApiError>;

    /// `POST /api/admin/shop-accounts`
    async fn create_shop(&self, shop: &NewShop) -> Result<Acknowledgement, ApiError>;

    /// `PUT /api/admin/shop-accounts/{id}`
    async fn update_shop(
        &self,
        id: &RecordId,
        update: &ShopUpdate,
    ) -> Result<Acknowledgement, ApiError>;

    /// `PUT /api/admin/shop-accounts/{id}/password`
    async fn update_shop_password(
        &self,
        id: &RecordId,
        change: &PasswordChange,
    ) -> Result<Acknowledgement, ApiError>;

    /// `DELETE /api/admin/shop-accounts/{id}`
    async fn delete_shop(&self, id: &RecordId) -> Result<Acknowledgement, ApiError>;
}
