//! Admin API Client
//!
//! JSON over HTTP client for the users and shop-accounts endpoints.

use crate::api::AdminApi;
use crate::api::error::ApiError;
use crate::consts::cli_consts::{endpoints, network};
use crate::environment::Environment;
use crate::models::{
    Acknowledgement, NewShop, NewUser, PasswordChange, RecordId, ShopRecord, ShopUpdate,
    ShopsEnvelope, StatusEnvelope, UserRecord, UserUpdate, UsersEnvelope,
};
use reqwest::{Client, ClientBuilder, Method, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;

// User-Agent string with CLI version
const USER_AGENT: &str = concat!("courier-admin/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct AdminApiClient {
    client: Client,
    environment: Environment,
    auth_token: Option<String>,
}

impl AdminApiClient {
    pub fn new(environment: Environment, auth_token: Option<String>) -> Result<Self, ApiError> {
        let client = ClientBuilder::new()
            .connect_timeout(network::connect_timeout())
            .timeout(network::request_timeout())
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self {
            client,
            environment,
            auth_token: auth_token.filter(|token| !token.trim().is_empty()),
        })
    }

    #[cfg(test)]
    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    fn build_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.environment.api_url().trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    fn record_endpoint(collection: &str, id: &RecordId) -> String {
        format!("{}/{}", collection, urlencoding::encode(id.as_str()))
    }

    fn password_endpoint(collection: &str, id: &RecordId) -> String {
        format!("{}/password", Self::record_endpoint(collection, id))
    }

    fn request(&self, method: Method, endpoint: &str) -> RequestBuilder {
        let url = self.build_url(endpoint);
        log::debug!("{} {}", method, url);
        let builder = self.client.request(method, url);
        match &self.auth_token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn handle_response_status(response: Response) -> Result<Response, ApiError> {
        if !response.status().is_success() {
            return Err(ApiError::from_response(response).await);
        }
        Ok(response)
    }

    async fn decode_response<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let response = Self::handle_response_status(response).await?;
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn get_request<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        let response = self.request(Method::GET, endpoint).send().await?;
        Self::decode_response(response).await
    }

    async fn write_request<B: Serialize + ?Sized>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&B>,
    ) -> Result<Acknowledgement, ApiError> {
        let mut builder = self.request(method, endpoint);
        if let Some(body) = body {
            builder = builder.json(body);
        }
        let response = builder.send().await?;
        let envelope: StatusEnvelope = Self::decode_response(response).await?;
        if !envelope.success {
            return Err(ApiError::refused(envelope.message));
        }
        Ok(Acknowledgement {
            message: envelope.message,
        })
    }
}

#[async_trait::async_trait]
impl AdminApi for AdminApiClient {
    async fn list_users(&self) -> Result<Vec<UserRecord>, ApiError> {
        let envelope: UsersEnvelope = self.get_request(endpoints::USERS).await?;
        if !envelope.success {
            return Err(ApiError::refused(envelope.message));
        }
        Ok(envelope.users)
    }

    async fn create_user(&self, user: &NewUser) -> Result<Acknowledgement, ApiError> {
        self.write_request(Method::POST, endpoints::USERS, Some(user))
            .await
    }

    async fn update_user(
        &self,
        id: &RecordId,
        update: &UserUpdate,
    ) -> Result<Acknowledgement, ApiError> {
        let endpoint = Self::record_endpoint(endpoints::USERS, id);
        self.write_request(Method::PUT, &endpoint, Some(update))
            .await
    }

    async fn update_user_password(
        &self,
        id: &RecordId,
        change: &PasswordChange,
    ) -> Result<Acknowledgement, ApiError> {
        let endpoint = Self::password_endpoint(endpoints::USERS, id);
        self.write_request(Method::PUT, &endpoint, Some(change))
            .await
    }

    async fn delete_user(&self, id: &RecordId) -> Result<Acknowledgement, ApiError> {
        let endpoint = Self::record_endpoint(endpoints::USERS, id);
        self.write_request(Method::DELETE, &endpoint, None::<&()>)
            .await
    }

    async fn list_shops(&self) -> Result<Vec<ShopRecord>, ApiError> {
        let envelope: ShopsEnvelope = self.get_request(endpoints::SHOP_ACCOUNTS).await?;
        if !envelope.success {
            return Err(ApiError::refused(envelope.message));
        }
        Ok(envelope.shop_accounts)
    }

    async fn create_shop(&self, shop: &NewShop) -> Result<Acknowledgement, ApiError> {
        self.write_request(Method::POST, endpoints::SHOP_ACCOUNTS, Some(shop))
            .await
    }

    async fn update_shop(
        &self,
        id: &RecordId,
        update: &ShopUpdate,
    ) -> Result<Acknowledgement, ApiError> {
        let endpoint = Self::record_endpoint(endpoints::SHOP_ACCOUNTS, id);
        self.write_request(Method::PUT, &endpoint, Some(update))
            .await
    }

    async fn update_shop_password(
        &self,
        id: &RecordId,
        change: &PasswordChange,
    ) -> Result<Acknowledgement, ApiError> {
        let endpoint = Self::password_endpoint(endpoints::SHOP_ACCOUNTS, id);
        self.write_request(Method::PUT, &endpoint, Some(change))
            .await
    }

    async fn delete_shop(&self, id: &RecordId) -> Result<Acknowledgement, ApiError> {
        let endpoint = Self::record_endpoint(endpoints::SHOP_ACCOUNTS, id);
        self.write_request(Method::DELETE, &endpoint, None::<&()>)
            .await
    }
}
