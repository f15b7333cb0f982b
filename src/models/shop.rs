use super::{RecordId, lenient};
use serde::{Deserialize, Serialize};

/// Lifecycle status of a shop account.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ShopStatus {
    Active,
    Inactive,
    Pending,
    /// Anything the server sent that is none of the above, or nothing at all.
    #[default]
    #[serde(other)]
    Unknown,
}

impl ShopStatus {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "active" => Some(ShopStatus::Active),
            "inactive" => Some(ShopStatus::Inactive),
            "pending" => Some(ShopStatus::Pending),
            _ => None,
        }
    }

    pub fn is_writable(&self) -> bool {
        !matches!(self, ShopStatus::Unknown)
    }
}

/// Status filter of the shops list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum ShopFilter {
    #[default]
    All,
    Active,
    Inactive,
    Pending,
}

impl ShopFilter {
    pub fn matches(&self, status: ShopStatus) -> bool {
        match self {
            ShopFilter::All => true,
            ShopFilter::Active => status == ShopStatus::Active,
            ShopFilter::Inactive => status == ShopStatus::Inactive,
            ShopFilter::Pending => status == ShopStatus::Pending,
        }
    }

    /// The filter after this one, wrapping around.
    pub fn next(&self) -> Self {
        match self {
            ShopFilter::All => ShopFilter::Active,
            ShopFilter::Active => ShopFilter::Inactive,
            ShopFilter::Inactive => ShopFilter::Pending,
            ShopFilter::Pending => ShopFilter::All,
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "all" => Some(ShopFilter::All),
            other => ShopStatus::parse(other).map(ShopFilter::from),
        }
    }
}

impl From<ShopStatus> for ShopFilter {
    fn from(status: ShopStatus) -> Self {
        match status {
            ShopStatus::Active => ShopFilter::Active,
            ShopStatus::Inactive => ShopFilter::Inactive,
            ShopStatus::Pending => ShopFilter::Pending,
            ShopStatus::Unknown => ShopFilter::All,
        }
    }
}

/// A shop account as returned by `GET /api/admin/shop-accounts`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopRecord {
    pub id: RecordId,
    #[serde(default, deserialize_with = "lenient::text")]
    pub shop_name: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub email: String,
    #[serde(default, deserialize_with = "lenient::status")]
    pub status: ShopStatus,
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub contact_person: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub afm: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub created_at: Option<String>,
}

/// Body of `POST /api/admin/shop-accounts`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewShop {
    pub shop_name: String,
    pub email: String,
    pub password: String,
    pub contact_person: String,
    pub phone: String,
    pub address: String,
    pub afm: String,
    pub status: ShopStatus,
}

impl NewShop {
    /// A new active shop with only the required fields set.
    pub fn new(
        shop_name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        afm: impl Into<String>,
    ) -> Self {
        Self {
            shop_name: shop_name.into(),
            email: email.into(),
            password: password.into(),
            contact_person: String::new(),
            phone: String::new(),
            address: String::new(),
            afm: afm.into(),
            status: ShopStatus::Active,
        }
    }
}

/// Body of `PUT /api/admin/shop-accounts/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShopUpdate {
    pub shop_name: String,
    pub contact_person: String,
    pub phone: String,
    pub address: String,
    pub afm: String,
    pub status: ShopStatus,
}

impl From<&ShopRecord> for ShopUpdate {
    fn from(shop: &ShopRecord) -> Self {
        Self {
            shop_name: shop.shop_name.clone(),
            contact_person: shop.contact_person.clone().unwrap_or_default(),
            phone: shop.phone.clone().unwrap_or_default(),
            address: shop.address.clone().unwrap_or_default(),
            afm: shop.afm.clone().unwrap_or_default(),
            status: shop.status,
        }
    }
}
