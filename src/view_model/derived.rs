//! Derived views and client-side pagination.
//!
//! Derived views are always rebuilt from the full snapshot; nothing is patched in place.

use crate::consts::cli_consts::{INITIAL_PAGE_SIZE, PAGE_SIZE_STEP};
use crate::models::{ShopFilter, ShopRecord, UserRecord};

/// Shops matching `filter`, in their original order.
pub fn filter_shops(shops: &[ShopRecord], filter: ShopFilter) -> Vec<ShopRecord> {
    shops
        .iter()
        .filter(|shop| filter.matches(shop.status))
        .cloned()
        .collect()
}

/// Users whose type is `driver`, in their original order.
pub fn drivers(users: &[UserRecord]) -> Vec<UserRecord> {
    users.iter().filter(|user| user.is_driver()).cloned().collect()
}

/// The first `min(n, len)` items.
pub fn visible<T>(items: &[T], n: usize) -> &[T] {
    &items[..n.min(items.len())]
}

/// How many rows of an already loaded list are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    to_show: usize,
}

impl Pager {
    pub const fn new() -> Self {
        Self {
            to_show: INITIAL_PAGE_SIZE,
        }
    }

    pub fn to_show(&self) -> usize {
        self.to_show
    }

    pub fn reset(&mut self) {
        self.to_show = INITIAL_PAGE_SIZE;
    }

    /// Shows one more page. Not clamped: rendering clamps to the list length.
    pub fn load_more(&mut self) {
        self.to_show = self.to_show.saturating_add(PAGE_SIZE_STEP);
    }

    pub fn visible<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        visible(items, self.to_show)
    }

    pub fn has_more(&self, total: usize) -> bool {
        total > self.to_show
    }
}

impl Default for Pager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::models::{RecordId, ShopRecord, ShopStatus, UserRecord, UserType};

    pub fn shop(id: u64, status: ShopStatus) -> ShopRecord {
        ShopRecord {
            id: RecordId::from(id),
            shop_name: format!("Shop {id}"),
            email: format!("shop{id}@shops.gr"),
            status,
            contact_person: None,
            phone: None,
            address: None,
            afm: Some(format!("{id:09}")),
            created_at: Some("2024-03-01T10:00:00Z".to_string()),
        }
    }

    pub fn user(id: u64, user_type: UserType) -> UserRecord {
        UserRecord {
            id: RecordId::from(id),
            email: format!("user{id}@courier.gr"),
            user_type,
            name: Some(format!("User {id}")),
            phone: None,
            afm: None,
            created_at: Some("2024-03-01T10:00:00Z".to_string()),
        }
    }
}
