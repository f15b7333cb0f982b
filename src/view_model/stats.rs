use crate::models::{ShopRecord, ShopStatus, UserRecord};

/// Headline numbers of the overview section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_users: usize,
    pub drivers: usize,
    pub other_users: usize,
    pub total_shops: usize,
    pub active_shops: usize,
    pub inactive_shops: usize,
    pub pending_shops: usize,
}

impl DashboardStats {
    pub fn compute(users: &[UserRecord], shops: &[ShopRecord]) -> Self {
        let drivers = users.iter().filter(|u| u.is_driver()).count();
        let count = |status: ShopStatus| shops.iter().filter(|s| s.status == status).count();
        Self {
            total_users: users.len(),
            drivers,
            other_users: users.len() - drivers,
            total_shops: shops.len(),
            active_shops: count(ShopStatus::Active),
            inactive_shops: count(ShopStatus::Inactive),
            pending_shops: count(ShopStatus::Pending),
        }
    }
}
