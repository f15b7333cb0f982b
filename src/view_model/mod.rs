//! Dashboard state container
//!
//! Holds the loaded users and shops, the views derived from them, and the
//! UI state around them. Every change goes through a named operation; remote
//! operations live in `loading` and `mutations`.

pub mod derived;
pub mod error;
pub mod form;
mod loading;
pub mod modal;
mod mutations;
pub mod notifications;
pub mod stats;
pub mod view;

pub use derived::Pager;
pub use error::OperationError;
pub use modal::Modal;
pub use stats::DashboardStats;
pub use view::DashboardView;

use crate::events::Event;
use crate::models::{RecordId, ShopFilter, ShopRecord, UserRecord};
use notifications::Notifications;
use std::time::Instant;

/// Top-level sections of the dashboard.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, strum::Display)]
pub enum Section {
    #[default]
    Overview,
    /// Drivers only, paginated.
    #[strum(to_string = "Drivers")]
    Users,
    Shops,
    #[strum(to_string = "All users")]
    AllUsers,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Overview,
        Section::Users,
        Section::Shops,
        Section::AllUsers,
    ];

    pub fn next(&self) -> Self {
        match self {
            Section::Overview => Section::Users,
            Section::Users => Section::Shops,
            Section::Shops => Section::AllUsers,
            Section::AllUsers => Section::Overview,
        }
    }
}

/// Paginated lists.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PageKind {
    Shops,
    Drivers,
}

/// Where a collection stands with respect to the server.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, strum::Display)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed,
}

#[derive(Debug, Default)]
pub struct DashboardViewModel {
    users: Vec<UserRecord>,
    shops: Vec<ShopRecord>,
    filtered_shops: Vec<ShopRecord>,
    filtered_drivers: Vec<UserRecord>,
    shop_filter: ShopFilter,
    shops_pager: Pager,
    drivers_pager: Pager,
    current_section: Section,
    /// Row highlighted in the current section's table.
    selection: usize,
    modal: Option<Modal>,
    notifications: Notifications,
    stats: DashboardStats,
    users_state: LoadState,
    shops_state: LoadState,
}

impl DashboardViewModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn users(&self) -> &[UserRecord] {
        &self.users
    }

    #[cfg(test)]
    pub fn shops(&self) -> &[ShopRecord] {
        &self.shops
    }

    pub fn filtered_shops(&self) -> &[ShopRecord] {
        &self.filtered_shops
    }

    pub fn filtered_drivers(&self) -> &[UserRecord] {
        &self.filtered_drivers
    }

    pub fn shop_filter(&self) -> ShopFilter {
        self.shop_filter
    }

    #[cfg(test)]
    pub fn shops_to_show(&self) -> usize {
        self.shops_pager.to_show()
    }

    #[cfg(test)]
    pub fn drivers_to_show(&self) -> usize {
        self.drivers_pager.to_show()
    }

    /// Whether the list of `kind` has rows past the current page.
    pub fn has_more(&self, kind: PageKind) -> bool {
        match kind {
            PageKind::Shops => self.shops_pager.has_more(self.filtered_shops.len()),
            PageKind::Drivers => self.drivers_pager.has_more(self.filtered_drivers.len()),
        }
    }

    pub fn visible_shops(&self) -> &[ShopRecord] {
        self.shops_pager.visible(&self.filtered_shops)
    }

    pub fn visible_drivers(&self) -> &[UserRecord] {
        self.drivers_pager.visible(&self.filtered_drivers)
    }

    pub fn current_section(&self) -> Section {
        self.current_section
    }

    pub fn stats(&self) -> DashboardStats {
        self.stats
    }

    pub fn users_state(&self) -> LoadState {
        self.users_state
    }

    pub fn shops_state(&self) -> LoadState {
        self.shops_state
    }

    pub fn notifications(&self) -> &Notifications {
        &self.notifications
    }

    pub fn selection(&self) -> usize {
        self.selection
    }

    /// Records an event: shown as a notification and kept in the activity log.
    pub fn notify(&mut self, event: Event) {
        self.notifications.push(event);
    }

    pub fn prune_notifications(&mut self, now: Instant) {
        self.notifications.prune(now);
    }

    pub fn find_user(&self, id: &RecordId) -> Option<&UserRecord> {
        self.users.iter().find(|user| &user.id == id)
    }

    pub fn find_shop(&self, id: &RecordId) -> Option<&ShopRecord> {
        self.shops.iter().find(|shop| &shop.id == id)
    }

    /// Switches section. Entering a paginated section starts again from the first page.
    pub fn navigate(&mut self, section: Section) {
        self.current_section = section;
        self.selection = 0;
        match section {
            Section::Shops => self.shops_pager.reset(),
            Section::Users => self.drivers_pager.reset(),
            Section::Overview | Section::AllUsers => {}
        }
    }

    /// Changes the status filter of the shops list and rebuilds it.
    pub fn set_shop_filter(&mut self, filter: ShopFilter) {
        self.shop_filter = filter;
        self.apply_shop_filter();
    }

    /// Rebuilds the filtered shops from the current snapshot and resets its pagination.
    pub fn apply_shop_filter(&mut self) {
        self.filtered_shops = derived::filter_shops(&self.shops, self.shop_filter);
        self.shops_pager.reset();
        if self.current_section == Section::Shops {
            self.selection = 0;
        }
    }

    pub fn load_more(&mut self, kind: PageKind) {
        match kind {
            PageKind::Shops => self.shops_pager.load_more(),
            PageKind::Drivers => self.drivers_pager.load_more(),
        }
    }

    /// Number of rows the current section's table shows.
    pub fn visible_rows(&self) -> usize {
        match self.current_section {
            Section::Overview => 0,
            Section::Users => self.visible_drivers().len(),
            Section::Shops => self.visible_shops().len(),
            Section::AllUsers => self.users.len(),
        }
    }

    pub fn select_next(&mut self) {
        let rows = self.visible_rows();
        if rows > 0 {
            self.selection = (self.selection + 1).min(rows - 1);
        }
    }

    pub fn select_prev(&mut self) {
        self.selection = self.selection.saturating_sub(1);
    }

    /// The user under the cursor in the drivers or all-users section.
    pub fn selected_user(&self) -> Option<&UserRecord> {
        match self.current_section {
            Section::Users => self.visible_drivers().get(self.selection),
            Section::AllUsers => self.users.get(self.selection),
            Section::Overview | Section::Shops => None,
        }
    }

    /// The shop under the cursor in the shops section.
    pub fn selected_shop(&self) -> Option<&ShopRecord> {
        match self.current_section {
            Section::Shops => self.visible_shops().get(self.selection),
            _ => None,
        }
    }

    /// Rebuilds every derived view and the stats from the current snapshot.
    fn refresh_derived(&mut self) {
        self.filtered_shops = derived::filter_shops(&self.shops, self.shop_filter);
        self.filtered_drivers = derived::drivers(&self.users);
        self.stats = DashboardStats::compute(&self.users, &self.shops);
        let rows = self.visible_rows();
        if self.selection >= rows {
            self.selection = rows.saturating_sub(1);
        }
    }

    fn replace_users(&mut self, users: Vec<UserRecord>) {
        self.users = users;
        self.refresh_derived();
    }

    fn replace_shops(&mut self, shops: Vec<ShopRecord>) {
        self.shops = shops;
        self.refresh_derived();
    }
}


#[cfg(test)]
mod tests {
    use super::derived::fixtures::{shop, user};
    use super::test_support::loaded;
    use super::*;
    use crate::models::{ShopStatus, UserType};

    fn many_shops(n: u64) -> Vec<ShopRecord> {
        (1..=n)
            .map(|id| {
                let status = if id % 2 == 0 {
                    ShopStatus::Pending
                } else {
                    ShopStatus::Active
                };
                shop(id, status)
            })
            .collect()
    }

    #[test]
    /// Changing the filter resets the shown count no matter how far the user paged.
    fn filter_change_resets_pagination() {
        let mut vm = loaded(vec![], many_shops(20));
        vm.load_more(PageKind::Shops);
        vm.load_more(PageKind::Shops);
        assert_eq!(vm.shops_to_show(), 12);

        vm.set_shop_filter(ShopFilter::Pending);
        assert_eq!(vm.shops_to_show(), 4);
        assert_eq!(vm.filtered_shops().len(), 10);

        vm.load_more(PageKind::Shops);
        vm.set_shop_filter(ShopFilter::Pending);
        assert_eq!(vm.shops_to_show(), 4);
    }

    #[test]
    fn scenario_active_filter_shows_both_active_shops() {
        let mut vm = loaded(
            vec![],
            vec![
                shop(1, ShopStatus::Active),
                shop(2, ShopStatus::Pending),
                shop(3, ShopStatus::Active),
            ],
        );
        vm.set_shop_filter(ShopFilter::Active);

        let ids: Vec<_> = vm.visible_shops().iter().map(|s| s.id.clone()).collect();
        assert_eq!(ids, vec![RecordId::from(1), RecordId::from(3)]);
        assert_eq!(vm.shops_to_show(), 4);
    }

    #[test]
    fn navigation_resets_the_entered_sections_pager() {
        let drivers: Vec<_> = (1..=10).map(|id| user(id, UserType::Driver)).collect();
        let mut vm = loaded(drivers, many_shops(10));
        vm.load_more(PageKind::Drivers);
        vm.load_more(PageKind::Shops);

        vm.navigate(Section::Users);
        assert_eq!(vm.drivers_to_show(), 4);
        assert_eq!(vm.shops_to_show(), 8);

        vm.navigate(Section::Shops);
        assert_eq!(vm.shops_to_show(), 4);
    }

    #[test]
    /// Shop lookup matches regardless of whether the id came in as a number or a string.
    fn lookup_is_robust_to_id_representation() {
        let mut from_string = shop(0, ShopStatus::Active);
        from_string.id = serde_json::from_str("\"5\"").unwrap();
        let mut from_number = shop(0, ShopStatus::Active);
        from_number.id = serde_json::from_str("6").unwrap();
        let vm = loaded(vec![], vec![from_string, from_number]);

        assert!(vm.find_shop(&RecordId::from(5)).is_some());
        assert!(vm.find_shop(&RecordId::from("6")).is_some());
        assert!(vm.find_shop(&RecordId::from("7")).is_none());
    }

    #[test]
    fn selection_follows_the_visible_rows() {
        let drivers: Vec<_> = (1..=6).map(|id| user(id, UserType::Driver)).collect();
        let mut vm = loaded(drivers, vec![]);
        vm.navigate(Section::Users);
        for _ in 0..10 {
            vm.select_next();
        }
        // Only four drivers are visible before "load more"
        assert_eq!(vm.selection(), 3);
        assert_eq!(vm.selected_user().map(|u| u.id.clone()), Some(RecordId::from(4)));

        vm.select_prev();
        assert_eq!(vm.selection(), 2);
        assert!(vm.selected_shop().is_none());
    }

    #[test]
    fn stats_follow_the_snapshot() {
        let vm = loaded(
            vec![user(1, UserType::Driver), user(2, UserType::user())],
            vec![shop(1, ShopStatus::Inactive)],
        );
        assert_eq!(vm.stats().drivers, 1);
        assert_eq!(vm.stats().inactive_shops, 1);
        assert_eq!(vm.filtered_drivers().len(), 1);
    }

    #[test]
    fn sections_cycle_and_display_titles() {
        assert_eq!(Section::AllUsers.next(), Section::Overview);
        assert_eq!(Section::Users.to_string(), "Drivers");
        assert_eq!(Section::AllUsers.to_string(), "All users");
    }
}
