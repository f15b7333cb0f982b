//! Pure projection of the dashboard state into what a renderer draws.

use super::modal::{DeleteTarget, Modal};
use super::{DashboardStats, DashboardViewModel, LoadState, PageKind, Section};
use crate::events::Event;
use crate::models::{ShopFilter, ShopRecord, UserRecord};
use chrono::DateTime;
use std::time::Instant;

/// Shown in place of absent values.
pub const PLACEHOLDER: &str = "-";

pub const DRIVER_HEADERS: [&str; 5] = ["Name", "Email", "Phone", "AFM", "Created"];
pub const USER_HEADERS: [&str; 5] = ["Email", "Type", "Name", "Phone", "Created"];
pub const SHOP_HEADERS: [&str; 7] = [
    "Name", "Email", "Status", "Contact", "Phone", "AFM", "Created",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub title: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    pub title: String,
    pub headers: Vec<&'static str>,
    pub rows: Vec<Vec<String>>,
    pub selected: Option<usize>,
    /// Rows displayed and rows available after filtering.
    pub shown: usize,
    pub total: usize,
    pub has_more: bool,
    pub empty_message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView {
    pub label: &'static str,
    pub value: String,
    pub focused: bool,
    pub choice: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalView {
    Form {
        title: &'static str,
        fields: Vec<FieldView>,
    },
    Confirm {
        title: &'static str,
        question: String,
    },
}

/// Everything a frame needs. Built fresh for every draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardView {
    pub section: Section,
    pub tabs: Vec<Tab>,
    pub stats: DashboardStats,
    pub users_state: LoadState,
    pub shops_state: LoadState,
    pub shop_filter: ShopFilter,
    pub table: Option<TableView>,
    pub modal: Option<ModalView>,
    pub notifications: Vec<Event>,
    pub activity: Vec<Event>,
}

impl DashboardView {
    pub fn project(state: &DashboardViewModel, now: Instant) -> Self {
        let section = state.current_section();
        Self {
            section,
            tabs: Section::ALL
                .iter()
                .map(|s| Tab {
                    title: s.to_string(),
                    active: *s == section,
                })
                .collect(),
            stats: state.stats(),
            users_state: state.users_state(),
            shops_state: state.shops_state(),
            shop_filter: state.shop_filter(),
            table: table_for(state, section),
            modal: state.modal().map(modal_view),
            notifications: state
                .notifications()
                .live(now)
                .map(|n| n.event.clone())
                .filter(Event::should_display)
                .collect(),
            activity: state
                .notifications()
                .activity()
                .iter()
                .filter(|e| e.should_display())
                .cloned()
                .collect(),
        }
    }
}

/// `created_at` as `YYYY-MM-DD`; unparseable values are shown as sent.
pub fn format_date(raw: Option<&str>) -> String {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => PLACEHOLDER.to_string(),
        Some(raw) => DateTime::parse_from_rfc3339(raw)
            .map(|dt| dt.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|_| raw.to_string()),
    }
}

fn or_placeholder(value: Option<&String>) -> String {
    value
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .unwrap_or(PLACEHOLDER)
        .to_string()
}

pub(crate) fn driver_row(user: &UserRecord) -> Vec<String> {
    vec![
        or_placeholder(user.name.as_ref()),
        user.email.clone(),
        or_placeholder(user.phone.as_ref()),
        or_placeholder(user.afm.as_ref()),
        format_date(user.created_at.as_deref()),
    ]
}

pub(crate) fn user_row(user: &UserRecord) -> Vec<String> {
    vec![
        user.email.clone(),
        user.user_type.to_string(),
        or_placeholder(user.name.as_ref()),
        or_placeholder(user.phone.as_ref()),
        format_date(user.created_at.as_deref()),
    ]
}

pub(crate) fn shop_row(shop: &ShopRecord) -> Vec<String> {
    vec![
        shop.shop_name.clone(),
        shop.email.clone(),
        shop.status.to_string(),
        or_placeholder(shop.contact_person.as_ref()),
        or_placeholder(shop.phone.as_ref()),
        or_placeholder(shop.afm.as_ref()),
        format_date(shop.created_at.as_deref()),
    ]
}

fn empty_message(state: LoadState, what: &str) -> String {
    match state {
        LoadState::Idle | LoadState::Loading => "Loading...".to_string(),
        LoadState::Failed => format!("Could not load {}", what),
        LoadState::Loaded => format!("No {} to show", what),
    }
}

fn table_for(state: &DashboardViewModel, section: Section) -> Option<TableView> {
    let selected = |rows: usize| (rows > 0).then(|| state.selection().min(rows - 1));
    match section {
        Section::Overview => None,
        Section::Users => {
            let rows: Vec<_> = state.visible_drivers().iter().map(driver_row).collect();
            let total = state.filtered_drivers().len();
            Some(TableView {
                title: format!("Drivers ({})", total),
                headers: DRIVER_HEADERS.to_vec(),
                selected: selected(rows.len()),
                shown: rows.len(),
                total,
                has_more: state.has_more(PageKind::Drivers),
                empty_message: empty_message(state.users_state(), "drivers"),
                rows,
            })
        }
        Section::AllUsers => {
            let rows: Vec<_> = state.users().iter().map(user_row).collect();
            let total = rows.len();
            Some(TableView {
                title: format!("All users ({})", total),
                headers: USER_HEADERS.to_vec(),
                selected: selected(rows.len()),
                shown: total,
                total,
                has_more: false,
                empty_message: empty_message(state.users_state(), "users"),
                rows,
            })
        }
        Section::Shops => {
            let rows: Vec<_> = state.visible_shops().iter().map(shop_row).collect();
            let total = state.filtered_shops().len();
            Some(TableView {
                title: format!("Shops [{}] ({})", state.shop_filter(), total),
                headers: SHOP_HEADERS.to_vec(),
                selected: selected(rows.len()),
                shown: rows.len(),
                total,
                has_more: state.has_more(PageKind::Shops),
                empty_message: empty_message(state.shops_state(), "shops"),
                rows,
            })
        }
    }
}

fn modal_view(modal: &Modal) -> ModalView {
    match (modal, modal.form()) {
        (Modal::ConfirmDelete(target), _) => ModalView::Confirm {
            title: modal.title(),
            question: confirm_question(target),
        },
        (_, Some(form)) => ModalView::Form {
            title: modal.title(),
            fields: form
                .fields()
                .iter()
                .enumerate()
                .map(|(i, field)| FieldView {
                    label: field.label,
                    value: if field.secret {
                        "*".repeat(field.value.chars().count())
                    } else {
                        field.value.clone()
                    },
                    focused: i == form.focus(),
                    choice: field.choices.is_some(),
                })
                .collect(),
        },
        (_, None) => ModalView::Form {
            title: modal.title(),
            fields: Vec::new(),
        },
    }
}

fn confirm_question(target: &DeleteTarget) -> String {
    format!("{} This cannot be undone. (y/n)", target.question())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::Source;
    use crate::models::{RecordId, ShopStatus, UserType};
    use crate::view_model::derived::fixtures::{shop, user};
    use crate::view_model::test_support::loaded;
    use std::time::Duration;

    #[test]
    fn dates_are_shown_as_calendar_days() {
        assert_eq!(format_date(Some("2024-03-01T10:00:00Z")), "2024-03-01");
        assert_eq!(format_date(Some("2024-03-01T23:30:00+02:00")), "2024-03-01");
        assert_eq!(format_date(Some("yesterday")), "yesterday");
        assert_eq!(format_date(Some("  ")), "-");
        assert_eq!(format_date(None), "-");
    }

    #[test]
    fn shops_table_reflects_filter_and_pager() {
        let shops: Vec<_> = (1..=6).map(|id| shop(id, ShopStatus::Active)).collect();
        let mut vm = loaded(vec![], shops);
        vm.navigate(Section::Shops);

        let view = DashboardView::project(&vm, Instant::now());
        let table = view.table.unwrap();
        assert_eq!(table.shown, 4);
        assert_eq!(table.total, 6);
        assert!(table.has_more);
        assert_eq!(table.rows[0][0], "Shop 1");
        assert_eq!(table.rows[0][2], "active");
        assert_eq!(table.rows[0][3], "-");
        assert_eq!(table.rows[0][6], "2024-03-01");
        assert_eq!(table.selected, Some(0));

        vm.load_more(PageKind::Shops);
        let table = DashboardView::project(&vm, Instant::now()).table.unwrap();
        assert_eq!(table.shown, 6);
        assert!(!table.has_more);
    }

    #[test]
    fn overview_has_no_table_and_marks_its_tab() {
        let vm = loaded(vec![user(1, UserType::Driver)], vec![]);
        let view = DashboardView::project(&vm, Instant::now());
        assert!(view.table.is_none());
        assert_eq!(view.tabs.len(), 4);
        assert!(view.tabs[0].active);
        assert_eq!(view.stats.drivers, 1);
    }

    #[test]
    fn empty_table_explains_why() {
        let mut vm = DashboardViewModel::new();
        vm.navigate(Section::Users);
        let table = DashboardView::project(&vm, Instant::now()).table.unwrap();
        assert!(table.rows.is_empty());
        assert_eq!(table.selected, None);
        assert_eq!(table.empty_message, "Loading...");
    }

    #[test]
    fn secrets_are_masked_and_focus_is_marked() {
        let mut vm = DashboardViewModel::new();
        vm.open_create_shop();
        let form = vm.modal_form_mut().unwrap();
        form.set("password", "secret1");
        form.focus_next();

        let view = DashboardView::project(&vm, Instant::now());
        let Some(ModalView::Form { title, fields }) = view.modal else {
            panic!("expected a form");
        };
        assert_eq!(title, "New shop");
        let password = fields.iter().find(|f| f.label == "Password").unwrap();
        assert_eq!(password.value, "*******");
        assert!(fields[1].focused);
        assert!(fields.iter().find(|f| f.label == "Status").unwrap().choice);
    }

    #[test]
    fn delete_confirmation_names_the_record() {
        let mut vm = loaded(vec![user(2, UserType::Driver)], vec![]);
        vm.request_delete_user(&RecordId::from(2)).unwrap();
        let view = DashboardView::project(&vm, Instant::now());
        assert_eq!(
            view.modal,
            Some(ModalView::Confirm {
                title: "Confirm delete",
                question: "Delete user user2@courier.gr? This cannot be undone. (y/n)".into(),
            })
        );
    }

    #[test]
    fn expired_notifications_are_not_projected() {
        let mut vm = DashboardViewModel::new();
        vm.notify(Event::success(Source::Shops, "Shop created"));
        let now = Instant::now();

        assert_eq!(DashboardView::project(&vm, now).notifications.len(), 1);
        let later = now + Duration::from_secs(5);
        let view = DashboardView::project(&vm, later);
        assert!(view.notifications.is_empty());
        assert_eq!(view.activity.len(), 1);
    }
}
