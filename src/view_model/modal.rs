//! Modal dialogs: which one is open, the forms behind them, and how a
//! submitted form becomes an API request.

use super::DashboardViewModel;
use super::error::OperationError;
use super::form::{Form, FormField};
use crate::models::{
    NewShop, NewUser, PasswordChange, RecordId, ShopRecord, ShopStatus, ShopUpdate, UserRecord,
    UserType, UserUpdate,
};

const USER_TYPES: &[&str] = &["driver", "user"];
const SHOP_STATUSES: &[&str] = &["active", "inactive", "pending"];

/// A record waiting for the user to confirm its deletion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteTarget {
    User { id: RecordId, label: String },
    Shop { id: RecordId, label: String },
}

impl DeleteTarget {
    pub fn question(&self) -> String {
        match self {
            DeleteTarget::User { label, .. } => format!("Delete user {}?", label),
            DeleteTarget::Shop { label, .. } => format!("Delete shop {}?", label),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    CreateUser(Form),
    EditUser { id: RecordId, form: Form },
    UserPassword { id: RecordId, form: Form },
    CreateShop(Form),
    EditShop { id: RecordId, form: Form },
    ShopPassword { id: RecordId, form: Form },
    ConfirmDelete(DeleteTarget),
}

impl Modal {
    pub fn title(&self) -> &'static str {
        match self {
            Modal::CreateUser(_) => "New user",
            Modal::EditUser { .. } => "Edit user",
            Modal::UserPassword { .. } => "Change user password",
            Modal::CreateShop(_) => "New shop",
            Modal::EditShop { .. } => "Edit shop",
            Modal::ShopPassword { .. } => "Change shop password",
            Modal::ConfirmDelete(_) => "Confirm delete",
        }
    }

    pub fn form(&self) -> Option<&Form> {
        match self {
            Modal::CreateUser(form) | Modal::CreateShop(form) => Some(form),
            Modal::EditUser { form, .. }
            | Modal::UserPassword { form, .. }
            | Modal::EditShop { form, .. }
            | Modal::ShopPassword { form, .. } => Some(form),
            Modal::ConfirmDelete(_) => None,
        }
    }

    pub fn form_mut(&mut self) -> Option<&mut Form> {
        match self {
            Modal::CreateUser(form) | Modal::CreateShop(form) => Some(form),
            Modal::EditUser { form, .. }
            | Modal::UserPassword { form, .. }
            | Modal::EditShop { form, .. }
            | Modal::ShopPassword { form, .. } => Some(form),
            Modal::ConfirmDelete(_) => None,
        }
    }
}

pub fn new_user_form() -> Form {
    Form::new(vec![
        FormField::text("email", "Email"),
        FormField::choice("user_type", "Type", USER_TYPES),
        FormField::secret("password", "Password"),
        FormField::text("name", "Name"),
        FormField::text("phone", "Phone"),
        FormField::text("afm", "AFM"),
    ])
}

pub fn edit_user_form(user: &UserRecord) -> Form {
    Form::new(vec![
        FormField::text("email", "Email"),
        FormField::choice("user_type", "Type", USER_TYPES),
    ])
    .with_value("email", user.email.clone())
    .with_value("user_type", user.user_type.as_str())
}

pub fn password_form() -> Form {
    Form::new(vec![FormField::secret("password", "New password")])
}

pub fn new_shop_form() -> Form {
    Form::new(vec![
        FormField::text("shop_name", "Shop name"),
        FormField::text("email", "Email"),
        FormField::secret("password", "Password"),
        FormField::text("contact_person", "Contact person"),
        FormField::text("phone", "Phone"),
        FormField::text("address", "Address"),
        FormField::text("afm", "AFM"),
        FormField::choice("status", "Status", SHOP_STATUSES),
    ])
}

pub fn edit_shop_form(shop: &ShopRecord) -> Form {
    let update = ShopUpdate::from(shop);
    Form::new(vec![
        FormField::text("shop_name", "Shop name"),
        FormField::text("contact_person", "Contact person"),
        FormField::text("phone", "Phone"),
        FormField::text("address", "Address"),
        FormField::text("afm", "AFM"),
        FormField::choice("status", "Status", SHOP_STATUSES),
    ])
    .with_value("shop_name", update.shop_name)
    .with_value("contact_person", update.contact_person)
    .with_value("phone", update.phone)
    .with_value("address", update.address)
    .with_value("afm", update.afm)
    .with_value("status", update.status.to_string())
}

pub fn new_user_from(form: &Form) -> NewUser {
    NewUser {
        email: form.value("email").to_string(),
        user_type: UserType::from(form.value("user_type")),
        password: Some(form.raw_value("password").to_string()).filter(|p| !p.is_empty()),
        name: form.optional("name"),
        phone: form.optional("phone"),
        afm: form.optional("afm"),
    }
}

pub fn user_update_from(form: &Form) -> UserUpdate {
    UserUpdate {
        email: form.value("email").to_string(),
        user_type: UserType::from(form.value("user_type")),
    }
}

pub fn password_change_from(form: &Form) -> PasswordChange {
    PasswordChange::new(form.raw_value("password"))
}

fn status_from(form: &Form) -> ShopStatus {
    ShopStatus::parse(form.value("status")).unwrap_or_default()
}

pub fn new_shop_from(form: &Form) -> NewShop {
    NewShop {
        shop_name: form.value("shop_name").to_string(),
        email: form.value("email").to_string(),
        password: form.raw_value("password").to_string(),
        contact_person: form.value("contact_person").to_string(),
        phone: form.value("phone").to_string(),
        address: form.value("address").to_string(),
        afm: form.value("afm").to_string(),
        status: status_from(form),
    }
}

pub fn shop_update_from(form: &Form) -> ShopUpdate {
    ShopUpdate {
        shop_name: form.value("shop_name").to_string(),
        contact_person: form.value("contact_person").to_string(),
        phone: form.value("phone").to_string(),
        address: form.value("address").to_string(),
        afm: form.value("afm").to_string(),
        status: status_from(form),
    }
}

impl DashboardViewModel {
    pub fn modal(&self) -> Option<&Modal> {
        self.modal.as_ref()
    }

    pub fn modal_form_mut(&mut self) -> Option<&mut Form> {
        self.modal.as_mut().and_then(Modal::form_mut)
    }

    /// Closes whatever is open. A declined delete confirmation ends here.
    pub fn cancel_modal(&mut self) {
        self.modal = None;
    }

    pub fn open_create_user(&mut self) {
        self.modal = Some(Modal::CreateUser(new_user_form()));
    }

    pub fn open_edit_user(&mut self, id: &RecordId) -> Result<(), OperationError> {
        let form = edit_user_form(self.require_user(id)?);
        self.modal = Some(Modal::EditUser {
            id: id.clone(),
            form,
        });
        Ok(())
    }

    pub fn open_user_password(&mut self, id: &RecordId) -> Result<(), OperationError> {
        self.require_user(id)?;
        self.modal = Some(Modal::UserPassword {
            id: id.clone(),
            form: password_form(),
        });
        Ok(())
    }

    pub fn open_create_shop(&mut self) {
        self.modal = Some(Modal::CreateShop(new_shop_form()));
    }

    pub fn open_edit_shop(&mut self, id: &RecordId) -> Result<(), OperationError> {
        let form = edit_shop_form(self.require_shop(id)?);
        self.modal = Some(Modal::EditShop {
            id: id.clone(),
            form,
        });
        Ok(())
    }

    pub fn open_shop_password(&mut self, id: &RecordId) -> Result<(), OperationError> {
        self.require_shop(id)?;
        self.modal = Some(Modal::ShopPassword {
            id: id.clone(),
            form: password_form(),
        });
        Ok(())
    }

    /// First step of a delete: ask for confirmation. Nothing is sent.
    pub fn request_delete_user(&mut self, id: &RecordId) -> Result<(), OperationError> {
        let label = self.require_user(id)?.email.clone();
        self.modal = Some(Modal::ConfirmDelete(DeleteTarget::User {
            id: id.clone(),
            label,
        }));
        Ok(())
    }

    /// First step of a delete: ask for confirmation. Nothing is sent.
    pub fn request_delete_shop(&mut self, id: &RecordId) -> Result<(), OperationError> {
        let label = self.require_shop(id)?.shop_name.clone();
        self.modal = Some(Modal::ConfirmDelete(DeleteTarget::Shop {
            id: id.clone(),
            label,
        }));
        Ok(())
    }

    fn require_user(&self, id: &RecordId) -> Result<&UserRecord, OperationError> {
        self.find_user(id).ok_or_else(|| OperationError::NoSuchRecord {
            kind: "user",
            id: id.clone(),
        })
    }

    fn require_shop(&self, id: &RecordId) -> Result<&ShopRecord, OperationError> {
        self.find_shop(id).ok_or_else(|| OperationError::NoSuchRecord {
            kind: "shop",
            id: id.clone(),
        })
    }
}
