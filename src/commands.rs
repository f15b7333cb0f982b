//! Headless commands
//!
//! Non-interactive counterparts of the dashboard actions. They run the same
//! view-model operations and print the outcome.

use crate::api::AdminApi;
use crate::api::error::ApiError;
use crate::events::{Event, EventType};
use crate::models::{
    NewShop, NewUser, PasswordChange, RecordId, ShopFilter, ShopStatus, ShopUpdate, UserType,
    UserUpdate,
};
use crate::pretty::{print_cmd_error, print_cmd_info, print_cmd_success, print_friendly_error_header};
use crate::view_model::derived::visible;
use crate::view_model::view::{
    DRIVER_HEADERS, SHOP_HEADERS, USER_HEADERS, driver_row, shop_row, user_row,
};
use crate::view_model::{DashboardViewModel, Modal, OperationError};
use clap::{Args, Subcommand};
use std::error::Error;
use std::io::{BufRead, Write};

#[derive(Subcommand, Debug)]
pub enum UsersCommand {
    /// List users
    List {
        /// Only list drivers
        #[arg(long)]
        drivers: bool,
        /// Show at most N rows
        #[arg(long, value_name = "N")]
        show: Option<usize>,
    },
    /// Create a user (a driver unless --type says otherwise)
    Create(NewUserArgs),
    /// Change a user's email or type
    Update {
        id: String,
        #[arg(long)]
        email: Option<String>,
        #[arg(long = "type", value_name = "TYPE")]
        user_type: Option<String>,
    },
    /// Set a new password for a user
    Password {
        id: String,
        #[arg(long)]
        password: String,
    },
    /// Delete a user
    Delete {
        id: String,
        /// Do not ask for confirmation
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Args, Debug)]
pub struct NewUserArgs {
    #[arg(long)]
    pub email: String,
    #[arg(long = "type", value_name = "TYPE", default_value = "driver")]
    pub user_type: String,
    #[arg(long)]
    pub password: Option<String>,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long)]
    pub afm: Option<String>,
}

impl From<NewUserArgs> for NewUser {
    fn from(args: NewUserArgs) -> Self {
        NewUser {
            email: args.email.trim().to_string(),
            user_type: UserType::from(args.user_type.as_str()),
            password: args.password,
            name: args.name,
            phone: args.phone,
            afm: args.afm,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum ShopsCommand {
    /// List shop accounts
    List {
        /// all, active, inactive or pending
        #[arg(long, value_name = "STATUS", default_value = "all")]
        status: String,
        /// Show at most N rows
        #[arg(long, value_name = "N")]
        show: Option<usize>,
    },
    /// Create a shop account
    Create(NewShopArgs),
    /// Change a shop account's details
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        contact: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        address: Option<String>,
        #[arg(long)]
        afm: Option<String>,
        #[arg(long)]
        status: Option<String>,
    },
    /// Set a new password for a shop account
    Password {
        id: String,
        #[arg(long)]
        password: String,
    },
    /// Delete a shop account
    Delete {
        id: String,
        /// Do not ask for confirmation
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Args, Debug)]
pub struct NewShopArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub password: String,
    #[arg(long)]
    pub afm: String,
    #[arg(long, default_value = "")]
    pub contact: String,
    #[arg(long, default_value = "")]
    pub phone: String,
    #[arg(long, default_value = "")]
    pub address: String,
    #[arg(long, default_value = "active")]
    pub status: String,
}

impl From<NewShopArgs> for NewShop {
    fn from(args: NewShopArgs) -> Self {
        NewShop {
            shop_name: args.name.trim().to_string(),
            email: args.email.trim().to_string(),
            password: args.password,
            contact_person: args.contact,
            phone: args.phone,
            address: args.address,
            afm: args.afm.trim().to_string(),
            status: parse_status(&args.status),
        }
    }
}

/// Unknown names map to `Unknown`, which validation rejects.
fn parse_status(raw: &str) -> ShopStatus {
    ShopStatus::parse(raw).unwrap_or(ShopStatus::Unknown)
}

/// Plain-text table with columns padded to their widest cell.
pub fn format_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let render = |cells: Vec<&str>| {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut lines = vec![render(headers.to_vec())];
    lines.push(
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("  "),
    );
    lines.extend(
        rows.iter()
            .map(|row| render(row.iter().map(String::as_str).collect())),
    );
    lines.join("\n")
}

/// Asks a yes/no question. Anything but `y`/`yes` is a no.
pub fn confirm_with<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &str,
) -> std::io::Result<bool> {
    write!(output, "{} [y/N] ", question)?;
    output.flush()?;
    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(matches!(
        answer.trim().to_lowercase().as_str(),
        "y" | "yes"
    ))
}

/// Runs one headless command against the API.
pub struct CommandRunner<'a, R> {
    api: &'a dyn AdminApi,
    api_url: String,
    input: R,
    view_model: DashboardViewModel,
}

impl<'a, R: BufRead> CommandRunner<'a, R> {
    pub fn new(api: &'a dyn AdminApi, api_url: impl Into<String>, input: R) -> Self {
        Self {
            api,
            api_url: api_url.into(),
            input,
            view_model: DashboardViewModel::new(),
        }
    }

    #[cfg(test)]
    pub fn view_model(&self) -> &DashboardViewModel {
        &self.view_model
    }

    pub async fn run_users(&mut self, command: UsersCommand) -> Result<(), Box<dyn Error>> {
        let api = self.api;
        match command {
            UsersCommand::List { drivers, show } => {
                self.load_users().await?;
                let vm = &self.view_model;
                let (headers, list): (&[&str], Vec<Vec<String>>) = if drivers {
                    (&DRIVER_HEADERS[..], vm.filtered_drivers().iter().map(driver_row).collect())
                } else {
                    (&USER_HEADERS[..], vm.users().iter().map(user_row).collect())
                };
                print_list(headers, &list, show);
                Ok(())
            }
            UsersCommand::Create(args) => {
                let user = NewUser::from(args);
                let result = self.view_model.create_user(api, &user).await;
                self.report(result)
            }
            UsersCommand::Update {
                id,
                email,
                user_type,
            } => {
                self.load_users().await?;
                let id = RecordId::from(id);
                let existing = self.view_model.find_user(&id).ok_or_else(|| {
                    OperationError::NoSuchRecord {
                        kind: "user",
                        id: id.clone(),
                    }
                })?;
                let update = UserUpdate {
                    email: email
                        .map(|email| email.trim().to_string())
                        .unwrap_or_else(|| existing.email.clone()),
                    user_type: user_type
                        .as_deref()
                        .map(UserType::from)
                        .unwrap_or_else(|| existing.user_type.clone()),
                };
                let result = self.view_model.update_user(api, &id, &update).await;
                self.report(result)
            }
            UsersCommand::Password { id, password } => {
                let change = PasswordChange::new(password);
                let result = self
                    .view_model
                    .update_user_password(api, &RecordId::from(id), &change)
                    .await;
                self.report(result)
            }
            UsersCommand::Delete { id, yes } => {
                self.load_users().await?;
                let result = self.view_model.request_delete_user(&RecordId::from(id));
                self.report_if_failed(result)?;
                self.confirm_and_delete(yes).await
            }
        }
    }

    pub async fn run_shops(&mut self, command: ShopsCommand) -> Result<(), Box<dyn Error>> {
        let api = self.api;
        match command {
            ShopsCommand::List { status, show } => {
                let filter = ShopFilter::parse(&status)
                    .ok_or_else(|| format!("Unknown shop status filter: {}", status))?;
                self.load_shops().await?;
                self.view_model.set_shop_filter(filter);
                let list: Vec<_> = self
                    .view_model
                    .filtered_shops()
                    .iter()
                    .map(shop_row)
                    .collect();
                print_list(&SHOP_HEADERS, &list, show);
                Ok(())
            }
            ShopsCommand::Create(args) => {
                let shop = NewShop::from(args);
                let result = self.view_model.create_shop(api, &shop).await;
                self.report(result)
            }
            ShopsCommand::Update {
                id,
                name,
                contact,
                phone,
                address,
                afm,
                status,
            } => {
                self.load_shops().await?;
                let id = RecordId::from(id);
                let existing = self.view_model.find_shop(&id).ok_or_else(|| {
                    OperationError::NoSuchRecord {
                        kind: "shop",
                        id: id.clone(),
                    }
                })?;
                let mut update = ShopUpdate::from(existing);
                if let Some(name) = name {
                    update.shop_name = name.trim().to_string();
                }
                if let Some(contact) = contact {
                    update.contact_person = contact;
                }
                if let Some(phone) = phone {
                    update.phone = phone;
                }
                if let Some(address) = address {
                    update.address = address;
                }
                if let Some(afm) = afm {
                    update.afm = afm.trim().to_string();
                }
                if let Some(status) = status {
                    update.status = parse_status(&status);
                }
                let result = self.view_model.update_shop(api, &id, &update).await;
                self.report(result)
            }
            ShopsCommand::Password { id, password } => {
                let change = PasswordChange::new(password);
                let result = self
                    .view_model
                    .update_shop_password(api, &RecordId::from(id), &change)
                    .await;
                self.report(result)
            }
            ShopsCommand::Delete { id, yes } => {
                self.load_shops().await?;
                let result = self.view_model.request_delete_shop(&RecordId::from(id));
                self.report_if_failed(result)?;
                self.confirm_and_delete(yes).await
            }
        }
    }

    async fn load_users(&mut self) -> Result<(), Box<dyn Error>> {
        let result = self.view_model.load_users(self.api).await;
        result.map(|_| ()).map_err(|e| self.load_failed(e))
    }

    async fn load_shops(&mut self) -> Result<(), Box<dyn Error>> {
        let result = self.view_model.load_shops(self.api).await;
        result.map(|_| ()).map_err(|e| self.load_failed(e))
    }

    fn load_failed(&self, error: ApiError) -> Box<dyn Error> {
        if let ApiError::Reqwest(_) = error {
            print_friendly_error_header(&self.api_url);
        } else {
            let message = error.user_message();
            print_cmd_error!("Could not load data", "{}", message);
        }
        error.into()
    }

    /// Second half of a delete: ask unless `--yes`, then send or back out.
    async fn confirm_and_delete(&mut self, yes: bool) -> Result<(), Box<dyn Error>> {
        let question = match self.view_model.modal() {
            Some(Modal::ConfirmDelete(target)) => target.question(),
            _ => return Err(OperationError::NothingToConfirm.into()),
        };
        if !yes && !confirm_with(&mut self.input, &mut std::io::stdout(), &question)? {
            self.view_model.cancel_modal();
            print_cmd_info!("Cancelled", "Nothing was deleted.");
            return Ok(());
        }
        let result = self.view_model.confirm_delete(self.api).await;
        self.report(result)
    }

    fn report_if_failed(&self, result: Result<(), OperationError>) -> Result<(), Box<dyn Error>> {
        result.map_err(|e| {
            let message = e.to_string();
            print_cmd_error!(message);
            e.into()
        })
    }

    /// Prints the outcome the operation recorded and turns failures into errors.
    fn report(&self, result: Result<(), OperationError>) -> Result<(), Box<dyn Error>> {
        let latest = |wanted: fn(&Event) -> bool| {
            self.view_model
                .notifications()
                .activity()
                .iter()
                .rev()
                .find(|&e| wanted(e))
                .map(|e| e.msg.clone())
        };
        match result {
            Ok(()) => {
                let message = latest(|e| e.event_type == EventType::Success)
                    .unwrap_or_else(|| "Done".to_string());
                print_cmd_success!(message);
                Ok(())
            }
            Err(e) => {
                let message = latest(Event::is_failure).unwrap_or_else(|| e.to_string());
                let kind = e.kind().to_string();
                print_cmd_error!(kind, "{}", message);
                Err(e.into())
            }
        }
    }
}

fn print_list(headers: &[&str], rows: &[Vec<String>], show: Option<usize>) {
    let shown = visible(rows, show.unwrap_or(rows.len()));
    if shown.is_empty() {
        println!("Nothing to show.");
    } else {
        println!("{}", format_table(headers, shown));
    }
    println!("\nShowing {} of {}", shown.len(), rows.len());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockAdminApi;
    use crate::models::{Acknowledgement, ShopRecord, UserRecord};

    fn users() -> Vec<UserRecord> {
        serde_json::from_value(serde_json::json!([
            {"id": 5, "email": "driver@courier.gr", "user_type": "driver"},
        ]))
        .unwrap()
    }

    fn shops() -> Vec<ShopRecord> {
        serde_json::from_value(serde_json::json!([
            {"id": "8", "shop_name": "Fourno", "email": "f@shops.gr", "status": "pending", "afm": "123"},
        ]))
        .unwrap()
    }

    #[test]
    fn table_columns_are_padded() {
        let table = format_table(
            &["Name", "Status"],
            &[
                vec!["Fourno".into(), "active".into()],
                vec!["Kafe".into(), "-".into()],
            ],
        );
        let lines: Vec<_> = table.lines().collect();
        assert_eq!(lines[0], "Name    Status");
        assert_eq!(lines[1], "------  ------");
        assert_eq!(lines[2], "Fourno  active");
        assert_eq!(lines[3], "Kafe    -");
    }

    #[test]
    fn only_yes_confirms() {
        for (answer, expected) in [("y\n", true), ("YES\n", true), ("\n", false), ("no\n", false)] {
            let mut out = Vec::new();
            let confirmed = confirm_with(&mut answer.as_bytes(), &mut out, "Delete?").unwrap();
            assert_eq!(confirmed, expected, "answer {:?}", answer);
            assert_eq!(String::from_utf8(out).unwrap(), "Delete? [y/N] ");
        }
    }

    #[tokio::test]
    async fn declined_delete_sends_nothing() {
        let mut api = MockAdminApi::new();
        api.expect_list_users().times(1).returning(|| Ok(users()));
        api.expect_delete_user().times(0);

        let mut runner = CommandRunner::new(&api, "http://localhost", "n\n".as_bytes());
        runner
            .run_users(UsersCommand::Delete {
                id: "5".into(),
                yes: false,
            })
            .await
            .unwrap();
        assert!(runner.view_model().modal().is_none());
    }

    #[tokio::test]
    async fn delete_with_yes_skips_the_prompt() {
        let mut api = MockAdminApi::new();
        api.expect_list_shops().times(2).returning(|| Ok(shops()));
        api.expect_delete_shop()
            .withf(|id| id.as_str() == "8")
            .times(1)
            .returning(|_| Ok(Acknowledgement::default()));

        let mut runner = CommandRunner::new(&api, "http://localhost", "".as_bytes());
        runner
            .run_shops(ShopsCommand::Delete {
                id: "8".into(),
                yes: true,
            })
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn update_keeps_fields_that_were_not_given() {
        let mut api = MockAdminApi::new();
        api.expect_list_shops().returning(|| Ok(shops()));
        api.expect_update_shop()
            .withf(|id, update| {
                id.as_str() == "8"
                    && update.shop_name == "Fourno"
                    && update.afm == "123"
                    && update.status == ShopStatus::Active
            })
            .times(1)
            .returning(|_, _| Ok(Acknowledgement::with_message("Shop updated")));

        let mut runner = CommandRunner::new(&api, "http://localhost", "".as_bytes());
        runner
            .run_shops(ShopsCommand::Update {
                id: "8".into(),
                name: None,
                contact: None,
                phone: None,
                address: None,
                afm: None,
                status: Some("active".into()),
            })
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn invalid_driver_is_rejected_locally() {
        let mut api = MockAdminApi::new();
        api.expect_create_user().times(0);

        let mut runner = CommandRunner::new(&api, "http://localhost", "".as_bytes());
        let result = runner
            .run_users(UsersCommand::Create(NewUserArgs {
                email: "driver@courier.gr".into(),
                user_type: "driver".into(),
                password: Some("secret1".into()),
                name: None,
                phone: None,
                afm: None,
            }))
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn update_sends_the_trimmed_email() {
        let mut api = MockAdminApi::new();
        api.expect_list_users().returning(|| Ok(users()));
        api.expect_update_user()
            .withf(|id, update| {
                id.as_str() == "5" && update.email == "new@courier.gr" && update.user_type.is_driver()
            })
            .times(1)
            .returning(|_, _| Ok(Acknowledgement::default()));

        let mut runner = CommandRunner::new(&api, "http://localhost", "".as_bytes());
        runner
            .run_users(UsersCommand::Update {
                id: "5".into(),
                email: Some("  new@courier.gr ".into()),
                user_type: None,
            })
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn updating_a_missing_user_fails() {
        let mut api = MockAdminApi::new();
        api.expect_list_users().returning(|| Ok(users()));
        api.expect_update_user().times(0);

        let mut runner = CommandRunner::new(&api, "http://localhost", "".as_bytes());
        let result = runner
            .run_users(UsersCommand::Update {
                id: "6".into(),
                email: None,
                user_type: None,
            })
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn unknown_status_filter_is_an_error() {
        let api = MockAdminApi::new();
        let mut runner = CommandRunner::new(&api, "http://localhost", "".as_bytes());
        let result = runner
            .run_shops(ShopsCommand::List {
                status: "closed".into(),
                show: None,
            })
            .await;
        assert!(result.is_err());
    }
}
