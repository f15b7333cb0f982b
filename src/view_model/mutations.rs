//! Write operations. Each one validates locally, sends at most one request,
//! and on success reloads the collection it touched.

use super::error::OperationError;
use super::modal::{
    DeleteTarget, Modal, new_shop_from, new_user_from, password_change_from, shop_update_from,
    user_update_from,
};
use super::DashboardViewModel;
use crate::api::AdminApi;
use crate::api::error::ApiError;
use crate::error_classifier::ErrorClassifier;
use crate::events::{Event, Source};
use crate::logging::LogLevel;
use crate::models::{
    Acknowledgement, NewShop, NewUser, PasswordChange, RecordId, ShopUpdate, UserUpdate,
};
use crate::validation::Validate;

impl DashboardViewModel {
    pub async fn create_user(
        &mut self,
        api: &dyn AdminApi,
        user: &NewUser,
    ) -> Result<(), OperationError> {
        self.check(Source::Users, user)?;
        let result = api.create_user(user).await;
        self.finish_write(Source::Users, result, "User created")?;
        self.reload(api, Source::Users).await;
        Ok(())
    }

    pub async fn update_user(
        &mut self,
        api: &dyn AdminApi,
        id: &RecordId,
        update: &UserUpdate,
    ) -> Result<(), OperationError> {
        self.check(Source::Users, update)?;
        let result = api.update_user(id, update).await;
        self.finish_write(Source::Users, result, "User updated")?;
        self.reload(api, Source::Users).await;
        Ok(())
    }

    pub async fn update_user_password(
        &mut self,
        api: &dyn AdminApi,
        id: &RecordId,
        change: &PasswordChange,
    ) -> Result<(), OperationError> {
        self.check(Source::Users, change)?;
        let result = api.update_user_password(id, change).await;
        self.finish_write(Source::Users, result, "Password updated")?;
        self.reload(api, Source::Users).await;
        Ok(())
    }

    pub async fn create_shop(
        &mut self,
        api: &dyn AdminApi,
        shop: &NewShop,
    ) -> Result<(), OperationError> {
        self.check(Source::Shops, shop)?;
        let result = api.create_shop(shop).await;
        self.finish_write(Source::Shops, result, "Shop created")?;
        self.reload(api, Source::Shops).await;
        Ok(())
    }

    pub async fn update_shop(
        &mut self,
        api: &dyn AdminApi,
        id: &RecordId,
        update: &ShopUpdate,
    ) -> Result<(), OperationError> {
        self.check(Source::Shops, update)?;
        let result = api.update_shop(id, update).await;
        self.finish_write(Source::Shops, result, "Shop updated")?;
        self.reload(api, Source::Shops).await;
        Ok(())
    }

    pub async fn update_shop_password(
        &mut self,
        api: &dyn AdminApi,
        id: &RecordId,
        change: &PasswordChange,
    ) -> Result<(), OperationError> {
        self.check(Source::Shops, change)?;
        let result = api.update_shop_password(id, change).await;
        self.finish_write(Source::Shops, result, "Password updated")?;
        self.reload(api, Source::Shops).await;
        Ok(())
    }

    /// Second step of a delete: sends the `DELETE` for the pending confirmation.
    pub async fn confirm_delete(&mut self, api: &dyn AdminApi) -> Result<(), OperationError> {
        let target = match self.modal.take() {
            Some(Modal::ConfirmDelete(target)) => target,
            other => {
                self.modal = other;
                return Err(OperationError::NothingToConfirm);
            }
        };

        let (source, result, done, missing) = match &target {
            DeleteTarget::User { id, .. } => (
                Source::Users,
                api.delete_user(id).await,
                "User deleted",
                "User not found or delete endpoint missing",
            ),
            DeleteTarget::Shop { id, .. } => (
                Source::Shops,
                api.delete_shop(id).await,
                "Shop deleted",
                "Shop not found or delete endpoint missing",
            ),
        };

        match result {
            Ok(ack) => {
                self.notify(Event::success(source, ack.message_or(done)));
                self.reload(api, source).await;
                Ok(())
            }
            Err(e) if e.is_not_found() => {
                self.notify(Event::error(source, missing, LogLevel::Warn));
                Err(e.into())
            }
            Err(e) => {
                self.report_write_failure(source, &e);
                Err(e.into())
            }
        }
    }

    /// Sends the open form as the request it stands for.
    pub async fn submit_modal(&mut self, api: &dyn AdminApi) -> Result<(), OperationError> {
        let modal = self.modal.clone().ok_or(OperationError::NoOpenForm)?;
        match modal {
            Modal::CreateUser(form) => self.create_user(api, &new_user_from(&form)).await,
            Modal::EditUser { id, form } => {
                self.update_user(api, &id, &user_update_from(&form)).await
            }
            Modal::UserPassword { id, form } => {
                self.update_user_password(api, &id, &password_change_from(&form))
                    .await
            }
            Modal::CreateShop(form) => self.create_shop(api, &new_shop_from(&form)).await,
            Modal::EditShop { id, form } => {
                self.update_shop(api, &id, &shop_update_from(&form)).await
            }
            Modal::ShopPassword { id, form } => {
                self.update_shop_password(api, &id, &password_change_from(&form))
                    .await
            }
            Modal::ConfirmDelete(_) => self.confirm_delete(api).await,
        }
    }

    fn check<V: Validate>(&mut self, source: Source, request: &V) -> Result<(), OperationError> {
        request.validate().map_err(|e| {
            self.notify(Event::validation(source, e.to_string()));
            OperationError::from(e)
        })
    }

    /// Success closes the modal; failure leaves everything as it was.
    fn finish_write(
        &mut self,
        source: Source,
        result: Result<Acknowledgement, ApiError>,
        done: &str,
    ) -> Result<(), OperationError> {
        match result {
            Ok(ack) => {
                self.modal = None;
                self.notify(Event::success(source, ack.message_or(done)));
                Ok(())
            }
            Err(e) => {
                self.report_write_failure(source, &e);
                Err(e.into())
            }
        }
    }

    fn report_write_failure(&mut self, source: Source, error: &ApiError) {
        let level = ErrorClassifier::new().classify(error);
        self.notify(Event::error(source, error.user_message(), level));
    }

    /// Failures are already reported by the load itself.
    async fn reload(&mut self, api: &dyn AdminApi, source: Source) {
        let result = match source {
            Source::Users => self.load_users(api).await,
            Source::Shops => self.load_shops(api).await,
            Source::Session => return,
        };
        if let Err(e) = result {
            log::debug!("Reload of {} after a write failed: {}", source, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockAdminApi;
    use crate::events::EventType;
    use crate::models::{ShopStatus, UserType};
    use crate::view_model::error::FailureKind;
    use crate::view_model::derived::fixtures::{shop, user};
    use crate::view_model::test_support::loaded;

    fn last_event(vm: &DashboardViewModel) -> Event {
        vm.notifications().latest().cloned().unwrap()
    }

    #[tokio::test]
    /// A five character password is rejected before anything is sent.
    async fn short_shop_password_sends_nothing() {
        let mut api = MockAdminApi::new();
        api.expect_create_shop().times(0);
        api.expect_list_shops().times(0);

        let before = vec![shop(1, ShopStatus::Active)];
        let mut vm = loaded(vec![], before.clone());
        vm.open_create_shop();
        let form = vm.modal_form_mut().unwrap();
        form.set("shop_name", "Bakery");
        form.set("email", "bakery@shops.gr");
        form.set("password", "12345");
        form.set("afm", "123456789");

        let err = vm.submit_modal(&api).await.unwrap_err();

        assert_eq!(err.kind(), FailureKind::Validation);
        assert_eq!(vm.shops(), before.as_slice());
        assert!(matches!(vm.modal(), Some(Modal::CreateShop(_))));
        let event = last_event(&vm);
        assert_eq!(event.event_type, EventType::Validation);
        assert!(event.msg.contains("at least 6"));
    }

    #[tokio::test]
    async fn successful_create_reloads_and_closes_the_modal() {
        let mut api = MockAdminApi::new();
        api.expect_create_user()
            .withf(|user| user.email == "new@courier.gr" && user.user_type.is_driver())
            .times(1)
            .returning(|_| Ok(Acknowledgement::with_message("Driver created")));
        api.expect_list_users().times(1).returning(|| {
            Ok(vec![user(1, UserType::Driver), user(2, UserType::Driver)])
        });

        let mut vm = loaded(vec![user(1, UserType::Driver)], vec![]);
        vm.open_create_user();
        let form = vm.modal_form_mut().unwrap();
        form.set("email", "new@courier.gr");
        form.set("password", "secret1");
        form.set("name", "Nikos");
        form.set("phone", "6900000000");
        form.set("afm", "123456789");

        vm.submit_modal(&api).await.unwrap();

        assert!(vm.modal().is_none());
        assert_eq!(vm.users().len(), 2);
        assert_eq!(vm.stats().drivers, 2);
        assert!(
            vm.notifications()
                .activity()
                .iter()
                .any(|e| e.event_type == EventType::Success && e.msg == "Driver created")
        );
    }

    #[tokio::test]
    /// A 404 on delete is reported as missing and nothing is reloaded.
    async fn delete_not_found_skips_the_reload() {
        let mut api = MockAdminApi::new();
        api.expect_delete_user().times(1).returning(|_| {
            Err(ApiError::NotFound {
                message: String::new(),
            })
        });
        api.expect_list_users().times(0);

        let mut vm = loaded(vec![user(7, UserType::Driver)], vec![]);
        vm.request_delete_user(&RecordId::from(7)).unwrap();
        let err = vm.confirm_delete(&api).await.unwrap_err();

        assert_eq!(err.kind(), FailureKind::NotFound);
        assert_eq!(vm.users().len(), 1);
        assert!(vm.modal().is_none());
        let event = last_event(&vm);
        assert_eq!(event.event_type, EventType::Error);
        assert_eq!(event.msg, "User not found or delete endpoint missing");
    }

    #[tokio::test]
    async fn confirmed_shop_delete_reloads_shops() {
        let mut api = MockAdminApi::new();
        api.expect_delete_shop()
            .withf(|id| id.as_str() == "2")
            .times(1)
            .returning(|_| Ok(Acknowledgement::default()));
        api.expect_list_shops()
            .times(1)
            .returning(|| Ok(vec![shop(1, ShopStatus::Active)]));

        let mut vm = loaded(
            vec![],
            vec![shop(1, ShopStatus::Active), shop(2, ShopStatus::Pending)],
        );
        vm.request_delete_shop(&RecordId::from("2")).unwrap();
        vm.submit_modal(&api).await.unwrap();

        assert_eq!(vm.shops().len(), 1);
        assert_eq!(vm.stats().pending_shops, 0);
        assert_eq!(last_event(&vm).msg, "Loaded 1 shops");
    }

    #[tokio::test]
    /// Declining a confirmation only closes the modal.
    async fn declined_delete_has_no_side_effects() {
        let mut api = MockAdminApi::new();
        api.expect_delete_user().times(0);
        api.expect_list_users().times(0);

        let mut vm = loaded(vec![user(3, UserType::Driver)], vec![]);
        vm.request_delete_user(&RecordId::from(3)).unwrap();
        assert!(matches!(vm.modal(), Some(Modal::ConfirmDelete(_))));
        let logged = vm.notifications().activity().len();

        vm.cancel_modal();

        assert!(vm.modal().is_none());
        assert_eq!(vm.users().len(), 1);
        assert_eq!(vm.notifications().activity().len(), logged);
        assert!(matches!(
            vm.confirm_delete(&api).await,
            Err(OperationError::NothingToConfirm)
        ));
    }

    #[tokio::test]
    /// A refused update shows the server's message and leaves the form open.
    async fn refused_update_keeps_local_state() {
        let mut api = MockAdminApi::new();
        api.expect_update_shop()
            .times(1)
            .returning(|_, _| Err(ApiError::refused(Some("AFM already registered".into()))));
        api.expect_list_shops().times(0);

        let before = vec![shop(4, ShopStatus::Active)];
        let mut vm = loaded(vec![], before.clone());
        vm.open_edit_shop(&RecordId::from(4)).unwrap();
        vm.modal_form_mut().unwrap().set("afm", "999999999");

        let err = vm.submit_modal(&api).await.unwrap_err();

        assert_eq!(err.kind(), FailureKind::Application);
        assert_eq!(vm.shops(), before.as_slice());
        assert!(matches!(vm.modal(), Some(Modal::EditShop { .. })));
        assert_eq!(last_event(&vm).msg, "AFM already registered");
    }

    #[tokio::test]
    async fn password_change_targets_the_selected_record() {
        let mut api = MockAdminApi::new();
        api.expect_update_user_password()
            .withf(|id, change| id.as_str() == "5" && change.password == "secret1")
            .times(1)
            .returning(|_, _| Ok(Acknowledgement::default()));
        api.expect_list_users()
            .times(1)
            .returning(|| Ok(vec![user(5, UserType::Driver)]));

        let mut vm = loaded(vec![user(5, UserType::Driver)], vec![]);
        vm.open_user_password(&RecordId::from("5")).unwrap();
        vm.modal_form_mut().unwrap().set("password", "secret1");
        vm.submit_modal(&api).await.unwrap();

        assert!(vm.modal().is_none());
        assert!(
            vm.notifications()
                .activity()
                .iter()
                .any(|e| e.msg == "Password updated")
        );
    }

    #[tokio::test]
    async fn network_failure_on_write_is_reported() {
        let mut api = MockAdminApi::new();
        api.expect_update_user().times(1).returning(|_, _| {
            Err(ApiError::Http {
                status: 502,
                message: String::new(),
            })
        });

        let mut vm = DashboardViewModel::new();
        let update = UserUpdate {
            email: "someone@courier.gr".into(),
            user_type: UserType::user(),
        };
        let err = vm
            .update_user(&api, &RecordId::from(1), &update)
            .await
            .unwrap_err();

        assert_eq!(err.kind(), FailureKind::Network);
        let event = last_event(&vm);
        assert_eq!(event.log_level, LogLevel::Warn);
        assert_eq!(event.msg, "Request failed with status 502");
    }

    #[tokio::test]
    async fn submit_without_a_modal_is_an_error() {
        let api = MockAdminApi::new();
        let mut vm = DashboardViewModel::new();
        assert!(matches!(
            vm.submit_modal(&api).await,
            Err(OperationError::NoOpenForm)
        ));
    }
}
