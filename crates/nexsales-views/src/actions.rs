//! User actions that touch a store and report back through a
//! notification.

use nexsales_auth::AuthError;
use nexsales_core::models::notification::NewNotification;
use nexsales_core::models::product::{Product, UpdateProduct};
use nexsales_core::models::session::Session;
use nexsales_core::models::settings::Theme;
use nexsales_core::repository::{ProductSource, SalesSource};
use tracing::{debug, info};

use crate::context::AppContext;
use crate::editor::ProductDraft;
use crate::error::ViewError;

/// Log in and announce the outcome. Every failure gets the same hint,
/// whatever its cause.
pub async fn sign_in<P: ProductSource, S: SalesSource>(
    ctx: &AppContext<P, S>,
    email: &str,
    password: &str,
) -> Result<Session, AuthError> {
    match ctx.auth.login(email, password).await {
        Ok(session) => {
            ctx.notifications
                .add_notification(NewNotification::success("Login successful!"));
            Ok(session)
        }
        Err(e) => {
            let hint = ctx.auth.config().credential_hint();
            ctx.notifications.add_notification(NewNotification::error(format!(
                "Invalid credentials. Try {hint}"
            )));
            Err(e)
        }
    }
}

/// Submit the product editor.
///
/// `editing` is the id of the product being edited, or `None` for a new
/// one. An invalid draft never reaches the store. Returns `Ok(None)`
/// when the edited product no longer exists.
pub fn save_product<P: ProductSource, S: SalesSource>(
    ctx: &AppContext<P, S>,
    editing: Option<&str>,
    draft: &ProductDraft,
) -> Result<Option<Product>, ViewError> {
    let input = draft.validate()?;
    let name = input.name.clone();

    let saved = match editing {
        Some(id) => {
            let updated = ctx.products.update_product(id, UpdateProduct::from(input));
            if updated.is_some() {
                ctx.notifications.add_notification(NewNotification::success(format!(
                    "Product \"{name}\" updated successfully"
                )));
            }
            updated
        }
        None => {
            let created = ctx.products.add_product(input);
            ctx.notifications.add_notification(NewNotification::success(format!(
                "Product \"{name}\" created successfully"
            )));
            Some(created)
        }
    };
    Ok(saved)
}

/// Delete a product after confirmation. Announces only real deletions.
pub fn remove_product<P: ProductSource, S: SalesSource>(ctx: &AppContext<P, S>, id: &str) -> bool {
    let removed = ctx.products.delete_product(id);
    if removed {
        ctx.notifications
            .add_notification(NewNotification::success("Product deleted successfully"));
    }
    removed
}

/// Save name and email from the profile form onto the signed-in user.
pub fn save_profile<P: ProductSource, S: SalesSource>(
    ctx: &AppContext<P, S>,
    name: &str,
    email: &str,
) -> bool {
    let Some(mut user) = ctx.auth.user() else {
        debug!("Profile save ignored, not signed in");
        return false;
    };
    user.name = name.to_owned();
    user.email = email.to_owned();

    let saved = ctx.auth.update_user(user);
    if saved {
        info!("Profile updated");
        ctx.notifications
            .add_notification(NewNotification::success("Profile updated successfully"));
    }
    saved
}

pub fn toggle_theme<P: ProductSource, S: SalesSource>(ctx: &AppContext<P, S>) -> Theme {
    let theme = ctx.settings.toggle_theme();
    ctx.notifications.add_notification(NewNotification::info(format!(
        "Theme changed to {} mode",
        theme.as_str()
    )));
    theme
}

pub fn toggle_notifications<P: ProductSource, S: SalesSource>(ctx: &AppContext<P, S>) -> bool {
    let enabled = ctx.settings.toggle_notifications();
    let state = if enabled { "enabled" } else { "disabled" };
    ctx.notifications
        .add_notification(NewNotification::info(format!("Notifications {state}")));
    enabled
}
