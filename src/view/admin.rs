use super::{banner, card, input, page, select, submit, textarea, Input};
use crate::{
    entities::{
        identity_config::{IdentityConfig, Presence},
        site_config::{ColorScheme, SiteConfig},
    },
    service::validation::FieldErrors,
};

pub fn dashboard(message: Option<&str>) -> String {
    let inner = format!(
        concat!(
            "{banner}",
            "<div class=\"space-y-4\"><div class=\"bg-gray-700 p-6 rounded-lg\">",
            "<h2 class=\"text-2xl font-semibold text-blue-300 mb-4\">Management</h2>",
            "<div class=\"space-y-4\">",
            "<a href=\"/admin/customize\" class=\"block w-full bg-blue-600 text-white py-3 px-6 rounded-lg text-center\">Customize Landing Page</a>",
            "<a href=\"/admin/discord\" class=\"block w-full bg-indigo-600 text-white py-3 px-6 rounded-lg text-center\">Configure Discord</a>",
            "</div></div>",
            "<form method=\"post\" class=\"text-center\">{logout}</form></div>"
        ),
        banner = banner(message, "green"),
        logout = submit("Logout", "red"),
    );
    page("Admin Dashboard", "", &card("Admin Dashboard", &inner))
}

pub fn customize(config: &SiteConfig, scheme: ColorScheme, errors: &FieldErrors) -> String {
    let schemes: Vec<(&str, &str)> = ColorScheme::ALL
        .iter()
        .map(|scheme| (scheme.name(), scheme.label()))
        .collect();
    let fields = [
        banner(errors.get("general"), "red"),
        input(
            &Input {
                name: "title",
                label: "Title",
                kind: "text",
                value: &config.title,
                placeholder: "Enter page title",
                required: true,
            },
            errors,
        ),
        textarea("subtitle", "Subtitle", &config.subtitle, 3, errors),
        select("colorScheme", "Color Scheme", &schemes, scheme.name(), errors),
        submit("Save Changes", "blue"),
    ]
    .concat();
    let body = card(
        "Customize Landing Page",
        &format!("<form method=\"post\" class=\"space-y-6\">{fields}</form>"),
    );
    page("Customize Landing Page", "", &body)
}

pub fn discord(config: &IdentityConfig, errors: &FieldErrors) -> String {
    let mut statuses: Vec<(&str, &str)> = vec![("", "Select Status")];
    statuses.extend(Presence::ALL.iter().map(|p| (p.as_str(), p.label())));

    let text_input = |name: &str,
                      label: &str,
                      kind: &str,
                      value: &str,
                      placeholder: &str,
                      required: bool| {
        input(
            &Input {
                name,
                label,
                kind,
                value,
                placeholder,
                required,
            },
            errors,
        )
    };
    let fields = [
        banner(errors.get("general"), "red"),
        text_input(
            "userId",
            "Discord User ID",
            "text",
            &config.user_id,
            "Enter your Discord User ID",
            true,
        ),
        text_input(
            "botToken",
            "Bot Token",
            "password",
            &config.bot_token,
            "Enter your Discord Bot Token",
            true,
        ),
        text_input(
            "displayName",
            "Display Name (Optional)",
            "text",
            &config.display_name,
            "Custom display name",
            false,
        ),
        text_input(
            "avatarUrl",
            "Avatar URL (Optional)",
            "url",
            &config.avatar_url,
            "https://",
            false,
        ),
        select("status", "Status", &statuses, &config.status, errors),
        text_input(
            "customStatus",
            "Custom Status (Optional)",
            "text",
            &config.custom_status,
            "Enter custom status",
            false,
        ),
        submit("Save Discord Configuration", "blue"),
    ]
    .concat();
    let body = card(
        "Discord Integration",
        &format!("<form method=\"post\" class=\"space-y-6\">{fields}</form>"),
    );
    page("Discord Integration", "", &body)
}
