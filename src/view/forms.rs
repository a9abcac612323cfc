use super::{banner, card, input, page, submit, textarea, Input};
use crate::service::{contact::ContactForm, validation::FieldErrors};

pub fn message(form: &ContactForm, errors: &FieldErrors) -> String {
    let fields = [
        input(
            &Input {
                name: "name",
                label: "Your Name",
                kind: "text",
                value: &form.name,
                placeholder: "",
                required: true,
            },
            errors,
        ),
        input(
            &Input {
                name: "email",
                label: "Your Email",
                kind: "email",
                value: &form.email,
                placeholder: "",
                required: true,
            },
            errors,
        ),
        textarea("message", "Your Message", &form.message, 4, errors),
        banner(errors.get("general"), "red"),
        submit("Send Message", "blue"),
    ]
    .concat();
    let body = card(
        "Send a Message",
        &format!("<form method=\"post\" class=\"space-y-4\">{fields}</form>"),
    );
    page("Send a Message", "", &body)
}

pub fn login(username: &str, errors: &FieldErrors) -> String {
    let fields = [
        input(
            &Input {
                name: "username",
                label: "Username",
                kind: "text",
                value: username,
                placeholder: "",
                required: true,
            },
            &FieldErrors::new(),
        ),
        input(
            &Input {
                name: "password",
                label: "Password",
                kind: "password",
                value: "",
                placeholder: "",
                required: true,
            },
            &FieldErrors::new(),
        ),
        banner(errors.get("login"), "red"),
        submit("Log In", "blue"),
    ]
    .concat();
    let body = card(
        "Admin Login",
        &format!(
            concat!(
                "<form method=\"post\" class=\"space-y-4\">{}</form>",
                "<div class=\"mt-4 text-center text-gray-500 text-sm\"><p>Restricted Access: Admin Only</p></div>",
                "<div class=\"mt-4 text-center\"><a href=\"/\" class=\"text-blue-400 hover:underline\">Lost? Here's the Dashboard</a></div>"
            ),
            fields
        ),
    );
    page("Admin Login", "", &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_error_is_shown_once() {
        let html = login("playfairs", &FieldErrors::single("login", "Invalid admin credentials"));
        assert_eq!(html.matches("Invalid admin credentials").count(), 1);
        assert!(html.contains("value=\"playfairs\""));
    }

    #[test]
    fn message_form_keeps_submitted_values() {
        let form = ContactForm {
            name: "Al".into(),
            email: "a@b".into(),
            message: "Hello there, testing".into(),
        };
        let html = message(&form, &FieldErrors::single("email", "Please enter a valid email address"));
        assert!(html.contains("value=\"a@b\""));
        assert!(html.contains(">Hello there, testing</textarea>"));
        assert!(html.contains("Please enter a valid email address"));
    }
}
