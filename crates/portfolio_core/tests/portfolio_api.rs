use portfolio_core::api::{
    MSG_CONTACT_SENT, MSG_GENERIC_ERROR, MSG_OFFLINE, MSG_ONLINE, MSG_WELCOME_DESKTOP,
    MSG_WELCOME_MOBILE,
};
use portfolio_core::{
    Breakpoint, ContactForm, NotificationKind, PortfolioApi, PortfolioConfig, ProjectForm,
    MESSAGE_MAX_CHARS,
};

#[test]
fn default_store_is_seeded_with_two_projects() {
    let api = PortfolioApi::default();

    let projects = api.get_projects();
    let ids: Vec<_> = projects.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 2]);
    assert_eq!(projects[0].title, "EduSync (CLG ERP)");
    assert_eq!(projects[1].title, "Authentication");
    assert_eq!(
        projects[0].live.as_deref(),
        Some("https://myerp-8shi.onrender.com")
    );
    assert_eq!(projects[1].live, None);
    assert_eq!(api.cards().unwrap().len(), 2);
}

#[test]
fn invalid_project_form_never_reaches_store() {
    let mut api = PortfolioApi::default();

    let mut form = ProjectForm {
        title: "Chat".to_string(),
        description: "   ".to_string(),
        ..ProjectForm::default()
    };
    let err = api.submit_project_form(&mut form).unwrap_err();

    assert!(err.has_field("description"));
    assert!(!err.has_field("title"));
    assert_eq!(api.get_projects().len(), 2);
    assert!(api.notifications().is_empty());
    assert_eq!(form.title, "Chat");
}

#[test]
fn valid_project_form_is_added_with_success_toast() {
    let mut api = PortfolioApi::default();

    let mut form = ProjectForm {
        title: "Chat App".to_string(),
        description: "Multi-room chat".to_string(),
        technologies: "Flask, JavaScript, , Redis".to_string(),
        github: "https://github.com/example/chat".to_string(),
        ..ProjectForm::default()
    };
    let id = api.submit_project_form(&mut form).unwrap();

    assert_eq!(id, 3);
    assert_eq!(form, ProjectForm::default());
    let projects = api.get_projects();
    let project = projects.iter().find(|p| p.id == id).unwrap();
    assert_eq!(project.technologies, vec!["Flask", "JavaScript", "Redis"]);
    assert_eq!(
        project.image,
        "https://via.placeholder.com/400x250/6366f1/ffffff?text=Chat%20App"
    );
    let toast = api.notifications().last().unwrap();
    assert_eq!(toast.message, "Project added successfully!");
    assert_eq!(toast.kind, NotificationKind::Success);
}

#[test]
fn contact_form_reports_all_field_errors() {
    let mut api = PortfolioApi::default();

    let err = api
        .submit_contact_form(ContactForm {
            name: "A".to_string(),
            phone: "123".to_string(),
            email: "not-an-email".to_string(),
            message: String::new(),
        })
        .unwrap_err();

    assert_eq!(err.errors.len(), 4);
    assert_eq!(
        err.message_for("name"),
        Some("Your Name must be at least 2 characters")
    );
    assert_eq!(
        err.message_for("email"),
        Some("Please enter a valid email address")
    );
    assert_eq!(err.message_for("message"), Some("Your Message is required"));
    assert!(api.notifications().is_empty());
}

#[test]
fn contact_form_success_shows_confirmation() {
    let mut api = PortfolioApi::default();

    let submission = api
        .submit_contact_form(ContactForm {
            name: " Ada ".to_string(),
            phone: String::new(),
            email: "ada@example.com".to_string(),
            message: "Hello there".to_string(),
        })
        .unwrap();

    assert_eq!(submission.name, "Ada");
    assert_eq!(submission.phone, None);
    assert!(submission.timestamp_ms > 0);
    assert_eq!(api.notifications()[0].message, MSG_CONTACT_SENT);
}

#[test]
fn report_error_shows_generic_error_toast() {
    let mut api = PortfolioApi::default();

    let id = api.report_error("script", "TypeError: x is undefined");

    let toast = api.notifications().iter().find(|t| t.id == id).unwrap();
    assert_eq!(toast.kind, NotificationKind::Error);
    assert_eq!(toast.message, MSG_GENERIC_ERROR);
}

#[test]
fn show_dismiss_and_prune_notifications() {
    let config = PortfolioConfig {
        toast_display_ms: 1_000,
        toast_exit_animation_ms: 200,
        ..PortfolioConfig::default()
    };
    let mut api = PortfolioApi::from_config(&config);

    let first = api.show_notification("one", NotificationKind::Info);
    let second = api.show_notification("two", NotificationKind::Warning);
    assert!(api.dismiss_notification(first));
    assert_eq!(api.notifications().len(), 1);

    let created = api.notifications()[0].created_at_ms;
    assert_eq!(api.notifications()[0].id, second);
    assert_eq!(api.prune_notifications(created + 1_199), 0);
    assert_eq!(api.prune_notifications(created + 1_200), 1);
    assert!(api.notifications().is_empty());
}

#[test]
fn remove_and_update_unknown_ids_emit_nothing() {
    let mut api = PortfolioApi::default();

    assert!(!api.remove_project(99));
    assert!(!api.update_project(99, &Default::default()));
    assert_eq!(api.get_projects().len(), 2);
    assert!(api.notifications().is_empty());
}

#[test]
fn resize_reports_breakpoint_changes_once() {
    let mut api = PortfolioApi::from_config(&PortfolioConfig {
        viewport_width: 1300,
        ..PortfolioConfig::default()
    });

    let change = api.resize(700).unwrap();
    assert_eq!(change.from, Breakpoint::Xl);
    assert_eq!(change.to, Breakpoint::Sm);
    assert!(api.resize(650).is_none());
    assert!(api.viewport().is_mobile());
}

#[test]
fn default_filter_tokens_start_with_all() {
    let api = PortfolioApi::default();
    assert_eq!(
        api.filter_tokens(),
        &["all", "python", "javascript", "django"]
    );
}

#[test]
fn contact_message_over_cap_is_rejected() {
    let mut api = PortfolioApi::default();
    let form = ContactForm {
        name: "Ada".to_string(),
        phone: String::new(),
        email: "ada@example.com".to_string(),
        message: "x".repeat(MESSAGE_MAX_CHARS + 1),
    };
    assert_eq!(form.message_counter().remaining, 0);
    assert!(form.message_counter().warning);

    let err = api.submit_contact_form(form).unwrap_err();

    assert_eq!(
        err.message_for("message"),
        Some("Your Message must be at most 500 characters")
    );
    assert!(api.notifications().is_empty());
}

#[test]
fn message_counter_text_counts_down() {
    let form = ContactForm {
        message: "Hello there".to_string(),
        ..ContactForm::default()
    };
    let counter = form.message_counter();

    assert_eq!(counter.text(), "489 characters remaining");
    assert!(!counter.warning);
}

#[test]
fn connectivity_changes_show_one_toast_each() {
    let mut api = PortfolioApi::default();
    assert!(api.is_online());
    assert!(api.set_online(true).is_none());

    let offline = api.set_online(false).unwrap();
    assert!(!api.is_online());
    assert!(api.set_online(false).is_none());
    let online = api.set_online(true).unwrap();

    let toasts = api.notifications();
    assert_eq!(toasts.len(), 2);
    assert_eq!(toasts[0].id, offline);
    assert_eq!(toasts[0].kind, NotificationKind::Warning);
    assert_eq!(toasts[0].message, MSG_OFFLINE);
    assert_eq!(toasts[1].id, online);
    assert_eq!(toasts[1].kind, NotificationKind::Success);
    assert_eq!(toasts[1].message, MSG_ONLINE);
}

#[test]
fn welcome_toast_depends_on_device() {
    let mut mobile = PortfolioApi::from_config(&PortfolioConfig {
        viewport_width: 400,
        ..PortfolioConfig::default()
    });
    mobile.show_welcome();
    assert_eq!(mobile.device_class(), "mobile-device");
    assert_eq!(mobile.notifications()[0].message, MSG_WELCOME_MOBILE);
    assert_eq!(mobile.notifications()[0].kind, NotificationKind::Info);

    let mut desktop = PortfolioApi::default();
    desktop.show_welcome();
    assert_eq!(desktop.device_class(), "desktop-device");
    assert_eq!(desktop.notifications()[0].message, MSG_WELCOME_DESKTOP);

    desktop.resize(500);
    assert_eq!(desktop.device_class(), "mobile-device");
}
