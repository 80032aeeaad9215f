use super::*;

const NOW: &str = "2026-10-18 09:30:00";

#[test]
fn it_requires_name_email_and_message() {
    let res = ContactSubmission::validate("Ada", "ada@example.com", "Hi", "", NOW);
    assert_eq!(res, Err(ContactError::MissingFields));

    let res = ContactSubmission::validate("", "ada@example.com", "", "Hello", NOW);
    assert_eq!(res, Err(ContactError::MissingFields));

    let res = ContactSubmission::validate("Ada", "   ", "", "Hello", NOW);
    assert_eq!(res, Err(ContactError::MissingFields));
}

#[test]
fn it_checks_missing_fields_before_the_email_shape() {
    let res = ContactSubmission::validate("Ada", "not-an-email", "", "", NOW);
    assert_eq!(res, Err(ContactError::MissingFields));
}

#[test]
fn it_rejects_malformed_emails() {
    for email in ["not-an-email", "a@b", "@example.com", "a b@example.com", "a@b@c.d"] {
        let res = ContactSubmission::validate("Ada", email, "", "Hello", NOW);
        assert_eq!(res, Err(ContactError::InvalidEmail), "{email}");
    }
}

#[test]
fn it_accepts_standard_emails() {
    for email in ["ada@example.com", "a.b+c@mail.example.org", "x@y.io"] {
        assert!(is_valid_email(email), "{email}");
    }
}

#[test]
fn it_renders_validation_errors_as_user_messages() {
    assert_eq!(
        ContactError::MissingFields.to_string(),
        "Please fill in all required fields."
    );
    assert_eq!(
        ContactError::InvalidEmail.to_string(),
        "Please enter a valid email address."
    );
}

#[test]
fn it_builds_params_with_reply_to_and_default_subject() {
    let submission =
        ContactSubmission::validate(" Ada ", "ada@example.com", "  ", "Hello there", NOW).unwrap();
    assert_eq!(submission.subject, None);

    let params = submission.into_params("Badr");
    assert_eq!(
        params,
        EmailParams {
            from_name: "Ada".to_string(),
            from_email: "ada@example.com".to_string(),
            subject: NO_SUBJECT.to_string(),
            message: "Hello there".to_string(),
            to_name: "Badr".to_string(),
            reply_to: "ada@example.com".to_string(),
            date: NOW.to_string(),
        }
    );
}

#[test]
fn it_keeps_a_provided_subject() {
    let params = ContactSubmission::validate("Ada", "ada@example.com", "Collab", "Hi", NOW)
        .unwrap()
        .into_params("Badr");
    assert_eq!(params.subject, "Collab");
}

#[test]
fn it_names_the_fallback_address_on_failure() {
    assert_eq!(
        failure_text("me@example.com"),
        "Failed to send message. Please try again or email me directly at me@example.com."
    );
}
