use super::*;

fn form(role: &str) -> RegistrationForm {
    RegistrationForm {
        email: " new@example.com ".to_owned(),
        password: "secret".to_owned(),
        confirm_password: "secret".to_owned(),
        role: role.to_owned(),
        rank: " Sergeant ".to_owned(),
        details: "Precinct 9".to_owned(),
    }
}

#[test]
fn citizen_registration_drops_officer_fields() {
    let request = build_registration(&form("citizen")).unwrap();
    assert_eq!(request.email, "new@example.com");
    assert_eq!(request.role, Role::Citizen);
    assert_eq!(request.rank, None);
    assert_eq!(request.details, None);
}

#[test]
fn officer_registration_keeps_trimmed_rank_and_details() {
    let request = build_registration(&form("Law Enforcement")).unwrap();
    assert_eq!(request.role, Role::LawEnforcement);
    assert_eq!(request.rank.as_deref(), Some("Sergeant"));
    assert_eq!(request.details.as_deref(), Some("Precinct 9"));
}

#[test]
fn mismatched_passwords_rejected() {
    let mut f = form("citizen");
    f.confirm_password = "other".to_owned();
    assert_eq!(build_registration(&f), Err("Passwords do not match"));
}

#[test]
fn missing_role_rejected() {
    assert_eq!(build_registration(&form("")), Err("Role is required"));
    assert_eq!(build_registration(&form("detective")), Err("Role is required"));
}

#[test]
fn admin_self_registration_rejected() {
    assert_eq!(
        build_registration(&form("admin")),
        Err("Invalid role. Must be citizen or law enforcement.")
    );
}

#[test]
fn missing_email_rejected() {
    let mut f = form("citizen");
    f.email = "   ".to_owned();
    assert_eq!(build_registration(&f), Err("Email is required"));
}
