use super::*;

#[test]
fn validate_register_input_trims_name_and_email() {
    assert_eq!(
        validate_register_input(" Ada ", " ada@b.com", "pw "),
        Ok(CredentialRequest::Register {
            name: "Ada".to_owned(),
            email: "ada@b.com".to_owned(),
            password: "pw ".to_owned(),
        })
    );
}

#[test]
fn validate_register_input_requires_every_field() {
    for (name, email, password) in [("", "a@b.com", "pw"), ("Ada", " ", "pw"), ("Ada", "a@b.com", "")] {
        assert_eq!(
            validate_register_input(name, email, password),
            Err("All fields are required"),
            "{name:?} {email:?} {password:?}"
        );
    }
}
