use addrspec::{EmailAddress, EmailAddressError, Part, Validator, ValidatorOptions};
use rstest::rstest;

#[rstest]
#[case("john.doe", "example.com")]
#[case("\"a quoted string\"", "example.com")]
#[case("john", "[192.168.0.1]")]
#[case("user+tag", "sub.example.co.uk")]
#[case("(comment)john", "example.com")]
#[case("john(a (nested) comment)", "example.com")]
#[case("\"john..doe\"", "example.com")]
#[case("\"folded\r\n quote\"", "example.com")]
#[case("\"nul\\\0escaped\"", "example.com")]
#[case("john.\"doe\"", "example.com")]
#[case("john . doe", "example . com")]
#[case("john", "[IPv6:2001:db8::1]")]
fn test_email_address_accepts(#[case] local_part: &str, #[case] domain: &str) {
    let email = EmailAddress::new(local_part, domain).unwrap();
    assert_eq!(email.local_part(), local_part);
    assert_eq!(email.domain(), domain);
}

#[rstest]
#[case("john..doe", "example.com", Part::LocalPart)]
#[case("", "example.com", Part::LocalPart)]
#[case("jo\0hn", "example.com", Part::LocalPart)]
#[case(".john", "example.com", Part::LocalPart)]
#[case("john.", "example.com", Part::LocalPart)]
#[case("jo hn", "example.com", Part::LocalPart)]
#[case("john@doe", "example.com", Part::LocalPart)]
#[case("\"unterminated", "example.com", Part::LocalPart)]
#[case("(unclosed john", "example.com", Part::LocalPart)]
#[case("john", "", Part::Domain)]
#[case("john", "example..com", Part::Domain)]
#[case("john", "[192.168.0.1", Part::Domain)]
#[case("john", "[a]b]", Part::Domain)]
#[case("john", "exa mple.com", Part::Domain)]
fn test_email_address_rejects(#[case] local_part: &str, #[case] domain: &str, #[case] part: Part) {
    assert_eq!(
        EmailAddress::new(local_part, domain),
        Err(EmailAddressError::Format(part))
    );
}

#[rstest]
#[case("john.doe@example.com", "john.doe", "example.com")]
#[case("\"a@b\"@example.com", "\"a@b\"", "example.com")]
#[case("john@[a@b]", "john", "[a@b]")]
#[case("(me@home)john@example.com", "(me@home)john", "example.com")]
fn test_email_address_parse_whole(
    #[case] address: &str,
    #[case] local_part: &str,
    #[case] domain: &str,
) {
    let email: EmailAddress = address.parse().unwrap();
    assert_eq!(email.local_part(), local_part);
    assert_eq!(email.domain(), domain);
    assert_eq!(email.to_string(), address);
}

#[test]
fn test_email_address_strict_validator() {
    let strict = Validator::new().with_options(ValidatorOptions::strict());

    assert!(strict.validate("john.doe", "example.com").is_ok());
    assert!(strict.validate("\"a quoted string\"", "[192.168.0.1]").is_ok());
    assert!(strict.validate("john.\"doe\"", "example.com").is_err());
    assert!(strict.parse("john . doe@example.com").is_err());
    assert!(matches!(
        strict.validate(&"x".repeat(65), "example.com"),
        Err(EmailAddressError::TooLong { .. })
    ));
}

#[rstest]
#[case("\"a\\\0b\"", "example.com", Part::LocalPart)]
#[case("\"a\u{01}b\"", "example.com", Part::LocalPart)]
#[case("(\u{01})john", "example.com", Part::LocalPart)]
#[case(" \r\n \r\n john", "example.com", Part::LocalPart)]
#[case("john", "[a\u{7f}b]", Part::Domain)]
#[case("john", "[a\\]b]", Part::Domain)]
fn test_email_address_strict_rejects_obsolete(
    #[case] local_part: &str,
    #[case] domain: &str,
    #[case] part: Part,
) {
    let strict = Validator::new().with_options(ValidatorOptions::strict());

    assert!(EmailAddress::new(local_part, domain).is_ok());
    assert_eq!(
        strict.validate(local_part, domain),
        Err(EmailAddressError::Format(part))
    );
}

#[test]
fn test_email_address_deep_comment_nesting() {
    let open = "(".repeat(100_000);
    assert_eq!(
        EmailAddress::new(&open, "example.com"),
        Err(EmailAddressError::Format(Part::LocalPart))
    );

    let closed = format!("{open}{}john", ")".repeat(100_000));
    assert_eq!(
        EmailAddress::new(&closed, "example.com"),
        Err(EmailAddressError::Format(Part::LocalPart))
    );
    assert!(format!("{closed}@example.com").parse::<EmailAddress>().is_err());

    let strict = Validator::new().with_options(ValidatorOptions::strict());
    assert!(strict.validate("john", &format!("example.com{open}")).is_err());
}

#[test]
fn test_email_address_deep_nesting_on_small_stack() {
    let handle = std::thread::Builder::new()
        .stack_size(1024 * 1024)
        .spawn(|| {
            let malformed = format!("{}x", "(a".repeat(2000));
            EmailAddress::new(&malformed, "example.com")
        })
        .unwrap();

    assert_eq!(
        handle.join().unwrap(),
        Err(EmailAddressError::Format(Part::LocalPart))
    );
}

#[test]
fn test_email_address_usable_across_threads() {
    let handles: Vec<_> = ["a.b", "c.d", "e.f", "g.h"]
        .into_iter()
        .map(|local| std::thread::spawn(move || EmailAddress::new(local, "example.com")))
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap().is_ok());
    }
}
