use super::*;

#[test]
fn short_lowercase_password_fails_every_rule() {
    let checks = PasswordChecks::evaluate("abc");
    assert_eq!(checks, PasswordChecks::default());
    assert!(!checks.all_pass());
}

#[test]
fn strong_password_passes_every_rule() {
    let checks = PasswordChecks::evaluate("Abcdef12!");
    assert_eq!(
        checks,
        PasswordChecks { length: true, has_symbol: true, has_digit: true, has_upper: true }
    );
    assert!(checks.all_pass());
}

#[test]
fn length_bounds_are_inclusive() {
    assert!(PasswordChecks::evaluate("Abcde1!x").length);
    assert!(PasswordChecks::evaluate("Abcdefghijk1234!").length);
    assert!(!PasswordChecks::evaluate("Abcdefghijk12345!").length);
    assert!(!PasswordChecks::evaluate("Abcd1!x").length);
}

#[test]
fn whitespace_and_accents_count_as_symbols() {
    assert!(PasswordChecks::evaluate("a b").has_symbol);
    assert!(PasswordChecks::evaluate("contraseña").has_symbol);
}

#[test]
fn each_rule_is_independent() {
    let checks = PasswordChecks::evaluate("ABCDEFGHIJ");
    assert!(checks.length);
    assert!(checks.has_upper);
    assert!(!checks.has_digit);
    assert!(!checks.has_symbol);
}
