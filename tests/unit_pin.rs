use markbook::utils::pin::{generate_pin, hash_pin, validate_pin, verify_pin};

#[test]
fn test_generate_pin_is_six_digits() {
    for _ in 0..100 {
        let pin = generate_pin();
        assert_eq!(pin.len(), 6);
        assert!(pin.bytes().all(|b| b.is_ascii_digit()), "bad pin: {}", pin);
    }
}

#[test]
fn test_generate_pin_varies() {
    let pins: std::collections::HashSet<String> = (0..100).map(|_| generate_pin()).collect();

    // A handful of collisions over 100 draws from a million values would be
    // astronomically unlikely.
    assert!(pins.len() > 90, "only {} distinct PINs", pins.len());
}

#[test]
fn test_generate_pin_digit_distribution() {
    let mut counts = [0usize; 10];
    for _ in 0..1000 {
        for b in generate_pin().bytes() {
            counts[(b - b'0') as usize] += 1;
        }
    }

    // 6000 digits, expected 600 per value; allow a wide statistical margin.
    for (digit, &count) in counts.iter().enumerate() {
        assert!(
            (400..=800).contains(&count),
            "digit {} appeared {} times in 6000",
            digit,
            count
        );
    }
}

#[test]
fn test_validate_pin_accepts_six_digits() {
    assert!(validate_pin("123456"));
    assert!(validate_pin("000000"));
    assert!(validate_pin("999999"));
}

#[test]
fn test_validate_pin_rejects_wrong_length() {
    assert!(!validate_pin(""));
    assert!(!validate_pin("12345"));
    assert!(!validate_pin("1234567"));
}

#[test]
fn test_validate_pin_rejects_non_digits() {
    assert!(!validate_pin("12345a"));
    assert!(!validate_pin(" 123456"));
    assert!(!validate_pin("123456 "));
    assert!(!validate_pin("12 456"));
    assert!(!validate_pin("-12345"));
    assert!(!validate_pin("+12345"));
}

#[test]
fn test_validate_pin_rejects_unicode_digits() {
    // Fullwidth "1" followed by five ASCII digits
    assert!(!validate_pin("\u{FF11}23456"));
}

#[test]
fn test_hash_and_verify_pin() {
    let pin = generate_pin();
    let hash = hash_pin(&pin).unwrap();

    assert_ne!(hash, pin);
    assert!(verify_pin(&pin, &hash).unwrap());

    let wrong = if pin == "000000" { "000001" } else { "000000" };
    assert!(!verify_pin(wrong, &hash).unwrap());
}
