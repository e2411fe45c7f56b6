use rand::Rng;

/// Country codes and BBAN lengths from the ISO 13616 registry
///
/// The BBAN is generated as digits only; together with the country code and
/// computed check digits this yields the registered IBAN length per country.
const IBAN_COUNTRIES: &[(&str, usize)] = &[
    ("AT", 16),
    ("BE", 12),
    ("CH", 17),
    ("DE", 18),
    ("ES", 20),
    ("FR", 23),
    ("GB", 18),
    ("IT", 23),
    ("NL", 14),
    ("PT", 21),
];

/// Generate a random IBAN with valid mod-97 check digits
pub fn iban<R: Rng + ?Sized>(rng: &mut R) -> String {
    let (country, bban_len) = IBAN_COUNTRIES[rng.random_range(0..IBAN_COUNTRIES.len())];

    let bban: String = (0..bban_len)
        .map(|_| char::from(b'0' + rng.random_range(0..10u8)))
        .collect();

    let check = check_digits(country, &bban);

    format!("{}{:02}{}", country, check, bban)
}

/// Compute the two ISO 13616 check digits for a country code and BBAN
///
/// The country code and "00" are moved behind the BBAN, letters are expanded
/// to numbers (A=10..Z=35), and the check digits make the resulting number
/// congruent to 1 modulo 97.
fn check_digits(country: &str, bban: &str) -> u32 {
    let rearranged = format!("{}{}00", bban, country);
    98 - mod_97(&rearranged)
}

/// Verify IBAN shape and checksum
pub fn is_valid_iban(candidate: &str) -> bool {
    let len = candidate.len();
    if !(15..=34).contains(&len) {
        return false;
    }

    let bytes = candidate.as_bytes();
    let shape_ok = bytes[..2].iter().all(|b| b.is_ascii_uppercase())
        && bytes[2..4].iter().all(|b| b.is_ascii_digit())
        && bytes[4..].iter().all(|b| b.is_ascii_alphanumeric());
    if !shape_ok {
        return false;
    }

    let (head, tail) = candidate.split_at(4);
    let rearranged = format!("{}{}", tail, head);
    mod_97(&rearranged) == 1
}

/// Remainder of the letter-expanded number modulo 97
///
/// Digits are folded in one at a time so arbitrarily long IBANs never need
/// big-integer arithmetic.
fn mod_97(input: &str) -> u32 {
    let mut rem: u32 = 0;
    for ch in input.chars() {
        if let Some(digit) = ch.to_digit(10) {
            rem = (rem * 10 + digit) % 97;
        } else {
            let value = u32::from(ch.to_ascii_uppercase() as u8 - b'A') + 10;
            rem = (rem * 100 + value) % 97;
        }
    }
    rem
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ibans_are_valid() {
        let mut rng = rand::rng();
        for _ in 0..100 {
            let iban = iban(&mut rng);
            assert!(is_valid_iban(&iban), "Generated invalid IBAN: {}", iban);
        }
    }

    #[test]
    fn test_known_iban_validates() {
        // Reference example from the IBAN registry documentation
        assert!(is_valid_iban("GB82WEST12345698765432"));
    }

    #[test]
    fn test_corrupted_check_digits_fail() {
        assert!(!is_valid_iban("GB83WEST12345698765432"));
    }

    #[test]
    fn test_malformed_candidates_fail() {
        assert!(!is_valid_iban(""));
        assert!(!is_valid_iban("GB82"));
        assert!(!is_valid_iban("gb82WEST12345698765432"));
        assert!(!is_valid_iban("G182WEST12345698765432"));
        assert!(!is_valid_iban("GB82WEST1234569876543!"));
    }

    #[test]
    fn test_generated_length_matches_country() {
        let mut rng = rand::rng();
        for _ in 0..100 {
            let iban = iban(&mut rng);
            let country = &iban[..2];
            let expected = IBAN_COUNTRIES
                .iter()
                .find(|(code, _)| *code == country)
                .map(|(_, bban_len)| bban_len + 4)
                .expect("country from our own table");
            assert_eq!(iban.len(), expected, "Wrong length for {}", iban);
        }
    }
}
