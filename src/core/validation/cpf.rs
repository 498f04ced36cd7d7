//! CPF checksum validation
//!
//! A CPF is an 11-digit Brazilian national identity number whose last two
//! digits are check digits computed from the preceding ones by weighted
//! sums. Validation is a pure function: no lookups, no side effects.

/// Strips everything but ASCII digits from a CPF as typed
///
/// Form input arrives punctuated (`529.982.247-25`); the store keeps and
/// compares the normalized form.
pub fn normalize_cpf(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Validates a CPF, tolerating punctuation in the input
///
/// Rules:
/// - exactly 11 digits after stripping non-digits
/// - not all digits identical (e.g. `111.111.111-11` is invalid despite
///   satisfying the checksum)
/// - both check digits match the weighted-sum computation: digit 10 uses
///   weights 10 down to 2 over the first 9 digits, digit 11 uses weights
///   11 down to 2 over the first 10; in each case the check digit is
///   `(sum * 10) % 11`, with remainders 10 and 11 mapped to 0
pub fn validate_cpf(input: &str) -> bool {
    let cpf = normalize_cpf(input);

    if cpf.len() != 11 {
        return false;
    }

    let digits: Vec<u32> = cpf.chars().filter_map(|c| c.to_digit(10)).collect();

    let first = digits[0];
    if digits.iter().all(|&d| d == first) {
        return false;
    }

    check_digit(&digits[..9]) == digits[9] && check_digit(&digits[..10]) == digits[10]
}

/// Computes a check digit over `digits` with weights `len+1` down to 2
fn check_digit(digits: &[u32]) -> u32 {
    let top = (digits.len() + 1) as u32;
    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, &d)| d * (top - i as u32))
        .sum();

    let remainder = (sum * 10) % 11;
    if remainder >= 10 {
        0
    } else {
        remainder
    }
}
