//! CPF (Cadastro de Pessoas Físicas) checksum validation.
//!
//! A CPF is 11 decimal digits: a 9-digit base followed by two mod-11 check
//! digits. Only the arithmetic is checked here, not whether the number was
//! ever issued.

const CPF_LENGTH: usize = 11;
const BASE_LENGTH: usize = 9;

/// Formatting separators accepted in a CPF candidate, e.g. `529.982.247-25`.
const SEPARATORS: [char; 2] = ['.', '-'];

/// Removes every `.` and `-` from the candidate.
pub fn normalize(input: &str) -> String {
    input.chars().filter(|c| !SEPARATORS.contains(c)).collect()
}

/// Returns `true` iff `input`, once stripped of separators, is 11 ASCII
/// digits whose last two digits match the mod-11 check digits of the first 9.
///
/// Repeated-digit sequences such as `11111111111` are not special-cased.
pub fn is_valid_cpf(input: &str) -> bool {
    let Some(digits) = parse_digits::<CPF_LENGTH>(&normalize(input)) else {
        return false;
    };

    let mut base = [0u8; BASE_LENGTH];
    base.copy_from_slice(&digits[..BASE_LENGTH]);

    check_digits(&base) == [digits[9], digits[10]]
}

/// Derives both check digits for a 9-digit base (values `0..=9`).
pub fn check_digits(base: &[u8; BASE_LENGTH]) -> [u8; 2] {
    let first = check_digit(base);

    let mut extended = [0u8; BASE_LENGTH + 1];
    extended[..BASE_LENGTH].copy_from_slice(base);
    extended[BASE_LENGTH] = first;

    [first, check_digit(&extended)]
}

/// Completes a 9-digit base (separators allowed) into an 11-digit CPF.
pub fn with_check_digits(base: &str) -> Option<String> {
    let base = parse_digits::<BASE_LENGTH>(&normalize(base))?;
    let [first, second] = check_digits(&base);

    Some(
        base.iter()
            .chain([first, second].iter())
            .map(|d| char::from(b'0' + d))
            .collect(),
    )
}

/// Weights run from `len + 1` down to 2; a remainder below 2 maps to 0.
fn check_digit(digits: &[u8]) -> u8 {
    let top_weight = digits.len() as u32 + 1;
    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, &d)| u32::from(d) * (top_weight - i as u32))
        .sum();

    match sum % 11 {
        r if r < 2 => 0,
        r => (11 - r) as u8,
    }
}

fn parse_digits<const N: usize>(s: &str) -> Option<[u8; N]> {
    let bytes = s.as_bytes();
    if bytes.len() != N || !bytes.iter().all(u8::is_ascii_digit) {
        return None;
    }

    let mut digits = [0u8; N];
    for (slot, b) in digits.iter_mut().zip(bytes) {
        *slot = b - b'0';
    }
    Some(digits)
}
