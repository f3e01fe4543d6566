use crate::error::DomainError;

const VIN_LENGTH: usize = 17;
const CHECK_DIGIT_POSITION: usize = 8;
const WEIGHTS: [u32; VIN_LENGTH] = [8, 7, 6, 5, 4, 3, 2, 10, 0, 9, 8, 7, 6, 5, 4, 3, 2];

#[derive(Debug, Clone)]
pub struct Vin {
    code: String, // e.g., "1HGCM82633A004352"
}

impl Vin {
    pub fn new(code: &str) -> Result<Self, DomainError> {
        let code = code.trim().to_ascii_uppercase();

        if code.chars().count() != VIN_LENGTH {
            return Err(invalid_vin(format!(
                "VIN must be exactly {} characters, got {}",
                VIN_LENGTH,
                code.chars().count()
            )));
        }

        if let Some(invalid) = code.chars().find(|c| !is_vin_char(*c)) {
            return Err(invalid_vin(format!(
                "VIN contains invalid character '{}'",
                invalid
            )));
        }

        if !has_valid_check_digit(&code) {
            return Err(invalid_vin("VIN checksum failed".to_string()));
        }

        Ok(Self { code })
    }

    pub fn as_str(&self) -> &str {
        &self.code
    }

    /// World manufacturer identifier, positions 1-3.
    pub fn wmi(&self) -> &str {
        &self.code[..3]
    }

    /// Vehicle descriptor section, positions 4-9.
    pub fn vds(&self) -> &str {
        &self.code[3..9]
    }

    /// Vehicle identifier section, positions 10-17.
    pub fn vis(&self) -> &str {
        &self.code[9..]
    }
}

fn invalid_vin(description: String) -> DomainError {
    DomainError::new(400, "Invalid VIN".to_string(), description)
}

// Letters I, O and Q are never used in a VIN.
fn is_vin_char(c: char) -> bool {
    match c {
        'I' | 'O' | 'Q' => false,
        '0'..='9' | 'A'..='Z' => true,
        _ => false,
    }
}

fn transliterate(c: char) -> u32 {
    match c {
        '0'..='9' => c as u32 - '0' as u32,
        'A'..='H' => c as u32 - 'A' as u32 + 1,
        'J'..='N' => c as u32 - 'J' as u32 + 1,
        'P' => 7,
        'R' => 9,
        'S'..='Z' => c as u32 - 'S' as u32 + 2,
        _ => 0,
    }
}

/// Validates the check digit at position 9: weighted sum of the
/// transliterated characters, mod 11, where a remainder of 10 is written
/// as 'X'.
fn has_valid_check_digit(code: &str) -> bool {
    let sum: u32 = code
        .chars()
        .zip(WEIGHTS)
        .map(|(c, weight)| transliterate(c) * weight)
        .sum();

    let expected = match sum % 11 {
        10 => 'X',
        remainder => char::from_digit(remainder, 10).unwrap(),
    };

    code.chars().nth(CHECK_DIGIT_POSITION) == Some(expected)
}
