//! Verification-code translation between processor and Kount code spaces.
//!
//! Payment processors report AVS/CVV results in the combined code space
//! described at <http://www.emsecommerce.net/avs_cvv2_response_codes.htm>;
//! Kount RIS only understands its own three-letter `M`/`N`/`X` space.
//! These total lookup functions bridge the two. Any code not in a table,
//! including the empty string, maps to `X` ("not checked"), never to an
//! error.

/// Converts a combined AVS code to the RIS street-address match (`AVST`).
#[must_use]
pub fn avs_to_avst(avs: &str) -> char {
    match avs {
        // US
        "X" | "Y" | "A" => 'M',
        "W" | "Z" | "N" | "E" => 'N',
        // International
        "D" | "M" | "B" => 'M',
        "P" | "C" | "I" => 'N',
        _ => 'X',
    }
}

/// Converts a combined AVS code to the RIS postal-code match (`AVSZ`).
#[must_use]
pub fn avs_to_avsz(avs: &str) -> char {
    match avs {
        // US
        "X" | "Y" | "W" | "Z" => 'M',
        "A" | "N" => 'N',
        // International
        "D" | "M" | "P" => 'M',
        "B" | "C" | "I" => 'N',
        _ => 'X',
    }
}

/// Converts a CVV result code to the RIS CVV match (`CVVR`).
#[must_use]
pub fn cvv_to_cvvr(cvv: &str) -> char {
    match cvv {
        "M" => 'M',
        "N" => 'N',
        _ => 'X',
    }
}
