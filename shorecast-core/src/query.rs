use thiserror::Error;

/// User input classified for the weather endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupQuery {
    /// US ZIP code, optionally ZIP+4.
    PostalCode(String),
    /// Free-text place name.
    PlaceName(String),
}

impl LookupQuery {
    pub fn value(&self) -> &str {
        match self {
            LookupQuery::PostalCode(v) | LookupQuery::PlaceName(v) => v,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("Please enter a city name or ZIP code")]
    Empty,
}

/// Classify trimmed user input as a ZIP code or a place name.
///
/// Empty or whitespace-only input is rejected here, before any network
/// call is made.
pub fn classify(input: &str) -> Result<LookupQuery, QueryError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(QueryError::Empty);
    }

    if is_us_zip(trimmed) {
        Ok(LookupQuery::PostalCode(trimmed.to_string()))
    } else {
        Ok(LookupQuery::PlaceName(trimmed.to_string()))
    }
}

// `^\d{5}(-\d{4})?$`
fn is_us_zip(s: &str) -> bool {
    let bytes = s.as_bytes();
    match bytes.len() {
        5 => bytes.iter().all(u8::is_ascii_digit),
        10 => {
            bytes[..5].iter().all(u8::is_ascii_digit)
                && bytes[5] == b'-'
                && bytes[6..].iter().all(u8::is_ascii_digit)
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_digit_zip() {
        assert_eq!(
            classify("94103"),
            Ok(LookupQuery::PostalCode("94103".to_string()))
        );
    }

    #[test]
    fn zip_plus_four() {
        assert_eq!(
            classify("94103-1234"),
            Ok(LookupQuery::PostalCode("94103-1234".to_string()))
        );
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        assert_eq!(
            classify("  94103  "),
            Ok(LookupQuery::PostalCode("94103".to_string()))
        );
    }

    #[test]
    fn place_names() {
        for input in ["San Francisco", "9410", "941031", "94103-123", "9410a", "94-103-1234"] {
            assert_eq!(
                classify(input),
                Ok(LookupQuery::PlaceName(input.to_string())),
                "input: {input:?}"
            );
        }
    }

    #[test]
    fn numeric_looking_place_name_with_letters() {
        assert_eq!(
            classify("1234 Main St"),
            Ok(LookupQuery::PlaceName("1234 Main St".to_string()))
        );
    }

    #[test]
    fn empty_input_is_rejected() {
        assert_eq!(classify(""), Err(QueryError::Empty));
        assert_eq!(classify("   "), Err(QueryError::Empty));
        assert_eq!(classify("\t\n"), Err(QueryError::Empty));
    }

    #[test]
    fn validation_message() {
        assert_eq!(
            QueryError::Empty.to_string(),
            "Please enter a city name or ZIP code"
        );
    }
}
