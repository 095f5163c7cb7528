use crate::utils::error::{F1Error, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(F1Error::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(F1Error::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(F1Error::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

/// 年份字串必須是四位數字
pub fn validate_year(field_name: &str, value: &str) -> Result<()> {
    if value.len() != 4 || !value.chars().all(|c| c.is_ascii_digit()) {
        return Err(F1Error::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Year must be exactly four digits".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(F1Error::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("base_url", "https://www.formula1.com").is_ok());
        assert!(validate_url("base_url", "http://127.0.0.1:8080").is_ok());
        assert!(validate_url("base_url", "").is_err());
        assert!(validate_url("base_url", "formula1.com").is_err());
        assert!(validate_url("base_url", "ftp://formula1.com").is_err());
    }

    #[test]
    fn test_validate_year() {
        assert!(validate_year("default_year", "2024").is_ok());
        assert!(validate_year("default_year", "24").is_err());
        assert!(validate_year("default_year", "20a4").is_err());
        assert!(validate_year("default_year", "+024").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("timeout_seconds", 30, 1, 300).is_ok());
        assert!(validate_range("timeout_seconds", 0, 1, 300).is_err());
        assert!(validate_range("timeout_seconds", 301, 1, 300).is_err());
    }
}
