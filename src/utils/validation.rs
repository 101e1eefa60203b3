use crate::utils::error::{Result, ServiceError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ServiceError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
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
        return Err(ServiceError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&value) {
        return Err(ServiceError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Allowed values: {}", allowed.join(", ")),
        });
    }
    Ok(())
}

/// A routing prefix is a plain path fragment: no query, fragment, whitespace
/// or router capture syntax (`{name}`, `:name`, `*rest`).
pub fn validate_route_prefix(field_name: &str, prefix: &str) -> Result<()> {
    if let Some(bad) = prefix
        .chars()
        .find(|c| c.is_whitespace() || matches!(c, '?' | '#' | '%' | '{' | '}'))
    {
        return Err(ServiceError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: prefix.to_string(),
            reason: format!("Route prefix cannot contain {:?}", bad),
        });
    }

    if prefix.contains("//") {
        return Err(ServiceError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: prefix.to_string(),
            reason: "Route prefix cannot contain empty segments".to_string(),
        });
    }

    if let Some(segment) = prefix
        .split('/')
        .find(|segment| segment.starts_with(':') || segment.starts_with('*'))
    {
        return Err(ServiceError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: prefix.to_string(),
            reason: format!("Route prefix segment {:?} would be a path capture", segment),
        });
    }

    Ok(())
}
