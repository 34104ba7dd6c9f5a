//! Host address validation

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

/// Dotted-quad shape; octet ranges are checked separately
static HOST_IP_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3}$").unwrap());

/// Host validation errors
#[derive(Debug, Clone, PartialEq)]
pub enum HostValidationError {
    /// Host address is empty
    EmptyIp,
    /// Host address is not a dotted-quad IPv4 address
    InvalidIpFormat { ip: String },
    /// An octet exceeds 255
    InvalidOctet { ip: String },
}

impl fmt::Display for HostValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyIp => write!(f, "Host address cannot be empty"),
            Self::InvalidIpFormat { ip } => {
                write!(f, "Invalid host address '{}': expected dotted-quad IPv4", ip)
            }
            Self::InvalidOctet { ip } => {
                write!(f, "Invalid host address '{}': octet out of range", ip)
            }
        }
    }
}

impl std::error::Error for HostValidationError {}

/// Validate a host address
pub fn validate_host_ip(ip: &str) -> Result<(), HostValidationError> {
    if ip.is_empty() {
        return Err(HostValidationError::EmptyIp);
    }

    if !HOST_IP_PATTERN.is_match(ip) {
        return Err(HostValidationError::InvalidIpFormat { ip: ip.to_string() });
    }

    if ip.split('.').any(|octet| octet.parse::<u16>().unwrap_or(256) > 255) {
        return Err(HostValidationError::InvalidOctet { ip: ip.to_string() });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_host_ips() {
        assert!(validate_host_ip("127.0.0.1").is_ok());
        assert!(validate_host_ip("10.0.0.4").is_ok());
        assert!(validate_host_ip("255.255.255.255").is_ok());
    }

    #[test]
    fn test_empty_host_ip() {
        assert!(matches!(
            validate_host_ip(""),
            Err(HostValidationError::EmptyIp)
        ));
    }

    #[test]
    fn test_invalid_host_ip_format() {
        assert!(matches!(
            validate_host_ip("not-an-ip"),
            Err(HostValidationError::InvalidIpFormat { .. })
        ));
        assert!(matches!(
            validate_host_ip("10.0.0"),
            Err(HostValidationError::InvalidIpFormat { .. })
        ));
        assert!(matches!(
            validate_host_ip("10.0.0.4.5"),
            Err(HostValidationError::InvalidIpFormat { .. })
        ));
    }

    #[test]
    fn test_octet_out_of_range() {
        assert!(matches!(
            validate_host_ip("10.0.0.256"),
            Err(HostValidationError::InvalidOctet { .. })
        ));
        assert!(matches!(
            validate_host_ip("999.0.0.1"),
            Err(HostValidationError::InvalidOctet { .. })
        ));
    }
}
