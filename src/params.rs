use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Default iteration count used by ASP.NET
pub const DEFAULT_ITERATIONS: u32 = 10000;

/// Default salt length in bytes used by ASP.NET
pub const DEFAULT_SALT_LENGTH: usize = 16;

/// Smallest accepted iteration count
pub const MIN_ITERATIONS: u32 = 1;

/// Largest accepted iteration count
pub const MAX_ITERATIONS: u32 = 100000;

/// Smallest accepted salt length in bytes
pub const MIN_SALT_LENGTH: usize = 1;

/// Largest accepted salt length in bytes
pub const MAX_SALT_LENGTH: usize = 64;

/// Parameters for creating new password hashes
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Params {
    iterations: u32,
    salt_length: usize,
}

impl Params {
    /// Create parameters with the given iteration count and the default salt length
    pub const fn new(iterations: u32) -> Self {
        Self {
            iterations,
            salt_length: DEFAULT_SALT_LENGTH,
        }
    }

    /// Replace the salt length
    pub const fn with_salt_length(self, salt_length: usize) -> Self {
        Self {
            iterations: self.iterations,
            salt_length,
        }
    }

    /// Accessor for the iteration count
    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    /// Accessor for the salt length
    pub fn salt_length(&self) -> usize {
        self.salt_length
    }

    /// Check the parameters against the ranges accepted when decoding a hashed value
    pub fn validate(&self) -> Result<()> {
        check_iterations(self.iterations)?;
        check_salt_length(self.salt_length)
    }

    /// Parse parameters from a URI query string such as
    /// `iterations=10000&salt_length=16`. Missing keys keep their defaults.
    pub fn from_uri_query(query: &str) -> Result<Self> {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut params = Self::default();
        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                "iterations" => {
                    params.iterations = value
                        .parse()
                        .map_err(err_map!(Parameter, "Invalid iteration count: {}", value))?;
                }
                "salt_length" => {
                    params.salt_length = value
                        .parse()
                        .map_err(err_map!(Parameter, "Invalid salt length: {}", value))?;
                }
                other => return Err(err_msg!(Parameter, "Unknown hash parameter: {}", other)),
            }
        }
        params.validate()?;
        Ok(params)
    }

    /// Format the parameters as a URI query string
    pub fn to_uri_query(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .append_pair("iterations", &self.iterations.to_string())
            .append_pair("salt_length", &self.salt_length.to_string())
            .finish()
    }
}

impl Default for Params {
    fn default() -> Self {
        Self::new(DEFAULT_ITERATIONS)
    }
}

pub(crate) fn check_iterations(iterations: u32) -> Result<()> {
    if (MIN_ITERATIONS..=MAX_ITERATIONS).contains(&iterations) {
        Ok(())
    } else {
        Err(err_msg!(
            Parameter,
            "Iteration count {} out of range",
            iterations
        ))
    }
}

pub(crate) fn check_salt_length(salt_length: usize) -> Result<()> {
    if (MIN_SALT_LENGTH..=MAX_SALT_LENGTH).contains(&salt_length) {
        Ok(())
    } else {
        Err(err_msg!(Parameter, "Salt length {} out of range", salt_length))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn defaults() {
        let params = Params::default();
        assert_eq!(params.iterations(), 10000);
        assert_eq!(params.salt_length(), 16);
        params.validate().expect("Error validating defaults");
    }

    #[test]
    fn validate_ranges() {
        for iterations in [1, 100, 100000] {
            Params::new(iterations).validate().expect("Error validating");
        }
        for iterations in [0, 100001, u32::MAX] {
            let err = Params::new(iterations).validate().unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Parameter);
        }
        for salt_length in [1, 16, 64] {
            Params::default()
                .with_salt_length(salt_length)
                .validate()
                .expect("Error validating");
        }
        for salt_length in [0, 65] {
            let err = Params::default()
                .with_salt_length(salt_length)
                .validate()
                .unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Parameter);
        }
    }

    #[test]
    fn uri_query() {
        let params = Params::from_uri_query("?iterations=5000&salt_length=32").unwrap();
        assert_eq!(params, Params::new(5000).with_salt_length(32));
        assert_eq!(params.to_uri_query(), "iterations=5000&salt_length=32");
        assert_eq!(Params::from_uri_query("").unwrap(), Params::default());
        assert_eq!(
            Params::from_uri_query("salt_length=8").unwrap(),
            Params::default().with_salt_length(8)
        );
    }

    #[test]
    fn uri_query_invalid() {
        for query in [
            "iterations=abc",
            "iterations=0",
            "salt_length=65",
            "salt_length=-1",
            "rounds=10",
        ] {
            let err = Params::from_uri_query(query).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Parameter, "query: {}", query);
        }
    }

    #[test]
    fn serde_json() {
        let params: Params = serde_json::from_str(r#"{"iterations": 20000}"#).unwrap();
        assert_eq!(params, Params::new(20000));
        let json = serde_json::to_string(&Params::default()).unwrap();
        assert_eq!(json, r#"{"iterations":10000,"salt_length":16}"#);
        assert!(serde_json::from_str::<Params>(r#"{"rounds": 1}"#).is_err());
    }
}
