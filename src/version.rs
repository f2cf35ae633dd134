use serde::{Serialize, Deserialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, thiserror::Error)]
pub enum Error {
    #[error("Too few version numbers in string {0}")]
    TooFewNumbers(String),

    #[error("Too many version numbers in string {0}")]
    TooManyNumbers(String),

    #[error("Failed to parse u8 number from string {0}")]
    NumberParseError(String)
}

/// Game version in `major.minor.patch.edition` form
///
/// Missing trailing numbers are treated as zeros, so `5.7` and `5.7.0` are equal
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Version {
    pub major: u8,
    pub minor: u8,
    pub patch: u8,
    pub edition: u8
}

impl Version {
    #[inline]
    pub fn new(major: u8, minor: u8, patch: u8, edition: u8) -> Self {
        Self {
            major,
            minor,
            patch,
            edition
        }
    }
}

impl std::str::FromStr for Version {
    type Err = Error;

    fn from_str(version: &str) -> Result<Self, Self::Err> {
        let version = version.trim();

        if version.is_empty() {
            return Err(Error::TooFewNumbers(version.to_string()));
        }

        let numbers = version.split('.').collect::<Vec<_>>();

        if numbers.len() > 4 {
            return Err(Error::TooManyNumbers(version.to_string()));
        }

        let mut parsed = [0; 4];

        for (i, number) in numbers.iter().enumerate() {
            let Ok(number) = number.parse::<u8>() else {
                return Err(Error::NumberParseError(number.to_string()));
            };

            parsed[i] = number;
        }

        Ok(Self::new(parsed[0], parsed[1], parsed[2], parsed[3]))
    }
}

impl std::fmt::Display for Version {
    /// Edition is omitted when it's zero, so `5.7.0.0` is shown as `5.7.0`
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.edition == 0 {
            write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
        }

        else {
            write!(f, "{}.{}.{}.{}", self.major, self.minor, self.patch, self.edition)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_str() -> Result<(), Error> {
        assert_eq!("0.0.0.0".parse(), Ok(Version::new(0, 0, 0, 0)));
        assert_eq!("0.1.0.1".parse(), Ok(Version::new(0, 1, 0, 1)));
        assert_eq!("1.1.1.1".parse(), Ok(Version::new(1, 1, 1, 1)));

        assert_eq!("255.255.255.255".parse(), Ok(Version::new(255, 255, 255, 255)));

        assert_eq!("1.2.3.4".parse(), Ok(Version::new(1, 2, 3, 4)));
        assert_eq!("1.2.3".parse(),   Ok(Version::new(1, 2, 3, 0)));
        assert_eq!("1.2".parse(),     Ok(Version::new(1, 2, 0, 0)));
        assert_eq!("1".parse(),       Ok(Version::new(1, 0, 0, 0)));

        assert!("example string".parse::<Version>().is_err());
        assert!("1.2.3.4.5".parse::<Version>().is_err());
        assert!("256.256.256.256".parse::<Version>().is_err());
        assert!("".parse::<Version>().is_err());
        assert!("1..2".parse::<Version>().is_err());

        Ok(())
    }

    #[test]
    fn ordering() -> Result<(), Error> {
        // Lexicographic string order would put 5.10 before 5.9
        assert!("5.10.0".parse::<Version>()? > "5.9.0".parse::<Version>()?);
        assert_eq!("1.1".parse::<Version>()?, "1.1.0".parse::<Version>()?);

        Ok(())
    }

    #[test]
    fn display() {
        assert_eq!(Version::new(5, 7, 0, 0).to_string(), "5.7.0");
        assert_eq!(Version::new(5, 7, 0, 1).to_string(), "5.7.0.1");
    }
}
