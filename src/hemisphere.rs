use std::fmt::Display;

use crate::Error;

/// The hemisphere a UTM coordinate's northing is measured in. Southern
/// northings carry a false northing of 10 000 km so they stay positive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Hemisphere {
    Northern,
    Southern,
}

impl Hemisphere {
    /// Hemisphere of a latitude: southern only for strictly negative values.
    ///
    /// # Example
    /// ```
    /// use utmconvert::Hemisphere;
    ///
    /// assert_eq!(Hemisphere::from_latitude(0.0), Hemisphere::Northern);
    /// assert_eq!(Hemisphere::from_latitude(-0.5), Hemisphere::Southern);
    /// ```
    pub fn from_latitude(lat: f64) -> Hemisphere {
        if lat < 0. { Hemisphere::Southern } else { Hemisphere::Northern }
    }

    /// Reads a hemisphere letter (`N` or `S`) as used in hemisphere notation.
    pub fn from_letter(letter: char) -> Option<Hemisphere> {
        match letter {
            'N' => Some(Hemisphere::Northern),
            'S' => Some(Hemisphere::Southern),
            _ => None,
        }
    }

    pub fn letter(self) -> char {
        match self {
            Hemisphere::Northern => 'N',
            Hemisphere::Southern => 'S',
        }
    }

    pub fn is_north(self) -> bool {
        self == Hemisphere::Northern
    }

    pub fn false_northing(self) -> f64 {
        match self {
            Hemisphere::Northern => 0.,
            Hemisphere::Southern => 10_000_000.,
        }
    }

    /// Smallest northing accepted by strict construction.
    pub fn min_northing(self) -> f64 {
        match self {
            Hemisphere::Northern => 0.,
            Hemisphere::Southern => 1_100_000.,
        }
    }

    /// Largest northing accepted by strict construction.
    pub fn max_northing(self) -> f64 {
        match self {
            Hemisphere::Northern => 9_334_080.,
            Hemisphere::Southern => 10_000_000.,
        }
    }

    pub fn contains_northing(self, northing: f64) -> bool {
        (self.min_northing()..=self.max_northing()).contains(&northing)
    }

    /// Checks that `northing` lies in this hemisphere's valid window.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidNorthing`] if it does not.
    ///
    /// # Usage
    ///
    /// ```
    /// use utmconvert::Hemisphere;
    ///
    /// assert!(Hemisphere::Northern.validate_northing(6_555_976.0).is_ok());
    /// assert!(Hemisphere::Southern.validate_northing(655_576.0).is_err());
    /// ```
    pub fn validate_northing(self, northing: f64) -> Result<(), Error> {
        if self.contains_northing(northing) {
            Ok(())
        } else {
            Err(Error::InvalidNorthing {
                northing,
                hemisphere: self,
                min: self.min_northing(),
                max: self.max_northing(),
            })
        }
    }
}

impl Display for Hemisphere {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Hemisphere::Northern => write!(f, "Northern"),
            Hemisphere::Southern => write!(f, "Southern"),
        }
    }
}
