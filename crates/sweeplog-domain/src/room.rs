//! Room module - the physical spaces that get cleaned

use std::fmt;

/// A room with fixed floor dimensions
///
/// Rooms are keyed by `id`, which is case-sensitive and expected to be unique
/// within a record set. Dimensions are in whatever unit the source data uses;
/// the reports call it square feet.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Room {
    /// Unique, case-sensitive room identifier
    pub id: String,

    /// Floor length (positive)
    pub length: u32,

    /// Floor width (positive)
    pub width: u32,
}

impl Room {
    /// Create a new room
    ///
    /// # Examples
    ///
    /// ```
    /// use sweeplog_domain::Room;
    ///
    /// let kitchen = Room::new("Kitchen", 10, 12).unwrap();
    /// assert_eq!(kitchen.area(), 120);
    ///
    /// assert!(Room::new("Closet", 0, 4).is_err());
    /// ```
    pub fn new(id: impl Into<String>, length: u32, width: u32) -> Result<Self, String> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err("Room id must not be empty".to_string());
        }
        if length == 0 || width == 0 {
            return Err(format!(
                "Room '{}' must have positive dimensions (got {}x{})",
                id, length, width
            ));
        }

        Ok(Self { id, length, width })
    }

    /// Floor area (length × width)
    pub fn area(&self) -> u64 {
        u64::from(self.length) * u64::from(self.width)
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}x{})", self.id, self.length, self.width)
    }
}
