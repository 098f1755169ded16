use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Registered sex, using the profile form's wire codes (0 female, 1 male)
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(i16)]
pub enum Sex {
    #[display("female")]
    Female = 0,
    #[display("male")]
    Male = 1,
}

impl Sex {
    #[inline]
    pub const fn id(&self) -> i16 {
        *self as i16
    }

    #[inline]
    pub fn from_id(id: i16) -> Option<Self> {
        match id {
            0 => Some(Sex::Female),
            1 => Some(Sex::Male),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_codes() {
        assert_eq!(Sex::Female.id(), 0);
        assert_eq!(Sex::Male.id(), 1);
        assert_eq!(Sex::from_id(0), Some(Sex::Female));
        assert_eq!(Sex::from_id(1), Some(Sex::Male));
        assert_eq!(Sex::from_id(2), None);
    }
}
