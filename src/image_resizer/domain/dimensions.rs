use crate::domain::error::DomainError;

/// リサイズ先の寸法。ゼロは許可しない
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    /// The fixed target of the demo invocation.
    pub const THUMBNAIL: Dimensions = Dimensions {
        width: 16,
        height: 16,
    };

    pub fn new(width: u32, height: u32) -> Result<Self, DomainError> {
        if width == 0 || height == 0 {
            return Err(DomainError::InvalidInput(format!(
                "dimensions must be at least 1x1, got {}x{}",
                width, height
            )));
        }
        Ok(Self { width, height })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_accepts_positive_dimensions() {
        let dims = Dimensions::new(16, 16).unwrap();
        assert_eq!(dims.width, 16);
        assert_eq!(dims.height, 16);
    }

    #[test]
    fn test_new_rejects_zero_width_or_height() {
        assert!(Dimensions::new(0, 16).is_err());
        assert!(Dimensions::new(16, 0).is_err());
        assert!(Dimensions::new(0, 0).is_err());
    }

    #[test]
    fn test_thumbnail_constant_is_16x16() {
        assert_eq!(Dimensions::THUMBNAIL, Dimensions::new(16, 16).unwrap());
    }
}
