//! Indentation configuration for code generation.

use crate::RenderError;

/// Number of indentation levels supported, depths `0..MAX_INDENT_DEPTH`.
pub const MAX_INDENT_DEPTH: usize = 8;

/// Widest supported [`Indent::Spaces`] width.
pub const MAX_INDENT_WIDTH: u8 = 16;

const SPACES: &str = "                ";

/// Indentation style for generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// Spaces with the specified width (e.g., 2 or 4).
    ///
    /// Widths outside `1..=MAX_INDENT_WIDTH` are rejected with
    /// [`RenderError::IndentWidth`] as soon as indentation is needed.
    Spaces(u8),
    /// Tab character.
    Tab,
}

impl Indent {
    /// 4-space indentation, the usual Visual Studio setting.
    pub const SPACES_4: Self = Self::Spaces(4);

    /// Tab indentation (default).
    pub const TAB: Self = Self::Tab;

    /// Convert to the string representation for one indent level.
    pub fn as_str(&self) -> Result<&'static str, RenderError> {
        match *self {
            Self::Spaces(n) if (1..=MAX_INDENT_WIDTH).contains(&n) => Ok(&SPACES[..n as usize]),
            Self::Spaces(width) => Err(RenderError::IndentWidth {
                width,
                max: MAX_INDENT_WIDTH,
            }),
            Self::Tab => Ok("\t"),
        }
    }

    /// The full prefix for `depth` levels of indentation.
    pub fn prefix(&self, depth: usize) -> Result<String, RenderError> {
        let unit = self.as_str()?;
        if depth >= MAX_INDENT_DEPTH {
            return Err(RenderError::IndentOutOfRange {
                depth,
                max: MAX_INDENT_DEPTH - 1,
            });
        }
        Ok(unit.repeat(depth))
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::TAB
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent_as_str() {
        assert_eq!(Indent::Spaces(2).as_str(), Ok("  "));
        assert_eq!(Indent::Spaces(4).as_str(), Ok("    "));
        assert_eq!(Indent::Spaces(16).as_str().map(str::len), Ok(16));
        assert_eq!(Indent::Tab.as_str(), Ok("\t"));
    }

    #[test]
    fn test_width_out_of_range() {
        assert_eq!(
            Indent::Spaces(0).as_str(),
            Err(RenderError::IndentWidth { width: 0, max: 16 })
        );
        assert_eq!(
            Indent::Spaces(17).prefix(1),
            Err(RenderError::IndentWidth { width: 17, max: 16 })
        );
        assert!(Indent::Spaces(200).prefix(0).is_err());
    }

    #[test]
    fn test_prefix() {
        assert_eq!(Indent::Tab.prefix(0).unwrap(), "");
        assert_eq!(Indent::Tab.prefix(3).unwrap(), "\t\t\t");
        assert_eq!(Indent::Spaces(2).prefix(2).unwrap(), "    ");
        assert_eq!(Indent::Tab.prefix(7).unwrap(), "\t".repeat(7));
    }

    #[test]
    fn test_prefix_out_of_range() {
        assert_eq!(
            Indent::Tab.prefix(MAX_INDENT_DEPTH),
            Err(RenderError::IndentOutOfRange { depth: 8, max: 7 })
        );
    }

    #[test]
    fn test_default() {
        assert_eq!(Indent::default(), Indent::Tab);
    }
}
