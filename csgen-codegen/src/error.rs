use thiserror::Error;

/// Errors raised while writing indented text.
///
/// These are structural failures: once one is returned, whatever is already
/// in the builder's buffer is incomplete and should be discarded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("indentation depth {depth} is out of range, at most {max} levels are supported")]
    IndentOutOfRange { depth: usize, max: usize },

    #[error("indent width {width} is out of range, expected 1 to {max} spaces")]
    IndentWidth { width: u8, max: u8 },

    #[error("closing block at indentation depth 0 has no matching open block")]
    UnbalancedBlock,
}
