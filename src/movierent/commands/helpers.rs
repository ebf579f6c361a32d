use crate::commands::CmdMessage;
use crate::error::{ConstraintKind, RentalError, Result};
use tracing::warn;

/// Splits a store result into the value, a rejection message for constraint
/// violations, or a propagated error for everything else.
pub fn recover_constraint<T>(
    outcome: Result<T>,
    describe: impl FnOnce(ConstraintKind) -> Option<String>,
) -> Result<std::result::Result<T, CmdMessage>> {
    match outcome {
        Ok(value) => Ok(Ok(value)),
        Err(RentalError::Constraint { kind, message }) => {
            warn!(%kind, %message, "write rejected");
            let text = describe(kind).unwrap_or_else(|| format!("Rejected by the store: {message}"));
            Ok(Err(CmdMessage::error(text)))
        }
        Err(e) => Err(e),
    }
}
