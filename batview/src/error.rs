use core::fmt::Debug;

pub type Result<T> = anyhow::Result<T>;
pub type Error = anyhow::Error;

/// Display drivers rarely implement `Display` for their errors, so the
/// render path goes through this one.
pub fn debug(e: impl Debug) -> Error {
    anyhow::anyhow!("Error: {:?}", e)
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use crate::recorder::RecorderFull;

    use super::*;

    #[test]
    fn wraps_draw_errors() {
        assert_eq!(debug(RecorderFull).to_string(), "Error: RecorderFull");
    }
}
