//! Error taxonomy shared by every layer: big integers, fields, curves,
//! pairings and the batch-delegation protocols.
//!
//! The primary interface is an ordinary `Result<T, Error>` propagated with
//! `?`. Alongside it we keep a thread-local mirror of the last error, in the
//! spirit of an `errno`-style register: a routine that cannot return a
//! `Result` (for instance a `Default`/operator-overload implementation that
//! falls back to the identity element on failure) still records what went
//! wrong so the caller can inspect it afterwards.
use std::cell::Cell;
use thiserror::Error as ThisError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(ThisError, Copy, Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// Allocation failed.
    #[error("allocation failed")]
    NoMemory,
    /// A routine was asked to operate at a precision it was not compiled
    /// for (e.g. a digit count mismatch between two big integers).
    #[error("insufficient precision")]
    NoPrecision,
    /// Platform-level I/O for the RNG seed source failed to open.
    #[error("seed source unavailable")]
    NoFile,
    /// Platform-level I/O for the RNG seed source failed to read.
    #[error("seed source read failed")]
    NoRead,
    /// An invariant was violated by caller input: non-invertible element,
    /// point not on the curve, wrong subgroup, malformed encoding.
    #[error("invalid input")]
    NoValid,
    /// The supplied buffer was too small, or an input buffer had the wrong
    /// length for the element being deserialised.
    #[error("buffer size mismatch")]
    NoBuffer,
    /// The requested field is not configured for the active parameter set.
    #[error("field not configured")]
    NoField,
    /// The requested curve is not configured for the active parameter set.
    #[error("curve not configured")]
    NoCurve,
    /// The compiled configuration does not support the requested operation.
    #[error("unsupported configuration")]
    NoConfig,
    /// An error was re-raised across a cleanup boundary.
    #[error("error propagated through cleanup")]
    Caught,
}

thread_local! {
    static LAST_ERROR: Cell<Option<Error>> = Cell::new(None);
}

/// Records `err` in the thread-local register and returns it, so call sites
/// can write `return Err(record(Error::NoValid))`.
pub fn record(err: Error) -> Error {
    LAST_ERROR.with(|cell| cell.set(Some(err)));
    err
}

/// Returns the last error recorded on this thread, if any.
pub fn last_error() -> Option<Error> {
    LAST_ERROR.with(|cell| cell.get())
}

/// Clears the thread-local error register. Every public entry point that
/// begins a fresh logical operation should call this first, mirroring the
/// `try` half of the taxonomy's `try/catch/finally` propagation policy.
pub fn clear_error() {
    LAST_ERROR.with(|cell| cell.set(None));
}

/// Runs `f`, clearing the error register beforehand and re-raising any
/// error that escapes as [`Error::Caught`] after recording the original
/// cause. Used at the public boundary of routines that must guarantee
/// their intermediates are released on every exit path, matching the
/// `finally`-style cleanup scope described for the core.
pub fn with_scope<T, F>(f: F) -> Result<T>
where
    F: FnOnce() -> Result<T>,
{
    clear_error();
    f().map_err(|e| {
        record(e);
        Error::Caught
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_and_clears() {
        clear_error();
        assert_eq!(last_error(), None);
        let _ = record(Error::NoValid);
        assert_eq!(last_error(), Some(Error::NoValid));
        clear_error();
        assert_eq!(last_error(), None);
    }

    #[test]
    fn with_scope_wraps_as_caught() {
        let result: Result<()> = with_scope(|| Err(Error::NoMemory));
        assert_eq!(result, Err(Error::Caught));
        assert_eq!(last_error(), Some(Error::NoMemory));
    }
}
