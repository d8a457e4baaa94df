/// Result type for our [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Error that occured while operating an AES-ICM cipher context.
///
/// This enum is `#[non_exhaustive]`, so we reserve the right to add more variants and don't
/// consider this to break backwards compatibility.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// A parameter was invalid, such as an unsupported key length.
    #[error("bad parameter: {0}")]
    BadParameter(&'static str),
    /// Storage for the cipher context could not be obtained.
    ///
    /// The global Rust allocator aborts the process instead of failing, so contexts allocated by
    /// this crate never report this error; it is part of the API for callers that wrap contexts
    /// in their own fallible storage.
    #[error("could not allocate cipher state")]
    AllocationFailure,
    /// The block cipher engine could not be initialized with the key and counter.
    #[error("cipher engine initialization failed: {0}")]
    OperationFailed(&'static str),
    /// The block cipher failed while producing the keystream.
    #[error("cipher operation failed: {0}")]
    CipherOperationFailed(&'static str),
    /// A self-test of the algorithm produced unexpected output.
    #[error("self-test of {algo_name} failed: {reason}")]
    AlgoFailed {
        /// Name of the algorithm that failed.
        algo_name: &'static str,
        /// What did not match.
        reason: &'static str,
    },
}
