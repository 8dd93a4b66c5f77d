use thiserror::Error;

/// Errors reported by the fallible similarity measures.
///
/// A failed fuzzy match is *not* an error — it is the `None` branch of
/// [`fuzzy_match`](crate::fuzzy::fuzzy_match). These variants cover genuine
/// misuse (length-sensitive measures fed unequal inputs) and failures of
/// injected collaborators such as embedding models.
#[derive(Debug, Error)]
pub enum MeasureError {
    /// A measure that requires equal-length inputs received unequal lengths.
    #[error("inputs must be of equal length ({left} != {right})")]
    LengthMismatch {
        /// Character count of the left input.
        left: usize,
        /// Character count of the right input.
        right: usize,
    },

    /// An injected embedding model could not produce a vector for a word.
    #[error("embedding failed for {word:?}: {reason}")]
    Embedding {
        /// The word that could not be embedded.
        word: String,
        /// Model-specific failure description.
        reason: String,
    },

    /// Two embedding vectors of different dimensionality were compared.
    #[error("embedding dimensions differ ({left} != {right})")]
    DimensionMismatch {
        /// Dimension of the left vector.
        left: usize,
        /// Dimension of the right vector.
        right: usize,
    },
}
