use crate::mask::MaskError;

#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("unknown mask: '{0}'")]
    UnknownMask(String),
    #[error("mask '{0}' must set either 'pattern' or both 'short' and 'long'")]
    IncompleteEntry(String),
    #[error("mask '{name}': {source}")]
    Pattern {
        name: String,
        #[source]
        source: MaskError,
    },
}
