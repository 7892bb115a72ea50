use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    ParserError(#[from] nom::error::Error<String>),

    #[error(
        "the pattern literal has a wrong format, after parsing the input \"{0}\", the part \"{1}\" remain unparsable"
    )]
    InvalidLiteral(String, String),

    #[error("invalid regular expression flags \"{0}\"")]
    InvalidFlags(String),

    #[error("invalid regular expression /{pattern}/: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error(transparent)]
    InvalidDocument(#[from] serde_json::Error),
}
