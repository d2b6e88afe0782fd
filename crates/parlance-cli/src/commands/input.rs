//! Reading pre-tagged words from the command line or stdin.

use std::io::Read;

use parlance_core::TaggedWord;
use parlance_lib::{PretaggedTagger, Tagger, TaggingError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InputError {
    #[error("cannot read stdin: {0}")]
    Stdin(#[from] std::io::Error),

    #[error("no words given")]
    Empty,

    #[error(transparent)]
    Tagging(#[from] TaggingError),
}

/// The argument text, or all of stdin when absent. Blank input is an error.
pub fn read_text(arg: Option<&str>) -> Result<String, InputError> {
    let text = match arg {
        Some(text) => text.to_owned(),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    if text.trim().is_empty() {
        return Err(InputError::Empty);
    }
    Ok(text)
}

pub fn read_words(arg: Option<&str>) -> Result<Vec<TaggedWord>, InputError> {
    let text = read_text(arg)?;
    Ok(PretaggedTagger.tag(&text)?)
}
