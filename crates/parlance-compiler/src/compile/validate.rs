use crate::{CompileError, Pattern, Quantifier};

pub(super) fn validate<P>(pattern: &Pattern<P>) -> Result<(), CompileError> {
    match pattern {
        Pattern::Word(_) => Ok(()),
        Pattern::Seq(items) => items.iter().try_for_each(validate),
        Pattern::Alt(alternatives) => {
            if alternatives.is_empty() {
                return Err(CompileError::EmptyAlternation);
            }
            alternatives.iter().try_for_each(validate)
        }
        Pattern::Repeat { body, quantifier } => {
            if *quantifier != Quantifier::Optional && body.is_nullable() {
                return Err(CompileError::NullableRepetition {
                    pattern: pattern.to_string(),
                });
            }
            validate(body)
        }
        Pattern::Capture { name, body, .. } => {
            if !is_capture_name(name) {
                return Err(CompileError::InvalidCaptureName { name: name.clone() });
            }
            validate(body)
        }
    }
}

fn is_capture_name(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
