use std::result;
use thiserror::Error;

pub type Result<T> = result::Result<T, ChartSpecError>;

#[derive(Clone, Debug, Default)]
pub struct ErrorContext {
    pub contexts: Vec<String>,
}

impl std::fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for (i, context) in self.contexts.iter().enumerate() {
            writeln!(f, "    Context[{i}]: {context}")?;
        }
        Ok(())
    }
}

#[derive(Error, Debug)]
pub enum ChartSpecError {
    #[error("Configuration error: {0}\n{1}")]
    ConfigurationError(String, ErrorContext),

    #[error("Specification error: {0}\n{1}")]
    SpecificationError(String, ErrorContext),

    #[error("Internal error: {0}\n{1}")]
    InternalError(String, ErrorContext),

    #[error("Serde JSON Error: {0}\n{1}")]
    SerdeJsonError(serde_json::Error, ErrorContext),
}

impl ChartSpecError {
    /// Append a new context level to the error
    pub fn with_context<S, F>(self, context_fn: F) -> Self
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        use ChartSpecError::*;
        match self {
            ConfigurationError(msg, mut context) => {
                context.contexts.push(context_fn().into());
                ChartSpecError::ConfigurationError(msg, context)
            }
            SpecificationError(msg, mut context) => {
                context.contexts.push(context_fn().into());
                ChartSpecError::SpecificationError(msg, context)
            }
            InternalError(msg, mut context) => {
                context.contexts.push(context_fn().into());
                ChartSpecError::InternalError(msg, context)
            }
            SerdeJsonError(err, mut context) => {
                context.contexts.push(context_fn().into());
                ChartSpecError::SerdeJsonError(err, context)
            }
        }
    }

    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::ConfigurationError(message.into(), Default::default())
    }

    pub fn specification<S: Into<String>>(message: S) -> Self {
        Self::SpecificationError(message.into(), Default::default())
    }

    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::InternalError(message.into(), Default::default())
    }

    /// Duplicate error. Not a precise Clone because serde_json::Error isn't Clone;
    /// that variant is converted to an internal error
    pub fn duplicate(&self) -> Self {
        use ChartSpecError::*;
        match self {
            ConfigurationError(msg, context) => {
                ChartSpecError::ConfigurationError(msg.clone(), context.clone())
            }
            SpecificationError(msg, context) => {
                ChartSpecError::SpecificationError(msg.clone(), context.clone())
            }
            InternalError(msg, context) => {
                ChartSpecError::InternalError(msg.clone(), context.clone())
            }
            SerdeJsonError(err, context) => {
                ChartSpecError::InternalError(err.to_string(), context.clone())
            }
        }
    }
}

pub trait ResultWithContext<R> {
    fn with_context<S, F>(self, context_fn: F) -> Result<R>
    where
        F: FnOnce() -> S,
        S: Into<String>;
}

impl<R, E> ResultWithContext<R> for result::Result<R, E>
where
    E: Into<ChartSpecError>,
{
    fn with_context<S, F>(self, context_fn: F) -> Result<R>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        match self {
            Ok(val) => Ok(val),
            Err(err) => {
                let chart_spec_error: ChartSpecError = err.into();
                Err(chart_spec_error.with_context(context_fn))
            }
        }
    }
}

impl<R> ResultWithContext<R> for Option<R> {
    fn with_context<S, F>(self, context_fn: F) -> Result<R>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        match self {
            Some(val) => Ok(val),
            None => Err(ChartSpecError::internal(context_fn().into())),
        }
    }
}

impl From<serde_json::Error> for ChartSpecError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerdeJsonError(err, Default::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_levels_stack() {
        let err = ChartSpecError::configuration("missing column")
            .with_context(|| "resolving role x")
            .with_context(|| "building scatter spec");
        let message = err.to_string();
        assert!(message.contains("Context[0]: resolving role x"));
        assert!(message.contains("Context[1]: building scatter spec"));
    }

    #[test]
    fn test_duplicate_preserves_variant_and_context() {
        let err = ChartSpecError::specification("dangling scale").with_context(|| "validate");
        let dup = err.duplicate();
        assert!(matches!(dup, ChartSpecError::SpecificationError(..)));
        assert_eq!(dup.to_string(), err.to_string());
    }
}
