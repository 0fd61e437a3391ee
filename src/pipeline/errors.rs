//! pipeline::errors — umbrella error for end-to-end runs.
//!
//! Every subtree error converts into [`PipelineError`] via `From`, so
//! orchestration code can use `?` across stages.

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

use crate::{
    evaluation::errors::EvalError, filtering::errors::FilterError, model::errors::ModelError,
    telemetry::errors::TelemetryError,
};

#[derive(Debug, Clone, PartialEq)]
pub enum PipelineError {
    // ---- Stage errors ----
    Telemetry(TelemetryError),
    Filter(FilterError),
    Model(ModelError),
    Eval(EvalError),

    // ---- Anyhow catchall ----
    Anyhow(String),
}

pub type PipelineResult<T> = Result<T, PipelineError>;

impl std::error::Error for PipelineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PipelineError::Telemetry(err) => Some(err),
            PipelineError::Filter(err) => Some(err),
            PipelineError::Model(err) => Some(err),
            PipelineError::Eval(err) => Some(err),
            PipelineError::Anyhow(_) => None,
        }
    }
}

impl std::fmt::Display for PipelineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PipelineError::Telemetry(err) => write!(f, "Pipeline Error (load): {err}"),
            PipelineError::Filter(err) => write!(f, "Pipeline Error (filter): {err}"),
            PipelineError::Model(err) => write!(f, "Pipeline Error (fit): {err}"),
            PipelineError::Eval(err) => write!(f, "Pipeline Error (evaluate): {err}"),
            PipelineError::Anyhow(msg) => write!(f, "Pipeline Error: {msg}"),
        }
    }
}

impl From<TelemetryError> for PipelineError {
    fn from(err: TelemetryError) -> Self {
        PipelineError::Telemetry(err)
    }
}

impl From<FilterError> for PipelineError {
    fn from(err: FilterError) -> Self {
        PipelineError::Filter(err)
    }
}

impl From<ModelError> for PipelineError {
    fn from(err: ModelError) -> Self {
        PipelineError::Model(err)
    }
}

impl From<EvalError> for PipelineError {
    fn from(err: EvalError) -> Self {
        PipelineError::Eval(err)
    }
}

impl From<anyhow::Error> for PipelineError {
    fn from(err: anyhow::Error) -> Self {
        PipelineError::Anyhow(err.to_string())
    }
}

#[cfg(feature = "python-bindings")]
impl From<PipelineError> for PyErr {
    fn from(err: PipelineError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    // Purpose
    // -------
    // Verify stage errors convert with `?` and keep their source.
    fn stage_errors_convert_and_chain() {
        fn fails() -> PipelineResult<()> {
            crate::model::fitter::FitOptions::new(0)?;
            Ok(())
        }

        let err = fails().unwrap_err();

        assert_eq!(err, PipelineError::Model(ModelError::InvalidDegree { degree: 0 }));
        assert!(err.to_string().starts_with("Pipeline Error (fit): "));
        assert!(err.source().is_some());
    }

    #[test]
    // Purpose
    // -------
    // Verify the anyhow catch-all keeps the message.
    fn anyhow_errors_become_messages() {
        let err: PipelineError = anyhow::anyhow!("disk on fire").into();

        assert_eq!(err, PipelineError::Anyhow("disk on fire".to_string()));
        assert!(err.source().is_none());
    }
}
