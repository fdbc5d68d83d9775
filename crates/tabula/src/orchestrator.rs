//! Orchestration: pick the reader/writer pair for a format selection and run it.
//!
//! `convert` parses with the input format's reader, rejects an empty matrix,
//! and serializes with the output format's writer. `swap` exchanges the two
//! selections, degrading write-only formats on the way.

use crate::converter::{ConvertError, Role};
use crate::format::Format;
use crate::options::ConvertOptions;
use crate::registry::Registry;
use crate::surface::Surface;
use std::sync::Arc;

/// Convert `text` from `input` to `output` using the adapters in `registry`.
///
/// Nothing is returned on failure; callers keep whatever output they had.
pub fn convert(
    registry: &Registry,
    text: &str,
    input: Format,
    output: Format,
    options: &ConvertOptions,
) -> Result<String, ConvertError> {
    let reader = registry
        .reader(input)
        .ok_or(ConvertError::UnsupportedFormat {
            format: input,
            role: Role::Input,
        })?;
    let writer = registry
        .writer(output)
        .ok_or(ConvertError::UnsupportedFormat {
            format: output,
            role: Role::Output,
        })?;

    let matrix = reader.read(text)?;
    if matrix.is_empty() {
        return Err(ConvertError::EmptyInput);
    }

    let rendered = writer.write(&matrix, options)?;
    tracing::debug!(
        %input,
        %output,
        rows = matrix.len(),
        bytes = rendered.len(),
        "converted"
    );
    Ok(rendered)
}

/// Exchange input and output on `surface`.
///
/// An output the surface cannot parse becomes `surface.fallback_input`
/// instead. If the new output then equals the new input (or is not an
/// output of the surface), it is replaced by the first format in
/// `surface.tie_break` that differs from the new input.
pub fn swap(surface: &Surface, input: Format, output: Format) -> (Format, Format) {
    let new_input = if surface.accepts_input(output) {
        output
    } else {
        surface.fallback_input
    };

    let mut new_output = input;
    let tied = new_output == new_input || !surface.accepts_output(new_output);
    if tied {
        if let Some(format) = surface.tie_break.iter().copied().find(|f| *f != new_input) {
            new_output = format;
        }
    }

    tracing::debug!(
        surface = surface.name,
        %input,
        %output,
        %new_input,
        %new_output,
        tied,
        "swapped formats"
    );
    (new_input, new_output)
}

/// A format selection on one surface, bound to a registry.
#[derive(Clone)]
pub struct Orchestrator {
    registry: Arc<Registry>,
    surface: Surface,
    input: Format,
    output: Format,
    options: ConvertOptions,
}

impl Orchestrator {
    /// Create an orchestrator at the surface's default selection.
    pub fn new(registry: Arc<Registry>, surface: Surface) -> Self {
        Self {
            registry,
            surface,
            input: surface.default_input,
            output: surface.default_output,
            options: ConvertOptions::default(),
        }
    }

    /// Set the options passed to writers.
    pub fn with_options(mut self, options: ConvertOptions) -> Self {
        self.options = options;
        self
    }

    /// Select the input format. Fails if the surface does not offer it.
    pub fn select_input(&mut self, format: Format) -> Result<(), ConvertError> {
        if !self.surface.accepts_input(format) {
            return Err(ConvertError::UnsupportedFormat {
                format,
                role: Role::Input,
            });
        }
        self.input = format;
        Ok(())
    }

    /// Select the output format. Fails if the surface does not offer it.
    pub fn select_output(&mut self, format: Format) -> Result<(), ConvertError> {
        if !self.surface.accepts_output(format) {
            return Err(ConvertError::UnsupportedFormat {
                format,
                role: Role::Output,
            });
        }
        self.output = format;
        Ok(())
    }

    pub fn input(&self) -> Format {
        self.input
    }

    pub fn output(&self) -> Format {
        self.output
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Convert `text` with the current selection.
    pub fn convert(&self, text: &str) -> Result<String, ConvertError> {
        convert(&self.registry, text, self.input, self.output, &self.options)
    }

    /// Swap input and output, returning the new selection.
    pub fn swap(&mut self) -> (Format, Format) {
        let (input, output) = swap(&self.surface, self.input, self.output);
        self.input = input;
        self.output = output;
        (input, output)
    }
}
