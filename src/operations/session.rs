use std::collections::HashMap;

use tracing::{debug, warn};

use super::build_outline::build_outline;
use super::validate::ValidateParameters;
use crate::error::{Result, ValidationError};
use crate::geometry::{Mode, ParameterField, SkiOutline, SkiParameters};

/// Raw, possibly malformed text for each parameter field, as typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditingValues {
    raw: HashMap<ParameterField, String>,
}

impl EditingValues {
    /// Seeds every field with the formatted value from `params`.
    #[must_use]
    pub fn from_parameters(params: &SkiParameters) -> Self {
        let raw = ParameterField::ALL
            .iter()
            .map(|&field| (field, field.get(params).to_string()))
            .collect();
        Self { raw }
    }

    /// Returns the raw text of `field`.
    #[must_use]
    pub fn get(&self, field: ParameterField) -> &str {
        self.raw.get(&field).map_or("", String::as_str)
    }

    fn set(&mut self, field: ParameterField, raw: String) {
        self.raw.insert(field, raw);
    }

    /// Parses every field into a parameter record.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidNumber` for the first field whose
    /// text is not a number.
    pub fn parse(&self) -> Result<SkiParameters> {
        let mut params = SkiParameters::default();
        for field in ParameterField::ALL {
            let raw = self.get(field);
            let value = raw
                .trim()
                .parse::<f64>()
                .map_err(|_| ValidationError::InvalidNumber {
                    parameter: field.name(),
                    raw: raw.to_owned(),
                })?;
            field.set(&mut params, value);
        }
        Ok(params)
    }
}

/// Editing session over a parameter set.
///
/// Keeps three separate states: the `editing` text as typed, the
/// `committed` parameters from the last successful commit (cleared when a
/// commit fails), and the `last_known_good` parameters that outlines fall
/// back to while nothing valid is committed.
///
/// A mode switch is staged in `pending_mode` and only becomes the active
/// mode through a successful commit, so committed and last known good
/// parameters are always valid for the active mode.
#[derive(Debug, Clone)]
pub struct ParameterSession {
    mode: Mode,
    pending_mode: Mode,
    editing: EditingValues,
    committed: Option<SkiParameters>,
    last_known_good: SkiParameters,
}

impl Default for ParameterSession {
    fn default() -> Self {
        let params = SkiParameters::default();
        Self {
            mode: Mode::default(),
            pending_mode: Mode::default(),
            editing: EditingValues::from_parameters(&params),
            committed: Some(params),
            last_known_good: params,
        }
    }
}

impl ParameterSession {
    /// Starts a session from a known-valid parameter set.
    ///
    /// # Errors
    ///
    /// Returns the validation error if `params` is not valid for `mode`.
    pub fn new(params: SkiParameters, mode: Mode) -> Result<Self> {
        ValidateParameters::new(&params, mode).execute()?;
        Ok(Self {
            mode,
            pending_mode: mode,
            editing: EditingValues::from_parameters(&params),
            committed: Some(params),
            last_known_good: params,
        })
    }

    /// Returns the active mode outlines are built in.
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns the mode the next commit validates against.
    #[must_use]
    pub fn pending_mode(&self) -> Mode {
        self.pending_mode
    }

    /// Stages a mode switch. It takes effect on the next successful commit.
    pub fn set_mode(&mut self, mode: Mode) {
        self.pending_mode = mode;
    }

    /// Replaces the raw text of one field.
    pub fn edit(&mut self, field: ParameterField, raw: impl Into<String>) {
        self.editing.set(field, raw.into());
    }

    /// Returns the raw text of one field.
    #[must_use]
    pub fn raw(&self, field: ParameterField) -> &str {
        self.editing.get(field)
    }

    /// Returns the text being edited.
    #[must_use]
    pub fn editing(&self) -> &EditingValues {
        &self.editing
    }

    /// Returns the committed parameters, if the last commit succeeded.
    #[must_use]
    pub fn committed(&self) -> Option<&SkiParameters> {
        self.committed.as_ref()
    }

    /// Returns the last parameters that passed validation.
    #[must_use]
    pub fn last_known_good(&self) -> &SkiParameters {
        &self.last_known_good
    }

    /// Parses and validates the editing text.
    ///
    /// Validation runs against the pending mode. On success the result
    /// becomes both committed and last known good, and the pending mode
    /// becomes active. On failure the committed state is cleared while the
    /// active mode and last known good are kept.
    ///
    /// # Errors
    ///
    /// Returns the parse or validation error.
    pub fn commit(&mut self) -> Result<SkiParameters> {
        let outcome = self.editing.parse().and_then(|params| {
            ValidateParameters::new(&params, self.pending_mode).execute()?;
            Ok(params)
        });

        match outcome {
            Ok(params) => {
                debug!(mode = ?self.pending_mode, "committed ski parameters");
                self.mode = self.pending_mode;
                self.committed = Some(params);
                self.last_known_good = params;
                Ok(params)
            }
            Err(err) => {
                warn!(error = %err, "rejected ski parameters, keeping last known good");
                // last_known_good was validated for the active mode, not
                // necessarily for the pending one.
                self.committed = None;
                Err(err)
            }
        }
    }

    /// Discards edits and any staged mode switch, restoring the text from
    /// the last known good parameters.
    pub fn revert(&mut self) {
        self.pending_mode = self.mode;
        self.editing = EditingValues::from_parameters(&self.last_known_good);
        self.committed = Some(self.last_known_good);
    }

    /// Returns the parameters outlines are built from.
    #[must_use]
    pub fn effective(&self) -> &SkiParameters {
        self.committed.as_ref().unwrap_or(&self.last_known_good)
    }

    /// Builds the outline for the effective parameters.
    #[must_use]
    pub fn outline(&self) -> SkiOutline {
        build_outline(self.effective(), self.mode)
    }
}
