//! Form builder and submission events

use std::fmt;

use serde_json::Value;

use super::{errors::FormError, view::FormView};

/// Built-in form types an extension can target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormType {
    /// Date and time field
    DateTime,
}

/// Points in the submission cycle listeners can attach to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormEvents {
    /// Before the submitted data is normalised
    PreSubmit,

    /// After the pre-submit listeners have run, with the final data
    PostSubmit,
}

/// The data travelling through a submission event
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormEvent {
    data: Option<String>,
}

impl FormEvent {
    /// Creates an event carrying `data`
    pub fn new(data: Option<String>) -> Self {
        Self { data }
    }

    /// The current data
    pub fn data(&self) -> Option<&str> {
        self.data.as_deref()
    }

    /// Replaces the data
    pub fn set_data(&mut self, data: impl Into<String>) {
        self.data = Some(data.into());
    }

    /// Consumes the event, returning its data
    pub fn into_data(self) -> Option<String> {
        self.data
    }
}

type Listener = Box<dyn Fn(&mut FormEvent) + Send + Sync>;

/// Collects the event listeners of a single form field
#[derive(Default)]
pub struct FormBuilder {
    listeners: Vec<(FormEvents, Listener)>,
}

impl fmt::Debug for FormBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormBuilder")
            .field(
                "listeners",
                &self.listeners.iter().map(|(e, _)| e).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl FormBuilder {
    /// Creates a builder without listeners
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a listener for `event`
    pub fn add_event_listener<F>(&mut self, event: FormEvents, listener: F)
    where
        F: Fn(&mut FormEvent) + Send + Sync + 'static,
    {
        self.listeners.push((event, Box::new(listener)));
    }

    /// Number of listeners registered for `event`
    pub fn listener_count(&self, event: FormEvents) -> usize {
        self.listeners.iter().filter(|(e, _)| *e == event).count()
    }

    /// Runs the listeners of `event` in registration order
    pub fn dispatch(&self, event: FormEvents, form_event: &mut FormEvent) {
        self.listeners
            .iter()
            .filter(|(e, _)| *e == event)
            .for_each(|(_, listener)| listener(form_event));
    }

    /// Submits raw data, returning it as seen after the submit listeners
    pub fn submit(&self, data: Option<&str>) -> Option<String> {
        let mut event = FormEvent::new(data.map(String::from));

        self.dispatch(FormEvents::PreSubmit, &mut event);
        self.dispatch(FormEvents::PostSubmit, &mut event);

        event.into_data()
    }
}

/// Adds behaviour to an existing form type
pub trait FormTypeExtension {
    /// Resolved options of the extended type
    type Options;

    /// The type being extended
    fn extended_type(&self) -> FormType;

    /// Resolves `overrides` against the defaults.
    ///
    /// # Errors
    /// [`FormError::InvalidOptions`] for unknown options or disallowed values.
    fn configure_options(&self, overrides: Value) -> Result<Self::Options, FormError>;

    /// Registers listeners on the field's builder
    fn build_form(&self, builder: &mut FormBuilder, options: &Self::Options);

    /// Populates the view variables of the field
    fn build_view(&self, view: &mut FormView, options: &Self::Options) -> Result<(), FormError>;
}
