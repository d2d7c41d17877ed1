//! Date-time picker support for the date-time form type

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::trace;

use super::{
    builder::{FormBuilder, FormEvents, FormType, FormTypeExtension},
    errors::FormError,
    pattern::format_pattern,
    view::FormView,
};

/// Default display pattern: the HTML5 date format followed by the time
pub const DEFAULT_FORMAT: &str = "yyyy-MM-dd HH:mm:ss";

/// Format the date-time picker submits (`25/12/2023 10:30`)
pub const SUBMITTED_FORMAT: &str = "%d/%m/%Y %H:%M";

/// Sortable format handed to the rest of the form (`2023-12-25 10:30:00`)
pub const NORMALIZED_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// How the field is rendered
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Widget {
    /// One free-text input
    #[default]
    SingleText,

    /// Separate selectors per date part
    Choice,
}

/// Resolved options of a date-time field
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct DateTimeOptions {
    /// ICU display pattern
    pub format: String,

    /// Whether the date-time picker is enabled
    pub datetimepicker: bool,

    /// How the field is rendered
    pub widget: Widget,

    /// Latest selectable date
    pub maximum_date: Option<NaiveDateTime>,

    /// Earliest selectable date
    pub minimum_date: Option<NaiveDateTime>,
}

impl Default for DateTimeOptions {
    fn default() -> Self {
        Self {
            format: DEFAULT_FORMAT.to_string(),
            datetimepicker: true,
            widget: Widget::SingleText,
            maximum_date: None,
            minimum_date: None,
        }
    }
}

impl DateTimeOptions {
    /// Whether submissions go through the picker's text format
    pub fn uses_picker(&self) -> bool {
        self.widget == Widget::SingleText && self.datetimepicker
    }
}

/// Rewrites picker input (`d/m/Y H:i`) to the sortable `Y-m-d H:i:s` form.
///
/// Returns `None` for input that does not match the picker format. Dates
/// that do not exist, such as `31/02/2023 10:30`, are rejected instead of
/// rolling over into the following month.
pub fn normalize_submitted(data: &str) -> Option<String> {
    match NaiveDateTime::parse_from_str(data, SUBMITTED_FORMAT) {
        Ok(date) => Some(date.format(NORMALIZED_FORMAT).to_string()),
        Err(err) => {
            trace!("leaving date-time input {data:?} as is: {err}");
            None
        }
    }
}

/// Divider the picker shows between date parts
pub fn divider(format: &str) -> char {
    if format.contains('-') {
        '-'
    } else {
        '/'
    }
}

/// Adds date-time picker parsing and view variables to date-time fields
#[derive(Debug, Default, Clone, Copy)]
pub struct DateTimeTypeExtension;

impl FormTypeExtension for DateTimeTypeExtension {
    type Options = DateTimeOptions;

    fn extended_type(&self) -> FormType {
        FormType::DateTime
    }

    fn configure_options(&self, overrides: Value) -> Result<DateTimeOptions, FormError> {
        if overrides.is_null() {
            return Ok(DateTimeOptions::default());
        }

        Ok(serde_json::from_value(overrides)?)
    }

    fn build_form(&self, builder: &mut FormBuilder, options: &DateTimeOptions) {
        if !options.uses_picker() {
            return;
        }

        builder.add_event_listener(FormEvents::PreSubmit, |event| {
            let normalized = match event.data() {
                None | Some("") => return,
                Some(data) => normalize_submitted(data),
            };

            if let Some(normalized) = normalized {
                event.set_data(normalized);
            }
        });
    }

    fn build_view(&self, view: &mut FormView, options: &DateTimeOptions) -> Result<(), FormError> {
        let format_bound = |bound: &Option<NaiveDateTime>| {
            bound
                .as_ref()
                .map(|date| format_pattern(date, &options.format))
                .transpose()
        };

        view.set("maximum_date", format_bound(&options.maximum_date)?);
        view.set("minimum_date", format_bound(&options.minimum_date)?);
        view.set("format", options.format.as_str());
        view.set("divider", divider(&options.format).to_string());
        view.set("datetimepicker", options.datetimepicker);

        Ok(())
    }
}
