//! Form type extensions

mod builder;
mod date_time;
mod pattern;
mod view;

pub mod errors;

pub use builder::{FormBuilder, FormEvent, FormEvents, FormType, FormTypeExtension};
pub use date_time::{
    divider, normalize_submitted, DateTimeOptions, DateTimeTypeExtension, Widget, DEFAULT_FORMAT,
    NORMALIZED_FORMAT, SUBMITTED_FORMAT,
};
pub use pattern::format_pattern;
pub use view::FormView;
