//! Internal domain modules for the nbstrip core library.
//!
//! All public types from these modules are re-exported at the crate root
//! with `#[doc(inline)]`; import from there in preference to this module.

pub mod backup;
pub mod error;
pub mod notebook;
pub mod stripper;

#[doc(inline)]
pub use backup::{backup_path, create_backup};
#[doc(inline)]
pub use error::{NbStripError, Result};
#[doc(inline)]
pub use notebook::{read_notebook, write_notebook};
#[doc(inline)]
pub use stripper::{process_file, strip_widgets, ProcessOutcome, StripOutcome, WIDGETS_KEY};
