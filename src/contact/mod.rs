pub mod io;
pub mod normalize;
pub mod record;

pub use io::{
    default_output_path, read_contacts, read_contacts_from, write_contacts, write_contacts_to,
    DEFAULT_INPUT_FILE, DEFAULT_OUTPUT_FILE,
};
pub use normalize::{is_missing, normalize, NormalizedContact};
pub use record::{Attribute, ContactRecord, ContactTable};
