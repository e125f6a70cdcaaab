//! The two line-oriented grammars exchanged with the external miner: the
//! directed LG format and the undirected G format. Writers encode a corpus
//! for the miner, readers decode the miner's result stream back into
//! [`crate::frequent::FrequentGraph`]s.

pub mod g;
pub mod lg;

pub use g::{GReader, GWriter};
pub use lg::{LgReader, LgWriter};

/// Stand-in token for blank node labels. The grammars are whitespace
/// delimited and cannot carry an empty field.
pub const BLANK_LABEL_SENTINEL: &str = "__blank__";

pub(crate) fn wire_label(label: &str) -> &str {
    if label.trim().is_empty() {
        BLANK_LABEL_SENTINEL
    } else {
        label
    }
}
