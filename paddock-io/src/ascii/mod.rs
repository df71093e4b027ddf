mod ascii_error;
pub use self::ascii_error::*;

mod ascii_format_util;
pub use self::ascii_format_util::*;

mod ascii_metadata;
pub use self::ascii_metadata::*;

mod ascii_reader;
pub use self::ascii_reader::*;

mod ascii_writer;
pub use self::ascii_writer::*;

mod raw_reader;
pub(crate) use self::raw_reader::*;

mod raw_writer;
pub use self::raw_writer::AsciiFormat;
pub(crate) use self::raw_writer::*;

#[cfg(test)]
mod test_util;
#[cfg(test)]
pub(crate) use self::test_util::*;
