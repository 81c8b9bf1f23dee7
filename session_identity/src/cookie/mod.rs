mod reader;
mod source;

pub use reader::lookup;
pub use source::CookieSource;
