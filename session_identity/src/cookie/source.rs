use std::borrow::Cow;

use http::HeaderMap;
use http::header::COOKIE;

/// Read-only access to a serialized cookie store (`name1=value1; name2=value2`).
///
/// Implementors hand back the store as it currently stands. Returning `None`
/// means there is no store at all, which readers treat exactly like an empty
/// one.
pub trait CookieSource {
    fn cookie_header(&self) -> Option<Cow<'_, str>>;
}

impl CookieSource for str {
    fn cookie_header(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(self))
    }
}

impl CookieSource for String {
    fn cookie_header(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(self.as_str()))
    }
}

impl<T: CookieSource + ?Sized> CookieSource for &T {
    fn cookie_header(&self) -> Option<Cow<'_, str>> {
        (**self).cookie_header()
    }
}

impl<T: CookieSource> CookieSource for Option<T> {
    fn cookie_header(&self) -> Option<Cow<'_, str>> {
        self.as_ref().and_then(|inner| inner.cookie_header())
    }
}

/// Request headers as a cookie store.
///
/// HTTP/2 clients may split cookies across several `Cookie` lines; those are
/// joined with `"; "` in arrival order. Browsers send UTF-8 cookie values
/// as raw bytes, so a line is read as UTF-8 and skipped only when it is not
/// valid UTF-8.
impl CookieSource for HeaderMap {
    fn cookie_header(&self) -> Option<Cow<'_, str>> {
        let mut lines = self.get_all(COOKIE).iter().filter_map(|value| {
            std::str::from_utf8(value.as_bytes())
                .inspect_err(|e| tracing::debug!("Skipping unreadable cookie header: {}", e))
                .ok()
        });

        let first = lines.next()?;
        match lines.next() {
            None => Some(Cow::Borrowed(first)),
            Some(second) => {
                let mut joined = format!("{first}; {second}");
                for line in lines {
                    joined.push_str("; ");
                    joined.push_str(line);
                }
                Some(Cow::Owned(joined))
            }
        }
    }
}
